//! `jsonstyle` command line tool.

mod args;
mod commands;

use std::process::ExitCode;

use clap::Parser;

use crate::args::Cli;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let mode = jsonstyle::detect_color_mode();
    log::debug!("color mode: {:?}", mode);

    match commands::run(cli.command, mode) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
