//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use jsonstyle::{Category, DEFAULT_INDENT, DEFAULT_WIDTH};

/// Colored JSON pretty-printing and word wrapping.
#[derive(Debug, Parser)]
#[command(name = "jsonstyle", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pretty-print JSON from a file or stdin
    Pretty(PrettyArgs),
    /// Wrap text at a fixed width without splitting words
    Wrap(WrapArgs),
    /// Print the stylesheet for the configured colors
    Css(ColorArgs),
}

#[derive(Debug, Args)]
pub struct PrettyArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Spaces per nesting level
    #[arg(long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Output markup
    #[arg(long, value_enum, default_value_t = Format::Term)]
    pub format: Format,

    #[command(flatten)]
    pub colors: ColorArgs,
}

#[derive(Debug, Args)]
pub struct WrapArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Maximum characters per line
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Text placed between lines
    #[arg(long, default_value = "\n", hide_default_value = true)]
    pub separator: String,
}

#[derive(Debug, Args)]
pub struct ColorArgs {
    /// Color file with category keys (.json, .yaml or .yml)
    #[arg(long, value_name = "FILE")]
    pub colors: Option<PathBuf>,

    /// Set one category's color, e.g. `--set nullValue=red`
    #[arg(long = "set", value_name = "KEY=COLOR", value_parser = parse_assignment)]
    pub set: Vec<(Category, String)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Plain JSON
    Plain,
    /// HTML with an embedded stylesheet
    Html,
    /// Colored terminal output
    Term,
}

/// Parses `KEY=COLOR` where KEY is a category key.
fn parse_assignment(s: &str) -> Result<(Category, String), String> {
    let (key, color) = s
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=COLOR, got '{s}'"))?;
    let category = key.trim().parse::<Category>().map_err(|e| e.to_string())?;
    let color = color.trim();
    if color.is_empty() {
        return Err(format!("missing color for '{}'", key.trim()));
    }
    Ok((category, color.to_string()))
}
