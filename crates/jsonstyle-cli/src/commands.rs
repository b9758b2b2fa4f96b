//! Subcommand handlers.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use jsonstyle::{
    wrap_str, AdaptiveColors, ColorMode, ColorOverrides, JsonPrettyPrinter,
    StyleManager, StyleSheet, WrapOptions,
};

use crate::args::{ColorArgs, Command, Format, PrettyArgs, WrapArgs};

/// Message printed when `pretty` is given invalid JSON.
pub const SYNTAX_ERROR_MESSAGE: &str = "JSON syntax error.";

pub fn run(command: Command, mode: ColorMode) -> Result<ExitCode> {
    match command {
        Command::Pretty(args) => pretty(args, mode),
        Command::Wrap(args) => wrap(args),
        Command::Css(args) => css(&args, mode),
    }
}

fn pretty(args: PrettyArgs, mode: ColorMode) -> Result<ExitCode> {
    let input = read_input(args.file.as_deref())?;
    match render_pretty(&input, &args, mode)? {
        Some(out) => {
            if !out.is_empty() {
                println!("{out}");
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("{SYNTAX_ERROR_MESSAGE}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Renders `input` in the requested format, or `None` if it is not JSON.
pub fn render_pretty(input: &str, args: &PrettyArgs, mode: ColorMode) -> Result<Option<String>> {
    let colors = resolve_colors(&args.colors, mode)?;
    let styles = StyleManager::with_colors(StyleSheet::new(), &colors)?;

    let printer = match args.format {
        Format::Plain => JsonPrettyPrinter::new(),
        Format::Html => JsonPrettyPrinter::html(),
        Format::Term => JsonPrettyPrinter::term(styles.term_styles()),
    }
    .with_indent(args.indent);

    let body = match printer.format(input) {
        Ok(body) => body,
        Err(err) => {
            log::debug!("{err}");
            return Ok(None);
        }
    };

    Ok(Some(match args.format {
        Format::Html => format!(
            "<style>\n{}</style>\n<pre>{}</pre>",
            styles.installer().to_css(),
            body
        ),
        Format::Plain | Format::Term => body,
    }))
}

fn wrap(args: WrapArgs) -> Result<ExitCode> {
    let input = read_input(args.file.as_deref())?;
    let options = WrapOptions::new()
        .width(args.width)
        .line_separator(args.separator);
    let out = wrap_str(&input, &options);
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
    Ok(ExitCode::SUCCESS)
}

fn css(args: &ColorArgs, mode: ColorMode) -> Result<ExitCode> {
    print!("{}", stylesheet(args, mode)?);
    Ok(ExitCode::SUCCESS)
}

/// The stylesheet a style manager installs for the configured colors.
pub fn stylesheet(args: &ColorArgs, mode: ColorMode) -> Result<String> {
    let colors = resolve_colors(args, mode)?;
    let styles = StyleManager::with_colors(StyleSheet::new(), &colors)?;
    Ok(styles.into_installer().to_css())
}

/// Layers the adaptive defaults, the `--colors` file and `--set` flags.
pub fn resolve_colors(args: &ColorArgs, mode: ColorMode) -> Result<ColorOverrides> {
    let mut colors = AdaptiveColors::default().for_mode(mode).clone();
    if let Some(path) = &args.colors {
        let file = ColorOverrides::from_path(path)
            .with_context(|| format!("failed to load colors from {}", path.display()))?;
        colors = colors.merged(&file);
    }
    for (category, color) in &args.set {
        colors = colors.set(*category, color.clone());
    }
    colors
        .validate()
        .context("invalid color in --colors or --set")?;
    Ok(colors)
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonstyle::Category;
    use std::io::Write;

    fn color_args() -> ColorArgs {
        ColorArgs {
            colors: None,
            set: Vec::new(),
        }
    }

    fn pretty_args(format: Format) -> PrettyArgs {
        PrettyArgs {
            file: None,
            indent: 2,
            format,
            colors: color_args(),
        }
    }

    #[test]
    fn test_resolve_colors_defaults_per_mode() {
        let light = resolve_colors(&color_args(), ColorMode::Light).unwrap();
        assert_eq!(light.resolve(Category::PropertyName), "blue");
        let dark = resolve_colors(&color_args(), ColorMode::Dark).unwrap();
        assert_eq!(dark.resolve(Category::PropertyName), "lightskyblue");
    }

    #[test]
    fn test_resolve_colors_file_then_flags() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"nullValue": "gray", "stringValue": "teal"}}"#).unwrap();

        let args = ColorArgs {
            colors: Some(file.path().to_path_buf()),
            set: vec![(Category::NullValue, "black".to_string())],
        };
        let colors = resolve_colors(&args, ColorMode::Light).unwrap();
        assert_eq!(colors.resolve(Category::StringValue), "teal");
        assert_eq!(colors.resolve(Category::NullValue), "black");
        assert_eq!(colors.resolve(Category::NumberValue), "darkorange");
    }

    #[test]
    fn test_resolve_colors_missing_file() {
        let args = ColorArgs {
            colors: Some("/no/such/colors.yaml".into()),
            set: Vec::new(),
        };
        let err = resolve_colors(&args, ColorMode::Light).unwrap_err();
        assert!(format!("{err:#}").contains("/no/such/colors.yaml"));
    }

    #[test]
    fn test_resolve_colors_rejects_rule_breaking_color() {
        let args = ColorArgs {
            colors: None,
            set: vec![(Category::NullValue, "red;} body {".to_string())],
        };
        assert!(resolve_colors(&args, ColorMode::Light).is_err());
    }

    #[test]
    fn test_resolve_colors_rejects_markup_in_flag() {
        let args = ColorArgs {
            colors: None,
            set: vec![(
                Category::NullValue,
                "red</style><script>alert(1)</script>".to_string(),
            )],
        };
        let err = resolve_colors(&args, ColorMode::Light).unwrap_err();
        assert!(format!("{err:#}").contains("nullValue"));

        let pretty = PrettyArgs {
            colors: args,
            ..pretty_args(Format::Html)
        };
        assert!(render_pretty("[null]", &pretty, ColorMode::Light).is_err());
    }

    #[test]
    fn test_resolve_colors_rejects_bad_file_value() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"nullValue": "red;}} body {{display:none"}}"#).unwrap();

        let args = ColorArgs {
            colors: Some(file.path().to_path_buf()),
            set: Vec::new(),
        };
        let err = resolve_colors(&args, ColorMode::Light).unwrap_err();
        assert!(format!("{err:#}").contains("invalid color for nullValue"));
    }

    #[test]
    fn test_stylesheet_lists_all_categories() {
        let css = stylesheet(&color_args(), ColorMode::Light).unwrap();
        assert_eq!(css.lines().count(), 5);
        assert!(css.contains(".goog-jsonprettyprinter-propertyvalue-boolean {color: darkviolet;}"));
    }

    #[test]
    fn test_render_pretty_plain() {
        let out = render_pretty(r#"{"key": "value"}"#, &pretty_args(Format::Plain), ColorMode::Light)
            .unwrap();
        assert_eq!(out.as_deref(), Some("{\n  \"key\": \"value\"\n}"));
    }

    #[test]
    fn test_render_pretty_html_embeds_stylesheet() {
        let out = render_pretty("[true]", &pretty_args(Format::Html), ColorMode::Light)
            .unwrap()
            .unwrap();
        assert!(out.starts_with("<style>\n"));
        assert!(out.contains("{color: darkviolet;}"));
        assert!(out.contains("<pre>[\n  <span class=\"goog-jsonprettyprinter-propertyvalue-boolean\">true</span>\n]</pre>"));
    }

    #[test]
    fn test_render_pretty_invalid_json() {
        let out = render_pretty("{nope", &pretty_args(Format::Plain), ColorMode::Light).unwrap();
        assert!(out.is_none());
    }
}
