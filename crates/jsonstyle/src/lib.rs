//! # jsonstyle
//!
//! Word wrapping and category-colored JSON pretty-printing.
//!
//! The crate has two independent halves:
//!
//! - [`wrap`]: reflows text into lines of a fixed width without splitting words.
//! - [`StyleManager`]: keeps one color per JSON token [`Category`] and mirrors
//!   each color into a style rule installed in a presentation layer
//!   ([`StyleInstaller`]).
//!
//! Around the manager sit a [`JsonPrettyPrinter`] that emits the classed
//! markup those rules target, [`ColorOverrides`] for configuring colors, and
//! [`JsonStyleApp`], the state of an interactive styling view.
//!
//! ## Quick start
//!
//! ```rust
//! use jsonstyle::{ColorOverrides, JsonPrettyPrinter, StyleManager, StyleSheet};
//!
//! let colors = ColorOverrides::new().property_name("blue").null_value("red");
//! let mut styles = StyleManager::with_colors(StyleSheet::new(), &colors).unwrap();
//! styles.set_string_value_color("darkgreen");
//!
//! let css = styles.installer().to_css();
//! assert!(css.contains(".goog-jsonprettyprinter-propertyname {color: blue;}"));
//!
//! let html = JsonPrettyPrinter::html().format(r#"{"ok": null}"#).unwrap();
//! assert!(html.contains("goog-jsonprettyprinter-propertyvalue-null"));
//! ```
//!
//! ## Wrapping
//!
//! ```rust
//! use jsonstyle::{wrap, WrapOptions};
//!
//! let text = "Hi, guys, this is Eddie your shipboard computer";
//! let wrapped = wrap(Some(text), &WrapOptions::new().width(30)).unwrap();
//! assert!(wrapped.lines().all(|line| line.trim_end().chars().count() <= 30));
//! ```

pub mod app;
pub mod colors;
pub mod pretty;
pub mod style;
mod util;
pub mod wrap;

pub use app::{JsonStyleApp, SYNTAX_ERROR_HTML};
pub use colors::{
    detect_color_mode, is_safe_color, reset_color_mode_detector, set_color_mode_detector,
    AdaptiveColors, ColorMode, ColorModeDetector, ColorOverrides, ConfigError, DEFAULT_COLOR,
};
pub use pretty::{JsonPrettyPrinter, Markup, PrettyError, TermStyles, DEFAULT_INDENT};
pub use style::{
    Category, InstallerError, RuleId, StyleError, StyleInstaller, StyleManager, StyleRule,
    StyleSheet, UnknownCategory,
};
pub use util::{escape_html, parse_rgb, rgb_to_ansi256, rgb_to_color};
pub use wrap::{chunks, wrap, wrap_str, WrapError, WrapOptions, DEFAULT_LINE_SEPARATOR, DEFAULT_WIDTH};
