//! JSON pretty-printing with per-category markup.
//!
//! [`JsonPrettyPrinter`] lays JSON out one member per line and marks every
//! property name and scalar value with its [`Category`]:
//!
//! | Markup | Property names and values |
//! |--------|---------------------------|
//! | [`Markup::Plain`] | Unchanged |
//! | [`Markup::Html`] | Wrapped in `<span class="...">` using [`Category::css_class`] |
//! | [`Markup::Term`] | Colored with the category's [`console::Style`] |
//!
//! The HTML classes are the ones a [`StyleManager`](crate::StyleManager)
//! installs rules for, so changing a category's color restyles the output.
//!
//! # Example
//!
//! ```rust
//! use jsonstyle::JsonPrettyPrinter;
//!
//! let printer = JsonPrettyPrinter::new();
//! assert_eq!(printer.format(r#"{"key": "value"}"#).unwrap(), "{\n  \"key\": \"value\"\n}");
//! assert_eq!(printer.format("[null, false, 35]").unwrap(), "[\n  null,\n  false,\n  35\n]");
//! ```

use std::fmt::Write as _;

use console::Style;
use serde_json::Value;
use thiserror::Error;

use crate::style::Category;
use crate::util::escape_html;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Error returned by [`JsonPrettyPrinter::format`].
#[derive(Debug, Error)]
pub enum PrettyError {
    #[error("JSON syntax error: {0}")]
    Syntax(#[from] serde_json::Error),
}

/// Terminal styles for each category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermStyles([Style; 5]);

impl TermStyles {
    /// Builds styles by asking `f` for each category.
    pub fn from_fn(mut f: impl FnMut(Category) -> Style) -> Self {
        Self(Category::ALL.map(&mut f))
    }

    pub fn get(&self, category: Category) -> &Style {
        &self.0[category.index()]
    }

    /// Replaces the style of `category`, returning the updated styles.
    pub fn set(mut self, category: Category, style: Style) -> Self {
        self.0[category.index()] = style;
        self
    }
}

/// How tokens are decorated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Markup {
    /// Plain JSON text.
    #[default]
    Plain,
    /// HTML with a classed `<span>` per token; text is HTML-escaped.
    Html,
    /// ANSI-styled terminal output.
    Term(TermStyles),
}

/// Formats JSON with one member per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPrettyPrinter {
    indent: usize,
    markup: Markup,
}

impl JsonPrettyPrinter {
    /// A plain-text printer indenting by [`DEFAULT_INDENT`].
    pub fn new() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            markup: Markup::Plain,
        }
    }

    /// An HTML printer indenting by [`DEFAULT_INDENT`].
    pub fn html() -> Self {
        Self::new().with_markup(Markup::Html)
    }

    /// A terminal printer using `styles`.
    pub fn term(styles: TermStyles) -> Self {
        Self::new().with_markup(Markup::Term(styles))
    }

    /// Sets the number of spaces per nesting level.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    pub fn markup(&self) -> &Markup {
        &self.markup
    }

    /// Parses and formats a JSON document.
    ///
    /// Empty or whitespace-only input formats to an empty string.
    ///
    /// # Errors
    ///
    /// Returns [`PrettyError::Syntax`] if `json` is not valid JSON.
    pub fn format(&self, json: &str) -> Result<String, PrettyError> {
        if json.trim().is_empty() {
            return Ok(String::new());
        }
        let value: Value = serde_json::from_str(json)?;
        Ok(self.format_value(&value))
    }

    /// Formats an already parsed value.
    pub fn format_value(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_value(&mut out, value, 0);
        out
    }

    fn write_value(&self, out: &mut String, value: &Value, depth: usize) {
        match value {
            Value::Object(map) if map.is_empty() => out.push_str("{}"),
            Value::Object(map) => {
                out.push('{');
                for (i, (name, member)) in map.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.newline(out, depth + 1);
                    self.push_token(out, Category::PropertyName, &quote(name));
                    out.push_str(": ");
                    self.write_value(out, member, depth + 1);
                }
                self.newline(out, depth);
                out.push('}');
            }
            Value::Array(items) if items.is_empty() => out.push_str("[]"),
            Value::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push(',');
                    }
                    self.newline(out, depth + 1);
                    self.write_value(out, item, depth + 1);
                }
                self.newline(out, depth);
                out.push(']');
            }
            Value::String(s) => self.push_token(out, Category::StringValue, &quote(s)),
            Value::Number(n) => self.push_token(out, Category::NumberValue, &n.to_string()),
            Value::Bool(b) => self.push_token(out, Category::BooleanValue, &b.to_string()),
            Value::Null => self.push_token(out, Category::NullValue, "null"),
        }
    }

    fn newline(&self, out: &mut String, depth: usize) {
        out.push('\n');
        out.extend(std::iter::repeat(' ').take(depth * self.indent));
    }

    fn push_token(&self, out: &mut String, category: Category, text: &str) {
        match &self.markup {
            Markup::Plain => out.push_str(text),
            Markup::Html => {
                let _ = write!(
                    out,
                    "<span class=\"{}\">{}</span>",
                    category.css_class(),
                    escape_html(text)
                );
            }
            Markup::Term(styles) => {
                let _ = write!(out, "{}", styles.get(category).apply_to(text));
            }
        }
    }
}

impl Default for JsonPrettyPrinter {
    fn default() -> Self {
        Self::new()
    }
}

/// A string as a quoted, escaped JSON literal.
fn quote(s: &str) -> String {
    Value::from(s).to_string()
}
