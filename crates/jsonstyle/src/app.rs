//! Application state for an interactive JSON styling view.
//!
//! [`JsonStyleApp`] is the single context an interactive front end drives:
//! it re-renders the pretty-printed output when the input changes and routes
//! colors picked in a palette to the selected category. Event wiring and
//! widget layout belong to the front end.

use crate::pretty::JsonPrettyPrinter;
use crate::style::{Category, StyleInstaller, StyleManager};

/// Output shown in place of the pretty-printed JSON when the input is invalid.
pub const SYNTAX_ERROR_HTML: &str = "<span class=\"error\">JSON syntax error.</span>";

/// State of a JSON styling view.
///
/// # Example
///
/// ```rust
/// use jsonstyle::{Category, JsonStyleApp, StyleManager};
///
/// let mut app = JsonStyleApp::new(StyleManager::default());
/// app.on_input_changed("[1]");
/// assert!(app.output().contains("goog-jsonprettyprinter-propertyvalue-number"));
///
/// // Open the palette for numbers, then pick a color.
/// assert_eq!(app.toggle_palette(Category::NumberValue), Some("#000000"));
/// app.on_palette_color("darkorange");
/// assert_eq!(app.styles().number_value_color(), "darkorange");
/// ```
#[derive(Debug)]
pub struct JsonStyleApp<I: StyleInstaller> {
    styles: StyleManager<I>,
    printer: JsonPrettyPrinter,
    output: String,
    selected: Option<Category>,
}

impl<I: StyleInstaller> JsonStyleApp<I> {
    /// Creates the view around an installed style manager, rendering HTML.
    pub fn new(styles: StyleManager<I>) -> Self {
        Self::with_printer(styles, JsonPrettyPrinter::html())
    }

    pub fn with_printer(styles: StyleManager<I>, printer: JsonPrettyPrinter) -> Self {
        Self {
            styles,
            printer,
            output: String::new(),
            selected: None,
        }
    }

    /// Re-renders the output for new input text and returns it.
    ///
    /// Invalid JSON renders as [`SYNTAX_ERROR_HTML`].
    pub fn on_input_changed(&mut self, text: &str) -> &str {
        self.output = match self.printer.format(text) {
            Ok(rendered) => rendered,
            Err(err) => {
                log::debug!("input rejected: {}", err);
                SYNTAX_ERROR_HTML.to_string()
            }
        };
        &self.output
    }

    /// The last rendered output.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Opens or closes the color palette for `category`.
    ///
    /// Opening selects the category and returns its current color so the
    /// palette can start from it. Closing clears the selection and returns
    /// `None`.
    pub fn toggle_palette(&mut self, category: Category) -> Option<&str> {
        match self.selected.take() {
            Some(_) => None,
            None => {
                self.selected = Some(category);
                Some(self.styles.color(category))
            }
        }
    }

    /// The category the palette is open for, if any.
    pub fn selected(&self) -> Option<Category> {
        self.selected
    }

    /// Applies a color picked in the palette to the selected category.
    pub fn on_palette_color(&mut self, color: &str) {
        match self.selected {
            Some(category) => self.styles.set_color(category, color),
            None => log::trace!("palette color {} with nothing selected", color),
        }
    }

    pub fn styles(&self) -> &StyleManager<I> {
        &self.styles
    }

    pub fn styles_mut(&mut self) -> &mut StyleManager<I> {
        &mut self.styles
    }

    pub fn into_styles(self) -> StyleManager<I> {
        self.styles
    }
}
