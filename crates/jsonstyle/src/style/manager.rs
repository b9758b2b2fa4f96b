//! Category colors kept in sync with installed style rules.

use std::fmt;

use console::Style;

use super::category::Category;
use super::error::StyleError;
use super::installer::{StyleInstaller, StyleSheet};
use super::rule::StyleRule;
use crate::colors::ColorOverrides;
use crate::pretty::TermStyles;
use crate::util::parse_rgb;

/// Owns the color of each JSON token category and the rule installed for it.
///
/// On construction one rule per [`Category`] is installed into the
/// presentation layer, in [`Category::ALL`] order. Changing a color rewrites
/// that category's rule in place; setting a color to its current value does
/// not touch the presentation layer.
///
/// # Example
///
/// ```rust
/// use jsonstyle::{ColorOverrides, StyleManager, StyleSheet};
///
/// let colors = ColorOverrides::new().property_name("blue");
/// let mut manager = StyleManager::with_colors(StyleSheet::new(), &colors).unwrap();
/// assert_eq!(manager.property_name_color(), "blue");
/// assert_eq!(manager.string_value_color(), "#000000");
///
/// manager.set_null_value_color("red");
/// assert!(manager
///     .installer()
///     .to_css()
///     .contains(".goog-jsonprettyprinter-propertyvalue-null {color: red;}"));
/// ```
pub struct StyleManager<I: StyleInstaller> {
    installer: I,
    rules: [StyleRule<I::Handle>; 5],
}

impl<I: StyleInstaller> StyleManager<I> {
    /// Installs all five rules in black.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Install`] for the first rule the installer rejects.
    pub fn new(installer: I) -> Result<Self, StyleError> {
        Self::with_colors(installer, &ColorOverrides::default())
    }

    /// Installs all five rules, taking colors from `colors` where given.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Install`] for the first rule the installer rejects.
    /// The installer and any rules already installed are dropped with it.
    pub fn with_colors(installer: I, colors: &ColorOverrides) -> Result<Self, StyleError> {
        Self::install_rules(installer, colors).map_err(|(category, source)| StyleError::Install {
            category,
            source: Box::new(source),
        })
    }

    fn install_rules(mut installer: I, colors: &ColorOverrides) -> Result<Self, (Category, I::Error)> {
        let mut rules =
            Category::ALL.map(|category| StyleRule::new(category.css_class(), colors.get(category)));

        for (category, rule) in Category::ALL.iter().zip(rules.iter_mut()) {
            let text = rule.css_text();
            let handle = installer.install(&text).map_err(|e| (*category, e))?;
            log::debug!("installed style rule {}", text);
            rule.set_handle(handle);
        }

        Ok(Self { installer, rules })
    }

    /// The current color of `category`.
    pub fn color(&self, category: Category) -> &str {
        self.rules[category.index()].color()
    }

    /// Sets the color of `category`, rewriting its installed rule if it changed.
    pub fn set_color(&mut self, category: Category, color: impl Into<String>) {
        let color = color.into();
        let rule = &mut self.rules[category.index()];
        if rule.color() == color {
            return;
        }
        rule.set_color(color);
        let text = rule.css_text();
        match rule.handle() {
            Some(handle) => {
                log::debug!("updating style rule {}", text);
                self.installer.update(handle, &text);
            }
            None => log::warn!("style rule for {} was never installed", category),
        }
    }

    /// The rule held for `category`.
    pub fn rule(&self, category: Category) -> &StyleRule<I::Handle> {
        &self.rules[category.index()]
    }

    /// The current colors of all categories as overrides.
    pub fn colors(&self) -> ColorOverrides {
        Category::ALL
            .iter()
            .fold(ColorOverrides::new(), |acc, &c| acc.set(c, self.color(c)))
    }

    /// Terminal styles matching the current colors.
    ///
    /// Colors that cannot be parsed leave their category unstyled.
    pub fn term_styles(&self) -> TermStyles {
        TermStyles::from_fn(|category| match parse_rgb(self.color(category)) {
            Some(rgb) => Style::new().fg(crate::util::rgb_to_color(rgb)),
            None => {
                log::debug!(
                    "no terminal color for {} = {:?}",
                    category,
                    self.color(category)
                );
                Style::new()
            }
        })
    }

    pub fn installer(&self) -> &I {
        &self.installer
    }

    pub fn into_installer(self) -> I {
        self.installer
    }

    pub fn property_name_color(&self) -> &str {
        self.color(Category::PropertyName)
    }

    pub fn set_property_name_color(&mut self, color: impl Into<String>) {
        self.set_color(Category::PropertyName, color)
    }

    pub fn string_value_color(&self) -> &str {
        self.color(Category::StringValue)
    }

    pub fn set_string_value_color(&mut self, color: impl Into<String>) {
        self.set_color(Category::StringValue, color)
    }

    pub fn number_value_color(&self) -> &str {
        self.color(Category::NumberValue)
    }

    pub fn set_number_value_color(&mut self, color: impl Into<String>) {
        self.set_color(Category::NumberValue, color)
    }

    pub fn boolean_value_color(&self) -> &str {
        self.color(Category::BooleanValue)
    }

    pub fn set_boolean_value_color(&mut self, color: impl Into<String>) {
        self.set_color(Category::BooleanValue, color)
    }

    pub fn null_value_color(&self) -> &str {
        self.color(Category::NullValue)
    }

    pub fn set_null_value_color(&mut self, color: impl Into<String>) {
        self.set_color(Category::NullValue, color)
    }
}

impl<I: StyleInstaller> fmt::Debug for StyleManager<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleManager")
            .field("colors", &self.colors())
            .finish_non_exhaustive()
    }
}

impl Default for StyleManager<StyleSheet> {
    /// A manager over a fresh in-memory [`StyleSheet`] with every color black.
    fn default() -> Self {
        match Self::install_rules(StyleSheet::new(), &ColorOverrides::default()) {
            Ok(manager) => manager,
            Err((_, never)) => match never {},
        }
    }
}
