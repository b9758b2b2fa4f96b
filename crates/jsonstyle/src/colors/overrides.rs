//! Per-category color configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::DEFAULT_COLOR;
use crate::style::Category;

/// Error returned when loading [`ColorOverrides`] from text or a file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read color file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON color config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid YAML color config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported color file extension: {} (expected .json, .yaml or .yml)", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("invalid color for {category}: {color:?} (allowed: letters, digits, spaces and #(),.%-)")]
    InvalidColor { category: Category, color: String },
}

/// Whether `color` can be written into a style rule as-is.
///
/// Only letters, digits, spaces and `#(),.%-` are accepted, which covers
/// named, hex, `rgb()`/`hsl()` and percentage colors but cannot close a rule
/// or the surrounding markup.
pub fn is_safe_color(color: &str) -> bool {
    color
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ' | '-'))
}

/// Optional colors for each category.
///
/// Categories left unset fall back to [`DEFAULT_COLOR`]. In JSON and YAML the
/// keys are the category keys (`propertyName`, `stringValue`, `numberValue`,
/// `booleanValue`, `nullValue`); any other key is rejected.
///
/// # Example
///
/// ```rust
/// use jsonstyle::{Category, ColorOverrides};
///
/// let colors = ColorOverrides::from_yaml_str("propertyName: blue\nnullValue: red\n").unwrap();
/// assert_eq!(colors.resolve(Category::PropertyName), "blue");
/// assert_eq!(colors.resolve(Category::StringValue), "#000000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ColorOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boolean_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub null_value: Option<String>,
}

impl ColorOverrides {
    /// Creates overrides with no category set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn property_name(self, color: impl Into<String>) -> Self {
        self.set(Category::PropertyName, color)
    }

    pub fn string_value(self, color: impl Into<String>) -> Self {
        self.set(Category::StringValue, color)
    }

    pub fn number_value(self, color: impl Into<String>) -> Self {
        self.set(Category::NumberValue, color)
    }

    pub fn boolean_value(self, color: impl Into<String>) -> Self {
        self.set(Category::BooleanValue, color)
    }

    pub fn null_value(self, color: impl Into<String>) -> Self {
        self.set(Category::NullValue, color)
    }

    /// Sets the color of `category`, returning the updated overrides.
    pub fn set(mut self, category: Category, color: impl Into<String>) -> Self {
        *self.slot_mut(category) = Some(color.into());
        self
    }

    /// The configured color of `category`, if any.
    pub fn get(&self, category: Category) -> Option<&str> {
        self.slot(category).as_deref()
    }

    /// The configured color of `category`, or [`DEFAULT_COLOR`].
    pub fn resolve(&self, category: Category) -> &str {
        self.get(category).unwrap_or(DEFAULT_COLOR)
    }

    /// Layers `other` on top of these overrides; colors set in `other` win.
    pub fn merged(&self, other: &ColorOverrides) -> ColorOverrides {
        Category::ALL.iter().fold(self.clone(), |acc, &c| match other.get(c) {
            Some(color) => acc.set(c, color),
            None => acc,
        })
    }

    /// Whether no category is set.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| self.get(c).is_none())
    }

    /// Checks every configured color with [`is_safe_color`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for the first offending category.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for category in Category::ALL {
            if let Some(color) = self.get(category) {
                if !is_safe_color(color) {
                    return Err(ConfigError::InvalidColor {
                        category,
                        color: color.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parses and validates overrides from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let colors: Self = serde_json::from_str(json)?;
        colors.validate()?;
        Ok(colors)
    }

    /// Parses and validates overrides from a YAML mapping.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let colors: Self = serde_yaml::from_str(yaml)?;
        colors.validate()?;
        Ok(colors)
    }

    /// Loads overrides from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        let parse: fn(&str) -> Result<Self, ConfigError> = match ext.as_deref() {
            Some("json") => Self::from_json_str,
            Some("yaml") | Some("yml") => Self::from_yaml_str,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading colors from {}", path.display());
        parse(&content)
    }

    fn slot(&self, category: Category) -> &Option<String> {
        match category {
            Category::PropertyName => &self.property_name,
            Category::StringValue => &self.string_value,
            Category::NumberValue => &self.number_value,
            Category::BooleanValue => &self.boolean_value,
            Category::NullValue => &self.null_value,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Option<String> {
        match category {
            Category::PropertyName => &mut self.property_name,
            Category::StringValue => &mut self.string_value,
            Category::NumberValue => &mut self.number_value,
            Category::BooleanValue => &mut self.boolean_value,
            Category::NullValue => &mut self.null_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_overrides_default_resolves_black() {
        let colors = ColorOverrides::new();
        assert!(colors.is_empty());
        for category in Category::ALL {
            assert_eq!(colors.resolve(category), "#000000");
        }
    }

    #[test]
    fn test_overrides_builder() {
        let colors = ColorOverrides::new()
            .property_name("blue")
            .boolean_value("darkviolet");
        assert_eq!(colors.get(Category::PropertyName), Some("blue"));
        assert_eq!(colors.get(Category::BooleanValue), Some("darkviolet"));
        assert_eq!(colors.get(Category::NumberValue), None);
    }

    #[test]
    fn test_overrides_from_json() {
        let colors =
            ColorOverrides::from_json_str(r##"{"stringValue": "darkgreen", "numberValue": "#f80"}"##)
                .unwrap();
        assert_eq!(colors.resolve(Category::StringValue), "darkgreen");
        assert_eq!(colors.resolve(Category::NumberValue), "#f80");
        assert_eq!(colors.resolve(Category::NullValue), "#000000");
    }

    #[test]
    fn test_overrides_reject_unknown_keys() {
        let err = ColorOverrides::from_json_str(r#"{"propertyname": "blue"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        let err = ColorOverrides::from_yaml_str("keyColor: blue\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_overrides_reject_rule_breaking_colors() {
        let err = ColorOverrides::from_json_str(r#"{"nullValue": "red;} body {display:none"}"#)
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidColor { category: Category::NullValue, .. }
        ));

        let err = ColorOverrides::from_yaml_str("stringValue: \"red</style>\"\n").unwrap_err();
        assert!(err.to_string().contains("stringValue"));
    }

    #[test]
    fn test_overrides_validate_accepts_css_color_forms() {
        let colors = ColorOverrides::new()
            .property_name("#1a2B3c")
            .string_value("rgb(10, 20, 30)")
            .number_value("hsl(120, 50%, 25.5%)")
            .boolean_value("DarkViolet")
            .null_value("rgba(0,0,0,0.5)");
        assert!(colors.validate().is_ok());
        assert!(ColorOverrides::new().null_value("red<b>").validate().is_err());
    }

    #[test]
    fn test_overrides_merged() {
        let base = ColorOverrides::new()
            .property_name("blue")
            .null_value("red");
        let top = ColorOverrides::new().null_value("salmon");
        let merged = base.merged(&top);
        assert_eq!(merged.resolve(Category::PropertyName), "blue");
        assert_eq!(merged.resolve(Category::NullValue), "salmon");
    }

    #[test]
    fn test_overrides_serialize_skips_unset() {
        let colors = ColorOverrides::new().null_value("red");
        let json = serde_json::to_string(&colors).unwrap();
        assert_eq!(json, r#"{"nullValue":"red"}"#);
    }

    #[test]
    fn test_overrides_from_yaml_file() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "propertyName: blue").unwrap();
        let colors = ColorOverrides::from_path(file.path()).unwrap();
        assert_eq!(colors.resolve(Category::PropertyName), "blue");
    }

    #[test]
    fn test_overrides_from_path_unsupported_extension() {
        let err = ColorOverrides::from_path("colors.toml").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_overrides_from_missing_file() {
        let err = ColorOverrides::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
