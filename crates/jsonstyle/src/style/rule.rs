//! A single category's style rule.

use crate::colors::DEFAULT_COLOR;

/// Color information for one CSS class, plus the handle of its installed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule<H> {
    css_class: String,
    color: String,
    handle: Option<H>,
}

impl<H> StyleRule<H> {
    /// Creates a rule for `css_class`. A leading `.` is removed.
    pub fn new(css_class: &str, color: Option<&str>) -> Self {
        let css_class = css_class.strip_prefix('.').unwrap_or(css_class);
        Self {
            css_class: css_class.to_string(),
            color: color.unwrap_or(DEFAULT_COLOR).to_string(),
            handle: None,
        }
    }

    /// The class name without a `.` prefix.
    pub fn css_class(&self) -> &str {
        &self.css_class
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub(crate) fn set_color(&mut self, color: String) {
        self.color = color;
    }

    /// The handle of the installed rule, once installed.
    pub fn handle(&self) -> Option<&H> {
        self.handle.as_ref()
    }

    pub(crate) fn set_handle(&mut self, handle: H) {
        self.handle = Some(handle);
    }

    /// The rule text, e.g. `.goog-jsonprettyprinter-propertyname {color: #000000;}`.
    pub fn css_text(&self) -> String {
        format!(".{} {{color: {};}}", self.css_class, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_strips_dot_prefix() {
        let rule: StyleRule<()> = StyleRule::new(".token-name", None);
        assert_eq!(rule.css_class(), "token-name");
    }

    #[test]
    fn test_rule_strips_only_one_dot() {
        let rule: StyleRule<()> = StyleRule::new("..odd", None);
        assert_eq!(rule.css_class(), ".odd");
    }

    #[test]
    fn test_rule_defaults_to_black() {
        let rule: StyleRule<()> = StyleRule::new("token-name", None);
        assert_eq!(rule.color(), "#000000");
        assert!(rule.handle().is_none());
    }

    #[test]
    fn test_rule_css_text() {
        let rule: StyleRule<()> = StyleRule::new("token-name", Some("blue"));
        assert_eq!(rule.css_text(), ".token-name {color: blue;}");
    }
}
