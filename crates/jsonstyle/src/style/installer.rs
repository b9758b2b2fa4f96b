//! The presentation layer that style rules are installed into.

use std::convert::Infallible;

/// A presentation layer that accepts CSS-like rule text.
///
/// The installer value itself is the presentation context (a document, a
/// stylesheet file, a terminal palette). [`install`](Self::install) returns an
/// opaque handle that is later passed back to [`update`](Self::update) to
/// rewrite the same rule in place.
pub trait StyleInstaller {
    /// Identifies an installed rule.
    type Handle;
    /// Error raised when a rule cannot be installed.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Installs a new rule and returns its handle.
    fn install(&mut self, rule_text: &str) -> Result<Self::Handle, Self::Error>;

    /// Replaces the text of a previously installed rule.
    fn update(&mut self, handle: &Self::Handle, rule_text: &str);
}

impl<T: StyleInstaller + ?Sized> StyleInstaller for &mut T {
    type Handle = T::Handle;
    type Error = T::Error;

    fn install(&mut self, rule_text: &str) -> Result<Self::Handle, Self::Error> {
        (**self).install(rule_text)
    }

    fn update(&mut self, handle: &Self::Handle, rule_text: &str) {
        (**self).update(handle, rule_text)
    }
}

/// Handle of a rule installed in a [`StyleSheet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(usize);

impl RuleId {
    /// Position of the rule in its sheet.
    pub fn index(self) -> usize {
        self.0
    }
}

/// An in-memory stylesheet, the default presentation context.
///
/// Rules keep their installation order. The sheet also counts installs and
/// updates, which makes redundant writes observable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    rules: Vec<String>,
    updates: usize,
}

impl StyleSheet {
    /// Creates an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// The installed rules, in installation order.
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    /// The text of one installed rule.
    pub fn rule(&self, id: RuleId) -> Option<&str> {
        self.rules.get(id.0).map(String::as_str)
    }

    /// Number of rules installed so far.
    pub fn install_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of in-place rule updates so far.
    pub fn update_count(&self) -> usize {
        self.updates
    }

    /// The whole sheet as CSS, one rule per line.
    pub fn to_css(&self) -> String {
        let mut css = self.rules.join("\n");
        if !css.is_empty() {
            css.push('\n');
        }
        css
    }
}

impl StyleInstaller for StyleSheet {
    type Handle = RuleId;
    type Error = Infallible;

    fn install(&mut self, rule_text: &str) -> Result<RuleId, Infallible> {
        self.rules.push(rule_text.to_string());
        Ok(RuleId(self.rules.len() - 1))
    }

    fn update(&mut self, handle: &RuleId, rule_text: &str) {
        if let Some(rule) = self.rules.get_mut(handle.0) {
            rule.clear();
            rule.push_str(rule_text);
            self.updates += 1;
        } else {
            log::warn!("style sheet has no rule #{}", handle.0);
        }
    }
}
