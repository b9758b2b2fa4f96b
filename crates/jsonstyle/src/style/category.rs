//! The five JSON token categories.

use std::fmt;
use std::str::FromStr;

use super::error::UnknownCategory;

/// A semantic JSON token kind that the pretty-printer colors distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    PropertyName,
    StringValue,
    NumberValue,
    BooleanValue,
    NullValue,
}

impl Category {
    /// Every category, in installation order.
    pub const ALL: [Category; 5] = [
        Category::PropertyName,
        Category::StringValue,
        Category::NumberValue,
        Category::BooleanValue,
        Category::NullValue,
    ];

    /// The configuration key, e.g. `"propertyName"`.
    pub fn key(self) -> &'static str {
        match self {
            Category::PropertyName => "propertyName",
            Category::StringValue => "stringValue",
            Category::NumberValue => "numberValue",
            Category::BooleanValue => "booleanValue",
            Category::NullValue => "nullValue",
        }
    }

    /// The CSS class the HTML pretty-printer puts on tokens of this category.
    pub fn css_class(self) -> &'static str {
        match self {
            Category::PropertyName => "goog-jsonprettyprinter-propertyname",
            Category::StringValue => "goog-jsonprettyprinter-propertyvalue-string",
            Category::NumberValue => "goog-jsonprettyprinter-propertyvalue-number",
            Category::BooleanValue => "goog-jsonprettyprinter-propertyvalue-boolean",
            Category::NullValue => "goog-jsonprettyprinter-propertyvalue-null",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
