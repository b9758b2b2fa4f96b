//! Style errors.

use thiserror::Error;

use super::category::Category;

/// Boxed error raised by a [`StyleInstaller`](super::StyleInstaller).
pub type InstallerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error returned when building a [`StyleManager`](super::StyleManager).
#[derive(Debug, Error)]
pub enum StyleError {
    /// The presentation layer refused to install a category's rule.
    #[error("failed to install style rule for {category}")]
    Install {
        category: Category,
        #[source]
        source: InstallerError,
    },
}

/// A string that names none of the five categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized category '{0}'")]
pub struct UnknownCategory(pub String);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_install_error_display_and_source() {
        let err = StyleError::Install {
            category: Category::NumberValue,
            source: "document is read-only".into(),
        };
        assert!(err.to_string().contains("numberValue"));
        let source = err.source().expect("source is kept");
        assert_eq!(source.to_string(), "document is read-only");
    }

    #[test]
    fn test_unknown_category_display() {
        let err = UnknownCategory("colour".to_string());
        assert_eq!(err.to_string(), "unrecognized category 'colour'");
    }
}
