//! Style rules for the JSON token categories.
//!
//! This module provides the styling primitives:
//!
//! - [`Category`]: The five JSON token kinds that are colored distinctly
//! - [`StyleRule`]: One category's CSS class, color and installed handle
//! - [`StyleInstaller`]: The presentation layer rules are installed into
//! - [`StyleSheet`]: An in-memory [`StyleInstaller`]
//! - [`StyleManager`]: Keeps category colors and installed rules in sync
//!
//! Rules are installed once, when the manager is built, and rewritten in
//! place whenever a color changes.

mod category;
mod error;
mod installer;
mod manager;
mod rule;

pub use category::Category;
pub use error::{InstallerError, StyleError, UnknownCategory};
pub use installer::{RuleId, StyleInstaller, StyleSheet};
pub use manager::StyleManager;
pub use rule::StyleRule;
