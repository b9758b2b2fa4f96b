//! Color configuration for the JSON token categories.
//!
//! This module provides:
//!
//! - [`ColorOverrides`]: Optional per-category colors, loadable from JSON or YAML
//! - [`AdaptiveColors`]: Light/dark override pairs with OS detection
//! - [`ColorMode`]: Light or dark color mode enum
//!
//! Any category without an override is drawn in [`DEFAULT_COLOR`].

mod adaptive;
mod overrides;

pub use adaptive::{
    detect_color_mode, reset_color_mode_detector, set_color_mode_detector, AdaptiveColors,
    ColorMode, ColorModeDetector,
};
pub use overrides::{is_safe_color, ColorOverrides, ConfigError};

/// The color of a category nobody configured.
pub const DEFAULT_COLOR: &str = "#000000";
