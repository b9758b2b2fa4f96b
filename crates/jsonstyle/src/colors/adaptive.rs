//! Color overrides that respond to the system color mode.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

use super::overrides::ColorOverrides;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Light,
    Dark,
}

/// Category colors that adapt to the user's display mode.
///
/// Holds separate overrides for light and dark backgrounds and picks one
/// based on the OS setting.
///
/// # Example
///
/// ```rust
/// use jsonstyle::{set_color_mode_detector, AdaptiveColors, ColorMode, ColorOverrides};
///
/// let adaptive = AdaptiveColors::new(
///     ColorOverrides::new().property_name("navy"),
///     ColorOverrides::new().property_name("lightskyblue"),
/// );
///
/// set_color_mode_detector(|| ColorMode::Dark);
/// let colors = adaptive.resolve();
/// assert_eq!(colors.property_name.as_deref(), Some("lightskyblue"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdaptiveColors {
    light: ColorOverrides,
    dark: ColorOverrides,
}

impl AdaptiveColors {
    /// Creates adaptive colors from light and dark variants.
    pub fn new(light: ColorOverrides, dark: ColorOverrides) -> Self {
        Self { light, dark }
    }

    /// The variant used on light backgrounds.
    pub fn light(&self) -> &ColorOverrides {
        &self.light
    }

    /// The variant used on dark backgrounds.
    pub fn dark(&self) -> &ColorOverrides {
        &self.dark
    }

    /// The variant for `mode`.
    pub fn for_mode(&self, mode: ColorMode) -> &ColorOverrides {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// Resolves to the variant matching the current color mode.
    pub fn resolve(&self) -> ColorOverrides {
        self.for_mode(detect_color_mode()).clone()
    }
}

impl Default for AdaptiveColors {
    /// The palette of the JSON styling demo, with a brighter dark variant.
    fn default() -> Self {
        Self {
            light: ColorOverrides::new()
                .property_name("blue")
                .string_value("darkgreen")
                .number_value("darkorange")
                .boolean_value("darkviolet")
                .null_value("red"),
            dark: ColorOverrides::new()
                .property_name("lightskyblue")
                .string_value("lightgreen")
                .number_value("orange")
                .boolean_value("violet")
                .null_value("salmon"),
        }
    }
}

impl From<OsThemeMode> for ColorMode {
    fn from(mode: OsThemeMode) -> Self {
        match mode {
            OsThemeMode::Dark => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }
}

/// A function reporting the current color mode.
pub type ColorModeDetector = fn() -> ColorMode;

/// Detector installed in place of OS detection, if any.
static FORCED_DETECTOR: Lazy<RwLock<Option<ColorModeDetector>>> = Lazy::new(RwLock::default);

/// Replaces OS detection with `detector` until [`reset_color_mode_detector`].
///
/// Useful in tests, or to force a mode regardless of the desktop setting.
pub fn set_color_mode_detector(detector: ColorModeDetector) {
    *FORCED_DETECTOR.write().unwrap_or_else(PoisonError::into_inner) = Some(detector);
}

/// Goes back to asking the OS for the color mode.
pub fn reset_color_mode_detector() {
    *FORCED_DETECTOR.write().unwrap_or_else(PoisonError::into_inner) = None;
}

/// The current color mode: the forced detector's answer, else the OS theme.
pub fn detect_color_mode() -> ColorMode {
    let forced = *FORCED_DETECTOR.read().unwrap_or_else(PoisonError::into_inner);
    match forced {
        Some(detector) => detector(),
        None => ColorMode::from(detect_os_theme()),
    }
}
