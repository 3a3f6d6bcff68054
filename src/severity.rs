//! Severity levels and the display color palette.
//!
//! The palette is a fixed, immutable mapping owned by this module; every
//! color placed into a notification comes from it, never from free-form
//! input.

use serde::Serialize;

/// A display color from the fixed palette.
///
/// Serializes as its hex string (e.g. `"#0093ce"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    /// The hex string form of this color.
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

/// The graded seriousness of an occurrence, as reported upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl SeverityLevel {
    /// Parses the wire form of a level. Unknown strings yield `None`;
    /// callers fall back to the error color.
    pub fn parse(level: &str) -> Option<Self> {
        match level {
            "critical" => Some(Self::Critical),
            "error" => Some(Self::Error),
            "warning" => Some(Self::Warning),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }
}

/// The fixed mapping from severity to display color, plus the green used
/// for resolved items.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub resolved: Color,
    critical: Color,
    error: Color,
    warning: Color,
    info: Color,
    debug: Color,
}

static PALETTE: ColorPalette = ColorPalette {
    resolved: Color("#009e61"),
    critical: Color("#c00"),
    error: Color("#c00"),
    warning: Color("#ffc258"),
    info: Color("#0093ce"),
    debug: Color("#bab6b6"),
};

/// The crate-wide palette. The mapping never changes at runtime.
pub fn palette() -> &'static ColorPalette {
    &PALETTE
}

impl ColorPalette {
    /// Maps a raw level string to its color, defaulting unknown levels
    /// to the error color.
    pub fn color_for(&self, level: &str) -> Color {
        match SeverityLevel::parse(level) {
            Some(SeverityLevel::Critical) => self.critical,
            Some(SeverityLevel::Error) | None => self.error,
            Some(SeverityLevel::Warning) => self.warning,
            Some(SeverityLevel::Info) => self.info,
            Some(SeverityLevel::Debug) => self.debug,
        }
    }

    /// The informational blue used by most item lifecycle events.
    pub fn info(&self) -> Color {
        self.info
    }

    /// The fallback red used for errors and unknown levels.
    pub fn error(&self) -> Color {
        self.error
    }
}
