//! Rendering options and the resolved policy threaded through every section.
//!
//! Options arrive from the caller as loosely typed values (the color
//! preference is a plain string). [`RenderPolicy::from_options`] validates
//! them once, before any output is produced, and every renderer reads the
//! resulting policy instead of re-deriving verbosity or styling decisions.

use std::str::FromStr;

use crate::error::{RenderError, RenderResult};

/// Report detail level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// Bare string values only.
    #[default]
    Default,
    /// Addresses, offsets, function groupings, colors and extended metadata.
    Verbose,
}

/// Concrete color behavior selected from the user's preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Styles are always emitted.
    Always,
    /// Styles are emitted when stdout is a color-capable terminal.
    Auto,
    /// No escape sequences are ever emitted.
    Never,
}

impl FromStr for ColorMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(ColorMode::Always),
            "auto" => Ok(ColorMode::Auto),
            "never" => Ok(ColorMode::Never),
            other => Err(RenderError::InvalidColorPreference(other.to_string())),
        }
    }
}

impl ColorMode {
    /// Whether this mode produces styled output in the current environment.
    pub fn styles_enabled(self) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Auto => console::colors_enabled(),
            ColorMode::Never => false,
        }
    }
}

/// Map a color preference to a [`ColorMode`].
pub fn resolve_color(preference: &str) -> RenderResult<ColorMode> {
    preference.parse()
}

/// Caller-facing rendering options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub verbosity: Verbosity,
    /// Suppress the title, metadata grid, headings and table header rows.
    pub disable_headers: bool,
    /// One of `always`, `auto`, `never`.
    pub color: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Default,
            disable_headers: false,
            color: "auto".to_string(),
        }
    }
}

/// Validated rendering policy for a single render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderPolicy {
    verbosity: Verbosity,
    headers: bool,
    color: ColorMode,
    styled: bool,
}

impl RenderPolicy {
    pub fn new(verbosity: Verbosity, headers: bool, color: ColorMode) -> Self {
        Self {
            verbosity,
            headers,
            color,
            styled: color.styles_enabled(),
        }
    }

    pub fn from_options(options: &RenderOptions) -> RenderResult<Self> {
        let color = resolve_color(&options.color)?;
        tracing::debug!(?color, verbosity = ?options.verbosity, "resolved render policy");
        Ok(Self::new(
            options.verbosity,
            !options.disable_headers,
            color,
        ))
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity == Verbosity::Verbose
    }

    pub fn headers_enabled(&self) -> bool {
        self.headers
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color
    }

    /// Styles apply only in the verbose tier, and only when the color mode allows it.
    pub fn colors_enabled(&self) -> bool {
        self.styled && self.is_verbose()
    }
}
