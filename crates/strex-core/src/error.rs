//! Error types for report rendering.

use thiserror::Error;

/// Errors raised while rendering a results document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Color preference was not one of `always`, `auto`, `never`.
    #[error("unexpected color preference: {0:?} (expected always, auto or never)")]
    InvalidColorPreference(String),

    /// A grid row does not match its column schema.
    #[error("table has {expected} columns but row has {found} cells")]
    ColumnArityMismatch { expected: usize, found: usize },

    /// Run timestamp could not be formatted.
    #[error("failed to format start date: {0}")]
    Timestamp(#[from] time::error::Format),
}

impl RenderError {
    /// Configuration errors are raised before any output exists.
    pub fn is_configuration(&self) -> bool {
        matches!(self, RenderError::InvalidColorPreference(_))
    }
}

/// Result type for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;
