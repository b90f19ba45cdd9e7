//! Error types for Ecommerce Input

use thiserror::Error;

/// Errors raised while building masks or loading translation catalogs.
///
/// Editing a masked value never fails; rejected keystrokes are dropped.
#[derive(Error, Debug)]
pub enum InputError {
    /// Mask pattern has no slots at all
    #[error("Mask pattern is empty")]
    EmptyPattern,

    /// Mask pattern has only literals, so nothing could ever be typed
    #[error("Mask pattern has no placeholders: {0}")]
    NoPlaceholders(String),

    /// Mask template ends with an unfinished escape
    #[error("Mask template ends with a dangling escape: {0}")]
    DanglingEscape(String),

    /// Translation catalog is not a flat JSON object of strings
    #[error("Catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

/// Result type alias for Ecommerce Input operations
pub type Result<T> = std::result::Result<T, InputError>;
