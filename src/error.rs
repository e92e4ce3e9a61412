// src/error.rs
// Error type for the library boundary

use thiserror::Error;

/// Errors surfaced by the library. The export engine itself never
/// fails — malformed input degrades into fallback artifacts — so these
/// cover startup and transport concerns only.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown error: {0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

/// Convenience type alias for Result using ExportError
pub type Result<T> = std::result::Result<T, ExportError>;

impl From<String> for ExportError {
    fn from(s: String) -> Self {
        ExportError::Other(s)
    }
}
