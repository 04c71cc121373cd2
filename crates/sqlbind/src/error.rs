//! Error types for sqlbind

use thiserror::Error;

/// Result type alias for statement-building operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Error types for statement building
#[derive(Debug, Error)]
pub enum BuildError {
    /// Positional bind names start at 1; zero is reserved for positional
    /// placeholders and negatives are never valid.
    #[error("integer bind name must be >= 1, got {got}")]
    InvalidBindName { got: i64 },

    /// JSON serialization error (from `assign_json` and friends)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
