//! Error types for the Kazoe library.
//!
//! All errors are represented by the [`KazoeError`] enum. Analysis failures,
//! unresolvable analyzer names and malformed counting modes each have their
//! own variant so callers can tell a document-parse failure from a
//! schema-update failure.
//!
//! # Examples
//!
//! ```
//! use kazoe::error::{KazoeError, Result};
//!
//! fn resolve(name: &str) -> Result<()> {
//!     Err(KazoeError::invalid_analyzer_reference(name))
//! }
//!
//! let err = resolve("klingon").unwrap_err();
//! assert_eq!(err.to_string(), "Invalid analyzer reference: klingon");
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Kazoe operations.
#[derive(Error, Debug)]
pub enum KazoeError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenization, filtering, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Schema-related errors
    #[error("Schema error: {0}")]
    Schema(String),

    /// An analyzer name that does not resolve to a registered analyzer
    #[error("Invalid analyzer reference: {0}")]
    InvalidAnalyzerReference(String),

    /// A malformed counting mode value
    #[error("Invalid counting mode: {0}")]
    InvalidCountingMode(String),

    /// Two field definitions that cannot be merged
    #[error("Merge conflict: {0}")]
    MergeConflict(String),

    /// Field-related errors
    #[error("Field error: {0}")]
    Field(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// An error wrapped with context, such as the file being processed
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with KazoeError.
pub type Result<T> = std::result::Result<T, KazoeError>;

impl KazoeError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        KazoeError::Analysis(msg.into())
    }

    /// Create a new schema error.
    pub fn schema<S: Into<String>>(msg: S) -> Self {
        KazoeError::Schema(msg.into())
    }

    /// Create a new invalid analyzer reference error.
    pub fn invalid_analyzer_reference<S: Into<String>>(name: S) -> Self {
        KazoeError::InvalidAnalyzerReference(name.into())
    }

    /// Create a new invalid counting mode error.
    pub fn invalid_counting_mode<S: Into<String>>(msg: S) -> Self {
        KazoeError::InvalidCountingMode(msg.into())
    }

    /// Create a new merge conflict error.
    pub fn merge_conflict<S: Into<String>>(msg: S) -> Self {
        KazoeError::MergeConflict(msg.into())
    }

    /// Create a new field error.
    pub fn field<S: Into<String>>(msg: S) -> Self {
        KazoeError::Field(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        KazoeError::Other(msg.into())
    }

    /// Returns true if this error was raised while analyzing text.
    pub fn is_analysis(&self) -> bool {
        matches!(self, KazoeError::Analysis(_))
    }
}
