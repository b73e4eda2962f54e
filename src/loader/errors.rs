//! Dataset loader errors.
//!
//! Only unreadable or unparsable files are errors; malformed individual
//! records are skipped and counted, never fatal.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while reading a recipe dataset
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Dataset file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Dataset file is not valid JSON
    #[error("dataset is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Dataset root is not a JSON array
    #[error("dataset root must be a JSON array")]
    NotAnArray,
}
