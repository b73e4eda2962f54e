//! Validation errors for recipe documents.

use thiserror::Error;

/// Result type for schema validation
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Recipe validation failure.
///
/// Validation happens before any write reaches the store; the store never
/// holds a record that violates these rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// A required field is missing or empty
    #[error("required field '{0}' is missing or empty")]
    MissingField(&'static str),

    /// A numeric field holds a non-finite value
    #[error("field '{0}' must be a finite number")]
    NotFinite(&'static str),
}
