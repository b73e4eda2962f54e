//! Store collaborator errors.

use thiserror::Error;

use crate::schema::SchemaError;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by a recipe store
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// No record with the given identifier
    #[error("recipe not found")]
    NotFound,

    /// Write payload failed document validation
    #[error("{0}")]
    Invalid(#[from] SchemaError),

    /// Internal store failure
    #[error("store internal error: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_propagation() {
        let err = StoreError::from(SchemaError::MissingField("title"));
        assert_eq!(
            err.to_string(),
            "required field 'title' is missing or empty"
        );
    }
}
