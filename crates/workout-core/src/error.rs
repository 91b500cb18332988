//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// The requested resource does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Kind of resource that was looked up.
        resource: &'static str,
        /// The identifier as supplied by the caller.
        id: String,
    },

    /// A validation error in domain logic.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_keeps_raw_id() {
        let err = DomainError::NotFound {
            resource: "workout",
            id: "42".to_owned(),
        };
        assert_eq!(err.to_string(), "workout not found: 42");
    }

    #[test]
    fn test_validation_message_is_prefixed() {
        let err = DomainError::Validation("name must not be empty".into());
        assert_eq!(err.to_string(), "validation error: name must not be empty");
    }
}
