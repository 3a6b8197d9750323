//! Error types for Veredicto
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Veredicto error types
#[derive(Error, Debug)]
pub enum Error {
    /// No valid caller identity could be resolved from the request context.
    ///
    /// Surfaced verbatim to the caller; no side effects are performed first.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Malformed or missing required input, caught before the decision rule runs.
    #[error("Validation failed for '{field}': {message}")]
    Validation {
        /// The input field that failed validation
        field: &'static str,
        /// Human-readable reason
        message: String,
    },

    /// Referenced experiment is absent or not owned by the caller.
    ///
    /// The two cases are deliberately indistinguishable so a caller can
    /// never probe for the existence of another owner's experiments.
    #[error("Experiment not found")]
    NotFound,

    /// Backend failure on read or write.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl Error {
    /// Build a validation error for a named field.
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthenticated_message_is_uniform() {
        assert_eq!(Error::Unauthenticated.to_string(), "Not authenticated");
    }

    #[test]
    fn test_not_found_does_not_leak_detail() {
        assert_eq!(Error::NotFound.to_string(), "Experiment not found");
    }

    #[test]
    fn test_validation_names_the_field() {
        let error = Error::validation("target_value", "must be a finite number");
        let message = error.to_string();
        assert!(message.contains("target_value"));
        assert!(message.contains("finite"));
    }
}
