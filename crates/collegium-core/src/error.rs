//! Domain error types.

use thiserror::Error;

/// Top-level domain error type for the registry.
///
/// Workflow step failures (eligibility, availability, registration
/// returning `false`) are deliberately NOT represented here — they are a
/// normal rejected-outcome path, not errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A control-flow engine was composed incorrectly (empty approval
    /// chain, non-monotonic ceilings, exhaustion without a terminal
    /// authority). Fatal, never retried.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The actor's role does not permit the requested operation.
    #[error("role '{role}' is not permitted to perform: {operation}")]
    PermissionDenied {
        /// The operation that was attempted.
        operation: String,
        /// The role the actor reported, or a placeholder when it reported
        /// none.
        role: String,
    },

    /// A grade change referenced a course the student has no grade in.
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// Malformed input to a mutating accessor.
    #[error("invalid value for field '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// What was wrong with the value.
        message: String,
    },
}

impl RegistryError {
    /// Shorthand for a [`RegistryError::Validation`] error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
