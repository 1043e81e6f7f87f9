//! Authentication errors.

use thiserror::Error;

/// Authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Login input rejected; the user can correct it and retry.
    #[error("validation error: {0}")]
    Validation(String),
}

impl AuthError {
    /// The error for a missing or empty email.
    pub fn empty_email() -> Self {
        AuthError::Validation("empty email".to_string())
    }

    /// Check if the user can fix this by changing their input.
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }
}
