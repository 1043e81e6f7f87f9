//! Ordering errors.

use food_auth::AuthError;
use food_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by the ordering facade.
///
/// Every variant is recoverable by the user; none leaves the facade in a
/// broken state.
#[derive(Error, Debug)]
pub enum OrderingError {
    /// Login rejected.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Menu or cart rule violated.
    #[error(transparent)]
    Commerce(#[from] CommerceError),

    /// Tracing subscriber could not be installed.
    #[error("telemetry error: {0}")]
    Telemetry(String),
}

impl OrderingError {
    /// Check if this is a login validation failure.
    pub fn is_validation(&self) -> bool {
        matches!(self, OrderingError::Auth(e) if e.is_validation())
    }
}
