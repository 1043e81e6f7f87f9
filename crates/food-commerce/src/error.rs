//! Commerce error types.

use thiserror::Error;

use crate::ids::MenuItemId;

/// Errors that can occur in menu and cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Menu item not found in the catalog.
    #[error("Menu item not found: {0}")]
    ItemNotFound(MenuItemId),

    /// The same menu item id was defined twice.
    #[error("Duplicate menu item id: {0}")]
    DuplicateItem(MenuItemId),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Unknown currency code.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Functionality the demo does not provide.
    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

impl CommerceError {
    /// Check if this error is informational rather than a failure.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, CommerceError::NotImplemented(_))
    }
}
