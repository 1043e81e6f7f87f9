//! Checkout.
//!
//! The demo has no payment flow. Checkout always reports that it is not
//! implemented and never touches the cart.

use crate::cart::Cart;
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Message shown when checkout is requested.
pub const CHECKOUT_NOT_IMPLEMENTED: &str = "Checkout flow not implemented in demo";

/// Result of a checkout request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckoutOutcome {
    /// Checkout is not available.
    NotImplemented {
        /// Informational message for the user.
        message: String,
        /// Units in the cart when checkout was requested.
        item_count: u64,
    },
}

impl CheckoutOutcome {
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, CheckoutOutcome::NotImplemented { .. })
    }

    /// Message for the user.
    pub fn message(&self) -> &str {
        match self {
            CheckoutOutcome::NotImplemented { message, .. } => message,
        }
    }

    /// View the outcome as an error for callers that use `?`.
    pub fn into_result(self) -> Result<(), CommerceError> {
        match self {
            CheckoutOutcome::NotImplemented { message, .. } => {
                Err(CommerceError::NotImplemented(message))
            }
        }
    }
}

/// Request checkout for a cart.
pub fn checkout(cart: &Cart) -> CheckoutOutcome {
    CheckoutOutcome::NotImplemented {
        message: CHECKOUT_NOT_IMPLEMENTED.to_string(),
        item_count: cart.item_count(),
    }
}
