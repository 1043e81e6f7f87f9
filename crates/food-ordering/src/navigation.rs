//! Navigation signals for the routing layer.
//!
//! The facade never navigates. It tells the caller which view should come
//! next and what the navigation bar should show.

use food_auth::{Identity, SessionState};
use serde::Serialize;

/// Views the routing layer switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Login,
    Menu,
    Cart,
}

impl View {
    /// View shown when the app starts.
    pub fn initial() -> Self {
        View::Login
    }

    /// Route path for the view.
    pub fn path(&self) -> &'static str {
        match self {
            View::Login => "/",
            View::Menu => "/menu",
            View::Cart => "/cart",
        }
    }
}

/// Result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub identity: Identity,
    /// Where to go after logging in.
    pub next_view: View,
}

/// What the navigation bar renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub brand: String,
    /// Email when logged in, otherwise the guest label.
    pub user_label: String,
    /// Units in the cart.
    pub cart_count: u64,
}

impl NavBar {
    pub(crate) fn new(
        brand: &str,
        guest_label: &str,
        session: &SessionState,
        cart_count: u64,
    ) -> Self {
        let user_label = session
            .identity()
            .map_or_else(|| guest_label.to_string(), |id| id.email().to_string());
        Self {
            brand: brand.to_string(),
            user_label,
            cart_count,
        }
    }

    /// Label for the cart link, e.g. "Cart (3)".
    pub fn cart_link_label(&self) -> String {
        format!("Cart ({})", self.cart_count)
    }
}
