//! Ordering facade for FoodDelivery.
//!
//! [`OrderingFacade`] is the single entry point a presentation or routing
//! layer talks to. It owns one session, one cart and the menu, and answers
//! every intent with the state the caller needs to render next.
//!
//! ```
//! use food_ordering::prelude::*;
//!
//! let mut ordering = OrderingFacade::with_sample_menu();
//! let pizza = ordering.browse_menu()[0].clone();
//!
//! ordering.add_to_cart(&pizza).unwrap();
//! let outcome = ordering.do_login("a@b.com").unwrap();
//!
//! assert_eq!(outcome.next_view, View::Menu);
//! assert_eq!(ordering.cart_snapshot().item_count, 1);
//! assert!(ordering.checkout().is_not_implemented());
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod navigation;
pub mod telemetry;

pub use config::OrderingConfig;
pub use error::OrderingError;
pub use facade::{CartPolicy, OrderingFacade};
pub use navigation::{LoginOutcome, NavBar, View};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{MenuItemConfig, OrderingConfig};
    pub use crate::error::OrderingError;
    pub use crate::facade::{CartPolicy, OrderingFacade};
    pub use crate::navigation::{LoginOutcome, NavBar, View};

    pub use food_auth::{AuthError, Identity, LoginForm, SessionState};
    pub use food_commerce::prelude::*;
}
