//! Ordering domain types and logic for FoodDelivery.
//!
//! This crate holds the parts of the ordering core that carry real rules:
//!
//! - **Catalog**: the fixed menu of purchasable items
//! - **Cart**: aggregated selections, quantity clamping, totals
//! - **Checkout**: the (unimplemented) checkout outcome
//!
//! # Example
//!
//! ```
//! use food_commerce::prelude::*;
//!
//! # fn main() -> Result<(), CommerceError> {
//! let catalog = Catalog::sample();
//! let pizza = catalog.get(MenuItemId::new(1)).unwrap();
//! let burger = catalog.get(MenuItemId::new(2)).unwrap();
//!
//! let mut cart = Cart::new(catalog.currency());
//! cart.add(pizza)?;
//! cart.add(pizza)?;
//! cart.add(burger)?;
//!
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.total().amount_minor, 747);
//! assert_eq!(cart.total().display(), "\u{20b9}747");
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;
pub mod checkout;

pub use cart::{Cart, CartSnapshot};
pub use catalog::{Catalog, MenuItem};
pub use error::CommerceError;
pub use ids::MenuItemId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::MenuItemId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, MenuItem};

    // Cart
    pub use crate::cart::{Cart, CartEntry, CartSnapshot, Quantity, SnapshotLine};

    // Checkout
    pub use crate::checkout::{checkout, CheckoutOutcome};
}
