//! Shopping cart module.
//!
//! Contains the cart, its entries, the quantity type and cart snapshots.

mod cart;
mod quantity;
mod snapshot;

pub use cart::{Cart, CartEntry};
pub use quantity::Quantity;
pub use snapshot::{CartSnapshot, SnapshotLine};
