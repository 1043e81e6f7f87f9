//! Menu catalog module.
//!
//! Contains the menu item type and the fixed, read-only catalog.

mod item;
mod menu;

pub use item::MenuItem;
pub use menu::Catalog;
