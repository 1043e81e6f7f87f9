//! Newtype ids for menu items.
//!
//! Menu ids are small stable integers assigned when the menu is defined, so
//! unlike session ids they are never generated at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a menu item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u32);

impl MenuItemId {
    /// Create an id from its numeric value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl From<MenuItemId> for u32 {
    fn from(id: MenuItemId) -> Self {
        id.0
    }
}
