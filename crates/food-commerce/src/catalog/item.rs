//! Menu item type.

use crate::ids::MenuItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A purchasable item on the menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuItem {
    /// Stable item identifier.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Short description for the menu card.
    pub description: String,
}

impl MenuItem {
    /// Create a new menu item.
    pub fn new(
        id: MenuItemId,
        name: impl Into<String>,
        price: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            description: description.into(),
        }
    }
}
