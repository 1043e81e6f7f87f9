//! Cart snapshots handed to the presentation layer.

use crate::cart::CartEntry;
use crate::ids::MenuItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Read-only projection of a cart after an operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSnapshot {
    /// Entries in insertion order.
    pub entries: Vec<SnapshotLine>,
    /// Sum of line totals.
    pub total: Money,
    /// Sum of quantities, for the compact cart badge.
    pub item_count: u64,
    /// Whether the cart has no entries.
    pub is_empty: bool,
}

impl CartSnapshot {
    /// Snapshot of an empty cart.
    pub fn empty(currency: Currency) -> Self {
        Self {
            entries: Vec::new(),
            total: Money::zero(currency),
            item_count: 0,
            is_empty: true,
        }
    }

    /// Find the line for an item.
    pub fn line(&self, item_id: MenuItemId) -> Option<&SnapshotLine> {
        self.entries.iter().find(|l| l.item_id == item_id)
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotLine {
    pub item_id: MenuItemId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price × quantity`.
    pub line_total: Money,
    /// False once quantity is at the floor of 1.
    pub can_decrement: bool,
}

impl SnapshotLine {
    /// Label like "₹299 × 2".
    pub fn price_label(&self) -> String {
        format!("{} \u{00d7} {}", self.unit_price.display(), self.quantity)
    }
}

impl From<&CartEntry> for SnapshotLine {
    fn from(entry: &CartEntry) -> Self {
        let quantity = entry.quantity.get();
        Self {
            item_id: entry.item_id,
            name: entry.name.clone(),
            unit_price: entry.unit_price,
            quantity,
            line_total: entry.line_total(),
            can_decrement: quantity > 1,
        }
    }
}
