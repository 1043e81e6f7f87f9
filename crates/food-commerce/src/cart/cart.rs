//! Cart and cart entry types.

use crate::cart::{CartSnapshot, Quantity, SnapshotLine};
use crate::catalog::MenuItem;
use crate::error::CommerceError;
use crate::ids::MenuItemId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A shopping cart.
///
/// Holds at most one entry per menu item, in the order items were first
/// added. Entries are only reachable through shared references, so the
/// one-entry-per-item rule and the quantity floor cannot be bypassed.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Default)]
pub struct Cart {
    currency: Currency,
    entries: Vec<CartEntry>,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            currency,
            entries: Vec::new(),
        }
    }

    /// Add one unit of an item.
    ///
    /// Inserts a new entry with quantity 1, or bumps the existing entry by
    /// one. Returns the entry's new quantity.
    ///
    /// Items from the cart's own catalog always succeed. An item priced in a
    /// different currency is rejected and the cart is left untouched.
    pub fn add(&mut self, item: &MenuItem) -> Result<Quantity, CommerceError> {
        if item.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: item.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.entries.iter_mut().find(|e| e.item_id == item.id) {
            existing.quantity = existing.quantity.incremented();
            return Ok(existing.quantity);
        }

        self.entries.push(CartEntry::new(item));
        Ok(Quantity::ONE)
    }

    /// Set an entry's quantity, clamped to a minimum of 1.
    ///
    /// Returns `false` and leaves the cart untouched if the item is not in
    /// the cart.
    pub fn set_quantity(&mut self, item_id: MenuItemId, requested: i64) -> bool {
        match self.entries.iter_mut().find(|e| e.item_id == item_id) {
            Some(entry) => {
                entry.quantity = Quantity::clamped(requested);
                true
            }
            None => false,
        }
    }

    /// Remove an entry entirely.
    pub fn remove(&mut self, item_id: MenuItemId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.item_id != item_id);
        self.entries.len() < len_before
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Sum of `quantity × unit price` over all entries.
    pub fn total(&self) -> Money {
        let amount = self
            .entries
            .iter()
            .map(|e| e.line_total().amount_minor)
            .fold(0_u64, u64::saturating_add);
        Money::new(amount, self.currency)
    }

    /// Sum of quantities over all entries.
    pub fn item_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity.get())).sum()
    }

    /// Number of distinct items.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Get the entry for an item.
    pub fn get(&self, item_id: MenuItemId) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.item_id == item_id)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Read-only projection for rendering.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot {
            entries: self.entries.iter().map(SnapshotLine::from).collect(),
            total: self.total(),
            item_count: self.item_count(),
            is_empty: self.is_empty(),
        }
    }
}

/// One item's aggregated selection within a cart.
///
/// Name and unit price are copied from the menu item when the entry is
/// created; menu items never change during a session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    /// Menu item this entry refers to.
    pub item_id: MenuItemId,
    /// Item name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity, at least 1.
    pub quantity: Quantity,
}

impl CartEntry {
    fn new(item: &MenuItem) -> Self {
        Self {
            item_id: item.id,
            name: item.name.clone(),
            unit_price: item.price,
            quantity: Quantity::ONE,
        }
    }

    /// `unit_price × quantity`.
    pub fn line_total(&self) -> Money {
        self.unit_price.times(self.quantity.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use proptest::prelude::*;

    fn item(catalog: &Catalog, id: u32) -> &MenuItem {
        catalog.get(MenuItemId::new(id)).unwrap()
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new(Currency::INR);
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.total(), Money::zero(Currency::INR));
    }

    #[test]
    fn test_add_item() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());

        let qty = cart.add(item(&catalog, 1)).unwrap();

        assert_eq!(qty, Quantity::ONE);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_add_same_item_increases_quantity() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        let pizza = item(&catalog, 1);

        cart.add(pizza).unwrap();
        cart.add(pizza).unwrap();
        let qty = cart.add(pizza).unwrap();

        assert_eq!(qty.get(), 3);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.get(pizza.id).unwrap().quantity.get(), 3);
    }

    #[test]
    fn test_add_rejects_other_currency() {
        let usd_menu = Catalog::sample_in(Currency::USD);
        let mut cart = Cart::new(Currency::INR);

        let result = cart.add(&usd_menu.list()[0]);

        assert_eq!(
            result,
            Err(CommerceError::CurrencyMismatch {
                expected: "INR".to_string(),
                got: "USD".to_string(),
            })
        );
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());

        cart.add(item(&catalog, 3)).unwrap();
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 3)).unwrap();

        let ids: Vec<u32> = cart.entries().iter().map(|e| e.item_id.get()).collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn test_total() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 2)).unwrap();

        assert_eq!(cart.total().amount_minor, 747); // 2*299 + 1*149
    }

    #[test]
    fn test_set_quantity() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        let dosa = item(&catalog, 4);
        cart.add(dosa).unwrap();

        assert!(cart.set_quantity(dosa.id, 5));
        assert_eq!(cart.item_count(), 5);
        assert_eq!(cart.total().amount_minor, 495);
    }

    #[test]
    fn test_set_quantity_floors_at_one() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        let dosa = item(&catalog, 4);
        cart.add(dosa).unwrap();
        cart.set_quantity(dosa.id, 4);

        assert!(cart.set_quantity(dosa.id, 0));
        assert_eq!(cart.get(dosa.id).unwrap().quantity, Quantity::ONE);

        assert!(cart.set_quantity(dosa.id, -3));
        assert_eq!(cart.get(dosa.id).unwrap().quantity, Quantity::ONE);
        assert_eq!(cart.unique_item_count(), 1);
    }

    #[test]
    fn test_set_quantity_unknown_item_is_noop() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        cart.add(item(&catalog, 1)).unwrap();
        let before = cart.clone();

        assert!(!cart.set_quantity(MenuItemId::new(2), 3));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_item() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 2)).unwrap();

        assert!(cart.remove(MenuItemId::new(1)));
        assert!(!cart.remove(MenuItemId::new(1)));
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.total().amount_minor, 149);
    }

    #[test]
    fn test_clear() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 3)).unwrap();
        cart.set_quantity(MenuItemId::new(3), 9);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_snapshot() {
        let catalog = Catalog::sample();
        let mut cart = Cart::new(catalog.currency());
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 1)).unwrap();
        cart.add(item(&catalog, 2)).unwrap();

        let snapshot = cart.snapshot();
        assert_eq!(snapshot.entries.len(), 2);
        assert_eq!(snapshot.item_count, 3);
        assert_eq!(snapshot.total.amount_minor, 747);
        assert!(!snapshot.is_empty);
        assert!(snapshot.entries[0].can_decrement);
        assert!(!snapshot.entries[1].can_decrement);
    }

    proptest! {
        #[test]
        fn prop_clamp_below_one_stores_one(q in i64::MIN..=1) {
            let catalog = Catalog::sample();
            let mut cart = Cart::new(catalog.currency());
            let pizza = item(&catalog, 1);
            cart.add(pizza).unwrap();
            cart.set_quantity(pizza.id, 50);

            cart.set_quantity(pizza.id, q);

            prop_assert_eq!(cart.get(pizza.id).unwrap().quantity, Quantity::ONE);
        }

        #[test]
        fn prop_one_entry_per_item(adds in prop::collection::vec(1u32..=4, 0..40)) {
            let catalog = Catalog::sample();
            let mut cart = Cart::new(catalog.currency());
            for id in &adds {
                cart.add(item(&catalog, *id)).unwrap();
            }

            let mut ids: Vec<u32> = cart.entries().iter().map(|e| e.item_id.get()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before);

            for entry in cart.entries() {
                let expected = adds.iter().filter(|id| **id == entry.item_id.get()).count();
                prop_assert_eq!(entry.quantity.get() as usize, expected);
            }
        }

        #[test]
        fn prop_total_matches_entries(adds in prop::collection::vec(1u32..=4, 0..40)) {
            let catalog = Catalog::sample();
            let mut cart = Cart::new(catalog.currency());
            for id in &adds {
                cart.add(item(&catalog, *id)).unwrap();
            }

            let expected: u64 = adds
                .iter()
                .map(|id| item(&catalog, *id).price.amount_minor)
                .sum();
            prop_assert_eq!(cart.total().amount_minor, expected);
            prop_assert_eq!(cart.item_count(), adds.len() as u64);
        }
    }
}
