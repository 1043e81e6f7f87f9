//! The fixed menu.

use std::collections::HashSet;

use crate::catalog::MenuItem;
use crate::error::CommerceError;
use crate::ids::MenuItemId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// The built-in sample menu: `(id, name, price in rupees, description)`.
const SAMPLE_MENU: [(u32, &str, u64, &str); 4] = [
    (1, "Margherita Pizza", 299, "Classic cheese & tomato"),
    (2, "Veg Burger", 149, "Crispy patty & lettuce"),
    (3, "Pasta Alfredo", 249, "Creamy white sauce pasta"),
    (4, "Masala Dosa", 99, "Crispy dosa with chutney"),
];

/// Immutable, ordered list of menu items.
///
/// Ids are unique and every item is priced in the catalog currency. Both are
/// checked once in [`Catalog::new`]; nothing mutates a catalog afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Catalog {
    currency: Currency,
    items: Vec<MenuItem>,
}

impl Catalog {
    /// Build a catalog from items, keeping their order.
    pub fn new(currency: Currency, items: Vec<MenuItem>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CommerceError::DuplicateItem(item.id));
            }
            if item.price.currency != currency {
                return Err(CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: item.price.currency.code().to_string(),
                });
            }
        }
        Ok(Self { currency, items })
    }

    /// The built-in sample menu priced in INR.
    pub fn sample() -> Self {
        Self::sample_in(Currency::INR)
    }

    /// The built-in sample menu priced in the given currency.
    pub fn sample_in(currency: Currency) -> Self {
        let items = SAMPLE_MENU
            .iter()
            .map(|&(id, name, price, description)| {
                MenuItem::new(
                    MenuItemId::new(id),
                    name,
                    Money::new(price, currency),
                    description,
                )
            })
            .collect();
        Self { currency, items }
    }

    /// All items in menu order.
    pub fn list(&self) -> &[MenuItem] {
        &self.items
    }

    /// Look up an item by id.
    pub fn get(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Currency every item is priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}
