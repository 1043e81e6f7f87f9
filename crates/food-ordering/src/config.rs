//! Ordering configuration.
//!
//! Loaded from a TOML or JSON file, picked by extension. Every field has a
//! default, so an empty file yields the built-in demo setup.

use std::path::Path;

use anyhow::{Context, Result};
use food_commerce::catalog::{Catalog, MenuItem};
use food_commerce::{CommerceError, Currency, MenuItemId, Money};
use serde::{Deserialize, Serialize};

use crate::facade::CartPolicy;

/// Configuration for an ordering facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderingConfig {
    /// Brand shown in the navigation bar.
    pub store_name: String,

    /// Label shown instead of an email while nobody is logged in.
    pub guest_label: String,

    /// ISO currency code every menu price is in.
    pub currency: String,

    /// What `logout_with_default_policy` does with the cart.
    pub logout_cart_policy: CartPolicy,

    /// Menu override. The built-in sample menu is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu: Option<Vec<MenuItemConfig>>,
}

impl Default for OrderingConfig {
    fn default() -> Self {
        Self {
            store_name: "FoodDelivery".to_string(),
            guest_label: "Guest".to_string(),
            currency: Currency::INR.code().to_string(),
            logout_cart_policy: CartPolicy::Retain,
            menu: None,
        }
    }
}

/// A menu item as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItemConfig {
    pub id: u32,
    pub name: String,
    /// Price in the currency's smallest displayed unit.
    pub price: u64,
    #[serde(default)]
    pub description: String,
}

impl OrderingConfig {
    /// Load and validate config from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };

        config
            .validate()
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        Ok(config)
    }

    /// Save config to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Check that the currency is known and the menu is well formed.
    pub fn validate(&self) -> Result<(), CommerceError> {
        self.catalog().map(|_| ())
    }

    /// Parsed currency.
    pub fn currency(&self) -> Result<Currency, CommerceError> {
        self.currency.parse()
    }

    /// Build the catalog this config describes.
    pub fn catalog(&self) -> Result<Catalog, CommerceError> {
        let currency = self.currency()?;
        match &self.menu {
            None => Ok(Catalog::sample_in(currency)),
            Some(items) => {
                let items = items
                    .iter()
                    .map(|item| {
                        MenuItem::new(
                            MenuItemId::new(item.id),
                            item.name.clone(),
                            Money::new(item.price, currency),
                            item.description.clone(),
                        )
                    })
                    .collect();
                Catalog::new(currency, items)
            }
        }
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}
