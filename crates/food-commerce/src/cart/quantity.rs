//! Cart entry quantity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;

/// Quantity of a cart entry. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// The floor every requested quantity is clamped to.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// Clamp a requested quantity into range.
    ///
    /// Anything below 1 becomes 1; anything above `u32::MAX` saturates.
    pub fn clamped(requested: i64) -> Self {
        let value = u32::try_from(requested.max(1)).unwrap_or(u32::MAX);
        NonZeroU32::new(value).map_or(Self::ONE, Self)
    }

    /// Numeric value.
    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// One more, saturating.
    pub fn incremented(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
