//! Menu item record and its identifier.

use std::fmt;
use std::str::FromStr;

use crate::error::DeliveryError;
use crate::types::Price;

// ============================================================================
// ItemId
// ============================================================================

/// Identifier of a menu item.
///
/// Assigned by the catalog starting at 1. Identifiers increase strictly and
/// are never handed out twice, even after the item is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(u64);

impl ItemId {
    /// Wrap a raw identifier
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    /// Raw identifier value
    #[inline]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ItemId {
    type Err = DeliveryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| DeliveryError::invalid(format!("`{trimmed}` is not a food ID")))
    }
}

// ============================================================================
// MenuItem
// ============================================================================

/// A food item on the menu.
///
/// ## Example
///
/// ```
/// use foodie_express::types::{ItemId, MenuItem, Price};
///
/// let item = MenuItem::new(ItemId::new(1), "Burger", Price::from_cents(550));
/// assert!(item.name_contains("urg"));
/// assert!(!item.name_contains("burger"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    /// Catalog-assigned identifier
    pub id: ItemId,

    /// Display name
    pub name: String,

    /// Unit price
    pub price: Price,
}

impl MenuItem {
    /// Create a new menu item
    pub fn new(id: ItemId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    /// Case-sensitive substring match on the name
    #[inline]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }

    /// Append a stable byte encoding of this item to `out`.
    ///
    /// Layout: id (u64 LE), name length (u64 LE), name bytes, price cents (u64 LE).
    pub fn encode_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.id.get().to_le_bytes());
        out.extend_from_slice(&(self.name.len() as u64).to_le_bytes());
        out.extend_from_slice(self.name.as_bytes());
        out.extend_from_slice(&self.price.cents().to_le_bytes());
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
