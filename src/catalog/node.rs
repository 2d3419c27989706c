//! Catalog node for slab-based storage.
//!
//! ## Design
//!
//! `ItemNode` wraps a `MenuItem` with a single forward link. The catalog is
//! a singly linked list threaded through the slab: `next` is the slab key of
//! the following entry, `None` on the last one.
//!
//! There is no back link, so unlinking an entry needs the predecessor found
//! by a scan from the head.

use crate::types::{ItemId, MenuItem, Price};

/// Menu item node stored in the slab.
#[derive(Debug, Clone)]
pub struct ItemNode {
    /// The item data
    pub item: MenuItem,

    /// Next entry in catalog order (slab key)
    pub next: Option<usize>,
}

impl ItemNode {
    /// Create a new node (not yet linked)
    #[inline]
    pub fn new(item: MenuItem) -> Self {
        Self { item, next: None }
    }

    /// Get the item ID
    #[inline]
    pub fn id(&self) -> ItemId {
        self.item.id
    }

    /// Get the item price
    #[inline]
    pub fn price(&self) -> Price {
        self.item.price
    }
}
