//! Non-owning reference to a catalog entry.
//!
//! A handle pairs the slab slot where the entry lives with the entry's
//! identifier. Slots are recycled by the slab once an entry is deleted, but
//! identifiers never are, so the identifier doubles as a generation tag: a
//! handle whose slot now holds a different id is stale.

use crate::types::ItemId;

/// Reference to a menu item held by the hash index and the order queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle {
    slot: usize,
    id: ItemId,
}

impl ItemHandle {
    #[inline]
    pub(crate) fn new(slot: usize, id: ItemId) -> Self {
        Self { slot, id }
    }

    /// Slab slot of the referenced entry
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Identifier of the referenced entry
    #[inline]
    pub fn id(&self) -> ItemId {
        self.id
    }
}
