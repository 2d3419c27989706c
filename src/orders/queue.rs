//! FIFO queue of pending delivery orders.
//!
//! ## Queue Structure
//!
//! ```text
//! head (oldest) -> order2 -> order3 -> tail (newest)
//! ```
//!
//! - New orders are appended at the tail
//! - Dispatch consumes from the head
//! - Nodes live in a slab and link forward by slab key
//!
//! Each node stores an [`ItemHandle`], not a copy of the item. Use
//! [`Catalog::resolve`](crate::catalog::Catalog::resolve) to read the item
//! back; it reports a dangling reference if the item was deleted while the
//! order was waiting.

use slab::Slab;

use crate::error::{DeliveryError, Result};
use crate::types::ItemHandle;

/// One pending order.
#[derive(Debug, Clone)]
struct OrderNode {
    item: ItemHandle,
    next: Option<usize>,
}

/// Pending orders in arrival order.
#[derive(Debug, Clone, Default)]
pub struct OrderQueue {
    nodes: Slab<OrderNode>,

    /// Oldest order (slab key), first to be dispatched
    head: Option<usize>,

    /// Newest order (slab key)
    tail: Option<usize>,
}

impl OrderQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with pre-allocated slots
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Slab::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Number of pending orders
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if no orders are pending
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Append an order at the tail
    ///
    /// # Errors
    ///
    /// [`DeliveryError::InvalidInput`] if `item` is `None` (the caller's
    /// lookup found nothing). The queue is left unchanged.
    pub fn enqueue(&mut self, item: Option<ItemHandle>) -> Result<()> {
        let item = item.ok_or_else(|| DeliveryError::invalid("cannot place an order without a food item"))?;
        self.push_back(item);
        Ok(())
    }

    /// Append a known-good handle at the tail
    pub fn push_back(&mut self, item: ItemHandle) {
        let key = self.nodes.insert(OrderNode { item, next: None });

        match self.tail {
            // Link the old tail to the new node
            Some(tail) => self.nodes[tail].next = Some(key),
            // Empty queue - this is also the head
            None => self.head = Some(key),
        }
        self.tail = Some(key);
    }

    /// Remove and return the oldest order
    ///
    /// # Errors
    ///
    /// [`DeliveryError::EmptyQueue`] if nothing is pending.
    pub fn dequeue(&mut self) -> Result<ItemHandle> {
        let key = self.head.ok_or(DeliveryError::EmptyQueue)?;
        let node = self.nodes.remove(key);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.item)
    }

    /// The oldest order, without removing it
    #[inline]
    pub fn peek(&self) -> Option<ItemHandle> {
        self.head.map(|key| self.nodes[key].item)
    }

    /// Pending orders, oldest first
    pub fn list_all(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }
}

/// Iterator over pending orders in FIFO order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    nodes: &'a Slab<OrderNode>,
    cursor: Option<usize>,
}

impl Iterator for Iter<'_> {
    type Item = ItemHandle;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node.item)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
