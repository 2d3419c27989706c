//! Chained hash index from item identifier to catalog handle.
//!
//! ## Design
//!
//! A fixed array of buckets, each the head of a singly linked chain. Chain
//! nodes live in their own slab and link to each other by slab key.
//!
//! ```text
//! buckets[0] -> None
//! buckets[1] -> [key 48] -> [key 1] -> None
//! buckets[2] -> [key 2] -> None
//! ```
//!
//! - Bucket = id modulo bucket count (a prime by default)
//! - New nodes are prepended to their chain
//! - The bucket count never changes after construction
//!
//! The index never checks for duplicate keys on insert. The catalog hands
//! out unique ids, so a duplicate can only come from a caller bug.

use slab::Slab;

use crate::types::{ItemHandle, ItemId};

/// Default number of buckets (prime, to spread sequential ids)
pub const DEFAULT_BUCKET_COUNT: usize = 47;

/// One link in a bucket chain.
#[derive(Debug, Clone)]
struct ChainNode {
    key: ItemId,
    handle: ItemHandle,
    next: Option<usize>,
}

/// Separate-chaining hash index over item ids.
#[derive(Debug, Clone)]
pub struct HashIndex {
    /// Chain head per bucket (slab key into `nodes`)
    buckets: Vec<Option<usize>>,

    /// Chain node storage
    nodes: Slab<ChainNode>,
}

impl Default for HashIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl HashIndex {
    /// Create an index with [`DEFAULT_BUCKET_COUNT`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Create an index with a fixed number of buckets
    ///
    /// A bucket count of zero is raised to one.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self {
            buckets: vec![None; bucket_count.max(1)],
            nodes: Slab::new(),
        }
    }

    /// Create an index with a fixed bucket count and room for `capacity` keys
    pub fn with_capacity(bucket_count: usize, capacity: usize) -> Self {
        Self {
            buckets: vec![None; bucket_count.max(1)],
            nodes: Slab::with_capacity(capacity),
        }
    }

    #[inline]
    fn bucket_of(&self, key: ItemId) -> usize {
        (key.get() % self.buckets.len() as u64) as usize
    }

    /// Prepend `key -> handle` to its bucket chain
    pub fn insert(&mut self, key: ItemId, handle: ItemHandle) {
        let bucket = self.bucket_of(key);
        let next = self.buckets[bucket];
        let node = self.nodes.insert(ChainNode { key, handle, next });
        self.buckets[bucket] = Some(node);
    }

    /// Look up the handle stored for `key`
    pub fn find(&self, key: ItemId) -> Option<ItemHandle> {
        let mut cursor = self.buckets[self.bucket_of(key)];
        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            if node.key == key {
                return Some(node.handle);
            }
            cursor = node.next;
        }
        None
    }

    /// Unlink the first entry for `key`
    ///
    /// Returns the removed handle, or `None` (and changes nothing) when the
    /// key is absent.
    pub fn remove(&mut self, key: ItemId) -> Option<ItemHandle> {
        let bucket = self.bucket_of(key);
        let mut prev: Option<usize> = None;
        let mut cursor = self.buckets[bucket];

        while let Some(slot) = cursor {
            let node = &self.nodes[slot];
            let next = node.next;
            if node.key == key {
                match prev {
                    Some(p) => self.nodes[p].next = next,
                    None => self.buckets[bucket] = next,
                }
                return Some(self.nodes.remove(slot).handle);
            }
            prev = Some(slot);
            cursor = next;
        }
        None
    }

    /// Check whether `key` is indexed
    #[inline]
    pub fn contains(&self, key: ItemId) -> bool {
        self.find(key).is_some()
    }

    /// Number of indexed keys
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the index is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of buckets (fixed for the index lifetime)
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Keys per bucket
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.bucket_count() as f64
    }

    /// Length of the chain in one bucket
    pub fn chain_len(&self, bucket: usize) -> usize {
        let mut len = 0;
        let mut cursor = self.buckets.get(bucket).copied().flatten();
        while let Some(slot) = cursor {
            len += 1;
            cursor = self.nodes[slot].next;
        }
        len
    }

    /// Length of the longest chain across all buckets
    pub fn longest_chain(&self) -> usize {
        (0..self.bucket_count())
            .map(|bucket| self.chain_len(bucket))
            .max()
            .unwrap_or(0)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
