//! Sizing knobs for the catalog and the order queue.

use crate::catalog::DEFAULT_BUCKET_COUNT;
use crate::error::{DeliveryError, Result};

/// Default number of pre-allocated catalog slots
pub const DEFAULT_ITEM_CAPACITY: usize = 64;

/// Default number of pre-allocated queue slots
pub const DEFAULT_QUEUE_CAPACITY: usize = 64;

/// Construction-time settings for a [`DeliveryEngine`](crate::engine::DeliveryEngine).
///
/// ## Example
///
/// ```
/// use foodie_express::config::EngineConfig;
///
/// let config = EngineConfig::default().with_bucket_count(101);
/// assert!(config.validate().is_ok());
/// assert!(EngineConfig::default().with_bucket_count(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Hash index bucket count, fixed for the catalog lifetime
    pub bucket_count: usize,

    /// Catalog slots to pre-allocate
    pub item_capacity: usize,

    /// Queue slots to pre-allocate
    pub queue_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            bucket_count: DEFAULT_BUCKET_COUNT,
            item_capacity: DEFAULT_ITEM_CAPACITY,
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl EngineConfig {
    pub fn with_bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = bucket_count;
        self
    }

    pub fn with_item_capacity(mut self, item_capacity: usize) -> Self {
        self.item_capacity = item_capacity;
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }

    /// Reject settings the index cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.bucket_count == 0 {
            return Err(DeliveryError::invalid("bucket count must be at least 1"));
        }
        Ok(())
    }
}
