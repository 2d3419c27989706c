//! # Foodie Express
//!
//! In-memory menu catalog and delivery order queue.
//!
//! ## Architecture
//!
//! - **Types**: Core values (MenuItem, ItemId, Price, ItemHandle)
//! - **Catalog**: Slab-linked menu list with a chained hash index
//! - **Orders**: FIFO queue of handles into the catalog
//! - **Engine**: Command parsing, execution and rendering for a shell
//!
//! ## Design Principles
//!
//! 1. **No Floating Point**: Prices are fixed-point cents
//! 2. **Arena Storage**: Every linked structure lives in a slab and links by key
//! 3. **Handles, not copies**: The index and the queue reference items by
//!    `(slot, id)`; stale handles are detected, never followed
//! 4. **Synchronous Execution**: One caller, every operation runs to completion

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: MenuItem, ItemId, Price, ItemHandle
pub mod types;

/// Menu catalog: linked list, hash index and merge sort
pub mod catalog;

/// Pending order queue
pub mod orders;

/// Command engine for a console shell
pub mod engine;

/// Construction-time settings
pub mod config;

/// Error type shared by all modules
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use catalog::{Catalog, HashIndex};
pub use config::EngineConfig;
pub use engine::{Command, DeliveryEngine, Outcome};
pub use error::{DeliveryError, Result};
pub use orders::OrderQueue;
pub use types::{ItemHandle, ItemId, MenuItem, Price};
