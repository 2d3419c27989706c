//! Error types shared by the catalog, the order queue and the command engine.
//!
//! Every failure is reported to the immediate caller as a value. Nothing in
//! the core is fatal and nothing in the core prints; the shell decides how
//! to present an error and whether to re-prompt.

use thiserror::Error;

use crate::types::ItemId;

/// Errors produced by catalog, queue and command operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeliveryError {
    /// No catalog entry carries this identifier.
    #[error("food item with ID {id} not found")]
    NotFound { id: ItemId },

    /// Input rejected during validation (bad price, missing name, bad id).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Dequeue attempted with no pending orders.
    #[error("no orders in the queue to dispatch")]
    EmptyQueue,

    /// Removal attempted on a catalog with no entries.
    #[error("menu is empty")]
    EmptyCatalog,

    /// A queued order points at an entry that has since been deleted.
    #[error("order refers to food item {id}, which is no longer on the menu")]
    DanglingReference { id: ItemId },

    /// A command line that does not name a known command.
    #[error("unknown command `{0}` (try `help`)")]
    UnknownCommand(String),
}

impl DeliveryError {
    /// Shorthand for [`DeliveryError::InvalidInput`].
    pub fn invalid(msg: impl Into<String>) -> Self {
        DeliveryError::InvalidInput(msg.into())
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, DeliveryError>;
