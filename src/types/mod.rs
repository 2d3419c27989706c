//! Core value types for the menu catalog.
//!
//! ## Types
//!
//! - [`ItemId`]: Catalog-assigned, never-reused identifier
//! - [`MenuItem`]: A food item (id, name, price)
//! - [`Price`]: Non-negative two-decimal amount stored as cents
//! - [`ItemHandle`]: Non-owning reference into catalog storage
//!
//! ## Fixed-Point Arithmetic
//!
//! Prices are stored as `u64` cents (scaled by 10^2).
//! Example: 5.50 is stored as 550u64

mod handle;
mod item;
pub mod price;

pub use handle::ItemHandle;
pub use item::{ItemId, MenuItem};
pub use price::Price;
