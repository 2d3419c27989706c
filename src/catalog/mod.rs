//! Menu catalog: linked item list plus chained hash index.
//!
//! ## Components
//!
//! - [`ItemNode`]: `MenuItem` plus the forward link to the next entry
//! - [`HashIndex`]: Fixed-bucket chained map from item ID to handle
//! - [`Catalog`]: The ordered menu, owner of both structures
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Add item | O(1) |
//! | Find / edit by ID | O(1) average |
//! | Delete by ID | O(n) (predecessor scan) |
//! | Search by name | O(n) |
//! | Sort by price | O(n log n) |

pub mod index;
pub mod menu;
pub mod node;
mod sort;

pub use index::{HashIndex, DEFAULT_BUCKET_COUNT};
pub use menu::{Catalog, Iter};
pub use node::ItemNode;

pub(crate) use sort::merge_sort;
