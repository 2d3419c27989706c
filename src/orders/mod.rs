//! Delivery order queue.
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Enqueue | O(1) |
//! | Dequeue (dispatch) | O(1) |
//! | List pending | O(n) |

pub mod queue;

pub use queue::{Iter, OrderQueue};
