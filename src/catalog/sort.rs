//! In-place merge sort over the slab-linked catalog.
//!
//! The sort relinks existing nodes; it never allocates or copies items.
//!
//! - Split: slow/fast walk. On odd lengths the front half keeps the extra node.
//! - Merge: iterative, taking the left head when prices are equal, which
//!   keeps the sort stable.
//!
//! Recursion happens only in [`merge_sort`], so stack depth is O(log n).

use slab::Slab;

use crate::catalog::ItemNode;

/// Sort the list starting at `head` by ascending price.
///
/// Returns the new head.
pub(crate) fn merge_sort(nodes: &mut Slab<ItemNode>, head: Option<usize>) -> Option<usize> {
    let first = head?;
    if nodes[first].next.is_none() {
        return Some(first);
    }

    let back = split(nodes, first);
    let front = merge_sort(nodes, Some(first));
    let back = merge_sort(nodes, back);
    merge(nodes, front, back)
}

/// Cut the list after its midpoint and return the head of the back half.
fn split(nodes: &mut Slab<ItemNode>, source: usize) -> Option<usize> {
    let mut slow = source;
    let mut fast = nodes[source].next;

    while let Some(f) = fast {
        fast = nodes[f].next;
        if let (Some(ahead), Some(step)) = (fast, nodes[slow].next) {
            slow = step;
            fast = nodes[ahead].next;
        }
    }

    nodes[slow].next.take()
}

/// Merge two sorted lists into one.
fn merge(nodes: &mut Slab<ItemNode>, mut left: Option<usize>, mut right: Option<usize>) -> Option<usize> {
    let mut head = None;
    let mut tail: Option<usize> = None;

    while let (Some(l), Some(r)) = (left, right) {
        let taken = if nodes[l].price() <= nodes[r].price() {
            left = nodes[l].next;
            l
        } else {
            right = nodes[r].next;
            r
        };

        match tail {
            Some(t) => nodes[t].next = Some(taken),
            None => head = Some(taken),
        }
        tail = Some(taken);
    }

    let rest = left.or(right);
    match tail {
        Some(t) => nodes[t].next = rest,
        None => head = rest,
    }
    head
}

// ============================================================================
// Unit Tests
// ============================================================================
