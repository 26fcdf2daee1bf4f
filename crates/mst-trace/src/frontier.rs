//! Candidate-edge priority queue.
//!
//! A binary min-heap of [`FrontierEntry`] values. Entries are never removed
//! when their destination joins the tree; the tracer discards them when they
//! surface at extraction time.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use mst_graph::{VertexId, Weight};
use serde::{Deserialize, Serialize};

/// A candidate edge leading out of the tree.
///
/// Ordered by `(weight, from, to)`: weight ascending under IEEE total order,
/// then the endpoint labels lexicographically. Equal-weight candidates
/// therefore always come out in the same order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrontierEntry {
    pub weight: Weight,
    pub from: VertexId,
    pub to: VertexId,
}

impl FrontierEntry {
    /// Create an entry.
    pub fn new(weight: Weight, from: VertexId, to: VertexId) -> Self {
        Self { weight, from, to }
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.from.cmp(&other.from))
            .then_with(|| self.to.cmp(&other.to))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

/// Min-heap of candidate edges. May hold stale entries.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate.
    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(Reverse(entry));
    }

    /// Remove and return the smallest candidate.
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Smallest candidate without removing it.
    pub fn peek(&self) -> Option<&FrontierEntry> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Owned copy of the contents in extraction order.
    pub fn view(&self) -> Vec<FrontierEntry> {
        let mut entries: Vec<_> = self.heap.iter().map(|Reverse(e)| e.clone()).collect();
        entries.sort();
        entries
    }
}
