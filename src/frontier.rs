//! The frontier: pending nodes ordered by the run's insertion policy.
//!
//! One sequence backs all three policies. Breadth-first appends at the
//! tail; the two sorted policies splice into position with a single
//! linear scan. Sorted inserts are stable: among equal keys, arrival
//! order is preserved, which (together with the fixed expansion order)
//! makes every run deterministic.

use std::collections::VecDeque;

use crate::tree::{NodeId, SearchTree};

/// One pending node plus the sort key copied at insertion time.
///
/// Scores on tree nodes never change, so the copy cannot go stale.
#[derive(Debug, Clone, Copy)]
struct Entry {
    key: u32,
    node: NodeId,
}

/// An ordered collection of nodes awaiting expansion.
#[derive(Debug, Default)]
pub struct Frontier {
    entries: VecDeque<Entry>,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any entries remain.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pending entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends `node` at the tail unconditionally (breadth-first policy).
    pub fn enqueue_fifo(&mut self, node: NodeId) {
        self.entries.push_back(Entry { key: 0, node });
    }

    /// Inserts `node` in ascending goal-distance order (best-first policy).
    pub fn enqueue_by_heuristic(&mut self, node: NodeId, tree: &SearchTree) {
        self.insert_sorted(tree.node(node).goal_distance, node);
    }

    /// Inserts `node` in ascending combined-cost order (a-star policy).
    pub fn enqueue_by_combined_cost(&mut self, node: NodeId, tree: &SearchTree) {
        self.insert_sorted(tree.node(node).combined_cost, node);
    }

    /// Removes and returns the head, or `None` when the frontier is empty.
    pub fn dequeue(&mut self) -> Option<NodeId> {
        self.entries.pop_front().map(|entry| entry.node)
    }

    /// Shared sorted insert: fast front insertion when the key beats the
    /// head strictly, else scan to the first entry whose key strictly
    /// exceeds `key` and splice in before it. Equal keys are passed over,
    /// so ties keep arrival order.
    fn insert_sorted(&mut self, key: u32, node: NodeId) {
        let entry = Entry { key, node };
        match self.entries.front() {
            Some(head) if key < head.key => self.entries.push_front(entry),
            _ => {
                let position = self
                    .entries
                    .iter()
                    .position(|existing| existing.key > key)
                    .unwrap_or(self.entries.len());
                self.entries.insert(position, entry);
            }
        }
    }
}
