//! Best-first frontier of pending search nodes.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::node::NodeId;

/// Frontier ordering key.
///
/// Lower `f` first; on equal `f` the node inserted most recently wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierKey {
    pub f: u32,
    pub order: u64,
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f
            .cmp(&other.f)
            .then_with(|| other.order.cmp(&self.order))
    }
}

#[derive(Debug, PartialEq, Eq)]
struct FrontierEntry {
    key: Reverse<FrontierKey>,
    node: NodeId,
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Min-heap of node handles keyed by [`FrontierKey`].
///
/// Equivalent to keeping a list stably sorted by `f` and pushing new nodes
/// onto its front, without re-sorting on every pop.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_order: u64,
    high_water: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `node` ahead of every queued node with the same `f`.
    pub fn insert_front(&mut self, node: NodeId, f: u32) {
        let key = FrontierKey {
            f,
            order: self.next_order,
        };
        self.next_order += 1;
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.heap.len());
    }

    /// Remove the node with the lowest `f`, newest first on ties.
    pub fn pop_best(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.node)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Largest size the frontier has reached.
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{SearchNode, SearchTree};
    use crate::puzzle::Board;

    fn ids(count: usize) -> Vec<NodeId> {
        let mut tree = SearchTree::new();
        (0..count)
            .map(|_| tree.insert(SearchNode::root(Board::goal(2))))
            .collect()
    }

    #[test]
    fn lower_f_pops_first() {
        let n = ids(3);
        let mut frontier = Frontier::new();
        frontier.insert_front(n[0], 10);
        frontier.insert_front(n[1], 5);
        frontier.insert_front(n[2], 15);

        assert_eq!(frontier.pop_best(), Some(n[1]));
        assert_eq!(frontier.pop_best(), Some(n[0]));
        assert_eq!(frontier.pop_best(), Some(n[2]));
        assert_eq!(frontier.pop_best(), None);
    }

    #[test]
    fn ties_prefer_most_recent_insert() {
        let n = ids(4);
        let mut frontier = Frontier::new();
        frontier.insert_front(n[0], 3);
        frontier.insert_front(n[1], 3);
        frontier.insert_front(n[2], 2);
        frontier.insert_front(n[3], 3);

        assert_eq!(frontier.pop_best(), Some(n[2]));
        assert_eq!(frontier.pop_best(), Some(n[3]));
        assert_eq!(frontier.pop_best(), Some(n[1]));
        assert_eq!(frontier.pop_best(), Some(n[0]));
        assert!(frontier.is_empty());
    }

    #[test]
    fn key_order_is_f_then_newest() {
        let old = FrontierKey { f: 4, order: 1 };
        let new = FrontierKey { f: 4, order: 7 };
        let cheap = FrontierKey { f: 3, order: 0 };
        assert!(new < old);
        assert!(cheap < new);
    }

    #[test]
    fn high_water_survives_pops() {
        let n = ids(3);
        let mut frontier = Frontier::new();
        for id in &n {
            frontier.insert_front(*id, 1);
        }
        let _ = frontier.pop_best();
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.high_water(), 3);
    }
}
