//! Priority frontier shared by the heuristic searches.

use crate::search::HeuristicValue;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;
use std::hash::Hash;

/// Ordering key of a heap entry: lowest priority first, and among equal
/// priorities the entry that was pushed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct HeapKey {
    priority: HeuristicValue,
    sequence: u64,
}

/// A min-heap of frontier items with a deterministic tie-break on insertion
/// order. Items must be unique, which holds for paths as every path is only
/// ever generated once.
#[derive(Debug)]
pub struct HeapFrontier<T: Hash + Eq> {
    queue: PriorityQueue<T, Reverse<HeapKey>>,
    next_sequence: u64,
}

impl<T: Hash + Eq> Default for HeapFrontier<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> HeapFrontier<T> {
    pub fn new() -> Self {
        Self {
            queue: PriorityQueue::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: HeuristicValue) {
        let key = HeapKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.queue.push(item, Reverse(key));
    }

    /// Remove the item with the lowest priority, returning it together with
    /// that priority.
    pub fn pop(&mut self) -> Option<(T, HeuristicValue)> {
        self.queue
            .pop()
            .map(|(item, Reverse(key))| (item, key.priority))
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_priority_first() {
        let mut frontier = HeapFrontier::new();
        frontier.push("far", (3.).into());
        frontier.push("near", (1.).into());
        frontier.push("middle", (2.).into());
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(("near", (1.).into())));
        assert_eq!(frontier.pop(), Some(("middle", (2.).into())));
        assert_eq!(frontier.pop(), Some(("far", (3.).into())));
        assert_eq!(frontier.pop(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn ties_pop_in_insertion_order() {
        let mut frontier = HeapFrontier::new();
        for item in ["a", "b", "c", "d"] {
            frontier.push(item, (1.).into());
        }
        frontier.push("z", (0.5).into());
        let order: Vec<_> = std::iter::from_fn(|| frontier.pop().map(|(item, _)| item)).collect();
        assert_eq!(order, vec!["z", "a", "b", "c", "d"]);
    }

    #[test]
    fn clear_empties() {
        let mut frontier = HeapFrontier::new();
        frontier.push(1, (1.).into());
        frontier.clear();
        assert!(frontier.is_empty());
    }
}
