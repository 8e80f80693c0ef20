use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority frontier for shortest path search.
///
/// Entries are never updated in place: a better distance for a node is pushed
/// as a new entry and the outdated one is discarded by the caller when it
/// surfaces (lazy deletion). Ties on priority pop in an unspecified order.
#[derive(Debug)]
pub struct Frontier<V, P>
where
    V: Eq + Ord + Debug,
    P: Ord + Copy + Debug,
{
    heap: BinaryHeap<Reverse<(P, V)>>,
}

impl<V, P> Frontier<V, P>
where
    V: Eq + Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Creates a frontier holding a single entry
    pub fn seeded(item: V, priority: P) -> Self {
        let mut frontier = Self::new();
        frontier.push(item, priority);
        frontier
    }

    /// Number of entries, stale ones included
    pub fn pending(&self) -> usize {
        self.heap.len()
    }

    pub fn push(&mut self, item: V, priority: P) {
        self.heap.push(Reverse((priority, item)));
    }

    /// Removes the entry with the smallest priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap.pop().map(|Reverse((priority, item))| (item, priority))
    }
}

impl<V, P> Default for Frontier<V, P>
where
    V: Eq + Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
