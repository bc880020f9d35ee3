//! A vertex queue keyed by an external cost map.
//!
//! Shortest-path searches write a vertex's cost first and enqueue it second;
//! `update` then re-keys a queued vertex after its cost improved.

use core::hash::Hash;
use std::collections::HashMap;

use super::fibonacci_heap::{Comparator, FibonacciHeap, HeapError, NaturalOrder};
use crate::error::{GraphError, Result};
use crate::graph::traversal::VertexQueue;

/// A [`FibonacciHeap`] of vertices whose priorities live in a cost map.
pub struct FibonacciQueue<V, D, C = NaturalOrder> {
    heap: FibonacciHeap<V, D, C>,
    costs: HashMap<V, D>,
}

impl<V, D> FibonacciQueue<V, D> {
    /// Creates an empty queue ordered by `D: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<V, D> Default for FibonacciQueue<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, D, C> FibonacciQueue<V, D, C> {
    /// Creates an empty queue ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            heap: FibonacciHeap::with_comparator(comparator),
            costs: HashMap::new(),
        }
    }

    /// Number of queued vertices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` if no vertex is queued.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drops every queued vertex and every recorded cost.
    pub fn clear(&mut self) {
        self.heap.clear();
        self.costs.clear();
    }
}

impl<V, D, C> FibonacciQueue<V, D, C>
where
    V: Clone + Eq + Hash + core::fmt::Debug,
    D: Copy,
    C: Comparator<D>,
{
    /// Records the cost `vertex` will be queued (or re-keyed) with.
    pub fn set_cost(&mut self, vertex: V, cost: D) {
        self.costs.insert(vertex, cost);
    }

    /// Returns the last recorded cost of `vertex`.
    pub fn cost(&self, vertex: &V) -> Option<D> {
        self.costs.get(vertex).copied()
    }

    /// Returns `true` if `vertex` is currently queued.
    pub fn contains(&self, vertex: &V) -> bool {
        self.heap.contains(vertex)
    }

    /// Re-keys a queued vertex to its current recorded cost.
    ///
    /// A cost that does not improve the queued priority is ignored.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if the vertex has no recorded cost, or
    /// [`GraphError::Queue`] if it is not queued.
    pub fn update(&mut self, vertex: &V) -> Result<()> {
        let cost = self
            .cost(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))?;
        match self.heap.decrease_key(vertex, cost) {
            Ok(()) | Err(HeapError::NotImproved) => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

impl<V, D, C> VertexQueue<V> for FibonacciQueue<V, D, C>
where
    V: Clone + Eq + Hash + core::fmt::Debug,
    D: Copy,
    C: Comparator<D>,
{
    fn enqueue(&mut self, vertex: V) -> Result<()> {
        let cost = self
            .cost(&vertex)
            .ok_or_else(|| GraphError::vertex_not_found(&vertex))?;
        self.heap.insert(vertex, cost)?;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<V> {
        self.heap.pop().map(|(vertex, _)| vertex)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<V, D, C> core::fmt::Debug for FibonacciQueue<V, D, C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FibonacciQueue")
            .field("queued", &self.heap.len())
            .field("costs", &self.costs.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dequeues_by_recorded_cost() {
        let mut queue = FibonacciQueue::new();
        queue.set_cost("a", 5u32);
        queue.set_cost("b", 1);
        queue.set_cost("c", 3);
        for v in ["a", "b", "c"] {
            queue.enqueue(v).unwrap();
        }

        assert_eq!(queue.dequeue(), Some("b"));
        assert_eq!(queue.dequeue(), Some("c"));
        assert_eq!(queue.dequeue(), Some("a"));
        assert_eq!(queue.dequeue(), None);
    }

    #[test]
    fn enqueue_without_cost_fails() {
        let mut queue: FibonacciQueue<&str, u32> = FibonacciQueue::new();
        assert!(matches!(
            queue.enqueue("stray"),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn update_rekeys_and_ignores_non_improvement() {
        let mut queue = FibonacciQueue::new();
        queue.set_cost(1, 10u32);
        queue.set_cost(2, 5);
        queue.enqueue(1).unwrap();
        queue.enqueue(2).unwrap();

        queue.set_cost(1, 2);
        queue.update(&1).unwrap();
        queue.set_cost(2, 7);
        queue.update(&2).unwrap();

        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.cost(&2), Some(7));
    }

    #[test]
    fn update_of_unqueued_vertex_is_reported() {
        let mut queue = FibonacciQueue::new();
        queue.set_cost(9, 1u32);
        assert_eq!(
            queue.update(&9),
            Err(GraphError::Queue(HeapError::ItemNotFound))
        );
    }
}
