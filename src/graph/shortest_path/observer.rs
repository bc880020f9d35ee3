//! Observers of shortest-path searches.
//!
//! An observer is attached to an algorithm for the duration of a borrow:
//! [`ObservableAlgorithm::attach`] returns an [`Attached`] guard, every run
//! made through the guard reports to the observer, and dropping or
//! [`detach`](Attached::detach)ing the guard ends the attachment.

use core::hash::Hash;
use std::collections::HashMap;

use crate::error::Result;
use crate::graph::traits::GraphEdge;

/// Callbacks fired while a shortest-path search runs.
#[allow(unused_variables)]
pub trait ShortestPathObserver<V, E, D> {
    /// A vertex was reached for the first time.
    fn discover_vertex(&mut self, vertex: &V) {}

    /// A vertex is about to have its out-edges relaxed.
    fn examine_vertex(&mut self, vertex: &V) {}

    /// A vertex is done.
    fn finish_vertex(&mut self, vertex: &V) {}

    /// `edge` improved its target to `distance`.
    fn tree_edge(&mut self, edge: &E, distance: D) {}

    /// `edge` was examined and did not improve its target.
    fn edge_not_relaxed(&mut self, edge: &E) {}
}

impl<V, E, D> ShortestPathObserver<V, E, D> for () {}

impl<V, E, D, O> ShortestPathObserver<V, E, D> for &mut O
where
    O: ShortestPathObserver<V, E, D> + ?Sized,
{
    fn discover_vertex(&mut self, vertex: &V) {
        (**self).discover_vertex(vertex);
    }
    fn examine_vertex(&mut self, vertex: &V) {
        (**self).examine_vertex(vertex);
    }
    fn finish_vertex(&mut self, vertex: &V) {
        (**self).finish_vertex(vertex);
    }
    fn tree_edge(&mut self, edge: &E, distance: D) {
        (**self).tree_edge(edge, distance);
    }
    fn edge_not_relaxed(&mut self, edge: &E) {
        (**self).edge_not_relaxed(edge);
    }
}

impl<V, E, D, A, B> ShortestPathObserver<V, E, D> for (A, B)
where
    D: Copy,
    A: ShortestPathObserver<V, E, D>,
    B: ShortestPathObserver<V, E, D>,
{
    fn discover_vertex(&mut self, vertex: &V) {
        self.0.discover_vertex(vertex);
        self.1.discover_vertex(vertex);
    }
    fn examine_vertex(&mut self, vertex: &V) {
        self.0.examine_vertex(vertex);
        self.1.examine_vertex(vertex);
    }
    fn finish_vertex(&mut self, vertex: &V) {
        self.0.finish_vertex(vertex);
        self.1.finish_vertex(vertex);
    }
    fn tree_edge(&mut self, edge: &E, distance: D) {
        self.0.tree_edge(edge, distance);
        self.1.tree_edge(edge, distance);
    }
    fn edge_not_relaxed(&mut self, edge: &E) {
        self.0.edge_not_relaxed(edge);
        self.1.edge_not_relaxed(edge);
    }
}

/// A search that reports to a [`ShortestPathObserver`].
pub trait ObservableAlgorithm {
    /// Vertex type of the searched graph.
    type Vertex;
    /// Edge type of the searched graph.
    type Edge;
    /// Distance type.
    type Distance;

    /// Runs the search from `root` (or from every eligible vertex) while
    /// reporting to `observer`.
    ///
    /// # Errors
    /// Whatever the underlying search raises.
    fn run_observed<O>(&mut self, root: Option<Self::Vertex>, observer: &mut O) -> Result<()>
    where
        O: ShortestPathObserver<Self::Vertex, Self::Edge, Self::Distance>;

    /// Attaches `observer` until the returned guard is detached or dropped.
    fn attach<'a, O>(&'a mut self, observer: &'a mut O) -> Attached<'a, Self, O>
    where
        Self: Sized,
        O: ShortestPathObserver<Self::Vertex, Self::Edge, Self::Distance>,
    {
        Attached {
            algorithm: self,
            observer,
        }
    }
}

/// An algorithm with an attached observer.
#[derive(Debug)]
pub struct Attached<'a, A, O> {
    algorithm: &'a mut A,
    observer: &'a mut O,
}

impl<'a, A, O> Attached<'a, A, O>
where
    A: ObservableAlgorithm,
    O: ShortestPathObserver<A::Vertex, A::Edge, A::Distance>,
{
    /// Runs the search without a root.
    ///
    /// # Errors
    /// Whatever the underlying search raises.
    pub fn compute(&mut self) -> Result<()> {
        self.algorithm.run_observed(None, self.observer)
    }

    /// Runs the search from `root`.
    ///
    /// # Errors
    /// Whatever the underlying search raises.
    pub fn compute_from(&mut self, root: A::Vertex) -> Result<()> {
        self.algorithm.run_observed(Some(root), self.observer)
    }

    /// The attached algorithm.
    pub fn algorithm(&self) -> &A {
        &*self.algorithm
    }

    /// The attached observer.
    pub fn observer(&self) -> &O {
        &*self.observer
    }

    /// Ends the attachment and hands the algorithm back.
    pub fn detach(self) -> &'a mut A {
        self.algorithm
    }
}

/// Records the edge through which each vertex got its final distance.
#[derive(Debug, Clone)]
pub struct VertexPredecessorRecorder<V, E> {
    predecessors: HashMap<V, E>,
}

impl<V, E> VertexPredecessorRecorder<V, E> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            predecessors: HashMap::new(),
        }
    }

    /// All recorded predecessor edges keyed by target vertex.
    pub fn predecessors(&self) -> &HashMap<V, E> {
        &self.predecessors
    }

    /// Consumes the recorder, returning the predecessor map.
    pub fn into_predecessors(self) -> HashMap<V, E> {
        self.predecessors
    }

    /// Forgets every recorded edge.
    pub fn clear(&mut self) {
        self.predecessors.clear();
    }
}

impl<V: Eq + Hash, E: GraphEdge<V> + Clone> VertexPredecessorRecorder<V, E> {
    /// Returns the predecessor edge of `vertex`.
    pub fn predecessor(&self, vertex: &V) -> Option<&E> {
        self.predecessors.get(vertex)
    }

    /// Reconstructs the edge path ending at `vertex`.
    ///
    /// Returns `None` if `vertex` has no predecessor, or if the predecessor
    /// chain loops (which only a negative cycle can produce).
    pub fn path_to(&self, vertex: &V) -> Option<Vec<E>> {
        let mut edge = self.predecessors.get(vertex)?;
        let mut path = vec![edge.clone()];

        while let Some(prev) = self.predecessors.get(edge.source()) {
            // Cycle guard: a simple path never has more edges than recorded vertices.
            if path.len() > self.predecessors.len() {
                return None;
            }
            path.push(prev.clone());
            edge = prev;
        }

        path.reverse();
        Some(path)
    }
}

impl<V, E> Default for VertexPredecessorRecorder<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, D> ShortestPathObserver<V, E, D> for VertexPredecessorRecorder<V, E>
where
    V: Clone + Eq + Hash,
    E: GraphEdge<V> + Clone,
{
    fn tree_edge(&mut self, edge: &E, _distance: D) {
        self.predecessors.insert(edge.target().clone(), edge.clone());
    }
}

/// Records the last improved distance of each vertex.
#[derive(Debug, Clone)]
pub struct VertexDistanceRecorder<V, D> {
    distances: HashMap<V, D>,
}

impl<V, D> VertexDistanceRecorder<V, D> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self {
            distances: HashMap::new(),
        }
    }

    /// All recorded distances.
    pub fn distances(&self) -> &HashMap<V, D> {
        &self.distances
    }
}

impl<V: Eq + Hash, D: Copy> VertexDistanceRecorder<V, D> {
    /// Returns the recorded distance of `vertex`.
    pub fn distance(&self, vertex: &V) -> Option<D> {
        self.distances.get(vertex).copied()
    }
}

impl<V, D> Default for VertexDistanceRecorder<V, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E, D> ShortestPathObserver<V, E, D> for VertexDistanceRecorder<V, D>
where
    V: Clone + Eq + Hash,
    E: GraphEdge<V>,
{
    fn tree_edge(&mut self, edge: &E, distance: D) {
        self.distances.insert(edge.target().clone(), distance);
    }
}
