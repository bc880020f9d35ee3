//! Dijkstra's single-source shortest paths.
//!
//! Runs the breadth-first engine with a [`FibonacciQueue`] frontier keyed by
//! tentative distance. Edge weights must not improve on zero under the
//! relaxer's order (i.e. be non-negative for [`ShortestDistance`]); this is
//! checked lazily, the first time each edge is examined.
//!
//! ### Performance Characteristics
//! | Phase | Complexity | Notes |
//! |-------|------------|-------|
//! | queue operations | \(O(m + n \log n)\) | Fibonacci heap `decrease_key` is \(O(1)\) amortized |
//! | bookkeeping | \(O(n)\) expected | Hashed colors and distances |

use std::collections::HashMap;

use crate::collections::FibonacciQueue;
use crate::error::{GraphError, Result};
use crate::graph::access::{Color, ColorMap, HashColorMap};
use crate::graph::shortest_path::observer::{ObservableAlgorithm, ShortestPathObserver};
use crate::graph::shortest_path::relaxer::{DistanceRelaxer, ShortestDistance, Weight};
use crate::graph::shortest_path::search::RelaxVisitor;
use crate::graph::traits::IncidenceGraph;
use crate::graph::traversal::BreadthFirstSearch;

/// Dijkstra's algorithm over an [`IncidenceGraph`].
pub struct Dijkstra<'g, G, W, D, R = ShortestDistance>
where
    G: IncidenceGraph,
{
    graph: &'g G,
    weights: W,
    relaxer: R,
    colors: HashColorMap<G::Vertex>,
    distances: HashMap<G::Vertex, D>,
    queue: FibonacciQueue<G::Vertex, D, R>,
}

impl<'g, G, W, D> Dijkstra<'g, G, W, D>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
{
    /// Creates a shortest-distance search over `graph`.
    pub fn new(graph: &'g G, weights: W) -> Self {
        Self::with_relaxer(graph, weights, ShortestDistance)
    }
}

impl<'g, G, W, D, R> Dijkstra<'g, G, W, D, R>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
    R: DistanceRelaxer<D>,
{
    /// Creates a search whose distance algebra is `relaxer`.
    pub fn with_relaxer(graph: &'g G, weights: W, relaxer: R) -> Self {
        Self {
            graph,
            weights,
            relaxer,
            colors: HashColorMap::new(),
            distances: HashMap::new(),
            queue: FibonacciQueue::with_comparator(relaxer),
        }
    }

    /// The searched graph.
    pub fn graph(&self) -> &'g G {
        self.graph
    }

    /// The distance algebra.
    pub fn relaxer(&self) -> R {
        self.relaxer
    }

    /// Runs from every vertex the graph enumerates, each unreached vertex
    /// starting a new tree at distance zero.
    ///
    /// # Errors
    /// - [`GraphError::RootRequired`] if the graph cannot enumerate vertices.
    /// - [`GraphError::NegativeWeight`] on the first offending edge.
    pub fn compute(&mut self) -> Result<()> {
        self.run_observed(None, &mut ())
    }

    /// Runs from `root`.
    ///
    /// # Errors
    /// [`GraphError::NegativeWeight`] on the first offending edge.
    pub fn compute_from(&mut self, root: G::Vertex) -> Result<()> {
        self.run_observed(Some(root), &mut ())
    }

    /// Distance of `vertex` from its root.
    ///
    /// A vertex registered in the last run but never reached reports the
    /// relaxer's initial distance.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` was never registered.
    pub fn distance(&self, vertex: &G::Vertex) -> Result<D> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Final color of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` was never registered.
    pub fn color(&self, vertex: &G::Vertex) -> Result<Color> {
        self.colors
            .color(vertex)
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Returns `true` if the last run reached `vertex`.
    ///
    /// A vertex queued through an edge that could not improve on the initial
    /// distance is colored but not reached.
    pub fn is_reached(&self, vertex: &G::Vertex) -> bool {
        self.colors
            .color(vertex)
            .is_some_and(|color| color != Color::White)
            && self
                .distances
                .get(vertex)
                .is_some_and(|d| !self.relaxer.is_unreached(d))
    }

    /// Distances of every reached vertex.
    pub fn distances(&self) -> impl Iterator<Item = (&G::Vertex, &D)> + '_ {
        self.distances
            .iter()
            .filter(move |(vertex, _)| self.is_reached(vertex))
    }
}

impl<G, W, D, R> ObservableAlgorithm for Dijkstra<'_, G, W, D, R>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
    R: DistanceRelaxer<D>,
{
    type Vertex = G::Vertex;
    type Edge = G::Edge;
    type Distance = D;

    #[tracing::instrument(level = "debug", skip_all, fields(root = ?root))]
    fn run_observed<O>(&mut self, root: Option<G::Vertex>, observer: &mut O) -> Result<()>
    where
        O: ShortestPathObserver<G::Vertex, G::Edge, D>,
    {
        self.distances.clear();
        self.queue.clear();

        let mut visitor = RelaxVisitor {
            weights: &self.weights,
            key: |_: &G::Vertex, distance: D| distance,
            relaxer: self.relaxer,
            distances: &mut self.distances,
            observer,
        };
        let outcome = BreadthFirstSearch::new(self.graph, &mut self.queue, &mut self.colors)
            .compute(root, &mut visitor);

        tracing::debug!(
            registered = self.distances.len(),
            ok = outcome.is_ok(),
            "dijkstra finished"
        );
        outcome
    }
}

impl<G, W, D, R> core::fmt::Debug for Dijkstra<'_, G, W, D, R>
where
    G: IncidenceGraph,
    D: core::fmt::Debug,
    R: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Dijkstra")
            .field("relaxer", &self.relaxer)
            .field("distances", &self.distances)
            .finish_non_exhaustive()
    }
}
