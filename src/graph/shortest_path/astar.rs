//! A* search.
//!
//! Like Dijkstra, but the queue is keyed by `combine(distance, heuristic(v))`.
//! The heuristic must never overestimate for the result to be optimal; that
//! is the caller's contract. An inconsistent heuristic can finish a vertex
//! too early, so a later improvement re-opens it.

use core::marker::PhantomData;
use std::collections::HashMap;

use crate::collections::FibonacciQueue;
use crate::error::{GraphError, Result};
use crate::graph::access::{Color, ColorMap, HashColorMap};
use crate::graph::shortest_path::observer::{ObservableAlgorithm, ShortestPathObserver};
use crate::graph::shortest_path::relaxer::{DistanceRelaxer, ShortestDistance, Weight};
use crate::graph::shortest_path::search::RelaxVisitor;
use crate::graph::traits::IncidenceGraph;
use crate::graph::traversal::BreadthFirstSearch;

/// A* search over an [`IncidenceGraph`].
pub struct AStar<'g, G, W, H, D, R = ShortestDistance>
where
    G: IncidenceGraph,
{
    graph: &'g G,
    weights: W,
    heuristic: H,
    relaxer: R,
    colors: HashColorMap<G::Vertex>,
    distances: HashMap<G::Vertex, D>,
    queue: FibonacciQueue<G::Vertex, D, R>,
}

impl<'g, G, W, H, D> AStar<'g, G, W, H, D>
where
    G: IncidenceGraph,
{
    /// Starts building a search; graph, weights and heuristic are required.
    pub fn builder() -> AStarBuilder<'g, G, W, H, D> {
        AStarBuilder::new()
    }
}

impl<'g, G, W, H, D> AStar<'g, G, W, H, D>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    H: Fn(&G::Vertex) -> D,
    D: Weight,
{
    /// Creates a shortest-distance A* search.
    pub fn new(graph: &'g G, weights: W, heuristic: H) -> Self {
        Self::with_relaxer(graph, weights, heuristic, ShortestDistance)
    }
}

impl<'g, G, W, H, D, R> AStar<'g, G, W, H, D, R>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    H: Fn(&G::Vertex) -> D,
    D: Weight,
    R: DistanceRelaxer<D>,
{
    /// Creates an A* search whose distance algebra is `relaxer`.
    pub fn with_relaxer(graph: &'g G, weights: W, heuristic: H, relaxer: R) -> Self {
        Self {
            graph,
            weights,
            heuristic,
            relaxer,
            colors: HashColorMap::new(),
            distances: HashMap::new(),
            queue: FibonacciQueue::with_comparator(relaxer),
        }
    }

    /// Runs from every vertex the graph enumerates.
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
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` was never registered.
    pub fn distance(&self, vertex: &G::Vertex) -> Result<D> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Last heuristic-adjusted queue key of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` was never queued.
    pub fn cost(&self, vertex: &G::Vertex) -> Result<D> {
        self.queue
            .cost(vertex)
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

impl<G, W, H, D, R> ObservableAlgorithm for AStar<'_, G, W, H, D, R>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    H: Fn(&G::Vertex) -> D,
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

        let relaxer = self.relaxer;
        let heuristic = &self.heuristic;
        let mut visitor = RelaxVisitor {
            weights: &self.weights,
            key: |vertex: &G::Vertex, distance: D| relaxer.combine(distance, heuristic(vertex)),
            relaxer,
            distances: &mut self.distances,
            observer,
        };
        let outcome = BreadthFirstSearch::new(self.graph, &mut self.queue, &mut self.colors)
            .compute(root, &mut visitor);

        tracing::debug!(
            registered = self.distances.len(),
            ok = outcome.is_ok(),
            "a* finished"
        );
        outcome
    }
}

impl<G, W, H, D, R> core::fmt::Debug for AStar<'_, G, W, H, D, R>
where
    G: IncidenceGraph,
    D: core::fmt::Debug,
    R: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AStar")
            .field("relaxer", &self.relaxer)
            .field("distances", &self.distances)
            .finish_non_exhaustive()
    }
}

/// Builder for [`AStar`].
pub struct AStarBuilder<'g, G, W, H, D, R = ShortestDistance> {
    graph: Option<&'g G>,
    weights: Option<W>,
    heuristic: Option<H>,
    relaxer: R,
    _distance: PhantomData<fn() -> D>,
}

impl<'g, G, W, H, D> AStarBuilder<'g, G, W, H, D> {
    /// Creates a builder with the shortest-distance relaxer.
    pub fn new() -> Self {
        Self {
            graph: None,
            weights: None,
            heuristic: None,
            relaxer: ShortestDistance,
            _distance: PhantomData,
        }
    }
}

impl<G, W, H, D> Default for AStarBuilder<'_, G, W, H, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'g, G, W, H, D, R> AStarBuilder<'g, G, W, H, D, R> {
    /// Sets the searched graph.
    #[must_use]
    pub fn graph(mut self, graph: &'g G) -> Self {
        self.graph = Some(graph);
        self
    }

    /// Sets the edge weight function.
    #[must_use]
    pub fn weights(mut self, weights: W) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Sets the heuristic.
    #[must_use]
    pub fn heuristic(mut self, heuristic: H) -> Self {
        self.heuristic = Some(heuristic);
        self
    }

    /// Replaces the distance algebra.
    #[must_use]
    pub fn relaxer<R2>(self, relaxer: R2) -> AStarBuilder<'g, G, W, H, D, R2> {
        AStarBuilder {
            graph: self.graph,
            weights: self.weights,
            heuristic: self.heuristic,
            relaxer,
            _distance: PhantomData,
        }
    }

    /// Builds the search.
    ///
    /// # Errors
    /// [`GraphError::InvalidArgument`] naming the first missing collaborator.
    pub fn build(self) -> Result<AStar<'g, G, W, H, D, R>>
    where
        G: IncidenceGraph,
        W: Fn(&G::Edge) -> D,
        H: Fn(&G::Vertex) -> D,
        D: Weight,
        R: DistanceRelaxer<D>,
    {
        let graph = self.graph.ok_or(GraphError::InvalidArgument("graph"))?;
        let weights = self.weights.ok_or(GraphError::InvalidArgument("weights"))?;
        let heuristic = self
            .heuristic
            .ok_or(GraphError::InvalidArgument("heuristic"))?;
        Ok(AStar::with_relaxer(graph, weights, heuristic, self.relaxer))
    }
}

impl<G, W, H, D, R: core::fmt::Debug> core::fmt::Debug for AStarBuilder<'_, G, W, H, D, R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AStarBuilder")
            .field("graph", &self.graph.is_some())
            .field("weights", &self.weights.is_some())
            .field("heuristic", &self.heuristic.is_some())
            .field("relaxer", &self.relaxer)
            .finish()
    }
}
