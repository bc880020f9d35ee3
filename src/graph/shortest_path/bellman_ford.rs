//! Bellman-Ford shortest paths with negative-cycle detection.
//!
//! Negative weights are allowed. The search does not use the traversal engine:
//! it sweeps every edge up to `|V| - 1` times (stopping early after a quiet
//! sweep), then makes one detection sweep. A negative cycle is reported as a
//! flag, never as an error.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::shortest_path::observer::{ObservableAlgorithm, ShortestPathObserver};
use crate::graph::shortest_path::relaxer::{DistanceRelaxer, ShortestDistance, Weight};
use crate::graph::traits::{EdgeListGraph, GraphEdge, VertexListGraph};

/// Bellman-Ford over a graph that can list its vertices and edges.
pub struct BellmanFord<'g, G, W, D, R = ShortestDistance>
where
    G: VertexListGraph + EdgeListGraph,
{
    graph: &'g G,
    weights: W,
    relaxer: R,
    distances: HashMap<G::Vertex, D>,
    negative_cycle: bool,
}

impl<'g, G, W, D> BellmanFord<'g, G, W, D>
where
    G: VertexListGraph + EdgeListGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
{
    /// Creates a shortest-distance search over `graph`.
    pub fn new(graph: &'g G, weights: W) -> Self {
        Self::with_relaxer(graph, weights, ShortestDistance)
    }
}

impl<'g, G, W, D, R> BellmanFord<'g, G, W, D, R>
where
    G: VertexListGraph + EdgeListGraph,
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
            distances: HashMap::new(),
            negative_cycle: false,
        }
    }

    /// Runs with every vertex at distance zero and returns the
    /// negative-cycle flag, which then covers the whole graph.
    ///
    /// # Errors
    /// The sweep itself cannot fail; the `Result` matches the other searches.
    pub fn compute(&mut self) -> Result<bool> {
        self.run_observed(None, &mut ())?;
        Ok(self.negative_cycle)
    }

    /// Runs from `root` and returns the negative-cycle flag.
    ///
    /// # Errors
    /// The sweep itself cannot fail; the `Result` matches the other searches.
    pub fn compute_from(&mut self, root: G::Vertex) -> Result<bool> {
        self.run_observed(Some(root), &mut ())?;
        Ok(self.negative_cycle)
    }

    /// Whether the last run found a negative cycle reachable from its root.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Distance of `vertex`; unreached vertices report the initial distance.
    ///
    /// After a negative cycle was flagged the values are not meaningful.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if `vertex` was never registered.
    pub fn distance(&self, vertex: &G::Vertex) -> Result<D> {
        self.distances
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(vertex))
    }

    /// Returns `true` if the last run reached `vertex`.
    pub fn is_reached(&self, vertex: &G::Vertex) -> bool {
        self.distances
            .get(vertex)
            .is_some_and(|d| !self.relaxer.is_unreached(d))
    }

    /// Distances of every reached vertex.
    pub fn distances(&self) -> impl Iterator<Item = (&G::Vertex, &D)> + '_ {
        self.distances.iter().filter(move |(_, d)| !self.relaxer.is_unreached(d))
    }

    /// Candidate distance for `edge`'s target, if the edge improves it.
    fn candidate(&self, edge: &G::Edge) -> Option<D> {
        let source = *self.distances.get(edge.source())?;
        if self.relaxer.is_unreached(&source) {
            return None;
        }
        let candidate = self.relaxer.combine(source, (self.weights)(edge));
        let current = self
            .distances
            .get(edge.target())
            .copied()
            .unwrap_or_else(|| self.relaxer.initial_distance());
        self.relaxer
            .relax(&candidate, &current)
            .then_some(candidate)
    }
}

impl<G, W, D, R> ObservableAlgorithm for BellmanFord<'_, G, W, D, R>
where
    G: VertexListGraph + EdgeListGraph,
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
        let graph = self.graph;
        self.negative_cycle = false;
        self.distances.clear();

        let start = match &root {
            Some(_) => self.relaxer.initial_distance(),
            None => D::zero(),
        };
        for vertex in graph.vertices() {
            self.distances.insert(vertex, start);
        }
        if let Some(root) = root {
            observer.discover_vertex(&root);
            self.distances.insert(root, D::zero());
        }

        let passes = self.distances.len().saturating_sub(1);
        for pass in 0..passes {
            let mut changed = false;
            for edge in graph.edges() {
                match self.candidate(&edge) {
                    Some(distance) => {
                        tracing::trace!(?edge, ?distance, "relaxed");
                        self.distances.insert(edge.target().clone(), distance);
                        observer.tree_edge(&edge, distance);
                        changed = true;
                    }
                    None => observer.edge_not_relaxed(&edge),
                }
            }
            if !changed {
                tracing::trace!(pass, "converged early");
                break;
            }
        }

        if let Some(edge) = graph.edges().find(|edge| self.candidate(edge).is_some()) {
            tracing::warn!(?edge, "negative cycle detected");
            self.negative_cycle = true;
        }

        tracing::debug!(
            vertices = self.distances.len(),
            negative_cycle = self.negative_cycle,
            "bellman-ford finished"
        );
        Ok(())
    }
}

impl<G, W, D, R> core::fmt::Debug for BellmanFord<'_, G, W, D, R>
where
    G: VertexListGraph + EdgeListGraph,
    D: core::fmt::Debug,
    R: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BellmanFord")
            .field("relaxer", &self.relaxer)
            .field("distances", &self.distances)
            .field("negative_cycle", &self.negative_cycle)
            .finish_non_exhaustive()
    }
}
