//! Single-source shortest-path searches.
//!
//! - `dijkstra`: best-first search, non-negative weights
//! - `astar`: best-first search guided by a heuristic
//! - `bellman_ford`: edge sweeps, negative weights and cycle detection
//! - `dag`: one pass in topological order
//!
//! All four share a [`DistanceRelaxer`] and report to a
//! [`ShortestPathObserver`]. The free functions at the bottom run a search
//! with a predecessor recorder attached and package the outcome as
//! [`ShortestPaths`].

pub mod astar;
pub mod bellman_ford;
pub mod dag;
pub mod dijkstra;
pub mod observer;
pub mod relaxer;

mod search;

use core::hash::Hash;
use std::collections::HashMap;

pub use astar::{AStar, AStarBuilder};
pub use bellman_ford::BellmanFord;
pub use dag::DagShortestPath;
pub use dijkstra::Dijkstra;
pub use observer::{
    Attached, ObservableAlgorithm, ShortestPathObserver, VertexDistanceRecorder,
    VertexPredecessorRecorder,
};
pub use relaxer::{CriticalDistance, DistanceRelaxer, ShortestDistance, Weight};

use crate::error::Result;
use crate::graph::traits::{EdgeListGraph, GraphEdge, IncidenceGraph, VertexListGraph};

/// Outcome of a single-source search: distances and a predecessor forest.
#[derive(Debug, Clone)]
pub struct ShortestPaths<V, E, D> {
    root: Option<V>,
    distances: HashMap<V, D>,
    predecessors: VertexPredecessorRecorder<V, E>,
}

impl<V, E, D> ShortestPaths<V, E, D>
where
    V: Clone + Eq + Hash,
    E: GraphEdge<V> + Clone,
    D: Copy,
{
    fn from_search<'a>(
        root: Option<V>,
        distances: impl Iterator<Item = (&'a V, &'a D)>,
        predecessors: VertexPredecessorRecorder<V, E>,
    ) -> Self
    where
        V: 'a,
        D: 'a,
    {
        Self {
            root,
            distances: distances.map(|(v, d)| (v.clone(), *d)).collect(),
            predecessors,
        }
    }

    /// The root the search started from, if one was given.
    pub fn root(&self) -> Option<&V> {
        self.root.as_ref()
    }

    /// Distance of a reached vertex.
    pub fn distance(&self, vertex: &V) -> Option<D> {
        self.distances.get(vertex).copied()
    }

    /// Edge through which `vertex` was last improved.
    pub fn predecessor(&self, vertex: &V) -> Option<&E> {
        self.predecessors.predecessor(vertex)
    }

    /// Edges from a root to `vertex`, or `None` if `vertex` has no predecessor.
    pub fn path_to(&self, vertex: &V) -> Option<Vec<E>> {
        self.predecessors.path_to(vertex)
    }

    /// Returns `true` if `vertex` was reached.
    pub fn is_reached(&self, vertex: &V) -> bool {
        self.distances.contains_key(vertex)
    }

    /// Every reached vertex with its distance.
    pub fn reached(&self) -> impl Iterator<Item = (&V, D)> + '_ {
        self.distances.iter().map(|(v, &d)| (v, d))
    }

    /// Number of reached vertices.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` if nothing was reached.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Dijkstra from `root`.
///
/// # Errors
/// [`GraphError::NegativeWeight`](crate::GraphError::NegativeWeight) on the
/// first offending edge.
pub fn dijkstra<G, W, D>(
    graph: &G,
    weights: W,
    root: G::Vertex,
) -> Result<ShortestPaths<G::Vertex, G::Edge, D>>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
{
    let mut search = Dijkstra::new(graph, weights);
    let mut predecessors = VertexPredecessorRecorder::new();
    search
        .attach(&mut predecessors)
        .compute_from(root.clone())?;
    Ok(ShortestPaths::from_search(
        Some(root),
        search.distances(),
        predecessors,
    ))
}

/// A* from `root` guided by `heuristic`.
///
/// # Errors
/// [`GraphError::NegativeWeight`](crate::GraphError::NegativeWeight) on the
/// first offending edge.
pub fn astar<G, W, H, D>(
    graph: &G,
    weights: W,
    heuristic: H,
    root: G::Vertex,
) -> Result<ShortestPaths<G::Vertex, G::Edge, D>>
where
    G: IncidenceGraph,
    W: Fn(&G::Edge) -> D,
    H: Fn(&G::Vertex) -> D,
    D: Weight,
{
    let mut search = AStar::new(graph, weights, heuristic);
    let mut predecessors = VertexPredecessorRecorder::new();
    search
        .attach(&mut predecessors)
        .compute_from(root.clone())?;
    Ok(ShortestPaths::from_search(
        Some(root),
        search.distances(),
        predecessors,
    ))
}

/// Bellman-Ford from `root`; the flag reports a reachable negative cycle.
///
/// # Errors
/// The sweep itself cannot fail; the `Result` matches the other searches.
pub fn bellman_ford<G, W, D>(
    graph: &G,
    weights: W,
    root: G::Vertex,
) -> Result<(ShortestPaths<G::Vertex, G::Edge, D>, bool)>
where
    G: VertexListGraph + EdgeListGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
{
    let mut search = BellmanFord::new(graph, weights);
    let mut predecessors = VertexPredecessorRecorder::new();
    search
        .attach(&mut predecessors)
        .compute_from(root.clone())?;
    let negative_cycle = search.has_negative_cycle();
    Ok((
        ShortestPaths::from_search(Some(root), search.distances(), predecessors),
        negative_cycle,
    ))
}

/// DAG shortest paths from `root`.
///
/// # Errors
/// [`GraphError::NonAcyclicGraph`](crate::GraphError::NonAcyclicGraph) if
/// the graph has a cycle.
pub fn dag_shortest_paths<G, W, D>(
    graph: &G,
    weights: W,
    root: G::Vertex,
) -> Result<ShortestPaths<G::Vertex, G::Edge, D>>
where
    G: VertexListGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
{
    let mut search = DagShortestPath::new(graph, weights);
    let mut predecessors = VertexPredecessorRecorder::new();
    search
        .attach(&mut predecessors)
        .compute_from(root.clone())?;
    Ok(ShortestPaths::from_search(
        Some(root),
        search.distances(),
        predecessors,
    ))
}

/// Runs Dijkstra from every vertex in parallel.
///
/// Each worker owns its own search state; only the graph is shared.
///
/// # Errors
/// The first [`GraphError`](crate::GraphError) any worker reports.
#[cfg(feature = "parallel")]
pub fn all_sources_dijkstra<G, W, D>(
    graph: &G,
    weights: W,
) -> Result<HashMap<G::Vertex, ShortestPaths<G::Vertex, G::Edge, D>>>
where
    G: VertexListGraph + Sync,
    G::Vertex: Send + Sync,
    G::Edge: Send,
    W: Fn(&G::Edge) -> D + Sync,
    D: Weight + Send,
{
    use rayon::prelude::*;

    let roots: Vec<G::Vertex> = graph.vertices().collect();
    tracing::debug!(roots = roots.len(), "all-sources dijkstra");
    roots
        .into_par_iter()
        .map(|root| dijkstra(graph, &weights, root.clone()).map(|paths| (root, paths)))
        .collect()
}
