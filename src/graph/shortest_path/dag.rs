//! Shortest (or critical) paths on a directed acyclic graph.
//!
//! Vertices are processed in topological order and each out-edge is relaxed
//! exactly once, so negative weights are fine and the run is \(O(n + m)\).
//! Pairing it with [`CriticalDistance`](super::relaxer::CriticalDistance)
//! yields critical-path analysis.

use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::access::{Color, ColorMap, HashColorMap};
use crate::graph::shortest_path::observer::{ObservableAlgorithm, ShortestPathObserver};
use crate::graph::shortest_path::relaxer::{DistanceRelaxer, ShortestDistance, Weight};
use crate::graph::topological::{in_degrees, topological_sort};
use crate::graph::traits::{GraphEdge, VertexListGraph};

/// DAG shortest paths over a [`VertexListGraph`].
pub struct DagShortestPath<'g, G, W, D, R = ShortestDistance>
where
    G: VertexListGraph,
{
    graph: &'g G,
    weights: W,
    relaxer: R,
    colors: HashColorMap<G::Vertex>,
    distances: HashMap<G::Vertex, D>,
}

impl<'g, G, W, D> DagShortestPath<'g, G, W, D>
where
    G: VertexListGraph,
    W: Fn(&G::Edge) -> D,
    D: Weight,
{
    /// Creates a shortest-distance search over `graph`.
    pub fn new(graph: &'g G, weights: W) -> Self {
        Self::with_relaxer(graph, weights, ShortestDistance)
    }
}

impl<'g, G, W, D, R> DagShortestPath<'g, G, W, D, R>
where
    G: VertexListGraph,
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
        }
    }

    /// Runs from every source vertex (in-degree zero).
    ///
    /// # Errors
    /// [`GraphError::NonAcyclicGraph`] if the graph has a cycle.
    pub fn compute(&mut self) -> Result<()> {
        self.run_observed(None, &mut ())
    }

    /// Runs from `root`.
    ///
    /// # Errors
    /// [`GraphError::NonAcyclicGraph`] if the graph has a cycle.
    pub fn compute_from(&mut self, root: G::Vertex) -> Result<()> {
        self.run_observed(Some(root), &mut ())
    }

    /// Distance of `vertex`; unreached vertices report the initial distance.
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
    pub fn is_reached(&self, vertex: &G::Vertex) -> bool {
        self.colors
            .color(vertex)
            .is_some_and(|color| color != Color::White)
    }

    /// Distances of every reached vertex.
    pub fn distances(&self) -> impl Iterator<Item = (&G::Vertex, &D)> + '_ {
        self.distances
            .iter()
            .filter(move |(vertex, _)| self.is_reached(vertex))
    }

    fn seed<O>(&mut self, vertex: G::Vertex, observer: &mut O)
    where
        O: ShortestPathObserver<G::Vertex, G::Edge, D>,
    {
        self.colors.set_color(&vertex, Color::Gray);
        observer.discover_vertex(&vertex);
        self.distances.insert(vertex, D::zero());
    }
}

impl<G, W, D, R> ObservableAlgorithm for DagShortestPath<'_, G, W, D, R>
where
    G: VertexListGraph,
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
        let relaxer = self.relaxer;
        self.colors.clear();
        self.distances.clear();
        let order = topological_sort(graph)?;

        for vertex in &order {
            self.colors.set_color(vertex, Color::White);
            self.distances
                .insert(vertex.clone(), relaxer.initial_distance());
        }

        match root {
            Some(root) => self.seed(root, observer),
            None => {
                for (vertex, indeg) in in_degrees(graph) {
                    if indeg == 0 {
                        self.seed(vertex, observer);
                    }
                }
            }
        }

        for u in &order {
            if self.colors.color_or_white(u) == Color::White {
                continue;
            }
            observer.examine_vertex(u);
            let du = self.distances[u];

            for edge in graph.out_edges(u) {
                let target = edge.target();
                let candidate = relaxer.combine(du, (self.weights)(&edge));
                let current = self
                    .distances
                    .get(target)
                    .copied()
                    .unwrap_or_else(|| relaxer.initial_distance());
                if !relaxer.relax(&candidate, &current) {
                    observer.edge_not_relaxed(&edge);
                    continue;
                }
                if self.colors.color_or_white(target) == Color::White {
                    self.colors.set_color(target, Color::Gray);
                    observer.discover_vertex(target);
                }
                tracing::trace!(?edge, distance = ?candidate, "relaxed");
                self.distances.insert(target.clone(), candidate);
                observer.tree_edge(&edge, candidate);
            }

            self.colors.set_color(u, Color::Black);
            observer.finish_vertex(u);
        }

        tracing::debug!(vertices = order.len(), "dag shortest path finished");
        Ok(())
    }
}

impl<G, W, D, R> core::fmt::Debug for DagShortestPath<'_, G, W, D, R>
where
    G: VertexListGraph,
    D: core::fmt::Debug,
    R: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DagShortestPath")
            .field("relaxer", &self.relaxer)
            .field("distances", &self.distances)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use crate::graph::basic::{AdjacencyGraph, Edge, TaggedEdge};
    use crate::graph::shortest_path::observer::VertexPredecessorRecorder;
    use crate::graph::shortest_path::relaxer::CriticalDistance;
    use crate::graph::traits::{GraphBase, IncidenceGraph};

    type Graph = AdjacencyGraph<&'static str, TaggedEdge<&'static str, i32>>;

    fn project() -> Graph {
        // Task durations on the edges leaving each task.
        let mut g = AdjacencyGraph::new();
        g.add_vertices_and_edge_range([
            TaggedEdge::new("design", "build", 3),
            TaggedEdge::new("design", "docs", 1),
            TaggedEdge::new("build", "test", 5),
            TaggedEdge::new("docs", "test", 2),
            TaggedEdge::new("test", "ship", 1),
        ]);
        g
    }

    fn weight(edge: &TaggedEdge<&'static str, i32>) -> i32 {
        *edge.tag()
    }

    #[test]
    fn shortest_from_root() {
        let g = project();
        let mut dag = DagShortestPath::new(&g, weight);
        dag.compute_from("design").unwrap();
        assert_eq!(dag.distance(&"test").unwrap(), 3);
        assert_eq!(dag.distance(&"ship").unwrap(), 4);
    }

    #[test]
    fn critical_path() {
        let g = project();
        let mut dag = DagShortestPath::with_relaxer(&g, weight, CriticalDistance);
        let mut preds = VertexPredecessorRecorder::new();
        dag.attach(&mut preds).compute().unwrap();

        assert_eq!(dag.distance(&"ship").unwrap(), 9);
        let path: Vec<_> = preds
            .path_to(&"ship")
            .unwrap()
            .into_iter()
            .map(|e| *e.source())
            .collect();
        assert_eq!(path, vec!["design", "build", "test"]);
    }

    #[test]
    fn negative_weights_are_fine() {
        let mut g: AdjacencyGraph<u8, TaggedEdge<u8, i32>> = AdjacencyGraph::new();
        g.add_vertices_and_edge_range([
            TaggedEdge::new(0, 1, 2),
            TaggedEdge::new(1, 2, -4),
            TaggedEdge::new(0, 2, 1),
        ]);
        let mut dag = DagShortestPath::new(&g, |e: &TaggedEdge<u8, i32>| *e.tag());
        dag.compute_from(0).unwrap();
        assert_eq!(dag.distance(&2).unwrap(), -2);
    }

    #[test]
    fn unreached_vertices_keep_the_initial_distance() {
        let g = project();
        let mut dag = DagShortestPath::new(&g, weight);
        dag.compute_from("docs").unwrap();
        assert!(!dag.is_reached(&"build"));
        assert_eq!(dag.distance(&"build").unwrap(), i32::MAX);
        assert_eq!(dag.color(&"build").unwrap(), Color::White);
        assert_eq!(dag.distances().count(), 3);
    }

    /// Two vertices whose back edge `1 -> 0` can be switched on after construction.
    struct Switchable {
        closed: Cell<bool>,
    }

    impl GraphBase for Switchable {
        type Vertex = u8;
        type Edge = Edge<u8>;
    }

    impl IncidenceGraph for Switchable {
        type OutEdges<'a> = std::vec::IntoIter<Edge<u8>>;

        fn out_edges(&self, vertex: &u8) -> Self::OutEdges<'_> {
            match *vertex {
                0 => vec![Edge::new(0, 1)],
                1 if self.closed.get() => vec![Edge::new(1, 0)],
                _ => Vec::new(),
            }
            .into_iter()
        }

        fn out_degree(&self, vertex: &u8) -> usize {
            self.out_edges(vertex).len()
        }

        fn contains_vertex(&self, vertex: &u8) -> bool {
            *vertex < 2
        }
    }

    impl VertexListGraph for Switchable {
        type Vertices<'a> = core::ops::Range<u8>;

        fn vertices(&self) -> Self::Vertices<'_> {
            0..2
        }

        fn vertex_count(&self) -> usize {
            2
        }
    }

    #[test]
    fn failed_run_discards_previous_results() {
        let g = Switchable {
            closed: Cell::new(false),
        };
        let mut dag = DagShortestPath::new(&g, |_: &Edge<u8>| 1u32);
        dag.compute_from(0).unwrap();
        assert_eq!(dag.distance(&1).unwrap(), 1);

        g.closed.set(true);
        assert_eq!(dag.compute_from(0), Err(GraphError::NonAcyclicGraph));
        assert!(!dag.is_reached(&1));
        assert!(matches!(dag.distance(&1), Err(GraphError::VertexNotFound(_))));
        assert_eq!(dag.distances().count(), 0);
    }

    #[test]
    fn cycles_are_rejected() {
        let mut g: AdjacencyGraph<u8, TaggedEdge<u8, i32>> = AdjacencyGraph::new();
        g.add_vertices_and_edge_range([TaggedEdge::new(0, 1, 1), TaggedEdge::new(1, 0, 1)]);
        let mut dag = DagShortestPath::new(&g, |e: &TaggedEdge<u8, i32>| *e.tag());
        assert_eq!(dag.compute(), Err(GraphError::NonAcyclicGraph));
    }
}
