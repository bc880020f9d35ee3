//! A growable adjacency-list directed graph.
//!
//! Vertices are interned into a dense index on insertion and each vertex owns
//! the list of its out-edges. The graph implements every capability contract,
//! so it can drive all of the crate's searches.

use core::fmt::Debug;
use core::hash::Hash;
use std::collections::HashMap;

use crate::error::{GraphError, Result};
use crate::graph::basic::edge::{Edge, TaggedEdge};
use crate::graph::traits::{
    EdgeListGraph, GraphBase, GraphEdge, IncidenceGraph, VertexListGraph,
};

/// A directed graph stored as per-vertex out-edge lists.
///
/// Parallel edges and self-loops are allowed.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | Interns into the vertex index |
/// | `add_edge` | \(O(1)\) amortized | Appends to the source's list |
/// | `out_edges` | \(O(1)\) | Borrowed slice iterator |
/// | `contains_edge` | \(O(\text{out-degree})\) | Linear scan |
#[derive(Clone)]
pub struct AdjacencyGraph<V, E = Edge<V>> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    out_edges: Vec<Vec<E>>,
    edge_count: usize,
}

impl<V, E> AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty graph with room for `vertex_count` vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            index: HashMap::with_capacity(vertex_count),
            out_edges: Vec::with_capacity(vertex_count),
            edge_count: 0,
        }
    }

    /// Adds `vertex`; returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        self.out_edges.push(Vec::new());
        true
    }

    /// Adds every vertex of `vertices`; returns how many were new.
    pub fn add_vertex_range<I>(&mut self, vertices: I) -> usize
    where
        I: IntoIterator<Item = V>,
    {
        let mut added = 0;
        for vertex in vertices {
            if self.add_vertex(vertex) {
                added += 1;
            }
        }
        added
    }

    /// Adds `edge`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint was never added.
    pub fn add_edge(&mut self, edge: E) -> Result<()> {
        let source = *self
            .index
            .get(edge.source())
            .ok_or_else(|| GraphError::vertex_not_found(edge.source()))?;
        if !self.index.contains_key(edge.target()) {
            return Err(GraphError::vertex_not_found(edge.target()));
        }
        self.out_edges[source].push(edge);
        self.edge_count += 1;
        Ok(())
    }

    /// Adds every edge of `edges`, stopping at the first failure.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if an endpoint was never added.
    pub fn add_edge_range<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = E>,
    {
        edges.into_iter().try_for_each(|edge| self.add_edge(edge))
    }

    /// Adds `edge`, inserting its endpoints first when missing.
    pub fn add_vertices_and_edge(&mut self, edge: E) {
        self.add_vertex(edge.source().clone());
        self.add_vertex(edge.target().clone());
        let source = self.index[edge.source()];
        self.out_edges[source].push(edge);
        self.edge_count += 1;
    }

    /// Adds every edge of `edges` with its endpoints; returns the edge count added.
    pub fn add_vertices_and_edge_range<I>(&mut self, edges: I) -> usize
    where
        I: IntoIterator<Item = E>,
    {
        let mut added = 0;
        for edge in edges {
            self.add_vertices_and_edge(edge);
            added += 1;
        }
        added
    }

    /// Returns the out-edges of `vertex` as a slice; empty for unknown vertices.
    pub fn out_edge_slice(&self, vertex: &V) -> &[E] {
        self.index
            .get(vertex)
            .map_or(&[][..], |&idx| self.out_edges[idx].as_slice())
    }

    /// Returns the dense index `vertex` was interned at.
    pub fn vertex_index(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.index.clear();
        self.out_edges.clear();
        self.edge_count = 0;
    }
}

impl<W: Clone + Debug> AdjacencyGraph<usize, TaggedEdge<usize, W>> {
    /// Builds a graph on vertices `0..n` from weighted adjacency lists.
    ///
    /// `adjacency[u]` lists `(v, w)` pairs for every edge `u -> v` of weight `w`.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if a neighbor index is out of bounds.
    pub fn from_adjacency(adjacency: &[Vec<(usize, W)>]) -> Result<Self> {
        let n = adjacency.len();
        let mut graph = Self::with_capacity(n);
        graph.add_vertex_range(0..n);
        for (u, neighbors) in adjacency.iter().enumerate() {
            for (v, w) in neighbors {
                graph.add_edge(TaggedEdge::new(u, *v, w.clone()))?;
            }
        }
        Ok(graph)
    }
}

impl<V, E> Default for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Debug, E> Debug for AdjacencyGraph<V, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AdjacencyGraph")
            .field("vertices", &self.vertices)
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

impl<V, E> GraphBase for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
{
    type Vertex = V;
    type Edge = E;
}

impl<V, E> IncidenceGraph for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
{
    type OutEdges<'a>
        = core::iter::Cloned<core::slice::Iter<'a, E>>
    where
        Self: 'a;

    fn out_edges(&self, vertex: &V) -> Self::OutEdges<'_> {
        self.out_edge_slice(vertex).iter().cloned()
    }

    fn out_degree(&self, vertex: &V) -> usize {
        self.out_edge_slice(vertex).len()
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn vertex_set(&self) -> Option<Vec<V>> {
        Some(self.vertices.clone())
    }
}

impl<V, E> VertexListGraph for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
{
    type Vertices<'a>
        = core::iter::Cloned<core::slice::Iter<'a, V>>
    where
        Self: 'a;

    fn vertices(&self) -> Self::Vertices<'_> {
        self.vertices.iter().cloned()
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }
}

impl<V, E> EdgeListGraph for AdjacencyGraph<V, E>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
{
    type Edges<'a>
        = core::iter::Cloned<core::iter::Flatten<core::slice::Iter<'a, Vec<E>>>>
    where
        Self: 'a;

    fn edges(&self) -> Self::Edges<'_> {
        self.out_edges.iter().flatten().cloned()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}
