//! Read-only graph capability contracts.
//!
//! Algorithms in this crate are written against these traits only, so any
//! container that implements them can be substituted transparently. None of
//! the contracts expose mutation: a search only ever reads graph structure.

use core::fmt::Debug;
use core::hash::Hash;

/// An edge with a source and a target endpoint.
pub trait GraphEdge<V> {
    /// The vertex the edge leaves.
    fn source(&self) -> &V;

    /// The vertex the edge enters.
    fn target(&self) -> &V;

    /// Returns `true` if both endpoints are the same vertex.
    fn is_self_edge(&self) -> bool
    where
        V: PartialEq,
    {
        self.source() == self.target()
    }
}

/// Vertex and edge types of a graph.
pub trait GraphBase {
    /// Opaque, equality-comparable vertex identity.
    type Vertex: Clone + Eq + Hash + Debug;
    /// Edge type connecting two vertices.
    type Edge: GraphEdge<Self::Vertex> + Clone + Debug;
}

/// A graph that can enumerate the out-edges of a vertex.
///
/// This is the minimal surface the traversal engine needs.
pub trait IncidenceGraph: GraphBase {
    /// Iterator over the out-edges of one vertex.
    type OutEdges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Returns the out-edges of `vertex`; an unknown vertex has none.
    fn out_edges(&self, vertex: &Self::Vertex) -> Self::OutEdges<'_>;

    /// Number of out-edges of `vertex`.
    fn out_degree(&self, vertex: &Self::Vertex) -> usize;

    /// Returns `true` if `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns `true` if an edge `source -> target` exists.
    fn contains_edge(&self, source: &Self::Vertex, target: &Self::Vertex) -> bool {
        self.out_edges(source).any(|edge| edge.target() == target)
    }

    /// Returns the full vertex set when the graph is able to enumerate it.
    ///
    /// Implicit graphs return `None`; root-less searches then fail with
    /// [`GraphError::RootRequired`](crate::GraphError::RootRequired).
    fn vertex_set(&self) -> Option<Vec<Self::Vertex>> {
        None
    }
}

/// A graph with an enumerable vertex set.
pub trait VertexListGraph: IncidenceGraph {
    /// Iterator over every vertex.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns every vertex of the graph.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns `true` if the graph has no vertices.
    fn is_vertices_empty(&self) -> bool {
        self.vertex_count() == 0
    }
}

/// A graph with an enumerable edge set.
pub trait EdgeListGraph: GraphBase {
    /// Iterator over every edge.
    type Edges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Returns every edge of the graph.
    fn edges(&self) -> Self::Edges<'_>;

    /// Number of edges.
    fn edge_count(&self) -> usize;

    /// Returns `true` if the graph has no edges.
    fn is_edges_empty(&self) -> bool {
        self.edge_count() == 0
    }
}
