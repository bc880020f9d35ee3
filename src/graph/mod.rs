//! Graph contracts, containers, traversals and shortest-path searches.
//!
//! The module is organized into categories:
//! - `traits`: read-only capability contracts every algorithm consumes
//! - `basic`: edge types and the two bundled graph containers
//! - `access`: per-vertex color storage
//! - `traversal`: the event-driven breadth-first engine
//! - `topological`: Kahn ordering
//! - `shortest_path`: Dijkstra, A*, Bellman-Ford and DAG searches

pub mod access;
pub mod basic;
pub mod shortest_path;
pub mod topological;
pub mod traits;
pub mod traversal;

// Re-export commonly used types from submodules
pub use access::{Color, ColorMap, DenseColorMap, HashColorMap};
pub use basic::{AdjacencyGraph, DelegateIncidenceGraph, Edge, TaggedEdge, UndirectedEdge};
pub use topological::{is_acyclic, topological_sort};
pub use traits::{EdgeListGraph, GraphBase, GraphEdge, IncidenceGraph, VertexListGraph};
pub use traversal::{
    breadth_first_search, BfsEvent, BfsVisitor, BreadthFirstSearch, EventRecorder, VertexQueue,
};
