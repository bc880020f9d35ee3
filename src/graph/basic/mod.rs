//! Basic graph implementations.
//!
//! This module contains the edge types and the two graph containers the
//! algorithms run on: an explicit adjacency list and a closure-backed
//! implicit graph.

pub mod adjacency_graph;
pub mod delegate_graph;
pub mod edge;

pub use adjacency_graph::AdjacencyGraph;
pub use delegate_graph::DelegateIncidenceGraph;
pub use edge::{Edge, TaggedEdge, UndirectedEdge};
