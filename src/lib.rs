//! # `waypath` - Graph Traversal and Shortest-Path Toolkit
//!
//! Generic breadth-first traversal and single-source shortest-path searches
//! over read-only graph contracts. Any container implementing the contracts in
//! [`graph::traits`] can be searched; two minimal containers ship with the
//! crate.
//!
//! ## Key Features
//!
//! - **Contract-based**: algorithms consume [`IncidenceGraph`],
//!   [`VertexListGraph`] and [`EdgeListGraph`], never a concrete container
//! - **One engine**: plain BFS, Dijkstra and A* are the same event-driven
//!   walk with a different frontier
//! - **Pluggable distance algebra**: [`ShortestDistance`] for shortest paths,
//!   [`CriticalDistance`] for longest / critical paths
//! - **Fibonacci heap**: arena-backed, with \(O(1)\) amortized `decrease_key`
//!
//! ## Architecture
//!
//! ### Core Abstractions
//!
//! 1. **Graph contracts** ([`GraphBase`], [`IncidenceGraph`], ...):
//!    - Read-only; a search never mutates its graph
//!    - Implicit graphs only need [`IncidenceGraph`]
//!
//! 2. **Traversal engine** ([`BreadthFirstSearch`]):
//!    - White/Gray/Black state machine driven by a [`VertexQueue`]
//!    - Every step is reported to a [`BfsVisitor`]
//!
//! 3. **Searches** ([`Dijkstra`], [`AStar`], [`BellmanFord`], [`DagShortestPath`]):
//!    - Distances, colors and a predecessor forest via observers
//!    - Failures surface as [`GraphError`]; a negative cycle is a flag
//!
//! ### Logging
//!
//! Every search entry point opens a `tracing` span at debug level. The crate
//! never installs a subscriber; that is left to the application.
//!
//! ## Example
//!
//! ```rust
//! use waypath::{dijkstra, AdjacencyGraph, TaggedEdge};
//!
//! let mut graph = AdjacencyGraph::new();
//! graph.add_vertices_and_edge_range([
//!     TaggedEdge::new("A", "B", 1.0),
//!     TaggedEdge::new("B", "C", 2.0),
//!     TaggedEdge::new("A", "C", 5.0),
//! ]);
//!
//! let paths = dijkstra(&graph, |e: &TaggedEdge<&str, f64>| *e.tag(), "A").unwrap();
//! assert_eq!(paths.distance(&"C"), Some(3.0));
//! assert_eq!(paths.predecessor(&"C"), Some(&TaggedEdge::new("B", "C", 2.0)));
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod collections;
pub mod error;
pub mod graph;

pub use collections::{CompareFn, Comparator, FibonacciHeap, FibonacciQueue, HeapError, NaturalOrder};
pub use error::{GraphError, Result};
pub use graph::shortest_path::{
    astar, bellman_ford, dag_shortest_paths, dijkstra, AStar, AStarBuilder, Attached, BellmanFord,
    CriticalDistance, DagShortestPath, Dijkstra, DistanceRelaxer, ObservableAlgorithm,
    ShortestDistance, ShortestPathObserver, ShortestPaths, VertexDistanceRecorder,
    VertexPredecessorRecorder, Weight,
};
#[cfg(feature = "parallel")]
pub use graph::shortest_path::all_sources_dijkstra;
pub use graph::{
    breadth_first_search, is_acyclic, topological_sort, AdjacencyGraph, BfsEvent, BfsVisitor,
    BreadthFirstSearch, Color, ColorMap, DelegateIncidenceGraph, DenseColorMap, Edge,
    EdgeListGraph, EventRecorder, GraphBase, GraphEdge, HashColorMap, IncidenceGraph, TaggedEdge,
    UndirectedEdge, VertexListGraph, VertexQueue,
};
