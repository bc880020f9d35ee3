//! Graph traversal engines.
//!
//! The breadth-first engine is parameterized by its queue: FIFO for plain BFS,
//! a [`FibonacciQueue`](crate::collections::FibonacciQueue) for best-first
//! searches.

pub mod bfs;

pub use bfs::{breadth_first_search, BfsEvent, BfsVisitor, BreadthFirstSearch, EventRecorder, VertexQueue};
