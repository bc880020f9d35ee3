//! Priority queues used by the shortest-path searches.
//!
//! - `fibonacci_heap`: arena-backed Fibonacci heap with `decrease_key`
//! - `fibonacci_queue`: vertex queue keyed by an external cost map

pub mod fibonacci_heap;
pub mod fibonacci_queue;

pub use fibonacci_heap::{CompareFn, Comparator, FibonacciHeap, HeapError, NaturalOrder};
pub use fibonacci_queue::FibonacciQueue;
