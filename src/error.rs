//! Error types shared by every graph algorithm in the crate.
//!
//! Failures are local to the call that triggered them: nothing is retried and
//! a failed traversal leaves its state maps partially populated. The only
//! non-error failure signal in the crate is Bellman-Ford's negative-cycle flag.

use core::fmt::Debug;

use thiserror::Error;

use crate::collections::HeapError;

/// Errors raised by graph algorithms and containers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A required collaborator (graph, weight function, heuristic) was never supplied.
    #[error("invalid argument: `{0}` is required")]
    InvalidArgument(&'static str),

    /// A vertex was queried that was never registered in the current run.
    #[error("vertex {0} is not registered")]
    VertexNotFound(String),

    /// An edge weight violates the non-negative precondition of Dijkstra or A*.
    #[error("edge {0} has a negative weight")]
    NegativeWeight(String),

    /// A root-less computation was requested on a graph that cannot list its vertices.
    #[error("a root vertex is required: the graph cannot enumerate its vertices")]
    RootRequired,

    /// A topological order was requested on a graph containing a cycle.
    #[error("the graph is not acyclic")]
    NonAcyclicGraph,

    /// The priority queue rejected an operation.
    #[error(transparent)]
    Queue(#[from] HeapError),
}

impl GraphError {
    pub(crate) fn vertex_not_found<V: Debug>(vertex: &V) -> Self {
        Self::VertexNotFound(format!("{vertex:?}"))
    }

    pub(crate) fn negative_weight<E: Debug>(edge: &E) -> Self {
        Self::NegativeWeight(format!("{edge:?}"))
    }
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offender() {
        let err = GraphError::vertex_not_found(&"Prague");
        assert_eq!(err.to_string(), "vertex \"Prague\" is not registered");

        let err = GraphError::negative_weight(&(1, 2));
        assert_eq!(err.to_string(), "edge (1, 2) has a negative weight");
    }

    #[test]
    fn heap_errors_convert_transparently() {
        let err: GraphError = HeapError::Empty.into();
        assert_eq!(err, GraphError::Queue(HeapError::Empty));
        assert_eq!(err.to_string(), HeapError::Empty.to_string());
    }
}
