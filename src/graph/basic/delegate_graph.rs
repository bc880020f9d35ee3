//! An implicit graph whose out-edges come from a closure.
//!
//! Useful for state spaces that are too large (or infinite) to materialize.
//! The graph cannot enumerate its vertices, so searches over it need a root.

use core::fmt::Debug;
use core::hash::Hash;
use core::marker::PhantomData;

use crate::graph::traits::{GraphBase, GraphEdge, IncidenceGraph};

/// An incidence graph backed by `Fn(&V) -> Option<Vec<E>>`.
///
/// The closure returns `None` for vertices outside the graph and the
/// out-edges otherwise.
pub struct DelegateIncidenceGraph<V, E, F> {
    out_edges: F,
    _marker: PhantomData<fn(&V) -> E>,
}

impl<V, E, F> DelegateIncidenceGraph<V, E, F>
where
    F: Fn(&V) -> Option<Vec<E>>,
{
    /// Wraps `out_edges` as a graph.
    pub fn new(out_edges: F) -> Self {
        Self {
            out_edges,
            _marker: PhantomData,
        }
    }
}

impl<V, E, F> GraphBase for DelegateIncidenceGraph<V, E, F>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
    F: Fn(&V) -> Option<Vec<E>>,
{
    type Vertex = V;
    type Edge = E;
}

impl<V, E, F> IncidenceGraph for DelegateIncidenceGraph<V, E, F>
where
    V: Clone + Eq + Hash + Debug,
    E: GraphEdge<V> + Clone + Debug,
    F: Fn(&V) -> Option<Vec<E>>,
{
    type OutEdges<'a>
        = std::vec::IntoIter<E>
    where
        Self: 'a;

    fn out_edges(&self, vertex: &V) -> Self::OutEdges<'_> {
        (self.out_edges)(vertex).unwrap_or_default().into_iter()
    }

    fn out_degree(&self, vertex: &V) -> usize {
        (self.out_edges)(vertex).map_or(0, |edges| edges.len())
    }

    fn contains_vertex(&self, vertex: &V) -> bool {
        (self.out_edges)(vertex).is_some()
    }
}

impl<V, E, F> Debug for DelegateIncidenceGraph<V, E, F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DelegateIncidenceGraph").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::basic::Edge;

    #[test]
    fn delegate_graph_answers_from_closure() {
        // 0 -> 1 -> 2 -> ... -> 9
        let graph = DelegateIncidenceGraph::new(|&v: &u32| {
            (v < 10).then(|| {
                if v < 9 {
                    vec![Edge::new(v, v + 1)]
                } else {
                    Vec::new()
                }
            })
        });

        assert!(graph.contains_vertex(&3));
        assert!(!graph.contains_vertex(&10));
        assert_eq!(graph.out_degree(&3), 1);
        assert_eq!(graph.out_degree(&9), 0);
        assert_eq!(graph.out_degree(&42), 0);
        assert!(graph.contains_edge(&3, &4));
        assert!(graph.vertex_set().is_none());
    }
}
