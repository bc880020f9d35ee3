//! Topological ordering of enumerable graphs.

use std::collections::{HashMap, VecDeque};

use crate::error::{GraphError, Result};
use crate::graph::traits::{GraphEdge, VertexListGraph};

/// Counts the in-edges of every vertex.
///
/// Edges whose target is not a vertex of the graph are ignored.
pub fn in_degrees<G: VertexListGraph + ?Sized>(graph: &G) -> HashMap<G::Vertex, usize> {
    let mut indeg: HashMap<G::Vertex, usize> = graph.vertices().map(|v| (v, 0)).collect();
    for u in graph.vertices() {
        for edge in graph.out_edges(&u) {
            if let Some(d) = indeg.get_mut(edge.target()) {
                *d += 1;
            }
        }
    }
    indeg
}

/// Computes a topological ordering using Kahn's algorithm.
///
/// Sources are emitted in vertex enumeration order, so the result is
/// deterministic for a given graph.
///
/// # Errors
/// [`GraphError::NonAcyclicGraph`] if the graph contains a cycle.
pub fn topological_sort<G: VertexListGraph + ?Sized>(graph: &G) -> Result<Vec<G::Vertex>> {
    let mut indeg = in_degrees(graph);

    let mut q: VecDeque<G::Vertex> = graph.vertices().filter(|v| indeg[v] == 0).collect();

    let mut order = Vec::with_capacity(indeg.len());
    while let Some(u) = q.pop_front() {
        // Reduce in-degrees of neighbors
        for edge in graph.out_edges(&u) {
            if let Some(d) = indeg.get_mut(edge.target()) {
                *d -= 1;
                if *d == 0 {
                    q.push_back(edge.target().clone());
                }
            }
        }
        order.push(u);
    }

    if order.len() == indeg.len() {
        Ok(order)
    } else {
        tracing::debug!(
            ordered = order.len(),
            vertices = indeg.len(),
            "cycle detected during topological sort"
        );
        Err(GraphError::NonAcyclicGraph)
    }
}

/// Returns `true` if the graph has no directed cycle.
pub fn is_acyclic<G: VertexListGraph + ?Sized>(graph: &G) -> bool {
    topological_sort(graph).is_ok()
}
