//! Best-first relaxation visitor shared by Dijkstra and A*.
//!
//! The two searches differ only in how a vertex's queue key is derived from
//! its distance: Dijkstra keys by the distance itself, A* adds the heuristic.

use core::cmp::Ordering;
use std::collections::HashMap;

use crate::collections::{Comparator, FibonacciQueue};
use crate::error::{GraphError, Result};
use crate::graph::shortest_path::observer::ShortestPathObserver;
use crate::graph::shortest_path::relaxer::{DistanceRelaxer, Weight};
use crate::graph::traits::{GraphEdge, IncidenceGraph};
use crate::graph::traversal::BfsVisitor;

pub(crate) struct RelaxVisitor<'a, V, D, W, K, R, O> {
    pub(crate) weights: &'a W,
    pub(crate) key: K,
    pub(crate) relaxer: R,
    pub(crate) distances: &'a mut HashMap<V, D>,
    pub(crate) observer: &'a mut O,
}

impl<V, D, W, K, R, O> RelaxVisitor<'_, V, D, W, K, R, O>
where
    V: Clone + Eq + core::hash::Hash + core::fmt::Debug,
    D: Weight,
    R: DistanceRelaxer<D>,
{
    /// Relaxes `edge`, returning the improved target distance.
    fn relax<E>(&mut self, edge: &E) -> Option<D>
    where
        E: GraphEdge<V> + core::fmt::Debug,
        W: Fn(&E) -> D,
    {
        let source = *self.distances.get(edge.source())?;
        // Targets are queued even when unreached; they relax nothing.
        if self.relaxer.is_unreached(&source) {
            return None;
        }
        let candidate = self.relaxer.combine(source, (self.weights)(edge));
        let current = self
            .distances
            .get(edge.target())
            .copied()
            .unwrap_or_else(|| self.relaxer.initial_distance());

        if !self.relaxer.relax(&candidate, &current) {
            return None;
        }
        tracing::trace!(?edge, distance = ?candidate, "relaxed");
        self.distances.insert(edge.target().clone(), candidate);
        Some(candidate)
    }

    fn queue_key(&self, vertex: &V) -> Result<D>
    where
        K: Fn(&V, D) -> D,
    {
        let distance = self
            .distances
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::vertex_not_found(vertex))?;
        Ok((self.key)(vertex, distance))
    }
}

impl<G, D, W, K, R, O, C> BfsVisitor<G, FibonacciQueue<G::Vertex, D, C>>
    for RelaxVisitor<'_, G::Vertex, D, W, K, R, O>
where
    G: IncidenceGraph + ?Sized,
    D: Weight,
    W: Fn(&G::Edge) -> D,
    K: Fn(&G::Vertex, D) -> D,
    R: DistanceRelaxer<D>,
    C: Comparator<D>,
    O: ShortestPathObserver<G::Vertex, G::Edge, D>,
{
    fn initialize_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.distances
            .insert(vertex.clone(), self.relaxer.initial_distance());
        Ok(())
    }

    fn start_vertex(
        &mut self,
        vertex: &G::Vertex,
        queue: &mut FibonacciQueue<G::Vertex, D, C>,
    ) -> Result<()> {
        self.distances.insert(vertex.clone(), D::zero());
        queue.set_cost(vertex.clone(), self.queue_key(vertex)?);
        Ok(())
    }

    fn discover_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.observer.discover_vertex(vertex);
        Ok(())
    }

    fn examine_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.observer.examine_vertex(vertex);
        Ok(())
    }

    fn examine_edge(&mut self, edge: &G::Edge) -> Result<()> {
        if !self.distances.contains_key(edge.target()) {
            self.distances
                .insert(edge.target().clone(), self.relaxer.initial_distance());
        }
        let weight = (self.weights)(edge);
        if self.relaxer.compare(&weight, &D::zero()) == Ordering::Less {
            tracing::warn!(?edge, ?weight, "negative edge weight");
            return Err(GraphError::negative_weight(edge));
        }
        Ok(())
    }

    fn tree_edge(
        &mut self,
        edge: &G::Edge,
        queue: &mut FibonacciQueue<G::Vertex, D, C>,
    ) -> Result<()> {
        match self.relax(edge) {
            Some(distance) => self.observer.tree_edge(edge, distance),
            None => self.observer.edge_not_relaxed(edge),
        }
        // The target is queued right after this event, relaxed or not.
        let target = edge.target();
        queue.set_cost(target.clone(), self.queue_key(target)?);
        Ok(())
    }

    fn gray_target(
        &mut self,
        edge: &G::Edge,
        queue: &mut FibonacciQueue<G::Vertex, D, C>,
    ) -> Result<()> {
        match self.relax(edge) {
            Some(distance) => {
                let target = edge.target();
                queue.set_cost(target.clone(), self.queue_key(target)?);
                queue.update(target)?;
                self.observer.tree_edge(edge, distance);
            }
            None => self.observer.edge_not_relaxed(edge),
        }
        Ok(())
    }

    fn black_target(
        &mut self,
        edge: &G::Edge,
        queue: &mut FibonacciQueue<G::Vertex, D, C>,
    ) -> Result<bool> {
        match self.relax(edge) {
            Some(distance) => {
                let target = edge.target();
                tracing::trace!(?target, "re-opening finished vertex");
                queue.set_cost(target.clone(), self.queue_key(target)?);
                self.observer.tree_edge(edge, distance);
                Ok(true)
            }
            None => {
                self.observer.edge_not_relaxed(edge);
                Ok(false)
            }
        }
    }

    fn finish_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.observer.finish_vertex(vertex);
        Ok(())
    }
}
