//! Event-driven breadth-first search.
//!
//! [`BreadthFirstSearch`] owns nothing: it borrows a graph, a [`VertexQueue`]
//! and a [`ColorMap`], and reports every step of the walk to a [`BfsVisitor`].
//! Plugging a FIFO queue in gives plain BFS; plugging a priority queue in gives
//! the best-first order the shortest-path searches are built on.

use std::collections::VecDeque;

use crate::error::{GraphError, Result};
use crate::graph::access::{Color, ColorMap, HashColorMap};
use crate::graph::traits::{GraphEdge, IncidenceGraph};

/// The frontier of a traversal.
pub trait VertexQueue<V> {
    /// Adds `vertex` to the frontier.
    ///
    /// # Errors
    /// Implementation defined; a keyed queue fails when the vertex has no key.
    fn enqueue(&mut self, vertex: V) -> Result<()>;

    /// Removes the next vertex to examine.
    fn dequeue(&mut self) -> Option<V>;

    /// Number of queued vertices.
    fn len(&self) -> usize;

    /// Returns `true` if nothing is queued.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<V> VertexQueue<V> for VecDeque<V> {
    #[inline]
    fn enqueue(&mut self, vertex: V) -> Result<()> {
        self.push_back(vertex);
        Ok(())
    }

    #[inline]
    fn dequeue(&mut self) -> Option<V> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

/// Callbacks fired by [`BreadthFirstSearch`].
///
/// Every handler defaults to a no-op. An error returned from a handler aborts
/// the traversal and is propagated to the caller unchanged.
#[allow(unused_variables)]
pub trait BfsVisitor<G: IncidenceGraph + ?Sized, Q> {
    /// A vertex is reset to white before the walk starts.
    fn initialize_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        Ok(())
    }

    /// A root is about to be visited.
    fn start_vertex(&mut self, vertex: &G::Vertex, queue: &mut Q) -> Result<()> {
        Ok(())
    }

    /// A vertex turned gray.
    fn discover_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        Ok(())
    }

    /// A vertex was dequeued.
    fn examine_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        Ok(())
    }

    /// An out-edge of the examined vertex is about to be classified.
    fn examine_edge(&mut self, edge: &G::Edge) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a white vertex, which is discovered through it.
    fn tree_edge(&mut self, edge: &G::Edge, queue: &mut Q) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a vertex that was already discovered.
    fn non_tree_edge(&mut self, edge: &G::Edge) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a vertex still waiting in the queue.
    fn gray_target(&mut self, edge: &G::Edge, queue: &mut Q) -> Result<()> {
        Ok(())
    }

    /// The edge leads to a finished vertex.
    ///
    /// Returning `true` re-opens the target: it turns gray and is queued again.
    fn black_target(&mut self, edge: &G::Edge, queue: &mut Q) -> Result<bool> {
        Ok(false)
    }

    /// Every out-edge of a vertex was handled and it turned black.
    fn finish_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        Ok(())
    }
}

impl<G: IncidenceGraph + ?Sized, Q> BfsVisitor<G, Q> for () {}

/// Breadth-first traversal over borrowed queue and color storage.
///
/// **Time complexity**: \(O(n + m)\) plus the queue's own costs
pub struct BreadthFirstSearch<'a, G: ?Sized, Q, M> {
    graph: &'a G,
    queue: &'a mut Q,
    colors: &'a mut M,
}

impl<'a, G, Q, M> BreadthFirstSearch<'a, G, Q, M>
where
    G: IncidenceGraph + ?Sized,
    Q: VertexQueue<G::Vertex>,
    M: ColorMap<G::Vertex>,
{
    /// Creates a traversal of `graph` using `queue` as the frontier.
    pub fn new(graph: &'a G, queue: &'a mut Q, colors: &'a mut M) -> Self {
        Self {
            graph,
            queue,
            colors,
        }
    }

    /// Clears the color table and paints every enumerable vertex white.
    ///
    /// # Errors
    /// Propagates visitor failures.
    pub fn initialize<Vis>(&mut self, visitor: &mut Vis) -> Result<()>
    where
        Vis: BfsVisitor<G, Q>,
    {
        let vertices = self.graph.vertex_set();
        self.initialize_from(vertices.as_deref(), visitor)
    }

    fn initialize_from<Vis>(&mut self, vertices: Option<&[G::Vertex]>, visitor: &mut Vis) -> Result<()>
    where
        Vis: BfsVisitor<G, Q>,
    {
        self.colors.clear();
        for vertex in vertices.unwrap_or_default() {
            self.colors.set_color(vertex, Color::White);
            visitor.initialize_vertex(vertex)?;
        }
        Ok(())
    }

    /// Initializes, then walks from `root`, or from every white vertex in
    /// enumeration order when no root is given.
    ///
    /// # Errors
    /// - [`GraphError::RootRequired`] if `root` is `None` and the graph cannot
    ///   enumerate its vertices.
    /// - Any failure raised by the visitor or the queue.
    pub fn compute<Vis>(&mut self, root: Option<G::Vertex>, visitor: &mut Vis) -> Result<()>
    where
        Vis: BfsVisitor<G, Q>,
    {
        let vertices = self.graph.vertex_set();
        if root.is_none() && vertices.is_none() {
            return Err(GraphError::RootRequired);
        }
        self.initialize_from(vertices.as_deref(), visitor)?;

        match root {
            Some(root) => {
                visitor.start_vertex(&root, self.queue)?;
                self.visit(root, visitor)
            }
            None => {
                for vertex in vertices.unwrap_or_default() {
                    if self.colors.color_or_white(&vertex) == Color::White {
                        visitor.start_vertex(&vertex, self.queue)?;
                        self.visit(vertex, visitor)?;
                    }
                }
                Ok(())
            }
        }
    }

    /// Discovers `root` and drains the queue.
    ///
    /// Colors are not reset, so repeated calls extend one forest.
    ///
    /// # Errors
    /// Propagates visitor and queue failures.
    pub fn visit<Vis>(&mut self, root: G::Vertex, visitor: &mut Vis) -> Result<()>
    where
        Vis: BfsVisitor<G, Q>,
    {
        self.colors.set_color(&root, Color::Gray);
        visitor.discover_vertex(&root)?;
        self.queue.enqueue(root)?;
        self.drain(visitor)
    }

    fn drain<Vis>(&mut self, visitor: &mut Vis) -> Result<()>
    where
        Vis: BfsVisitor<G, Q>,
    {
        let graph = self.graph;
        while let Some(u) = self.queue.dequeue() {
            visitor.examine_vertex(&u)?;

            for edge in graph.out_edges(&u) {
                visitor.examine_edge(&edge)?;
                let target = edge.target();
                match self.colors.color_or_white(target) {
                    Color::White => {
                        visitor.tree_edge(&edge, self.queue)?;
                        self.colors.set_color(target, Color::Gray);
                        visitor.discover_vertex(target)?;
                        self.queue.enqueue(target.clone())?;
                    }
                    Color::Gray => {
                        visitor.non_tree_edge(&edge)?;
                        visitor.gray_target(&edge, self.queue)?;
                    }
                    Color::Black => {
                        visitor.non_tree_edge(&edge)?;
                        if visitor.black_target(&edge, self.queue)? {
                            self.colors.set_color(target, Color::Gray);
                            self.queue.enqueue(target.clone())?;
                        }
                    }
                }
            }

            self.colors.set_color(&u, Color::Black);
            visitor.finish_vertex(&u)?;
        }
        Ok(())
    }
}

/// Runs a FIFO breadth-first search and returns the final colors.
///
/// # Errors
/// See [`BreadthFirstSearch::compute`].
pub fn breadth_first_search<G, Vis>(
    graph: &G,
    root: Option<G::Vertex>,
    visitor: &mut Vis,
) -> Result<HashColorMap<G::Vertex>>
where
    G: IncidenceGraph + ?Sized,
    Vis: BfsVisitor<G, VecDeque<G::Vertex>>,
{
    let mut queue = VecDeque::new();
    let mut colors = HashColorMap::new();
    BreadthFirstSearch::new(graph, &mut queue, &mut colors).compute(root, visitor)?;
    Ok(colors)
}

/// One traversal step, as recorded by [`EventRecorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum BfsEvent<V, E> {
    InitializeVertex(V),
    StartVertex(V),
    DiscoverVertex(V),
    ExamineVertex(V),
    ExamineEdge(E),
    TreeEdge(E),
    NonTreeEdge(E),
    GrayTarget(E),
    BlackTarget(E),
    FinishVertex(V),
}

/// A visitor that records every event in order.
#[derive(Debug, Clone)]
pub struct EventRecorder<V, E> {
    events: Vec<BfsEvent<V, E>>,
}

impl<V, E> EventRecorder<V, E> {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Every recorded event, oldest first.
    pub fn events(&self) -> &[BfsEvent<V, E>] {
        &self.events
    }

    /// Vertices in discovery order.
    pub fn discovered(&self) -> impl Iterator<Item = &V> {
        self.events.iter().filter_map(|event| match event {
            BfsEvent::DiscoverVertex(v) => Some(v),
            _ => None,
        })
    }

    /// Tree edges in the order they were followed.
    pub fn tree_edges(&self) -> impl Iterator<Item = &E> {
        self.events.iter().filter_map(|event| match event {
            BfsEvent::TreeEdge(e) => Some(e),
            _ => None,
        })
    }
}

impl<V, E> Default for EventRecorder<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G, Q> BfsVisitor<G, Q> for EventRecorder<G::Vertex, G::Edge>
where
    G: IncidenceGraph + ?Sized,
{
    fn initialize_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.events.push(BfsEvent::InitializeVertex(vertex.clone()));
        Ok(())
    }
    fn start_vertex(&mut self, vertex: &G::Vertex, _queue: &mut Q) -> Result<()> {
        self.events.push(BfsEvent::StartVertex(vertex.clone()));
        Ok(())
    }
    fn discover_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.events.push(BfsEvent::DiscoverVertex(vertex.clone()));
        Ok(())
    }
    fn examine_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.events.push(BfsEvent::ExamineVertex(vertex.clone()));
        Ok(())
    }
    fn examine_edge(&mut self, edge: &G::Edge) -> Result<()> {
        self.events.push(BfsEvent::ExamineEdge(edge.clone()));
        Ok(())
    }
    fn tree_edge(&mut self, edge: &G::Edge, _queue: &mut Q) -> Result<()> {
        self.events.push(BfsEvent::TreeEdge(edge.clone()));
        Ok(())
    }
    fn non_tree_edge(&mut self, edge: &G::Edge) -> Result<()> {
        self.events.push(BfsEvent::NonTreeEdge(edge.clone()));
        Ok(())
    }
    fn gray_target(&mut self, edge: &G::Edge, _queue: &mut Q) -> Result<()> {
        self.events.push(BfsEvent::GrayTarget(edge.clone()));
        Ok(())
    }
    fn black_target(&mut self, edge: &G::Edge, _queue: &mut Q) -> Result<bool> {
        self.events.push(BfsEvent::BlackTarget(edge.clone()));
        Ok(false)
    }
    fn finish_vertex(&mut self, vertex: &G::Vertex) -> Result<()> {
        self.events.push(BfsEvent::FinishVertex(vertex.clone()));
        Ok(())
    }
}
