//! Edge types.
//!
//! - [`Edge`]: a plain directed pair
//! - [`TaggedEdge`]: a directed pair carrying a payload (weights, labels)
//! - [`UndirectedEdge`]: a pair whose equality ignores orientation

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::graph::traits::GraphEdge;

/// A directed edge `source -> target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge<V> {
    source: V,
    target: V,
}

impl<V> Edge<V> {
    /// Creates the edge `source -> target`.
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    /// Returns the edge pointing the other way.
    pub fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }
}

impl<V> GraphEdge<V> for Edge<V> {
    #[inline]
    fn source(&self) -> &V {
        &self.source
    }

    #[inline]
    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: fmt::Display> fmt::Display for Edge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((source, target): (V, V)) -> Self {
        Self::new(source, target)
    }
}

/// A directed edge carrying a tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaggedEdge<V, T> {
    source: V,
    target: V,
    tag: T,
}

impl<V, T> TaggedEdge<V, T> {
    /// Creates the edge `source -> target` tagged with `tag`.
    pub fn new(source: V, target: V, tag: T) -> Self {
        Self {
            source,
            target,
            tag,
        }
    }

    /// Returns the tag.
    pub fn tag(&self) -> &T {
        &self.tag
    }

    /// Replaces the tag, returning the old one.
    pub fn set_tag(&mut self, tag: T) -> T {
        core::mem::replace(&mut self.tag, tag)
    }
}

impl<V, T> GraphEdge<V> for TaggedEdge<V, T> {
    #[inline]
    fn source(&self) -> &V {
        &self.source
    }

    #[inline]
    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: fmt::Display, T: fmt::Display> fmt::Display for TaggedEdge<V, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.source, self.target, self.tag)
    }
}

impl<V, T> From<(V, V, T)> for TaggedEdge<V, T> {
    fn from((source, target, tag): (V, V, T)) -> Self {
        Self::new(source, target, tag)
    }
}

/// An undirected edge.
///
/// The stored orientation is kept for display, but `{a, b}` and `{b, a}`
/// compare and hash identically.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedEdge<V> {
    source: V,
    target: V,
}

impl<V: Ord> UndirectedEdge<V> {
    /// Creates the edge `{source, target}`.
    pub fn new(source: V, target: V) -> Self {
        Self { source, target }
    }

    /// Returns the endpoints with the smaller one first.
    pub fn ordered(&self) -> (&V, &V) {
        if self.source <= self.target {
            (&self.source, &self.target)
        } else {
            (&self.target, &self.source)
        }
    }

    /// Returns the endpoint opposite `vertex`, if `vertex` is an endpoint.
    pub fn adjacent(&self, vertex: &V) -> Option<&V> {
        if *vertex == self.source {
            Some(&self.target)
        } else if *vertex == self.target {
            Some(&self.source)
        } else {
            None
        }
    }
}

impl<V> GraphEdge<V> for UndirectedEdge<V> {
    #[inline]
    fn source(&self) -> &V {
        &self.source
    }

    #[inline]
    fn target(&self) -> &V {
        &self.target
    }
}

impl<V: Ord> PartialEq for UndirectedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.ordered() == other.ordered()
    }
}

impl<V: Ord> Eq for UndirectedEdge<V> {}

impl<V: Ord + Hash> Hash for UndirectedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ordered().hash(state);
    }
}

impl<V: fmt::Display> fmt::Display for UndirectedEdge<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.source, self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn edge_accessors_and_display() {
        let edge = Edge::new("A", "B");
        assert_eq!(edge.source(), &"A");
        assert_eq!(edge.target(), &"B");
        assert_eq!(edge.to_string(), "A -> B");
        assert_eq!(edge.reversed(), Edge::new("B", "A"));
        assert!(!edge.is_self_edge());
        assert!(Edge::new(3, 3).is_self_edge());
    }

    #[test]
    fn tagged_edge_keeps_payload() {
        let mut edge = TaggedEdge::new(1, 2, 7.5);
        assert_eq!(*edge.tag(), 7.5);
        assert_eq!(edge.set_tag(1.0), 7.5);
        assert_eq!(edge.to_string(), "1 -> 2 (1)");
    }

    #[test]
    fn undirected_edge_ignores_orientation() {
        let ab = UndirectedEdge::new('a', 'b');
        let ba = UndirectedEdge::new('b', 'a');
        assert_eq!(ab, ba);
        assert_eq!(ba.ordered(), (&'a', &'b'));
        assert_eq!(ba.to_string(), "b -> a");
        assert_eq!(ab.adjacent(&'a'), Some(&'b'));
        assert_eq!(ab.adjacent(&'z'), None);

        let set: HashSet<_> = [ab, ba, UndirectedEdge::new('a', 'c')].into_iter().collect();
        assert_eq!(set.len(), 2);
    }
}
