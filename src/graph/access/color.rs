//! Vertex color tables for graph traversals.
//!
//! This provides two implementations:
//! - `HashColorMap`: hashed storage for arbitrary vertex types
//! - `DenseColorMap`: a flat vector for `usize` vertices in `0..n`
//!
//! A vertex that was never written has no color; traversals read that as
//! [`Color::White`], while query APIs report it as unregistered.

use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;
use std::collections::HashMap;

/// Search state of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Not yet discovered.
    #[default]
    White,
    /// Discovered and waiting in the queue.
    Gray,
    /// Finished.
    Black,
}

/// Storage for per-vertex colors.
pub trait ColorMap<V> {
    /// Returns the recorded color of `vertex`, or `None` if it was never set.
    fn color(&self, vertex: &V) -> Option<Color>;

    /// Records `color` for `vertex`.
    fn set_color(&mut self, vertex: &V, color: Color);

    /// Forgets every recorded color.
    fn clear(&mut self);

    /// Number of vertices with a recorded color.
    fn len(&self) -> usize;

    /// Returns `true` if no color is recorded.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the recorded color, treating unknown vertices as white.
    #[inline]
    fn color_or_white(&self, vertex: &V) -> Color {
        self.color(vertex).unwrap_or_default()
    }
}

/// A hashed color table.
#[derive(Debug, Clone)]
pub struct HashColorMap<V, S = RandomState> {
    colors: HashMap<V, Color, S>,
}

impl<V> HashColorMap<V> {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            colors: HashMap::new(),
        }
    }

    /// Creates an empty table with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            colors: HashMap::with_capacity(capacity),
        }
    }
}

impl<V, S> HashColorMap<V, S> {
    /// Creates an empty table using `hasher`.
    pub fn with_hasher(hasher: S) -> Self {
        Self {
            colors: HashMap::with_hasher(hasher),
        }
    }

    /// Iterates over every recorded `(vertex, color)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&V, Color)> {
        self.colors.iter().map(|(v, &c)| (v, c))
    }
}

impl<V> Default for HashColorMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, S> ColorMap<V> for HashColorMap<V, S>
where
    V: Clone + Eq + Hash,
    S: BuildHasher,
{
    #[inline]
    fn color(&self, vertex: &V) -> Option<Color> {
        self.colors.get(vertex).copied()
    }

    #[inline]
    fn set_color(&mut self, vertex: &V, color: Color) {
        // Avoid cloning the key when the vertex is already present.
        if let Some(slot) = self.colors.get_mut(vertex) {
            *slot = color;
        } else {
            self.colors.insert(vertex.clone(), color);
        }
    }

    fn clear(&mut self) {
        self.colors.clear();
    }

    fn len(&self) -> usize {
        self.colors.len()
    }
}

/// A dense color table for `usize` vertices.
///
/// Grows on demand; memory is proportional to the largest vertex written.
#[derive(Debug, Clone, Default)]
pub struct DenseColorMap {
    colors: Vec<Option<Color>>,
    recorded: usize,
}

impl DenseColorMap {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty table sized for vertices `0..n`.
    pub fn with_vertex_count(n: usize) -> Self {
        Self {
            colors: vec![None; n],
            recorded: 0,
        }
    }
}

impl ColorMap<usize> for DenseColorMap {
    #[inline]
    fn color(&self, vertex: &usize) -> Option<Color> {
        self.colors.get(*vertex).copied().flatten()
    }

    #[inline]
    fn set_color(&mut self, vertex: &usize, color: Color) {
        if *vertex >= self.colors.len() {
            self.colors.resize(*vertex + 1, None);
        }
        let slot = &mut self.colors[*vertex];
        if slot.is_none() {
            self.recorded += 1;
        }
        *slot = Some(color);
    }

    fn clear(&mut self) {
        self.colors.fill(None);
        self.recorded = 0;
    }

    fn len(&self) -> usize {
        self.recorded
    }
}
