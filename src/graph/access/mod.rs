//! Per-vertex search state.
//!
//! Traversals keep their White/Gray/Black bookkeeping in a [`ColorMap`] so the
//! storage can be picked per graph: hashed for arbitrary vertex types, dense
//! for graphs whose vertices are already `0..n` indices.

pub mod color;

pub use color::{Color, ColorMap, DenseColorMap, HashColorMap};
