//! Basic graph implementations.
//!
//! This module contains the dual-representation graph and the building blocks
//! it is made of.

mod math_assert;
pub mod matrix;
pub mod matrix_graph;
pub mod vertex;

pub use matrix::AdjacencyMatrix;
pub use matrix_graph::{Coloring, MatrixGraph, NonAdjacency, Path, PathOutcome};
pub use vertex::{Edge, Vertex};
