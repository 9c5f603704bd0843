//! Graph layouts, generators and traversals.
//!
//! Graph implementations are organized into categories:
//! - `basic`: the dual matrix/list graph and its building blocks
//! - `access`: per-traversal scratch state (visited bits, parent links)
//! - `generate`: random edge-set generators

pub mod access;
pub mod basic;
pub mod generate;

pub use access::{TraversalState, VisitedSet};
pub use basic::{AdjacencyMatrix, Coloring, Edge, MatrixGraph, NonAdjacency, Path, PathOutcome, Vertex};
pub use generate::{BernoulliSource, RandomSource};
