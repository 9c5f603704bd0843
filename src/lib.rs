//! # `dualgraph` - Dual-Representation Graph Toolkit
//!
//! A small in-memory graph that keeps an adjacency matrix and per-vertex
//! neighbor lists in lockstep, with random generators, breadth-first shortest
//! paths and a greedy BFS-ordered coloring.
//!
//! ## Guarantees
//!
//! - **Consistent views**: for every edge added through the API,
//!   `matrix[i][j] != 0` iff vertex `i`'s neighbor list contains `j`.
//! - **Fixed vertex set**: vertices are created at construction and never move,
//!   so their indices are stable identifiers.
//! - **Explicit traversal state**: visited bits and BFS parents live in a
//!   per-call [`TraversalState`], never on the vertices, so independent
//!   searches cannot observe each other.
//! - **Tagged outcomes**: unknown payloads, unreachable targets and palette
//!   exhaustion are reported as values, never by falling back to vertex 0.
//!
//! ## Architecture
//!
//! 1. **Storage** ([`graph::basic`]): [`AdjacencyMatrix`], [`Vertex`], [`MatrixGraph`].
//! 2. **Generators** ([`graph::generate`]): undirected, directed and acyclic
//!    edge sets drawn from any [`RandomSource`].
//! 3. **Algorithms**: [`MatrixGraph::find_path`], [`MatrixGraph::color`],
//!    [`MatrixGraph::non_adjacency`], [`MatrixGraph::edge_list`].
//! 4. **Presentation** ([`report`]): text and JSON renderings.
//!
//! ## Example
//!
//! ```rust
//! use dualgraph::{MatrixGraph, PathOutcome};
//!
//! let mut graph: MatrixGraph<char, &str> = MatrixGraph::new(['A', 'B', 'C']);
//! graph.connect_to(&'A', &'B').unwrap();
//! graph.connect_to(&'B', &'C').unwrap();
//!
//! let path = graph.find_path(&'A', &'C').unwrap().into_path().unwrap();
//! assert_eq!(path.hops(), 2);
//! assert_eq!(graph.find_path(&'C', &'A').unwrap(), PathOutcome::Unreachable);
//!
//! let coloring = graph.color(&["red", "green"]).unwrap();
//! assert_eq!(coloring.colors_used(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod graph;
pub mod report;

pub use config::GeneratorConfig;
pub use error::{GraphError, Result};
pub use graph::{
    AdjacencyMatrix, BernoulliSource, Coloring, Edge, MatrixGraph, NonAdjacency, Path, PathOutcome, RandomSource,
    TraversalState, Vertex, VisitedSet,
};
pub use report::{GraphSnapshot, JsonReporter, Reporter, TextReporter};
