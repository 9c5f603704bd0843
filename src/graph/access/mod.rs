//! Traversal scratch state shared by the graph algorithms.
//!
//! Visited bits and BFS parents live here, keyed by vertex index, instead of
//! on the vertices themselves. Each traversal owns a fresh state, so no reset
//! pass is needed between independent searches.

pub mod visited;

pub use visited::{TraversalState, VisitedSet};
