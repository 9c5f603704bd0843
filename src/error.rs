//! Error type shared by every fallible graph operation.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = core::result::Result<T, GraphError>;

/// Failures surfaced by graph construction, lookup and coloring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// A supplied adjacency matrix does not match the vertex count.
    ///
    /// `row` is `None` when the number of rows is wrong, otherwise it names
    /// the first row whose length differs.
    #[error("adjacency matrix does not match {vertices} vertices (row {row:?} has length {len})")]
    DimensionMismatch {
        /// Number of vertices the matrix must match.
        vertices: usize,
        /// Offending row, or `None` for the row count itself.
        row: Option<usize>,
        /// Observed length.
        len: usize,
    },

    /// No vertex carries the requested payload.
    #[error("vertex {0} not found")]
    VertexNotFound(String),

    /// Greedy coloring needed more colors than the palette offers.
    #[error("palette too small for this graph: needed at least {required} colors, got {available}")]
    PaletteExhausted {
        /// Palette size that would have satisfied the vertex being colored.
        required: usize,
        /// Size of the supplied palette.
        available: usize,
    },

    /// A generator configuration was rejected.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}
