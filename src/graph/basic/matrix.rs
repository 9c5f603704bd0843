//! `AdjacencyMatrix` — a dense, square, row-major presence grid.
//!
//! Cell `(i, j)` is nonzero iff there is a directed edge `i -> j`. Values other
//! than zero/nonzero carry no meaning; weights collapse to presence.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::graph::basic::Edge;

/// A square adjacency matrix stored contiguously.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n^2)\) | Zero-filled |
/// | `from_rows` | \(O(n^2)\) | Validates shape, then flattens |
/// | `get`/`set` | \(O(1)\) | Row-major indexing |
/// | `is_symmetric` | \(O(n^2)\) | Upper triangle vs. lower triangle |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacencyMatrix {
    size: usize,
    cells: Vec<i32>,
}

impl AdjacencyMatrix {
    /// Creates an all-zero `size x size` matrix.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Builds a matrix from nested rows.
    ///
    /// Every row must have as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GraphError::DimensionMismatch {
                    vertices: size,
                    row: Some(i),
                    len: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { size, cells })
    }

    /// Rebuilds a matrix from an edge list.
    ///
    /// With `symmetric`, each edge is written in both directions.
    ///
    /// # Panics
    /// Panics if an edge endpoint is out of bounds.
    pub fn from_edges(size: usize, edges: &[Edge], symmetric: bool) -> Self {
        let mut matrix = Self::new(size);
        for edge in edges {
            matrix.set(edge.source, edge.target, 1);
            if symmetric {
                matrix.set(edge.target, edge.source, 1);
            }
        }
        matrix
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the raw cell value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.cells[self.offset(row, col)]
    }

    /// Writes a raw cell value at `(row, col)`.
    ///
    /// # Panics
    /// Panics if `row` or `col` is out of bounds.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        let idx = self.offset(row, col);
        self.cells[idx] = value;
    }

    /// Returns `true` if `(row, col)` is nonzero.
    #[inline]
    pub fn has_edge(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != 0
    }

    /// Returns a row as a slice.
    pub fn row(&self, row: usize) -> &[i32] {
        assert!(row < self.size, "row {row} out of bounds for n={}", self.size);
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> + '_ {
        // `chunks_exact(0)` panics, so an empty matrix yields nothing instead.
        self.cells.chunks_exact(self.size.max(1)).take(self.size)
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<i32>> {
        self.rows().map(<[i32]>::to_vec).collect()
    }

    /// Resets every cell to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Returns `true` if `m[i][j]` and `m[j][i]` agree on presence for all pairs.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size).all(|i| (i + 1..self.size).all(|j| self.has_edge(i, j) == self.has_edge(j, i)))
    }

    /// Returns `true` if every cell on or below the diagonal is zero.
    pub fn is_strictly_upper_triangular(&self) -> bool {
        (0..self.size).all(|i| (0..=i).all(|j| !self.has_edge(i, j)))
    }

    /// Returns `true` if no vertex has a self-loop.
    pub fn has_zero_diagonal(&self) -> bool {
        (0..self.size).all(|i| !self.has_edge(i, i))
    }

    /// Number of nonzero cells.
    pub fn nonzero_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) out of bounds for n={}",
            self.size
        );
        row * self.size + col
    }
}
