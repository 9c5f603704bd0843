//! A fixed-size graph kept in two views at once: an adjacency matrix and
//! per-vertex neighbor lists.
//!
//! For every edge added through this API, `matrix[i][j] != 0` iff vertex `i`'s
//! neighbor list contains `j`. Vertices are created once, at construction;
//! edges are only ever added (in bulk from a matrix, by `connect_to`, or by the
//! random generators in [`crate::graph::generate`]).

use std::fmt::Debug;
use std::sync::OnceLock;

use tracing::debug;

use crate::error::{GraphError, Result};
#[cfg(debug_assertions)]
use crate::graph::basic::math_assert::math_assert_msg;
use crate::graph::basic::{AdjacencyMatrix, Edge, Vertex};

mod coloring;
mod queries;
mod traversal;

pub use coloring::Coloring;
pub use queries::NonAdjacency;
pub use traversal::{Bfs, Path, PathOutcome};

/// A graph with a fixed vertex set and a consistent matrix/list pair.
///
/// `T` is the vertex payload (its identity key, compared by value) and `K` the
/// color label type.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `new` | \(O(n^2)\) | Allocates a zeroed matrix |
/// | `from_matrix` | \(O(n^2)\) | One pass over every cell |
/// | `index_of` | \(O(n)\) | Linear payload scan, first match wins |
/// | `connect_to` | \(O(n + \text{out-degree})\) | Two lookups plus a duplicate check |
/// | `find_path` | \(O(n + m)\) | BFS over neighbor lists |
/// | `color` | \(O(n^2 + m)\) | BFS plus a matrix column scan per vertex |
/// | `non_adjacency` | \(O(n^2)\) | Cached until the next edge mutation |
/// | `edge_list` | \(O(n^2)\) | Upper triangle scan |
#[derive(Debug)]
pub struct MatrixGraph<T, K> {
    vertices: Vec<Vertex<T, K>>,
    matrix: AdjacencyMatrix,
    non_adjacency: OnceLock<NonAdjacency>,
}

impl<T, K> MatrixGraph<T, K> {
    /// Creates a disconnected graph with one vertex per payload.
    ///
    /// Payload order becomes vertex index order.
    pub fn new<I>(payloads: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let vertices: Vec<Vertex<T, K>> = payloads.into_iter().map(Vertex::new).collect();
        let matrix = AdjacencyMatrix::new(vertices.len());
        debug!(vertices = vertices.len(), "created empty graph");
        Self {
            vertices,
            matrix,
            non_adjacency: OnceLock::new(),
        }
    }

    /// Creates a graph whose edges are read from `matrix`.
    ///
    /// Every nonzero cell `(i, j)` becomes a directed edge `i -> j`. The matrix is
    /// moved into the graph unchanged.
    ///
    /// Returns [`GraphError::DimensionMismatch`] unless the matrix is
    /// `payloads.len()` square.
    pub fn from_matrix<I>(payloads: I, matrix: AdjacencyMatrix) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let mut vertices: Vec<Vertex<T, K>> = payloads.into_iter().map(Vertex::new).collect();
        if matrix.size() != vertices.len() {
            return Err(GraphError::DimensionMismatch {
                vertices: vertices.len(),
                row: None,
                len: matrix.size(),
            });
        }

        for i in 0..matrix.size() {
            for j in 0..matrix.size() {
                if matrix.has_edge(i, j) {
                    vertices[i].neighbors.push(j);
                    vertices[j].in_degree += 1;
                }
            }
        }

        debug!(
            vertices = vertices.len(),
            edges = matrix.nonzero_count(),
            "created graph from adjacency matrix"
        );
        Ok(Self {
            vertices,
            matrix,
            non_adjacency: OnceLock::new(),
        })
    }

    /// Convenience wrapper around [`AdjacencyMatrix::from_rows`] and
    /// [`MatrixGraph::from_matrix`].
    pub fn from_rows<I>(payloads: I, rows: Vec<Vec<i32>>) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let payloads: Vec<T> = payloads.into_iter().collect();
        if rows.len() != payloads.len() {
            return Err(GraphError::DimensionMismatch {
                vertices: payloads.len(),
                row: None,
                len: rows.len(),
            });
        }
        Self::from_matrix(payloads, AdjacencyMatrix::from_rows(rows)?)
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }

    /// All vertices in index order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex<T, K>] {
        &self.vertices
    }

    /// The vertex at `index`, if any.
    #[inline]
    pub fn vertex(&self, index: usize) -> Option<&Vertex<T, K>> {
        self.vertices.get(index)
    }

    /// The adjacency matrix view.
    #[inline]
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Outgoing neighbors of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    #[inline]
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        self.checked(vertex).neighbors()
    }

    /// Out-degree of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn out_degree(&self, vertex: usize) -> usize {
        self.checked(vertex).out_degree()
    }

    /// In-degree of `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.checked(vertex).in_degree()
    }

    /// Returns `true` if `from -> to` is an edge.
    ///
    /// # Panics
    /// Panics if `from` or `to` is out of bounds.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        self.matrix.has_edge(from, to)
    }

    /// Payloads of both endpoints of `edge`.
    ///
    /// # Panics
    /// Panics if an endpoint is out of bounds.
    pub fn edge_payloads(&self, edge: Edge) -> (&T, &T) {
        (
            self.checked(edge.source).payload(),
            self.checked(edge.target).payload(),
        )
    }

    /// Removes every edge from both views.
    pub(crate) fn reset_edges(&mut self) {
        self.matrix.clear();
        for v in &mut self.vertices {
            v.reset_edges();
        }
        self.non_adjacency.take();
    }

    /// Adds `from -> to` to both views without checking for duplicates.
    ///
    /// Callers must know the edge is absent.
    pub(crate) fn insert_edge(&mut self, from: usize, to: usize) {
        self.matrix.set(from, to, 1);
        self.vertices[from].neighbors.push(to);
        self.vertices[to].in_degree += 1;
        self.non_adjacency.take();
    }

    /// Validates that the matrix and neighbor lists describe the same edges.
    ///
    /// Checks that:
    /// 1. The matrix is `n x n`
    /// 2. Every neighbor index is in bounds and has a nonzero cell
    /// 3. Every nonzero cell appears in the neighbor list exactly once
    /// 4. In-degrees equal the number of incoming edges
    ///
    /// Returns `true` if all invariants hold.
    #[cfg(debug_assertions)]
    pub fn validate_invariants(&self) -> bool {
        let n = self.vertex_count();
        math_assert_msg(self.matrix.size() == n, "matrix must be n x n");
        if self.matrix.size() != n {
            return false;
        }

        let mut incoming = vec![0usize; n];
        for (i, v) in self.vertices.iter().enumerate() {
            for &j in &v.neighbors {
                if j >= n || !self.matrix.has_edge(i, j) {
                    math_assert_msg(false, "neighbor without matching matrix cell");
                    return false;
                }
                incoming[j] += 1;
            }
            for j in 0..n {
                let listed = v.neighbors.iter().filter(|&&w| w == j).count();
                if usize::from(self.matrix.has_edge(i, j)) != listed {
                    math_assert_msg(false, "matrix cell without exactly one neighbor entry");
                    return false;
                }
            }
        }

        let degrees_match = self
            .vertices
            .iter()
            .zip(&incoming)
            .all(|(v, &count)| v.in_degree == count);
        math_assert_msg(degrees_match, "in-degree must count incoming edges");
        degrees_match
    }

    fn checked(&self, vertex: usize) -> &Vertex<T, K> {
        let n = self.vertex_count();
        self.vertices
            .get(vertex)
            .unwrap_or_else(|| panic!("vertex {vertex} out of bounds for n={n}"))
    }
}

impl<T: PartialEq, K> MatrixGraph<T, K> {
    /// Index of the first vertex whose payload equals `payload`.
    pub fn index_of(&self, payload: &T) -> Option<usize> {
        self.vertices.iter().position(|v| v.payload == *payload)
    }

    /// Adds the directed edge `source -> target`.
    ///
    /// Returns `Ok(true)` when a new edge was inserted and `Ok(false)` when it
    /// already existed; a repeated call changes neither the neighbor list nor
    /// the target's in-degree. Unknown payloads yield
    /// [`GraphError::VertexNotFound`] and leave the graph untouched.
    pub fn connect_to(&mut self, source: &T, target: &T) -> Result<bool>
    where
        T: Debug,
    {
        let from = self.require(source)?;
        let to = self.require(target)?;

        if self.vertices[from].neighbors.contains(&to) {
            self.matrix.set(from, to, 1);
            return Ok(false);
        }

        self.insert_edge(from, to);
        debug!(from, to, "connected vertices");
        Ok(true)
    }

    pub(crate) fn require(&self, payload: &T) -> Result<usize>
    where
        T: Debug,
    {
        self.index_of(payload)
            .ok_or_else(|| GraphError::VertexNotFound(format!("{payload:?}")))
    }
}

#[cfg(test)]
mod tests;
