//! Vertex and edge records for `MatrixGraph`.

use serde::{Deserialize, Serialize};

/// A graph vertex: payload, color label, in-degree and outgoing neighbors.
///
/// Neighbors are indices into the owning graph's vertex array, in edge-add order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex<T, K> {
    pub(crate) payload: T,
    pub(crate) color: Option<K>,
    pub(crate) in_degree: usize,
    pub(crate) neighbors: Vec<usize>,
}

impl<T, K> Vertex<T, K> {
    pub(crate) fn new(payload: T) -> Self {
        Self {
            payload,
            color: None,
            in_degree: 0,
            neighbors: Vec::new(),
        }
    }

    /// The identity payload.
    #[inline]
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The current color, if one has been assigned.
    #[inline]
    pub fn color(&self) -> Option<&K> {
        self.color.as_ref()
    }

    /// Number of edges terminating at this vertex.
    #[inline]
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Outgoing neighbor indices in insertion order.
    #[inline]
    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    pub(crate) fn reset_edges(&mut self) {
        self.neighbors.clear();
        self.in_degree = 0;
    }
}

/// A derived `(source, target)` index pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex index.
    pub source: usize,
    /// Target vertex index.
    pub target: usize,
}
