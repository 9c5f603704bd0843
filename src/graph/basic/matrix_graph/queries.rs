//! Non-adjacency and edge enumeration queries.

use super::MatrixGraph;
use crate::graph::basic::Edge;

/// For each vertex, the vertices sharing no edge with it in either direction.
///
/// A vertex without a self-loop lists itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonAdjacency {
    lists: Vec<Vec<usize>>,
}

impl NonAdjacency {
    /// Non-neighbors of `vertex`, in index order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of bounds.
    pub fn of(&self, vertex: usize) -> &[usize] {
        &self.lists[vertex]
    }

    /// Iterates over `(vertex, non_neighbors)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[usize])> + '_ {
        self.lists.iter().enumerate().map(|(v, l)| (v, l.as_slice()))
    }

    /// Number of vertices covered.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` for an empty graph.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }
}

impl<T, K> MatrixGraph<T, K> {
    /// Non-adjacency of every vertex, treating the graph as symmetrized.
    ///
    /// Computed on first use and cached until the next edge mutation.
    pub fn non_adjacency(&self) -> &NonAdjacency {
        self.non_adjacency.get_or_init(|| {
            let n = self.vertex_count();
            let lists = (0..n)
                .map(|v| {
                    (0..n)
                        .filter(|&w| !self.vertices[v].neighbors.contains(&w) && !self.vertices[w].neighbors.contains(&v))
                        .collect()
                })
                .collect();
            NonAdjacency { lists }
        })
    }

    /// Edges found in the strict upper triangle of the matrix (`i < j`).
    ///
    /// Complete for undirected and upper-triangular graphs only; an edge
    /// present solely below the diagonal is not reported.
    pub fn edge_list(&self) -> Vec<Edge> {
        let n = self.vertex_count();
        let mut edges = Vec::new();
        for source in 0..n {
            for target in source + 1..n {
                if self.matrix.has_edge(source, target) {
                    edges.push(Edge { source, target });
                }
            }
        }
        edges
    }

    /// Every directed edge, in source order then neighbor insertion order.
    pub fn directed_edges(&self) -> Vec<Edge> {
        self.vertices
            .iter()
            .enumerate()
            .flat_map(|(source, v)| v.neighbors.iter().map(move |&target| Edge { source, target }))
            .collect()
    }
}
