//! Greedy BFS-ordered vertex coloring.
//!
//! Every vertex starts with palette entry 0. Vertices reachable from vertex 0
//! are then visited in BFS order, and each takes the lowest palette index not
//! already held by a colored vertex adjacent to it in either direction.
//! Vertices unreachable from vertex 0 keep entry 0.

use tracing::{debug, warn};

use super::MatrixGraph;
use crate::error::{GraphError, Result};
use crate::graph::basic::Edge;

/// Summary of a completed coloring run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coloring {
    assignment: Vec<usize>,
    colors_used: usize,
    unreached: Vec<usize>,
}

impl Coloring {
    /// Palette index assigned to each vertex, in vertex order.
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }

    /// Number of distinct palette entries handed out (the high-water mark).
    pub fn colors_used(&self) -> usize {
        self.colors_used
    }

    /// Vertices not reachable from vertex 0; they keep palette entry 0.
    pub fn unreached(&self) -> &[usize] {
        &self.unreached
    }

    /// Number of vertices colored by the traversal.
    pub fn reached(&self) -> usize {
        self.assignment.len() - self.unreached.len()
    }
}

/// Next-free-color state threaded through one coloring run.
struct ColorCursor {
    taken: Vec<bool>,
    high_water: usize,
}

impl ColorCursor {
    fn new(palette_len: usize) -> Self {
        Self {
            taken: vec![false; palette_len],
            high_water: 0,
        }
    }

    /// Lowest palette index not in `used`.
    fn next_free(&mut self, used: impl Iterator<Item = usize>) -> Result<usize> {
        self.taken.fill(false);
        for idx in used {
            if let Some(slot) = self.taken.get_mut(idx) {
                *slot = true;
            }
        }
        let available = self.taken.len();
        let idx = self
            .taken
            .iter()
            .position(|&t| !t)
            .ok_or(GraphError::PaletteExhausted {
                required: available + 1,
                available,
            })?;
        self.high_water = self.high_water.max(idx + 1);
        Ok(idx)
    }
}

impl<T, K: Clone> MatrixGraph<T, K> {
    /// Colors the graph greedily from `palette`.
    ///
    /// With `palette.len() >= d + 1`, where `d` is the largest vertex degree of
    /// the symmetrized graph, no two adjacent reached vertices share a color.
    /// A smaller palette may still succeed; when it does not,
    /// [`GraphError::PaletteExhausted`] is returned and colors assigned before
    /// the failing vertex are kept.
    pub fn color(&mut self, palette: &[K]) -> Result<Coloring> {
        let n = self.vertex_count();
        if n == 0 {
            return Ok(Coloring {
                assignment: Vec::new(),
                colors_used: 0,
                unreached: Vec::new(),
            });
        }
        let Some(first) = palette.first() else {
            return Err(GraphError::PaletteExhausted {
                required: 1,
                available: 0,
            });
        };

        for v in &mut self.vertices {
            v.color = Some(first.clone());
        }

        let order: Vec<usize> = self.bfs_order(0).collect();
        let mut assigned: Vec<Option<usize>> = vec![None; n];
        let mut cursor = ColorCursor::new(palette.len());

        for &v in &order {
            let used = self.adjacent(v).filter_map(|w| assigned[w]);
            let idx = cursor.next_free(used).inspect_err(|_| {
                warn!(vertex = v, palette = palette.len(), "palette exhausted");
            })?;
            assigned[v] = Some(idx);
            self.vertices[v].color = Some(palette[idx].clone());
        }

        let unreached: Vec<usize> = (0..n).filter(|&v| assigned[v].is_none()).collect();
        let coloring = Coloring {
            assignment: assigned.into_iter().map(|a| a.unwrap_or(0)).collect(),
            colors_used: cursor.high_water,
            unreached,
        };
        debug!(
            reached = coloring.reached(),
            colors_used = coloring.colors_used,
            "colored graph"
        );
        Ok(coloring)
    }
}

impl<T, K> MatrixGraph<T, K> {
    /// Out-neighbors followed by in-neighbors of `v`; may repeat a vertex.
    fn adjacent(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        let incoming = (0..self.vertex_count()).filter(move |&u| self.matrix.has_edge(u, v));
        self.vertices[v].neighbors.iter().copied().chain(incoming)
    }

    /// Largest vertex degree when edge direction is ignored.
    pub fn max_undirected_degree(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| {
                (0..self.vertex_count())
                    .filter(|&w| w != v && (self.matrix.has_edge(v, w) || self.matrix.has_edge(w, v)))
                    .count()
            })
            .max()
            .unwrap_or(0)
    }
}

impl<T, K: PartialEq> MatrixGraph<T, K> {
    /// Edges whose endpoints currently carry the same color; self-loops ignored.
    pub fn color_conflicts(&self) -> Vec<Edge> {
        let mut conflicts = Vec::new();
        for (source, v) in self.vertices.iter().enumerate() {
            for &target in &v.neighbors {
                if source != target && v.color.is_some() && v.color == self.vertices[target].color {
                    conflicts.push(Edge { source, target });
                }
            }
        }
        conflicts
    }
}
