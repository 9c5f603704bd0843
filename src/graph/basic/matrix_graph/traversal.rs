//! Breadth-first traversal and shortest-path reconstruction.

use std::collections::VecDeque;
use std::fmt::Debug;

use tracing::trace;

use super::MatrixGraph;
use crate::error::Result;
use crate::graph::access::TraversalState;

/// A BFS path, stored from the end vertex back to the start vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    vertices: Vec<usize>,
}

impl Path {
    pub(crate) fn new(vertices: Vec<usize>) -> Self {
        debug_assert!(!vertices.is_empty(), "a path holds at least its start vertex");
        Self { vertices }
    }

    /// Vertex indices from end to start.
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices on the path (edges + 1).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a found path contains at least its start vertex.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path.
    pub fn hops(&self) -> usize {
        self.vertices.len() - 1
    }

    /// The vertex the search started from.
    pub fn start(&self) -> usize {
        self.vertices[self.vertices.len() - 1]
    }

    /// The vertex the search was looking for.
    pub fn end(&self) -> usize {
        self.vertices[0]
    }

    /// Vertex indices from start to end.
    pub fn forward(&self) -> impl Iterator<Item = usize> + '_ {
        self.vertices.iter().rev().copied()
    }
}

/// Result of a path search between two existing vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathOutcome {
    /// The end vertex is reachable; the path runs end to start.
    Found(Path),
    /// No directed path leads from start to end.
    Unreachable,
}

impl PathOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            PathOutcome::Found(p) => Some(p),
            PathOutcome::Unreachable => None,
        }
    }

    /// Consumes the outcome, returning the path if one was found.
    pub fn into_path(self) -> Option<Path> {
        match self {
            PathOutcome::Found(p) => Some(p),
            PathOutcome::Unreachable => None,
        }
    }

    /// Returns `true` for [`PathOutcome::Found`].
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }
}

/// An iterator yielding vertex indices in BFS order.
///
/// It uses an internal `VecDeque` and [`TraversalState`] for bookkeeping.
pub struct Bfs<'a, T, K> {
    graph: &'a MatrixGraph<T, K>,
    state: TraversalState,
    queue: VecDeque<usize>,
}

impl<'a, T, K> Bfs<'a, T, K> {
    fn new(graph: &'a MatrixGraph<T, K>, start: usize) -> Self {
        let mut state = TraversalState::new(graph.vertex_count());
        let mut queue = VecDeque::new();
        if start < graph.vertex_count() {
            state.try_visit(start);
            queue.push_back(start);
        }
        Self { graph, state, queue }
    }

    /// The traversal state accumulated so far.
    pub fn state(&self) -> &TraversalState {
        &self.state
    }

    /// Consumes the iterator, returning its traversal state.
    pub fn into_state(self) -> TraversalState {
        self.state
    }
}

impl<T, K> Iterator for Bfs<'_, T, K> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let u = self.queue.pop_front()?;
        for &v in self.graph.neighbors(u) {
            if self.state.try_visit(v) {
                self.state.set_parent(v, u);
                self.queue.push_back(v);
            }
        }
        Some(u)
    }
}

impl<T, K> MatrixGraph<T, K> {
    /// Payloads along a path, start first.
    pub fn path_payloads<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a T> + 'a {
        path.forward().map(move |i| self.vertices[i].payload())
    }

    /// Iterates over the vertices reachable from `start` in BFS order.
    ///
    /// An out-of-bounds `start` yields nothing.
    pub fn bfs_order(&self, start: usize) -> Bfs<'_, T, K> {
        Bfs::new(self, start)
    }

    /// Index-level BFS from `start`, stopping as soon as `target` is dequeued.
    ///
    /// Returns whether `target` was reached together with the traversal state,
    /// whose parent links describe a shortest path tree rooted at `start`.
    /// A vertex is marked visited when it is first enqueued, so each parent is
    /// the first vertex that discovered it.
    ///
    /// # Panics
    /// Panics if `start` or `target` is out of bounds.
    pub fn search(&self, start: usize, target: usize) -> (bool, TraversalState) {
        assert!(target < self.vertex_count(), "target vertex {target} out of bounds");
        let mut bfs = self.bfs_order(start);
        assert!(!bfs.queue.is_empty(), "start vertex {start} out of bounds");

        let found = bfs.by_ref().any(|u| {
            trace!(vertex = u, "bfs dequeued");
            u == target
        });
        (found, bfs.into_state())
    }
}

impl<T: PartialEq + Debug, K> MatrixGraph<T, K> {
    /// Finds a shortest path (by edge count) from `start` to `end`.
    ///
    /// Both payloads must exist, otherwise [`crate::GraphError::VertexNotFound`]
    /// is returned. `find_path(x, x)` yields the single-vertex path `[x]`.
    pub fn find_path(&self, start: &T, end: &T) -> Result<PathOutcome> {
        let from = self.require(start)?;
        let to = self.require(end)?;

        let (found, state) = self.search(from, to);
        if found {
            let path = Path::new(state.path_from(to));
            trace!(from, to, hops = path.hops(), "path found");
            Ok(PathOutcome::Found(path))
        } else {
            trace!(from, to, visited = state.visited().count(), "target unreachable");
            Ok(PathOutcome::Unreachable)
        }
    }
}
