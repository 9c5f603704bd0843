//! Visited sets and parent arrays for graph traversals.
//!
//! - `VisitedSet`: a dense, word-packed bitset sized to the vertex count
//! - `TraversalState`: a `VisitedSet` plus one parent slot per vertex
//!
//! Both are indexed by the graph's fixed vertex positions.

const WORD_BITS: usize = u64::BITS as usize;

/// A dense, word-packed visited set for fixed-size graphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedSet {
    words: Vec<u64>,
    bits: usize,
}

impl VisitedSet {
    /// Creates a set able to track `bits` vertices, all unvisited.
    pub fn new(bits: usize) -> Self {
        Self {
            words: vec![0; bits.div_ceil(WORD_BITS)],
            bits,
        }
    }

    /// Number of vertices tracked.
    #[inline]
    pub fn len(&self) -> usize {
        self.bits
    }

    /// Returns `true` if the set tracks no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Marks every vertex unvisited.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }

    /// Returns `true` iff `node` was not yet visited, and marks it visited.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn try_visit(&mut self, node: usize) -> bool {
        assert!(node < self.bits, "node {node} out of bounds for n={}", self.bits);
        let word = &mut self.words[node / WORD_BITS];
        let mask = 1u64 << (node % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Returns `true` if `node` has been visited.
    ///
    /// # Panics
    /// Panics if `node` is out of bounds.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        assert!(node < self.bits, "node {node} out of bounds for n={}", self.bits);
        self.words[node / WORD_BITS] & (1u64 << (node % WORD_BITS)) != 0
    }

    /// Number of visited vertices.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

/// Per-traversal state: visited bits plus the BFS predecessor of each vertex.
///
/// Owned by a single traversal call and handed back to the caller, so it is
/// never shared between searches.
#[derive(Debug, Clone)]
pub struct TraversalState {
    visited: VisitedSet,
    parent: Vec<Option<usize>>,
}

impl TraversalState {
    /// Creates a clean state for a graph with `vertex_count` vertices.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            visited: VisitedSet::new(vertex_count),
            parent: vec![None; vertex_count],
        }
    }

    /// Number of vertex slots.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the state has no slots.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Marks `node` visited; returns `true` if it was not visited before.
    #[inline]
    pub fn try_visit(&mut self, node: usize) -> bool {
        self.visited.try_visit(node)
    }

    /// Returns `true` if `node` has been visited.
    #[inline]
    pub fn is_visited(&self, node: usize) -> bool {
        self.visited.is_visited(node)
    }

    /// Records `parent` as the predecessor of `node` on the BFS tree.
    #[inline]
    pub fn set_parent(&mut self, node: usize, parent: usize) {
        self.parent[node] = Some(parent);
    }

    /// BFS predecessor of `node`, if any.
    #[inline]
    pub fn parent(&self, node: usize) -> Option<usize> {
        self.parent[node]
    }

    /// The visited bitset.
    pub fn visited(&self) -> &VisitedSet {
        &self.visited
    }

    /// Walks parent links from `end` until a vertex without a parent.
    ///
    /// The result runs from `end` back to the traversal root.
    pub fn path_from(&self, end: usize) -> Vec<usize> {
        let mut path = vec![end];
        let mut current = end;
        while let Some(p) = self.parent[current] {
            path.push(p);
            current = p;
        }
        path
    }
}
