//! Random edge generators for [`MatrixGraph`].
//!
//! Each generator first removes every existing edge, then draws one bit per
//! candidate pair and writes it into both the matrix and the neighbor lists.
//! No generator ever produces a self-loop.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::graph::basic::MatrixGraph;

/// A source of independent presence bits.
pub trait RandomSource {
    /// Draws the next bit; `true` means "add the edge".
    fn next_bit(&mut self) -> bool;
}

/// Every `rand` generator is a fair coin.
impl<R: Rng + ?Sized> RandomSource for R {
    fn next_bit(&mut self) -> bool {
        self.gen_bool(0.5)
    }
}

/// A biased coin: `true` with probability `p`.
#[derive(Debug, Clone)]
pub struct BernoulliSource<R> {
    rng: R,
    p: f64,
}

impl<R: Rng> BernoulliSource<R> {
    /// Wraps `rng`, clamping `p` into `[0, 1]`; NaN becomes 0.
    pub fn new(rng: R, p: f64) -> Self {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        Self { rng, p }
    }

    /// Edge probability.
    pub fn probability(&self) -> f64 {
        self.p
    }
}

impl BernoulliSource<StdRng> {
    /// Builds a source from a generator configuration.
    ///
    /// A configured seed makes the draws reproducible.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::new(rng, config.edge_probability)
    }
}

impl<R: Rng> RandomSource for BernoulliSource<R> {
    fn next_bit(&mut self) -> bool {
        self.rng.gen_bool(self.p)
    }
}

/// Fills `graph` with a random undirected edge set.
///
/// One bit is drawn per unordered pair `i < j`; when set, both `i -> j` and
/// `j -> i` are added, so the matrix is symmetric.
pub fn undirected<T, K, S>(graph: &mut MatrixGraph<T, K>, source: &mut S)
where
    S: RandomSource + ?Sized,
{
    graph.reset_edges();
    let n = graph.vertex_count();
    for i in 0..n {
        for j in i + 1..n {
            if source.next_bit() {
                graph.insert_edge(i, j);
                graph.insert_edge(j, i);
            }
        }
    }
    debug!(vertices = n, edges = graph.edge_count(), "generated undirected graph");
}

/// Fills `graph` with a random directed edge set.
///
/// One bit is drawn independently per ordered pair `i != j`.
pub fn directed<T, K, S>(graph: &mut MatrixGraph<T, K>, source: &mut S)
where
    S: RandomSource + ?Sized,
{
    graph.reset_edges();
    let n = graph.vertex_count();
    for i in 0..n {
        for j in (0..n).filter(|&j| j != i) {
            if source.next_bit() {
                graph.insert_edge(i, j);
            }
        }
    }
    debug!(vertices = n, edges = graph.edge_count(), "generated directed graph");
}

/// Fills `graph` with a random directed acyclic edge set.
///
/// Only pairs `i < j` are candidates, so the matrix is strictly upper
/// triangular and vertex order is a topological order. An edge is registered
/// only when its bit is set.
pub fn acyclic<T, K, S>(graph: &mut MatrixGraph<T, K>, source: &mut S)
where
    S: RandomSource + ?Sized,
{
    graph.reset_edges();
    let n = graph.vertex_count();
    for i in 0..n {
        for j in i + 1..n {
            if source.next_bit() {
                graph.insert_edge(i, j);
            }
        }
    }
    debug!(vertices = n, edges = graph.edge_count(), "generated acyclic graph");
}
