//! Rendering of graphs and derived structures.
//!
//! Presentation only: nothing here mutates a graph. `TextReporter` produces the
//! plain console layouts, `JsonReporter` a serde snapshot.

use std::fmt::{Display, Write};

use serde::Serialize;

use crate::graph::{Edge, MatrixGraph, Path};

/// Renders a graph, or a structure derived from one, as text.
pub trait Reporter<T, K> {
    /// Renders the whole graph.
    fn graph(&self, graph: &MatrixGraph<T, K>) -> String;
}

/// Plain text layouts for console output.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Payloads separated by spaces.
    pub fn vertices<T: Display, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        join(graph.vertices().iter().map(|v| v.payload()), " ")
    }

    /// The matrix with a payload header row and column.
    pub fn matrix<T: Display, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        let mut out = String::from(" : ");
        for v in graph.vertices() {
            let _ = write!(out, "{}  ", v.payload());
        }
        out.push('\n');
        for (v, row) in graph.vertices().iter().zip(graph.matrix().rows()) {
            let _ = write!(out, "{}: ", v.payload());
            for cell in row {
                let _ = write!(out, "{cell}  ");
            }
            out.push('\n');
        }
        out
    }

    /// The matrix as a nested literal, e.g. `{{0, 1}, {1, 0}}`.
    pub fn matrix_code<T, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        let rows = graph.matrix().rows().map(|row| format!("{{{}}}", join(row.iter(), ", ")));
        format!("{{{}}}", join(rows, ", "))
    }

    /// One `A: {B, C}` line per vertex.
    pub fn adjacency<T: Display, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        lines(graph, |v| {
            let names = v.neighbors().iter().map(|&w| graph.vertices()[w].payload());
            format!("{{{}}}", join(names, ", "))
        })
    }

    /// One `A: RED` line per vertex; uncolored vertices show `-`.
    pub fn colors<T: Display, K: Display>(&self, graph: &MatrixGraph<T, K>) -> String {
        lines(graph, |v| v.color().map_or_else(|| "-".to_string(), ToString::to_string))
    }

    /// One `A: 3` line per vertex, showing in-degrees.
    pub fn in_degrees<T: Display, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        lines(graph, |v| v.in_degree().to_string())
    }

    /// One `A: (B C)` line per vertex.
    pub fn non_adjacency<T: Display, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        let non_adj = graph.non_adjacency();
        let mut out = String::new();
        for (i, list) in non_adj.iter() {
            let names = list.iter().map(|&w| graph.vertices()[w].payload());
            let _ = writeln!(out, "{}: ({})", graph.vertices()[i].payload(), join(names, " "));
        }
        out
    }

    /// A single `A--B` edge.
    pub fn edge<T: Display, K>(&self, graph: &MatrixGraph<T, K>, edge: Edge) -> String {
        let (a, b) = graph.edge_payloads(edge);
        format!("{a}--{b}")
    }

    /// The upper-triangle edge list, one edge per line.
    pub fn edges<T: Display, K>(&self, graph: &MatrixGraph<T, K>) -> String {
        let mut out = String::new();
        for edge in graph.edge_list() {
            let _ = writeln!(out, "{}", self.edge(graph, edge));
        }
        out
    }

    /// A path from start to end, e.g. `B -> F -> D`.
    pub fn path<T: Display, K>(&self, graph: &MatrixGraph<T, K>, path: &Path) -> String {
        join(graph.path_payloads(path), " -> ")
    }
}

impl<T: Display, K: Display> Reporter<T, K> for TextReporter {
    fn graph(&self, graph: &MatrixGraph<T, K>) -> String {
        format!(
            "{}\n{}\n{}",
            self.matrix(graph),
            self.adjacency(graph),
            self.colors(graph)
        )
    }
}

/// Serializable view of a graph.
#[derive(Debug, Serialize)]
pub struct GraphSnapshot<'a, T, K> {
    /// Payloads in index order.
    pub payloads: Vec<&'a T>,
    /// Colors in index order.
    pub colors: Vec<Option<&'a K>>,
    /// In-degrees in index order.
    pub in_degrees: Vec<usize>,
    /// Matrix rows.
    pub matrix: Vec<Vec<i32>>,
    /// Directed edges.
    pub edges: Vec<Edge>,
}

impl<'a, T, K> GraphSnapshot<'a, T, K> {
    /// Captures the current state of `graph`.
    pub fn of(graph: &'a MatrixGraph<T, K>) -> Self {
        let vertices = graph.vertices();
        Self {
            payloads: vertices.iter().map(|v| v.payload()).collect(),
            colors: vertices.iter().map(|v| v.color()).collect(),
            in_degrees: vertices.iter().map(|v| v.in_degree()).collect(),
            matrix: graph.matrix().to_rows(),
            edges: graph.directed_edges(),
        }
    }
}

/// Pretty-printed JSON snapshots.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReporter;

impl<T: Serialize, K: Serialize> Reporter<T, K> for JsonReporter {
    fn graph(&self, graph: &MatrixGraph<T, K>) -> String {
        serde_json::to_string_pretty(&GraphSnapshot::of(graph))
            .unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}

fn join<I>(items: I, sep: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        let _ = write!(out, "{item}");
    }
    out
}

fn lines<T: Display, K>(
    graph: &MatrixGraph<T, K>,
    body: impl Fn(&crate::graph::Vertex<T, K>) -> String,
) -> String {
    let mut out = String::new();
    for v in graph.vertices() {
        let _ = writeln!(out, "{}: {}", v.payload(), body(v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> MatrixGraph<char, &'static str> {
        MatrixGraph::from_rows(['A', 'B', 'C'], vec![vec![0, 1, 1], vec![1, 0, 0], vec![1, 0, 0]]).unwrap()
    }

    #[test]
    fn text_layouts() {
        let mut graph = triangle();
        let r = TextReporter;
        assert_eq!(r.vertices(&graph), "A B C");
        assert_eq!(r.matrix_code(&graph), "{{0, 1, 1}, {1, 0, 0}, {1, 0, 0}}");
        assert_eq!(r.adjacency(&graph), "A: {B, C}\nB: {A}\nC: {A}\n");
        assert_eq!(r.in_degrees(&graph), "A: 2\nB: 1\nC: 1\n");
        assert_eq!(r.non_adjacency(&graph), "A: (A)\nB: (B C)\nC: (B C)\n");
        assert_eq!(r.edges(&graph), "A--B\nA--C\n");
        assert_eq!(r.colors(&graph), "A: -\nB: -\nC: -\n");

        graph.color(&["RED", "BLUE"]).unwrap();
        assert_eq!(r.colors(&graph), "A: RED\nB: BLUE\nC: BLUE\n");
        assert!(r.matrix(&graph).starts_with(" : A  B  C  \nA: 0  1  1  \n"));
    }

    #[test]
    fn text_path() {
        let graph = triangle();
        let path = graph.find_path(&'B', &'C').unwrap().into_path().unwrap();
        assert_eq!(TextReporter.path(&graph, &path), "B -> A -> C");
    }

    #[test]
    fn json_snapshot() {
        let graph = triangle();
        let json = JsonReporter.graph(&graph);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["payloads"], serde_json::json!(["A", "B", "C"]));
        assert_eq!(value["in_degrees"], serde_json::json!([2, 1, 1]));
        assert_eq!(value["edges"].as_array().unwrap().len(), 4);
    }
}
