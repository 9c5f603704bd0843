//! Walks through the seven-vertex scenario graph, then a seeded random graph.
//!
//! Run with `RUST_LOG=dualgraph=debug cargo run --example scenario` to see the
//! library's tracing events.

use anyhow::Context;
use dualgraph::graph::generate;
use dualgraph::{GeneratorConfig, JsonReporter, MatrixGraph, PathOutcome, Reporter, TextReporter};
use tracing_subscriber::EnvFilter;

const COLORS: [&str; 9] = ["BLUE", "RED", "YELLOW", "PURPLE", "ORANGE", "GREEN", "MAGENTA", "CYAN", "BLACK"];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let rows = vec![
        vec![0, 0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 0, 1, 0],
        vec![1, 0, 0, 0, 1, 1, 1],
        vec![1, 0, 0, 0, 0, 1, 0],
        vec![1, 0, 1, 0, 0, 1, 0],
        vec![0, 1, 1, 1, 1, 0, 1],
        vec![0, 0, 1, 0, 0, 1, 0],
    ];
    let mut graph: MatrixGraph<char, &str> =
        MatrixGraph::from_rows(['A', 'B', 'C', 'D', 'E', 'F', 'G'], rows).context("building scenario graph")?;
    let text = TextReporter;

    println!("{}", text.matrix(&graph));
    println!("{}", text.adjacency(&graph));
    println!("{}", text.non_adjacency(&graph));

    match graph.find_path(&'B', &'D')? {
        PathOutcome::Found(path) => println!("B to D: {}\n", text.path(&graph, &path)),
        PathOutcome::Unreachable => println!("B to D: unreachable\n"),
    }

    let coloring = graph.color(&COLORS).context("coloring scenario graph")?;
    println!("{}", text.colors(&graph));
    println!("colors used: {}\n", coloring.colors_used());

    let config = GeneratorConfig::from_json(r#"{ "edge_probability": 0.4, "seed": 2024 }"#)?;
    let mut random: MatrixGraph<u32, &str> = MatrixGraph::new(1..=5);
    generate::undirected(&mut random, &mut config.source()?);

    println!("{}", text.matrix_code(&random));
    println!("{}", text.edges(&random));
    println!("{}", text.in_degrees(&random));
    random.color(&COLORS)?;
    println!("{}", JsonReporter.graph(&random));

    Ok(())
}
