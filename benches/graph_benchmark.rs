use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dualgraph::graph::generate;
use dualgraph::MatrixGraph;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_undirected(size: usize) -> MatrixGraph<usize, usize> {
    let mut graph = MatrixGraph::new(0..size);
    generate::undirected(&mut graph, &mut StdRng::seed_from_u64(42));
    graph
}

fn bench_generators(c: &mut Criterion) {
    let size = 256;

    c.bench_function("generate_undirected_256", |b| {
        let mut graph: MatrixGraph<usize, usize> = MatrixGraph::new(0..size);
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generate::undirected(black_box(&mut graph), &mut rng));
    });

    c.bench_function("generate_acyclic_256", |b| {
        let mut graph: MatrixGraph<usize, usize> = MatrixGraph::new(0..size);
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generate::acyclic(black_box(&mut graph), &mut rng));
    });
}

fn bench_find_path(c: &mut Criterion) {
    let size = 1000;
    // Chain: 0 -> 1 -> ... -> N
    let mut chain: MatrixGraph<usize, usize> = MatrixGraph::new(0..size);
    for i in 0..size - 1 {
        chain.connect_to(&i, &(i + 1)).unwrap();
    }

    c.bench_function("find_path_chain_1000", |b| {
        b.iter(|| black_box(chain.find_path(&0, &(size - 1)).unwrap()));
    });

    let dense = random_undirected(256);
    c.bench_function("find_path_dense_256", |b| {
        b.iter(|| black_box(dense.find_path(&0, &255).unwrap()));
    });
}

fn bench_color(c: &mut Criterion) {
    let mut graph = random_undirected(256);
    let palette: Vec<usize> = (0..=graph.max_undirected_degree()).collect();

    c.bench_function("color_dense_256", |b| {
        b.iter(|| black_box(graph.color(&palette).unwrap()));
    });
}

criterion_group!(benches, bench_generators, bench_find_path, bench_color);
criterion_main!(benches);
