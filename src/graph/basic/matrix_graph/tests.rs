//! Tests for the dual-representation graph.

use super::*;

const PAYLOADS: [char; 7] = ['A', 'B', 'C', 'D', 'E', 'F', 'G'];

fn scenario_rows() -> Vec<Vec<i32>> {
    vec![
        vec![0, 0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 0, 1, 0],
        vec![1, 0, 0, 0, 1, 1, 1],
        vec![1, 0, 0, 0, 0, 1, 0],
        vec![1, 0, 1, 0, 0, 1, 0],
        vec![0, 1, 1, 1, 1, 0, 1],
        vec![0, 0, 1, 0, 0, 1, 0],
    ]
}

fn scenario() -> MatrixGraph<char, &'static str> {
    MatrixGraph::from_rows(PAYLOADS, scenario_rows()).unwrap()
}

#[test]
fn test_new_graph_is_disconnected() {
    let graph: MatrixGraph<u32, u8> = MatrixGraph::new(0..5);
    assert_eq!(graph.vertex_count(), 5);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.matrix().size(), 5);
    assert_eq!(graph.matrix().nonzero_count(), 0);
    assert!(graph.vertices().iter().all(|v| v.color().is_none()));
    assert!(graph.validate_invariants());
}

#[test]
fn test_from_matrix_builds_neighbor_lists_in_column_order() {
    let graph = scenario();
    assert_eq!(graph.edge_count(), 20);
    // A -> C, D, E
    assert_eq!(graph.neighbors(0), &[2, 3, 4]);
    // F -> B, C, D, E, G
    assert_eq!(graph.neighbors(5), &[1, 2, 3, 4, 6]);
    assert_eq!(graph.in_degree(5), 5);
    assert_eq!(graph.out_degree(1), 1);
    assert!(graph.validate_invariants());
}

#[test]
fn test_from_matrix_rejects_wrong_size() {
    let matrix = AdjacencyMatrix::new(3);
    let err = MatrixGraph::<char, u8>::from_matrix(['A', 'B'], matrix).unwrap_err();
    assert_eq!(
        err,
        GraphError::DimensionMismatch {
            vertices: 2,
            row: None,
            len: 3
        }
    );

    let err = MatrixGraph::<char, u8>::from_rows(['A', 'B'], vec![vec![0, 1], vec![1, 0, 0]]).unwrap_err();
    assert!(matches!(err, GraphError::DimensionMismatch { row: Some(1), len: 3, .. }));
}

#[test]
fn test_connect_to_is_idempotent() {
    let mut graph: MatrixGraph<char, u8> = MatrixGraph::new(['a', 'b', 'c']);
    assert_eq!(graph.connect_to(&'a', &'b'), Ok(true));
    assert_eq!(graph.connect_to(&'a', &'b'), Ok(false));

    assert_eq!(graph.matrix().get(0, 1), 1);
    assert_eq!(graph.neighbors(0), &[1]);
    assert_eq!(graph.in_degree(1), 1);
    assert!(!graph.has_edge(1, 0));
    assert!(graph.validate_invariants());
}

#[test]
fn test_connect_to_unknown_payload_leaves_graph_untouched() {
    let mut graph: MatrixGraph<char, u8> = MatrixGraph::new(['a', 'b']);
    let err = graph.connect_to(&'a', &'z').unwrap_err();
    assert_eq!(err, GraphError::VertexNotFound("'z'".to_string()));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.matrix().nonzero_count(), 0);
}

#[test]
fn test_find_path_through_shared_neighbor() {
    let graph = scenario();
    let outcome = graph.find_path(&'B', &'D').unwrap();
    let path = outcome.path().expect("D is reachable from B");
    assert_eq!(path.vertices(), &[3, 5, 1]);
    assert_eq!(path.len(), 3);
    assert_eq!(path.start(), 1);
    assert_eq!(path.end(), 3);
    let forward: Vec<char> = graph.path_payloads(path).copied().collect();
    assert_eq!(forward, vec!['B', 'F', 'D']);
}

#[test]
fn test_find_path_to_self_is_single_vertex() {
    let graph = scenario();
    for payload in PAYLOADS {
        let path = graph.find_path(&payload, &payload).unwrap().into_path().unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path.hops(), 0);
        assert_eq!(graph.vertices()[path.end()].payload(), &payload);
    }
}

#[test]
fn test_find_path_reports_unreachable() {
    let mut graph: MatrixGraph<&str, u8> = MatrixGraph::new(["x", "y", "z"]);
    graph.connect_to(&"x", &"y").unwrap();

    assert!(graph.find_path(&"x", &"y").unwrap().is_found());
    assert_eq!(graph.find_path(&"y", &"x").unwrap(), PathOutcome::Unreachable);
    assert_eq!(graph.find_path(&"x", &"z").unwrap(), PathOutcome::Unreachable);
}

#[test]
fn test_repeated_searches_start_clean() {
    let graph = scenario();
    let first = graph.find_path(&'D', &'B').unwrap();
    let second = graph.find_path(&'D', &'B').unwrap();
    assert_eq!(first, second);
    assert_eq!(first.path().unwrap().vertices(), &[1, 5, 3]);
}

#[test]
fn test_find_path_unknown_payload() {
    let graph = scenario();
    assert_eq!(
        graph.find_path(&'A', &'Z').unwrap_err(),
        GraphError::VertexNotFound("'Z'".to_string())
    );
    assert!(matches!(graph.find_path(&'Q', &'A'), Err(GraphError::VertexNotFound(_))));
}

#[test]
fn test_bfs_order_visits_reachable_vertices_once() {
    let graph = scenario();
    let order: Vec<usize> = graph.bfs_order(0).collect();
    assert_eq!(order, vec![0, 2, 3, 4, 5, 6, 1]);
    assert_eq!(graph.bfs_order(99).count(), 0);
}

#[test]
fn test_color_scenario_is_proper() {
    let mut graph = scenario();
    let palette = ["BLUE", "RED", "YELLOW", "PURPLE", "ORANGE", "GREEN", "MAGENTA", "CYAN", "BLACK"];
    let coloring = graph.color(&palette).unwrap();

    assert_eq!(coloring.assignment(), &[0, 1, 1, 1, 2, 0, 2]);
    assert_eq!(coloring.colors_used(), 3);
    assert!(coloring.unreached().is_empty());
    assert!(graph.color_conflicts().is_empty());
    assert_eq!(graph.vertices()[5].color(), Some(&"BLUE"));
    assert_eq!(graph.vertices()[4].color(), Some(&"YELLOW"));
}

#[test]
fn test_color_leaves_unreachable_vertices_at_first_entry() {
    let mut graph: MatrixGraph<u8, char> = MatrixGraph::new([0, 1, 2]);
    graph.connect_to(&0, &1).unwrap();
    let coloring = graph.color(&['r', 'g']).unwrap();

    assert_eq!(coloring.unreached(), &[2]);
    assert_eq!(coloring.reached(), 2);
    assert_eq!(graph.vertices()[1].color(), Some(&'g'));
    assert_eq!(graph.vertices()[2].color(), Some(&'r'));
}

#[test]
fn test_color_palette_exhaustion() {
    let mut graph: MatrixGraph<u8, char> =
        MatrixGraph::from_rows([0, 1, 2], vec![vec![0, 1, 1], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
    assert_eq!(
        graph.color(&['r', 'g']).unwrap_err(),
        GraphError::PaletteExhausted {
            required: 3,
            available: 2
        }
    );
    assert_eq!(
        graph.color(&[]).unwrap_err(),
        GraphError::PaletteExhausted {
            required: 1,
            available: 0
        }
    );
    assert_eq!(graph.color(&['r', 'g', 'b']).unwrap().colors_used(), 3);
}

#[test]
fn test_color_empty_graph() {
    let mut graph: MatrixGraph<u8, char> = MatrixGraph::new([]);
    let coloring = graph.color(&[]).unwrap();
    assert_eq!(coloring.reached(), 0);
    assert_eq!(graph.max_undirected_degree(), 0);
}

#[test]
fn test_non_adjacency_is_symmetrized_and_cached() {
    let mut graph: MatrixGraph<char, u8> = MatrixGraph::new(['a', 'b', 'c']);
    graph.connect_to(&'a', &'b').unwrap();

    let non_adj = graph.non_adjacency();
    assert_eq!(non_adj.len(), 3);
    assert_eq!(non_adj.of(0), &[0, 2]);
    assert_eq!(non_adj.of(1), &[1, 2]);
    assert_eq!(non_adj.of(2), &[0, 1, 2]);
    assert!(std::ptr::eq(non_adj, graph.non_adjacency()));

    graph.connect_to(&'c', &'a').unwrap();
    assert_eq!(graph.non_adjacency().of(2), &[1, 2]);
}

#[test]
fn test_non_adjacency_scenario() {
    let graph = scenario();
    assert_eq!(graph.non_adjacency().of(0), &[0, 1, 5, 6]);
}

#[test]
fn test_edge_list_scans_upper_triangle_only() {
    let graph = scenario();
    let edges = graph.edge_list();
    assert_eq!(edges.len(), 10);
    assert_eq!(edges[0], Edge { source: 0, target: 2 });
    assert_eq!(graph.edge_payloads(edges[0]), (&'A', &'C'));

    let mut directed: MatrixGraph<u8, u8> = MatrixGraph::new([0, 1]);
    directed.connect_to(&1, &0).unwrap();
    assert!(directed.edge_list().is_empty());
    assert_eq!(directed.directed_edges(), vec![Edge { source: 1, target: 0 }]);
}
