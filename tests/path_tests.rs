use floyd_warshall::algorithm::floyd_warshall::FloydWarshall;
use floyd_warshall::algorithm::{AllPairsResult, AllPairsShortestPaths};
use floyd_warshall::graph::{AdjacencyMatrix, Distance, GraphBuilder, Matrix};
use floyd_warshall::Error;

fn line_graph() -> AllPairsResult<i64> {
    let adjacency = AdjacencyMatrix::from_edges(4, [(0, 1, 2), (1, 2, 2), (2, 3, 2)]).unwrap();
    FloydWarshall::new().solve(&adjacency).unwrap()
}

#[test]
fn test_path_follows_every_hop() {
    let result = line_graph();

    assert_eq!(result.path(0, 3).unwrap(), vec![0, 1, 2, 3]);
    assert_eq!(result.distance(0, 3).unwrap(), Distance::Finite(6));
    // Edges are one-way
    assert!(result.path(3, 0).unwrap().is_empty());
}

#[test]
fn test_out_of_range_indices_are_rejected() {
    let result = line_graph();

    assert_eq!(
        result.path(4, 0),
        Err(Error::IndexOutOfRange { index: 4, size: 4 })
    );
    assert_eq!(
        result.path(0, 17),
        Err(Error::IndexOutOfRange { index: 17, size: 4 })
    );
    // Out of range even when both ends coincide
    assert_eq!(
        result.path(9, 9),
        Err(Error::IndexOutOfRange { index: 9, size: 4 })
    );
    assert!(matches!(result.distance(0, 4), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(result.next_hop(5, 0), Err(Error::IndexOutOfRange { .. })));
}

#[test]
fn test_cyclic_next_hops_are_reported() {
    // 0 -> 2 bounces between 0 and 1 forever
    let distances = Matrix::from_fn(3, |i, j| if i == j { Distance::Finite(0) } else { Distance::Finite(1) });
    let next_hops = Matrix::from_fn(3, |i, j| match (i, j) {
        (0, 2) => Some(1),
        (1, 2) => Some(0),
        _ if i == j => None,
        _ => Some(j),
    });
    let result = AllPairsResult::<i64>::new(distances, next_hops).unwrap();

    assert!(matches!(
        result.path(0, 2),
        Err(Error::InternalInconsistency { from: 0, to: 2, .. })
    ));
}

#[test]
fn test_dangling_next_hop_is_reported() {
    let distances = Matrix::filled(3, Distance::Finite(0i64));
    let next_hops = Matrix::from_fn(3, |i, j| match (i, j) {
        (0, 2) => Some(1),
        _ => None,
    });
    let result = AllPairsResult::new(distances, next_hops).unwrap();

    assert!(matches!(result.path(0, 2), Err(Error::InternalInconsistency { .. })));
}

#[test]
fn test_mismatched_result_matrices() {
    let distances = Matrix::filled(2, Distance::Finite(0i64));
    let next_hops = Matrix::filled(3, None);

    assert!(matches!(
        AllPairsResult::new(distances, next_hops),
        Err(Error::InvalidShape(_))
    ));
}

#[test]
fn test_labelled_route() {
    let mut builder = GraphBuilder::new();
    builder
        .add_edge("A", "B", 5)
        .unwrap()
        .add_edge("B", "C", 5)
        .unwrap()
        .add_edge("A", "C", 20)
        .unwrap();
    builder.add_node("D");
    let graph = builder.build().unwrap();
    let result = FloydWarshall::new().solve(graph.adjacency()).unwrap();

    assert_eq!(graph.route(&result, "A", "C").unwrap(), vec!["A", "B", "C"]);
    assert_eq!(graph.distance(&result, "A", "C").unwrap(), Distance::Finite(10));
    assert!(graph.route(&result, "A", "D").unwrap().is_empty());
    assert_eq!(graph.route(&result, "D", "D").unwrap(), vec!["D"]);
    assert_eq!(
        graph.route(&result, "A", "Z"),
        Err(Error::UnknownLabel("Z".to_string()))
    );
}
