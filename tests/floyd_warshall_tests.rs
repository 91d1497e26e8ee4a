use floyd_warshall::algorithm::floyd_warshall::FloydWarshall;
use floyd_warshall::algorithm::AllPairsShortestPaths;
use floyd_warshall::graph::generators::generate_random_graph;
use floyd_warshall::graph::{AdjacencyMatrix, Distance};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const A: usize = 0;
const B: usize = 1;
const C: usize = 2;

// Random graph with some unreachable pairs, built straight from an edge list
fn random_adjacency(rng: &mut StdRng, n: usize, density: f64) -> AdjacencyMatrix<i64> {
    let mut edges = Vec::new();
    for i in 0..n {
        for j in 0..n {
            if i != j && rng.gen_bool(density) {
                edges.push((i, j, rng.gen_range(1..=50)));
            }
        }
    }
    AdjacencyMatrix::from_edges(n, edges).unwrap()
}

#[test]
fn test_three_node_detour_is_shorter() {
    let adjacency = AdjacencyMatrix::from_edges(3, [(A, B, 5), (B, C, 5), (A, C, 20)]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    assert_eq!(result.distance(A, C).unwrap(), Distance::Finite(10));
    assert_eq!(result.path(A, C).unwrap(), vec![A, B, C]);
    assert_eq!(result.next_hop(A, C).unwrap(), Some(B));
}

#[test]
fn test_disconnected_components() {
    // {0, 1} and {2, 3} with no edges between them
    let adjacency = AdjacencyMatrix::from_edges(4, [(0, 1, 3), (1, 0, 3), (2, 3, 1), (3, 2, 1)]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    for i in [0, 1] {
        for j in [2, 3] {
            assert_eq!(result.distance(i, j).unwrap(), Distance::Unreachable);
            assert_eq!(result.distance(j, i).unwrap(), Distance::Unreachable);
            assert!(result.path(i, j).unwrap().is_empty());
            assert_eq!(result.next_hop(i, j).unwrap(), None);
        }
    }
    assert_eq!(result.distance(0, 1).unwrap(), Distance::Finite(3));
}

#[test]
fn test_single_node() {
    let adjacency = AdjacencyMatrix::from_options(vec![vec![Some(0)]]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    assert_eq!(result.node_count(), 1);
    assert_eq!(result.distance(0, 0).unwrap(), Distance::Finite(0));
    assert_eq!(result.path(0, 0).unwrap(), vec![0]);
}

#[test]
fn test_source_equals_destination_returns_single_node() {
    // Node 2 is isolated, its own route still exists
    let adjacency = AdjacencyMatrix::from_edges(3, [(0, 1, 7)]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    for i in 0..3 {
        assert_eq!(result.next_hop(i, i).unwrap(), None);
        assert_eq!(result.path(i, i).unwrap(), vec![i]);
    }
}

#[test]
fn test_float_weights_without_infinity() {
    let adjacency = AdjacencyMatrix::from_options(vec![
        vec![Some(0.0), Some(1.5), None],
        vec![None, Some(0.0), Some(2.25)],
        vec![Some(0.5), None, Some(0.0)],
    ])
    .unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    assert_eq!(result.distance(0, 2).unwrap(), Distance::Finite(3.75));
    assert_eq!(result.distance(2, 1).unwrap(), Distance::Finite(2.0));
    assert_eq!(result.path(2, 1).unwrap(), vec![2, 0, 1]);
}

#[test]
fn test_negative_edges_without_negative_cycle() {
    let adjacency = AdjacencyMatrix::from_edges(3, [(0, 1, 4), (0, 2, 1), (2, 1, -2)]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    assert_eq!(result.distance(0, 1).unwrap(), Distance::Finite(-1));
    assert_eq!(result.path(0, 1).unwrap(), vec![0, 2, 1]);
    assert!(result.negative_cycle_nodes().is_empty());
}

#[test]
fn test_negative_cycle_shows_on_diagonal() {
    let adjacency = AdjacencyMatrix::from_edges(3, [(0, 1, 1), (1, 0, -3), (1, 2, 1)]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    let nodes = result.negative_cycle_nodes();
    assert!(nodes.contains(&0));
    assert!(nodes.contains(&1));
    assert!(!nodes.contains(&2));
}

#[test]
fn test_ties_keep_first_route() {
    // 0 -> 3 has two routes of length 2; only strictly shorter routes replace
    // the one found through the lower intermediate node
    let adjacency = AdjacencyMatrix::from_edges(4, [(0, 1, 1), (1, 3, 1), (0, 2, 1), (2, 3, 1)]).unwrap();
    let result = FloydWarshall::new().solve(&adjacency).unwrap();

    assert_eq!(result.distance(0, 3).unwrap(), Distance::Finite(2));
    assert_eq!(result.path(0, 3).unwrap(), vec![0, 1, 3]);
}

#[test]
fn test_properties_on_random_graphs() {
    let mut rng = StdRng::seed_from_u64(2024);

    for _ in 0..20 {
        let n = rng.gen_range(1..=12);
        let adjacency = random_adjacency(&mut rng, n, 0.25);
        let result = FloydWarshall::new().solve(&adjacency).unwrap();

        for i in 0..n {
            assert_eq!(result.distance(i, i).unwrap(), Distance::Finite(0), "diagonal identity");
        }

        for i in 0..n {
            for j in 0..n {
                let dist = result.distance(i, j).unwrap();

                // Never worse than the direct edge
                assert!(!adjacency.get(i, j).unwrap().is_shorter_than(&dist));

                for k in 0..n {
                    let via = result.distance(i, k).unwrap().extend(result.distance(k, j).unwrap());
                    assert!(!via.is_shorter_than(&dist), "triangle inequality {} {} {}", i, k, j);
                }

                if i != j {
                    assert_eq!(
                        result.next_hop(i, j).unwrap().is_none(),
                        dist.is_unreachable(),
                        "next-hop and distance disagree on reachability for {} -> {}",
                        i,
                        j
                    );
                }

                let path = result.path(i, j).unwrap();
                if dist.is_finite() {
                    assert_eq!(path.first(), Some(&i));
                    assert_eq!(path.last(), Some(&j));
                    assert!(path.len() <= n);
                    assert_eq!(adjacency.route_weight(&path).unwrap(), dist);
                } else {
                    assert!(path.is_empty());
                }
            }
        }
    }
}

#[test]
fn test_repeated_solves_are_identical() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = generate_random_graph(18, 6, 40..=80, &mut rng).unwrap();

    let first = FloydWarshall::new().solve(graph.adjacency()).unwrap();
    let second = FloydWarshall::new().solve(graph.adjacency()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_parallel_matches_sequential() {
    let mut rng = StdRng::seed_from_u64(5);

    for n in [1, 2, 7, 33, 64] {
        let adjacency = random_adjacency(&mut rng, n, 0.1);
        let sequential = FloydWarshall::new().solve(&adjacency).unwrap();
        let parallel = FloydWarshall::new().with_parallel(true).solve(&adjacency).unwrap();

        assert_eq!(sequential.distances(), parallel.distances());
        assert_eq!(sequential.next_hops(), parallel.next_hops());
    }
}

#[test]
fn test_solve_leaves_input_untouched() {
    let adjacency = AdjacencyMatrix::from_edges(3, [(A, B, 5), (B, C, 5), (A, C, 20)]).unwrap();
    let before = adjacency.clone();
    let _ = FloydWarshall::new().solve(&adjacency).unwrap();

    assert_eq!(adjacency, before);
    assert_eq!(adjacency.get(A, C).unwrap(), Distance::Finite(20));
}
