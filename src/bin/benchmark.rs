use std::time::{Duration, Instant};

use floyd_warshall::algorithm::{dijkstra::Dijkstra, floyd_warshall::FloydWarshall, AllPairsShortestPaths};
use floyd_warshall::graph::generators::generate_random_graph;
use floyd_warshall::graph::AdjacencyMatrix;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    adjacency: &AdjacencyMatrix<i64>,
) -> Result<Duration, floyd_warshall::Error>
where
    A: AllPairsShortestPaths<i64>,
{
    println!("Running {} on graph with {} nodes...", name, adjacency.size());

    let start = Instant::now();
    let result = algorithm.solve(adjacency)?;
    let duration = start.elapsed();

    let reachable = result
        .distances()
        .rows()
        .flatten()
        .filter(|d| d.is_finite())
        .count();
    println!("  - Found {} reachable pairs in {:?}", reachable, duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Cubic cost keeps this in the interactive range
    let graph_sizes = vec![16, 64, 128, 256, 512];
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Floyd-Warshall vs repeated Dijkstra");
    println!("=====================================================");

    let sequential = FloydWarshall::new();
    let parallel = FloydWarshall::new().with_parallel(true);
    let dijkstra = Dijkstra::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        let out_degree = (size / 8).max(1);
        println!("\nGenerating random graph with {} nodes, out-degree {}...", size, out_degree);
        let graph = generate_random_graph(size, out_degree, 1..=100, &mut rng)?;
        let adjacency = graph.adjacency();

        let sequential_time = benchmark_algorithm("Floyd-Warshall", &sequential, adjacency)?;
        let parallel_time = benchmark_algorithm("Floyd-Warshall (parallel)", &parallel, adjacency)?;
        let dijkstra_time = benchmark_algorithm("Dijkstra (all sources)", &dijkstra, adjacency)?;

        results.push((size, sequential_time, parallel_time, dijkstra_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<8} | {:<12} | {:<12} | {:<12}",
        "Nodes", "FW (ms)", "FW-par (ms)", "Dijkstra (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, sequential_time, parallel_time, dijkstra_time) in &results {
        println!(
            "{:<8} | {:<12.2} | {:<12.2} | {:<12.2}",
            size,
            sequential_time.as_secs_f64() * 1000.0,
            parallel_time.as_secs_f64() * 1000.0,
            dijkstra_time.as_secs_f64() * 1000.0
        );
    }

    Ok(())
}
