use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use route_finder::graph::generators::{generate_connected, label};
use route_finder::graph::Graph;
use route_finder::{Dijkstra, Route, ShortestPathAlgorithm, WeightedGraph};
use std::time::{Duration, Instant};

// Runs `queries` random routes and returns the mean time per query
fn benchmark_queries(graph: &WeightedGraph, queries: usize, rng: &mut StdRng) -> (Duration, usize) {
    let dijkstra = Dijkstra::new();
    let n = graph.node_count();
    let mut found = 0;

    let start = Instant::now();
    for _ in 0..queries {
        let a = label(rng.gen_range(0..n));
        let b = label(rng.gen_range(0..n));
        let route: Route = dijkstra.find(graph, a.as_str(), b.as_str());
        if route.is_found() {
            found += 1;
        }
    }
    (start.elapsed() / queries as u32, found)
}

fn main() {
    env_logger::init();

    let graph_sizes = [10, 100, 1_000, 10_000, 50_000];
    let edge_factor = 2;
    let queries = 200;
    let mut rng = StdRng::seed_from_u64(42);

    println!("=====================================================");
    println!("Benchmark: Dijkstra single-pair routes");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        let graph = generate_connected(size, size * (edge_factor - 1), &mut rng);
        println!(
            "\nGraph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );

        let (mean, found) = benchmark_queries(&graph, queries, &mut rng);
        println!("  - {}/{} routes found, {:?} per query", found, queries, mean);
        results.push((size, graph.edge_count(), mean));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<10} | {:<15}", "Nodes", "Edges", "Per query (us)");
    println!("-----------------------------------------------------");
    for (size, edges, mean) in &results {
        println!("{:<10} | {:<10} | {:<15.1}", size, edges, mean.as_secs_f64() * 1e6);
    }
}
