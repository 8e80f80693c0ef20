use rand::rngs::StdRng;
use rand::SeedableRng;
use route_finder::graph::generators::{
    default_graph, from_edges, generate_grid, generate_random, label,
};
use route_finder::graph::{Graph, MutableGraph, NodeId, WeightedGraph};
use route_finder::{Dijkstra, Route, ShortestPathAlgorithm};
use std::collections::HashSet;

fn find(graph: &WeightedGraph, start: &str, end: &str) -> Route {
    Dijkstra::new().find(graph, start, end)
}

// Minimum total weight over every simple path, by exhaustive search
fn brute_force_distance(graph: &WeightedGraph, start: &str, end: &str) -> Option<f64> {
    fn walk<'a>(
        graph: &'a WeightedGraph,
        node: &'a str,
        end: &str,
        so_far: f64,
        seen: &mut HashSet<&'a str>,
        best: &mut Option<f64>,
    ) {
        if node == end {
            *best = Some(best.map_or(so_far, |b| b.min(so_far)));
            return;
        }
        for (next, weight) in graph.incident_edges(node) {
            if seen.insert(next.as_str()) {
                walk(graph, next.as_str(), end, so_far + weight, seen, best);
                seen.remove(next.as_str());
            }
        }
    }

    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }
    let mut seen = HashSet::from([start]);
    let mut best = None;
    walk(graph, start, end, 0.0, &mut seen, &mut best);
    best
}

// A route is valid if it is a simple walk along existing edges whose weights
// add up to the reported total
fn assert_valid_route(graph: &WeightedGraph, route: &Route, start: &str, end: &str) {
    assert_eq!(
        route.path.first().map(NodeId::as_str),
        Some(start),
        "route should start at {}",
        start
    );
    assert_eq!(route.path.last().map(NodeId::as_str), Some(end), "route should end at {}", end);

    let distinct: HashSet<&NodeId> = route.path.iter().collect();
    assert_eq!(distinct.len(), route.path.len(), "route should not revisit nodes");

    let sum: f64 = route
        .path
        .windows(2)
        .map(|pair| {
            graph
                .edge_weight(pair[0].as_str(), pair[1].as_str())
                .expect("route should only use existing edges")
        })
        .sum();
    assert_eq!(sum, route.total_weight);
}

#[test]
fn test_sample_graph_route() {
    let graph = default_graph();
    let route = find(&graph, "A", "F");

    assert_eq!(route.total_weight, 12.0);
    assert_eq!(brute_force_distance(&graph, "A", "F"), Some(12.0));
    assert_valid_route(&graph, &route, "A", "F");
}

#[test]
fn test_sample_graph_all_pairs_match_exhaustive_search() {
    let graph = default_graph();
    for a in graph.nodes() {
        for b in graph.nodes() {
            let route = find(&graph, a.as_str(), b.as_str());
            assert_eq!(
                Some(route.total_weight),
                brute_force_distance(&graph, a.as_str(), b.as_str()),
                "distance {} -> {}",
                a,
                b
            );
            assert_valid_route(&graph, &route, a.as_str(), b.as_str());
        }
    }
}

#[test]
fn test_random_graphs_match_exhaustive_search() {
    for seed in 0..60 {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = generate_random(8, 0.35, 9.0, &mut rng);

        for i in 0..8 {
            for j in 0..8 {
                let (a, b) = (label(i), label(j));
                let route = find(&graph, a.as_str(), b.as_str());
                match brute_force_distance(&graph, a.as_str(), b.as_str()) {
                    Some(expected) => {
                        assert_eq!(route.total_weight, expected, "seed {} {} -> {}", seed, a, b);
                        assert_valid_route(&graph, &route, a.as_str(), b.as_str());
                    }
                    None => assert_eq!(route, Route::no_path(), "seed {} {} -> {}", seed, a, b),
                }
            }
        }
    }
}

#[test]
fn test_reflexive_route_for_every_node() {
    let graph = default_graph();
    for node in graph.nodes() {
        let route = find(&graph, node.as_str(), node.as_str());
        assert_eq!(route.total_weight, 0.0);
        assert_eq!(route.path, vec![node.clone()]);
    }
}

#[test]
fn test_unknown_node_equals_disconnection() {
    let graph = from_edges(&[("A", "B", 1.0), ("C", "D", 2.0)]);
    let disconnected = find(&graph, "A", "C");
    let unknown = find(&graph, "A", "NOPE");

    assert_eq!(disconnected, Route::no_path());
    assert_eq!(unknown, disconnected);
    assert!(disconnected.total_weight.is_infinite());
}

#[test]
fn test_isolated_node_after_removal_is_unreachable() {
    let mut graph = default_graph();
    graph.remove_edge("D", "F").unwrap();
    graph.remove_edge("E", "F").unwrap();

    assert!(graph.contains("F"));
    assert_eq!(find(&graph, "A", "F"), Route::no_path());
    assert_eq!(find(&graph, "F", "F").total_weight, 0.0);
}

#[test]
fn test_route_follows_edits() {
    let mut graph = default_graph();
    graph.add_edge(NodeId::new("A"), NodeId::new("F"), 3.0).unwrap();
    assert_eq!(find(&graph, "A", "F").path, vec![NodeId::new("A"), NodeId::new("F")]);

    graph.add_edge(NodeId::new("A"), NodeId::new("F"), 30.0).unwrap();
    assert_eq!(find(&graph, "A", "F").total_weight, 12.0);
}

#[test]
fn test_grid_route_length() {
    let graph = generate_grid(10, 10);
    let route = find(&graph, "R0C0", "R9C9");

    assert_eq!(route.total_weight, 18.0);
    assert_eq!(route.hops(), 18);
    assert_valid_route(&graph, &route, "R0C0", "R9C9");
}

#[test]
fn test_grid_route_around_wall() {
    let mut graph = generate_grid(10, 10);

    // Cut column 5 off from column 4 on rows 0..8, leaving a gap on row 9
    for r in 0..9 {
        graph
            .remove_edge(&format!("R{}C4", r), &format!("R{}C5", r))
            .unwrap();
    }

    let route = find(&graph, "R0C0", "R0C9");
    assert_eq!(route.total_weight, 9.0 + 9.0 + 9.0);
    assert_valid_route(&graph, &route, "R0C0", "R0C9");
}
