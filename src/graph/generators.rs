use crate::graph::{MutableGraph, NodeId, WeightedGraph};
use rand::prelude::*;

/// Edges of the built-in sample graph, used when no saved graph is available
pub const DEFAULT_EDGES: [(&str, &str, f64); 9] = [
    ("A", "B", 4.0),
    ("A", "C", 2.0),
    ("B", "C", 1.0),
    ("B", "D", 5.0),
    ("C", "D", 8.0),
    ("C", "E", 10.0),
    ("D", "E", 2.0),
    ("D", "F", 6.0),
    ("E", "F", 2.0),
];

/// Builds the six-node sample graph A..F
pub fn default_graph() -> WeightedGraph {
    from_edges(&DEFAULT_EDGES)
}

/// Builds a graph from `(a, b, weight)` triples.
///
/// Panics on an invalid triple; meant for literals and generated data.
pub fn from_edges(edges: &[(&str, &str, f64)]) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for &(a, b, weight) in edges {
        graph
            .add_edge(NodeId::new(a), NodeId::new(b), weight)
            .unwrap_or_else(|e| panic!("invalid edge {}-{}: {}", a, b, e));
    }
    graph
}

/// Spreadsheet-style label for an index: 0 -> "A", 25 -> "Z", 26 -> "AA"
pub fn label(index: usize) -> NodeId {
    let mut n = index + 1;
    let mut chars = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        chars.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    NodeId::new(chars.into_iter().rev().collect::<String>())
}

/// Generates a random graph where each pair of nodes is joined with the given
/// probability. The result may be disconnected; nodes that end up with no
/// edge are not part of the graph.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_probability: f64,
    max_weight: f64,
    rng: &mut R,
) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(edge_probability) {
                let weight = rng.gen_range(1.0..=max_weight).round();
                // i != j and weight >= 1, so insertion cannot fail
                let _ = graph.add_edge(label(i), label(j), weight);
            }
        }
    }
    graph
}

/// Generates a connected graph: a random spanning tree over `n` nodes plus
/// `extra_edges` random chords. Weights are drawn from `1.0..100.0`.
pub fn generate_connected<R: Rng>(n: usize, extra_edges: usize, rng: &mut R) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    if n < 2 {
        return graph;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    for i in 1..n {
        let parent = order[rng.gen_range(0..i)];
        let weight = rng.gen_range(1.0..100.0);
        // distinct labels and weight >= 1, so insertion cannot fail
        let _ = graph.add_edge(label(order[i]), label(parent), weight);
    }

    for _ in 0..extra_edges {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a != b {
            let weight = rng.gen_range(1.0..100.0);
            // a != b and weight >= 1; an existing pair is simply reweighted
            let _ = graph.add_edge(label(a), label(b), weight);
        }
    }

    graph
}

/// Generates a `width` x `height` grid with 4-connectivity and unit weights.
/// Nodes are labelled `R{row}C{col}`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph {
    let mut graph = WeightedGraph::new();
    let cell = |r: usize, c: usize| NodeId::new(format!("R{}C{}", r, c));

    for r in 0..height {
        for c in 0..width {
            // neighbouring cells are distinct and unit weight is valid
            if c + 1 < width {
                let _ = graph.add_edge(cell(r, c), cell(r, c + 1), 1.0);
            }
            if r + 1 < height {
                let _ = graph.add_edge(cell(r, c), cell(r + 1, c), 1.0);
            }
        }
    }

    graph
}
