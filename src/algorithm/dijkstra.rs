use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;

use crate::algorithm::{Route, ShortestPathAlgorithm};
use crate::data_structures::Frontier;
use crate::graph::{Graph, NodeId};

/// Classic Dijkstra's algorithm with a lazily-pruned binary heap frontier.
///
/// Stateless: each call reads the graph through a shared reference and
/// stops as soon as the target is settled.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find(&self, graph: &G, start: &str, end: &str) -> Route<W> {
        if !graph.contains(start) || !graph.contains(end) {
            debug!("route {} -> {}: unknown endpoint", start, end);
            return Route::no_path();
        }

        let mut distances: HashMap<&str, W> = graph
            .nodes()
            .map(|node| (node.as_str(), W::infinity()))
            .collect();
        let mut parents: HashMap<&str, &str> = HashMap::new();
        let mut visited: HashSet<&str> = HashSet::new();

        distances.insert(start, W::zero());
        let mut frontier = Frontier::seeded(start, OrderedFloat(W::zero()));

        while let Some((node, OrderedFloat(dist))) = frontier.pop() {
            // Stale entry for a node settled through a shorter path
            if !visited.insert(node) {
                continue;
            }

            if node == end {
                break;
            }

            for (neighbor, weight) in graph.incident_edges(node) {
                let neighbor = neighbor.as_str();
                if visited.contains(neighbor) {
                    continue;
                }

                let candidate = dist + weight;
                let current = distances.get(neighbor).copied().unwrap_or_else(W::infinity);
                if candidate < current {
                    distances.insert(neighbor, candidate);
                    parents.insert(neighbor, node);
                    frontier.push(neighbor, OrderedFloat(candidate));
                }
            }
        }

        let total_weight = distances.get(end).copied().unwrap_or_else(W::infinity);
        if !total_weight.is_finite() {
            debug!("route {} -> {}: unreachable", start, end);
            return Route::no_path();
        }

        let mut path = vec![NodeId::new(end)];
        let mut step = end;
        while let Some(&parent) = parents.get(step) {
            path.push(NodeId::new(parent));
            step = parent;
        }
        path.reverse();

        debug!(
            "route {} -> {}: {:?} over {} hops, {} frontier entries left",
            start,
            end,
            total_weight,
            path.len() - 1,
            frontier.pending()
        );
        Route { total_weight, path }
    }
}
