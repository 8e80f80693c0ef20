use num_traits::Float;
use serde::Serialize;
use std::fmt::Debug;

use crate::graph::{Graph, NodeId};

/// Result of a single-pair shortest path query.
///
/// A found route holds the nodes from start to end inclusive and the sum of
/// the traversed edge weights. The "no path" sentinel has an infinite total
/// weight and an empty path; it is returned both for unreachable targets and
/// for endpoints that are not in the graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route<W = f64>
where
    W: Float + Debug,
{
    pub total_weight: W,
    pub path: Vec<NodeId>,
}

/// One edge of a route with the distance accumulated so far
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg<W = f64>
where
    W: Float + Debug,
{
    pub from: NodeId,
    pub to: NodeId,
    pub weight: W,
    pub running_total: W,
}

impl<W> Route<W>
where
    W: Float + Debug,
{
    /// The sentinel "no path" result
    pub fn no_path() -> Self {
        Route {
            total_weight: W::infinity(),
            path: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        !self.path.is_empty() && self.total_weight.is_finite()
    }

    /// Number of edges traversed
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Breaks the route into its edges, looking each weight up in `graph`.
    /// Returns `None` if a consecutive pair is not an edge of `graph`, which
    /// happens when the graph was edited after the route was computed.
    pub fn legs<G: Graph<W>>(&self, graph: &G) -> Option<Vec<RouteLeg<W>>> {
        let mut running_total = W::zero();
        self.path
            .windows(2)
            .map(|pair| {
                let weight = graph.edge_weight(pair[0].as_str(), pair[1].as_str())?;
                running_total = running_total + weight;
                Some(RouteLeg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    weight,
                    running_total,
                })
            })
            .collect()
    }
}

/// Trait for single-pair shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Float + Debug,
    G: Graph<W>,
{
    /// Computes the cheapest route from `start` to `end`.
    ///
    /// Never fails: unknown or unreachable endpoints produce [`Route::no_path`].
    fn find(&self, graph: &G, start: &str, end: &str) -> Route<W>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
