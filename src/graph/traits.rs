use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::graph::node::NodeId;
use crate::Result;

/// Trait representing a weighted undirected graph keyed by node labels
pub trait Graph<W>: Debug
where
    W: Float + Debug,
{
    /// Returns the number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Returns the number of undirected edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the node exists in the graph
    fn contains(&self, node: &str) -> bool;

    /// Returns an iterator over all node identifiers
    fn nodes(&self) -> Box<dyn Iterator<Item = &NodeId> + '_>;

    /// Returns the neighbor -> weight mapping of a node
    fn neighbors(&self, node: &str) -> Result<&BTreeMap<NodeId, W>>;

    /// Returns an iterator over the edges incident to a node.
    /// Unknown nodes yield an empty iterator.
    fn incident_edges(&self, node: &str) -> Box<dyn Iterator<Item = (&NodeId, W)> + '_>;

    /// Gets the weight of an edge if it exists
    fn edge_weight(&self, a: &str, b: &str) -> Option<W>;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edge_weight(a, b).is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<W>: Graph<W>
where
    W: Float + Debug,
{
    /// Inserts or overwrites the edge between `a` and `b` in both directions,
    /// creating either endpoint if absent. Returns the previous weight.
    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<Option<W>>;

    /// Deletes the edge between `a` and `b` in both directions and returns its weight.
    /// The endpoints stay in the graph even if they become isolated.
    fn remove_edge(&mut self, a: &str, b: &str) -> Result<W>;
}
