use crate::graph::node::NodeId;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::debug;
use num_traits::Float;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt::Debug;

/// Flat `node -> {neighbor -> weight}` mapping, the shape used for persistence
pub type Adjacency<W> = BTreeMap<NodeId, BTreeMap<NodeId, W>>;

/// An undirected weighted graph stored as a symmetric adjacency mapping.
///
/// Every edge is kept in both directions with the same weight. Nodes are
/// created by [`MutableGraph::add_edge`] and are never removed; a node whose
/// last edge was removed stays with an empty neighbor map.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Adjacency<W>", bound(deserialize = "W: Deserialize<'de>"))]
pub struct WeightedGraph<W = f64>
where
    W: Float + Debug,
{
    /// node -> (neighbor -> weight), mirrored for every edge
    adjacency: Adjacency<W>,
}

impl<W> WeightedGraph<W>
where
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            adjacency: BTreeMap::new(),
        }
    }

    /// Builds a graph from a flat adjacency mapping, checking that every edge
    /// is mirrored with the same weight and that weights are valid.
    pub fn from_adjacency(adjacency: Adjacency<W>) -> Result<Self> {
        for (node, neighbors) in &adjacency {
            for (neighbor, &weight) in neighbors {
                validate_edge(node, neighbor, weight)?;
                let mirrored = adjacency
                    .get(neighbor)
                    .and_then(|back| back.get(node))
                    .copied();
                if mirrored != Some(weight) {
                    return Err(Error::AsymmetricEdge(node.clone(), neighbor.clone()));
                }
            }
        }
        Ok(WeightedGraph { adjacency })
    }

    /// Read access to the underlying mapping
    pub fn adjacency(&self) -> &Adjacency<W> {
        &self.adjacency
    }

    /// Iterates every undirected edge exactly once as `(a, b, weight)` with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (&NodeId, &NodeId, W)> + '_ {
        self.adjacency.iter().flat_map(|(a, neighbors)| {
            neighbors
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, &weight)| (a, b, weight))
        })
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

impl<W> Default for WeightedGraph<W>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> TryFrom<Adjacency<W>> for WeightedGraph<W>
where
    W: Float + Debug,
{
    type Error = Error;

    fn try_from(adjacency: Adjacency<W>) -> Result<Self> {
        Self::from_adjacency(adjacency)
    }
}

impl<W> Serialize for WeightedGraph<W>
where
    W: Float + Debug + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.adjacency.serialize(serializer)
    }
}

fn validate_edge<W>(a: &NodeId, b: &NodeId, weight: W) -> Result<()>
where
    W: Float + Debug,
{
    if a == b {
        return Err(Error::SelfLoop(a.clone()));
    }
    if !(weight > W::zero() && weight.is_finite()) {
        return Err(Error::InvalidWeight(num_traits::cast(weight).unwrap_or(f64::NAN)));
    }
    Ok(())
}

impl<W> Graph<W> for WeightedGraph<W>
where
    W: Float + Debug,
{
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(|n| n.len()).sum::<usize>() / 2
    }

    fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &NodeId> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, node: &str) -> Result<&BTreeMap<NodeId, W>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| Error::NodeNotFound(NodeId::new(node)))
    }

    fn incident_edges(&self, node: &str) -> Box<dyn Iterator<Item = (&NodeId, W)> + '_> {
        match self.adjacency.get(node) {
            Some(neighbors) => Box::new(neighbors.iter().map(|(n, &w)| (n, w))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edge_weight(&self, a: &str, b: &str) -> Option<W> {
        self.adjacency.get(a).and_then(|n| n.get(b)).copied()
    }
}

impl<W> MutableGraph<W> for WeightedGraph<W>
where
    W: Float + Debug,
{
    fn add_edge(&mut self, a: NodeId, b: NodeId, weight: W) -> Result<Option<W>> {
        validate_edge(&a, &b, weight)?;

        debug!("add edge {} - {} ({:?})", a, b, weight);
        self.adjacency
            .entry(b.clone())
            .or_default()
            .insert(a.clone(), weight);
        let previous = self.adjacency.entry(a).or_default().insert(b, weight);
        Ok(previous)
    }

    fn remove_edge(&mut self, a: &str, b: &str) -> Result<W> {
        let weight = self
            .adjacency
            .get_mut(a)
            .and_then(|neighbors| neighbors.remove(b))
            .ok_or_else(|| Error::EdgeNotFound(NodeId::new(a), NodeId::new(b)))?;

        if let Some(neighbors) = self.adjacency.get_mut(b) {
            neighbors.remove(a);
        }
        debug!("removed edge {} - {}", a, b);
        Ok(weight)
    }
}
