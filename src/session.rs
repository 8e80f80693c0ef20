//! Interactive editing and routing on top of the core graph.
//!
//! A [`RouteSession`] owns the graph and the store it is persisted to.
//! All methods take raw user input and validate it before touching the graph.
//! A label typed exactly as it is stored is used as is; any other label is
//! normalized with [`NodeId::parse`], so `a` finds node `A` while a loaded
//! graph with lower-case labels stays reachable.

use log::{debug, info};
use std::collections::BTreeMap;
use std::fmt;

use crate::algorithm::{Dijkstra, Route, RouteLeg, ShortestPathAlgorithm};
use crate::graph::{Graph, MutableGraph, NodeId, WeightedGraph};
use crate::storage::{load_or_default, GraphStore};
use crate::view::GraphView;
use crate::{Error, Result};

/// Outcome of a route request
#[derive(Debug, Clone, PartialEq)]
pub enum RouteReport {
    Found { route: Route, legs: Vec<RouteLeg> },
    NoPath { start: NodeId, end: NodeId },
    UnknownNode(NodeId),
}

impl RouteReport {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteReport::Found { route, .. } => Some(route),
            _ => None,
        }
    }

    /// Path to highlight when drawing; empty unless a route was found
    pub fn path(&self) -> &[NodeId] {
        self.route().map(|r| r.path.as_slice()).unwrap_or(&[])
    }

    /// Short machine-readable status
    pub fn status(&self) -> &'static str {
        match self {
            RouteReport::Found { .. } => "found",
            RouteReport::NoPath { .. } => "no_path",
            RouteReport::UnknownNode(_) => "unknown_node",
        }
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteReport::Found { route, legs } => {
                let start = route.path.first().map(NodeId::as_str).unwrap_or_default();
                let end = route.path.last().map(NodeId::as_str).unwrap_or_default();
                let joined: Vec<&str> = route.path.iter().map(NodeId::as_str).collect();
                writeln!(f, "Shortest path from {} to {}:", start, end)?;
                writeln!(f, "Path: {}", joined.join(" -> "))?;
                writeln!(f, "Distance: {} units", route.total_weight)?;
                writeln!(f)?;
                writeln!(f, "Path Details:")?;
                for leg in legs {
                    writeln!(
                        f,
                        "{} -> {}: {} units (Total: {})",
                        leg.from, leg.to, leg.weight, leg.running_total
                    )?;
                }
                Ok(())
            }
            RouteReport::NoPath { start, end } => {
                write!(f, "No path found from {} to {}", start, end)
            }
            RouteReport::UnknownNode(node) => {
                write!(f, "Node {} does not exist in the graph", node)
            }
        }
    }
}

/// A successful edge edit, for status messages
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeEdit {
    Added {
        a: NodeId,
        b: NodeId,
        weight: f64,
        previous: Option<f64>,
    },
    Removed {
        a: NodeId,
        b: NodeId,
        weight: f64,
    },
}

impl fmt::Display for EdgeEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdgeEdit::Added {
                a,
                b,
                weight,
                previous: None,
            } => write!(f, "Added edge {}-{} with weight {}", a, b, weight),
            EdgeEdit::Added {
                a,
                b,
                weight,
                previous: Some(old),
            } => write!(f, "Updated edge {}-{} from weight {} to {}", a, b, old, weight),
            EdgeEdit::Removed { a, b, .. } => write!(f, "Removed edge {}-{}", a, b),
        }
    }
}

/// Parses a weight typed by a user. Sign and range are checked by the graph.
pub fn parse_weight(raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidWeightInput(raw.to_string()))
}

/// Owns the graph being edited and the store it is saved to
#[derive(Debug)]
pub struct RouteSession {
    graph: WeightedGraph,
    store: Box<dyn GraphStore>,
    finder: Dijkstra,
}

impl RouteSession {
    /// Starts a session from whatever `store` holds, or the default graph
    pub fn open(store: Box<dyn GraphStore>) -> Self {
        let graph = load_or_default(store.as_ref());
        info!(
            "session opened with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Self::with_graph(graph, store)
    }

    pub fn with_graph(graph: WeightedGraph, store: Box<dyn GraphStore>) -> Self {
        RouteSession {
            graph,
            store,
            finder: Dijkstra::new(),
        }
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// All node labels, sorted
    pub fn nodes(&self) -> Vec<NodeId> {
        self.graph.nodes().cloned().collect()
    }

    fn resolve(&self, raw: &str) -> Result<NodeId> {
        let label = raw.trim();
        if label.is_empty() {
            return Err(Error::EmptyNodeName);
        }
        if self.graph.contains(label) {
            return Ok(NodeId::new(label));
        }
        NodeId::parse(label)
    }

    pub fn neighbors(&self, raw: &str) -> Result<&BTreeMap<NodeId, f64>> {
        let node = self.resolve(raw)?;
        self.graph.neighbors(node.as_str())
    }

    pub fn add_edge(&mut self, raw_a: &str, raw_b: &str, raw_weight: &str) -> Result<EdgeEdit> {
        let a = self.resolve(raw_a)?;
        let b = self.resolve(raw_b)?;
        let weight = parse_weight(raw_weight)?;

        let previous = self.graph.add_edge(a.clone(), b.clone(), weight)?;
        Ok(EdgeEdit::Added {
            a,
            b,
            weight,
            previous,
        })
    }

    /// Removes an edge. Unlike [`MutableGraph::remove_edge`], unknown
    /// endpoints are reported as [`Error::NodeNotFound`].
    pub fn remove_edge(&mut self, raw_a: &str, raw_b: &str) -> Result<EdgeEdit> {
        let a = self.resolve(raw_a)?;
        let b = self.resolve(raw_b)?;
        for node in [&a, &b] {
            if !self.graph.contains(node.as_str()) {
                return Err(Error::NodeNotFound(node.clone()));
            }
        }

        let weight = self.graph.remove_edge(a.as_str(), b.as_str())?;
        Ok(EdgeEdit::Removed { a, b, weight })
    }

    /// Finds the cheapest route, telling unknown nodes apart from
    /// unreachable ones.
    pub fn find_route(&self, raw_start: &str, raw_end: &str) -> Result<RouteReport> {
        let start = self.resolve(raw_start)?;
        let end = self.resolve(raw_end)?;
        for node in [&start, &end] {
            if !self.graph.contains(node.as_str()) {
                return Ok(RouteReport::UnknownNode(node.clone()));
            }
        }

        let route: Route = self.finder.find(&self.graph, start.as_str(), end.as_str());
        if !route.is_found() {
            return Ok(RouteReport::NoPath { start, end });
        }

        let legs = route.legs(&self.graph).unwrap_or_default();
        debug!(
            "{} found {} -> {} in {} hops",
            ShortestPathAlgorithm::<f64, WeightedGraph>::name(&self.finder),
            start,
            end,
            route.hops()
        );
        Ok(RouteReport::Found { route, legs })
    }

    /// Snapshot for drawing, optionally highlighting a path
    pub fn view(&self, highlight: Option<&[NodeId]>) -> GraphView {
        GraphView::render(&self.graph, highlight)
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.graph)
    }
}
