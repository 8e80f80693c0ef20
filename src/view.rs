//! Render-ready snapshot of a graph for drawing front ends.

use serde::Serialize;
use std::collections::HashSet;

use crate::graph::{Graph, NodeId, WeightedGraph};

/// A node as a front end draws it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewNode {
    pub id: NodeId,
    pub degree: usize,
    #[serde(default)]
    pub is_path: bool,
}

/// An undirected edge, listed once
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewEdge {
    pub source: NodeId,
    pub target: NodeId,
    pub weight: f64,
    #[serde(default)]
    pub is_path: bool,
}

/// Nodes and links of a graph, with an optional route highlighted
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<ViewNode>,
    pub links: Vec<ViewEdge>,
}

impl GraphView {
    /// Builds the view. Edges between consecutive nodes of `highlight` are
    /// flagged; an absent, empty or single-node path flags no edge.
    pub fn render(graph: &WeightedGraph, highlight: Option<&[NodeId]>) -> Self {
        let path = highlight.unwrap_or(&[]);
        let path_edges: HashSet<(&str, &str)> = path
            .windows(2)
            .flat_map(|pair| {
                let (a, b) = (pair[0].as_str(), pair[1].as_str());
                [(a, b), (b, a)]
            })
            .collect();
        let path_nodes: HashSet<&str> = if path.len() > 1 {
            path.iter().map(|n| n.as_str()).collect()
        } else {
            HashSet::new()
        };

        let nodes = graph
            .nodes()
            .map(|id| ViewNode {
                id: id.clone(),
                degree: graph.incident_edges(id.as_str()).count(),
                is_path: path_nodes.contains(id.as_str()),
            })
            .collect();

        let links = graph
            .edges()
            .map(|(a, b, weight)| ViewEdge {
                source: a.clone(),
                target: b.clone(),
                weight,
                is_path: path_edges.contains(&(a.as_str(), b.as_str())),
            })
            .collect();

        GraphView { nodes, links }
    }

    pub fn path_links(&self) -> impl Iterator<Item = &ViewEdge> {
        self.links.iter().filter(|l| l.is_path)
    }
}
