use serde::{Deserialize, Serialize};

use crate::algorithm::RouteLeg;
use crate::graph::NodeId;
use crate::session::RouteReport;
use crate::view::GraphView;

/// Weight as sent by a form: either a JSON number or the raw text field
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WeightInput {
    Number(f64),
    Text(String),
}

impl WeightInput {
    pub fn as_raw(&self) -> String {
        match self {
            WeightInput::Number(w) => w.to_string(),
            WeightInput::Text(s) => s.clone(),
        }
    }
}

/// Parameters for adding or overwriting an edge
#[derive(Debug, Deserialize)]
pub struct AddEdgeRequest {
    pub a: String,
    pub b: String,
    pub weight: WeightInput,
}

/// Parameters for removing an edge
#[derive(Debug, Deserialize)]
pub struct RemoveEdgeRequest {
    pub a: String,
    pub b: String,
}

/// Parameters for a route query
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    pub start: String,
    pub end: String,
}

/// Result of an edge edit
#[derive(Debug, Serialize)]
pub struct EdgeResponse {
    pub message: String,
    pub graph: GraphView,
}

/// Result of a route query
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// `found`, `no_path` or `unknown_node`
    pub status: String,
    pub path: Vec<NodeId>,
    /// Total weight; `null` unless a route was found
    pub distance: Option<f64>,
    pub legs: Vec<RouteLeg>,
    pub message: String,
    pub graph: GraphView,
}

impl RouteResponse {
    pub fn new(report: &RouteReport, graph: GraphView) -> Self {
        let (distance, legs) = match report {
            RouteReport::Found { route, legs } => (Some(route.total_weight), legs.clone()),
            _ => (None, Vec::new()),
        };
        RouteResponse {
            status: report.status().to_string(),
            path: report.path().to_vec(),
            distance,
            legs,
            message: report.to_string(),
            graph,
        }
    }
}

/// Result of a save request
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub saved: bool,
    pub nodes: usize,
    pub edges: usize,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
