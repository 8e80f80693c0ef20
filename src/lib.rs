//! Route Finder - shortest routes over a small, editable, weighted undirected graph
//!
//! The core is [`WeightedGraph`], which owns a symmetric `node -> {neighbor -> weight}`
//! adjacency mapping, and [`Dijkstra`], a stateless shortest-path finder that
//! reads the graph and returns a [`Route`].
//!
//! Around the core sit thin collaborators: JSON persistence ([`storage`]),
//! a render-ready view model ([`view`]), input validation and route reports
//! ([`session`]), a line shell ([`shell`]) and an HTTP API ([`web`]).

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod session;
pub mod shell;
pub mod storage;
pub mod view;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, Route, RouteLeg, ShortestPathAlgorithm};
/// Re-export main types for convenient use
pub use graph::{node::NodeId, undirected::WeightedGraph};
pub use session::{RouteReport, RouteSession};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("No edge exists between {0} and {1}")]
    EdgeNotFound(NodeId, NodeId),

    #[error("Weight must be positive, got {0}")]
    InvalidWeight(f64),

    #[error("Self-loop on {0} is not allowed")]
    SelfLoop(NodeId),

    #[error("Node name must not be empty")]
    EmptyNodeName,

    #[error("Weight must be a number, got {0:?}")]
    InvalidWeightInput(String),

    #[error("{0}")]
    InvalidCommand(String),

    #[error("Edge {0} -> {1} has no matching reverse edge")]
    AsymmetricEdge(NodeId, NodeId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
