//! Persistence of the flat `node -> {neighbor: weight}` mapping.

pub mod json_file;

pub use json_file::JsonFileStore;

use crate::graph::generators::default_graph;
use crate::graph::WeightedGraph;
use crate::Result;
use log::warn;
use std::fmt::Debug;
use std::sync::Mutex;

/// Default file name used by the front ends
pub const DEFAULT_GRAPH_FILE: &str = "graph_data.json";

/// Loads and saves a graph
pub trait GraphStore: Debug + Send + Sync {
    /// Loads the stored graph. Fails if nothing is stored or the data is invalid.
    fn load(&self) -> Result<WeightedGraph>;

    /// Replaces the stored graph
    fn save(&self, graph: &WeightedGraph) -> Result<()>;
}

/// Loads from `store`, falling back to the built-in sample graph when the
/// stored state is absent or cannot be used.
pub fn load_or_default(store: &dyn GraphStore) -> WeightedGraph {
    match store.load() {
        Ok(graph) => graph,
        Err(e) => {
            warn!("using default graph, could not load {:?}: {}", store, e);
            default_graph()
        }
    }
}

/// Keeps the saved graph in memory; used where no file should be touched
#[derive(Debug, Default)]
pub struct MemoryStore {
    saved: Mutex<Option<WeightedGraph>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(graph: WeightedGraph) -> Self {
        MemoryStore {
            saved: Mutex::new(Some(graph)),
        }
    }
}

impl GraphStore for MemoryStore {
    fn load(&self) -> Result<WeightedGraph> {
        let saved = self.saved.lock().unwrap_or_else(|e| e.into_inner());
        saved.clone().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "nothing saved yet").into()
        })
    }

    fn save(&self, graph: &WeightedGraph) -> Result<()> {
        let mut saved = self.saved.lock().unwrap_or_else(|e| e.into_inner());
        *saved = Some(graph.clone());
        Ok(())
    }
}
