use log::info;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::graph::WeightedGraph;
use crate::storage::GraphStore;
use crate::Result;

/// Stores the graph as a JSON object of objects:
///
/// ```json
/// { "A": { "B": 4.0, "C": 2.0 }, "B": { "A": 4.0 }, "C": { "A": 2.0 } }
/// ```
///
/// Writes go to a sibling temporary file that is then renamed over the
/// target, so a crash mid-save leaves the previous file intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl GraphStore for JsonFileStore {
    fn load(&self) -> Result<WeightedGraph> {
        let data = fs::read_to_string(&self.path)?;
        let graph = serde_json::from_str(&data)?;
        Ok(graph)
    }

    fn save(&self, graph: &WeightedGraph) -> Result<()> {
        let tmp = self.temp_path();
        {
            let mut file = fs::File::create(&tmp)?;
            serde_json::to_writer_pretty(&mut file, graph)?;
            file.write_all(b"\n")?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &self.path)?;
        info!("saved graph to {}", self.path.display());
        Ok(())
    }
}
