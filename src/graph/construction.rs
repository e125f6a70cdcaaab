use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

use crate::graph::model::{GraphInstance, RawGraph};

/// High-level loader responsible for turning JSON corpus files into
/// in-memory graphs.
#[derive(Debug, Default)]
pub struct GraphLoader;

impl GraphLoader {
    /// Parse a JSON string into a graph instance.
    pub fn from_json_str(json: &str) -> Result<GraphInstance> {
        let raw: RawGraph = serde_json::from_str(json)?;
        Self::from_raw_graph(raw)
    }

    /// Read JSON graph data from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<GraphInstance> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json_str(&buf)
    }

    pub fn from_path(path: &Path) -> Result<GraphInstance> {
        let file = File::open(path).with_context(|| format!("open graph file {:?}", path))?;
        Self::from_reader(file).with_context(|| format!("parse graph file {:?}", path))
    }

    pub fn from_raw_graph(raw: RawGraph) -> Result<GraphInstance> {
        let mut instance = GraphInstance::new(raw.directed);
        instance.id = raw.id;

        for label in raw.nodes {
            instance.add_node(label);
        }

        for edge in raw.edges {
            let mut labels = edge.labels;
            if let Some(label) = edge.label {
                labels.push(label);
            }
            if labels.is_empty() {
                instance.add_edge(&edge.source, &edge.target, None)?;
            } else {
                for label in &labels {
                    instance.add_edge(&edge.source, &edge.target, Some(label.as_str()))?;
                }
            }
        }

        Ok(instance)
    }
}
