use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::graph::model::{GraphInstance, RawEdge, RawGraph};

/// Helper for exporting graphs back to JSON files compatible with the loader
/// format. Used to persist mined patterns next to the corpus they came from.
pub struct GraphWriter;

impl GraphWriter {
    pub fn to_raw_graph(graph: &GraphInstance) -> RawGraph {
        let nodes = graph.nodes().map(str::to_string).collect();

        let edges = graph
            .edge_slots()
            .into_iter()
            .map(|slot| RawEdge {
                source: slot.source.to_string(),
                target: slot.target.to_string(),
                label: None,
                labels: slot.labels.to_vec(),
            })
            .collect();

        RawGraph {
            id: graph.id.clone(),
            directed: graph.directed,
            nodes,
            edges,
        }
    }

    pub fn to_json_string(graph: &GraphInstance) -> Result<String> {
        let raw = Self::to_raw_graph(graph);
        Ok(serde_json::to_string_pretty(&raw)?)
    }

    pub fn write_to_path(graph: &GraphInstance, path: &Path) -> Result<()> {
        let json = Self::to_json_string(graph)?;
        let mut file = File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
