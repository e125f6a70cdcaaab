use anyhow::Result;
use indexmap::IndexMap;
use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};

use crate::error::MiningError;

pub type GraphId = String;

/// Node identity and node label are the same string.
pub type NodeLabel = String;

/// Labels attached to one edge slot. Simple graphs keep at most one entry,
/// multigraph usage may accumulate several. Empty means the slot is unlabeled.
pub type EdgeLabels = Vec<String>;

pub type LabeledGraph = Graph<NodeLabel, EdgeLabels>;

/// On-disk JSON representation of a corpus graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawGraph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<GraphId>,
    #[serde(default)]
    pub directed: bool,
    pub nodes: Vec<NodeLabel>,
    pub edges: Vec<RawEdge>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEdge {
    pub source: NodeLabel,
    pub target: NodeLabel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
}

/// One edge slot as seen by the serializers and the matching engine: a node
/// pair plus the full label set sharing that pair. Undirected instances
/// surface each slot once even though the underlying storage mirrors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSlot<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub labels: &'a [String],
}

#[derive(Debug, Clone)]
pub struct GraphInstance {
    pub id: Option<GraphId>,
    pub graph: LabeledGraph,
    pub node_lookup: IndexMap<NodeLabel, NodeIndex>,
    pub reverse_lookup: IndexMap<NodeIndex, NodeLabel>,
    pub directed: bool,
}

impl GraphInstance {
    pub fn new(directed: bool) -> Self {
        Self {
            id: None,
            graph: LabeledGraph::new(),
            node_lookup: IndexMap::new(),
            reverse_lookup: IndexMap::new(),
            directed,
        }
    }

    pub fn with_id(mut self, id: impl Into<GraphId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Identifier used on the wire: the graph's own id, else the caller's
    /// sequence index.
    pub fn resolved_id(&self, sequence_index: usize) -> GraphId {
        self.id
            .clone()
            .unwrap_or_else(|| sequence_index.to_string())
    }

    /// Insert a node if its label is not present yet. Returns the index
    /// either way, so repeated insertion is harmless.
    pub fn add_node(&mut self, label: impl Into<NodeLabel>) -> NodeIndex {
        let label = label.into();
        if let Some(idx) = self.node_lookup.get(&label) {
            return *idx;
        }
        let idx = self.graph.add_node(label.clone());
        self.node_lookup.insert(label.clone(), idx);
        self.reverse_lookup.insert(idx, label);
        idx
    }

    /// Attach an edge between two existing nodes. A label lands in the slot's
    /// label set; adding another label to the same pair turns the slot into a
    /// multi-edge slot. Undirected instances mirror the slot in both
    /// orientations.
    pub fn add_edge(&mut self, source: &str, target: &str, label: Option<&str>) -> Result<()> {
        let source_idx = self.resolve_node(source)?;
        let target_idx = self.resolve_node(target)?;
        self.push_label(source_idx, target_idx, label);
        if !self.directed && source_idx != target_idx {
            self.push_label(target_idx, source_idx, label);
        }
        Ok(())
    }

    fn resolve_node(&self, label: &str) -> Result<NodeIndex> {
        self.node_lookup.get(label).copied().ok_or_else(|| {
            MiningError::Reference(format!("edge references undeclared node '{label}'")).into()
        })
    }

    fn push_label(&mut self, source: NodeIndex, target: NodeIndex, label: Option<&str>) {
        let edge = self
            .graph
            .find_edge(source, target)
            .unwrap_or_else(|| self.graph.add_edge(source, target, Vec::new()));
        if let Some(label) = label {
            self.graph[edge].push(label.to_string());
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of distinct edge slots (mirrored orientations counted once).
    pub fn edge_slot_count(&self) -> usize {
        self.edge_slots().len()
    }

    pub fn contains_node(&self, label: &str) -> bool {
        self.node_lookup.contains_key(label)
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_lookup.keys().map(String::as_str)
    }

    /// Label set of the slot from `source` to `target`, if one exists in that
    /// orientation. Undirected instances hold both orientations, so either
    /// order resolves.
    pub fn edge_labels(&self, source: &str, target: &str) -> Option<&EdgeLabels> {
        let source_idx = *self.node_lookup.get(source)?;
        let target_idx = *self.node_lookup.get(target)?;
        let edge = self.graph.find_edge(source_idx, target_idx)?;
        self.graph.edge_weight(edge)
    }

    /// Every edge slot of the graph. For undirected instances the mirrored
    /// duplicate of a slot is skipped by endpoint ordering.
    pub fn edge_slots(&self) -> Vec<EdgeSlot<'_>> {
        let mut slots = Vec::new();
        for edge in self.graph.edge_references() {
            let source = match self.reverse_lookup.get(&edge.source()) {
                Some(label) => label.as_str(),
                None => continue,
            };
            let target = match self.reverse_lookup.get(&edge.target()) {
                Some(label) => label.as_str(),
                None => continue,
            };
            if !self.directed && source > target {
                continue;
            }
            slots.push(EdgeSlot {
                source,
                target,
                labels: edge.weight().as_slice(),
            });
        }
        slots
    }
}
