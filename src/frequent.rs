use std::fmt;

use indexmap::IndexSet;

use crate::graph::{GraphId, GraphInstance};

/// A mined pattern together with the input graphs the miner found it in.
/// Immutable after decoding except for the externally assigned rank.
#[derive(Debug, Clone)]
pub struct FrequentGraph {
    graph: GraphInstance,
    appears_in: IndexSet<GraphId>,
    rank: Option<usize>,
}

impl FrequentGraph {
    pub fn new(graph: GraphInstance, appears_in: IndexSet<GraphId>) -> Self {
        Self {
            graph,
            appears_in,
            rank: None,
        }
    }

    pub fn graph(&self) -> &GraphInstance {
        &self.graph
    }

    /// Identifiers of the input graphs this pattern occurred in.
    pub fn appears_in(&self) -> &IndexSet<GraphId> {
        &self.appears_in
    }

    pub fn support(&self) -> usize {
        self.appears_in.len()
    }

    pub fn rank(&self) -> Option<usize> {
        self.rank
    }

    /// Assign the pattern's position after external sorting. Meant to be
    /// called once per pattern.
    pub fn set_rank(&mut self, rank: usize) {
        debug_assert!(self.rank.is_none(), "rank is assigned once");
        self.rank = Some(rank);
    }
}

impl fmt::Display for FrequentGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots = self.graph.edge_slots();
        if slots.is_empty() {
            let nodes: Vec<&str> = self.graph.nodes().collect();
            return write!(f, "[{}] support {}", nodes.join(", "), self.support());
        }
        let edges: Vec<String> = slots
            .iter()
            .map(|slot| {
                if slot.labels.is_empty() {
                    format!("{}-{}", slot.source, slot.target)
                } else {
                    format!("{}-{}:{}", slot.source, slot.target, slot.labels.join("|"))
                }
            })
            .collect();
        write!(f, "[{}] support {}", edges.join(", "), self.support())
    }
}
