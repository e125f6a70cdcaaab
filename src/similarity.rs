use anyhow::{bail, Result};

use crate::graph::GraphInstance;
use crate::matching::edge_matches;

/// Degree-of-match between a candidate subgraph and a supergraph, computed as
/// the normalized dot product of an all-ones reference vector (one slot per
/// subgraph node and edge) with the indicator vector of which of those
/// elements exist in the supergraph.
///
/// Yields 1.0 for full containment and 0.0 for complete disjointness. The
/// subgraph is the iterated reference; an empty subgraph has no defined score.
pub fn dot_product_similarity(subgraph: &GraphInstance, graph: &GraphInstance) -> Result<f64> {
    let comparison = presence_vector(subgraph, graph);
    if comparison.is_empty() {
        bail!("similarity is undefined for a graph without nodes or edges");
    }
    let reference = vec![1.0_f64; comparison.len()];
    let dot: f64 = reference
        .iter()
        .zip(comparison.iter())
        .map(|(lhs, rhs)| lhs * rhs)
        .sum();
    Ok(dot / reference.len() as f64)
}

/// Jaccard similarity over the combined node/edge element set of the
/// subgraph: |elements also present in the supergraph| / |elements|. The
/// found set is a subset of the reference set by construction, so the union
/// is the reference set itself.
pub fn jaccard_similarity(subgraph: &GraphInstance, graph: &GraphInstance) -> Result<f64> {
    let comparison = presence_vector(subgraph, graph);
    if comparison.is_empty() {
        bail!("similarity is undefined for a graph without nodes or edges");
    }
    let union = comparison.len();
    let intersection = comparison.iter().filter(|present| **present > 0.0).count();
    Ok(intersection as f64 / union as f64)
}

/// One indicator entry per subgraph node, then per subgraph edge slot, using
/// the matching engine's node-containment and edge-match rules.
fn presence_vector(subgraph: &GraphInstance, graph: &GraphInstance) -> Vec<f64> {
    let mut vector = Vec::with_capacity(subgraph.node_count() + subgraph.edge_slot_count());
    for node in subgraph.nodes() {
        vector.push(if graph.contains_node(node) { 1.0 } else { 0.0 });
    }
    for slot in subgraph.edge_slots() {
        let present = edge_matches(graph, slot.source, slot.target, slot.labels);
        vector.push(if present { 1.0 } else { 0.0 });
    }
    vector
}
