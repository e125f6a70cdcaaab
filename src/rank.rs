use anyhow::Result;
use rayon::prelude::*;

use crate::frequent::FrequentGraph;
use crate::graph::{GraphId, GraphInstance};
use crate::matching::is_subgraph;
use crate::similarity::{dot_product_similarity, jaccard_similarity};

/// Similarity of one mined pattern against a single corpus graph.
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusScore {
    pub graph_id: GraphId,
    pub dot_product: f64,
    pub jaccard: f64,
}

/// Order patterns by descending support and assign 1-based ranks. Ties keep
/// their decoding order.
pub fn rank_by_support(patterns: &mut Vec<FrequentGraph>) {
    patterns.sort_by(|lhs, rhs| rhs.support().cmp(&lhs.support()));
    for (index, pattern) in patterns.iter_mut().enumerate() {
        pattern.set_rank(index + 1);
    }
}

/// Count the corpus graphs that contain the pattern. Matching is a pure
/// function over immutable graphs, so the corpus sweep fans out safely.
pub fn containment_count(pattern: &FrequentGraph, corpus: &[GraphInstance]) -> usize {
    corpus
        .par_iter()
        .filter(|graph| is_subgraph(graph, pattern.graph()))
        .count()
}

/// Score the pattern against every corpus graph with both similarity
/// metrics, in corpus order.
pub fn score_against_corpus(
    pattern: &FrequentGraph,
    corpus: &[GraphInstance],
) -> Result<Vec<CorpusScore>> {
    corpus
        .par_iter()
        .enumerate()
        .map(|(index, graph)| {
            Ok(CorpusScore {
                graph_id: graph.resolved_id(index),
                dot_product: dot_product_similarity(pattern.graph(), graph)?,
                jaccard: jaccard_similarity(pattern.graph(), graph)?,
            })
        })
        .collect()
}
