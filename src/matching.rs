use crate::graph::GraphInstance;

/// Decide whether `subgraph` is a label-respecting subgraph of `graph`.
///
/// Every subgraph node label must exist in `graph`, and every subgraph edge
/// slot must have a matching edge there: same orientation for directed
/// supergraphs, either orientation for undirected ones. Labels match when the
/// two slots share at least one label, or when both slots are unlabeled.
/// There is no edge-count ceiling beyond node containment.
pub fn is_subgraph(graph: &GraphInstance, subgraph: &GraphInstance) -> bool {
    for node in subgraph.nodes() {
        if !graph.contains_node(node) {
            return false;
        }
    }

    for slot in subgraph.edge_slots() {
        if !edge_matches(graph, slot.source, slot.target, slot.labels) {
            return false;
        }
    }

    true
}

/// Edge-match rule shared with the similarity scorer: does `graph` carry an
/// edge between the two labeled nodes whose label set is compatible with
/// `labels`? The reversed orientation is consulted only for undirected
/// supergraphs.
pub fn edge_matches(graph: &GraphInstance, source: &str, target: &str, labels: &[String]) -> bool {
    if let Some(candidate) = graph.edge_labels(source, target) {
        if labels_compatible(labels, candidate) {
            return true;
        }
    }
    if !graph.is_directed() {
        if let Some(candidate) = graph.edge_labels(target, source) {
            return labels_compatible(labels, candidate);
        }
    }
    false
}

fn labels_compatible(query: &[String], candidate: &[String]) -> bool {
    if query.is_empty() && candidate.is_empty() {
        return true;
    }
    query.iter().any(|label| candidate.contains(label))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directed_super() -> GraphInstance {
        let mut graph = GraphInstance::new(true);
        for node in ["1", "2", "3", "4"] {
            graph.add_node(node);
        }
        graph.add_edge("1", "2", Some("a")).unwrap();
        graph.add_edge("2", "3", Some("c")).unwrap();
        graph.add_edge("3", "4", Some("d")).unwrap();
        graph.add_edge("2", "4", Some("b")).unwrap();
        graph
    }

    fn single_edge(directed: bool, source: &str, target: &str, label: Option<&str>) -> GraphInstance {
        let mut graph = GraphInstance::new(directed);
        graph.add_node(source);
        graph.add_node(target);
        graph.add_edge(source, target, label).unwrap();
        graph
    }

    #[test]
    fn every_graph_contains_itself() {
        let graph = directed_super();
        assert!(is_subgraph(&graph, &graph));
    }

    #[test]
    fn direction_matters_for_directed_supergraphs() {
        let graph = directed_super();
        assert!(is_subgraph(&graph, &single_edge(true, "1", "2", Some("a"))));
        assert!(!is_subgraph(&graph, &single_edge(true, "2", "1", Some("a"))));
    }

    #[test]
    fn labels_must_intersect() {
        let graph = directed_super();
        assert!(!is_subgraph(&graph, &single_edge(true, "1", "2", Some("b"))));
    }

    #[test]
    fn absent_pairs_do_not_match() {
        let graph = directed_super();
        assert!(!is_subgraph(&graph, &single_edge(true, "1", "4", Some("a"))));
    }

    #[test]
    fn all_edges_are_verified_not_just_the_first() {
        let graph = directed_super();
        let mut sub = GraphInstance::new(true);
        for node in ["1", "2", "4"] {
            sub.add_node(node);
        }
        sub.add_edge("1", "2", Some("a")).unwrap();
        sub.add_edge("2", "4", Some("z")).unwrap();
        assert!(!is_subgraph(&graph, &sub));
    }

    #[test]
    fn unlabeled_slots_match_each_other() {
        let mut graph = GraphInstance::new(true);
        graph.add_node("1");
        graph.add_node("2");
        graph.add_edge("1", "2", None).unwrap();
        assert!(is_subgraph(&graph, &single_edge(true, "1", "2", None)));
        assert!(!is_subgraph(&graph, &single_edge(true, "1", "2", Some("a"))));
    }
}
