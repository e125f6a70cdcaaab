use parsemis::{dot_product_similarity, is_subgraph, jaccard_similarity, GraphInstance};

fn graph(directed: bool, edges: &[(&str, &str, Option<&str>)]) -> GraphInstance {
    let mut instance = GraphInstance::new(directed);
    for (source, target, label) in edges {
        instance.add_node(*source);
        instance.add_node(*target);
        instance.add_edge(source, target, *label).expect("add edge");
    }
    instance
}

#[test]
fn digraph_is_subgraph_with_labels() {
    let g = graph(
        true,
        &[
            ("1", "2", Some("a")),
            ("2", "3", Some("c")),
            ("3", "4", Some("d")),
            ("2", "4", Some("b")),
        ],
    );

    assert!(is_subgraph(&g, &graph(true, &[("1", "2", Some("a"))])));
    assert!(is_subgraph(&g, &graph(true, &[("3", "4", Some("d"))])));

    assert!(!is_subgraph(&g, &graph(true, &[("1", "2", Some("b"))])));
    assert!(!is_subgraph(&g, &graph(true, &[("2", "1", Some("a"))])));
    assert!(!is_subgraph(&g, &graph(true, &[("1", "4", Some("a"))])));
}

#[test]
fn multidigraph_is_subgraph_with_labels() {
    let g = graph(
        true,
        &[
            ("1", "2", Some("a")),
            ("1", "2", Some("f")),
            ("2", "3", Some("c")),
            ("3", "4", Some("d")),
            ("2", "4", Some("b")),
        ],
    );

    assert!(is_subgraph(&g, &graph(true, &[("1", "2", Some("a"))])));
    assert!(is_subgraph(&g, &graph(true, &[("1", "2", Some("f"))])));
    assert!(is_subgraph(&g, &graph(true, &[("3", "4", Some("d"))])));

    assert!(!is_subgraph(&g, &graph(true, &[("1", "2", Some("b"))])));
    assert!(!is_subgraph(&g, &graph(true, &[("2", "1", Some("a"))])));
    assert!(!is_subgraph(&g, &graph(true, &[("1", "4", Some("a"))])));
}

#[test]
fn undirected_graph_is_subgraph_with_labels() {
    let g = graph(
        false,
        &[
            ("1", "2", Some("a")),
            ("2", "3", Some("c")),
            ("3", "4", Some("d")),
            ("2", "4", Some("b")),
        ],
    );

    assert!(is_subgraph(&g, &graph(false, &[("1", "2", Some("a"))])));
    assert!(is_subgraph(&g, &graph(false, &[("3", "4", Some("d"))])));
    // Stored orientation is irrelevant against an undirected supergraph.
    assert!(is_subgraph(&g, &graph(false, &[("2", "1", Some("a"))])));

    assert!(!is_subgraph(&g, &graph(false, &[("1", "2", Some("b"))])));
    assert!(!is_subgraph(&g, &graph(false, &[("1", "4", Some("a"))])));
}

#[test]
fn digraph_is_subgraph_without_labels() {
    let g = graph(
        true,
        &[("1", "2", None), ("2", "3", None), ("3", "4", None), ("2", "4", None)],
    );

    assert!(is_subgraph(&g, &graph(true, &[("1", "2", None)])));
    assert!(is_subgraph(&g, &graph(true, &[("3", "4", None)])));
    assert!(!is_subgraph(&g, &graph(true, &[("1", "4", None)])));
}

#[test]
fn undirected_graph_is_subgraph_without_labels() {
    let g = graph(
        false,
        &[("1", "2", None), ("2", "3", None), ("3", "4", None), ("2", "4", None)],
    );

    assert!(is_subgraph(&g, &graph(false, &[("1", "2", None)])));
    assert!(is_subgraph(&g, &graph(false, &[("3", "4", None)])));
    assert!(is_subgraph(&g, &graph(false, &[("4", "3", None)])));
    assert!(!is_subgraph(&g, &graph(false, &[("1", "4", None)])));
}

#[test]
fn every_graph_contains_itself() {
    for directed in [true, false] {
        let g = graph(
            directed,
            &[("1", "2", Some("a")), ("2", "3", None), ("2", "3", Some("b"))],
        );
        assert!(is_subgraph(&g, &g));
    }
}

#[test]
fn directed_supergraph_rejects_reversed_edges_undirected_accepts_them() {
    let directed = graph(true, &[("1", "2", Some("a"))]);
    let undirected = graph(false, &[("1", "2", Some("a"))]);
    let reversed = graph(true, &[("2", "1", Some("a"))]);

    assert!(!is_subgraph(&directed, &reversed));
    assert!(is_subgraph(&undirected, &reversed));
}

#[test]
fn similarity_is_one_when_identical() {
    let super_graph = graph(false, &[("1", "2", Some("a")), ("2", "3", Some("b"))]);
    let sub_graph = super_graph.clone();

    assert_eq!(dot_product_similarity(&sub_graph, &super_graph).unwrap(), 1.0);
    assert_eq!(jaccard_similarity(&sub_graph, &super_graph).unwrap(), 1.0);
}

#[test]
fn similarity_is_zero_when_disjoint() {
    let super_graph = graph(false, &[("1", "2", Some("a")), ("2", "3", Some("b"))]);
    let sub_graph = graph(false, &[("4", "5", Some("c")), ("5", "6", Some("d"))]);

    assert_eq!(dot_product_similarity(&sub_graph, &super_graph).unwrap(), 0.0);
    assert_eq!(jaccard_similarity(&sub_graph, &super_graph).unwrap(), 0.0);
}

#[test]
fn similarity_counts_shared_nodes_and_edges() {
    let super_graph = graph(
        false,
        &[("1", "2", Some("a")), ("2", "3", Some("b")), ("3", "4", Some("c"))],
    );
    let sub_graph = graph(false, &[("2", "3", Some("b")), ("2", "5", Some("d"))]);

    assert_eq!(dot_product_similarity(&sub_graph, &super_graph).unwrap(), 0.6);
    assert_eq!(jaccard_similarity(&sub_graph, &super_graph).unwrap(), 0.6);
}
