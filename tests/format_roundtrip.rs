use parsemis::{GReader, GWriter, GraphInstance, LgReader, LgWriter};

fn directed_pair() -> GraphInstance {
    let mut graph = GraphInstance::new(true).with_id("m0");
    graph.add_node("C");
    graph.add_node("N");
    graph.add_edge("C", "N", Some("single")).unwrap();
    graph
}

#[test]
fn lg_round_trip_preserves_labels_and_directedness() {
    let text = LgWriter::to_text(&[directed_pair()]);
    // Miner-style output echoes the same record shape back.
    let decoded = LgReader::from_text(&text).unwrap();

    assert_eq!(decoded.len(), 1);
    let pattern = decoded[0].graph();
    assert!(pattern.is_directed());
    let nodes: Vec<&str> = pattern.nodes().collect();
    assert_eq!(nodes, vec!["C", "N"]);
    assert_eq!(
        pattern.edge_labels("C", "N").unwrap(),
        &vec!["single".to_string()]
    );
    assert!(pattern.edge_labels("N", "C").is_none());
}

#[test]
fn lg_decodes_multiple_records_with_fresh_node_maps() {
    let mut second = GraphInstance::new(true);
    second.add_node("O");
    second.add_node("H");
    second.add_edge("O", "H", None).unwrap();

    let text = LgWriter::to_text(&[directed_pair(), second]);
    let decoded = LgReader::from_text(&text).unwrap();

    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].graph().id.as_deref(), Some("1"));
    assert_eq!(decoded[1].graph().id.as_deref(), Some("2"));
    // Index 0 in the second record is "O", not a leak from the first one.
    assert!(decoded[1].graph().contains_node("O"));
    assert!(!decoded[1].graph().contains_node("C"));
}

#[test]
fn g_round_trip_keeps_multi_labels_together() {
    let mut graph = GraphInstance::new(false);
    graph.add_node("a");
    graph.add_node("b");
    graph.add_edge("a", "b", Some("x")).unwrap();
    graph.add_edge("a", "b", Some("y")).unwrap();

    let text = GWriter::to_text(&[graph]);
    assert!(text.contains("u 1 2 x\n"));
    assert!(text.contains("u 1 2 y\n"));

    let decoded = GReader::from_text(&text, &[]).unwrap();
    let labels = decoded[0].graph().edge_labels("a", "b").unwrap();
    assert_eq!(labels, &vec!["x".to_string(), "y".to_string()]);
}

#[test]
fn g_occurrences_resolve_against_the_original_inputs() {
    let inputs: Vec<GraphInstance> = (0..3)
        .map(|i| {
            let mut graph = GraphInstance::new(false);
            if i == 2 {
                graph = graph.with_id("target");
            }
            graph.add_node("a");
            graph
        })
        .collect();

    let decoded = GReader::from_text("XP\nv 1 a\n% => 0[2,]\n", &inputs).unwrap();
    assert_eq!(decoded[0].support(), 1);
    assert!(decoded[0].appears_in().contains("target"));
}

#[test]
fn unidentified_inputs_fall_back_to_sequence_indices() {
    let inputs: Vec<GraphInstance> = (0..2)
        .map(|_| {
            let mut graph = GraphInstance::new(false);
            graph.add_node("a");
            graph
        })
        .collect();

    let decoded = GReader::from_text("XP\nv 1 a\n% => 2[0,1]\n", &inputs).unwrap();
    assert!(decoded[0].appears_in().contains("0"));
    assert!(decoded[0].appears_in().contains("1"));
}

#[test]
fn readers_tolerate_surrounding_whitespace() {
    let text = "  t # 5  \n  v 0 C  \n\n  v 1 N\n  e 0 1 single  \n";
    let decoded = LgReader::from_text(text).unwrap();
    assert_eq!(decoded.len(), 1);
    assert!(decoded[0].graph().contains_node("C"));
    assert_eq!(
        decoded[0].graph().edge_labels("C", "N").unwrap(),
        &vec!["single".to_string()]
    );
}

#[test]
fn files_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let lg_path = dir.path().join("corpus.lg");
    let g_path = dir.path().join("corpus.g");

    LgWriter::write_to_path(&[directed_pair()], &lg_path).unwrap();
    let lg_decoded = LgReader::read_from_path(&lg_path).unwrap();
    assert_eq!(lg_decoded.len(), 1);

    let mut undirected = GraphInstance::new(false);
    undirected.add_node("a");
    undirected.add_node("b");
    undirected.add_edge("a", "b", Some("x")).unwrap();
    GWriter::write_to_path(&[undirected], &g_path).unwrap();
    let g_decoded = GReader::read_from_path(&g_path, &[]).unwrap();
    assert_eq!(g_decoded.len(), 1);
    assert!(!g_decoded[0].graph().is_directed());
}
