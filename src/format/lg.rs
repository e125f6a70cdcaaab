use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::{IndexMap, IndexSet};
use log::error;

use crate::error::MiningError;
use crate::format::wire_label;
use crate::frequent::FrequentGraph;
use crate::graph::{GraphId, GraphInstance, NodeLabel};

const GRAMMAR: &str = "LG";

/// Encoder for the directed LG grammar:
///
/// ```text
/// t # <graph-id>
/// v <index> <label>
/// e <source> <target> [<label>]
/// ```
///
/// Node indices are dense and 0-based in node-enumeration order. A slot with
/// several labels is expanded into one `e` line per label.
pub struct LgWriter;

impl LgWriter {
    pub fn write_to_path(graphs: &[GraphInstance], path: &Path) -> Result<()> {
        fs::write(path, Self::to_text(graphs))
            .with_context(|| format!("write LG input file {:?}", path))
    }

    /// Encode the whole batch. A graph that fails to encode is logged and
    /// skipped; the rest of the batch is kept.
    pub fn to_text(graphs: &[GraphInstance]) -> String {
        let mut out = String::new();
        for (sequence, graph) in graphs.iter().enumerate() {
            match encode_record(graph, sequence) {
                Ok(record) => out.push_str(&record),
                Err(err) => error!("skipping graph {sequence} while encoding LG input: {err:#}"),
            }
        }
        out
    }
}

fn encode_record(graph: &GraphInstance, sequence: usize) -> Result<String> {
    let mut record = String::new();
    record.push_str(&format!("t # {}\n", graph.resolved_id(sequence)));

    let mut index_of: HashMap<&str, usize> = HashMap::new();
    for (index, label) in graph.nodes().enumerate() {
        index_of.insert(label, index);
        record.push_str(&format!("v {} {}\n", index, wire_label(label)));
    }

    for slot in graph.edge_slots() {
        let source = *index_of.get(slot.source).ok_or_else(|| {
            MiningError::Reference(format!("edge endpoint '{}' is not a node", slot.source))
        })?;
        let target = *index_of.get(slot.target).ok_or_else(|| {
            MiningError::Reference(format!("edge endpoint '{}' is not a node", slot.target))
        })?;
        if slot.labels.is_empty() {
            record.push_str(&format!("e {source} {target}\n"));
        } else {
            for label in slot.labels {
                record.push_str(&format!("e {source} {target} {label}\n"));
            }
        }
    }

    Ok(record)
}

/// Decoder for the miner's LG output. Every decoded pattern is a directed
/// graph; `#=>` lines accumulate the identifiers of the input graphs the
/// pattern was embedded in.
pub struct LgReader;

impl LgReader {
    pub fn read_from_path(path: &Path) -> Result<Vec<FrequentGraph>> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read LG output file {:?}", path))?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Vec<FrequentGraph>> {
        let mut results = Vec::new();
        let mut current: Option<Record> = None;
        let mut counter = 0usize;

        for (line_number, raw_line) in text.lines().enumerate() {
            let line_number = line_number + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();

            match tokens.as_slice() {
                ["t", "#", ..] => {
                    if let Some(record) = current.take() {
                        results.push(record.finish());
                    }
                    counter += 1;
                    current = Some(Record::new(counter));
                }
                ["#=>", occurrence, ..] => {
                    let record = current
                        .as_mut()
                        .ok_or_else(|| format_error(line_number, "occurrence before any record"))?;
                    record.appears_in.insert((*occurrence).to_string());
                }
                ["v", index, label_tokens @ ..] if !label_tokens.is_empty() => {
                    let record = current
                        .as_mut()
                        .ok_or_else(|| format_error(line_number, "node before any record"))?;
                    let label = label_tokens.join(" ").trim_matches('\'').to_string();
                    record.graph.add_node(label.clone());
                    record.node_map.insert((*index).to_string(), label);
                }
                ["e", source, target, label_tokens @ ..] => {
                    let record = current
                        .as_mut()
                        .ok_or_else(|| format_error(line_number, "edge before any record"))?;
                    let source = record.resolve(source, line_number)?;
                    let target = record.resolve(target, line_number)?;
                    let label = label_tokens.join(" ");
                    let label = label.trim_matches('\'');
                    let label = (!label.is_empty()).then_some(label);
                    record.graph.add_edge(&source, &target, label)?;
                }
                ["v", ..] | ["e", ..] => {
                    return Err(format_error(line_number, "truncated node or edge line"));
                }
                ["#=>"] => {
                    return Err(format_error(line_number, "occurrence line missing identifier"));
                }
                _ => {}
            }
        }

        if let Some(record) = current.take() {
            results.push(record.finish());
        }
        Ok(results)
    }
}

struct Record {
    graph: GraphInstance,
    node_map: IndexMap<String, NodeLabel>,
    appears_in: IndexSet<GraphId>,
}

impl Record {
    fn new(counter: usize) -> Self {
        Self {
            graph: GraphInstance::new(true).with_id(counter.to_string()),
            node_map: IndexMap::new(),
            appears_in: IndexSet::new(),
        }
    }

    fn resolve(&self, index: &str, line_number: usize) -> Result<NodeLabel> {
        self.node_map.get(index).cloned().ok_or_else(|| {
            format_error(line_number, &format!("undeclared node index '{index}'"))
        })
    }

    fn finish(self) -> FrequentGraph {
        FrequentGraph::new(self.graph, self.appears_in)
    }
}

fn format_error(line: usize, message: &str) -> anyhow::Error {
    MiningError::Format {
        grammar: GRAMMAR,
        line,
        message: message.to_string(),
    }
    .into()
}
