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

const GRAMMAR: &str = "G";

/// Encoder for the undirected G grammar:
///
/// ```text
/// XP
/// v <index> <label>
/// u <source> <target> [<label>]
/// ```
///
/// Unlike LG, records carry no id, node indices are 1-based and edge lines
/// use the `u` token. Multi-label slots expand the same way.
pub struct GWriter;

impl GWriter {
    pub fn write_to_path(graphs: &[GraphInstance], path: &Path) -> Result<()> {
        fs::write(path, Self::to_text(graphs))
            .with_context(|| format!("write G input file {:?}", path))
    }

    /// Encode the whole batch, logging and skipping graphs that fail.
    pub fn to_text(graphs: &[GraphInstance]) -> String {
        let mut out = String::new();
        for (sequence, graph) in graphs.iter().enumerate() {
            match encode_record(graph) {
                Ok(record) => out.push_str(&record),
                Err(err) => error!("skipping graph {sequence} while encoding G input: {err:#}"),
            }
        }
        out
    }
}

fn encode_record(graph: &GraphInstance) -> Result<String> {
    let mut record = String::from("XP\n");

    let mut index_of: HashMap<&str, usize> = HashMap::new();
    for (index, label) in graph.nodes().enumerate() {
        index_of.insert(label, index + 1);
        record.push_str(&format!("v {} {}\n", index + 1, wire_label(label)));
    }

    for slot in graph.edge_slots() {
        let source = *index_of.get(slot.source).ok_or_else(|| {
            MiningError::Reference(format!("edge endpoint '{}' is not a node", slot.source))
        })?;
        let target = *index_of.get(slot.target).ok_or_else(|| {
            MiningError::Reference(format!("edge endpoint '{}' is not a node", slot.target))
        })?;
        if slot.labels.is_empty() {
            record.push_str(&format!("u {source} {target}\n"));
        } else {
            for label in slot.labels {
                record.push_str(&format!("u {source} {target} {label}\n"));
            }
        }
    }

    Ok(record)
}

/// Decoder for the miner's G output. Decoded patterns are undirected.
/// `% => <n>[<indices>]` lines enumerate 0-based positions into the original
/// input sequence; each position is resolved to that input graph's
/// identifier and recorded in the pattern's appears-in set.
pub struct GReader;

impl GReader {
    pub fn read_from_path(path: &Path, inputs: &[GraphInstance]) -> Result<Vec<FrequentGraph>> {
        let text =
            fs::read_to_string(path).with_context(|| format!("read G output file {:?}", path))?;
        Self::from_text(&text, inputs)
    }

    pub fn from_text(text: &str, inputs: &[GraphInstance]) -> Result<Vec<FrequentGraph>> {
        let mut results = Vec::new();
        let mut current: Option<Record> = None;
        let mut counter = 0usize;

        for (line_number, raw_line) in text.lines().enumerate() {
            let line_number = line_number + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if line == "XP" {
                if let Some(record) = current.take() {
                    results.push(record.finish());
                }
                counter += 1;
                current = Some(Record::new(counter));
                continue;
            }

            if let Some(rest) = line.strip_prefix("% =>") {
                let record = current
                    .as_mut()
                    .ok_or_else(|| format_error(line_number, "occurrence before any record"))?;
                for index in parse_occurrence_indices(rest, line_number)? {
                    let input = inputs.get(index).ok_or_else(|| {
                        format_error(
                            line_number,
                            &format!("occurrence index {index} is outside the input sequence"),
                        )
                    })?;
                    record.appears_in.insert(input.resolved_id(index));
                }
                continue;
            }

            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                ["v", index, label_tokens @ ..] if !label_tokens.is_empty() => {
                    let record = current
                        .as_mut()
                        .ok_or_else(|| format_error(line_number, "node before any record"))?;
                    let label = label_tokens.join(" ");
                    record.graph.add_node(label.clone());
                    record.node_map.insert((*index).to_string(), label);
                }
                ["u", source, target, label_tokens @ ..] => {
                    let record = current
                        .as_mut()
                        .ok_or_else(|| format_error(line_number, "edge before any record"))?;
                    let source = record.resolve(source, line_number)?;
                    let target = record.resolve(target, line_number)?;
                    let label = label_tokens.join(" ");
                    let label = (!label.is_empty()).then_some(label.as_str());
                    record.graph.add_edge(&source, &target, label)?;
                }
                ["v", ..] | ["u", ..] => {
                    return Err(format_error(line_number, "truncated node or edge line"));
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

/// Pull the comma-separated indices out of `<n>[<i1>,<i2>,...]`, skipping
/// empty tokens left by trailing commas.
fn parse_occurrence_indices(rest: &str, line_number: usize) -> Result<Vec<usize>> {
    let open = rest
        .find('[')
        .ok_or_else(|| format_error(line_number, "occurrence line missing '['"))?;
    let close = rest
        .rfind(']')
        .ok_or_else(|| format_error(line_number, "occurrence line missing ']'"))?;
    if close < open {
        return Err(format_error(line_number, "mismatched occurrence brackets"));
    }

    let mut indices = Vec::new();
    for token in rest[open + 1..close].split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let index: usize = token.parse().map_err(|_| {
            format_error(
                line_number,
                &format!("occurrence index '{token}' is not an integer"),
            )
        })?;
        indices.push(index);
    }
    Ok(indices)
}

struct Record {
    graph: GraphInstance,
    node_map: IndexMap<String, NodeLabel>,
    appears_in: IndexSet<GraphId>,
}

impl Record {
    fn new(counter: usize) -> Self {
        Self {
            graph: GraphInstance::new(false).with_id(counter.to_string()),
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
