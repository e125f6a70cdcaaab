use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::graph::{GraphInstance, GraphLoader};

/// Loads every `.json` graph below a corpus directory, in sorted filename
/// order so the input sequence is stable across runs. The sequence order
/// matters: G-format occurrence indices resolve through it.
#[derive(Debug, Clone)]
pub struct CorpusLoader {
    root: PathBuf,
}

impl CorpusLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn load(&self) -> Result<Vec<GraphInstance>> {
        let mut paths = self
            .graph_files()
            .with_context(|| format!("enumerate corpus graphs in {:?}", self.root))?;
        paths.sort();

        let mut graphs = Vec::with_capacity(paths.len());
        for path in paths {
            let graph = GraphLoader::from_path(&path)
                .with_context(|| format!("load corpus graph {:?}", path))?;
            graphs.push(graph);
        }
        Ok(graphs)
    }

    fn graph_files(&self) -> Result<Vec<PathBuf>> {
        let entries = std::fs::read_dir(&self.root)?;
        Ok(entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| is_json_file(path))
            .collect())
    }
}

fn is_json_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .and_then(OsStr::to_str)
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
}
