use std::fs;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use anyhow::{Context, Result};
use log::debug;

use crate::config::{GraphFormat, MinerConfig};
use crate::format::{GReader, GWriter, LgReader, LgWriter};
use crate::frequent::FrequentGraph;
use crate::graph::GraphInstance;

/// Wrapper around the external ParSeMiS process. Owns the per-run input and
/// output files and the command line; the mining algorithm itself is the
/// jar's business.
#[derive(Debug)]
pub struct ParsemisMiner {
    config: MinerConfig,
}

impl ParsemisMiner {
    /// Validate the configuration, prepare the data directory and clear any
    /// stale input/output files so a previous run cannot leak into this one.
    pub fn new(config: MinerConfig) -> Result<Self> {
        config.validate()?;
        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("create data directory {:?}", config.data_dir))?;
        for path in [config.input_file(), config.output_file()] {
            if path.exists() {
                fs::remove_file(&path)
                    .with_context(|| format!("remove stale miner file {:?}", path))?;
            }
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Run the full pipeline: serialize the corpus, invoke the miner, decode
    /// its output. Strictly sequential; the only blocking wait is the child
    /// process itself.
    pub fn mine(&self, graphs: &[GraphInstance]) -> Result<Vec<FrequentGraph>> {
        debug!("mining {} graphs", graphs.len());
        self.write_input(graphs)?;
        self.invoke()?;
        self.read_output(graphs)
    }

    pub fn write_input(&self, graphs: &[GraphInstance]) -> Result<()> {
        let path = self.config.input_file();
        debug!("writing {} graphs to {:?}", graphs.len(), path);
        match self.config.format {
            GraphFormat::Lg => LgWriter::write_to_path(graphs, &path),
            GraphFormat::G => GWriter::write_to_path(graphs, &path),
        }
    }

    /// Decode the miner's output. The original input sequence is needed to
    /// resolve G-format occurrence indices back to graph identifiers.
    pub fn read_output(&self, inputs: &[GraphInstance]) -> Result<Vec<FrequentGraph>> {
        let path = self.config.output_file();
        if !path.exists() {
            anyhow::bail!("miner produced no output file at {:?}", path);
        }
        debug!("reading mined patterns from {:?}", path);
        match self.config.format {
            GraphFormat::Lg => LgReader::read_from_path(&path),
            GraphFormat::G => GReader::read_from_path(&path, inputs),
        }
    }

    /// The deterministic argument vector handed to the JVM. Kept separate
    /// from the spawn so it can be inspected without running anything.
    pub fn command_args(&self) -> Vec<String> {
        let config = &self.config;
        let mut args = vec![format!("-Xmx{}", config.java_heap)];
        if config.debug {
            args.push("-Dverbose=true".to_string());
        }
        args.push("-jar".to_string());
        args.push(config.jar_path.display().to_string());
        args.push(format!("--graphFile={}", config.input_file().display()));
        args.push(format!("--outputFile={}", config.output_file().display()));
        args.push(format!("--minimumFrequency={}", config.minimum_frequency));
        args.push(format!("--findPathsOnly={}", config.find_paths_only));
        args.push(format!("--findTreesOnly={}", config.find_trees_only));
        args.push(format!("--singleRooted={}", config.single_rooted));
        args.push(format!(
            "--connectedFragments={}",
            config.connected_fragments
        ));
        args.push(format!("--algorithm={}", config.algorithm));
        args.push(format!("--closeGraph={}", config.close_graph));
        args.push(format!("--subdue={}", config.subdue));
        args.push(format!("--zaretsky={}", config.zaretsky));
        args.push(format!("--distribution={}", config.distribution));
        args.push(format!("--threads={}", config.threads));
        args.push(format!("--storeEmbeddings={}", config.store_embeddings));

        if let Some(value) = config.minimum_node_count {
            args.push(format!("--minimumNodeCount={value}"));
        }
        if let Some(value) = config.maximum_node_count {
            args.push(format!("--maximumNodeCount={value}"));
        }
        if let Some(value) = config.minimum_edge_count {
            args.push(format!("--minimumEdgeCount={value}"));
        }
        if let Some(value) = config.maximum_edge_count {
            args.push(format!("--maximumEdgeCount={value}"));
        }
        if let Some(value) = config.maximum_frequency {
            args.push(format!("--maximumFrequency={value}"));
        }

        args
    }

    /// Spawn the miner and block until it exits. Exit status and output
    /// streams are not interpreted; whether the run worked is decided by the
    /// output file existing and parsing.
    fn invoke(&self) -> Result<()> {
        let java = self.java_binary()?;
        let args = self.command_args();
        debug!("invoking {:?} {:?}", java, args);
        let output = Command::new(&java)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .with_context(|| format!("spawn miner process {:?}", java))?;
        debug!("miner exited with {:?}", output.status);
        Ok(())
    }

    fn java_binary(&self) -> Result<PathBuf> {
        match &self.config.java_binary {
            Some(path) => Ok(path.clone()),
            None => which::which("java").context("java not found on PATH"),
        }
    }
}
