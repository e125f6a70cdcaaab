use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;

use crate::error::MiningError;

/// Pattern-growth algorithm run by the external miner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    GSpan,
    Gaston,
    Dagma,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::GSpan => "gspan",
            Algorithm::Gaston => "gaston",
            Algorithm::Dagma => "dagma",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gspan" => Ok(Algorithm::GSpan),
            "gaston" => Ok(Algorithm::Gaston),
            "dagma" => Ok(Algorithm::Dagma),
            other => Err(MiningError::Config(format!(
                "algorithm must be one of gspan, gaston, dagma (got '{other}')"
            ))),
        }
    }
}

/// Work distribution mode of the external miner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distribution {
    Local,
    Threads,
    ThreadsNp,
}

impl Distribution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Distribution::Local => "local",
            Distribution::Threads => "threads",
            Distribution::ThreadsNp => "threads_np",
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Distribution {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Distribution::Local),
            "threads" => Ok(Distribution::Threads),
            "threads_np" => Ok(Distribution::ThreadsNp),
            other => Err(MiningError::Config(format!(
                "distribution must be one of local, threads, threads_np (got '{other}')"
            ))),
        }
    }
}

/// Frequency threshold, either relative to the corpus size or absolute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Percentage(u32),
    Count(u32),
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Percentage(value) => write!(f, "{value}%"),
            Frequency::Count(value) => write!(f, "{value}"),
        }
    }
}

impl FromStr for Frequency {
    type Err = MiningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (digits, percentage) = match trimmed.strip_suffix('%') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };
        let value: u32 = digits.parse().map_err(|_| {
            MiningError::Config(format!("frequency must be an integer or 'N%' (got '{s}')"))
        })?;
        Ok(if percentage {
            Frequency::Percentage(value)
        } else {
            Frequency::Count(value)
        })
    }
}

/// Wire grammar used to exchange graphs with the miner. `Lg` is the directed
/// line-graph format, `G` the undirected one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Lg,
    G,
}

impl GraphFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            GraphFormat::Lg => "lg",
            GraphFormat::G => "g",
        }
    }
}

/// Everything one mining run needs, validated before any file is touched.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Directory holding the per-run input and output files.
    pub data_dir: PathBuf,
    /// Path to the miner jar.
    pub jar_path: PathBuf,
    /// Java binary; resolved from the PATH when not set.
    pub java_binary: Option<PathBuf>,
    /// JVM heap ceiling, rendered as `-Xmx<value>`.
    pub java_heap: String,
    pub minimum_frequency: Frequency,
    pub maximum_frequency: Option<u32>,
    pub minimum_node_count: Option<u32>,
    pub maximum_node_count: Option<u32>,
    pub minimum_edge_count: Option<u32>,
    pub maximum_edge_count: Option<u32>,
    pub find_paths_only: bool,
    pub find_trees_only: bool,
    pub single_rooted: bool,
    pub connected_fragments: bool,
    pub close_graph: bool,
    pub subdue: bool,
    pub zaretsky: bool,
    pub store_embeddings: bool,
    pub debug: bool,
    pub algorithm: Algorithm,
    pub distribution: Distribution,
    pub threads: u32,
    pub format: GraphFormat,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            jar_path: PathBuf::from("parsemis.jar"),
            java_binary: None,
            java_heap: "10g".to_string(),
            minimum_frequency: Frequency::Percentage(5),
            maximum_frequency: None,
            minimum_node_count: None,
            maximum_node_count: None,
            minimum_edge_count: None,
            maximum_edge_count: None,
            find_paths_only: false,
            find_trees_only: false,
            single_rooted: false,
            connected_fragments: true,
            close_graph: false,
            subdue: false,
            zaretsky: false,
            store_embeddings: false,
            debug: false,
            algorithm: Algorithm::GSpan,
            distribution: Distribution::Local,
            threads: 1,
            format: GraphFormat::Lg,
        }
    }
}

impl MinerConfig {
    /// Reject configurations the enumerated types cannot rule out on their
    /// own. Runs synchronously before any I/O.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(MiningError::Config("thread count must be at least 1".to_string()).into());
        }
        if self.java_heap.trim().is_empty() {
            return Err(MiningError::Config("java heap size must not be empty".to_string()).into());
        }
        if self.jar_path.as_os_str().is_empty() {
            return Err(MiningError::Config("miner jar path must not be empty".to_string()).into());
        }
        Ok(())
    }

    pub fn input_file(&self) -> PathBuf {
        self.data_dir.join(format!("input.{}", self.format.extension()))
    }

    pub fn output_file(&self) -> PathBuf {
        self.data_dir.join(format!("output.{}", self.format.extension()))
    }
}
