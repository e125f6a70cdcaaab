use thiserror::Error;

/// Error categories the wrapper distinguishes beyond plain I/O failures.
/// Wrapped in `anyhow` at the call sites so callers can downcast when they
/// need to tell a bad configuration from a corrupt miner stream.
#[derive(Debug, Error)]
pub enum MiningError {
    /// Invalid miner configuration, raised before any I/O happens.
    #[error("invalid miner configuration: {0}")]
    Config(String),

    /// Malformed line in an LG or G stream.
    #[error("malformed {grammar} stream at line {line}: {message}")]
    Format {
        grammar: &'static str,
        line: usize,
        message: String,
    },

    /// An edge or occurrence referring to something that was never declared.
    #[error("dangling reference: {0}")]
    Reference(String),
}
