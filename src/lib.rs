pub mod config;
pub mod corpus;
pub mod error;
pub mod format;
pub mod frequent;
pub mod graph;
pub mod matching;
pub mod miner;
pub mod rank;
pub mod similarity;

pub use config::{Algorithm, Distribution, Frequency, GraphFormat, MinerConfig};
pub use corpus::CorpusLoader;
pub use error::MiningError;
pub use format::{GReader, GWriter, LgReader, LgWriter};
pub use frequent::FrequentGraph;
pub use graph::{GraphId, GraphInstance, GraphLoader, GraphWriter};
pub use matching::is_subgraph;
pub use miner::ParsemisMiner;
pub use rank::{containment_count, rank_by_support, score_against_corpus, CorpusScore};
pub use similarity::{dot_product_similarity, jaccard_similarity};
