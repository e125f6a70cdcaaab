use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use parsemis::{
    rank_by_support, score_against_corpus, CorpusLoader, Frequency, GraphWriter, MinerConfig,
    ParsemisMiner,
};

fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();
}

struct Args {
    corpus_dir: PathBuf,
    jar_path: PathBuf,
    minimum_frequency: Option<Frequency>,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let corpus_dir = args
        .next()
        .map(PathBuf::from)
        .context("usage: parsemis <corpus-dir> <parsemis-jar> [min-frequency]")?;
    let jar_path = args
        .next()
        .map(PathBuf::from)
        .context("usage: parsemis <corpus-dir> <parsemis-jar> [min-frequency]")?;
    let minimum_frequency = args.next().map(|raw| raw.parse()).transpose()?;
    if let Some(extra) = args.next() {
        anyhow::bail!("Unexpected extra argument: {extra}");
    }
    Ok(Args {
        corpus_dir,
        jar_path,
        minimum_frequency,
    })
}

fn main() -> Result<()> {
    init_logging();
    let args = parse_args()?;

    let corpus = CorpusLoader::new(&args.corpus_dir).load()?;
    if corpus.is_empty() {
        anyhow::bail!("No corpus graphs under {:?}", args.corpus_dir);
    }
    info!("Loaded {} corpus graphs from {:?}", corpus.len(), args.corpus_dir);

    let mut config = MinerConfig {
        jar_path: args.jar_path,
        ..MinerConfig::default()
    };
    if let Some(frequency) = args.minimum_frequency {
        config.minimum_frequency = frequency;
    }
    let patterns_dir = config.data_dir.join("patterns");

    let miner = ParsemisMiner::new(config)?;
    let mut patterns = miner.mine(&corpus)?;
    info!("Miner returned {} frequent patterns", patterns.len());

    rank_by_support(&mut patterns);

    fs::create_dir_all(&patterns_dir)
        .with_context(|| format!("create pattern directory {:?}", patterns_dir))?;
    for pattern in &patterns {
        let rank = pattern.rank().unwrap_or_default();
        info!("#{rank}: {pattern}");

        let scores = score_against_corpus(pattern, &corpus)?;
        let best = scores
            .iter()
            .max_by(|lhs, rhs| lhs.jaccard.total_cmp(&rhs.jaccard));
        if let Some(best) = best {
            info!(
                "#{rank}: closest corpus graph {} (dot {:.3}, jaccard {:.3})",
                best.graph_id, best.dot_product, best.jaccard
            );
        }

        let path = patterns_dir.join(format!("pattern_{rank:03}.json"));
        GraphWriter::write_to_path(pattern.graph(), &path)
            .with_context(|| format!("write mined pattern to {:?}", path))?;
    }

    Ok(())
}
