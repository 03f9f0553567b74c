pub mod freq;
pub mod matrix;

use anyhow::Context;
use std::path::Path;
use ttpseq_core::config::Config;
use ttpseq_core::corpus::load_corpus;
use ttpseq_core::sequencer::{Aggregates, TacticSequencer};

/// Load config and corpus, then run one aggregation pass. Config warnings
/// go to the log; they never abort the run.
pub fn load_aggregates(
    corpus: Option<&Path>,
    config_path: Option<&Path>,
) -> anyhow::Result<Aggregates> {
    let config = Config::load_or_default(config_path).context("failed to load config")?;
    for warning in config.validate() {
        tracing::warn!("{}", warning.message);
    }

    let dir = crate::corpus_dir::resolve(corpus, &config);
    let documents = load_corpus(&dir).context("failed to load corpus")?;
    tracing::debug!(documents = documents.len(), dir = %dir.display(), "corpus loaded");

    let sequencer = TacticSequencer::new(config.filters);
    Ok(sequencer.aggregate(&documents))
}
