use std::path::{Path, PathBuf};
use ttpseq_core::config::{Config, DEFAULT_CORPUS_DIR};

/// Resolve the corpus directory.
///
/// Priority:
/// 1. `--corpus` flag / `TTPSEQ_CORPUS` env var (passed in as `explicit`)
/// 2. `corpus:` key in the config file
/// 3. `corpus/` under the current working directory
pub fn resolve(explicit: Option<&Path>, config: &Config) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }
    if let Some(p) = &config.corpus {
        return p.clone();
    }
    PathBuf::from(DEFAULT_CORPUS_DIR)
}
