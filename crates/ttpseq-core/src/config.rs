use crate::document::is_tactic_id;
use crate::error::Result;
use crate::sequencer::DEFAULT_FILTERS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up in the working directory when no explicit
/// path is given.
pub const CONFIG_FILE: &str = "ttpseq.yaml";

/// Corpus directory used when neither flag nor config names one.
pub const DEFAULT_CORPUS_DIR: &str = "corpus";

// ---------------------------------------------------------------------------
// ConfigWarning
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub message: String,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    /// Tactics excluded from the filtered transition matrix.
    #[serde(default = "default_filters")]
    pub filters: Vec<String>,
    /// Corpus directory; the --corpus flag takes precedence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corpus: Option<PathBuf>,
}

fn default_version() -> u32 {
    1
}

fn default_filters() -> Vec<String> {
    DEFAULT_FILTERS.iter().map(|s| s.to_string()).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            filters: default_filters(),
            corpus: None,
        }
    }
}

impl Config {
    /// Load `path` when given; otherwise load `./ttpseq.yaml` if it exists,
    /// falling back to the defaults. An explicit path that cannot be read
    /// is an error.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let fallback = PathBuf::from(CONFIG_FILE);
                if !fallback.exists() {
                    return Ok(Self::default());
                }
                fallback
            }
        };
        let data = std::fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&data)?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();
        for filter in &self.filters {
            if !is_tactic_id(filter) {
                warnings.push(ConfigWarning {
                    message: format!("filter '{filter}' is not a tactic identifier"),
                });
            }
        }
        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
