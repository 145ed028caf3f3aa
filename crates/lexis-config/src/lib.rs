use std::collections::HashSet;
use std::env;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::output::OutputConfig;
use self::source::{SourceConfig, default_sources};

pub mod output;
pub mod source;

fn default_master_list() -> PathBuf {
    PathBuf::from("ODE 词头.txt")
}

fn default_parallel() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Authoritative headword list, one headword or redirect per line
    #[serde(default = "default_master_list")]
    pub master_list: PathBuf,
    #[serde(default = "default_sources")]
    pub sources: Vec<SourceConfig>,
    pub output: OutputConfig,
    /// Parse sources concurrently
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_list: default_master_list(),
            sources: default_sources(),
            output: OutputConfig::default(),
            parallel: default_parallel(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("source rank must be at least 1 (source {})", path.display())]
    ZeroRank { path: PathBuf },

    #[error("source rank {0} is used more than once")]
    DuplicateRank(u8),

    #[error("invalid value for {key}: {value}")]
    InvalidEnv { key: String, value: String },
}

impl Config {
    /// Defaults overridden by the process environment
    pub fn new() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `LEXIS_*` overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LEXIS_MASTER_LIST") {
            self.master_list = v.into();
        }
        if let Some(v) = lookup("LEXIS_OUTPUT_TXT") {
            self.output.text_path = v.into();
        }
        if let Some(v) = lookup("LEXIS_OUTPUT_JSON") {
            self.output.json_path = v.into();
        }
        if let Some(v) = lookup("LEXIS_SNAPSHOT_DIR") {
            self.output.snapshot_dir = v.into();
        }
        if let Some(v) = lookup("LEXIS_PARALLEL") {
            self.parallel = v.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "LEXIS_PARALLEL".to_string(),
                value: v,
            })?;
        }
        Ok(())
    }

    /// Reject rank 0 and ranks shared by two sources
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for source in &self.sources {
            if source.rank == 0 {
                return Err(ConfigError::ZeroRank {
                    path: source.path.clone(),
                });
            }
            if !seen.insert(source.rank) {
                return Err(ConfigError::DuplicateRank(source.rank));
            }
        }

        if !self.sources.iter().any(|s| s.enabled) {
            tracing::warn!("No source is enabled, every headword will be unmatched");
        }
        Ok(())
    }

    /// Enabled sources in ascending rank
    pub fn enabled_sources(&self) -> Vec<&SourceConfig> {
        let mut sources: Vec<&SourceConfig> = self.sources.iter().filter(|s| s.enabled).collect();
        sources.sort_by_key(|s| s.rank);
        sources
    }

    /// Enable or disable the source at `rank`; returns false if there is none
    pub fn set_enabled(&mut self, rank: u8, enabled: bool) -> bool {
        match self.sources.iter_mut().find(|s| s.rank == rank) {
            Some(source) => {
                source.enabled = enabled;
                true
            }
            None => false,
        }
    }
}
