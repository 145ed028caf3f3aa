use std::path::PathBuf;

use lexis_core::types::SourceFormat;
use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

/// One dictionary source and its place in the fallback order
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    /// Priority rank, 1 is tried first
    pub rank: u8,
    pub path: PathBuf,
    pub format: SourceFormat,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

impl SourceConfig {
    pub fn new(rank: u8, path: impl Into<PathBuf>, format: SourceFormat) -> Self {
        Self {
            rank,
            path: path.into(),
            format,
            enabled: default_enabled(),
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

/// Reference source table
///
/// The vocabulary list is kept as an optional sixth source, off by default.
pub fn default_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig::new(2, "现代英汉词典.txt", SourceFormat::SlashInline),
        SourceConfig::new(3, "OALD8_简体中文释义.txt", SourceFormat::BracketInline),
        SourceConfig::new(4, "oxford_dict_result.txt", SourceFormat::Block),
        SourceConfig::new(5, "extracted_from_ODE.txt", SourceFormat::Arrow),
        SourceConfig::new(6, "英语专业四八级词汇表.txt", SourceFormat::WordList).disabled(),
    ]
}
