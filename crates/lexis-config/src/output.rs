use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_text_path() -> PathBuf {
    PathBuf::from("final_vocabulary.txt")
}

fn default_json_path() -> PathBuf {
    PathBuf::from("final_vocabulary.json")
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_write_snapshots() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Human-readable vocabulary
    #[serde(default = "default_text_path")]
    pub text_path: PathBuf,
    /// Structured record list
    #[serde(default = "default_json_path")]
    pub json_path: PathBuf,
    /// Directory receiving `index_<rank>.json`
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
    #[serde(default = "default_write_snapshots")]
    pub write_snapshots: bool,
}

impl OutputConfig {
    pub fn snapshot_path(&self, rank: u8) -> PathBuf {
        self.snapshot_dir.join(format!("index_{rank}.json"))
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            text_path: default_text_path(),
            json_path: default_json_path(),
            snapshot_dir: default_snapshot_dir(),
            write_snapshots: default_write_snapshots(),
        }
    }
}
