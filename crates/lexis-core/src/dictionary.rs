use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Separator placed between definitions of a headword repeated within one source
pub const DEFINITION_SEPARATOR: &str = " | ";

/// Content extracted for one headword from one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub pronunciation: Option<String>,
    pub definition: String,
}

impl Entry {
    pub fn new(pronunciation: Option<String>, definition: impl Into<String>) -> Self {
        Self {
            pronunciation,
            definition: definition.into(),
        }
    }

    fn has_pronunciation(&self) -> bool {
        self.pronunciation.as_deref().is_some_and(|p| !p.is_empty())
    }
}

/// Headword to entry mapping for a single source
///
/// Keys are the trimmed headwords exactly as they appear in the source.
/// The map is ordered so that snapshots serialize the same way on every run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceIndex {
    entries: BTreeMap<String, Entry>,
}

impl SourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, merging it into an existing entry for the same headword.
    ///
    /// Definitions are appended with [`DEFINITION_SEPARATOR`] in insertion order;
    /// the first non-empty pronunciation is kept.
    pub fn insert_merged(&mut self, headword: impl Into<String>, entry: Entry) {
        let headword = headword.into();
        match self.entries.get_mut(&headword) {
            Some(existing) => {
                existing.definition.push_str(DEFINITION_SEPARATOR);
                existing.definition.push_str(&entry.definition);
                if !existing.has_pronunciation() && entry.has_pronunciation() {
                    existing.pronunciation = entry.pronunciation;
                }
            }
            None => {
                self.entries.insert(headword, entry);
            }
        }
    }

    pub fn get(&self, headword: &str) -> Option<&Entry> {
        self.entries.get(headword)
    }

    pub fn contains(&self, headword: &str) -> bool {
        self.entries.contains_key(headword)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns the raw text of one source into a [`SourceIndex`]
///
/// Lines or blocks that do not fit the grammar are skipped, never reported.
pub trait SourceParser: Send + Sync {
    /// Short name of the grammar, used in logs
    fn name(&self) -> &'static str;

    fn parse(&self, text: &str) -> SourceIndex;
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("source file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read source {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// Build from an I/O error, separating the not-found case
    pub fn from_io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            SourceError::Missing { path }
        } else {
            SourceError::Io { path, source: err }
        }
    }
}
