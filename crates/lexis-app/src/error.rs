use std::path::PathBuf;

/// Conditions that abort a run
///
/// A missing or unreadable source is not one of them: it is logged and the
/// source is left out of the fallback order.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("master headword list not found: {}", path.display())]
    MasterListMissing { path: PathBuf },

    #[error("failed to read master headword list {}: {source}", path.display())]
    MasterListIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("source parse task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
