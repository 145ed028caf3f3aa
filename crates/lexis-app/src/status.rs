use std::path::PathBuf;
use std::time::Duration;

use lexis_core::Summary;

/// Outcome of a completed run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub summary: Summary,
    /// Ranks that took part in resolution, ascending
    pub sources_used: Vec<u8>,
    /// Ranks that were enabled but could not be read
    pub sources_skipped: Vec<u8>,
    pub written: Vec<PathBuf>,
    pub elapsed: Duration,
}

impl RunReport {
    pub fn log(&self) {
        let summary = &self.summary;
        tracing::info!("Total headwords processed: {}", summary.total);
        tracing::info!("Matched definitions: {}", summary.matched);
        tracing::info!("Redirect entries: {}", summary.redirects);
        tracing::info!("Unmatched headwords: {}", summary.unmatched());
        tracing::info!("Sources used (by rank): {:?}", self.sources_used);
        if !self.sources_skipped.is_empty() {
            tracing::warn!("Sources skipped (by rank): {:?}", self.sources_skipped);
        }
        for path in &self.written {
            tracing::info!("Generated {}", path.display());
        }
        tracing::info!("Elapsed: {:.2}s", self.elapsed.as_secs_f64());
    }
}
