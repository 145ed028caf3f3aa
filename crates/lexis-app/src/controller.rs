use std::time::Instant;

use lexis_config::Config;
use lexis_config::output::OutputConfig;
use lexis_config::source::SourceConfig;
use lexis_core::{MasterList, Resolver, SourceError, SourceIndex};
use lexis_formats::SourceLoader;
use tokio::task::{self, JoinSet};

use crate::error::PipelineError;
use crate::io;
use crate::status::RunReport;

type SourceOutcome = (u8, Result<SourceIndex, SourceError>);

/// Runs the parse, resolve and write stages for one configuration
pub struct PipelineController {
    config: Config,
}

impl PipelineController {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&self) -> Result<RunReport, PipelineError> {
        let started = Instant::now();

        // Fail before any parsing if the master list is absent
        let master_path = self.config.master_list.clone();
        let master = task::spawn_blocking(move || io::read_master_list(&master_path)).await??;

        tracing::info!("Building source indexes");
        let outcomes = if self.config.parallel {
            self.parse_parallel().await?
        } else {
            self.parse_sequential().await?
        };

        let mut report = RunReport::default();
        let mut indexes = Vec::with_capacity(outcomes.len());
        for (rank, outcome) in outcomes {
            match outcome {
                Ok(index) => indexes.push((rank, index)),
                Err(e) => {
                    tracing::warn!("Skipping source {rank}: {e}");
                    report.sources_skipped.push(rank);
                }
            }
        }
        indexes.sort_by_key(|(rank, _)| *rank);
        report.sources_skipped.sort_unstable();

        let output = self.config.output.clone();
        let mut report =
            task::spawn_blocking(move || write_outputs(indexes, &master, &output, report)).await??;

        report.elapsed = started.elapsed();
        Ok(report)
    }

    /// One blocking task per source; resolution waits for all of them
    async fn parse_parallel(&self) -> Result<Vec<SourceOutcome>, PipelineError> {
        let mut tasks = JoinSet::new();
        for source in self.config.enabled_sources() {
            let source = source.clone();
            tasks.spawn_blocking(move || load(&source));
        }

        let mut outcomes = Vec::with_capacity(tasks.len());
        while let Some(result) = tasks.join_next().await {
            outcomes.push(result?);
        }
        Ok(outcomes)
    }

    /// All sources on a single blocking task, in rank order
    async fn parse_sequential(&self) -> Result<Vec<SourceOutcome>, PipelineError> {
        let sources: Vec<SourceConfig> =
            self.config.enabled_sources().into_iter().cloned().collect();
        let outcomes =
            task::spawn_blocking(move || sources.iter().map(load).collect::<Vec<_>>()).await?;
        Ok(outcomes)
    }
}

/// Snapshots, then the resolved vocabulary files
fn write_outputs(
    indexes: Vec<(u8, SourceIndex)>,
    master: &MasterList,
    output: &OutputConfig,
    mut report: RunReport,
) -> Result<RunReport, PipelineError> {
    if output.write_snapshots {
        save_snapshots(&indexes, output, &mut report);
    }

    let resolver = Resolver::new(indexes);
    report.sources_used = resolver.ranks();

    tracing::info!("Resolving {} headwords", master.len());
    report.summary = io::write_vocabulary(&resolver, master, output)?;
    report.written.push(output.text_path.clone());
    report.written.push(output.json_path.clone());
    Ok(report)
}

/// Snapshot failures are reported but do not stop the run
fn save_snapshots(indexes: &[(u8, SourceIndex)], output: &OutputConfig, report: &mut RunReport) {
    for (rank, index) in indexes {
        let path = output.snapshot_path(*rank);
        match io::write_snapshot(&path, index) {
            Ok(()) => report.written.push(path),
            Err(e) => tracing::error!("Failed to save index snapshot: {e}"),
        }
    }
}

fn load(source: &SourceConfig) -> SourceOutcome {
    (
        source.rank,
        SourceLoader::load_from_file(&source.path, source.format),
    )
}
