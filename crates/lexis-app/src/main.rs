use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use lexis_config::Config;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod error;
pub mod io;
pub mod status;


use self::controller::PipelineController;
use self::status::RunReport;

/// Merge dictionary sources into one vocabulary keyed by a master headword list
#[derive(Parser, Debug)]
#[command(name = "lexis", version)]
struct Args {
    /// JSON config file; defaults are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Master headword list
    #[arg(long)]
    master_list: Option<PathBuf>,

    /// Text vocabulary output
    #[arg(long)]
    output_txt: Option<PathBuf>,

    /// JSON vocabulary output
    #[arg(long)]
    output_json: Option<PathBuf>,

    /// Directory for index_<rank>.json snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,

    /// Do not write index snapshots
    #[arg(long)]
    no_snapshots: bool,

    /// Parse sources one after another
    #[arg(long)]
    sequential: bool,

    /// Enable the source with this rank (repeatable)
    #[arg(long = "enable-source", value_name = "RANK")]
    enable: Vec<u8>,

    /// Disable the source with this rank (repeatable)
    #[arg(long = "disable-source", value_name = "RANK")]
    disable: Vec<u8>,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.json_logs);

    match run(args).await {
        Ok(report) => {
            report.log();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

async fn run(args: Args) -> anyhow::Result<RunReport> {
    let config = build_config(&args)?;
    config.validate().context("invalid source table")?;

    PipelineController::new(config)
        .run()
        .await
        .context("vocabulary build aborted")
}

/// Defaults or config file, then environment, then command line
fn build_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            let mut config = Config::load(path)?;
            config.apply_env(|key| std::env::var(key).ok())?;
            config
        }
        None => Config::new()?,
    };

    if let Some(path) = &args.master_list {
        config.master_list = path.clone();
    }
    if let Some(path) = &args.output_txt {
        config.output.text_path = path.clone();
    }
    if let Some(path) = &args.output_json {
        config.output.json_path = path.clone();
    }
    if let Some(dir) = &args.snapshot_dir {
        config.output.snapshot_dir = dir.clone();
    }
    if args.no_snapshots {
        config.output.write_snapshots = false;
    }
    if args.sequential {
        config.parallel = false;
    }
    for (ranks, enabled) in [(&args.enable, true), (&args.disable, false)] {
        for &rank in ranks {
            if !config.set_enabled(rank, enabled) {
                anyhow::bail!("no source with rank {rank} in the source table");
            }
        }
    }

    Ok(config)
}
