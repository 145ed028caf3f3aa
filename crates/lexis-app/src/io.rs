use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;

use lexis_config::output::OutputConfig;
use lexis_core::output::text_line;
use lexis_core::{MasterList, ResolvedEntry, Resolver, SourceIndex, Summary};
use serde::Serialize;

use crate::error::PipelineError;

/// Read the master headword list; its absence is fatal
pub fn read_master_list(path: &Path) -> Result<MasterList, PipelineError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            PipelineError::MasterListMissing {
                path: path.to_path_buf(),
            }
        } else {
            PipelineError::MasterListIo {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let master = MasterList::from_text(&text);
    tracing::info!("Read {} lines from {}", master.len(), path.display());
    Ok(master)
}

/// Resolve the master list and write both vocabulary files
pub fn write_vocabulary(
    resolver: &Resolver,
    master: &MasterList,
    output: &OutputConfig,
) -> Result<Summary, PipelineError> {
    let mut summary = Summary::default();
    let mut records: Vec<ResolvedEntry> = Vec::with_capacity(master.len());

    let path = output.text_path.as_path();
    let io_err = |source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(create(path).map_err(io_err)?);
    for entry in resolver.resolve(master) {
        summary.record(&entry);
        write!(writer, "{}\n\n", text_line(&entry)).map_err(io_err)?;
        records.push(entry);
    }
    writer.flush().map_err(io_err)?;
    tracing::info!("Wrote text vocabulary to {}", path.display());

    write_json(&output.json_path, &records)?;
    tracing::info!("Wrote JSON vocabulary to {}", output.json_path.display());

    Ok(summary)
}

/// Persist one source index as `{headword: {pronunciation, definition}}`
pub fn write_snapshot(path: &Path, index: &SourceIndex) -> Result<(), PipelineError> {
    write_json(path, index)?;
    tracing::debug!("Saved index snapshot to {}", path.display());
    Ok(())
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), PipelineError> {
    let io_err = |source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(create(path).map_err(io_err)?);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| PipelineError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    writer.flush().map_err(io_err)
}

fn create(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    File::create(path)
}
