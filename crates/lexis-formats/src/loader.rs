use std::path::Path;

use lexis_core::dictionary::{SourceError, SourceIndex};
use lexis_core::types::SourceFormat;

use crate::loaders::parser_for;

pub struct SourceLoader;

impl SourceLoader {
    /// Read and parse a source file
    pub fn load_from_file(path: &Path, format: SourceFormat) -> Result<SourceIndex, SourceError> {
        let parser = parser_for(format);
        tracing::info!("Building {} index from {}", parser.name(), path.display());
        let text = std::fs::read_to_string(path).map_err(|e| SourceError::from_io(path, e))?;
        let index = parser.parse(&text);
        tracing::info!("Indexed {} headwords from {}", index.len(), path.display());
        Ok(index)
    }
}
