use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::SourceReader;

/// Reads sources straight from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemSourceReader;

impl SourceReader for FilesystemSourceReader {
    fn read_text(&self, source: &Path) -> Result<String, AppError> {
        fs::read_to_string(source).map_err(|err| AppError::SourceRead {
            source_id: source.display().to_string(),
            kind: err.kind(),
            reason: err.to_string(),
        })
    }
}
