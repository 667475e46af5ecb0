use std::path::Path;

use crate::domain::AppError;

/// Resolves a source identifier to its text content.
pub trait SourceReader {
    /// Read the whole source as UTF-8 text.
    ///
    /// Fails with `SourceRead` when the source cannot be read, carrying the
    /// underlying `io::ErrorKind` so callers can tell "absent" from "broken".
    fn read_text(&self, source: &Path) -> Result<String, AppError>;
}
