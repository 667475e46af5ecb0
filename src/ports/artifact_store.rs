use std::path::Path;

use crate::domain::AppError;

/// Destination for output artifacts.
pub trait ArtifactStore {
    /// Ensure `dir` exists.
    fn prepare_dir(&self, dir: &Path) -> Result<(), AppError>;

    /// Write `content` to `path`, replacing any previous artifact.
    ///
    /// Either the write completes or the previous state of `path` is left
    /// untouched; failures surface as `ArtifactWrite`.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;
}
