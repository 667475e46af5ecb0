use std::path::{Path, PathBuf};

use crate::domain::CompilationWarning;

/// Best-effort rendering of a written document.
pub trait DocumentCompiler {
    /// Render `document` next to itself.
    ///
    /// Returns the rendered file on success. Every failure is a warning, never
    /// an error: the document itself has already been produced.
    fn compile(&self, document: &Path) -> Result<PathBuf, CompilationWarning>;
}
