use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::CompilationWarning;
use crate::ports::DocumentCompiler;

/// Compiler double that either "renders" to a sibling `.pdf` or warns.
#[derive(Clone, Default)]
pub struct FakeCompiler {
    pub compiled: Arc<Mutex<Vec<PathBuf>>>,
    failure: Option<String>,
}

impl FakeCompiler {
    pub fn succeeding() -> Self {
        Self::default()
    }

    pub fn failing(detail: impl Into<String>) -> Self {
        Self { failure: Some(detail.into()), ..Self::default() }
    }

    pub fn compiled(&self) -> Vec<PathBuf> {
        self.compiled.lock().expect("compiled lock poisoned").clone()
    }
}

impl DocumentCompiler for FakeCompiler {
    fn compile(&self, document: &Path) -> Result<PathBuf, CompilationWarning> {
        self.compiled.lock().expect("compiled lock poisoned").push(document.to_path_buf());
        match &self.failure {
            Some(detail) => Err(CompilationWarning {
                document: document.to_path_buf(),
                detail: detail.clone(),
            }),
            None => Ok(document.with_extension("pdf")),
        }
    }
}
