//! `pdflatex` subprocess compiler.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::domain::{CompilationWarning, CompileConfig};
use crate::ports::DocumentCompiler;

const LOG_TAIL_CHARS: usize = 500;
const AUXILIARY_EXTENSIONS: [&str; 3] = ["aux", "log", "out"];
const TRACKED_PACKAGES: [&str; 5] = ["fontawesome", "xcolor", "hyperref", "geometry", "titlesec"];

/// Runs a LaTeX engine in non-interactive mode next to the document.
#[derive(Debug, Clone)]
pub struct PdfLatexCompiler {
    program: String,
    passes: u32,
}

impl PdfLatexCompiler {
    pub fn new(program: impl Into<String>, passes: u32) -> Self {
        Self { program: program.into(), passes: passes.max(1) }
    }

    pub fn from_config(config: &CompileConfig) -> Self {
        Self::new(config.program.clone(), config.passes)
    }

    fn run_pass(&self, document: &Path, workdir: &Path) -> Result<(), String> {
        let output = Command::new(&self.program)
            .arg("-interaction=nonstopmode")
            .arg("-halt-on-error")
            .arg(format!("-output-directory={}", workdir.display()))
            .arg(document)
            .output()
            .map_err(|e| format!("{} could not be started: {}", self.program, e))?;

        if output.status.success() {
            return Ok(());
        }

        let log = if output.stderr.is_empty() {
            String::from_utf8_lossy(&output.stdout).into_owned()
        } else {
            String::from_utf8_lossy(&output.stderr).into_owned()
        };
        let missing = missing_packages(&log);
        let mut detail = format!("{} exited with {}", self.program, output.status);
        if !missing.is_empty() {
            detail.push_str(&format!("; missing LaTeX packages: {}", missing.join(", ")));
        }
        let tail = log_tail(&log);
        if !tail.is_empty() {
            detail.push_str(&format!("\n{}", tail));
        }
        Err(detail)
    }
}

impl DocumentCompiler for PdfLatexCompiler {
    fn compile(&self, document: &Path) -> Result<PathBuf, CompilationWarning> {
        let warning = |detail: String| CompilationWarning { document: document.to_path_buf(), detail };
        let workdir = match document.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let mut outcome = Ok(());
        for pass in 1..=self.passes {
            debug!(pass, passes = self.passes, document = %document.display(), "Running LaTeX pass");
            outcome = self.run_pass(document, &workdir);
            if outcome.is_err() {
                break;
            }
        }
        remove_auxiliary_files(document);
        outcome.map_err(warning)?;

        let rendered = document.with_extension("pdf");
        if !rendered.exists() {
            return Err(warning(format!(
                "{} finished without producing {}",
                self.program,
                rendered.display()
            )));
        }
        info!(rendered = %rendered.display(), "Compiled document");
        Ok(rendered)
    }
}

/// Known packages reported as absent in a LaTeX log.
pub fn missing_packages(log: &str) -> Vec<&'static str> {
    TRACKED_PACKAGES
        .into_iter()
        .filter(|package| log.contains(&format!("File `{}.sty' not found", package)))
        .collect()
}

fn log_tail(log: &str) -> String {
    let trimmed = log.trim();
    let count = trimmed.chars().count();
    trimmed.chars().skip(count.saturating_sub(LOG_TAIL_CHARS)).collect()
}

fn remove_auxiliary_files(document: &Path) {
    for ext in AUXILIARY_EXTENSIONS {
        let aux = document.with_extension(ext);
        if aux.exists() && fs::remove_file(&aux).is_err() {
            debug!(file = %aux.display(), "Could not remove auxiliary file");
        }
    }
}
