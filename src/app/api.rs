//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use crate::adapters::batch_csv::{self, BatchDefaults};
use crate::adapters::filesystem::{FilesystemArtifactStore, FilesystemSourceReader};
use crate::adapters::generation_client::{
    HttpGenerationClient, RetryPolicy, RetryingGenerationClient,
};
use crate::adapters::pdflatex::PdfLatexCompiler;
use crate::app::AppContext;
use crate::app::commands::{batch, job};
use crate::domain::{GenerationError, GenerationErrorKind};
use crate::ports::ArtifactStore;

pub use crate::domain::{
    AppError, BatchExitPolicy, BatchRunReport, GenerationRequest, JobSpec, OutputArtifacts,
    RowOutcome, TailorConfig,
};

/// Environment variable holding the generation service credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_OUTPUT_SUBDIR: &str = "script_resumes";

type ProductionContext = AppContext<
    FilesystemSourceReader,
    RetryingGenerationClient,
    PdfLatexCompiler,
    FilesystemArtifactStore,
>;

/// Read the API key once; absence is an authentication failure.
pub fn api_key_from_env() -> Result<String, AppError> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            GenerationError::new(
                GenerationErrorKind::Auth,
                format!("{} is not set", API_KEY_ENV),
            )
            .into()
        })
}

/// Output directory: explicit flag, then config, then `<Desktop>/script_resumes`,
/// then the current directory.
pub fn resolve_output_dir(
    flag: Option<PathBuf>,
    config: &TailorConfig,
) -> Result<PathBuf, AppError> {
    if let Some(dir) = flag.or_else(|| config.output.directory.clone()) {
        return Ok(dir);
    }
    match dirs::desktop_dir() {
        Some(desktop) => Ok(desktop.join(DEFAULT_OUTPUT_SUBDIR)),
        None => Ok(std::env::current_dir()?),
    }
}

/// Model for this run: the flag when given, else the configured model.
pub fn resolve_model(flag: Option<String>, config: &TailorConfig) -> Result<String, AppError> {
    match flag {
        Some(model) if model.trim().is_empty() => {
            Err(AppError::InvalidConfig("--model must not be empty".to_string()))
        }
        Some(model) => Ok(model.trim().to_string()),
        None => Ok(config.generation.model.clone()),
    }
}

/// Execution switches that come from the command line.
#[derive(Debug, Clone, Copy)]
pub struct RunSwitches {
    pub compile: bool,
}

fn create_context(
    config: &TailorConfig,
    api_key: String,
    switches: RunSwitches,
) -> Result<ProductionContext, AppError> {
    let http = HttpGenerationClient::new(api_key, &config.generation)?;
    let generator =
        RetryingGenerationClient::new(Box::new(http), RetryPolicy::from_config(&config.generation));
    let compiler = (switches.compile && config.compile.enabled)
        .then(|| PdfLatexCompiler::from_config(&config.compile));

    Ok(AppContext::new(FilesystemSourceReader, generator, compiler, FilesystemArtifactStore)
        .with_sender(config.message.clone()))
}

/// Tailor a single job.
pub fn run_job(
    spec: &JobSpec,
    config: &TailorConfig,
    api_key: String,
    switches: RunSwitches,
) -> Result<OutputArtifacts, AppError> {
    let ctx = create_context(config, api_key, switches)?;
    job::execute(&ctx, spec)
}

/// Compose the tailoring request for `spec` without sending it.
pub fn preview(spec: &JobSpec) -> Result<GenerationRequest, AppError> {
    job::preview(&FilesystemSourceReader, spec)
}

/// Run every row of a CSV job list.
///
/// Only an unreadable or empty CSV fails the call; row failures are recorded
/// in the report.
pub fn run_batch<F>(
    csv_path: &Path,
    defaults: &BatchDefaults,
    config: &TailorConfig,
    api_key: String,
    switches: RunSwitches,
    on_outcome: F,
) -> Result<BatchRunReport, AppError>
where
    F: FnMut(&RowOutcome),
{
    let entries = batch_csv::read_batch(csv_path, defaults)?;
    let ctx = create_context(config, api_key, switches)?;
    Ok(batch::execute(&ctx, entries, on_outcome))
}

/// Write the batch report as pretty JSON.
pub fn write_report(path: &Path, report: &BatchRunReport) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(report).map_err(|e| AppError::ArtifactWrite {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let store = FilesystemArtifactStore;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        store.prepare_dir(parent)?;
    }
    store.write_text(path, &format!("{}\n", json))
}
