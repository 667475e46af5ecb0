//! tailor: rewrite a LaTeX résumé for a specific job posting.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    API_KEY_ENV, BatchRunReport, GenerationRequest, JobSpec, OutputArtifacts, RunSwitches,
    preview, run_batch, run_job,
};
pub use domain::AppError;
