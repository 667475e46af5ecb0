//! Per-row outcomes of a batch run.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{AppError, FailureKind, JobSpec, OutputArtifacts};

/// A parsed batch row, or the reason it could not be parsed.
#[derive(Debug)]
pub struct BatchEntry {
    /// "Company - Role" when both are present, else `row N`.
    pub label: String,
    pub spec: Result<JobSpec, AppError>,
}

/// Result of one batch row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowOutcome {
    /// 1-based data row index in the batch input.
    pub row: usize,
    /// "Company - Role" when known, else the row reference.
    pub job: String,
    #[serde(flatten)]
    pub status: RowStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RowStatus {
    Succeeded { artifacts: OutputArtifacts },
    Failed { kind: FailureKind, message: String },
}

impl RowOutcome {
    pub fn succeeded(row: usize, job: impl Into<String>, artifacts: OutputArtifacts) -> Self {
        Self { row, job: job.into(), status: RowStatus::Succeeded { artifacts } }
    }

    pub fn failed(row: usize, job: impl Into<String>, error: &AppError) -> Self {
        Self {
            row,
            job: job.into(),
            status: RowStatus::Failed { kind: error.kind(), message: error.to_string() },
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.status, RowStatus::Succeeded { .. })
    }
}

/// Ordered outcomes, one per input row.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRunReport {
    pub generated_at: DateTime<Utc>,
    pub outcomes: Vec<RowOutcome>,
}

impl Default for BatchRunReport {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchRunReport {
    pub fn new() -> Self {
        Self { generated_at: Utc::now(), outcomes: Vec::new() }
    }

    pub fn push(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn exit_code(&self, policy: BatchExitPolicy) -> i32 {
        if policy.passes(self) { 0 } else { 1 }
    }
}

/// How a batch report maps to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BatchExitPolicy {
    /// Success when at least one row succeeded.
    #[default]
    AnySuccess,
    /// Success only when every row succeeded.
    AllSucceeded,
}

impl BatchExitPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict { BatchExitPolicy::AllSucceeded } else { BatchExitPolicy::AnySuccess }
    }

    fn passes(self, report: &BatchRunReport) -> bool {
        match self {
            BatchExitPolicy::AnySuccess => report.succeeded() > 0,
            BatchExitPolicy::AllSucceeded => {
                !report.outcomes.is_empty() && report.failed() == 0
            }
        }
    }
}
