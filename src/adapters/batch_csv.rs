//! CSV job list reader.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::inputs::parse_keyword_list;
use crate::domain::{AppError, BatchEntry, JobSpec, KeywordSource, Recruiter};

/// One CSV data row; column names match the header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchRow {
    pub company: Option<String>,
    pub role: Option<String>,
    pub template: Option<String>,
    pub job_description_file: Option<String>,
    pub pain_points: Option<String>,
    pub keywords: Option<String>,
    pub keywords_file: Option<String>,
    pub recruiter_name: Option<String>,
    pub recruiter_position: Option<String>,
    pub recruiter_email: Option<String>,
}

/// Values shared by every row of a batch.
#[derive(Debug, Clone)]
pub struct BatchDefaults {
    pub output_dir: PathBuf,
    pub model: String,
}

impl BatchRow {
    pub fn label(&self, row: usize) -> String {
        match (cell(&self.company), cell(&self.role)) {
            (Some(company), Some(role)) => format!("{} - {}", company, role),
            _ => format!("row {}", row),
        }
    }

    /// Build the job for this row; a blank required cell is `MissingInput`.
    pub fn into_job_spec(self, defaults: &BatchDefaults) -> Result<JobSpec, AppError> {
        let missing: Vec<&str> = [
            ("company", &self.company),
            ("role", &self.role),
            ("template", &self.template),
            ("job_description_file", &self.job_description_file),
        ]
        .into_iter()
        .filter(|(_, value)| cell(value).is_none())
        .map(|(name, _)| name)
        .collect();

        if !missing.is_empty() {
            return Err(AppError::missing_input(
                missing.join(", "),
                "required column value is empty",
            ));
        }

        let mut spec = JobSpec::new(
            required(&self.template),
            required(&self.company),
            required(&self.role),
            required(&self.job_description_file),
            defaults.output_dir.clone(),
            defaults.model.clone(),
        );

        if let Some(path) = cell(&self.pain_points) {
            spec = spec.with_pain_points(path);
        }

        let inline = cell(&self.keywords).map(parse_keyword_list).filter(|kws| !kws.is_empty());
        if let Some(keywords) = inline {
            spec = spec.with_keywords(KeywordSource::Inline(keywords));
        } else if let Some(path) = cell(&self.keywords_file) {
            spec = spec.with_keywords(KeywordSource::File(PathBuf::from(path)));
        }

        if cell(&self.recruiter_name).is_some() {
            spec = spec.with_message(Recruiter {
                name: self.recruiter_name,
                position: self.recruiter_position,
                email: self.recruiter_email,
            });
        }

        Ok(spec)
    }
}

/// Read every data row of `path` in file order.
///
/// A file that cannot be opened, has no header or no data rows is a
/// `BatchInput` error. Malformed individual rows become failed entries.
pub fn read_batch(path: &Path, defaults: &BatchDefaults) -> Result<Vec<BatchEntry>, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| AppError::BatchInput(format!("{}: {}", path.display(), e)))?;

    reader
        .headers()
        .map_err(|e| AppError::BatchInput(format!("{}: {}", path.display(), e)))?;

    let entries: Vec<BatchEntry> = reader
        .deserialize::<BatchRow>()
        .enumerate()
        .map(|(index, record)| {
            let row = index + 1;
            match record {
                Ok(batch_row) => BatchEntry {
                    label: batch_row.label(row),
                    spec: batch_row.into_job_spec(defaults),
                },
                Err(e) => BatchEntry {
                    label: format!("row {}", row),
                    spec: Err(AppError::BatchInput(format!("row {}: {}", row, e))),
                },
            }
        })
        .collect();

    if entries.is_empty() {
        return Err(AppError::BatchInput(format!("No jobs found in {}", path.display())));
    }
    Ok(entries)
}

fn cell(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn required(value: &Option<String>) -> String {
    cell(value).unwrap_or_default().to_string()
}
