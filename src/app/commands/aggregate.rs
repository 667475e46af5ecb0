//! Input aggregation: resolve every source a job references.

use std::io;
use std::path::Path;

use tracing::debug;

use crate::domain::inputs::parse_keyword_lines;
use crate::domain::{AggregatedInputs, AppError, JobSpec, KeywordSource};
use crate::ports::SourceReader;

/// Load the template, job description, pain points and keywords for `spec`.
///
/// Template and job description are mandatory: an absent or blank source is
/// `MissingInput`. Optional sources that are referenced must be readable.
pub fn execute<S: SourceReader>(sources: &S, spec: &JobSpec) -> Result<AggregatedInputs, AppError> {
    let template = read_mandatory(sources, "template", &spec.template)?;
    let job_description = read_mandatory(sources, "job_description", &spec.job_description)?;

    let mut inputs = AggregatedInputs::new(template, job_description.trim());

    if let Some(path) = &spec.pain_points {
        inputs = inputs.with_pain_points(sources.read_text(path)?);
    }

    let keywords = match &spec.keywords {
        Some(KeywordSource::Inline(list)) => list.clone(),
        Some(KeywordSource::File(path)) => parse_keyword_lines(&sources.read_text(path)?),
        None => Vec::new(),
    };
    inputs = inputs.with_keywords(keywords);

    debug!(
        template_chars = inputs.template.len(),
        has_pain_points = inputs.pain_points.is_some(),
        keywords = inputs.keywords.len(),
        "Aggregated inputs"
    );
    Ok(inputs)
}

fn read_mandatory<S: SourceReader>(
    sources: &S,
    field: &str,
    path: &Path,
) -> Result<String, AppError> {
    let text = sources.read_text(path).map_err(|err| match err {
        AppError::SourceRead { kind: io::ErrorKind::NotFound, source_id, .. } => {
            AppError::missing_input(field, format!("{} not found", source_id))
        }
        other => other,
    })?;

    if text.trim().is_empty() {
        return Err(AppError::missing_input(field, format!("{} is empty", path.display())));
    }
    Ok(text)
}
