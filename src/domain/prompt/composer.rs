//! Request composition for the tailored document.

use minijinja::context;

use super::request::{GenerationRequest, PromptSection, RequestPurpose, render_sections};
use super::template::{self, TAILOR_INSTRUCTIONS, TAILOR_SYSTEM};
use crate::domain::{AggregatedInputs, AppError};

pub const INSTRUCTIONS_TITLE: &str = "INSTRUCTIONS";
pub const TEMPLATE_TITLE: &str = "RÉSUMÉ (LaTeX source)";
pub const JOB_DESCRIPTION_TITLE: &str = "JOB DESCRIPTION";
pub const PAIN_POINTS_TITLE: &str = "PAIN POINTS";
pub const KEYWORDS_TITLE: &str = "KEYWORDS";

/// Build the generation request for one job.
///
/// Sections appear as instructions, template, job description, then pain
/// points and keywords when supplied. Absent optional inputs contribute
/// neither a section nor an instruction clause. The result is a pure function
/// of its arguments.
pub fn compose_tailoring_request(
    inputs: &AggregatedInputs,
    company: &str,
    role: &str,
) -> Result<GenerationRequest, AppError> {
    let system = template::render(TAILOR_SYSTEM, context! {})?;
    let sections = tailoring_sections(inputs, company, role)?;

    Ok(GenerationRequest {
        purpose: RequestPurpose::Document,
        system,
        prompt: render_sections(&sections),
    })
}

/// Ordered sections of the tailoring prompt.
pub fn tailoring_sections(
    inputs: &AggregatedInputs,
    company: &str,
    role: &str,
) -> Result<Vec<PromptSection>, AppError> {
    let instructions = render_instructions(inputs, company, role)?;

    let optional = [
        inputs.pain_points.as_ref().map(|text| PromptSection::new(PAIN_POINTS_TITLE, text.as_str())),
        (!inputs.keywords.is_empty())
            .then(|| PromptSection::new(KEYWORDS_TITLE, keyword_lines(&inputs.keywords))),
    ];

    let sections = [
        PromptSection::new(INSTRUCTIONS_TITLE, instructions),
        PromptSection::new(TEMPLATE_TITLE, inputs.template.as_str()),
        PromptSection::new(JOB_DESCRIPTION_TITLE, inputs.job_description.as_str()),
    ]
    .into_iter()
    .chain(optional.into_iter().flatten())
    .collect();

    Ok(sections)
}

/// Instruction text with clauses only for the inputs that are present.
pub fn render_instructions(
    inputs: &AggregatedInputs,
    company: &str,
    role: &str,
) -> Result<String, AppError> {
    let has_pain_points = inputs.pain_points.is_some();
    let has_keywords = !inputs.keywords.is_empty();
    let keyword_step = if has_pain_points { 5 } else { 4 };

    template::render(
        TAILOR_INSTRUCTIONS,
        context! {
            company => company.trim(),
            role => role.trim(),
            has_pain_points => has_pain_points,
            has_keywords => has_keywords,
            keyword_step => keyword_step,
        },
    )
}

fn keyword_lines(keywords: &[String]) -> String {
    keywords.iter().map(|kw| format!("- {}", kw)).collect::<Vec<_>>().join("\n")
}
