//! Job runner: one pass of aggregate, compose, generate, materialize.

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::{aggregate, materialize};
use crate::domain::latex::clean_generated_latex;
use crate::domain::prompt::compose_tailoring_request;
use crate::domain::{
    AppError, ArtifactBase, GenerationError, GenerationErrorKind, GenerationRequest, JobSpec,
    OutputArtifacts,
};
use crate::ports::{ArtifactStore, DocumentCompiler, GenerationClient, SourceReader};

/// Run one job end to end.
///
/// Validation happens before any generation call; any failure aborts the job
/// with its original kind.
pub fn execute<S, G, C, A>(
    ctx: &AppContext<S, G, C, A>,
    spec: &JobSpec,
) -> Result<OutputArtifacts, AppError>
where
    S: SourceReader,
    G: GenerationClient,
    C: DocumentCompiler,
    A: ArtifactStore,
{
    let base = validate(spec)?;

    let inputs = aggregate::execute(ctx.sources(), spec)?;
    let request = compose_tailoring_request(&inputs, &spec.company, &spec.role)?;

    info!(job = %spec.label(), model = %spec.model, "Requesting tailored document");
    let raw = ctx.generator().generate(&request, &spec.model)?;
    let document = clean_generated_latex(&raw);
    if document.is_empty() {
        return Err(GenerationError::new(
            GenerationErrorKind::EmptyResponse,
            "Response contained no document after cleaning",
        )
        .into());
    }

    materialize::execute(
        ctx,
        spec,
        &base,
        materialize::Generated { document: &document, job_description: &inputs.job_description },
    )
}

/// Compose the tailoring request without calling the generation capability.
pub fn preview<S: SourceReader>(sources: &S, spec: &JobSpec) -> Result<GenerationRequest, AppError> {
    validate(spec)?;
    let inputs = aggregate::execute(sources, spec)?;
    compose_tailoring_request(&inputs, &spec.company, &spec.role)
}

fn validate(spec: &JobSpec) -> Result<ArtifactBase, AppError> {
    if spec.wants_message && spec.recruiter.name().is_none() {
        return Err(AppError::missing_input(
            "recruiter_name",
            "required when a recruiter message is requested",
        ));
    }
    ArtifactBase::new(&spec.company, &spec.role)
}
