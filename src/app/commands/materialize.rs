//! Output materialization: document, optional rendering, optional message.

use tracing::{info, warn};

use crate::app::AppContext;
use crate::domain::latex::extract_subject;
use crate::domain::prompt::{MessageContext, compose_message_request};
use crate::domain::{
    AppError, ArtifactBase, GenerationError, GenerationErrorKind, JobSpec, OutputArtifacts,
};
use crate::ports::{ArtifactStore, DocumentCompiler, GenerationClient, SourceReader};

/// Cleaned document text plus the context needed for the message.
#[derive(Debug, Clone, Copy)]
pub struct Generated<'a> {
    pub document: &'a str,
    pub job_description: &'a str,
}

/// Write the artifacts for one job.
///
/// Compilation failures are recorded as warnings. The message is generated
/// only when the job asks for it.
pub fn execute<S, G, C, A>(
    ctx: &AppContext<S, G, C, A>,
    spec: &JobSpec,
    base: &ArtifactBase,
    generated: Generated<'_>,
) -> Result<OutputArtifacts, AppError>
where
    S: SourceReader,
    G: GenerationClient,
    C: DocumentCompiler,
    A: ArtifactStore,
{
    let dir = spec.output_dir();
    ctx.store().prepare_dir(dir)?;

    let document_path = base.document_path(dir, spec.document_extension());
    ctx.store().write_text(&document_path, generated.document)?;
    info!(path = %document_path.display(), "Wrote tailored document");

    let mut artifacts = OutputArtifacts::new(document_path.clone());

    if let Some(compiler) = ctx.compiler() {
        match compiler.compile(&document_path) {
            Ok(rendered) => artifacts.rendered = Some(rendered),
            Err(warning) => {
                warn!(%warning, "Compilation failed");
                artifacts.warnings.push(warning);
            }
        }
    }

    if spec.wants_message {
        let request = compose_message_request(MessageContext {
            company: &spec.company,
            role: &spec.role,
            job_description: generated.job_description,
            document: generated.document,
            recruiter: &spec.recruiter,
            sender: ctx.sender(),
        })?;

        let text = ctx.generator().generate(&request, &spec.model)?;
        let message = text.trim();
        if message.is_empty() {
            return Err(GenerationError::new(
                GenerationErrorKind::EmptyResponse,
                "Message response was empty",
            )
            .into());
        }

        let message_path = base.message_path(dir);
        ctx.store().write_text(&message_path, &format!("{}\n", message))?;
        info!(path = %message_path.display(), "Wrote recruiter message");

        artifacts.subject = Some(extract_subject(message));
        artifacts.message = Some(message_path);
    }

    Ok(artifacts)
}
