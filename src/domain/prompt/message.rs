//! Request composition for the recruiter message.

use minijinja::context;

use super::request::{GenerationRequest, PromptSection, RequestPurpose, render_sections};
use super::template::{self, MESSAGE_INSTRUCTIONS, MESSAGE_SYSTEM};
use crate::domain::configuration::SenderIdentity;
use crate::domain::latex::latex_to_plain_text;
use crate::domain::{AppError, Recruiter};

pub const ROLE_CONTEXT_TITLE: &str = "ABOUT THE COMPANY AND ROLE";
pub const BACKGROUND_TITLE: &str = "MY BACKGROUND (from the résumé)";

/// Inputs for the recruiter message.
#[derive(Debug, Clone, Copy)]
pub struct MessageContext<'a> {
    pub company: &'a str,
    pub role: &'a str,
    pub job_description: &'a str,
    /// Tailored LaTeX document the message accompanies.
    pub document: &'a str,
    pub recruiter: &'a Recruiter,
    pub sender: &'a SenderIdentity,
}

/// Build the request for the accompanying message.
///
/// Fails with `MissingInput` when the recruiter name is absent.
pub fn compose_message_request(ctx: MessageContext<'_>) -> Result<GenerationRequest, AppError> {
    let recruiter_name = ctx.recruiter.name().ok_or_else(|| {
        AppError::missing_input("recruiter_name", "required when a recruiter message is requested")
    })?;

    let instructions = template::render(
        MESSAGE_INSTRUCTIONS,
        context! {
            company => ctx.company.trim(),
            role => ctx.role.trim(),
            recruiter_name => recruiter_name,
            recruiter_position => ctx.recruiter.position(),
            recruiter_email => ctx.recruiter.email(),
            sender_name => ctx.sender.name(),
            sender_email => ctx.sender.email(),
        },
    )?;

    let sections = [
        PromptSection::new("TASK", instructions),
        PromptSection::new(ROLE_CONTEXT_TITLE, ctx.job_description),
        PromptSection::new(BACKGROUND_TITLE, latex_to_plain_text(ctx.document)),
    ];

    Ok(GenerationRequest {
        purpose: RequestPurpose::Message,
        system: template::render(MESSAGE_SYSTEM, context! {})?,
        prompt: render_sections(&sections),
    })
}
