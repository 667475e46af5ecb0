/// What a generation request is for; adapters size their response budget from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPurpose {
    /// The tailored document itself.
    Document,
    /// The accompanying recruiter message.
    Message,
}

/// A single instruction-plus-content payload for the generation capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub purpose: RequestPurpose,
    /// Role framing for the model.
    pub system: String,
    /// Instructions followed by every supplied input, in fixed order.
    pub prompt: String,
}

/// One titled block of the composed prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSection {
    pub title: &'static str,
    pub body: String,
}

impl PromptSection {
    pub fn new(title: &'static str, body: impl Into<String>) -> Self {
        Self { title, body: body.into() }
    }
}

/// Concatenate sections in the order given.
///
/// Each section renders as `### TITLE\n<body>\n`; sections are separated by
/// a blank line. Bodies are copied byte-for-byte.
pub fn render_sections<'a, I>(sections: I) -> String
where
    I: IntoIterator<Item = &'a PromptSection>,
{
    sections
        .into_iter()
        .map(|section| format!("### {}\n{}\n", section.title, section.body))
        .collect::<Vec<_>>()
        .join("\n")
}
