/// Resolved text content for a single job.
///
/// Optional inputs are explicit `Option`s: `None` means "not supplied", never
/// an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedInputs {
    pub template: String,
    pub job_description: String,
    pub pain_points: Option<String>,
    pub keywords: Vec<String>,
}

impl AggregatedInputs {
    pub fn new(template: impl Into<String>, job_description: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            job_description: job_description.into(),
            pain_points: None,
            keywords: Vec::new(),
        }
    }

    /// Attach pain points; blank text counts as not supplied.
    pub fn with_pain_points(mut self, text: impl Into<String>) -> Self {
        self.pain_points = non_blank(text.into());
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Trimmed text, or `None` when nothing but whitespace remains.
pub fn non_blank(text: String) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Split keyword text into entries: one per line, blank lines dropped.
pub fn parse_keyword_lines(content: &str) -> Vec<String> {
    content.lines().map(str::trim).filter(|line| !line.is_empty()).map(String::from).collect()
}

/// Split an inline, comma-separated keyword cell.
pub fn parse_keyword_list(cell: &str) -> Vec<String> {
    cell.split(',').map(str::trim).filter(|kw| !kw.is_empty()).map(String::from).collect()
}
