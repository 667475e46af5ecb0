//! Job specification: the complete description of one tailoring request.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Where the keyword list for a job comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeywordSource {
    /// Keywords supplied directly (command line or CSV column).
    Inline(Vec<String>),
    /// A file with one keyword per line.
    File(PathBuf),
}

/// Recruiter details used for the accompanying message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recruiter {
    pub name: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
}

impl Recruiter {
    /// Recruiter name with surrounding whitespace removed, if non-empty.
    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn position(&self) -> Option<&str> {
        non_blank(self.position.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// One tailoring request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSpec {
    pub template: PathBuf,
    pub company: String,
    pub role: String,
    pub job_description: PathBuf,
    pub pain_points: Option<PathBuf>,
    pub keywords: Option<KeywordSource>,
    pub output_dir: PathBuf,
    pub model: String,
    pub recruiter: Recruiter,
    /// Whether an accompanying recruiter message should be produced.
    pub wants_message: bool,
}

impl JobSpec {
    pub fn new(
        template: impl Into<PathBuf>,
        company: impl Into<String>,
        role: impl Into<String>,
        job_description: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            template: template.into(),
            company: company.into(),
            role: role.into(),
            job_description: job_description.into(),
            pain_points: None,
            keywords: None,
            output_dir: output_dir.into(),
            model: model.into(),
            recruiter: Recruiter::default(),
            wants_message: false,
        }
    }

    pub fn with_pain_points(mut self, path: impl Into<PathBuf>) -> Self {
        self.pain_points = Some(path.into());
        self
    }

    pub fn with_keywords(mut self, source: KeywordSource) -> Self {
        self.keywords = Some(source);
        self
    }

    pub fn with_message(mut self, recruiter: Recruiter) -> Self {
        self.recruiter = recruiter;
        self.wants_message = true;
        self
    }

    /// Human-readable identifier used in reports and progress output.
    pub fn label(&self) -> String {
        format!("{} - {}", self.company.trim(), self.role.trim())
    }

    /// Extension of the template file, used for the tailored document.
    pub fn document_extension(&self) -> &str {
        self.template.extension().and_then(|ext| ext.to_str()).unwrap_or("tex")
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

/// Locations of the files produced for one job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputArtifacts {
    pub document: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<PathBuf>,
    /// Subject line found in the generated message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<CompilationWarning>,
}

/// Non-fatal failure to render the tailored document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilationWarning {
    pub document: PathBuf,
    pub detail: String,
}

impl OutputArtifacts {
    pub fn new(document: impl Into<PathBuf>) -> Self {
        Self {
            document: document.into(),
            rendered: None,
            message: None,
            subject: None,
            warnings: Vec::new(),
        }
    }
}

impl std::fmt::Display for CompilationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Could not compile {}: {}", self.document.display(), self.detail)
    }
}
