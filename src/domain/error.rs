use std::fmt;
use std::io;
use std::time::Duration;

use serde::Serialize;
use thiserror::Error;

/// Library-wide error type for tailoring operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure outside of source resolution and artifact writes.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// A required input is absent or empty.
    #[error("Missing required input '{field}': {detail}")]
    MissingInput { field: String, detail: String },

    /// A referenced source exists but could not be read.
    #[error("Failed to read '{source_id}': {reason}")]
    SourceRead { source_id: String, kind: io::ErrorKind, reason: String },

    /// The generation capability failed.
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// An output artifact could not be written.
    #[error("Failed to write artifact {path}: {reason}")]
    ArtifactWrite { path: String, reason: String },

    /// An embedded prompt template failed to render.
    #[error("Prompt assembly failed for {template}: {reason}")]
    PromptAssembly { template: String, reason: String },

    /// The batch input could not be read or parsed.
    #[error("Invalid batch input: {0}")]
    BatchInput(String),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Configuration values failed validation.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn missing_input(field: impl Into<String>, detail: impl Into<String>) -> Self {
        AppError::MissingInput { field: field.into(), detail: detail.into() }
    }

    /// Classification used when reporting a failure without inspecting internals.
    pub fn kind(&self) -> FailureKind {
        match self {
            AppError::Io(_) => FailureKind::Io,
            AppError::MissingInput { .. } => FailureKind::MissingInput,
            AppError::SourceRead { .. } => FailureKind::SourceRead,
            AppError::Generation(err) => FailureKind::Generation(err.kind),
            AppError::ArtifactWrite { .. } => FailureKind::ArtifactWrite,
            AppError::BatchInput(_) => FailureKind::BatchInput,
            AppError::Configuration(_)
            | AppError::InvalidConfig(_)
            | AppError::TomlParse(_)
            | AppError::PromptAssembly { .. } => FailureKind::Configuration,
        }
    }
}

/// Classified failure of the generation capability.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Generation failed ({kind}): {message}")]
pub struct GenerationError {
    pub kind: GenerationErrorKind,
    pub message: String,
    /// HTTP status, when the failure came from a response.
    pub status: Option<u16>,
    /// Wait requested by the service before the next attempt.
    pub retry_after: Option<Duration>,
}

impl GenerationError {
    pub fn new(kind: GenerationErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into(), status: None, retry_after: None }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_retry_after(mut self, wait: Option<Duration>) -> Self {
        self.retry_after = wait;
        self
    }

    /// Whether a caller may reasonably try the same request again.
    pub fn is_retryable(&self) -> bool {
        matches!(self.kind, GenerationErrorKind::RateLimit | GenerationErrorKind::TransientService)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationErrorKind {
    /// Credential missing or rejected.
    Auth,
    RateLimit,
    /// Timeouts, connection failures and 5xx responses.
    TransientService,
    /// The capability answered without usable text.
    EmptyResponse,
    /// Any other rejection of the request (unknown model, malformed payload).
    InvalidRequest,
}

impl GenerationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationErrorKind::Auth => "auth",
            GenerationErrorKind::RateLimit => "rate_limit",
            GenerationErrorKind::TransientService => "transient_service",
            GenerationErrorKind::EmptyResponse => "empty_response",
            GenerationErrorKind::InvalidRequest => "invalid_request",
        }
    }
}

impl fmt::Display for GenerationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable label for a failure, recorded per batch row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingInput,
    SourceRead,
    Generation(GenerationErrorKind),
    ArtifactWrite,
    BatchInput,
    Configuration,
    Io,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::MissingInput => f.write_str("missing_input"),
            FailureKind::SourceRead => f.write_str("source_read"),
            FailureKind::Generation(kind) => write!(f, "generation:{}", kind),
            FailureKind::ArtifactWrite => f.write_str("artifact_write"),
            FailureKind::BatchInput => f.write_str("batch_input"),
            FailureKind::Configuration => f.write_str("configuration"),
            FailureKind::Io => f.write_str("io"),
        }
    }
}

impl Serialize for FailureKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
