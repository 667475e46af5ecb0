//! Tailoring configuration domain models.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Configuration loaded from `tailor.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TailorConfig {
    /// Generation service configuration.
    #[serde(default)]
    pub generation: GenerationConfig,
    /// Document compilation configuration.
    #[serde(default)]
    pub compile: CompileConfig,
    /// Output location.
    #[serde(default)]
    pub output: OutputConfig,
    /// Sender identity used in recruiter messages.
    #[serde(default)]
    pub message: SenderIdentity,
}

impl TailorConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.generation.validate()?;
        self.compile.validate()?;
        Ok(())
    }
}

/// Generation service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationConfig {
    /// Chat completions endpoint URL.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Model used when none is given on the command line.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Response budget for the tailored document.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Response budget for the recruiter message.
    #[serde(default = "default_message_max_tokens")]
    pub message_max_tokens: u32,
    /// Total attempts per request; 1 disables retries.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base delay between retries in milliseconds.
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            model: default_model(),
            timeout_secs: default_timeout(),
            max_tokens: default_max_tokens(),
            message_max_tokens: default_message_max_tokens(),
            max_attempts: default_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl GenerationConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::InvalidConfig("model must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::InvalidConfig("timeout_secs must be greater than 0".to_string()));
        }
        if self.max_tokens == 0 || self.message_max_tokens == 0 {
            return Err(AppError::InvalidConfig(
                "max_tokens and message_max_tokens must be greater than 0".to_string(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(AppError::InvalidConfig("max_attempts must be greater than 0".to_string()));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "retry_delay_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.openai.com/v1/chat/completions")
        .expect("Default API URL must be valid")
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_timeout() -> u64 {
    120
}

fn default_max_tokens() -> u32 {
    4096
}

fn default_message_max_tokens() -> u32 {
    2048
}

fn default_max_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}

/// Document compilation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompileConfig {
    /// Whether to render the tailored document after writing it.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Compiler executable.
    #[serde(default = "default_program")]
    pub program: String,
    /// Number of compiler passes (references settle on the second).
    #[serde(default = "default_passes")]
    pub passes: u32,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self { enabled: default_true(), program: default_program(), passes: default_passes() }
    }
}

impl CompileConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.program.trim().is_empty() {
            return Err(AppError::InvalidConfig("compile.program must not be empty".to_string()));
        }
        if !(1..=5).contains(&self.passes) {
            return Err(AppError::InvalidConfig(
                "compile.passes must be between 1 and 5".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_true() -> bool {
    true
}

fn default_program() -> String {
    "pdflatex".to_string()
}

fn default_passes() -> u32 {
    2
}

/// Output location configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Directory for artifacts; defaults to `<Desktop>/script_resumes`.
    pub directory: Option<PathBuf>,
}

/// Who the recruiter message is written from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SenderIdentity {
    #[serde(rename = "sender_name")]
    pub name: Option<String>,
    #[serde(rename = "sender_email")]
    pub email: Option<String>,
}

impl SenderIdentity {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }
}
