//! Chat-completions generation client using reqwest.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderValue, RETRY_AFTER};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::domain::{
    AppError, GenerationConfig, GenerationError, GenerationErrorKind, GenerationRequest,
    RequestPurpose,
};
use crate::ports::GenerationClient;

const DEFAULT_STATUS_MESSAGE: &str = "Generation request failed";

/// HTTP transport for an OpenAI-compatible chat completions endpoint.
///
/// This client performs a single request per call. Retry behavior is implemented
/// by a dedicated retry wrapper adapter.
#[derive(Clone)]
pub struct HttpGenerationClient {
    api_key: String,
    api_url: Url,
    max_tokens: u32,
    message_max_tokens: u32,
    client: Client,
}

impl std::fmt::Debug for HttpGenerationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpGenerationClient")
            .field("api_url", &self.api_url)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpGenerationClient {
    /// Create a client bound to `api_key` for its whole lifetime.
    pub fn new(api_key: String, config: &GenerationConfig) -> Result<Self, AppError> {
        if api_key.trim().is_empty() {
            return Err(GenerationError::new(GenerationErrorKind::Auth, "API key is empty").into());
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                AppError::config_error(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            api_key,
            api_url: config.api_url.clone(),
            max_tokens: config.max_tokens,
            message_max_tokens: config.message_max_tokens,
            client,
        })
    }

    fn token_budget(&self, purpose: RequestPurpose) -> u32 {
        match purpose {
            RequestPurpose::Document => self.max_tokens,
            RequestPurpose::Message => self.message_max_tokens,
        }
    }

    fn send_request(&self, request: &ApiRequest<'_>) -> Result<String, AppError> {
        let response = self
            .client
            .post(self.api_url.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .map_err(|e| {
                let detail = if e.is_timeout() { "request timed out" } else { "request failed" };
                GenerationError::new(
                    GenerationErrorKind::TransientService,
                    format!("HTTP {}: {}", detail, e),
                )
            })?;

        let status = response.status();
        let retry_after = response.headers().get(RETRY_AFTER).and_then(parse_retry_after);
        let body_text = response.text().map_err(|e| {
            let detail =
                if e.is_timeout() { "response timed out" } else { "response body unreadable" };
            GenerationError::new(GenerationErrorKind::TransientService, format!("HTTP {}: {}", detail, e))
                .with_status(status.as_u16())
        })?;

        if status.is_success() {
            let api_response: ApiResponse = serde_json::from_str(&body_text).map_err(|e| {
                GenerationError::new(
                    GenerationErrorKind::EmptyResponse,
                    format!("Failed to parse response: {}", e),
                )
                .with_status(status.as_u16())
            })?;

            let content = api_response
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message.content)
                .filter(|text| !text.trim().is_empty())
                .ok_or_else(|| {
                    GenerationError::new(
                        GenerationErrorKind::EmptyResponse,
                        "Response contained no generated text",
                    )
                    .with_status(status.as_u16())
                })?;

            return Ok(content);
        }

        let code = status.as_u16();
        let message = extract_error_message(&body_text).unwrap_or_else(|| {
            if !body_text.trim().is_empty() {
                body_text.clone()
            } else if code == 429 {
                "Rate limited".to_string()
            } else if status.is_server_error() {
                "Server error".to_string()
            } else {
                DEFAULT_STATUS_MESSAGE.to_string()
            }
        });

        Err(GenerationError::new(classify_status(code), message)
            .with_status(code)
            .with_retry_after(retry_after)
            .into())
    }
}

/// Map a non-success HTTP status to a failure kind.
pub fn classify_status(code: u16) -> GenerationErrorKind {
    match code {
        401 | 403 => GenerationErrorKind::Auth,
        429 => GenerationErrorKind::RateLimit,
        408 | 500..=599 => GenerationErrorKind::TransientService,
        _ => GenerationErrorKind::InvalidRequest,
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

/// `Retry-After` in delta-seconds form; HTTP dates are ignored.
fn parse_retry_after(value: &HeaderValue) -> Option<Duration> {
    value.to_str().ok()?.trim().parse::<u64>().ok().map(Duration::from_secs)
}

impl GenerationClient for HttpGenerationClient {
    fn generate(&self, request: &GenerationRequest, model: &str) -> Result<String, AppError> {
        let api_request = ApiRequest {
            model,
            messages: [
                ChatMessage { role: "system", content: &request.system },
                ChatMessage { role: "user", content: &request.prompt },
            ],
            max_tokens: self.token_budget(request.purpose),
        };

        debug!(
            model,
            purpose = ?request.purpose,
            prompt_chars = request.prompt.len(),
            "Sending generation request"
        );
        self.send_request(&api_request)
    }
}
