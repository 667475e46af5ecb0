//! Retry wrapper around a generation client.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::warn;

use crate::domain::{AppError, GenerationConfig, GenerationError, GenerationRequest};
use crate::ports::GenerationClient;

const BACKOFF_CEILING: Duration = Duration::from_secs(30);
const MAX_DOUBLINGS: u32 = 6;
const LOGGED_MESSAGE_CHARS: usize = 512;

/// How many times to call the service and how long to wait in between.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    initial_delay: Duration,
    ceiling: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &GenerationConfig) -> Self {
        let initial_delay = Duration::from_millis(config.retry_delay_ms.max(1));
        Self {
            max_attempts: config.max_attempts.max(1),
            initial_delay,
            ceiling: BACKOFF_CEILING.max(initial_delay),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Wait before attempt `attempt + 1`. A service hint wins over backoff.
    fn wait_after(&self, attempt: u32, error: &GenerationError) -> Duration {
        if let Some(hint) = error.retry_after {
            return hint.min(self.ceiling);
        }

        let doublings = attempt.saturating_sub(1).min(MAX_DOUBLINGS);
        let backoff = self.initial_delay.saturating_mul(1 << doublings).min(self.ceiling);
        (backoff + jitter(backoff)).min(self.ceiling)
    }
}

/// Retries rate-limited and transient failures of the wrapped client.
///
/// Every other failure, and the last failure once attempts run out, is
/// returned unchanged.
pub struct RetryingGenerationClient {
    inner: Box<dyn GenerationClient>,
    policy: RetryPolicy,
}

impl RetryingGenerationClient {
    pub fn new(inner: Box<dyn GenerationClient>, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

impl GenerationClient for RetryingGenerationClient {
    fn generate(&self, request: &GenerationRequest, model: &str) -> Result<String, AppError> {
        let mut attempt = 1;
        loop {
            let failure = match self.inner.generate(request, model) {
                Err(AppError::Generation(err))
                    if err.is_retryable() && attempt < self.policy.max_attempts =>
                {
                    err
                }
                outcome => return outcome,
            };

            let wait = self.policy.wait_after(attempt, &failure);
            warn!(
                attempt,
                max_attempts = self.policy.max_attempts,
                wait_ms = wait.as_millis() as u64,
                kind = %failure.kind,
                status = ?failure.status,
                error = %loggable(&failure.message),
                "Generation request failed; retrying"
            );
            thread::sleep(wait);
            attempt += 1;
        }
    }
}

/// Up to a quarter of `backoff`, taken from the clock's sub-second part.
fn jitter(backoff: Duration) -> Duration {
    let cap = backoff.as_millis() as u64 / 4;
    if cap == 0 {
        return Duration::ZERO;
    }
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.subsec_nanos());
    Duration::from_millis(u64::from(nanos) % cap)
}

/// Single line, control characters blanked, clipped for the log.
fn loggable(message: &str) -> String {
    let mut line = message
        .chars()
        .take(LOGGED_MESSAGE_CHARS)
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    if message.chars().count() > LOGGED_MESSAGE_CHARS {
        line.push_str(" [truncated]");
    }
    line
}
