use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::domain::{AppError, GenerationRequest};
use crate::ports::GenerationClient;

/// Scripted generation client that records every request it receives.
#[derive(Clone, Default)]
pub struct FakeGenerationClient {
    pub requests: Arc<Mutex<Vec<(GenerationRequest, String)>>>,
    responses: Arc<Mutex<VecDeque<Result<String, AppError>>>>,
    fallback: Option<String>,
}

impl FakeGenerationClient {
    /// Answers every call with `text`.
    pub fn replying(text: impl Into<String>) -> Self {
        Self { fallback: Some(text.into()), ..Self::default() }
    }

    /// Answers calls with `responses` in order, then with the fallback if any.
    pub fn scripted(responses: Vec<Result<String, AppError>>) -> Self {
        Self { responses: Arc::new(Mutex::new(responses.into())), ..Self::default() }
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().expect("requests lock poisoned").len()
    }

    pub fn recorded(&self) -> Vec<(GenerationRequest, String)> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl GenerationClient for FakeGenerationClient {
    fn generate(&self, request: &GenerationRequest, model: &str) -> Result<String, AppError> {
        self.requests
            .lock()
            .expect("requests lock poisoned")
            .push((request.clone(), model.to_string()));

        if let Some(next) = self.responses.lock().expect("responses lock poisoned").pop_front() {
            return next;
        }
        Ok(self.fallback.clone().expect("fake generation client ran out of responses"))
    }
}
