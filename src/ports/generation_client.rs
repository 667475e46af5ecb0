//! Generation capability port definition.

use crate::domain::{AppError, GenerationRequest};

/// Port for the external text-generation capability.
///
/// One blocking call per invocation; implementations hold no state between
/// calls apart from their configuration.
pub trait GenerationClient {
    /// Send the request and return the raw generated text.
    ///
    /// Failures surface as `AppError::Generation` with a classified kind.
    fn generate(&self, request: &GenerationRequest, model: &str) -> Result<String, AppError>;
}
