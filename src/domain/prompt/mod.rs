pub mod composer;
pub mod message;
pub mod request;
pub mod template;

pub use composer::compose_tailoring_request;
pub use message::{MessageContext, compose_message_request};
pub use request::{GenerationRequest, PromptSection, RequestPurpose, render_sections};
