pub mod artifact_name;
pub mod configuration;
pub mod error;
pub mod inputs;
pub mod job;
pub mod latex;
pub mod prompt;
pub mod report;

pub use artifact_name::ArtifactBase;
pub use configuration::{
    CompileConfig, GenerationConfig, OutputConfig, SenderIdentity, TailorConfig,
};
pub use error::{AppError, FailureKind, GenerationError, GenerationErrorKind};
pub use inputs::AggregatedInputs;
pub use job::{CompilationWarning, JobSpec, KeywordSource, OutputArtifacts, Recruiter};
pub use prompt::{GenerationRequest, RequestPurpose};
pub use report::{BatchEntry, BatchExitPolicy, BatchRunReport, RowOutcome, RowStatus};
