mod artifact_store;
mod document_compiler;
mod generation_client;
mod source_reader;

pub use artifact_store::ArtifactStore;
pub use document_compiler::DocumentCompiler;
pub use generation_client::GenerationClient;
pub use source_reader::SourceReader;
