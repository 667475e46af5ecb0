mod fake_compiler;
mod fake_generation_client;

pub use fake_compiler::FakeCompiler;
pub use fake_generation_client::FakeGenerationClient;
pub use memory_sources::{MemoryArtifactStore, MemorySourceReader};
