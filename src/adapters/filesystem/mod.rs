mod artifact_store;
mod source_reader;

pub use artifact_store::FilesystemArtifactStore;
pub use source_reader::FilesystemSourceReader;
