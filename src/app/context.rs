use crate::domain::SenderIdentity;
use crate::ports::{ArtifactStore, DocumentCompiler, GenerationClient, SourceReader};

/// Collaborators for one pipeline run.
pub struct AppContext<S, G, C, A>
where
    S: SourceReader,
    G: GenerationClient,
    C: DocumentCompiler,
    A: ArtifactStore,
{
    sources: S,
    generator: G,
    compiler: Option<C>,
    store: A,
    sender: SenderIdentity,
}

impl<S, G, C, A> AppContext<S, G, C, A>
where
    S: SourceReader,
    G: GenerationClient,
    C: DocumentCompiler,
    A: ArtifactStore,
{
    /// Create a new application context. `compiler: None` disables rendering.
    pub fn new(sources: S, generator: G, compiler: Option<C>, store: A) -> Self {
        Self { sources, generator, compiler, store, sender: SenderIdentity::default() }
    }

    pub fn with_sender(mut self, sender: SenderIdentity) -> Self {
        self.sender = sender;
        self
    }

    pub fn sources(&self) -> &S {
        &self.sources
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn compiler(&self) -> Option<&C> {
        self.compiler.as_ref()
    }

    pub fn store(&self) -> &A {
        &self.store
    }

    pub fn sender(&self) -> &SenderIdentity {
        &self.sender
    }
}
