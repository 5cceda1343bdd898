//! Service context bundling the port trait objects a command runs against.

use std::path::Path;

use crate::adapters::live::LiveArtifactStore;
use crate::ports::ArtifactStore;

/// Bundles the ports into a single context.
///
/// Constructors wire up different adapter implementations (live or in
/// memory); commands only ever see the traits.
pub struct ServiceContext {
    /// Store for draft inputs, stub templates and generated artifacts.
    pub artifacts: Box<dyn ArtifactStore>,
}

impl ServiceContext {
    /// Creates a live context writing below `root`, with an optional
    /// directory of custom stubs.
    #[must_use]
    pub fn live(root: &Path, stubs: Option<&Path>) -> Self {
        Self { artifacts: Box::new(LiveArtifactStore::new(root, stubs)) }
    }

    /// Creates a context over any store, typically an in-memory one.
    #[must_use]
    pub fn with_store(store: impl ArtifactStore + 'static) -> Self {
        Self { artifacts: Box::new(store) }
    }
}
