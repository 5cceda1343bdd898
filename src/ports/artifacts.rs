//! Artifact store port: where drafts are read from, stubs come from, and
//! generated source is written to.

use std::path::Path;

use super::PortError;

/// Reads inputs, resolves stub templates, and persists generated files.
///
/// Generators only see this trait, so generation can run against the real
/// disk or entirely in memory.
pub trait ArtifactStore: Send + Sync {
    /// Reads an input document such as a draft, config, or cache file.
    /// Returns `Ok(None)` when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read as UTF-8.
    fn read(&self, path: &Path) -> Result<Option<String>, PortError>;

    /// Returns the template text for a stub name such as `model`.
    ///
    /// # Errors
    ///
    /// Returns an error if no template with that name is known.
    fn stub_template(&self, name: &str) -> Result<String, PortError>;

    /// Writes generated text, creating or overwriting the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails (permissions, disk full, etc.).
    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError>;
}
