//! In-memory artifact store for tests and dry runs.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::generate::stubs;
use crate::ports::{ArtifactStore, PortError};

/// Keeps inputs and written files in maps instead of on disk.
#[derive(Debug, Default)]
pub struct MemoryArtifactStore {
    inputs: BTreeMap<PathBuf, String>,
    stubs: BTreeMap<String, String>,
    written: Mutex<BTreeMap<PathBuf, String>>,
}

impl MemoryArtifactStore {
    /// An empty store using the embedded stubs.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input document.
    #[must_use]
    pub fn with_input(mut self, path: impl Into<PathBuf>, contents: &str) -> Self {
        self.inputs.insert(path.into(), contents.to_string());
        self
    }

    /// Overrides an embedded stub.
    #[must_use]
    pub fn with_stub(mut self, name: &str, template: &str) -> Self {
        self.stubs.insert(name.to_string(), template.to_string());
        self
    }

    /// Text written to `path`, if any.
    #[must_use]
    pub fn written(&self, path: &Path) -> Option<String> {
        self.lock().get(path).cloned()
    }

    /// Every written path in sorted order.
    #[must_use]
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.lock().keys().cloned().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.written.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ArtifactStore for MemoryArtifactStore {
    fn read(&self, path: &Path) -> Result<Option<String>, PortError> {
        Ok(self.inputs.get(path).cloned())
    }

    fn stub_template(&self, name: &str) -> Result<String, PortError> {
        if let Some(template) = self.stubs.get(name) {
            return Ok(template.clone());
        }
        stubs::embedded(name)
            .map(str::to_string)
            .ok_or_else(|| format!("unknown stub '{name}'").into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        self.lock().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_writes() {
        let store = MemoryArtifactStore::new();
        store.write(Path::new("a.php"), "x").unwrap();
        store.write(Path::new("a.php"), "y").unwrap();
        assert_eq!(store.written(Path::new("a.php")).as_deref(), Some("y"));
        assert_eq!(store.written_paths(), [PathBuf::from("a.php")]);
    }

    #[test]
    fn stub_overrides_take_precedence() {
        let store = MemoryArtifactStore::new().with_stub("model", "{{ class }}!");
        assert_eq!(store.stub_template("model").unwrap(), "{{ class }}!");
        assert!(store.stub_template("missing").is_err());
    }

    #[test]
    fn reads_inputs() {
        let store = MemoryArtifactStore::new().with_input("draft.yaml", "models: {}");
        assert_eq!(store.read(Path::new("draft.yaml")).unwrap().as_deref(), Some("models: {}"));
        assert_eq!(store.read(Path::new("other.yaml")).unwrap(), None);
    }
}
