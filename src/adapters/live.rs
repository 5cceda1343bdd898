//! Live artifact store backed by the real disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::generate::stubs;
use crate::ports::{ArtifactStore, PortError};

/// Reads and writes real files.
///
/// Generated paths are joined onto `root`. Stubs are looked up as
/// `<stubs>/<name>.stub` first, then among the embedded defaults.
#[derive(Debug, Clone)]
pub struct LiveArtifactStore {
    root: PathBuf,
    stubs: Option<PathBuf>,
}

impl LiveArtifactStore {
    /// Creates a store writing below `root`, with an optional stub directory.
    #[must_use]
    pub fn new(root: &Path, stubs: Option<&Path>) -> Self {
        Self { root: root.to_path_buf(), stubs: stubs.map(Path::to_path_buf) }
    }
}

impl ArtifactStore for LiveArtifactStore {
    fn read(&self, path: &Path) -> Result<Option<String>, PortError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn stub_template(&self, name: &str) -> Result<String, PortError> {
        if let Some(dir) = &self.stubs {
            let custom = dir.join(format!("{name}.stub"));
            if custom.exists() {
                tracing::debug!(stub = name, path = %custom.display(), "using custom stub");
                return Ok(std::fs::read_to_string(custom)?);
            }
        }
        stubs::embedded(name)
            .map(str::to_string)
            .ok_or_else(|| format!("unknown stub '{name}'").into())
    }

    fn write(&self, path: &Path, contents: &str) -> Result<(), PortError> {
        let path = self.root.join(path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Ok(std::fs::write(path, contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_input_reads_as_none() {
        let store = LiveArtifactStore::new(Path::new("."), None);
        assert!(store.read(Path::new("/nonexistent/draft.yaml")).unwrap().is_none());
    }

    #[test]
    fn custom_stub_overrides_embedded() {
        let dir = std::env::temp_dir().join("blueprint_live_stub_test");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("model.stub"), "custom {{ class }}").unwrap();

        let store = LiveArtifactStore::new(&dir, Some(&dir));
        assert_eq!(store.stub_template("model").unwrap(), "custom {{ class }}");
        assert!(store.stub_template("controller").unwrap().contains("{{ class }}"));
        assert!(store.stub_template("nope").is_err());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn writes_below_root_creating_directories() {
        let dir = std::env::temp_dir().join("blueprint_live_write_test");
        let store = LiveArtifactStore::new(&dir, None);
        store.write(Path::new("app/Models/Post.php"), "<?php\n").unwrap();
        assert_eq!(std::fs::read_to_string(dir.join("app/Models/Post.php")).unwrap(), "<?php\n");

        let _ = std::fs::remove_dir_all(&dir);
    }
}
