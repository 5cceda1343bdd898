//! Artifact generators: populate stub templates with compiled entities and
//! controllers, and write the results through an [`ArtifactStore`].
//!
//! A failure in one artifact is logged and recorded in the
//! [`GenerationReport`]; sibling artifacts still generate.

mod controller;
mod model;
pub mod stubs;

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::model::ActionContainer;
use crate::ports::{ArtifactStore, PortError};
use crate::relationship::RelationshipError;
use crate::tree::Tree;

pub use controller::{controller_path, render_controller};
pub use model::{model_path, render_model};
pub use test::{render_test, test_path};

/// Kinds of artifact a build can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Eloquent model classes.
    Models,
    /// HTTP controllers.
    Controllers,
    /// Controller feature tests.
    Tests,
}

impl ArtifactKind {
    /// Every kind, in generation order.
    pub const ALL: [Self; 3] = [Self::Models, Self::Controllers, Self::Tests];
}

/// Failure generating one artifact.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A relationship declaration could not be resolved.
    #[error(transparent)]
    Relationship(#[from] RelationshipError),
    /// A stub template could not be loaded.
    #[error("failed to load stub '{name}': {source}")]
    Stub {
        /// Stub name.
        name: String,
        /// Underlying store error.
        source: PortError,
    },
    /// The rendered artifact could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying store error.
        source: PortError,
    },
}

/// One artifact that could not be generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Entity or controller the artifact was for.
    pub subject: String,
    /// Artifact kind.
    pub kind: ArtifactKind,
    /// Rendered error message.
    pub message: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?}): {}", self.subject, self.kind, self.message)
    }
}

/// Outcome of a generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    /// Paths written, in generation order.
    pub created: Vec<PathBuf>,
    /// Artifacts that failed.
    pub failures: Vec<Failure>,
}

impl GenerationReport {
    /// Returns `true` if every artifact was written.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, subject: &str, kind: ArtifactKind, result: Result<PathBuf, GenerateError>) {
        match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "created");
                self.created.push(path);
            }
            Err(err) => {
                tracing::warn!(subject, ?kind, error = %err, "generation failed");
                self.failures.push(Failure { subject: subject.to_string(), kind, message: err.to_string() });
            }
        }
    }
}

/// Generates every artifact kind.
pub fn generate(tree: &Tree, config: &Config, store: &dyn ArtifactStore) -> GenerationReport {
    generate_only(tree, config, store, &ArtifactKind::ALL)
}

/// Generates the selected artifact kinds: models in entity order, then
/// controllers and tests in container order.
pub fn generate_only(
    tree: &Tree,
    config: &Config,
    store: &dyn ArtifactStore,
    kinds: &[ArtifactKind],
) -> GenerationReport {
    let mut report = GenerationReport::default();

    if kinds.contains(&ArtifactKind::Models) {
        for entity in tree.entities() {
            let result = render_model(entity, tree, config, store)
                .and_then(|text| write(store, model_path(entity, config), &text));
            report.record(entity.name(), ArtifactKind::Models, result);
        }
    }

    for container in tree.controllers() {
        if kinds.contains(&ArtifactKind::Controllers) {
            let result = render_controller(container, tree, config, store)
                .and_then(|text| write(store, controller_path(container, config), &text));
            report.record(container.name(), ArtifactKind::Controllers, result);
        }
        if kinds.contains(&ArtifactKind::Tests) {
            let result = render_test(container, tree, config, store)
                .and_then(|text| write(store, test_path(container, config), &text));
            report.record(container.name(), ArtifactKind::Tests, result);
        }
    }
    report
}

/// Substitutes `{{ key }}` placeholders. Unknown placeholders are left as is.
#[must_use]
pub fn render(template: &str, bindings: &[(&str, &str)]) -> String {
    bindings.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&format!("{{{{ {key} }}}}"), value)
    })
}

fn stub(store: &dyn ArtifactStore, name: &str) -> Result<String, GenerateError> {
    store.stub_template(name).map_err(|source| GenerateError::Stub { name: name.to_string(), source })
}

fn write(store: &dyn ArtifactStore, path: PathBuf, text: &str) -> Result<PathBuf, GenerateError> {
    match store.write(&path, text) {
        Ok(()) => Ok(path),
        Err(source) => Err(GenerateError::Write { path, source }),
    }
}

/// Methods that receive the container's entity through route-model binding.
const BOUND_METHODS: [&str; 4] = ["show", "edit", "update", "destroy"];

/// The entity bound into `method`, as (class, fully-qualified class).
fn bound_model(container: &ActionContainer, method: &str, tree: &Tree, config: &Config) -> Option<(String, String)> {
    if !BOUND_METHODS.contains(&method) {
        return None;
    }
    let class = container.prefix();
    let qualified = tree
        .fully_qualified_name_for_context(&class)
        .unwrap_or_else(|| format!("{}\\{class}", config.model_namespace()));
    Some((class, qualified))
}

/// Short name of a fully-qualified class.
fn short_name(class: &str) -> &str {
    class.rsplit('\\').next().unwrap_or(class)
}

/// Indents every non-empty line of `text` by `width` spaces.
fn indent(text: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    text.lines()
        .map(|line| if line.is_empty() { String::new() } else { format!("{pad}{line}") })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Path of a class below a root directory, one directory per namespace
/// segment after the root namespace.
fn class_path(root: &str, namespace: &str, root_namespace: &str, class: &str) -> PathBuf {
    let relative = namespace.strip_prefix(root_namespace).unwrap_or(namespace).trim_start_matches('\\');
    let mut path = Path::new(root).to_path_buf();
    for segment in relative.split('\\').filter(|segment| !segment.is_empty()) {
        path.push(segment);
    }
    path.push(format!("{class}.php"));
    path
}
