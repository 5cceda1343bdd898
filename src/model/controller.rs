//! Action containers (controllers) and their methods.

use indexmap::IndexMap;

use crate::config::Config;
use crate::naming::{singularize, studly};
use crate::statement::Statement;

const SUFFIX: &str = "Controller";

/// A request-handling class: named methods, each an ordered statement list.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionContainer {
    name: String,
    namespace: Option<String>,
    methods: IndexMap<String, Vec<Statement>>,
}

impl ActionContainer {
    /// Creates a container. `Admin/Post` becomes `PostController` in the
    /// `Admin` namespace; the `Controller` suffix is appended when missing.
    #[must_use]
    pub fn new(name: &str) -> Self {
        let normalized = name.replace('/', "\\");
        let (namespace, base) = match normalized.rsplit_once('\\') {
            Some((namespace, base)) if !namespace.is_empty() => (Some(namespace.to_string()), base),
            _ => (None, normalized.trim_start_matches('\\')),
        };
        let name = if base.ends_with(SUFFIX) { base.to_string() } else { format!("{base}{SUFFIX}") };
        Self { name, namespace, methods: IndexMap::new() }
    }

    /// Appends a method. Statement order is preserved.
    pub fn add_method(&mut self, name: &str, statements: Vec<Statement>) {
        self.methods.insert(name.to_string(), statements);
    }

    /// Class name, e.g. `PostController`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace below the controllers namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Methods in declaration order.
    #[must_use]
    pub fn methods(&self) -> &IndexMap<String, Vec<Statement>> {
        &self.methods
    }

    /// The entity this container principally acts upon: `PostsController` -> `Post`.
    #[must_use]
    pub fn prefix(&self) -> String {
        let base = self.name.strip_suffix(SUFFIX).unwrap_or(&self.name);
        studly(&singularize(base))
    }

    /// Fully-qualified namespace, e.g. `App\Http\Controllers\Admin`.
    #[must_use]
    pub fn fully_qualified_namespace(&self, config: &Config) -> String {
        let root = config.qualify(&config.controllers_namespace);
        match &self.namespace {
            Some(namespace) => format!("{root}\\{namespace}"),
            None => root,
        }
    }

    /// Fully-qualified class name.
    #[must_use]
    pub fn fully_qualified_name(&self, config: &Config) -> String {
        format!("{}\\{}", self.fully_qualified_namespace(config), self.name)
    }
}
