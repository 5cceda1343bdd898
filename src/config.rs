//! Generation settings threaded through the tree, relationship engine,
//! statement compiler and artifact generators.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ports::{ArtifactStore, PortError};

/// Failure to read or parse a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying store error.
        source: PortError,
    },
    /// The file is not valid YAML for [`Config`].
    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        /// Path that was parsed.
        path: PathBuf,
        /// Underlying YAML error.
        source: serde_yaml::Error,
    },
}

/// Every recognized generation option. Unset keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root namespace of the application (`App`).
    pub namespace: String,
    /// Sub-namespace for entity classes (`Models`).
    pub models_namespace: String,
    /// Sub-namespace for controllers (`Http\Controllers`).
    pub controllers_namespace: String,
    /// Sub-namespace for form requests (`Http\Requests`).
    pub requests_namespace: String,
    /// Sub-namespace for API resources (`Http\Resources`).
    pub resources_namespace: String,
    /// Sub-namespace for queued jobs (`Jobs`).
    pub jobs_namespace: String,
    /// Sub-namespace for events (`Events`).
    pub events_namespace: String,
    /// Sub-namespace for mailables (`Mail`).
    pub mail_namespace: String,
    /// Sub-namespace for notifications (`Notification`).
    pub notifications_namespace: String,
    /// Namespace of generated feature tests (`Tests\Feature`).
    pub tests_namespace: String,
    /// Directory that maps to [`Config::namespace`].
    pub app_path: String,
    /// Directory for generated feature tests.
    pub tests_path: String,
    /// Use plural entity names for route names and view directories.
    pub plural_routes: bool,
    /// Emit `$guarded = []` instead of a `$fillable` list.
    pub use_guarded: bool,
    /// Emit `@property` docblocks on entity classes.
    pub generate_phpdocs: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "App".to_string(),
            models_namespace: "Models".to_string(),
            controllers_namespace: "Http\\Controllers".to_string(),
            requests_namespace: "Http\\Requests".to_string(),
            resources_namespace: "Http\\Resources".to_string(),
            jobs_namespace: "Jobs".to_string(),
            events_namespace: "Events".to_string(),
            mail_namespace: "Mail".to_string(),
            notifications_namespace: "Notification".to_string(),
            tests_namespace: "Tests\\Feature".to_string(),
            app_path: "app".to_string(),
            tests_path: "tests/Feature".to_string(),
            plural_routes: false,
            use_guarded: false,
            generate_phpdocs: false,
        }
    }
}

impl Config {
    /// Loads a config through the artifact store. A missing file yields
    /// the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(store: &dyn ArtifactStore, path: &Path) -> Result<Self, ConfigError> {
        let content = store.read(path).map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        match content {
            Some(content) => {
                Self::from_yaml(&content).map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
            }
            None => {
                tracing::debug!(path = %path.display(), "no config file; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses a config from YAML text. An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid config YAML.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Namespace for a sub-namespace of the app: `Models` -> `App\Models`.
    #[must_use]
    pub fn qualify(&self, sub_namespace: &str) -> String {
        if sub_namespace.is_empty() {
            self.namespace.clone()
        } else {
            format!("{}\\{sub_namespace}", self.namespace)
        }
    }

    /// Fully-qualified namespace for entity classes.
    #[must_use]
    pub fn model_namespace(&self) -> String {
        self.qualify(&self.models_namespace)
    }

    /// Fully-qualified form request class name.
    #[must_use]
    pub fn request_class(&self, class: &str) -> String {
        format!("{}\\{class}", self.qualify(&self.requests_namespace))
    }

    /// Fully-qualified API resource class name.
    #[must_use]
    pub fn resource_class(&self, class: &str) -> String {
        format!("{}\\{class}", self.qualify(&self.resources_namespace))
    }

    /// Fully-qualified job class name.
    #[must_use]
    pub fn job_class(&self, class: &str) -> String {
        format!("{}\\{class}", self.qualify(&self.jobs_namespace))
    }

    /// Fully-qualified event class name.
    #[must_use]
    pub fn event_class(&self, class: &str) -> String {
        format!("{}\\{class}", self.qualify(&self.events_namespace))
    }

    /// Fully-qualified mailable class name.
    #[must_use]
    pub fn mail_class(&self, class: &str) -> String {
        format!("{}\\{class}", self.qualify(&self.mail_namespace))
    }

    /// Fully-qualified notification class name.
    #[must_use]
    pub fn notification_class(&self, class: &str) -> String {
        format!("{}\\{class}", self.qualify(&self.notifications_namespace))
    }
}
