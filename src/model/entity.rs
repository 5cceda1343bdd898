//! Entity (model) definitions.

use indexmap::IndexMap;
use serde::Serialize;

use super::column::Column;
use super::relation::{RawReference, RelationshipKind};
use crate::config::Config;
use crate::naming::{pluralize, snake};

/// Columns implied by entity flags rather than declared.
pub const PSEUDO_COLUMNS: [&str; 3] = ["created_at", "updated_at", "deleted_at"];

/// How the primary key is generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyKind {
    /// Auto-incrementing integer.
    #[default]
    Increments,
    /// UUID primary key.
    Uuid,
    /// ULID primary key.
    Ulid,
}

/// An in-memory description of a data table and its relationships.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entity {
    name: String,
    namespace: Option<String>,
    columns: IndexMap<String, Column>,
    relationships: IndexMap<RelationshipKind, Vec<RawReference>>,
    timestamps: bool,
    soft_deletes: bool,
    key: KeyKind,
    pivot: bool,
    connection: Option<String>,
    table: Option<String>,
}

impl Entity {
    /// Creates an entity with timestamps enabled and no columns.
    ///
    /// A name such as `Admin/User` or `Admin\User` is split into a
    /// namespace (`Admin`) and a class name (`User`).
    #[must_use]
    pub fn new(name: &str) -> Self {
        let normalized = name.replace('/', "\\");
        let (namespace, name) = match normalized.rsplit_once('\\') {
            Some((namespace, name)) if !namespace.is_empty() => {
                (Some(namespace.to_string()), name.to_string())
            }
            _ => (None, normalized.trim_start_matches('\\').to_string()),
        };
        Self {
            name,
            namespace,
            columns: IndexMap::new(),
            relationships: IndexMap::new(),
            timestamps: true,
            soft_deletes: false,
            key: KeyKind::Increments,
            pivot: false,
            connection: None,
            table: None,
        }
    }

    /// Appends a column. Pseudo columns implied by flags are not stored;
    /// a repeated name replaces the earlier definition in place.
    pub fn add_column(&mut self, column: Column) {
        if PSEUDO_COLUMNS.contains(&column.name()) {
            tracing::debug!(entity = %self.name, column = column.name(), "skipping implied column");
            return;
        }
        self.columns.insert(column.name().to_string(), column);
    }

    /// Appends a relationship declaration.
    pub fn add_relationship(&mut self, kind: RelationshipKind, reference: RawReference) {
        self.relationships.entry(kind).or_default().push(reference);
    }

    /// Enables or disables `created_at`/`updated_at`.
    pub fn set_timestamps(&mut self, enabled: bool) {
        self.timestamps = enabled;
    }

    /// Enables soft deletes (`deleted_at`).
    pub fn set_soft_deletes(&mut self, enabled: bool) {
        self.soft_deletes = enabled;
    }

    /// Sets the primary key kind.
    pub fn set_key(&mut self, key: KeyKind) {
        self.key = key;
    }

    /// Marks this entity as a pivot (join table).
    pub fn set_pivot(&mut self, pivot: bool) {
        self.pivot = pivot;
    }

    /// Sets a custom database connection.
    pub fn set_connection(&mut self, connection: Option<String>) {
        self.connection = connection;
    }

    /// Sets a custom table name.
    pub fn set_table(&mut self, table: Option<String>) {
        self.table = table;
    }

    /// Class name without namespace.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Namespace below the models namespace, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// Columns in declaration order.
    #[must_use]
    pub fn columns(&self) -> &IndexMap<String, Column> {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.get(name)
    }

    /// Relationship declarations grouped by kind, in declaration order.
    #[must_use]
    pub fn relationships(&self) -> &IndexMap<RelationshipKind, Vec<RawReference>> {
        &self.relationships
    }

    /// Whether `created_at`/`updated_at` are maintained.
    #[must_use]
    pub fn uses_timestamps(&self) -> bool {
        self.timestamps
    }

    /// Whether `deleted_at` is maintained.
    #[must_use]
    pub fn uses_soft_deletes(&self) -> bool {
        self.soft_deletes
    }

    /// Primary key kind.
    #[must_use]
    pub fn key(&self) -> KeyKind {
        self.key
    }

    /// Whether this entity is a pivot.
    #[must_use]
    pub fn is_pivot(&self) -> bool {
        self.pivot
    }

    /// Custom connection name.
    #[must_use]
    pub fn connection(&self) -> Option<&str> {
        self.connection.as_deref()
    }

    /// Custom table name, if one was declared.
    #[must_use]
    pub fn custom_table(&self) -> Option<&str> {
        self.table.as_deref()
    }

    /// Table name: the custom table, else the snake-cased plural class name
    /// (or singular for pivots).
    #[must_use]
    pub fn table_name(&self) -> String {
        if let Some(table) = &self.table {
            return table.clone();
        }
        if self.pivot {
            snake(&self.name)
        } else {
            snake(&pluralize(&self.name))
        }
    }

    /// Fully-qualified namespace of this entity, e.g. `App\Models\Admin`.
    #[must_use]
    pub fn fully_qualified_namespace(&self, config: &Config) -> String {
        let root = config.model_namespace();
        match &self.namespace {
            Some(namespace) => format!("{root}\\{namespace}"),
            None => root,
        }
    }

    /// Fully-qualified class name, e.g. `App\Models\Admin\User`.
    #[must_use]
    pub fn fully_qualified_name(&self, config: &Config) -> String {
        format!("{}\\{}", self.fully_qualified_namespace(config), self.name)
    }

    /// Columns of a pivot entity beyond its foreign keys and id.
    #[must_use]
    pub fn pivot_columns(&self) -> Vec<String> {
        let belongs_to: Vec<&str> = self
            .relationships
            .get(&RelationshipKind::BelongsTo)
            .map(|references| {
                references
                    .iter()
                    .filter_map(|reference| match reference {
                        RawReference::Name(name) => Some(name.split(':').next().unwrap_or(name)),
                        RawReference::Keyed(keyed) => keyed.foreign_key.as_deref(),
                    })
                    .collect()
            })
            .unwrap_or_default();

        self.columns
            .values()
            .filter(|column| column.name() != "id")
            .filter(|column| !column.is_foreign_key())
            .filter(|column| !belongs_to.contains(&column.name()))
            .map(|column| column.name().to_string())
            .collect()
    }
}
