//! Draft lexer: reads a YAML draft of models and controllers into entities
//! and action containers, and a cache file into previously known entities.
//!
//! ```yaml
//! models:
//!   Post:
//!     title: string:400
//!     author_id: id:user
//!     relationships:
//!       hasMany: Comment
//! controllers:
//!   Post:
//!     index:
//!       query: all
//!       render: post.index with:posts
//! ```

mod columns;
mod statements;

use serde::Deserialize;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::config::Config;
use crate::model::{ActionContainer, Entity, KeyKind, KeyedReference, RawReference, RelationshipKind};
use crate::tree::{CachedEntities, Tree};

pub use columns::parse_column;
pub use statements::parse_statement;

/// Errors raised while reading a draft or cache file.
#[derive(Debug, Error)]
pub enum DraftError {
    /// The document is not valid YAML.
    #[error("invalid draft YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A section or value has the wrong shape.
    #[error("{path}: {reason}")]
    Shape {
        /// Location in the draft, e.g. `models.Post.relationships`.
        path: String,
        /// What was wrong.
        reason: String,
    },
    /// A relationship kind that does not exist.
    #[error("{entity}: unknown relationship kind '{kind}'")]
    UnknownRelationship {
        /// Owning entity.
        entity: String,
        /// Kind as written.
        kind: String,
    },
    /// A statement keyword that does not exist.
    #[error("{controller}.{method}: unknown statement '{keyword}'")]
    UnknownStatement {
        /// Owning controller.
        controller: String,
        /// Owning method.
        method: String,
        /// Keyword as written.
        keyword: String,
    },
    /// A column definition that cannot be read.
    #[error("{entity}.{column}: {reason}")]
    Column {
        /// Owning entity.
        entity: String,
        /// Column name.
        column: String,
        /// What was wrong.
        reason: String,
    },
}

/// Entities and action containers read from one draft, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct Draft {
    /// Entities under `models:`.
    pub entities: Vec<Entity>,
    /// Containers under `controllers:`.
    pub controllers: Vec<ActionContainer>,
}

impl Draft {
    /// Builds the tree for one generation pass.
    #[must_use]
    pub fn into_tree(self, config: &Config, cache: Option<&CachedEntities>) -> Tree {
        Tree::new(config, self.entities, self.controllers, cache)
    }
}

/// Parses a draft document.
///
/// # Errors
///
/// Returns [`DraftError`] on invalid YAML, a malformed section, an unknown
/// relationship kind or statement keyword, or an unreadable column.
pub fn parse(content: &str) -> Result<Draft, DraftError> {
    if content.trim().is_empty() {
        return Ok(Draft::default());
    }
    let document: Value = serde_yaml::from_str(content)?;
    let Some(root) = document.as_mapping() else {
        return Err(shape("draft", "expected a mapping at the top level"));
    };

    let mut draft = Draft::default();
    if let Some(models) = section(root, "models")? {
        for (name, definition) in models {
            let name = key(name, "models")?;
            draft.entities.push(parse_entity(&name, definition)?);
        }
    }
    if let Some(controllers) = section(root, "controllers")? {
        for (name, definition) in controllers {
            let name = key(name, "controllers")?;
            draft.controllers.push(parse_controller(&name, definition)?);
        }
    }
    tracing::debug!(
        entities = draft.entities.len(),
        controllers = draft.controllers.len(),
        "parsed draft"
    );
    Ok(draft)
}

/// Parses a cache file of previously generated entities.
///
/// # Errors
///
/// Returns [`DraftError::Yaml`] if the file is not a valid cache document.
pub fn parse_cache(content: &str) -> Result<CachedEntities, DraftError> {
    #[derive(Deserialize)]
    struct CacheFile {
        #[serde(default)]
        models: CachedEntities,
    }

    if content.trim().is_empty() {
        return Ok(CachedEntities::new());
    }
    let file: CacheFile = serde_yaml::from_str(content)?;
    Ok(file.models)
}

fn parse_entity(name: &str, definition: &Value) -> Result<Entity, DraftError> {
    let mut entity = Entity::new(name);
    let Some(fields) = definition.as_mapping() else {
        if definition.is_null() {
            return Ok(entity);
        }
        return Err(shape(&format!("models.{name}"), "expected a mapping of columns"));
    };

    for (field, value) in fields {
        let field = key(field, &format!("models.{name}"))?;
        match field.as_str() {
            "relationships" => parse_relationships(&mut entity, name, value)?,
            "timestamps" | "timestampsTz" | "timestampstz" => entity.set_timestamps(!is_false(value)),
            "softdeletes" | "softDeletes" | "softdeletestz" | "softDeletesTz" => {
                entity.set_soft_deletes(!is_false(value));
            }
            "meta" => parse_meta(&mut entity, name, value)?,
            _ => {
                let definition = scalar(value).unwrap_or_default();
                let column = parse_column(&field, &definition).map_err(|reason| DraftError::Column {
                    entity: name.to_string(),
                    column: field.clone(),
                    reason,
                })?;
                if column.name() == "id" {
                    match column.data_type() {
                        "uuid" => entity.set_key(KeyKind::Uuid),
                        "ulid" => entity.set_key(KeyKind::Ulid),
                        _ => {}
                    }
                }
                entity.add_column(column);
            }
        }
    }
    Ok(entity)
}

fn parse_relationships(entity: &mut Entity, name: &str, value: &Value) -> Result<(), DraftError> {
    let path = format!("models.{name}.relationships");
    let Some(relationships) = value.as_mapping() else {
        return Err(shape(&path, "expected a mapping of relationship kinds"));
    };

    for (kind, references) in relationships {
        let kind = key(kind, &path)?;
        let parsed: RelationshipKind = kind
            .parse()
            .map_err(|_| DraftError::UnknownRelationship { entity: name.to_string(), kind: kind.clone() })?;

        match references {
            Value::Sequence(items) => {
                for item in items {
                    entity.add_relationship(parsed, reference(item, &path)?);
                }
            }
            Value::Mapping(_) => entity.add_relationship(parsed, reference(references, &path)?),
            other => {
                for item in scalar(other).unwrap_or_default().split(',') {
                    let item = item.trim();
                    if !item.is_empty() {
                        entity.add_relationship(parsed, RawReference::name(item));
                    }
                }
            }
        }
    }
    Ok(())
}

fn reference(value: &Value, path: &str) -> Result<RawReference, DraftError> {
    if value.is_mapping() {
        let keyed: KeyedReference = serde_yaml::from_value(value.clone())
            .map_err(|err| shape(path, &format!("invalid keyed reference: {err}")))?;
        return Ok(RawReference::Keyed(keyed));
    }
    scalar(value)
        .map(|name| RawReference::Name(name.trim().to_string()))
        .ok_or_else(|| shape(path, "expected a reference string or mapping"))
}

fn parse_meta(entity: &mut Entity, name: &str, value: &Value) -> Result<(), DraftError> {
    let path = format!("models.{name}.meta");
    let Some(meta) = value.as_mapping() else {
        return Err(shape(&path, "expected a mapping"));
    };
    for (field, value) in meta {
        match key(field, &path)?.as_str() {
            "pivot" => entity.set_pivot(!is_false(value)),
            "table" => entity.set_table(scalar(value)),
            "connection" => entity.set_connection(scalar(value)),
            other => tracing::warn!(entity = name, option = other, "ignoring unknown meta option"),
        }
    }
    Ok(())
}

fn parse_controller(name: &str, definition: &Value) -> Result<ActionContainer, DraftError> {
    let mut container = ActionContainer::new(name);
    let path = format!("controllers.{name}");
    let Some(methods) = definition.as_mapping() else {
        return Err(shape(&path, "expected a mapping of methods"));
    };

    for (method, body) in methods {
        let method = key(method, &path)?;
        let mut statements = Vec::new();
        if let Some(body) = body.as_mapping() {
            for (keyword, value) in body {
                let keyword = key(keyword, &format!("{path}.{method}"))?;
                let value = scalar(value).unwrap_or_default();
                let statement = parse_statement(&keyword, &value).ok_or_else(|| DraftError::UnknownStatement {
                    controller: container.name().to_string(),
                    method: method.clone(),
                    keyword: keyword.clone(),
                })?;
                statements.push(statement);
            }
        } else if !body.is_null() {
            return Err(shape(&format!("{path}.{method}"), "expected a mapping of statements"));
        }
        container.add_method(&method, statements);
    }
    Ok(container)
}

fn section<'a>(root: &'a Mapping, name: &str) -> Result<Option<&'a Mapping>, DraftError> {
    match root.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Mapping(mapping)) => Ok(Some(mapping)),
        Some(_) => Err(shape(name, "expected a mapping")),
    }
}

fn key(value: &Value, path: &str) -> Result<String, DraftError> {
    scalar(value).ok_or_else(|| shape(path, "keys must be strings"))
}

/// Renders a scalar as text; `None` for null, sequences and mappings.
fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Tagged(tagged) => scalar(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn is_false(value: &Value) -> bool {
    matches!(value, Value::Bool(false)) || value.as_str().is_some_and(|text| text.eq_ignore_ascii_case("false"))
}

fn shape(path: &str, reason: &str) -> DraftError {
    DraftError::Shape { path: path.to_string(), reason: reason.to_string() }
}
