//! Column definitions owned by an entity.

use serde::Serialize;

/// A flag or keyed option attached to a column, e.g. `nullable` or `default:0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Modifier {
    /// Modifier name (`nullable`, `default`, `foreign`, ...).
    pub name: String,
    /// Value for keyed modifiers.
    pub value: Option<String>,
}

impl Modifier {
    /// A flag modifier without a value.
    #[must_use]
    pub fn flag(name: &str) -> Self {
        Self { name: name.to_string(), value: None }
    }

    /// A keyed modifier such as `default:0`.
    #[must_use]
    pub fn keyed(name: &str, value: &str) -> Self {
        Self { name: name.to_string(), value: Some(value.to_string()) }
    }
}

/// A single column of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    name: String,
    data_type: String,
    attributes: Vec<String>,
    modifiers: Vec<Modifier>,
}

impl Column {
    /// Creates a column.
    #[must_use]
    pub fn new(name: &str, data_type: &str, attributes: Vec<String>, modifiers: Vec<Modifier>) -> Self {
        Self { name: name.to_string(), data_type: data_type.to_string(), attributes, modifiers }
    }

    /// Column name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared data kind (`string`, `id`, `decimal`, ...).
    #[must_use]
    pub fn data_type(&self) -> &str {
        &self.data_type
    }

    /// Positional attributes such as enum options or a foreign target.
    #[must_use]
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Modifiers in declaration order.
    #[must_use]
    pub fn modifiers(&self) -> &[Modifier] {
        &self.modifiers
    }

    /// Returns `true` if a modifier with the given name is present.
    #[must_use]
    pub fn has_modifier(&self, name: &str) -> bool {
        self.modifiers.iter().any(|m| m.name == name)
    }

    /// Value of a keyed modifier, if present.
    #[must_use]
    pub fn modifier_value(&self, name: &str) -> Option<&str> {
        self.modifiers.iter().find(|m| m.name == name).and_then(|m| m.value.as_deref())
    }

    /// Returns `true` if the column may be null.
    #[must_use]
    pub fn is_nullable(&self) -> bool {
        self.has_modifier("nullable")
    }

    /// Returns `true` for key-like kinds that reference another entity.
    #[must_use]
    pub fn is_foreign_key(&self) -> bool {
        (matches!(self.data_type.as_str(), "id" | "uuid" | "ulid" | "foreignId" | "foreignUuid")
            && self.name.ends_with("_id"))
            || self.has_modifier("foreign")
    }

    /// The entity or table this column points at, when declared explicitly
    /// (`id:user` or `foreign:users`).
    #[must_use]
    pub fn foreign_target(&self) -> Option<&str> {
        if let Some(target) = self.modifier_value("foreign") {
            return Some(target);
        }
        if matches!(self.data_type.as_str(), "id" | "uuid" | "ulid" | "foreignId" | "foreignUuid") {
            return self.attributes.first().map(String::as_str);
        }
        None
    }

    /// The PHP cast for this column, if the kind needs one.
    #[must_use]
    pub fn cast(&self) -> Option<String> {
        let cast = match self.data_type.as_str() {
            "id" | "foreignId" | "bigIncrements" | "increments" => {
                if self.name == "id" {
                    return None;
                }
                "integer".to_string()
            }
            "boolean" => "boolean".to_string(),
            "date" => "date".to_string(),
            "datetime" | "datetimetz" | "timestamp" | "timestamptz" => "datetime".to_string(),
            "decimal" | "unsignedDecimal" => {
                format!("decimal:{}", self.attributes.get(1).map_or("2", String::as_str))
            }
            "double" | "float" => "float".to_string(),
            "json" | "jsonb" => "array".to_string(),
            "integer" | "bigInteger" | "smallInteger" | "tinyInteger" | "unsignedInteger"
            | "unsignedBigInteger" | "unsignedSmallInteger" | "unsignedTinyInteger" => {
                "integer".to_string()
            }
            _ => return None,
        };
        Some(cast)
    }
}
