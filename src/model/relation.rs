//! Raw relationship declarations as written in a draft.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The fixed set of relationship kinds an entity may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipKind {
    /// Inverse side of a one-to-one or one-to-many.
    BelongsTo,
    /// One-to-many.
    HasMany,
    /// One-to-one.
    HasOne,
    /// Many-to-many through a pivot table.
    BelongsToMany,
    /// Inverse side of a polymorphic relation.
    MorphTo,
    /// Polymorphic one-to-one.
    MorphOne,
    /// Polymorphic one-to-many.
    MorphMany,
    /// Polymorphic many-to-many.
    MorphToMany,
    /// Inverse side of a polymorphic many-to-many.
    MorphedByMany,
}

impl RelationshipKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::BelongsTo,
        Self::HasMany,
        Self::HasOne,
        Self::BelongsToMany,
        Self::MorphTo,
        Self::MorphOne,
        Self::MorphMany,
        Self::MorphToMany,
        Self::MorphedByMany,
    ];

    /// The builder method name, e.g. `belongsTo`.
    #[must_use]
    pub fn method(self) -> &'static str {
        match self {
            Self::BelongsTo => "belongsTo",
            Self::HasMany => "hasMany",
            Self::HasOne => "hasOne",
            Self::BelongsToMany => "belongsToMany",
            Self::MorphTo => "morphTo",
            Self::MorphOne => "morphOne",
            Self::MorphMany => "morphMany",
            Self::MorphToMany => "morphToMany",
            Self::MorphedByMany => "morphedByMany",
        }
    }

    /// The relation class returned by the accessor, e.g. `BelongsTo`.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::BelongsTo => "BelongsTo",
            Self::HasMany => "HasMany",
            Self::HasOne => "HasOne",
            Self::BelongsToMany => "BelongsToMany",
            Self::MorphTo => "MorphTo",
            Self::MorphOne => "MorphOne",
            Self::MorphMany => "MorphMany",
            Self::MorphToMany | Self::MorphedByMany => "MorphToMany",
        }
    }

    /// The import needed for the accessor's return type.
    #[must_use]
    pub fn import(self) -> String {
        format!("Illuminate\\Database\\Eloquent\\Relations\\{}", self.class())
    }

    /// Returns `true` when the accessor yields a collection.
    #[must_use]
    pub fn is_plural(self) -> bool {
        matches!(
            self,
            Self::HasMany
                | Self::BelongsToMany
                | Self::MorphMany
                | Self::MorphToMany
                | Self::MorphedByMany
        )
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.method())
    }
}

impl FromStr for RelationshipKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.method().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unknown relationship kind '{value}'"))
    }
}

/// Explicit key override: `{foreignKey, table, reference}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyedReference {
    /// Local key column on the owning entity.
    #[serde(default)]
    pub foreign_key: Option<String>,
    /// Table of the related entity.
    #[serde(default)]
    pub table: Option<String>,
    /// Key column on the related table.
    #[serde(default)]
    pub reference: Option<String>,
}

/// A relationship reference exactly as declared.
///
/// String references carry their own grammar:
/// `post_id`, `post_id:article`, `\Vendor\Post`, or `Team:&Membership`
/// for a many-to-many through an explicit pivot entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReference {
    /// A string reference in any of the textual forms.
    Name(String),
    /// A structured reference with explicit keys.
    Keyed(KeyedReference),
}

impl RawReference {
    /// Shorthand for a string reference.
    #[must_use]
    pub fn name(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl fmt::Display for RawReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Keyed(keyed) => write!(
                f,
                "{{foreignKey: {}, table: {}, reference: {}}}",
                keyed.foreign_key.as_deref().unwrap_or("~"),
                keyed.table.as_deref().unwrap_or("~"),
                keyed.reference.as_deref().unwrap_or("~"),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_kind_names() {
        assert_eq!("belongsTo".parse::<RelationshipKind>().unwrap(), RelationshipKind::BelongsTo);
        assert_eq!("morphedbymany".parse::<RelationshipKind>().unwrap(), RelationshipKind::MorphedByMany);
        assert!("hasSome".parse::<RelationshipKind>().is_err());
    }

    #[test]
    fn morphed_by_many_returns_morph_to_many() {
        assert_eq!(RelationshipKind::MorphedByMany.class(), "MorphToMany");
        assert_eq!(
            RelationshipKind::MorphedByMany.import(),
            "Illuminate\\Database\\Eloquent\\Relations\\MorphToMany"
        );
    }

    #[test]
    fn deserializes_both_reference_forms() {
        let name: RawReference = serde_yaml::from_str("post_id").unwrap();
        assert_eq!(name, RawReference::name("post_id"));

        let keyed: RawReference =
            serde_yaml::from_str("{foreignKey: owner_id, table: users, reference: uuid}").unwrap();
        assert_eq!(
            keyed,
            RawReference::Keyed(KeyedReference {
                foreign_key: Some("owner_id".into()),
                table: Some("users".into()),
                reference: Some("uuid".into()),
            })
        );
    }
}
