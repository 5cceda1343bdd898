//! Resolved, renderable relationship accessors.

use serde::Serialize;

use crate::model::RelationshipKind;

/// Indentation of chained calls inside an accessor body.
const CHAIN_INDENT: &str = "            ";

/// Pivot metadata for a many-to-many through an explicit pivot entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PivotDescriptor {
    /// Class literal of the pivot entity (`Membership::class`).
    pub class_reference: String,
    /// Alias the pivot is exposed under (`membership`).
    pub alias: String,
    /// Pass-through columns beyond the pivot's own keys.
    pub columns: Vec<String>,
    /// Whether the pivot maintains timestamps.
    pub timestamps: bool,
}

/// The resolved form of one relationship declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipDescriptor {
    /// Relationship kind.
    pub kind: RelationshipKind,
    /// Accessor method name.
    pub method_name: String,
    /// Fully-qualified target class; `None` for `morphTo`.
    pub target: Option<String>,
    /// Class literal used in the accessor body: `Post::class` for siblings,
    /// `\Other\Namespace\Post::class` otherwise.
    pub class_reference: Option<String>,
    /// Explicit local key.
    pub local_key: Option<String>,
    /// Explicit foreign key on the related table.
    pub foreign_key: Option<String>,
    /// Polymorphic discriminator name (`imageable`).
    pub morph_name: Option<String>,
    /// Pivot metadata, for many-to-many through a pivot entity.
    pub pivot: Option<PivotDescriptor>,
}

impl RelationshipDescriptor {
    /// Short class name of the target, if any.
    #[must_use]
    pub fn target_class(&self) -> Option<&str> {
        self.target.as_deref().map(|fqn| fqn.rsplit('\\').next().unwrap_or(fqn))
    }

    /// The accessor body expression, without `return` or trailing `;`.
    #[must_use]
    pub fn render(&self) -> String {
        let method = self.kind.method();
        let class = self.class_reference.as_deref().unwrap_or_default();

        let mut expression = match self.kind {
            RelationshipKind::MorphTo => format!("$this->{method}('{}')", self.method_name),
            RelationshipKind::MorphOne
            | RelationshipKind::MorphMany
            | RelationshipKind::MorphToMany
            | RelationshipKind::MorphedByMany => format!(
                "$this->{method}({class}, '{}')",
                self.morph_name.as_deref().unwrap_or_default()
            ),
            _ => match (&self.local_key, &self.foreign_key) {
                (Some(local), Some(foreign)) => {
                    format!("$this->{method}({class}, '{local}', '{foreign}')")
                }
                _ => format!("$this->{method}({class})"),
            },
        };

        if let Some(pivot) = &self.pivot {
            expression.push_str(&format!("\n{CHAIN_INDENT}->using({})", pivot.class_reference));
            expression.push_str(&format!("\n{CHAIN_INDENT}->as('{}')", pivot.alias));
            if !pivot.columns.is_empty() {
                let columns =
                    pivot.columns.iter().map(|c| format!("'{c}'")).collect::<Vec<_>>().join(", ");
                expression.push_str(&format!("\n{CHAIN_INDENT}->withPivot({columns})"));
            }
            if pivot.timestamps {
                expression.push_str(&format!("\n{CHAIN_INDENT}->withTimestamps()"));
            }
        }

        expression
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(kind: RelationshipKind, method: &str, target: &str) -> RelationshipDescriptor {
        RelationshipDescriptor {
            kind,
            method_name: method.to_string(),
            target: Some(format!("App\\Models\\{target}")),
            class_reference: Some(format!("{target}::class")),
            local_key: None,
            foreign_key: None,
            morph_name: None,
            pivot: None,
        }
    }

    #[test]
    fn renders_plain_call() {
        let d = descriptor(RelationshipKind::BelongsTo, "post", "Post");
        assert_eq!(d.render(), "$this->belongsTo(Post::class)");
        assert_eq!(d.target_class(), Some("Post"));
    }

    #[test]
    fn renders_explicit_keys_local_then_foreign() {
        let mut d = descriptor(RelationshipKind::BelongsTo, "owner", "User");
        d.local_key = Some("owner_id".into());
        d.foreign_key = Some("uuid".into());
        assert_eq!(d.render(), "$this->belongsTo(User::class, 'owner_id', 'uuid')");
    }

    #[test]
    fn renders_morph_to_with_own_name() {
        let d = RelationshipDescriptor {
            kind: RelationshipKind::MorphTo,
            method_name: "imageable".into(),
            target: None,
            class_reference: None,
            local_key: None,
            foreign_key: None,
            morph_name: None,
            pivot: None,
        };
        assert_eq!(d.render(), "$this->morphTo('imageable')");
        assert_eq!(d.target_class(), None);
    }

    #[test]
    fn renders_pivot_chain_in_fixed_order() {
        let mut d = descriptor(RelationshipKind::BelongsToMany, "teams", "Team");
        d.pivot = Some(PivotDescriptor {
            class_reference: "Membership::class".into(),
            alias: "membership".into(),
            columns: vec!["role".into()],
            timestamps: true,
        });
        assert_eq!(
            d.render(),
            "$this->belongsToMany(Team::class)\n            ->using(Membership::class)\n            ->as('membership')\n            ->withPivot('role')\n            ->withTimestamps()"
        );
    }
}
