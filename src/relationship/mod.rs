//! Relationship inference: turns terse declarations into resolved accessors.
//!
//! Reference forms are checked in a fixed order, and each form is exclusive:
//!
//! 1. `\Fully\Qualified\Name`: used as the target verbatim.
//! 2. `{foreignKey, table, reference}`: explicit keys.
//! 3. `column:accessor`: accessor override (or `Target:&Pivot` for a
//!    many-to-many through a pivot entity).
//! 4. a bare column or entity name.
//!
//! Targets the tree does not know resolve to a sibling of the owning entity.

mod descriptor;

use std::collections::BTreeSet;

use thiserror::Error;

pub use descriptor::{PivotDescriptor, RelationshipDescriptor};

use crate::model::{Entity, KeyedReference, RawReference, RelationshipKind};
use crate::naming::{camel, pluralize, singularize, snake, strip_id_suffix, studly};
use crate::tree::Tree;

/// Prefix that distinguishes several `belongsTo` user references on one entity.
const USER_REFERENCE_PREFIX: &str = "user_id_";

/// A relationship declaration that cannot be resolved safely.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationshipError {
    /// A structured or pivot reference is missing a required part.
    #[error("malformed {kind} reference '{reference}' on {entity}: {reason}")]
    MalformedReference {
        /// Owning entity.
        entity: String,
        /// Relationship kind.
        kind: RelationshipKind,
        /// The reference as declared.
        reference: String,
        /// What is missing.
        reason: String,
    },
    /// A pivot reference names an entity the tree does not know.
    #[error("pivot '{pivot}' referenced by {entity} is not defined")]
    MissingPivot {
        /// Owning entity.
        entity: String,
        /// Pivot name as declared.
        pivot: String,
    },
}

/// Resolves relationship declarations against a [`Tree`].
#[derive(Debug, Clone, Copy)]
pub struct RelationshipEngine<'a> {
    tree: &'a Tree,
}

/// Intermediate result of parsing a reference: names before tree lookup.
struct Target {
    method_name: String,
    class: String,
    fqn: Option<String>,
    local_key: Option<String>,
    foreign_key: Option<String>,
    morph_source: String,
}

impl<'a> RelationshipEngine<'a> {
    /// Creates an engine over `tree`.
    #[must_use]
    pub fn new(tree: &'a Tree) -> Self {
        Self { tree }
    }

    /// Resolves every relationship declared on `entity`, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the first malformed reference encountered.
    pub fn resolve_all(&self, entity: &Entity) -> Result<Vec<RelationshipDescriptor>, RelationshipError> {
        let mut descriptors = Vec::new();
        for (kind, references) in entity.relationships() {
            for reference in references {
                descriptors.push(self.resolve(entity, *kind, reference)?);
            }
        }
        Ok(descriptors)
    }

    /// Resolves one relationship declaration.
    ///
    /// Identical inputs always yield identical descriptors.
    ///
    /// # Errors
    ///
    /// Returns an error for structured references missing a field, pivot
    /// references without a pivot name, or pivots absent from the tree.
    pub fn resolve(
        &self,
        entity: &Entity,
        kind: RelationshipKind,
        reference: &RawReference,
    ) -> Result<RelationshipDescriptor, RelationshipError> {
        let mut pivot = None;

        let target = match reference {
            RawReference::Name(name) if name.starts_with('\\') => Self::qualified_target(kind, name),
            RawReference::Keyed(keyed) => Self::keyed_target(entity, kind, keyed)?,
            RawReference::Name(name) => match name.split_once(':') {
                Some((column, pivot_name)) if pivot_name.starts_with('&') => {
                    let target = Self::bare_target(entity, kind, column);
                    pivot = Some(self.pivot(entity, kind, name, &pivot_name[1..])?);
                    target
                }
                Some((column, accessor)) => {
                    let mut target = Self::bare_target(entity, kind, column);
                    target.method_name = accessor.to_string();
                    target
                }
                None => Self::bare_target(entity, kind, name),
            },
        };

        let (target_fqn, class_reference) = if kind == RelationshipKind::MorphTo {
            (None, None)
        } else {
            let fqn = target.fqn.clone().unwrap_or_else(|| self.qualify(entity, &target.class));
            let reference = self.class_reference(entity, &fqn);
            (Some(fqn), Some(reference))
        };

        let morph_name = match kind {
            RelationshipKind::MorphOne | RelationshipKind::MorphMany | RelationshipKind::MorphToMany => {
                Some(format!("{}able", singularize(&target.morph_source).to_lowercase()))
            }
            RelationshipKind::MorphedByMany => Some(format!("{}able", entity.name().to_lowercase())),
            _ => None,
        };

        let descriptor = RelationshipDescriptor {
            kind,
            method_name: target.method_name,
            target: target_fqn,
            class_reference,
            local_key: target.local_key,
            foreign_key: target.foreign_key,
            morph_name,
            pivot,
        };
        tracing::debug!(
            entity = entity.name(),
            %kind,
            %reference,
            method = %descriptor.method_name,
            target = ?descriptor.target,
            "resolved relationship"
        );
        Ok(descriptor)
    }

    /// Imports required by a set of resolved accessors, sorted and unique.
    #[must_use]
    pub fn imports(descriptors: &[RelationshipDescriptor]) -> BTreeSet<String> {
        descriptors.iter().map(|descriptor| descriptor.kind.import()).collect()
    }

    fn qualified_target(kind: RelationshipKind, name: &str) -> Target {
        let fqn = name.trim_start_matches('\\');
        let short = fqn.rsplit('\\').next().unwrap_or(fqn);
        let base = strip_id_suffix(short);
        Target {
            method_name: accessor_name(kind, base),
            class: short.to_string(),
            fqn: Some(fqn.to_string()),
            local_key: None,
            foreign_key: None,
            morph_source: short.to_string(),
        }
    }

    fn keyed_target(
        entity: &Entity,
        kind: RelationshipKind,
        keyed: &KeyedReference,
    ) -> Result<Target, RelationshipError> {
        let missing = |field: &str| RelationshipError::MalformedReference {
            entity: entity.name().to_string(),
            kind,
            reference: RawReference::Keyed(keyed.clone()).to_string(),
            reason: format!("missing {field}"),
        };
        let table = keyed.table.as_deref().ok_or_else(|| missing("table"))?;
        let reference = keyed.reference.as_deref().ok_or_else(|| missing("reference"))?;
        let foreign_key = keyed.foreign_key.as_deref().ok_or_else(|| missing("foreignKey"))?;

        let class = studly(&singularize(table));
        let base = if kind == RelationshipKind::BelongsTo {
            strip_id_suffix(foreign_key).to_string()
        } else {
            singularize(table)
        };
        Ok(Target {
            method_name: accessor_name(kind, &base),
            class,
            fqn: None,
            local_key: Some(foreign_key.to_string()),
            foreign_key: Some(reference.to_string()),
            morph_source: table.to_string(),
        })
    }

    fn bare_target(entity: &Entity, kind: RelationshipKind, name: &str) -> Target {
        let base = strip_id_suffix(name);

        let method_name = match (kind, name.strip_prefix(USER_REFERENCE_PREFIX)) {
            (RelationshipKind::BelongsTo, Some(suffix)) if !suffix.is_empty() => {
                format!("user{}", studly(suffix))
            }
            (RelationshipKind::MorphTo, _) if name.is_empty() => {
                format!("{}able", entity.name().to_lowercase())
            }
            (RelationshipKind::MorphTo, _) => camel(name),
            _ => accessor_name(kind, base),
        };

        let class_source = if kind == RelationshipKind::BelongsTo
            && name.starts_with(USER_REFERENCE_PREFIX)
        {
            "user"
        } else {
            entity.column(name).and_then(|column| column.foreign_target()).unwrap_or(base)
        };

        Target {
            method_name,
            class: studly(&singularize(strip_id_suffix(class_source))),
            fqn: None,
            local_key: None,
            foreign_key: None,
            morph_source: base.to_string(),
        }
    }

    fn pivot(
        &self,
        entity: &Entity,
        kind: RelationshipKind,
        reference: &str,
        pivot_name: &str,
    ) -> Result<PivotDescriptor, RelationshipError> {
        let malformed = |reason: &str| RelationshipError::MalformedReference {
            entity: entity.name().to_string(),
            kind,
            reference: reference.to_string(),
            reason: reason.to_string(),
        };
        if kind != RelationshipKind::BelongsToMany {
            return Err(malformed("pivot entities only apply to belongsToMany"));
        }
        if pivot_name.is_empty() {
            return Err(malformed("missing pivot name"));
        }

        let pivot = self.tree.entity_for_context(pivot_name, true).ok_or_else(|| {
            RelationshipError::MissingPivot {
                entity: entity.name().to_string(),
                pivot: pivot_name.to_string(),
            }
        })?;
        let fqn = pivot.fully_qualified_name(self.tree.config());

        Ok(PivotDescriptor {
            class_reference: self.class_reference(entity, &fqn),
            alias: snake(pivot.name()),
            columns: pivot.pivot_columns(),
            timestamps: pivot.uses_timestamps(),
        })
    }

    fn qualify(&self, entity: &Entity, class: &str) -> String {
        if let Some(fqn) = self.tree.fully_qualified_name_for_context(class) {
            return fqn;
        }
        let namespace = entity.fully_qualified_namespace(self.tree.config());
        tracing::warn!(
            entity = entity.name(),
            target = class,
            "relationship target not found; assuming sibling namespace {namespace}"
        );
        format!("{namespace}\\{class}")
    }

    fn class_reference(&self, entity: &Entity, fqn: &str) -> String {
        let namespace = entity.fully_qualified_namespace(self.tree.config());
        match fqn.rsplit_once('\\') {
            Some((target_namespace, class)) if target_namespace == namespace => format!("{class}::class"),
            Some(_) => format!("\\{fqn}::class"),
            None => format!("{fqn}::class"),
        }
    }
}

/// Accessor name for a base name: camel-cased, pluralized for collection kinds.
fn accessor_name(kind: RelationshipKind, base: &str) -> String {
    let name = camel(base);
    if kind.is_plural() {
        pluralize(&name)
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::Column;

    fn column(name: &str, kind: &str, attributes: &[&str]) -> Column {
        Column::new(name, kind, attributes.iter().map(|a| (*a).to_string()).collect(), vec![])
    }

    fn comment() -> Entity {
        let mut comment = Entity::new("Comment");
        comment.add_column(column("post_id", "id", &["Post"]));
        comment.add_column(column("body", "string", &[]));
        comment.add_relationship(RelationshipKind::BelongsTo, RawReference::name("post_id"));
        comment
    }

    fn membership(extra: bool, timestamps: bool) -> Entity {
        let mut pivot = Entity::new("Membership");
        pivot.set_pivot(true);
        pivot.set_timestamps(timestamps);
        pivot.add_column(column("user_id", "id", &[]));
        pivot.add_column(column("team_id", "id", &[]));
        if extra {
            pivot.add_column(column("role", "string", &[]));
        }
        pivot
    }

    fn tree(entities: Vec<Entity>) -> Tree {
        Tree::new(&Config::default(), entities, vec![], None)
    }

    #[test]
    fn belongs_to_column_reference() {
        let tree = tree(vec![comment(), Entity::new("Post")]);
        let engine = RelationshipEngine::new(&tree);
        let comment = tree.entity_for_context("comment", false).unwrap();

        let d = engine.resolve(comment, RelationshipKind::BelongsTo, &RawReference::name("post_id")).unwrap();
        assert_eq!(d.method_name, "post");
        assert_eq!(d.target.as_deref(), Some("App\\Models\\Post"));
        assert_eq!(d.target_class(), Some("Post"));
        assert_eq!(d.local_key, None);
        assert_eq!(d.foreign_key, None);
        assert_eq!(d.render(), "$this->belongsTo(Post::class)");
    }

    #[test]
    fn column_attribute_overrides_target() {
        let mut post = Entity::new("Post");
        post.add_column(column("author_id", "id", &["user"]));
        let tree = tree(vec![post, Entity::new("User")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();

        let d = engine.resolve(post, RelationshipKind::BelongsTo, &RawReference::name("author_id")).unwrap();
        assert_eq!(d.method_name, "author");
        assert_eq!(d.target.as_deref(), Some("App\\Models\\User"));
    }

    #[test]
    fn has_many_pluralizes_accessor() {
        let tree = tree(vec![Entity::new("Post"), comment()]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();

        let d = engine.resolve(post, RelationshipKind::HasMany, &RawReference::name("Comment")).unwrap();
        assert_eq!(d.method_name, "comments");
        assert_eq!(d.render(), "$this->hasMany(Comment::class)");
    }

    #[test]
    fn user_references_are_disambiguated() {
        let tree = tree(vec![Entity::new("Ticket"), Entity::new("User")]);
        let engine = RelationshipEngine::new(&tree);
        let ticket = tree.entity_for_context("ticket", false).unwrap();

        let assignee = engine
            .resolve(ticket, RelationshipKind::BelongsTo, &RawReference::name("user_id_assignee"))
            .unwrap();
        let reporter = engine
            .resolve(ticket, RelationshipKind::BelongsTo, &RawReference::name("user_id_reporter"))
            .unwrap();
        assert_eq!(assignee.method_name, "userAssignee");
        assert_eq!(reporter.method_name, "userReporter");
        assert_eq!(assignee.target.as_deref(), Some("App\\Models\\User"));
    }

    #[test]
    fn accessor_override_after_colon() {
        let tree = tree(vec![Entity::new("Post"), Entity::new("User")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();

        let d = engine.resolve(post, RelationshipKind::BelongsTo, &RawReference::name("user_id:writer")).unwrap();
        assert_eq!(d.method_name, "writer");
        assert_eq!(d.target.as_deref(), Some("App\\Models\\User"));
    }

    #[test]
    fn fully_qualified_reference_is_used_verbatim() {
        let tree = tree(vec![Entity::new("Post")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();

        let d = engine
            .resolve(post, RelationshipKind::BelongsTo, &RawReference::name("\\Vendor\\Billing\\Account"))
            .unwrap();
        assert_eq!(d.method_name, "account");
        assert_eq!(d.target.as_deref(), Some("Vendor\\Billing\\Account"));
        assert_eq!(d.render(), "$this->belongsTo(\\Vendor\\Billing\\Account::class)");
    }

    #[test]
    fn keyed_reference_sets_explicit_keys() {
        let tree = tree(vec![Entity::new("Post"), Entity::new("User")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();
        let reference = RawReference::Keyed(KeyedReference {
            foreign_key: Some("owner_id".into()),
            table: Some("users".into()),
            reference: Some("uuid".into()),
        });

        let d = engine.resolve(post, RelationshipKind::BelongsTo, &reference).unwrap();
        assert_eq!(d.method_name, "owner");
        assert_eq!(d.target.as_deref(), Some("App\\Models\\User"));
        assert_eq!(d.render(), "$this->belongsTo(User::class, 'owner_id', 'uuid')");
    }

    #[test]
    fn keyed_reference_missing_table_is_an_error() {
        let tree = tree(vec![Entity::new("Post")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();
        let reference = RawReference::Keyed(KeyedReference {
            foreign_key: Some("owner_id".into()),
            table: None,
            reference: Some("id".into()),
        });

        let err = engine.resolve(post, RelationshipKind::BelongsTo, &reference).unwrap_err();
        assert!(matches!(err, RelationshipError::MalformedReference { ref reason, .. } if reason == "missing table"));
    }

    #[test]
    fn unresolvable_target_falls_back_to_sibling_namespace() {
        let tree = tree(vec![Entity::new("Admin/Invoice")]);
        let engine = RelationshipEngine::new(&tree);
        let invoice = tree.entity_for_context("invoice", false).unwrap();

        let d = engine.resolve(invoice, RelationshipKind::BelongsTo, &RawReference::name("customers")).unwrap();
        assert_eq!(d.target.as_deref(), Some("App\\Models\\Admin\\Customer"));
        assert_eq!(d.render(), "$this->belongsTo(Customer::class)");
    }

    #[test]
    fn cross_namespace_target_is_fully_qualified_in_body() {
        let tree = tree(vec![Entity::new("Admin/Invoice"), Entity::new("User")]);
        let engine = RelationshipEngine::new(&tree);
        let invoice = tree.entity_for_context("invoice", false).unwrap();

        let d = engine.resolve(invoice, RelationshipKind::BelongsTo, &RawReference::name("user_id")).unwrap();
        assert_eq!(d.render(), "$this->belongsTo(\\App\\Models\\User::class)");
    }

    #[test]
    fn morph_names() {
        let tree = tree(vec![Entity::new("Post"), Entity::new("Image"), Entity::new("Tag")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();
        let tag = tree.entity_for_context("tag", false).unwrap();
        let image = tree.entity_for_context("image", false).unwrap();

        let many = engine.resolve(post, RelationshipKind::MorphMany, &RawReference::name("Image")).unwrap();
        assert_eq!(many.method_name, "images");
        assert_eq!(many.render(), "$this->morphMany(Image::class, 'imageable')");

        let by_many = engine.resolve(tag, RelationshipKind::MorphedByMany, &RawReference::name("Post")).unwrap();
        assert_eq!(by_many.render(), "$this->morphedByMany(Post::class, 'tagable')");

        let morph_to = engine.resolve(image, RelationshipKind::MorphTo, &RawReference::name("imageable")).unwrap();
        assert_eq!(morph_to.method_name, "imageable");
        assert_eq!(morph_to.target, None);
        assert_eq!(morph_to.render(), "$this->morphTo('imageable')");
    }

    #[test]
    fn every_kind_resolves_accessor_target_and_body() {
        let tree = tree(
            ["Post", "User", "Profile", "Comment", "Tag", "Image", "Video"].into_iter().map(Entity::new).collect(),
        );
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();

        let cases = [
            (RelationshipKind::BelongsTo, "user_id", "user", Some("User"), "$this->belongsTo(User::class)"),
            (RelationshipKind::HasOne, "Profile", "profile", Some("Profile"), "$this->hasOne(Profile::class)"),
            (RelationshipKind::HasMany, "Comment", "comments", Some("Comment"), "$this->hasMany(Comment::class)"),
            (RelationshipKind::BelongsToMany, "Tag", "tags", Some("Tag"), "$this->belongsToMany(Tag::class)"),
            (RelationshipKind::MorphOne, "Image", "image", Some("Image"), "$this->morphOne(Image::class, 'imageable')"),
            (RelationshipKind::MorphMany, "Image", "images", Some("Image"), "$this->morphMany(Image::class, 'imageable')"),
            (RelationshipKind::MorphToMany, "Tag", "tags", Some("Tag"), "$this->morphToMany(Tag::class, 'tagable')"),
            (RelationshipKind::MorphToMany, "Tags", "tags", Some("Tag"), "$this->morphToMany(Tag::class, 'tagable')"),
            (
                RelationshipKind::MorphedByMany,
                "Video",
                "videos",
                Some("Video"),
                "$this->morphedByMany(Video::class, 'postable')",
            ),
            (RelationshipKind::MorphTo, "", "postable", None, "$this->morphTo('postable')"),
        ];

        for (kind, reference, method, target, body) in cases {
            let d = engine.resolve(post, kind, &RawReference::name(reference)).unwrap();
            assert_eq!(d.method_name, method, "{kind} {reference}");
            assert_eq!(d.target_class(), target, "{kind} {reference}");
            assert_eq!(d.render(), body, "{kind} {reference}");
        }
    }

    #[test]
    fn keyed_reference_on_has_many_keeps_key_order() {
        let tree = tree(vec![Entity::new("Post"), Entity::new("Comment")]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();
        let reference = RawReference::Keyed(KeyedReference {
            foreign_key: Some("uuid".into()),
            table: Some("comments".into()),
            reference: Some("post_uuid".into()),
        });

        let d = engine.resolve(post, RelationshipKind::HasMany, &reference).unwrap();
        assert_eq!(d.method_name, "comments");
        assert_eq!(d.target.as_deref(), Some("App\\Models\\Comment"));
        assert_eq!(d.render(), "$this->hasMany(Comment::class, 'uuid', 'post_uuid')");
    }

    #[test]
    fn pivot_without_extras_omits_optional_segments() {
        let tree = tree(vec![Entity::new("User"), Entity::new("Team"), membership(false, false)]);
        let engine = RelationshipEngine::new(&tree);
        let user = tree.entity_for_context("user", false).unwrap();

        let d = engine
            .resolve(user, RelationshipKind::BelongsToMany, &RawReference::name("Team:&Membership"))
            .unwrap();
        assert_eq!(d.method_name, "teams");
        let rendered = d.render();
        assert!(rendered.contains("->using(Membership::class)"));
        assert!(rendered.contains("->as('membership')"));
        assert!(!rendered.contains("withPivot"));
        assert!(!rendered.contains("withTimestamps"));
    }

    #[test]
    fn pivot_with_extras_emits_segments_in_order() {
        let tree = tree(vec![Entity::new("User"), Entity::new("Team"), membership(true, true)]);
        let engine = RelationshipEngine::new(&tree);
        let user = tree.entity_for_context("user", false).unwrap();

        let rendered = engine
            .resolve(user, RelationshipKind::BelongsToMany, &RawReference::name("Team:&Membership"))
            .unwrap()
            .render();
        let positions: Vec<usize> = ["->using(", "->as(", "->withPivot('role')", "->withTimestamps()"]
            .iter()
            .map(|segment| rendered.find(segment).unwrap())
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{rendered}");
    }

    #[test]
    fn missing_pivot_entity_is_an_error() {
        let tree = tree(vec![Entity::new("User"), Entity::new("Team")]);
        let engine = RelationshipEngine::new(&tree);
        let user = tree.entity_for_context("user", false).unwrap();

        let err = engine
            .resolve(user, RelationshipKind::BelongsToMany, &RawReference::name("Team:&Membership"))
            .unwrap_err();
        assert_eq!(
            err,
            RelationshipError::MissingPivot { entity: "User".into(), pivot: "Membership".into() }
        );
    }

    #[test]
    fn empty_pivot_name_is_malformed() {
        let tree = tree(vec![Entity::new("User"), Entity::new("Team")]);
        let engine = RelationshipEngine::new(&tree);
        let user = tree.entity_for_context("user", false).unwrap();

        let err = engine
            .resolve(user, RelationshipKind::BelongsToMany, &RawReference::name("Team:&"))
            .unwrap_err();
        assert!(matches!(err, RelationshipError::MalformedReference { .. }));
    }

    #[test]
    fn resolution_is_deterministic() {
        let tree = tree(vec![comment(), Entity::new("Post")]);
        let engine = RelationshipEngine::new(&tree);
        let comment = tree.entity_for_context("comment", false).unwrap();

        let first = engine.resolve_all(comment).unwrap();
        let second = engine.resolve_all(comment).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn imports_are_sorted_and_unique() {
        let mut post = Entity::new("Post");
        post.add_relationship(RelationshipKind::HasMany, RawReference::name("Comment"));
        post.add_relationship(RelationshipKind::BelongsTo, RawReference::name("user_id"));
        post.add_relationship(RelationshipKind::HasMany, RawReference::name("Like"));
        post.add_relationship(RelationshipKind::BelongsTo, RawReference::name("category_id"));
        let tree = tree(vec![post]);
        let engine = RelationshipEngine::new(&tree);
        let post = tree.entity_for_context("post", false).unwrap();

        let descriptors = engine.resolve_all(post).unwrap();
        let imports: Vec<String> = RelationshipEngine::imports(&descriptors).into_iter().collect();
        assert_eq!(
            imports,
            vec![
                "Illuminate\\Database\\Eloquent\\Relations\\BelongsTo".to_string(),
                "Illuminate\\Database\\Eloquent\\Relations\\HasMany".to_string(),
            ]
        );
    }
}
