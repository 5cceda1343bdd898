//! Cross-reference resolver over every entity and action container of a
//! generation pass, plus entities cached from earlier passes.

use indexmap::IndexMap;

use crate::config::Config;
use crate::model::{ActionContainer, Column, Entity};
use crate::naming::{singularize, studly};

/// Previously generated entities: name -> (column -> column kind).
pub type CachedEntities = IndexMap<String, IndexMap<String, String>>;

/// The aggregate root of one generation pass.
///
/// Built once before any inference runs and read-only afterwards.
#[derive(Debug, Clone)]
pub struct Tree {
    config: Config,
    entities: IndexMap<String, Entity>,
    controllers: Vec<ActionContainer>,
    cache: IndexMap<String, Entity>,
}

impl Tree {
    /// Builds a tree from fresh definitions and an optional cache.
    ///
    /// Cached entities shadowed by a fresh definition of the same name are
    /// dropped: the fresh entity wins wholesale.
    #[must_use]
    pub fn new(
        config: &Config,
        entities: Vec<Entity>,
        controllers: Vec<ActionContainer>,
        cached: Option<&CachedEntities>,
    ) -> Self {
        let entities: IndexMap<String, Entity> =
            entities.into_iter().map(|entity| (entity_key(&entity), entity)).collect();

        let mut cache = IndexMap::new();
        for (name, columns) in cached.into_iter().flatten() {
            let entity = cached_entity(name, columns);
            let key = entity_key(&entity);
            if entities.contains_key(&key) {
                tracing::debug!(entity = %key, "fresh definition shadows cached entity");
                continue;
            }
            cache.insert(key, entity);
        }

        Self { config: config.clone(), entities, controllers, cache }
    }

    /// The configuration this tree qualifies names with.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fresh entities in declaration order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }

    /// Entities known only from the cache.
    pub fn cached_entities(&self) -> impl Iterator<Item = &Entity> {
        self.cache.values()
    }

    /// Action containers in declaration order.
    #[must_use]
    pub fn controllers(&self) -> &[ActionContainer] {
        &self.controllers
    }

    /// Finds the entity most plausibly named `name`.
    ///
    /// Matching is case-insensitive on the singular class name, optionally
    /// qualified by a namespace (`Admin/User`). Fresh entities are consulted
    /// before cached ones; with `prefer_pivot`, a pivot entity wins over a
    /// regular one within the same set.
    #[must_use]
    pub fn entity_for_context(&self, name: &str, prefer_pivot: bool) -> Option<&Entity> {
        let normalized = name.trim_start_matches(['\\', '/']).replace('/', "\\");
        let (namespace, base) = match normalized.rsplit_once('\\') {
            Some((namespace, base)) => (Some(namespace), base),
            None => (None, normalized.as_str()),
        };
        if base.is_empty() {
            return None;
        }

        let exact = studly(base).to_lowercase();
        let singular = studly(&singularize(base)).to_lowercase();
        let matches = |entity: &&Entity| {
            let entity_name = entity.name().to_lowercase();
            (entity_name == exact || entity_name == singular)
                && namespace.map_or(true, |ns| {
                    entity.namespace().is_some_and(|own| own.eq_ignore_ascii_case(ns))
                        || self.qualified_namespace(entity).eq_ignore_ascii_case(ns)
                })
        };

        for set in [&self.entities, &self.cache] {
            let found: Vec<&Entity> = set.values().filter(matches).collect();
            if prefer_pivot {
                if let Some(pivot) = found.iter().find(|entity| entity.is_pivot()) {
                    return Some(pivot);
                }
            }
            if let Some(entity) = found.first() {
                return Some(entity);
            }
        }
        None
    }

    /// Fully-qualified class name of the entity matching `name`.
    #[must_use]
    pub fn fully_qualified_name_for_context(&self, name: &str) -> Option<String> {
        self.entity_for_context(name, false).map(|entity| entity.fully_qualified_name(&self.config))
    }

    fn qualified_namespace(&self, entity: &Entity) -> String {
        entity.fully_qualified_namespace(&self.config)
    }
}

fn entity_key(entity: &Entity) -> String {
    match entity.namespace() {
        Some(namespace) => format!("{namespace}\\{}", entity.name()),
        None => entity.name().to_string(),
    }
}

fn cached_entity(name: &str, columns: &IndexMap<String, String>) -> Entity {
    let mut entity = Entity::new(name);
    for (column, kind) in columns {
        let mut parts = kind.split(':');
        let data_type = parts.next().unwrap_or(kind);
        let attributes = parts
            .next()
            .map(|attrs| attrs.split(',').map(str::to_string).collect())
            .unwrap_or_default();
        entity.add_column(Column::new(column, data_type, attributes, vec![]));
    }
    entity
}
