//! Model generator.

use std::path::PathBuf;

use super::{class_path, indent, render, stub, GenerateError};
use crate::config::Config;
use crate::model::{Column, Entity, KeyKind};
use crate::ports::ArtifactStore;
use crate::relationship::RelationshipEngine;
use crate::statement::ImportSet;
use crate::tree::Tree;

const MODEL: &str = "Illuminate\\Database\\Eloquent\\Model";
const PIVOT: &str = "Illuminate\\Database\\Eloquent\\Relations\\Pivot";
const HAS_FACTORY: &str = "Illuminate\\Database\\Eloquent\\Factories\\HasFactory";
const SOFT_DELETES: &str = "Illuminate\\Database\\Eloquent\\SoftDeletes";
const HAS_UUIDS: &str = "Illuminate\\Database\\Eloquent\\Concerns\\HasUuids";
const HAS_ULIDS: &str = "Illuminate\\Database\\Eloquent\\Concerns\\HasUlids";

/// Where the model class for `entity` is written.
#[must_use]
pub fn model_path(entity: &Entity, config: &Config) -> PathBuf {
    class_path(&config.app_path, &entity.fully_qualified_namespace(config), &config.namespace, entity.name())
}

/// Renders the model class for `entity`.
///
/// # Errors
///
/// Returns an error if a relationship cannot be resolved or a stub is missing.
pub fn render_model(entity: &Entity, tree: &Tree, config: &Config, store: &dyn ArtifactStore) -> Result<String, GenerateError> {
    let descriptors = RelationshipEngine::new(tree).resolve_all(entity)?;

    let parent = if entity.is_pivot() { PIVOT } else { MODEL };
    let mut imports: ImportSet = [parent, HAS_FACTORY].into_iter().collect();
    let mut traits = vec!["HasFactory"];
    if entity.uses_soft_deletes() {
        imports.insert(SOFT_DELETES);
        traits.push("SoftDeletes");
    }
    match entity.key() {
        KeyKind::Uuid => {
            imports.insert(HAS_UUIDS);
            traits.push("HasUuids");
        }
        KeyKind::Ulid => {
            imports.insert(HAS_ULIDS);
            traits.push("HasUlids");
        }
        KeyKind::Increments => {}
    }
    for import in RelationshipEngine::imports(&descriptors) {
        imports.insert(import);
    }

    traits.sort_unstable();
    let mut sections = vec![format!("use {};", traits.join(", "))];
    if let Some(connection) = entity.connection() {
        sections.push(format!("protected $connection = '{connection}';"));
    }
    if let Some(table) = entity.custom_table() {
        sections.push(format!("protected $table = '{table}';"));
    }
    if !entity.uses_timestamps() {
        sections.push("public $timestamps = false;".to_string());
    }
    sections.push(fillable(entity, config));
    if let Some(casts) = casts(entity) {
        sections.push(casts);
    }

    let method_stub = stub(store, "model.method")?;
    for descriptor in &descriptors {
        let relationship = descriptor.render();
        let method = render(
            &method_stub,
            &[
                ("method", descriptor.method_name.as_str()),
                ("return_type", descriptor.kind.class()),
                ("relationship", relationship.as_str()),
            ],
        );
        sections.push(method.trim_end().trim_start_matches(' ').to_string());
    }

    let body = sections.iter().map(|section| indent_first(section)).collect::<Vec<_>>().join("\n\n");
    let phpdoc = if config.generate_phpdocs { phpdoc(entity) } else { String::new() };
    let parent_class = parent.rsplit('\\').next().unwrap_or(parent);

    let namespace = entity.fully_qualified_namespace(config);
    let imports = imports.to_use_statements();
    let text = render(
        &stub(store, "model")?,
        &[
            ("namespace", namespace.as_str()),
            ("imports", imports.as_str()),
            ("phpdoc", phpdoc.as_str()),
            ("class", entity.name()),
            ("parent", parent_class),
            ("body", body.as_str()),
        ],
    );
    tracing::debug!(entity = entity.name(), relationships = descriptors.len(), "rendered model");
    Ok(text)
}

/// Indents a class member; multi-line members keep their inner layout.
fn indent_first(section: &str) -> String {
    let mut lines = section.lines();
    let first = lines.next().unwrap_or_default();
    let rest: Vec<&str> = lines.collect();
    if rest.is_empty() {
        return indent(first, 4);
    }
    // Method stubs already carry member indentation after the first line.
    if section.starts_with("public function") {
        return format!("    {first}\n{}", rest.join("\n"));
    }
    format!("{}\n{}", indent(first, 4), indent(&rest.join("\n"), 4))
}

fn fillable(entity: &Entity, config: &Config) -> String {
    if config.use_guarded {
        return "protected $guarded = [];".to_string();
    }
    let columns: Vec<String> = entity
        .columns()
        .values()
        .filter(|column| column.name() != "id")
        .map(|column| format!("    '{}',", column.name()))
        .collect();
    if columns.is_empty() {
        return "protected $fillable = [];".to_string();
    }
    format!("protected $fillable = [\n{}\n];", columns.join("\n"))
}

fn casts(entity: &Entity) -> Option<String> {
    let casts: Vec<String> = entity
        .columns()
        .values()
        .filter_map(|column| column.cast().map(|cast| format!("    '{}' => '{cast}',", column.name())))
        .collect();
    if casts.is_empty() {
        return None;
    }
    Some(format!("protected $casts = [\n{}\n];", casts.join("\n")))
}

fn phpdoc(entity: &Entity) -> String {
    let mut lines = vec!["/**".to_string()];
    for column in entity.columns().values() {
        lines.push(format!(" * @property {} ${}", php_type(column), column.name()));
    }
    if entity.uses_timestamps() {
        lines.push(" * @property \\Carbon\\Carbon $created_at".to_string());
        lines.push(" * @property \\Carbon\\Carbon $updated_at".to_string());
    }
    if entity.uses_soft_deletes() {
        lines.push(" * @property \\Carbon\\Carbon $deleted_at".to_string());
    }
    lines.push(" */".to_string());
    format!("{}\n", lines.join("\n"))
}

fn php_type(column: &Column) -> &'static str {
    let base = match column.cast().as_deref() {
        Some("integer") => "int",
        Some("boolean") => "bool",
        Some("float") => "float",
        Some("array") => "array",
        Some("date" | "datetime") => "\\Carbon\\Carbon",
        Some(cast) if cast.starts_with("decimal") => "float",
        _ if column.name() == "id" && matches!(column.data_type(), "id" | "increments" | "bigIncrements") => "int",
        _ => "string",
    };
    if column.is_nullable() {
        match base {
            "int" => "int|null",
            "bool" => "bool|null",
            "float" => "float|null",
            "array" => "array|null",
            "\\Carbon\\Carbon" => "\\Carbon\\Carbon|null",
            _ => "string|null",
        }
    } else {
        base
    }
}
