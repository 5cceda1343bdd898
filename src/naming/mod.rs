//! Naming and inference utilities shared by every compiler stage.
//!
//! All functions here are pure. Case conversion delegates to `convert_case`;
//! singular/plural inflection lives in [`inflect`].

mod inflect;

use convert_case::{Case, Casing};

pub use inflect::{pluralize, singularize};

/// `post_title` -> `PostTitle`.
#[must_use]
pub fn studly(value: &str) -> String {
    value.to_case(Case::Pascal)
}

/// `post_title` -> `postTitle`.
#[must_use]
pub fn camel(value: &str) -> String {
    value.to_case(Case::Camel)
}

/// `PostTitle` -> `post_title`.
#[must_use]
pub fn snake(value: &str) -> String {
    value.to_case(Case::Snake)
}

/// `PostTitle` -> `post-title`.
#[must_use]
pub fn kebab(value: &str) -> String {
    value.to_case(Case::Kebab)
}

/// Removes a trailing `_id` from a column name, if present.
#[must_use]
pub fn strip_id_suffix(column: &str) -> &str {
    column.strip_suffix("_id").unwrap_or(column)
}

/// Resolves the entity class a statement operates on.
///
/// An empty reference or the literal `id` falls back to the container's
/// prefix; a dotted reference names the entity before the dot; anything else
/// names the entity directly.
#[must_use]
pub fn model_from_reference(reference: &str, context_prefix: &str) -> String {
    if reference.is_empty() || reference == "id" {
        return studly(&singularize(context_prefix));
    }
    match reference.split_once('.') {
        Some((model, _)) => studly(model),
        None => studly(reference),
    }
}

/// Turns a dotted reference into a PHP variable expression:
/// `post.author` -> `$post->author`.
#[must_use]
pub fn variable_expression(reference: &str) -> String {
    format!("${}", reference.replace('.', "->"))
}

/// Renders a parameter list for constructor and dispatch calls.
#[must_use]
pub fn parameter_list(data: &[String]) -> String {
    data.iter().map(|item| variable_expression(item)).collect::<Vec<_>>().join(", ")
}
