//! Column definition grammar: `[modifiers] kind[:attr,attr] [modifiers]`.

use crate::model::{Column, Modifier};

/// Modifiers that take no value.
const FLAGS: [&str; 11] = [
    "nullable",
    "unsigned",
    "unique",
    "index",
    "primary",
    "autoIncrement",
    "useCurrent",
    "useCurrentOnUpdate",
    "fulltext",
    "foreign",
    "always",
];

/// Modifiers written as `name:value`.
const KEYED: [&str; 7] = ["default", "foreign", "onDelete", "onUpdate", "comment", "charset", "collation"];

/// Reads one column definition.
///
/// A bare column name with no definition is a `string`; an `id` column with
/// no definition is the primary key.
///
/// # Errors
///
/// Returns a reason if a token is empty or more than one column kind is given.
pub fn parse_column(name: &str, definition: &str) -> Result<Column, String> {
    let mut data_type: Option<(String, Vec<String>)> = None;
    let mut modifiers = Vec::new();

    for token in definition.split_whitespace() {
        let (head, value) = match token.split_once(':') {
            Some((head, value)) => (head, Some(value)),
            None => (token, None),
        };
        if head.is_empty() {
            return Err(format!("unexpected token '{token}'"));
        }

        match value {
            None if FLAGS.contains(&head) => modifiers.push(Modifier::flag(head)),
            Some(value) if KEYED.contains(&head) => modifiers.push(Modifier::keyed(head, unquote(value))),
            _ => {
                if let Some((existing, _)) = &data_type {
                    return Err(format!("column kind given twice ('{existing}' and '{head}')"));
                }
                let attributes = value
                    .map(|attrs| attrs.split(',').map(|attr| unquote(attr.trim()).to_string()).collect())
                    .unwrap_or_default();
                data_type = Some((head.to_string(), attributes));
            }
        }
    }

    let (data_type, attributes) = data_type.unwrap_or_else(|| {
        let default = if name == "id" { "id" } else { "string" };
        (default.to_string(), Vec::new())
    });
    Ok(Column::new(name, &data_type, attributes, modifiers))
}

fn unquote(value: &str) -> &str {
    value.trim_matches(|c| c == '\'' || c == '"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_kind_and_attributes() {
        let column = parse_column("title", "string:400").unwrap();
        assert_eq!(column.data_type(), "string");
        assert_eq!(column.attributes(), ["400"]);

        let column = parse_column("price", "decimal:8,2").unwrap();
        assert_eq!(column.attributes(), ["8", "2"]);
    }

    #[test]
    fn modifiers_may_precede_or_follow_the_kind() {
        let column = parse_column("published_at", "nullable timestamp").unwrap();
        assert_eq!(column.data_type(), "timestamp");
        assert!(column.is_nullable());

        let column = parse_column("status", "enum:draft,published default:draft index").unwrap();
        assert_eq!(column.data_type(), "enum");
        assert_eq!(column.attributes(), ["draft", "published"]);
        assert_eq!(column.modifier_value("default"), Some("draft"));
        assert!(column.has_modifier("index"));
    }

    #[test]
    fn foreign_modifier_with_and_without_table() {
        let column = parse_column("owner_id", "id foreign:users onDelete:cascade").unwrap();
        assert_eq!(column.modifier_value("foreign"), Some("users"));
        assert_eq!(column.modifier_value("onDelete"), Some("cascade"));

        let column = parse_column("post_id", "id foreign").unwrap();
        assert!(column.has_modifier("foreign"));
        assert!(column.is_foreign_key());
    }

    #[test]
    fn bare_columns_get_default_kinds() {
        assert_eq!(parse_column("name", "").unwrap().data_type(), "string");
        assert_eq!(parse_column("id", "").unwrap().data_type(), "id");
    }

    #[test]
    fn rejects_two_kinds_and_empty_tokens() {
        assert!(parse_column("title", "string text").is_err());
        assert!(parse_column("title", ": :").is_err());
    }
}
