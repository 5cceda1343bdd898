//! Validation statements.
//!
//! Validation emits no controller line. It binds the method to a form
//! request class and seeds the generated test with request data.

use serde::Serialize;

use super::output::Compiled;
use super::StatementContext;
use crate::model::{Column, Entity};
use crate::naming::{camel, studly, strip_id_suffix};

const ASSERTIONS_TRAIT: &str = "JMac\\Testing\\Traits\\AdditionalAssertions";

/// Validates the request against the named columns, or against every
/// column of a named entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidateStatement {
    /// Column names or a single entity reference.
    pub data: Vec<String>,
}

impl ValidateStatement {
    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let class = format!("{}{}Request", cx.prefix(), studly(cx.method));
        let qualified = cx.config.request_class(&class);

        let mut compiled = Compiled { validates_with: Some(qualified.clone()), ..Compiled::default() };
        compiled.imports.insert(qualified.clone());
        compiled.test.imports.insert(qualified);
        compiled.test.traits.insert(ASSERTIONS_TRAIT);
        compiled.test.form_request = Some(class);

        let Some(entity) = cx.tree.entity_for_context(&cx.prefix(), false) else {
            tracing::warn!(entity = %cx.prefix(), "validated entity not found; test sends no data");
            return compiled;
        };

        for column in self.columns(cx, entity) {
            if column.name() == "id" {
                continue;
            }
            let (setup, value) = fake_value(cx, column);
            if let Some(setup) = setup {
                if column.is_foreign_key() {
                    compiled.test.imports.insert(cx.model_class(&foreign_model(column)));
                }
                compiled.test.setup.push(setup);
            }
            compiled.test.request_data.push(format!("'{}' => {value}", column.name()));
        }
        compiled
    }

    fn columns<'e>(&self, cx: &StatementContext<'e>, entity: &'e Entity) -> Vec<&'e Column> {
        if let [single] = self.data.as_slice() {
            if let Some(named) = cx.tree.entity_for_context(single, false) {
                return named.columns().values().collect();
            }
        }
        self.data.iter().filter_map(|name| entity.column(name)).collect()
    }
}

fn foreign_model(column: &Column) -> String {
    column.foreign_target().map_or_else(|| studly(strip_id_suffix(column.name())), studly)
}

/// Arrange line (if any) and the request value for one column.
fn fake_value(cx: &StatementContext<'_>, column: &Column) -> (Option<String>, String) {
    let variable = camel(column.name());

    if column.is_foreign_key() {
        let model = foreign_model(column);
        let binding = camel(strip_id_suffix(column.name()));
        return (Some(cx.factory_setup_as(&model, &binding)), format!("${binding}->id"));
    }

    let faker = match column.data_type() {
        "string" | "char" => match column.name() {
            "email" => "fake()->safeEmail()",
            "name" => "fake()->name()",
            "slug" => "fake()->slug()",
            "password" => "fake()->password()",
            "url" => "fake()->url()",
            _ => "fake()->word()",
        },
        "text" | "mediumText" | "longText" | "longtext" | "mediumtext" => "fake()->text()",
        "boolean" => "fake()->boolean()",
        "date" => "fake()->date()",
        "datetime" | "datetimetz" | "timestamp" | "timestamptz" => "fake()->dateTime()",
        "decimal" | "double" | "float" | "unsignedDecimal" => "fake()->randomFloat(2, 0, 999999.99)",
        "integer" | "bigInteger" | "smallInteger" | "tinyInteger" | "unsignedInteger"
        | "unsignedBigInteger" | "unsignedSmallInteger" | "unsignedTinyInteger" => {
            "fake()->numberBetween(-10000, 10000)"
        }
        "uuid" => "fake()->uuid()",
        "json" | "jsonb" => "'{}'",
        "enum" => {
            let first = column.attributes().first().map_or("", String::as_str);
            return (Some(format!("${variable} = '{first}';")), format!("${variable}"));
        }
        _ => "fake()->word()",
    };
    (Some(format!("${variable} = {faker};")), format!("${variable}"))
}
