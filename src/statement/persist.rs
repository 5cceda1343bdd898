//! Persist-entity statements: `save`, `update`, `find`, `delete`.

use serde::Serialize;

use super::output::{Compiled, TestedBits};
use super::StatementContext;
use crate::naming::{camel, pluralize, variable_expression};

/// Which persistence operation to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersistOperation {
    /// Create (in `store`) or save an instance.
    Save,
    /// Update an instance.
    Update,
    /// Look an instance up by identifier.
    Find,
    /// Delete an instance, or delete by identifier.
    Delete,
}

/// A persistence statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersistStatement {
    /// Operation to perform.
    pub operation: PersistOperation,
    /// Entity or qualified reference (`post`, `comment.post_id`).
    pub reference: Option<String>,
    /// Explicit columns for `update`.
    pub columns: Vec<String>,
}

impl PersistStatement {
    /// Returns `true` when the reference is dotted (`comment.post_id`).
    #[must_use]
    pub fn uses_qualified_reference(&self) -> bool {
        self.reference.as_deref().is_some_and(|reference| reference.contains('.'))
    }

    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let reference = self.reference.as_deref().unwrap_or_default();
        let model = cx.model(reference);
        let variable = camel(&model);

        let mut compiled = match self.operation {
            PersistOperation::Save => self.save(cx, &model, &variable),
            PersistOperation::Update => self.update(cx, &variable),
            PersistOperation::Find => Self::find(cx, &model, &variable, reference),
            PersistOperation::Delete => self.delete(cx, &model, &variable, reference),
        };
        compiled.imports.insert(cx.model_class(&model));
        compiled.test.imports.insert(cx.model_class(&model));
        compiled
    }

    fn save(&self, cx: &StatementContext<'_>, model: &str, variable: &str) -> Compiled {
        if cx.method == "store" {
            let input = if cx.validated { "$request->validated()" } else { "$request->all()" };
            let mut compiled = Compiled::line(format!("${variable} = {model}::create({input});"));
            let plural = pluralize(variable);
            compiled.test.assertions.push(format!(
                "${plural} = {model}::query()->get();\n$this->assertCount(1, ${plural});\n${variable} = ${plural}->first();"
            ));
            compiled.test.tested = TestedBits::SAVE;
            return compiled;
        }

        let mut compiled = Compiled::line(format!("${variable}->save();"));
        compiled.test.setup.push(cx.factory_setup(model));
        compiled.test.assertions.push(format!("$this->assertModelExists(${variable});"));
        compiled.test.tested = TestedBits::SAVE;
        compiled
    }

    fn update(&self, cx: &StatementContext<'_>, variable: &str) -> Compiled {
        let mut compiled = if self.columns.is_empty() {
            let input = if cx.validated { "$request->validated()" } else { "[]" };
            Compiled::line(format!("${variable}->update({input});"))
        } else {
            let mut code = vec![format!("${variable}->update([")];
            code.extend(self.columns.iter().map(|column| format!("    '{column}' => ${column},")));
            code.push("]);".to_string());
            Compiled { code, ..Compiled::default() }
        };

        compiled.test.assertions.push(format!("${variable}->refresh();"));
        for column in &self.columns {
            compiled.test.assertions.push(format!("$this->assertEquals(${column}, ${variable}->{column});"));
        }
        compiled.test.tested = TestedBits::SAVE;
        compiled
    }

    fn find(cx: &StatementContext<'_>, model: &str, variable: &str, reference: &str) -> Compiled {
        let identifier = reference.rsplit_once('.').map_or("id", |(_, column)| column);
        let mut compiled = Compiled::line(format!("${variable} = {model}::find(${identifier});"));
        compiled.test.setup.push(cx.factory_setup(model));
        compiled
    }

    fn delete(&self, cx: &StatementContext<'_>, model: &str, variable: &str, reference: &str) -> Compiled {
        let mut compiled = if self.uses_qualified_reference() {
            Compiled::line(format!("{model}::destroy({});", variable_expression(reference)))
        } else {
            Compiled::line(format!("${variable}->delete();"))
        };

        compiled.test.setup.push(cx.factory_setup(model));
        let soft = cx.tree.entity_for_context(model, false).is_some_and(|e| e.uses_soft_deletes());
        compiled.test.assertions.push(if soft {
            format!("$this->assertSoftDeleted(${variable});")
        } else {
            format!("$this->assertModelMissing(${variable});")
        });
        compiled.test.tested = TestedBits::DELETE;
        compiled
    }
}
