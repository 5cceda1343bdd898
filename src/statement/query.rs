//! Run-query statements.

use serde::Serialize;

use super::output::Compiled;
use super::StatementContext;
use crate::naming::{camel, pluralize, singularize, snake, variable_expression};

/// The terminal operation of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOperation {
    /// `Model::all()`, no clauses.
    All,
    /// `Model::paginate()`, no clauses.
    Paginate,
    /// `->get()` after clauses.
    Get,
    /// `->first()` after clauses.
    First,
    /// `->count()` after clauses.
    Count,
    /// `->exists()` after clauses.
    Exists,
    /// A `pluck:` clause ends the chain.
    Pluck,
}

/// One `method:argument` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryClause {
    /// Builder method (`where`, `order`, `pluck`, `limit`, ...).
    pub method: String,
    /// Argument as written.
    pub argument: String,
}

/// A query statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryStatement {
    /// Terminal operation.
    pub operation: QueryOperation,
    /// Explicit entity reference (`all:users`), else the container prefix.
    pub model: Option<String>,
    /// Clauses in order.
    pub clauses: Vec<QueryClause>,
}

impl QueryStatement {
    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let model = cx.model(&singularize(self.model.as_deref().unwrap_or_default()));
        let variable = camel(&model);

        let code = match self.operation {
            QueryOperation::All | QueryOperation::Paginate if self.clauses.is_empty() => {
                let call = if self.operation == QueryOperation::All { "all" } else { "paginate" };
                format!("${} = {model}::{call}();", pluralize(&variable))
            }
            _ => self.chain(&model, &variable),
        };

        let mut compiled = Compiled::line(code);
        compiled.imports.insert(cx.model_class(&model));
        compiled.test.imports.insert(cx.model_class(&model));
        compiled
            .test
            .setup
            .push(format!("${} = {model}::factory()->count(3)->create();", pluralize(&variable)));
        compiled
    }

    fn chain(&self, model: &str, variable: &str) -> String {
        let qualifier = snake(model);
        let mut methods = Vec::new();
        let mut pluck_field = None;

        for clause in &self.clauses {
            let column = column_name(&qualifier, &clause.argument);
            match clause.method.as_str() {
                "where" => methods.push(format!(
                    "where('{column}', {})",
                    variable_expression(&clause.argument)
                )),
                "order" => methods.push(format!("orderBy('{column}')")),
                "pluck" => {
                    pluck_field = Some(clause.argument.as_str());
                    methods.push(format!("pluck('{column}')"));
                }
                method => methods.push(format!("{method}({})", clause.argument)),
            }
        }

        let target = match (self.operation, pluck_field) {
            (QueryOperation::Pluck, Some(field)) => pluralize_attribute(field),
            (QueryOperation::Count, _) => format!("{variable}_count"),
            _ => pluralize(variable),
        };

        let terminal = match self.operation {
            QueryOperation::Count => Some("count"),
            QueryOperation::Exists => Some("exists"),
            QueryOperation::First => Some("first"),
            QueryOperation::Paginate => Some("paginate"),
            QueryOperation::Pluck => None,
            QueryOperation::Get | QueryOperation::All => Some("get"),
        };

        let mut code = format!("${target} = {model}::query()");
        for method in &methods {
            code.push_str("->");
            code.push_str(method);
        }
        if let Some(terminal) = terminal {
            code.push_str(&format!("->{terminal}()"));
        }
        code.push(';');
        code
    }
}

/// Strips a qualifier naming the queried entity: `post.title` -> `title`
/// when querying `Post`; other qualifiers are kept.
fn column_name(qualifier: &str, argument: &str) -> String {
    match argument.split_once('.') {
        Some((model, column)) if model == qualifier => column.to_string(),
        _ => argument.to_string(),
    }
}

/// `title` -> `titles`, `post.title` -> `post_titles`.
fn pluralize_attribute(field: &str) -> String {
    match field.split_once('.') {
        Some((model, column)) => format!("{model}_{}", pluralize(column)),
        None => pluralize(field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_name_strips_own_qualifier() {
        assert_eq!(column_name("post", "post.title"), "title");
        assert_eq!(column_name("post", "author.name"), "author.name");
        assert_eq!(column_name("post", "title"), "title");
    }

    #[test]
    fn pluralizes_plucked_attribute() {
        assert_eq!(pluralize_attribute("title"), "titles");
        assert_eq!(pluralize_attribute("post.title"), "post_titles");
    }
}
