//! Build-resource statements.

use serde::Serialize;

use super::output::{Compiled, TestedBits};
use super::StatementContext;
use crate::naming::{camel, pluralize, singularize};

/// Wraps an entity, or a collection of them, in an API resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceStatement {
    /// Variable holding the entity or collection.
    pub reference: String,
    /// Whether the resource wraps a collection.
    pub collection: bool,
    /// Whether the collection is paginated.
    pub paginate: bool,
}

impl ResourceStatement {
    /// Resource class name for `model`: `PostResource` or `PostCollection`.
    #[must_use]
    pub fn class(&self, model: &str) -> String {
        if self.collection {
            format!("{model}Collection")
        } else {
            format!("{model}Resource")
        }
    }

    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let model = cx.model(&singularize(&self.reference));
        let class = self.class(&model);
        let singular = camel(&model);
        let variable = if self.collection { pluralize(&singular) } else { singular };

        let mut compiled = Compiled::line(format!("return new {class}(${variable});"));
        compiled.return_type = Some(class.clone());
        compiled.imports.insert(cx.config.resource_class(&class));
        compiled.test.assertions.push("$response->assertOk();".to_string());
        // Paginated collections carry Laravel's pagination envelope.
        let structure = if self.paginate { "['data', 'links', 'meta']" } else { "[]" };
        compiled.test.assertions.push(format!("$response->assertJsonStructure({structure});"));
        compiled.test.tested = TestedBits::RESPONDS;
        compiled
    }
}
