//! Redirect statements.

use serde::Serialize;

use super::output::{Compiled, TestedBits};
use crate::naming::{camel, singularize, variable_expression};

/// Route actions that take the entity as a route parameter.
const ENTITY_ACTIONS: [&str; 4] = ["edit", "update", "show", "destroy"];

/// Redirects to a named route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectStatement {
    /// Route name (`post.show`).
    pub route: String,
    /// Explicit route parameters.
    pub data: Vec<String>,
}

impl RedirectStatement {
    /// Route parameters: the explicit ones, or the entity inferred from a
    /// dotted route whose last segment is an entity action.
    #[must_use]
    pub fn parameters(&self) -> Vec<String> {
        if !self.data.is_empty() {
            return self.data.clone();
        }
        match self.route.rsplit_once('.') {
            Some((resource, action)) if ENTITY_ACTIONS.contains(&action) => {
                let resource = resource.rsplit('.').next().unwrap_or(resource);
                vec![camel(&singularize(resource))]
            }
            _ => Vec::new(),
        }
    }

    pub(super) fn compile(&self) -> Compiled {
        let parameters = self.parameters();
        let route = if parameters.is_empty() {
            format!("route('{}')", self.route)
        } else {
            let pairs: Vec<String> = parameters
                .iter()
                .map(|reference| {
                    let key = reference.split('.').next().unwrap_or(reference);
                    format!("'{key}' => {}", variable_expression(reference))
                })
                .collect();
            format!("route('{}', [{}])", self.route, pairs.join(", "))
        };

        let mut compiled = Compiled::line(format!("return redirect()->{route};"));
        compiled.return_type = Some("RedirectResponse".to_string());
        compiled.imports.insert("Illuminate\\Http\\RedirectResponse");
        compiled.test.assertions.push(format!("$response->assertRedirect({route});"));
        compiled.test.tested = TestedBits::REDIRECT;
        compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redirect(route: &str, data: &[&str]) -> RedirectStatement {
        RedirectStatement { route: route.into(), data: data.iter().map(ToString::to_string).collect() }
    }

    #[test]
    fn infers_entity_parameter_for_entity_actions() {
        let compiled = redirect("post.show", &[]).compile();
        assert_eq!(compiled.code, ["return redirect()->route('post.show', ['post' => $post]);"]);
        assert_eq!(redirect("posts.edit", &[]).parameters(), ["post"]);
        assert_eq!(redirect("admin.posts.destroy", &[]).parameters(), ["post"]);
    }

    #[test]
    fn index_route_takes_no_parameter() {
        let compiled = redirect("post.index", &[]).compile();
        assert_eq!(compiled.code, ["return redirect()->route('post.index');"]);
        assert_eq!(compiled.test.assertions, ["$response->assertRedirect(route('post.index'));"]);
        assert!(compiled.test.tested.contains(TestedBits::REDIRECT));
    }

    #[test]
    fn explicit_parameters_win() {
        let compiled = redirect("comment.show", &["comment", "post.id"]).compile();
        assert_eq!(
            compiled.code,
            ["return redirect()->route('comment.show', ['comment' => $comment, 'post' => $post->id]);"]
        );
    }
}
