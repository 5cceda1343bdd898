//! Controller generator.

use std::path::PathBuf;

use super::{bound_model, class_path, indent, render, short_name, stub, GenerateError};
use crate::config::Config;
use crate::model::ActionContainer;
use crate::naming::camel;
use crate::ports::ArtifactStore;
use crate::statement::{CompiledMethod, ImportSet, StatementCompiler};
use crate::tree::Tree;

const REQUEST: &str = "Illuminate\\Http\\Request";

/// Where the controller class for `container` is written.
#[must_use]
pub fn controller_path(container: &ActionContainer, config: &Config) -> PathBuf {
    class_path(&config.app_path, &container.fully_qualified_namespace(config), &config.namespace, container.name())
}

/// Renders the controller class for `container`.
///
/// # Errors
///
/// Returns an error if a stub is missing.
pub fn render_controller(
    container: &ActionContainer,
    tree: &Tree,
    config: &Config,
    store: &dyn ArtifactStore,
) -> Result<String, GenerateError> {
    let compiled = StatementCompiler::new(config, tree).compile_container(container);
    let method_stub = stub(store, "controller.method")?;

    let mut imports = ImportSet::new();
    if container.namespace().is_some() {
        imports.insert(format!("{}\\Controller", config.qualify(&config.controllers_namespace)));
    }

    let mut methods = Vec::new();
    for method in &compiled {
        imports.merge(&method.imports);
        let mut parameters = Vec::new();
        match &method.request {
            Some(request) => parameters.push(format!("{} $request", short_name(request))),
            None => {
                imports.insert(REQUEST);
                parameters.push("Request $request".to_string());
            }
        }
        if let Some((class, qualified)) = bound_model(container, &method.name, tree, config) {
            parameters.push(format!("{class} ${}", camel(&class)));
            imports.insert(qualified);
        }

        let return_type = method.return_type.as_deref().map(|kind| format!(": {kind}")).unwrap_or_default();
        let body = body(method);
        let parameters = parameters.join(", ");
        let text = render(
            &method_stub,
            &[
                ("method", method.name.as_str()),
                ("parameters", parameters.as_str()),
                ("return_type", return_type.as_str()),
                ("body", body.as_str()),
            ],
        );
        methods.push(text.trim_end().to_string());
    }

    let namespace = container.fully_qualified_namespace(config);
    let imports = imports.to_use_statements();
    let methods = methods.join("\n\n");
    Ok(render(
        &stub(store, "controller")?,
        &[
            ("namespace", namespace.as_str()),
            ("imports", imports.as_str()),
            ("class", container.name()),
            ("methods", methods.as_str()),
        ],
    ))
}

fn body(method: &CompiledMethod) -> String {
    if method.code.is_empty() {
        return indent("//", 8);
    }
    let code: Vec<String> = method.code.iter().map(|line| indent(line, 8)).collect();
    code.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryArtifactStore;
    use crate::model::{Column, Entity};
    use crate::statement::{PersistOperation, PersistStatement, RedirectStatement, Statement, ValidateStatement};

    fn rendered(container: ActionContainer) -> String {
        let mut post = Entity::new("Post");
        post.add_column(Column::new("title", "string", vec![], vec![]));
        let config = Config::default();
        let tree = Tree::new(&config, vec![post], vec![container.clone()], None);
        render_controller(&container, &tree, &config, &MemoryArtifactStore::new()).unwrap()
    }

    #[test]
    fn validated_methods_take_the_form_request() {
        let mut container = ActionContainer::new("Post");
        container.add_method(
            "store",
            vec![
                Statement::Validate(ValidateStatement { data: vec!["title".into()] }),
                Statement::Persist(PersistStatement { operation: PersistOperation::Save, reference: None, columns: vec![] }),
                Statement::Redirect(RedirectStatement { route: "post.index".into(), data: vec![] }),
            ],
        );
        let text = rendered(container);
        assert!(text.contains("namespace App\\Http\\Controllers;"));
        assert!(text.contains("use App\\Http\\Requests\\PostStoreRequest;"));
        assert!(!text.contains("use Illuminate\\Http\\Request;"));
        assert!(text.contains(
            "    public function store(PostStoreRequest $request): RedirectResponse\n    {\n        $post = Post::create($request->validated());\n        return redirect()->route('post.index');\n    }"
        ));
    }

    #[test]
    fn entity_methods_bind_the_model() {
        let mut container = ActionContainer::new("Post");
        container.add_method(
            "destroy",
            vec![Statement::Persist(PersistStatement { operation: PersistOperation::Delete, reference: None, columns: vec![] })],
        );
        container.add_method("index", vec![]);
        let text = rendered(container);
        assert!(text.contains("public function destroy(Request $request, Post $post)"));
        assert!(text.contains("use App\\Models\\Post;"));
        assert!(text.contains("public function index(Request $request)\n    {\n        //\n    }"));
    }

    #[test]
    fn namespaced_controllers_import_the_base_controller() {
        let mut container = ActionContainer::new("Admin/Post");
        container.add_method("index", vec![]);
        let text = rendered(container.clone());
        assert!(text.contains("namespace App\\Http\\Controllers\\Admin;"));
        assert!(text.contains("use App\\Http\\Controllers\\Controller;"));
        assert_eq!(
            controller_path(&container, &Config::default()),
            PathBuf::from("app/Http/Controllers/Admin/PostController.php")
        );
    }
}
