//! Statement compiler: turns the abstract operations of a controller method
//! into target-code lines, imports, and test-generation metadata.
//!
//! Each statement kind is one [`Statement`] variant compiled by an
//! exhaustive match. Compilation is pure apart from one flag threaded
//! through a method's statements in order: whether validation already ran.

mod dispatch;
mod fire;
pub mod output;
mod persist;
mod query;
mod redirect;
mod render;
mod resource;
mod respond;
mod send;
mod session;
mod validate;

use serde::Serialize;

use crate::config::Config;
use crate::model::ActionContainer;
use crate::naming::{camel, model_from_reference};
use crate::tree::Tree;

pub use dispatch::DispatchStatement;
pub use fire::FireStatement;
pub use output::{Compiled, CompiledMethod, ImportSet, TestEffects, TestedBits};
pub use persist::{PersistOperation, PersistStatement};
pub use query::{QueryClause, QueryOperation, QueryStatement};
pub use redirect::RedirectStatement;
pub use render::RenderStatement;
pub use resource::ResourceStatement;
pub use respond::RespondStatement;
pub use send::{SendKind, SendStatement};
pub use session::{SessionOperation, SessionStatement};
pub use validate::ValidateStatement;

/// One abstract operation within a controller method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "statement", rename_all = "snake_case")]
pub enum Statement {
    /// `save`, `update`, `find`, `delete`.
    Persist(PersistStatement),
    /// `query`.
    Query(QueryStatement),
    /// `fire`.
    Fire(FireStatement),
    /// `dispatch`.
    Dispatch(DispatchStatement),
    /// `send` and `notify`.
    Send(SendStatement),
    /// `validate`.
    Validate(ValidateStatement),
    /// `render`.
    Render(RenderStatement),
    /// `redirect`.
    Redirect(RedirectStatement),
    /// `resource`.
    Resource(ResourceStatement),
    /// `respond`.
    Respond(RespondStatement),
    /// `flash` and `store`.
    Session(SessionStatement),
}

impl Statement {
    /// The keyword this statement is written with in a draft.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Persist(persist) => match persist.operation {
                PersistOperation::Save => "save",
                PersistOperation::Update => "update",
                PersistOperation::Find => "find",
                PersistOperation::Delete => "delete",
            },
            Self::Query(_) => "query",
            Self::Fire(_) => "fire",
            Self::Dispatch(_) => "dispatch",
            Self::Send(send) if send.kind == SendKind::NotificationModel => "notify",
            Self::Send(_) => "send",
            Self::Validate(_) => "validate",
            Self::Render(_) => "render",
            Self::Redirect(_) => "redirect",
            Self::Resource(_) => "resource",
            Self::Respond(_) => "respond",
            Self::Session(session) => match session.operation {
                SessionOperation::Flash => "flash",
                SessionOperation::Store => "store",
            },
        }
    }
}

/// Everything a statement may consult while compiling.
#[derive(Debug, Clone, Copy)]
pub struct StatementContext<'a> {
    /// Naming configuration.
    pub config: &'a Config,
    /// Resolver for entity references.
    pub tree: &'a Tree,
    /// The owning controller.
    pub container: &'a ActionContainer,
    /// The method being compiled.
    pub method: &'a str,
    /// Whether a validation statement ran earlier in this method.
    pub validated: bool,
}

impl StatementContext<'_> {
    /// The entity the container principally acts upon.
    #[must_use]
    pub fn prefix(&self) -> String {
        self.container.prefix()
    }

    /// Entity class a reference names, falling back to the prefix.
    #[must_use]
    pub fn model(&self, reference: &str) -> String {
        model_from_reference(reference, &self.prefix())
    }

    /// Fully-qualified class of `model`; unknown entities are placed in the
    /// models namespace.
    #[must_use]
    pub fn model_class(&self, model: &str) -> String {
        self.tree.fully_qualified_name_for_context(model).unwrap_or_else(|| {
            tracing::warn!(model, controller = self.container.name(), "statement entity not in tree");
            format!("{}\\{model}", self.config.model_namespace())
        })
    }

    /// `$post = Post::factory()->create();`
    #[must_use]
    pub fn factory_setup(&self, model: &str) -> String {
        self.factory_setup_as(model, &camel(model))
    }

    /// Factory line bound to a chosen variable name.
    #[must_use]
    pub fn factory_setup_as(&self, model: &str, variable: &str) -> String {
        format!("${variable} = {model}::factory()->create();")
    }
}

/// Compiles statements against a tree.
#[derive(Debug, Clone, Copy)]
pub struct StatementCompiler<'a> {
    config: &'a Config,
    tree: &'a Tree,
}

impl<'a> StatementCompiler<'a> {
    /// Creates a compiler.
    #[must_use]
    pub fn new(config: &'a Config, tree: &'a Tree) -> Self {
        Self { config, tree }
    }

    /// Compiles one statement.
    #[must_use]
    pub fn compile(&self, statement: &Statement, cx: &StatementContext<'_>) -> Compiled {
        match statement {
            Statement::Persist(persist) => persist.compile(cx),
            Statement::Query(query) => query.compile(cx),
            Statement::Fire(fire) => fire.compile(cx),
            Statement::Dispatch(dispatch) => dispatch.compile(cx),
            Statement::Send(send) => send.compile(cx),
            Statement::Validate(validate) => validate.compile(cx),
            Statement::Render(render) => render.compile(),
            Statement::Redirect(redirect) => redirect.compile(),
            Statement::Resource(resource) => resource.compile(cx),
            Statement::Respond(respond) => respond.compile(),
            Statement::Session(session) => session.compile(),
        }
    }

    /// Compiles a method's statements in order, threading the validation flag.
    #[must_use]
    pub fn compile_method(&self, container: &ActionContainer, method: &str, statements: &[Statement]) -> CompiledMethod {
        let mut compiled = CompiledMethod { name: method.to_string(), ..CompiledMethod::default() };
        let mut cx = StatementContext { config: self.config, tree: self.tree, container, method, validated: false };

        for statement in statements {
            compiled.push(self.compile(statement, &cx));
            if matches!(statement, Statement::Validate(_)) {
                cx.validated = true;
            }
        }
        tracing::debug!(controller = container.name(), method, lines = compiled.code.len(), "compiled method");
        compiled
    }

    /// Compiles every method of a container in declaration order.
    #[must_use]
    pub fn compile_container(&self, container: &ActionContainer) -> Vec<CompiledMethod> {
        container
            .methods()
            .iter()
            .map(|(name, statements)| self.compile_method(container, name, statements))
            .collect()
    }
}

/// Renders a facade assertion, with a closure checking the payload when
/// there is anything to check:
///
/// ```text
/// Event::assertDispatched(NewPost::class, function ($event) use ($post) {
///     return $event->post->is($post);
/// });
/// ```
pub(crate) fn closure_assertion(
    call: &str,
    arguments: &str,
    parameter: &str,
    conditions: &[String],
    data: &[String],
) -> String {
    let mut checks: Vec<String> = conditions.to_vec();
    for reference in data {
        let property = reference.rsplit('.').next().unwrap_or(reference);
        let value = crate::naming::variable_expression(reference);
        if reference.contains('.') {
            checks.push(format!("${parameter}->{property} == {value}"));
        } else {
            checks.push(format!("${parameter}->{property}->is({value})"));
        }
    }

    if checks.is_empty() {
        return format!("{call}({arguments});");
    }

    let captures = captured_variables(&checks, parameter);
    let uses = if captures.is_empty() {
        String::new()
    } else {
        let names: Vec<String> = captures.iter().map(|name| format!("${name}")).collect();
        format!(" use ({})", names.join(", "))
    };
    format!(
        "{call}({arguments}, function (${parameter}){uses} {{\n    return {};\n}});",
        checks.join("\n        && ")
    )
}

/// Variables referenced by the checks, other than the closure parameter.
fn captured_variables(checks: &[String], parameter: &str) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for check in checks {
        let mut rest = check.as_str();
        while let Some(start) = rest.find('$') {
            let tail = &rest[start + 1..];
            let end = tail.find(|c: char| !(c.is_ascii_alphanumeric() || c == '_')).unwrap_or(tail.len());
            let name = &tail[..end];
            if !name.is_empty() && name != parameter && name != "this" && !found.iter().any(|n| n == name) {
                found.push(name.to_string());
            }
            rest = &tail[end..];
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Entity};

    fn tree() -> Tree {
        let mut post = Entity::new("Post");
        post.add_column(Column::new("title", "string", vec!["400".into()], vec![]));
        post.add_column(Column::new("content", "longtext", vec![], vec![]));
        post.add_column(Column::new("author_id", "id", vec!["user".into()], vec![]));
        let mut user = Entity::new("User");
        user.add_column(Column::new("name", "string", vec![], vec![]));
        Tree::new(&Config::default(), vec![post, user], vec![], None)
    }

    fn persist(operation: PersistOperation, reference: Option<&str>) -> Statement {
        Statement::Persist(PersistStatement { operation, reference: reference.map(Into::into), columns: vec![] })
    }

    fn compile(method: &str, statements: &[Statement]) -> CompiledMethod {
        let config = Config::default();
        let tree = tree();
        let container = ActionContainer::new("Post");
        StatementCompiler::new(&config, &tree).compile_method(&container, method, statements)
    }

    fn resource(reference: &str, collection: bool, paginate: bool) -> Statement {
        Statement::Resource(ResourceStatement { reference: reference.into(), collection, paginate })
    }

    #[test]
    fn resource_falls_back_to_the_controller_entity() {
        for reference in ["id", ""] {
            let method = compile("show", &[resource(reference, false, false)]);
            assert_eq!(method.code, ["return new PostResource($post);"]);
            assert_eq!(method.return_type.as_deref(), Some("PostResource"));
            assert!(method.imports.contains("App\\Http\\Resources\\PostResource"));
        }
    }

    #[test]
    fn resource_uses_the_entity_before_the_dot() {
        let method = compile("show", &[resource("user.profile", false, false)]);
        assert_eq!(method.code, ["return new UserResource($user);"]);
    }

    #[test]
    fn paginated_collections_assert_the_pagination_envelope() {
        let method = compile("index", &[resource("posts", true, true)]);
        assert_eq!(method.code, ["return new PostCollection($posts);"]);
        assert!(method.test.assertions.contains(&"$response->assertJsonStructure(['data', 'links', 'meta']);".to_string()));

        let plain = compile("index", &[resource("posts", true, false)]);
        assert!(plain.test.assertions.contains(&"$response->assertJsonStructure([]);".to_string()));
    }

    #[test]
    fn save_in_store_creates() {
        let method = compile("store", &[persist(PersistOperation::Save, None)]);
        assert_eq!(method.code, ["$post = Post::create($request->all());"]);
        assert!(method.imports.contains("App\\Models\\Post"));
        assert!(method.test.tested.contains(TestedBits::SAVE));
    }

    #[test]
    fn save_elsewhere_saves_instance() {
        let method = compile("update", &[persist(PersistOperation::Save, None)]);
        assert_eq!(method.code, ["$post->save();"]);
    }

    #[test]
    fn save_after_validate_uses_validated_input() {
        let validate = Statement::Validate(ValidateStatement { data: vec!["title".into(), "content".into()] });
        let method = compile("store", &[validate, persist(PersistOperation::Save, None)]);
        assert_eq!(method.code, ["$post = Post::create($request->validated());"]);
        assert_eq!(method.request.as_deref(), Some("App\\Http\\Requests\\PostStoreRequest"));
        assert_eq!(method.test.form_request.as_deref(), Some("PostStoreRequest"));
        assert_eq!(method.test.request_data, ["'title' => $title", "'content' => $content"]);
        assert!(method.test.traits.contains("JMac\\Testing\\Traits\\AdditionalAssertions"));
    }

    #[test]
    fn update_without_validation_is_empty() {
        let update = persist(PersistOperation::Update, Some("post"));
        assert_eq!(compile("update", &[update.clone()]).code, ["$post->update([]);"]);

        let validate = Statement::Validate(ValidateStatement { data: vec!["title".into()] });
        assert_eq!(compile("update", &[validate, update]).code, ["$post->update($request->validated());"]);
    }

    #[test]
    fn validation_only_affects_later_statements() {
        let update = persist(PersistOperation::Update, None);
        let validate = Statement::Validate(ValidateStatement { data: vec!["title".into()] });
        assert_eq!(compile("update", &[update, validate]).code, ["$post->update([]);"]);
    }

    #[test]
    fn destroy_deletes_instance() {
        let method = compile("destroy", &[persist(PersistOperation::Delete, None)]);
        assert_eq!(method.code, ["$post->delete();"]);
        assert!(method.test.tested.contains(TestedBits::DELETE));
        assert_eq!(method.test.assertions, ["$this->assertModelMissing($post);"]);
    }

    #[test]
    fn qualified_delete_destroys_by_identifier() {
        let method = compile("destroy", &[persist(PersistOperation::Delete, Some("comment.post_id"))]);
        assert_eq!(method.code, ["Comment::destroy($comment->post_id);"]);
    }

    #[test]
    fn find_uses_dotted_column() {
        let method = compile("show", &[persist(PersistOperation::Find, Some("post.slug"))]);
        assert_eq!(method.code, ["$post = Post::find($slug);"]);
        let method = compile("show", &[persist(PersistOperation::Find, Some("id"))]);
        assert_eq!(method.code, ["$post = Post::find($id);"]);
    }

    #[test]
    fn queries_name_their_variables() {
        let all = Statement::Query(QueryStatement { operation: QueryOperation::All, model: None, clauses: vec![] });
        assert_eq!(compile("index", &[all]).code, ["$posts = Post::all();"]);

        let clause = |method: &str, argument: &str| QueryClause { method: method.into(), argument: argument.into() };
        let pluck = Statement::Query(QueryStatement {
            operation: QueryOperation::Pluck,
            model: None,
            clauses: vec![clause("where", "post.title"), clause("pluck", "post.id")],
        });
        assert_eq!(
            compile("index", &[pluck]).code,
            ["$post_ids = Post::query()->where('title', $post->title)->pluck('id');"]
        );

        let count = Statement::Query(QueryStatement {
            operation: QueryOperation::Count,
            model: None,
            clauses: vec![clause("where", "title")],
        });
        assert_eq!(compile("index", &[count]).code, ["$post_count = Post::query()->where('title', $title)->count();"]);
    }

    #[test]
    fn fires_named_and_class_events() {
        let named = Statement::Fire(FireStatement { event: "post.created".into(), data: vec!["post".into()] });
        let class = Statement::Fire(FireStatement { event: "NewPost".into(), data: vec!["post".into()] });
        let method = compile("store", &[named, class]);
        assert_eq!(method.code, ["event('post.created', [$post]);", "NewPost::dispatch($post);"]);
        assert!(method.imports.contains("App\\Events\\NewPost"));
        assert_eq!(method.test.fakes, ["Event::fake();"]);
        assert_eq!(
            method.test.assertions[1],
            "Event::assertDispatched(NewPost::class, function ($event) use ($post) {\n    return $event->post->is($post);\n});"
        );
    }

    #[test]
    fn sends_mail_and_notifications() {
        let mail = Statement::Send(SendStatement {
            kind: SendKind::Mail,
            message: "ReviewPost".into(),
            to: Some("post.author".into()),
            data: vec!["post".into()],
        });
        let notify = Statement::Send(SendStatement {
            kind: SendKind::NotificationModel,
            message: "ReviewNotification".into(),
            to: Some("post.author".into()),
            data: vec!["post".into()],
        });
        let method = compile("store", &[mail, notify]);
        assert_eq!(
            method.code,
            [
                "Mail::to($post->author)->send(new ReviewPost($post));",
                "$post->author->notify(new ReviewNotification($post));",
            ]
        );
        assert!(method.imports.contains("Illuminate\\Support\\Facades\\Mail"));
        assert!(!method.imports.contains("Illuminate\\Support\\Facades\\Notification"));
        assert!(method.test.assertions[0].starts_with("Mail::assertSent(ReviewPost::class, function ($mail) use ($post) {"));
        assert!(method.test.assertions[1].starts_with("Notification::assertSentTo($post->author, ReviewNotification::class"));
    }

    #[test]
    fn tested_bits_accumulate_across_statements() {
        let method = compile(
            "store",
            &[
                persist(PersistOperation::Save, None),
                Statement::Redirect(RedirectStatement { route: "post.index".into(), data: vec![] }),
            ],
        );
        assert_eq!(method.return_type.as_deref(), Some("RedirectResponse"));
        assert_eq!(method.test.tested.describe().as_deref(), Some("redirects and saves"));
    }

    #[test]
    fn compilation_is_deterministic() {
        let statements = [persist(PersistOperation::Save, None), persist(PersistOperation::Delete, None)];
        assert_eq!(compile("store", &statements), compile("store", &statements));
    }

    #[test]
    fn foreign_keys_get_factory_setup() {
        let validate = Statement::Validate(ValidateStatement { data: vec!["author_id".into()] });
        let method = compile("store", &[validate]);
        assert_eq!(method.test.setup, ["$author = User::factory()->create();"]);
        assert_eq!(method.test.request_data, ["'author_id' => $author->id"]);
        assert!(method.test.imports.contains("App\\Models\\User"));
    }

    #[test]
    fn closure_assertion_without_payload_is_a_single_call() {
        assert_eq!(closure_assertion("Queue::assertPushed", "SyncMedia::class", "job", &[], &[]), "Queue::assertPushed(SyncMedia::class);");
    }
}
