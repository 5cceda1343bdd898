//! Statement grammar: one keyword and its value per line of a method.

use crate::statement::{
    DispatchStatement, FireStatement, PersistOperation, PersistStatement, QueryClause, QueryOperation,
    QueryStatement, RedirectStatement, RenderStatement, ResourceStatement, RespondStatement, SendKind,
    SendStatement, SessionOperation, SessionStatement, Statement, ValidateStatement,
};

/// Reads one statement; `None` if the keyword is unknown.
#[must_use]
pub fn parse_statement(keyword: &str, value: &str) -> Option<Statement> {
    let value = value.trim();
    let statement = match keyword {
        "validate" => Statement::Validate(ValidateStatement { data: list(value) }),
        "save" => persist(PersistOperation::Save, value),
        "update" => persist(PersistOperation::Update, value),
        "find" => persist(PersistOperation::Find, value),
        "delete" => persist(PersistOperation::Delete, value),
        "query" => Statement::Query(query(value)),
        "fire" => {
            let (event, data) = subject_with(value);
            Statement::Fire(FireStatement { event, data })
        }
        "dispatch" => {
            let (job, data) = subject_with(value);
            Statement::Dispatch(DispatchStatement { job, data })
        }
        "send" => Statement::Send(send(value)),
        "notify" => Statement::Send(notify(value)),
        "render" => {
            let (view, data) = subject_with(value);
            Statement::Render(RenderStatement { view, data })
        }
        "redirect" => {
            let (route, data) = subject_with(value);
            Statement::Redirect(RedirectStatement { route, data })
        }
        "resource" => Statement::Resource(resource(value)),
        "respond" => Statement::Respond(match value.parse::<u16>() {
            Ok(status) => RespondStatement::Status(status),
            Err(_) => RespondStatement::Content(value.to_string()),
        }),
        "flash" => session(SessionOperation::Flash, value),
        "store" => session(SessionOperation::Store, value),
        _ => return None,
    };
    Some(statement)
}

/// `save: post`, `update: title, content`, `delete: comment.post_id`.
fn persist(operation: PersistOperation, value: &str) -> Statement {
    let items = list(value);
    let (reference, columns) =
        if items.len() == 1 { (items.into_iter().next(), Vec::new()) } else { (None, items) };
    Statement::Persist(PersistStatement { operation, reference, columns })
}

/// `all`, `all:users`, `paginate`, or a clause pipeline such as
/// `where:title order:created_at pluck:id`.
fn query(value: &str) -> QueryStatement {
    let tokens: Vec<&str> = value.split_whitespace().collect();

    if let [single] = tokens.as_slice() {
        let (head, model) = match single.split_once(':') {
            Some((head, model)) => (head, Some(model.to_string())),
            None => (*single, None),
        };
        let operation = match head {
            "all" => Some(QueryOperation::All),
            "paginate" => Some(QueryOperation::Paginate),
            _ => None,
        };
        if let Some(operation) = operation {
            return QueryStatement { operation, model, clauses: Vec::new() };
        }
    }

    let mut operation = QueryOperation::Get;
    let mut clauses = Vec::new();
    for token in tokens {
        match token.split_once(':') {
            Some((method, argument)) => {
                if method == "pluck" {
                    operation = QueryOperation::Pluck;
                }
                clauses.push(QueryClause { method: method.to_string(), argument: argument.to_string() });
            }
            None => {
                operation = match token {
                    "first" => QueryOperation::First,
                    "count" => QueryOperation::Count,
                    "exists" => QueryOperation::Exists,
                    "paginate" => QueryOperation::Paginate,
                    _ => QueryOperation::Get,
                };
            }
        }
    }
    QueryStatement { operation, model: None, clauses }
}

/// `ReviewPost to:post.author with:post`; a class ending in `Notification`
/// goes through the notification facade.
fn send(value: &str) -> SendStatement {
    let (message, data) = subject_with(value);
    let kind = if message.ends_with("Notification") { SendKind::NotificationFacade } else { SendKind::Mail };
    SendStatement { kind, message, to: option(value, "to"), data }
}

/// `post.author ReviewNotification with:post`.
fn notify(value: &str) -> SendStatement {
    let mut words = value.split_whitespace().filter(|word| !word.contains(':'));
    let to = words.next().map(str::to_string);
    let message = words.next().unwrap_or_default().to_string();
    SendStatement { kind: SendKind::NotificationModel, message, to, data: with(value) }
}

/// `post`, `collection:posts`, `paginate:posts`.
fn resource(value: &str) -> ResourceStatement {
    let value = value.strip_prefix("api.").unwrap_or(value);
    match value.split_once(':') {
        Some(("collection", reference)) => {
            ResourceStatement { reference: reference.to_string(), collection: true, paginate: false }
        }
        Some(("paginate", reference)) => {
            ResourceStatement { reference: reference.to_string(), collection: true, paginate: true }
        }
        _ => ResourceStatement { reference: value.to_string(), collection: false, paginate: false },
    }
}

fn session(operation: SessionOperation, value: &str) -> Statement {
    Statement::Session(SessionStatement { operation, reference: value.to_string() })
}

/// The first word and the `with:` list.
fn subject_with(value: &str) -> (String, Vec<String>) {
    let subject = value.split_whitespace().next().unwrap_or_default().to_string();
    (subject, with(value))
}

fn with(value: &str) -> Vec<String> {
    option(value, "with").map(|items| list(&items)).unwrap_or_default()
}

/// Value of a `name:value` option anywhere in the line.
fn option(value: &str, name: &str) -> Option<String> {
    value
        .split_whitespace()
        .find_map(|word| word.strip_prefix(name)?.strip_prefix(':'))
        .map(str::to_string)
}

fn list(value: &str) -> Vec<String> {
    value.split(',').map(str::trim).filter(|item| !item.is_empty()).map(str::to_string).collect()
}
