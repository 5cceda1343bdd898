//! Fire-event statements.

use serde::Serialize;

use super::output::Compiled;
use super::{closure_assertion, StatementContext};
use crate::naming::parameter_list;

/// Fires an event class or a named (string) event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FireStatement {
    /// Event class (`NewPost`) or event name (`post.created`).
    pub event: String,
    /// Payload references.
    pub data: Vec<String>,
}

impl FireStatement {
    /// Named events are all-lowercase strings such as `post.created`.
    #[must_use]
    pub fn is_named_event(&self) -> bool {
        !self.event.chars().any(|c| c.is_ascii_uppercase())
    }

    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let params = parameter_list(&self.data);

        if self.is_named_event() {
            let code = if self.data.is_empty() {
                format!("event('{}');", self.event)
            } else {
                format!("event('{}', [{params}]);", self.event)
            };
            let mut compiled = Compiled::line(code);
            compiled.test.fakes.push("Event::fake();".to_string());
            compiled.test.imports.insert("Illuminate\\Support\\Facades\\Event");
            compiled.test.assertions.push(format!("Event::assertDispatched('{}');", self.event));
            return compiled;
        }

        let mut compiled = Compiled::line(format!("{}::dispatch({params});", self.event));
        let class = cx.config.event_class(&self.event);
        compiled.imports.insert(class.clone());
        compiled.test.imports.insert(class);
        compiled.test.imports.insert("Illuminate\\Support\\Facades\\Event");
        compiled.test.fakes.push("Event::fake();".to_string());
        compiled.test.assertions.push(closure_assertion(
            "Event::assertDispatched",
            &format!("{}::class", self.event),
            "event",
            &[],
            &self.data,
        ));
        compiled
    }
}
