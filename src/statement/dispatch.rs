//! Dispatch-job statements.

use serde::Serialize;

use super::output::Compiled;
use super::{closure_assertion, StatementContext};
use crate::naming::parameter_list;

/// Queues a job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchStatement {
    /// Job class.
    pub job: String,
    /// Constructor references.
    pub data: Vec<String>,
}

impl DispatchStatement {
    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let mut compiled =
            Compiled::line(format!("{}::dispatch({});", self.job, parameter_list(&self.data)));

        let class = cx.config.job_class(&self.job);
        compiled.imports.insert(class.clone());
        compiled.test.imports.insert(class);
        compiled.test.imports.insert("Illuminate\\Support\\Facades\\Queue");
        compiled.test.fakes.push("Queue::fake();".to_string());
        compiled.test.assertions.push(closure_assertion(
            "Queue::assertPushed",
            &format!("{}::class", self.job),
            "job",
            &[],
            &self.data,
        ));
        compiled
    }
}
