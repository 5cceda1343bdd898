//! Touch-session statements: `flash` and `store`.

use serde::Serialize;

use super::output::Compiled;
use crate::naming::variable_expression;

/// How the value is kept in the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOperation {
    /// Kept for the next request only.
    Flash,
    /// Kept until removed.
    Store,
}

/// Writes a reference into the session under its own dotted name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionStatement {
    /// Session operation.
    pub operation: SessionOperation,
    /// Dotted reference, also used as the session key.
    pub reference: String,
}

impl SessionStatement {
    pub(super) fn compile(&self) -> Compiled {
        let method = match self.operation {
            SessionOperation::Flash => "flash",
            SessionOperation::Store => "put",
        };
        let value = variable_expression(&self.reference);
        let mut compiled = Compiled::line(format!(
            "$request->session()->{method}('{}', {value});",
            self.reference
        ));
        compiled
            .test
            .assertions
            .push(format!("$response->assertSessionHas('{}', {value});", self.reference));
        compiled
    }
}
