//! Respond statements.

use serde::Serialize;

use super::output::{Compiled, TestedBits};

/// Responds with a bare status or with a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RespondStatement {
    /// An empty response with this status code.
    Status(u16),
    /// A variable returned as the response body.
    Content(String),
}

impl RespondStatement {
    pub(super) fn compile(&self) -> Compiled {
        let mut compiled = match self {
            Self::Status(204) => {
                let mut compiled = Compiled::line("return response()->noContent();");
                compiled.test.assertions.push("$response->assertNoContent();".to_string());
                compiled
            }
            Self::Status(status) => {
                let mut compiled = Compiled::line(format!("return response()->noContent({status});"));
                compiled.test.assertions.push(format!("$response->assertNoContent({status});"));
                compiled
            }
            Self::Content(variable) => {
                let mut compiled = Compiled::line(format!("return ${variable};"));
                compiled.test.assertions.push("$response->assertOk();".to_string());
                compiled.test.assertions.push("$response->assertJsonStructure([]);".to_string());
                compiled
            }
        };
        if matches!(self, Self::Status(_)) {
            compiled.return_type = Some("Response".to_string());
            compiled.imports.insert("Illuminate\\Http\\Response");
        }
        compiled.test.tested = TestedBits::RESPONDS;
        compiled
    }
}
