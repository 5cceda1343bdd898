//! Render-view statements.

use serde::Serialize;

use super::output::{Compiled, TestedBits};

/// Renders a view with data bound by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderStatement {
    /// Dotted view name (`post.index`).
    pub view: String,
    /// Variables passed to the view.
    pub data: Vec<String>,
}

impl RenderStatement {
    pub(super) fn compile(&self) -> Compiled {
        let code = if self.data.is_empty() {
            format!("return view('{}');", self.view)
        } else {
            let names: Vec<String> = self.data.iter().map(|name| format!("'{name}'")).collect();
            format!("return view('{}', compact({}));", self.view, names.join(", "))
        };

        let mut compiled = Compiled::line(code);
        compiled.return_type = Some("View".to_string());
        compiled.imports.insert("Illuminate\\View\\View");
        compiled.test.assertions.push("$response->assertOk();".to_string());
        compiled.test.assertions.push(format!("$response->assertViewIs('{}');", self.view));
        for name in &self.data {
            compiled.test.assertions.push(format!("$response->assertViewHas('{name}');"));
        }
        compiled.test.tested = TestedBits::VIEW;
        compiled
    }
}
