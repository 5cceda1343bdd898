//! Send-mail and notification statements.

use serde::Serialize;

use super::output::Compiled;
use super::{closure_assertion, StatementContext};
use crate::naming::{camel, parameter_list, variable_expression};

/// How the message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendKind {
    /// A mailable through the `Mail` facade.
    Mail,
    /// A notification through the `Notification` facade.
    NotificationFacade,
    /// A notification through the notifiable model's `notify()`.
    NotificationModel,
}

/// Sends a mailable or a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendStatement {
    /// Delivery kind.
    pub kind: SendKind,
    /// Mailable or notification class.
    pub message: String,
    /// Recipient reference (`post.author`).
    pub to: Option<String>,
    /// Constructor references.
    pub data: Vec<String>,
}

impl SendStatement {
    pub(super) fn compile(&self, cx: &StatementContext<'_>) -> Compiled {
        let message = format!("new {}({})", self.message, parameter_list(&self.data));
        let class_literal = format!("{}::class", self.message);

        match self.kind {
            SendKind::Mail => {
                let code = match &self.to {
                    Some(to) => format!("Mail::to({})->send({message});", variable_expression(to)),
                    None => format!("Mail::send({message});"),
                };
                let mut compiled = Compiled::line(code);
                let class = cx.config.mail_class(&self.message);
                compiled.imports.insert("Illuminate\\Support\\Facades\\Mail");
                compiled.imports.insert(class.clone());
                compiled.test.imports.insert("Illuminate\\Support\\Facades\\Mail");
                compiled.test.imports.insert(class);
                compiled.test.fakes.push("Mail::fake();".to_string());
                let conditions: Vec<String> = self
                    .to
                    .iter()
                    .map(|to| format!("$mail->hasTo({})", variable_expression(to)))
                    .collect();
                compiled.test.assertions.push(closure_assertion(
                    "Mail::assertSent",
                    &class_literal,
                    "mail",
                    &conditions,
                    &self.data,
                ));
                compiled
            }
            SendKind::NotificationFacade | SendKind::NotificationModel => {
                let recipient = self
                    .to
                    .as_deref()
                    .map_or_else(|| format!("${}", camel(&cx.prefix())), variable_expression);
                let code = if self.kind == SendKind::NotificationFacade {
                    format!("Notification::send({recipient}, {message});")
                } else {
                    format!("{recipient}->notify({message});")
                };
                let mut compiled = Compiled::line(code);
                let class = cx.config.notification_class(&self.message);
                if self.kind == SendKind::NotificationFacade {
                    compiled.imports.insert("Illuminate\\Support\\Facades\\Notification");
                }
                compiled.imports.insert(class.clone());
                compiled.test.imports.insert("Illuminate\\Support\\Facades\\Notification");
                compiled.test.imports.insert(class);
                compiled.test.fakes.push("Notification::fake();".to_string());
                compiled.test.assertions.push(closure_assertion(
                    "Notification::assertSentTo",
                    &format!("{recipient}, {class_literal}"),
                    "notification",
                    &[],
                    &self.data,
                ));
                compiled
            }
        }
    }
}
