// SPDX-License-Identifier: Apache-2.0

//! Message commands.

use anyhow::{Context, Result};
use sendctl_core::api::{MessageFilter, NewMessage};
use sendctl_core::{Client, SendctlError, validate};
use tracing::debug;

use crate::cli::{CommandContext, MessagesCommand};
use crate::output::OutputRenderer;
use crate::output::options::{CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use crate::prompt;

/// Run a `messages` subcommand.
pub fn run(
    cmd: MessagesCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        MessagesCommand::List {
            page,
            sender,
            recipient,
            status,
        } => {
            if let Some(sender) = &sender {
                validate::email(sender)?;
            }
            if let Some(recipient) = &recipient {
                validate::email(recipient)?;
            }
            let filter = MessageFilter {
                sender,
                recipient,
                status,
                page: page.query(ctx.page_limit),
            };
            debug!(?filter, "listing messages");
            let messages = client
                .list_messages(&filter)
                .context("Failed to list messages")?;
            out.render_message_list(
                &messages,
                &ListConfig {
                    empty_message: "No messages found.".to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        MessagesCommand::Get { id } => {
            let message = client
                .get_message(&id)
                .with_context(|| format!("Failed to fetch message {id}"))?;
            out.render_message(
                message.as_ref(),
                &SingleConfig {
                    empty_message: format!("Message {id} not found."),
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
        MessagesCommand::Send {
            from,
            to,
            subject,
            text,
            html,
            tags,
        } => {
            let message = build_message(from, to, subject, text, html, tags)?;
            debug!(recipients = message.to.len(), "sending message");
            let response = client
                .send_message(&message)
                .context("Failed to send message")?;
            out.render_message_send(
                &response,
                &CreateConfig {
                    success_message: format!(
                        "Message accepted for {} recipient(s).",
                        response.data.len()
                    ),
                    item_name: "message".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        MessagesCommand::Cancel { id } => {
            prompt::confirm(ctx, &format!("Cancel message {id}"))?;
            let cancelled = client
                .cancel_message(&id)
                .with_context(|| format!("Failed to cancel message {id}"))?;
            out.render_message_cancelled(
                cancelled,
                &DeleteConfig {
                    success_message: format!("Message {id} cancelled."),
                    item_name: format!("message {id}"),
                },
            )
        }
    }
}

/// Validates addresses and requires at least one body part.
fn build_message(
    from: String,
    to: Vec<String>,
    subject: String,
    text: Option<String>,
    html: Option<String>,
    tags: Vec<String>,
) -> Result<NewMessage, SendctlError> {
    validate::email(&from)?;
    let to: Vec<String> = to
        .into_iter()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .collect();
    if to.is_empty() {
        return Err(SendctlError::validation("At least one recipient is required"));
    }
    for recipient in &to {
        validate::email(recipient)?;
    }
    if text.is_none() && html.is_none() {
        return Err(SendctlError::Validation {
            message: "A message body is required".to_string(),
            details: Some("pass --text, --html or both".to_string()),
        });
    }
    Ok(NewMessage {
        from,
        to,
        subject,
        text,
        html,
        tags,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client, ctx};
    use crate::output::testing::capture;

    fn send(text: Option<&str>) -> MessagesCommand {
        MessagesCommand::Send {
            from: "ops@example.com".to_string(),
            to: vec!["a@example.org".to_string(), "b@example.org".to_string()],
            subject: "Hello".to_string(),
            text: text.map(str::to_string),
            html: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_send_requires_body() {
        let (mut out, _sink) = capture("table");
        let err = run(send(None), &ctx(), &client("{}"), &mut out).unwrap_err();
        assert_eq!(err.to_string(), "A message body is required");
    }

    #[test]
    fn test_send_lists_each_recipient() {
        let document = r#"{"data": [
            {"recipient": "a@example.org", "id": "m-1", "status": "queued"},
            {"recipient": "b@example.org", "status": "rejected", "error": "suppressed"}
        ]}"#;
        let (mut out, sink) = capture("csv");
        run(send(Some("hi")), &ctx(), &client(document), &mut out).unwrap();
        let text = sink.text();
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("b@example.org"));
        assert!(text.contains("suppressed"));
    }

    #[test]
    fn test_get_missing_message() {
        let (mut out, sink) = capture("plain");
        let get = || MessagesCommand::Get {
            id: "m-404".to_string(),
        };
        run(get(), &ctx(), &client("null"), &mut out).unwrap();
        assert_eq!(sink.text(), "Message m-404 not found.\n");

        let err = run(
            get(),
            &ctx(),
            &client(r#"{"status": 404, "body": {"message": "not found"}}"#),
            &mut out,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SendctlError>(),
            Some(SendctlError::Api { status: 404, .. })
        ));
    }
}
