// SPDX-License-Identifier: Apache-2.0

//! Webhook commands.

use anyhow::{Context, Result};
use sendctl_core::api::{NewWebhook, WebhookUpdate};
use sendctl_core::{Client, SendctlError, validate};
use tracing::debug;

use super::toggle;
use crate::cli::{CommandContext, WebhooksCommand};
use crate::output::OutputRenderer;
use crate::output::options::{CreateConfig, DeleteConfig, ListConfig, SingleConfig, UpdateConfig};
use crate::prompt;

/// Run a `webhooks` subcommand.
#[allow(clippy::too_many_lines)]
pub fn run(
    cmd: WebhooksCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        WebhooksCommand::List(page) => {
            let webhooks = client
                .list_webhooks(&page.query(ctx.page_limit))
                .context("Failed to list webhooks")?;
            out.render_webhook_list(
                &webhooks,
                &ListConfig {
                    empty_message: "No webhooks found.".to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        WebhooksCommand::Get { id } => {
            let webhook = client
                .get_webhook(&id)
                .with_context(|| format!("Failed to fetch webhook {id}"))?;
            out.render_webhook(
                webhook.as_ref(),
                &SingleConfig {
                    empty_message: format!("Webhook {id} not found."),
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
        WebhooksCommand::Create {
            name,
            url,
            events,
            domains,
        } => {
            validate::url(&url)?;
            let events = validate::webhook_events(&events)?;
            if let Some(domains) = &domains {
                for domain in domains {
                    validate::domain(domain)?;
                }
            }
            debug!(%name, ?events, "creating webhook");
            let created = client
                .create_webhook(&NewWebhook {
                    name,
                    url,
                    events,
                    domains,
                })
                .context("Failed to create webhook")?;
            out.render_webhook_created(
                &created,
                &CreateConfig {
                    success_message: format!("Webhook {} created.", created.name),
                    item_name: "webhook".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        WebhooksCommand::Update {
            id,
            name,
            url,
            events,
            enable,
            disable,
        } => {
            if let Some(url) = &url {
                validate::url(url)?;
            }
            let update = WebhookUpdate {
                name,
                url,
                enabled: toggle(enable, disable),
                events: events.as_deref().map(validate::webhook_events).transpose()?,
            };
            if update.name.is_none()
                && update.url.is_none()
                && update.enabled.is_none()
                && update.events.is_none()
            {
                return Err(SendctlError::Validation {
                    message: "Nothing to update".to_string(),
                    details: Some(
                        "pass --name, --url, --events, --enable or --disable".to_string(),
                    ),
                }
                .into());
            }
            debug!(%id, ?update, "updating webhook");
            let updated = client
                .update_webhook(&id, &update)
                .with_context(|| format!("Failed to update webhook {id}"))?;
            out.render_webhook_updated(
                &updated,
                &UpdateConfig {
                    success_message: format!("Webhook {id} updated."),
                    item_name: "webhook".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        WebhooksCommand::Delete { id } => {
            prompt::confirm(ctx, &format!("Delete webhook {id}"))?;
            let deleted = client
                .delete_webhook(&id)
                .with_context(|| format!("Failed to delete webhook {id}"))?;
            out.render_webhook_deleted(
                deleted,
                &DeleteConfig {
                    success_message: format!("Webhook {id} deleted."),
                    item_name: format!("webhook {id}"),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client, ctx};
    use crate::output::testing::capture;

    const SECRET: &str = "whsec_0123456789abcdef";

    fn webhook() -> String {
        format!(
            r#"{{
                "id": "wh-1", "account_id": "acc-1", "name": "events",
                "url": "https://hooks.example.com/in", "enabled": true,
                "on_delivered": true, "secret": "{SECRET}",
                "created_at": "2024-01-02T15:04:05Z", "updated_at": "2024-01-02T15:04:05Z"
            }}"#
        )
    }

    #[test]
    fn test_create_shows_secret_once() {
        let (mut out, sink) = capture("plain");
        run(
            WebhooksCommand::Create {
                name: "events".to_string(),
                url: "https://hooks.example.com/in".to_string(),
                events: "delivered".to_string(),
                domains: None,
            },
            &ctx(),
            &client(&webhook()),
            &mut out,
        )
        .unwrap();
        assert_eq!(sink.text().matches(SECRET).count(), 1);
    }

    #[test]
    fn test_get_hides_secret() {
        let (mut out, sink) = capture("json");
        run(
            WebhooksCommand::Get {
                id: "wh-1".to_string(),
            },
            &ctx(),
            &client(&webhook()),
            &mut out,
        )
        .unwrap();
        assert!(!sink.text().contains(SECRET));
    }

    #[test]
    fn test_update_without_changes_is_rejected() {
        let (mut out, _sink) = capture("table");
        let err = run(
            WebhooksCommand::Update {
                id: "wh-1".to_string(),
                name: None,
                url: None,
                events: None,
                enable: false,
                disable: false,
            },
            &ctx(),
            &client(&webhook()),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Nothing to update");
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let (mut out, _sink) = capture("table");
        let err = run(
            WebhooksCommand::Create {
                name: "events".to_string(),
                url: "https://hooks.example.com/in".to_string(),
                events: "teleported".to_string(),
                domains: None,
            },
            &ctx(),
            &client(&webhook()),
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("teleported"));
    }
}
