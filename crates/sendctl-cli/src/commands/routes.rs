// SPDX-License-Identifier: Apache-2.0

//! Inbound route commands.

use anyhow::{Context, Result};
use sendctl_core::api::{NewRoute, RouteUpdate};
use sendctl_core::{Client, SendctlError, validate};
use tracing::debug;

use super::toggle;
use crate::cli::{CommandContext, RoutesCommand};
use crate::output::OutputRenderer;
use crate::output::options::{CreateConfig, DeleteConfig, ListConfig, SingleConfig, UpdateConfig};
use crate::prompt;

/// Run a `routes` subcommand.
#[allow(clippy::too_many_lines)]
pub fn run(
    cmd: RoutesCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        RoutesCommand::List(page) => {
            let routes = client
                .list_routes(&page.query(ctx.page_limit))
                .context("Failed to list routes")?;
            out.render_route_list(
                &routes,
                &ListConfig {
                    empty_message: "No routes found.".to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        RoutesCommand::Get { id } => {
            let route = client
                .get_route(&id)
                .with_context(|| format!("Failed to fetch route {id}"))?;
            out.render_route(
                route.as_ref(),
                &SingleConfig {
                    empty_message: format!("Route {id} not found."),
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
        RoutesCommand::Create {
            name,
            url,
            recipient,
            attachments,
            headers,
            strip_replies,
        } => {
            validate::url(&url)?;
            debug!(%name, %recipient, "creating route");
            let created = client
                .create_route(&NewRoute {
                    name,
                    url,
                    recipient,
                    attachments,
                    headers,
                    strip_replies,
                })
                .context("Failed to create route")?;
            out.render_route_created(
                &created,
                &CreateConfig {
                    success_message: format!("Route {} created.", created.name),
                    item_name: "route".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        RoutesCommand::Update {
            id,
            name,
            url,
            recipient,
            enable,
            disable,
        } => {
            if let Some(url) = &url {
                validate::url(url)?;
            }
            let update = RouteUpdate {
                name,
                url,
                recipient,
                enabled: toggle(enable, disable),
            };
            if update.name.is_none()
                && update.url.is_none()
                && update.recipient.is_none()
                && update.enabled.is_none()
            {
                return Err(SendctlError::Validation {
                    message: "Nothing to update".to_string(),
                    details: Some(
                        "pass --name, --url, --recipient, --enable or --disable".to_string(),
                    ),
                }
                .into());
            }
            debug!(%id, ?update, "updating route");
            let updated = client
                .update_route(&id, &update)
                .with_context(|| format!("Failed to update route {id}"))?;
            out.render_route_updated(
                &updated,
                &UpdateConfig {
                    success_message: format!("Route {id} updated."),
                    item_name: "route".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        RoutesCommand::Delete { id } => {
            prompt::confirm(ctx, &format!("Delete route {id}"))?;
            let deleted = client
                .delete_route(&id)
                .with_context(|| format!("Failed to delete route {id}"))?;
            out.render_route_deleted(
                deleted,
                &DeleteConfig {
                    success_message: format!("Route {id} deleted."),
                    item_name: format!("route {id}"),
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

    const ROUTE: &str = r#"{
        "id": "rt-1", "account_id": "acc-1", "name": "support",
        "url": "https://inbound.example.com/mail", "recipient": "support@example.com",
        "enabled": false,
        "created_at": "2024-01-02T15:04:05Z", "updated_at": "2024-01-02T15:04:05Z"
    }"#;

    #[test]
    fn test_update_renders_new_state() {
        let (mut out, sink) = capture("plain");
        run(
            RoutesCommand::Update {
                id: "rt-1".to_string(),
                name: None,
                url: None,
                recipient: None,
                enable: false,
                disable: true,
            },
            &ctx(),
            &client(ROUTE),
            &mut out,
        )
        .unwrap();
        let text = sink.text();
        assert!(text.starts_with("Route rt-1 updated.\n"));
        assert!(text.contains("Disabled"));
    }

    #[test]
    fn test_delete_needs_confirmation_without_terminal() {
        let mut context = ctx();
        context.assume_yes = false;
        let (mut out, sink) = capture("table");
        let err = run(
            RoutesCommand::Delete {
                id: "rt-1".to_string(),
            },
            &context,
            &client(r#"{"success": true}"#),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "operation cancelled");
        assert!(sink.text().is_empty());
    }

    #[test]
    fn test_delete_with_confirmations_disabled() {
        let mut context = ctx();
        context.assume_yes = false;
        context.confirm_destructive = false;
        let (mut out, sink) = capture("csv");
        run(
            RoutesCommand::Delete {
                id: "rt-1".to_string(),
            },
            &context,
            &client(r#"{"success": true}"#),
            &mut out,
        )
        .unwrap();
        assert_eq!(sink.text(), "success,message\ntrue,Route rt-1 deleted.\n");
    }
}
