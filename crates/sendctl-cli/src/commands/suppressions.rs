// SPDX-License-Identifier: Apache-2.0

//! Suppression list commands.

use anyhow::{Context, Result};
use sendctl_core::api::NewSuppression;
use sendctl_core::{Client, parse_date, validate};
use tracing::debug;

use crate::cli::{CommandContext, SuppressionsCommand};
use crate::output::OutputRenderer;
use crate::output::options::{CheckConfig, CreateConfig, DeleteConfig, ListConfig, WipeConfig};
use crate::prompt;

/// Run a `suppressions` subcommand.
#[allow(clippy::too_many_lines)]
pub fn run(
    cmd: SuppressionsCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        SuppressionsCommand::List { page, domain } => {
            if let Some(domain) = &domain {
                validate::domain(domain)?;
            }
            let suppressions = client
                .list_suppressions(domain.as_deref(), &page.query(ctx.page_limit))
                .context("Failed to list suppressions")?;
            out.render_suppression_list(
                &suppressions,
                &ListConfig {
                    empty_message: "No suppressions found.".to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        SuppressionsCommand::Check { email } => {
            validate::email(&email)?;
            let matches = client
                .check_suppression(&email)
                .with_context(|| format!("Failed to check suppression for {email}"))?;
            debug!(%email, matches = matches.data.len(), "checked suppression");
            out.render_suppression_check(
                &matches,
                &CheckConfig {
                    found_message: format!("{email} is suppressed."),
                    not_found_message: format!("{email} is not suppressed."),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        SuppressionsCommand::Create {
            email,
            domain,
            reason,
            expires_at,
        } => {
            validate::email(&email)?;
            if let Some(domain) = &domain {
                validate::domain(domain)?;
            }
            let expires_at = expires_at.as_deref().map(parse_date).transpose()?;
            let created = client
                .create_suppression(&NewSuppression {
                    email,
                    domain,
                    reason,
                    expires_at,
                })
                .context("Failed to create suppression")?;
            out.render_suppression_created(
                &created,
                &CreateConfig {
                    success_message: format!("{} suppressed.", created.email),
                    item_name: "suppression".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        SuppressionsCommand::Delete { email, domain } => {
            validate::email(&email)?;
            prompt::confirm(ctx, &format!("Remove suppression for {email}"))?;
            let deleted = client
                .delete_suppression(&email, domain.as_deref())
                .with_context(|| format!("Failed to remove suppression for {email}"))?;
            out.render_suppression_deleted(
                deleted,
                &DeleteConfig {
                    success_message: format!("Suppression for {email} removed."),
                    item_name: format!("suppression for {email}"),
                },
            )
        }
        SuppressionsCommand::Wipe { domain } => {
            if let Some(domain) = &domain {
                validate::domain(domain)?;
            }
            let scope = domain
                .as_deref()
                .map_or_else(|| "all domains".to_string(), |d| format!("domain {d}"));
            prompt::confirm(ctx, &format!("Remove every suppression for {scope}"))?;
            debug!(%scope, "wiping suppressions");
            let wiped = client
                .wipe_suppressions(domain.as_deref())
                .context("Failed to wipe suppressions")?;
            out.render_suppressions_wiped(
                wiped,
                &WipeConfig {
                    success_message: format!("Removed every suppression for {scope}."),
                    item_name: format!("suppressions for {scope}"),
                },
            )
        }
    }
}
