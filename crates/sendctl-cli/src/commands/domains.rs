// SPDX-License-Identifier: Apache-2.0

//! Sending domain commands.

use anyhow::{Context, Result};
use sendctl_core::{Client, validate};
use tracing::debug;

use crate::cli::{CommandContext, DomainsCommand};
use crate::output::OutputRenderer;
use crate::output::options::{CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use crate::prompt;

/// Run a `domains` subcommand.
pub fn run(
    cmd: DomainsCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        DomainsCommand::List(page) => {
            debug!(limit = ?page.limit, "listing domains");
            let domains = client
                .list_domains(&page.query(ctx.page_limit))
                .context("Failed to list domains")?;
            out.render_domain_list(
                &domains,
                &ListConfig {
                    empty_message:
                        "No domains found. Add one with `sendctl domains create <domain>`."
                            .to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        DomainsCommand::Get { domain } => {
            validate::domain(&domain)?;
            let found = client
                .get_domain(&domain)
                .with_context(|| format!("Failed to fetch domain {domain}"))?;
            out.render_domain(
                found.as_ref(),
                &SingleConfig {
                    empty_message: format!("Domain {domain} not found."),
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
        DomainsCommand::Create { domain } => {
            validate::domain(&domain)?;
            debug!(%domain, "creating domain");
            let created = client
                .create_domain(&domain)
                .with_context(|| format!("Failed to create domain {domain}"))?;
            out.render_domain_created(
                &created,
                &CreateConfig {
                    success_message: format!(
                        "Domain {domain} created. Publish the DNS records below, \
                         then run `sendctl domains verify {domain}`."
                    ),
                    item_name: "domain".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        DomainsCommand::Delete { domain } => {
            validate::domain(&domain)?;
            prompt::confirm(ctx, &format!("Delete domain {domain}"))?;
            let deleted = client
                .delete_domain(&domain)
                .with_context(|| format!("Failed to delete domain {domain}"))?;
            out.render_domain_deleted(
                deleted,
                &DeleteConfig {
                    success_message: format!("Domain {domain} deleted."),
                    item_name: format!("domain {domain}"),
                },
            )
        }
        DomainsCommand::Verify { domain } => {
            validate::domain(&domain)?;
            debug!(%domain, "verifying DNS");
            let checked = client
                .verify_domain(&domain)
                .with_context(|| format!("Failed to verify domain {domain}"))?;
            out.render_domain_verify(
                &checked,
                &CheckConfig {
                    found_message: format!("DNS records for {domain} are valid."),
                    not_found_message: format!(
                        "DNS records for {domain} are not valid yet. Check the records below."
                    ),
                    field_order: ctx.fields.clone(),
                },
            )
        }
    }
}
