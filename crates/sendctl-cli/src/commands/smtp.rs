// SPDX-License-Identifier: Apache-2.0

//! SMTP credential commands.

use anyhow::{Context, Result};
use sendctl_core::api::NewSmtpCredential;
use sendctl_core::{Client, SendctlError, validate};
use tracing::debug;

use crate::cli::{CommandContext, SmtpCommand};
use crate::output::OutputRenderer;
use crate::output::options::{CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use crate::prompt;

/// Credential scopes accepted by the service.
const SCOPES: [&str; 2] = ["smtp", "smtp_domain"];

/// Run an `smtp` subcommand.
pub fn run(
    cmd: SmtpCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        SmtpCommand::List(page) => {
            let credentials = client
                .list_smtp_credentials(&page.query(ctx.page_limit))
                .context("Failed to list SMTP credentials")?;
            out.render_smtp_list(
                &credentials,
                &ListConfig {
                    empty_message: "No SMTP credentials found.".to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        SmtpCommand::Get { id } => {
            let credential = client
                .get_smtp_credential(&id)
                .with_context(|| format!("Failed to fetch SMTP credential {id}"))?;
            out.render_smtp(
                credential.as_ref(),
                &SingleConfig {
                    empty_message: format!("SMTP credential {id} not found."),
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
        SmtpCommand::Create {
            name,
            scope,
            domains,
            sandbox,
        } => {
            let credential = new_credential(name, scope, domains, sandbox)?;
            debug!(name = %credential.name, scope = %credential.scope, "creating SMTP credential");
            let created = client
                .create_smtp_credential(&credential)
                .context("Failed to create SMTP credential")?;
            out.render_smtp_created(
                &created,
                &CreateConfig {
                    success_message: format!("SMTP credential {} created.", created.name),
                    item_name: "SMTP credential".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        SmtpCommand::Delete { id } => {
            prompt::confirm(ctx, &format!("Delete SMTP credential {id}"))?;
            let deleted = client
                .delete_smtp_credential(&id)
                .with_context(|| format!("Failed to delete SMTP credential {id}"))?;
            out.render_smtp_deleted(
                deleted,
                &DeleteConfig {
                    success_message: format!("SMTP credential {id} deleted."),
                    item_name: format!("SMTP credential {id}"),
                },
            )
        }
    }
}

/// Checks the scope and its domain list.
fn new_credential(
    name: String,
    scope: String,
    domains: Option<Vec<String>>,
    sandbox: bool,
) -> Result<NewSmtpCredential, SendctlError> {
    let scope = scope.trim().to_lowercase();
    if !SCOPES.contains(&scope.as_str()) {
        return Err(SendctlError::Validation {
            message: format!("Invalid SMTP scope: {scope}"),
            details: Some(format!("expected one of {}", SCOPES.join(", "))),
        });
    }
    let domains = domains.filter(|d| !d.is_empty());
    match (&domains, scope.as_str()) {
        (None, "smtp_domain") => {
            return Err(SendctlError::validation(
                "The smtp_domain scope needs at least one --domains entry",
            ));
        }
        (Some(_), "smtp") => {
            return Err(SendctlError::validation(
                "--domains only applies to the smtp_domain scope",
            ));
        }
        _ => {}
    }
    for domain in domains.iter().flatten() {
        validate::domain(domain)?;
    }
    Ok(NewSmtpCredential {
        name,
        scope,
        domains,
        sandbox,
    })
}
