// SPDX-License-Identifier: Apache-2.0

//! API key commands.

use anyhow::{Context, Result};
use sendctl_core::api::ApiKeyInput;
use sendctl_core::{Client, SendctlError, validate};
use tracing::debug;

use crate::cli::{ApiKeysCommand, CommandContext};
use crate::output::OutputRenderer;
use crate::output::options::{CreateConfig, DeleteConfig, ListConfig, SingleConfig, UpdateConfig};
use crate::prompt;

/// Run an `apikeys` subcommand.
pub fn run(
    cmd: ApiKeysCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        ApiKeysCommand::List(page) => {
            let keys = client
                .list_api_keys(&page.query(ctx.page_limit))
                .context("Failed to list API keys")?;
            out.render_api_key_list(
                &keys,
                &ListConfig {
                    empty_message: "No API keys found.".to_string(),
                    show_pagination: true,
                    field_order: ctx.fields.clone(),
                    ..ListConfig::default()
                },
            )
        }
        ApiKeysCommand::Get { id } => {
            let key = client
                .get_api_key(&id)
                .with_context(|| format!("Failed to fetch API key {id}"))?;
            out.render_api_key(
                key.as_ref(),
                &SingleConfig {
                    empty_message: format!("API key {id} not found."),
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
        ApiKeysCommand::Create { label, scopes } => {
            let scopes = validate::scopes(&scopes)?;
            debug!(%label, ?scopes, "creating API key");
            let created = client
                .create_api_key(&ApiKeyInput {
                    label: Some(label),
                    scopes: Some(scopes),
                })
                .context("Failed to create API key")?;
            out.render_api_key_created(
                &created,
                &CreateConfig {
                    success_message: format!("API key {} created.", created.label),
                    item_name: "API key".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        ApiKeysCommand::Update { id, label, scopes } => {
            let input = ApiKeyInput {
                label,
                scopes: scopes.as_deref().map(validate::scopes).transpose()?,
            };
            if input.label.is_none() && input.scopes.is_none() {
                return Err(SendctlError::Validation {
                    message: "Nothing to update".to_string(),
                    details: Some("pass --label, --scopes or both".to_string()),
                }
                .into());
            }
            let updated = client
                .update_api_key(&id, &input)
                .with_context(|| format!("Failed to update API key {id}"))?;
            out.render_api_key_updated(
                &updated,
                &UpdateConfig {
                    success_message: format!("API key {id} updated."),
                    item_name: "API key".to_string(),
                    field_order: ctx.fields.clone(),
                },
            )
        }
        ApiKeysCommand::Delete { id } => {
            prompt::confirm(ctx, &format!("Delete API key {id}"))?;
            let deleted = client
                .delete_api_key(&id)
                .with_context(|| format!("Failed to delete API key {id}"))?;
            out.render_api_key_deleted(
                deleted,
                &DeleteConfig {
                    success_message: format!("API key {id} deleted."),
                    item_name: format!("API key {id}"),
                },
            )
        }
    }
}
