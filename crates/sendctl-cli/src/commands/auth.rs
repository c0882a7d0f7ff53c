// SPDX-License-Identifier: Apache-2.0

//! Authentication status command.

use anyhow::{Context, Result};
use sendctl_core::Client;
use tracing::debug;

use crate::cli::{AuthCommand, CommandContext};
use crate::output::OutputRenderer;
use crate::output::options::SingleConfig;

/// Run an `auth` subcommand.
pub fn run(
    cmd: AuthCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        AuthCommand::Status => {
            debug!(profile = %ctx.profile, "checking authentication");
            let status = client
                .auth_status(&ctx.profile)
                .context("Failed to check authentication status")?;
            out.render_auth_status(
                &status,
                &SingleConfig {
                    field_order: ctx.fields.clone(),
                    ..SingleConfig::default()
                },
            )
        }
    }
}
