// SPDX-License-Identifier: Apache-2.0

//! Command handlers for sendctl CLI.
//!
//! Each handler validates its input, makes one client call and hands the
//! result to exactly one render call.

pub mod apikeys;
pub mod auth;
pub mod completion;
pub mod domains;
pub mod messages;
pub mod routes;
pub mod smtp;
pub mod stats;
pub mod suppressions;
pub mod webhooks;

use anyhow::Result;
use sendctl_core::Client;

use crate::cli::{CommandContext, Commands};
use crate::output::OutputRenderer;

/// Dispatch to the appropriate command handler.
pub fn run(
    command: Commands,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match command {
        Commands::Domains(cmd) => domains::run(cmd, ctx, client, out),
        Commands::Messages(cmd) => messages::run(cmd, ctx, client, out),
        Commands::Webhooks(cmd) => webhooks::run(cmd, ctx, client, out),
        Commands::Routes(cmd) => routes::run(cmd, ctx, client, out),
        Commands::Suppressions(cmd) => suppressions::run(cmd, ctx, client, out),
        Commands::Smtp(cmd) => smtp::run(cmd, ctx, client, out),
        Commands::Apikeys(cmd) => apikeys::run(cmd, ctx, client, out),
        Commands::Stats(cmd) => stats::run(cmd, ctx, client, out),
        Commands::Auth(cmd) => auth::run(cmd, ctx, client, out),
        Commands::Completion { shell } => completion::run_generate(shell),
    }
}

/// Maps `--enable`/`--disable` to the requested state.
pub(crate) fn toggle(enable: bool, disable: bool) -> Option<bool> {
    match (enable, disable) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}
