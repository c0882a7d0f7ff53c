// SPDX-License-Identifier: Apache-2.0

//! Confirmation prompts for destructive commands.

use anyhow::{Context, Result};
use dialoguer::Confirm;
use sendctl_core::SendctlError;
use tracing::debug;

use crate::cli::CommandContext;

/// Asks the user to confirm `action`.
///
/// Passes without asking when `--yes` was given or confirmations are turned
/// off in the config. Without a terminal to ask on, or when the user
/// declines, returns [`SendctlError::Cancelled`].
pub fn confirm(ctx: &CommandContext, action: &str) -> Result<()> {
    if ctx.assume_yes || !ctx.confirm_destructive {
        return Ok(());
    }
    if !ctx.interactive {
        debug!("no terminal to confirm '{action}'; pass --yes to skip the prompt");
        return Err(SendctlError::Cancelled.into());
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("{action}?"))
        .default(false)
        .interact()
        .context("Failed to get user confirmation")?;

    if confirmed {
        Ok(())
    } else {
        Err(SendctlError::Cancelled.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(assume_yes: bool, confirm_destructive: bool) -> CommandContext {
        CommandContext {
            fields: None,
            assume_yes,
            confirm_destructive,
            interactive: false,
            page_limit: 50,
            profile: "default".to_string(),
        }
    }

    #[test]
    fn test_yes_skips_prompt() {
        assert!(confirm(&ctx(true, true), "Delete domain example.com").is_ok());
    }

    #[test]
    fn test_disabled_confirmation_skips_prompt() {
        assert!(confirm(&ctx(false, false), "Delete domain example.com").is_ok());
    }

    #[test]
    fn test_non_interactive_is_cancelled() {
        let err = confirm(&ctx(false, true), "Wipe all suppressions").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SendctlError>(),
            Some(SendctlError::Cancelled)
        ));
    }
}
