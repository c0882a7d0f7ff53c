// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Renderers print the bare error; with `--verbose` the CLI adds the hint
//! built here on stderr.

use std::fmt::Write;

use anyhow::Error;
use sendctl_core::SendctlError;

use crate::output::{FORMATS, find_sendctl_error};

/// Formats an error for CLI display with helpful hints.
///
/// Finds the first `SendctlError` in the chain and appends a tip for it.
/// Other errors are returned with their context chain.
pub fn format_error(error: &Error) -> String {
    let Some(err) = find_sendctl_error(error) else {
        return format!("{error:#}");
    };

    match err {
        SendctlError::Api {
            status,
            code,
            raw_body,
            ..
        } => {
            let mut msg = format!("{error:#} (HTTP {status})");
            if let Some(code) = code {
                let _ = write!(msg, " [{code}]");
            }
            if raw_body.is_some() {
                msg.push_str("\n\nTip: Use `--output json` to see the full response body.");
            }
            msg
        }
        SendctlError::Validation { details, .. } => {
            let mut msg = format!("{error:#}");
            if let Some(details) = details {
                let _ = write!(msg, "\n\nDetails: {details}");
            }
            msg
        }
        SendctlError::NotFound { .. } => {
            format!("{error:#}\n\nTip: Check the identifier with the matching `list` command.")
        }
        SendctlError::UnsupportedFormat { .. } => {
            format!(
                "{error:#}\n\nTip: Supported formats are {}.",
                FORMATS.join(", ")
            )
        }
        SendctlError::Cancelled => {
            format!("{error:#}\n\nTip: Pass `--yes` to skip confirmation prompts.")
        }
        SendctlError::Config { .. } => {
            format!(
                "{error:#}\n\nTip: Check your config file at {}",
                sendctl_core::config_file_path().display()
            )
        }
        SendctlError::Io(_) | SendctlError::Decode(_) => {
            format!(
                "{error:#}\n\nTip: Check that the response document matches the command you ran."
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_hint() {
        let err = Error::new(SendctlError::Cancelled);
        let formatted = format_error(&err);
        assert!(formatted.starts_with("operation cancelled"));
        assert!(formatted.contains("--yes"));
    }

    #[test]
    fn test_api_error_shows_status_and_code() {
        let err = Error::new(SendctlError::Api {
            status: 422,
            message: "domain already exists".to_string(),
            code: Some("domain_taken".to_string()),
            raw_body: None,
        });
        assert_eq!(
            format_error(&err),
            "domain already exists (HTTP 422) [domain_taken]"
        );
    }

    #[test]
    fn test_validation_details() {
        let err = Error::new(SendctlError::Validation {
            message: "invalid scope".to_string(),
            details: Some("expected resource:action".to_string()),
        });
        assert!(format_error(&err).contains("Details: expected resource:action"));
    }

    #[test]
    fn test_context_is_kept() {
        let err = Error::new(SendctlError::Cancelled).context("Failed to delete route");
        assert!(format_error(&err).starts_with("Failed to delete route: operation cancelled"));
    }

    #[test]
    fn test_plain_error_passthrough() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(format_error(&err), "something else");
    }
}
