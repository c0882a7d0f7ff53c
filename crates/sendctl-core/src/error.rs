// SPDX-License-Identifier: Apache-2.0

//! Error types for sendctl.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

/// Errors that can occur during sendctl operations.
#[derive(Error, Debug)]
pub enum SendctlError {
    /// Structured error returned by the remote service.
    #[error("{message}")]
    Api {
        /// HTTP status reported with the response.
        status: u16,
        /// Human-readable message extracted from the response body.
        message: String,
        /// Machine-readable error code from the response body, if any.
        code: Option<String>,
        /// Original response body, replayed verbatim by JSON output.
        raw_body: Option<String>,
    },

    /// Local input validation failed before any remote call.
    #[error("{message}")]
    Validation {
        /// What was wrong with the input.
        message: String,
        /// Optional extra context (offending value, accepted forms).
        details: Option<String>,
    },

    /// A requested resource does not exist.
    #[error("{resource} not found: {id}")]
    NotFound {
        /// Resource kind (e.g. "domain").
        resource: String,
        /// Identifier that was looked up.
        id: String,
    },

    /// The `--output` value does not name a known renderer.
    #[error("unsupported output format: {format}")]
    UnsupportedFormat {
        /// The format name the user asked for.
        format: String,
    },

    /// The user declined a confirmation prompt.
    #[error("operation cancelled")]
    Cancelled,

    /// Configuration file or transport setup error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Reading a response document failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A response document did not match the expected type.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SendctlError {
    /// Shorthand for a validation error without details.
    pub fn validation(message: impl Into<String>) -> Self {
        SendctlError::Validation {
            message: message.into(),
            details: None,
        }
    }

    /// Machine-readable code used by structured error output.
    ///
    /// Remote errors report the service's own code. Cancellation and I/O
    /// failures carry no code.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            SendctlError::Api { code, .. } => code.as_deref(),
            SendctlError::Validation { .. } => Some("validation_error"),
            SendctlError::NotFound { .. } => Some("not_found"),
            SendctlError::UnsupportedFormat { .. } => Some("unsupported_format"),
            SendctlError::Config { .. } => Some("config_error"),
            SendctlError::Decode(_) => Some("decode_error"),
            SendctlError::Cancelled | SendctlError::Io(_) => None,
        }
    }

    /// Extra detail for structured error output.
    #[must_use]
    pub fn details(&self) -> Option<String> {
        match self {
            SendctlError::Api { status, .. } => Some(format!("HTTP {status}")),
            SendctlError::Validation { details, .. } => details.clone(),
            _ => None,
        }
    }
}

impl From<config::ConfigError> for SendctlError {
    fn from(err: config::ConfigError) -> Self {
        SendctlError::Config {
            message: err.to_string(),
        }
    }
}
