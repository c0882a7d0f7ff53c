// SPDX-License-Identifier: Apache-2.0

//! Transport that replays a recorded response document.
//!
//! A document is either a bare success body or an envelope
//! `{"status": 422, "body": {...}}`. Envelopes with a status of 400 or more
//! become [`SendctlError::Api`] carrying the body text untouched.

use std::io::Read;
use std::path::PathBuf;

use serde::Deserialize;
use serde_json::Value;
use serde_json::value::RawValue;
use tracing::debug;

use super::{ApiRequest, Transport};
use crate::error::SendctlError;

/// Where a recorded document comes from.
#[derive(Debug, Clone)]
pub enum ResponseSource {
    /// Read from standard input.
    Stdin,
    /// Read from a file.
    File(PathBuf),
    /// Held in memory.
    Inline(String),
}

impl From<PathBuf> for ResponseSource {
    fn from(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            ResponseSource::Stdin
        } else {
            ResponseSource::File(path)
        }
    }
}

/// Replays one recorded response for every request.
#[derive(Debug, Clone)]
pub struct RecordedTransport {
    source: ResponseSource,
}

impl RecordedTransport {
    /// Replays the document at `source`.
    pub fn new(source: impl Into<ResponseSource>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Replays an in-memory document.
    pub fn inline(document: impl Into<String>) -> Self {
        Self::new(ResponseSource::Inline(document.into()))
    }

    fn read_document(&self) -> Result<String, SendctlError> {
        match &self.source {
            ResponseSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
            ResponseSource::File(path) => std::fs::read_to_string(path).map_err(|e| {
                SendctlError::Config {
                    message: format!("cannot read response file {}: {e}", path.display()),
                }
            }),
            ResponseSource::Inline(text) => Ok(text.clone()),
        }
    }
}

impl Transport for RecordedTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, SendctlError> {
        debug!(
            operation = request.operation,
            source = ?self.source,
            "replaying recorded response"
        );
        let document = self.read_document()?;
        decode_document(&document)
    }
}

/// Transport used when no response source is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnconfiguredTransport;

impl Transport for UnconfiguredTransport {
    fn send(&self, request: &ApiRequest) -> Result<Value, SendctlError> {
        Err(SendctlError::Config {
            message: format!(
                "no response source configured for {}; pass --response-file or set SENDCTL_API__RESPONSE_FILE",
                request.operation
            ),
        })
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct Envelope<'a> {
    status: u16,
    #[serde(borrow)]
    body: &'a RawValue,
}

/// Decodes a recorded document into a success body or a remote error.
pub fn decode_document(document: &str) -> Result<Value, SendctlError> {
    let Ok(envelope) = serde_json::from_str::<Envelope<'_>>(document) else {
        return Ok(serde_json::from_str(document)?);
    };

    if envelope.status < 400 {
        return Ok(serde_json::from_str(envelope.body.get())?);
    }

    let raw_body = envelope.body.get().to_string();
    let parsed: Value = serde_json::from_str(&raw_body).unwrap_or(Value::Null);
    let message = parsed
        .get("message")
        .or_else(|| parsed.get("error"))
        .and_then(Value::as_str)
        .map_or_else(
            || format!("request failed with status {}", envelope.status),
            str::to_string,
        );
    let code = parsed
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string);

    Err(SendctlError::Api {
        status: envelope.status,
        message,
        code,
        raw_body: Some(raw_body),
    })
}
