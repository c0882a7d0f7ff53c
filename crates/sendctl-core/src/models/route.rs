// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// An inbound route forwarding received mail to a URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Route {
    /// Route identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Forwarding URL.
    pub url: String,
    /// Recipient pattern the route matches.
    pub recipient: String,
    /// Include attachments in the payload.
    #[serde(default)]
    pub attachments: bool,
    /// Include headers in the payload.
    #[serde(default)]
    pub headers: bool,
    /// Group payloads by message id.
    #[serde(default)]
    pub group_by_message_id: bool,
    /// Strip quoted replies from the body.
    #[serde(default)]
    pub strip_replies: bool,
    /// Whether the route is active.
    pub enabled: bool,
    /// Successful forwards.
    #[serde(default)]
    pub success_count: u64,
    /// Failed forwards.
    #[serde(default)]
    pub error_count: u64,
    /// Consecutive failures since the last success.
    #[serde(default)]
    pub errors_since_last_success: u64,
    /// Last forward attempt.
    pub last_request_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
