// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// Event names a webhook can subscribe to, in display order.
pub const WEBHOOK_EVENTS: [&str; 10] = [
    "reception",
    "delivered",
    "transient_error",
    "failed",
    "bounced",
    "suppressed",
    "opened",
    "clicked",
    "suppression_created",
    "dns_error",
];

/// An outbound event webhook.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct Webhook {
    /// Webhook identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// Delivery URL.
    pub url: String,
    /// Whether events are being delivered.
    pub enabled: bool,
    #[serde(default)]
    pub on_reception: bool,
    #[serde(default)]
    pub on_delivered: bool,
    #[serde(default)]
    pub on_transient_error: bool,
    #[serde(default)]
    pub on_failed: bool,
    #[serde(default)]
    pub on_bounced: bool,
    #[serde(default)]
    pub on_suppressed: bool,
    #[serde(default)]
    pub on_opened: bool,
    #[serde(default)]
    pub on_clicked: bool,
    #[serde(default)]
    pub on_suppression_created: bool,
    #[serde(default)]
    pub on_dns_error: bool,
    /// `global` or `scoped`.
    pub scope: Option<String>,
    /// Domains the webhook is scoped to.
    pub domains: Option<Vec<String>>,
    /// Signing secret. Only returned in clear by the create call.
    pub secret: Option<String>,
    /// Successful deliveries.
    #[serde(default)]
    pub success_count: u64,
    /// Failed deliveries.
    #[serde(default)]
    pub error_count: u64,
    /// Consecutive failures since the last success.
    #[serde(default)]
    pub errors_since_last_success: u64,
    /// Last delivery attempt.
    pub last_request_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

impl Webhook {
    /// Names of the events this webhook subscribes to.
    #[must_use]
    pub fn events(&self) -> Vec<String> {
        let flags = [
            self.on_reception,
            self.on_delivered,
            self.on_transient_error,
            self.on_failed,
            self.on_bounced,
            self.on_suppressed,
            self.on_opened,
            self.on_clicked,
            self.on_suppression_created,
            self.on_dns_error,
        ];
        WEBHOOK_EVENTS
            .iter()
            .zip(flags)
            .filter(|(_, on)| *on)
            .map(|(name, _)| (*name).to_string())
            .collect()
    }
}
