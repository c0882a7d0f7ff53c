// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// A message accepted by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Message identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Sending domain identifier.
    pub domain_id: String,
    /// Envelope sender.
    pub sender: String,
    /// Envelope recipient.
    pub recipient: String,
    /// Subject line, if known.
    pub subject: Option<String>,
    /// Delivery status (Queued, Delivered, Bounced, ...).
    pub status: String,
    /// `outgoing` or `incoming`.
    pub direction: String,
    /// Tags attached at send time.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Bounce classification when the message bounced.
    pub bounce_classification: Option<String>,
    /// Number of delivery attempts so far.
    #[serde(default)]
    pub delivery_attempts: u64,
    /// Number of recorded opens.
    #[serde(default)]
    pub open_count: u64,
    /// Number of recorded clicks.
    #[serde(default)]
    pub click_count: u64,
    /// When the message was accepted.
    pub created_at: DateTime<Utc>,
    /// When the message was delivered.
    pub delivered_at: Option<DateTime<Utc>>,
    /// When message content will be purged.
    pub retain_until: Option<DateTime<Utc>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// Outcome of a send request for one recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResult {
    /// Recipient address.
    pub recipient: String,
    /// Message identifier when the message was queued.
    pub id: Option<String>,
    /// `queued` or `error`.
    pub status: String,
    /// Error description when the recipient was rejected.
    pub error: Option<String>,
}

/// Response to a send request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendResponse {
    /// One entry per recipient.
    pub data: Vec<SendResult>,
}
