// SPDX-License-Identifier: Apache-2.0

//! Typed inputs for client calls.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Cursor pagination parameters shared by list calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListQuery {
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor returned by a previous page.
    pub cursor: Option<String>,
}

/// Filters for listing messages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MessageFilter {
    /// Only messages from this sender.
    pub sender: Option<String>,
    /// Only messages to this recipient.
    pub recipient: Option<String>,
    /// Only messages in this status.
    pub status: Option<String>,
    /// Pagination.
    #[serde(flatten)]
    pub page: ListQuery,
}

/// A message to send.
#[derive(Debug, Clone, Serialize)]
pub struct NewMessage {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
    pub tags: Vec<String>,
}

/// Fields for creating a webhook.
#[derive(Debug, Clone, Serialize)]
pub struct NewWebhook {
    pub name: String,
    pub url: String,
    pub events: Vec<String>,
    pub domains: Option<Vec<String>>,
}

/// Fields for updating a webhook; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub enabled: Option<bool>,
    pub events: Option<Vec<String>>,
}

/// Fields for creating an inbound route.
#[derive(Debug, Clone, Serialize)]
pub struct NewRoute {
    pub name: String,
    pub url: String,
    pub recipient: String,
    pub attachments: bool,
    pub headers: bool,
    pub strip_replies: bool,
}

/// Fields for updating a route; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RouteUpdate {
    pub name: Option<String>,
    pub url: Option<String>,
    pub recipient: Option<String>,
    pub enabled: Option<bool>,
}

/// Fields for creating a suppression.
#[derive(Debug, Clone, Serialize)]
pub struct NewSuppression {
    pub email: String,
    pub domain: Option<String>,
    pub reason: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Fields for creating SMTP credentials.
#[derive(Debug, Clone, Serialize)]
pub struct NewSmtpCredential {
    pub name: String,
    pub scope: String,
    pub domains: Option<Vec<String>>,
    pub sandbox: bool,
}

/// Fields for creating or updating an API key.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiKeyInput {
    pub label: Option<String>,
    pub scopes: Option<Vec<String>>,
}

/// Time window and filters for statistics calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub sender_domain: Option<String>,
    /// Bucket size: `hour`, `day`, `week` or `month`.
    pub group_by: Option<String>,
}
