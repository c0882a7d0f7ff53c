// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// SMTP relay credentials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmtpCredential {
    /// Credential identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Display name.
    pub name: String,
    /// SMTP username.
    pub username: String,
    /// SMTP password. Only returned in clear by the create call.
    pub password: Option<String>,
    /// `global` or `scoped`.
    pub scope: String,
    /// Domains the credential may send for when scoped.
    pub domains: Option<Vec<String>>,
    /// Sandbox credentials accept mail without delivering it.
    #[serde(default)]
    pub sandbox: bool,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
