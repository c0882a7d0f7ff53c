// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// An API key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    /// Key identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Human label.
    pub label: String,
    /// Public half of the key.
    pub public_key: String,
    /// Secret half. Only returned in clear by the create call.
    pub secret_key: Option<String>,
    /// Granted scopes.
    #[serde(default)]
    pub scopes: Vec<ApiKeyScope>,
    /// Last time the key authenticated a request.
    pub last_used_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// One scope granted to an API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiKeyScope {
    /// Scope grant identifier.
    pub id: String,
    /// Scope string, e.g. `messages:send:all`.
    pub scope: String,
    /// Domain the scope is restricted to.
    pub domain_id: Option<String>,
}

impl ApiKey {
    /// Scope strings in grant order.
    #[must_use]
    pub fn scope_names(&self) -> Vec<String> {
        self.scopes.iter().map(|s| s.scope.clone()).collect()
    }
}
