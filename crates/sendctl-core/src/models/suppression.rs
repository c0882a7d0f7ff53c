// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// A suppressed recipient address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suppression {
    /// Suppression identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Suppressed address.
    pub email: String,
    /// Domain the suppression applies to; account-wide when absent.
    pub domain: Option<String>,
    /// Why the address was suppressed.
    pub reason: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// When the suppression lapses; permanent when absent.
    pub expires_at: Option<DateTime<Utc>>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}
