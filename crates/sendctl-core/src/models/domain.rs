// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::AdditionalProperties;

/// A sending domain registered with the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Domain identifier.
    pub id: String,
    /// Owning account.
    pub account_id: String,
    /// Fully qualified domain name.
    pub domain: String,
    /// DNS records the domain must publish.
    #[serde(default)]
    pub dns_records: Vec<DnsRecord>,
    /// Whether every required record is in place.
    pub dns_valid: bool,
    /// When DNS was last checked.
    pub last_dns_check_at: Option<DateTime<Utc>>,
    /// Subdomain used for open/click tracking.
    pub tracking_subdomain: Option<String>,
    /// Subdomain used for the return path.
    pub return_path_subdomain: Option<String>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Last update time.
    pub updated_at: DateTime<Utc>,
    /// Fields not modelled above.
    #[serde(flatten)]
    pub additional_properties: AdditionalProperties,
}

/// A DNS record required by a domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record type (TXT, CNAME, MX).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Host name the record lives at.
    pub host: String,
    /// Expected record content.
    pub content: String,
    /// Whether the record is mandatory for sending.
    pub required: bool,
    /// Whether the record is visible in public DNS.
    pub propagated: bool,
}
