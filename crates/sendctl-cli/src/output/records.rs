// SPDX-License-Identifier: Apache-2.0

//! Field descriptions for every resource the CLI renders.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use sendctl_core::models::{
    ApiKey, ApiKeyScope, AuthStatus, BounceBucket, DeliverabilityBucket, DeliveryTimeBucket,
    DnsRecord, Domain, DomainDeliveryTime, Message, Route, SendResult, SmtpCredential, Suppression,
    Webhook,
};

use super::fields::{Column, FieldValue, Record, Section, StatsRecord};
use super::format::{self, mask_key};

const ID_WIDTH: usize = 36;
const WIDE: usize = 40;

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn optional(value: Option<&String>) -> FieldValue {
    FieldValue::Optional(value.cloned())
}

fn time(value: &DateTime<Utc>) -> FieldValue {
    FieldValue::time(value)
}

fn maybe_time(value: Option<&DateTime<Utc>>) -> FieldValue {
    FieldValue::Time(value.copied())
}

fn enabled(value: bool) -> FieldValue {
    FieldValue::flag(value, "Enabled", "Disabled")
}

// ============================================================================
// Domains
// ============================================================================

impl Record for Domain {
    const NOUN: &'static str = "domain";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |d: &Domain| text(&d.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("domain", "Domain", |d: &Domain| text(&d.domain)).listed(),
            Column::new("dns_valid", "DNS", |d: &Domain| {
                FieldValue::flag(d.dns_valid, "Valid", "Invalid")
            })
            .listed(),
            Column::new("account_id", "Account ID", |d: &Domain| text(&d.account_id))
                .width(ID_WIDTH),
            Column::new("tracking_subdomain", "Tracking Subdomain", |d: &Domain| {
                optional(d.tracking_subdomain.as_ref())
            }),
            Column::new("return_path_subdomain", "Return Path Subdomain", |d: &Domain| {
                optional(d.return_path_subdomain.as_ref())
            }),
            Column::new("last_dns_check_at", "Last DNS Check", |d: &Domain| {
                maybe_time(d.last_dns_check_at.as_ref())
            }),
            Column::new("created_at", "Created", |d: &Domain| time(&d.created_at)).listed(),
            Column::new("updated_at", "Updated", |d: &Domain| time(&d.updated_at)),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        vec![Section::of("dns_records", "DNS Records", &self.dns_records)]
    }
}

impl Record for DnsRecord {
    const NOUN: &'static str = "DNS record";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("type", "Type", |r: &DnsRecord| text(&r.record_type)).listed(),
            Column::new("host", "Host", |r: &DnsRecord| text(&r.host)).listed(),
            Column::new("content", "Content", |r: &DnsRecord| text(&r.content)).listed(),
            Column::new("required", "Required", |r: &DnsRecord| {
                FieldValue::yes_no(r.required)
            })
            .listed(),
            Column::new("propagated", "Propagated", |r: &DnsRecord| {
                FieldValue::yes_no(r.propagated)
            })
            .listed(),
        ]
    }
}

// ============================================================================
// Messages
// ============================================================================

impl Record for Message {
    const NOUN: &'static str = "message";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |m: &Message| text(&m.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("sender", "From", |m: &Message| text(&m.sender)).listed(),
            Column::new("recipient", "To", |m: &Message| text(&m.recipient)).listed(),
            Column::new("subject", "Subject", |m: &Message| optional(m.subject.as_ref()))
                .listed()
                .width(WIDE),
            Column::new("status", "Status", |m: &Message| text(&m.status)).listed(),
            Column::new("direction", "Direction", |m: &Message| text(&m.direction)),
            Column::new("account_id", "Account ID", |m: &Message| text(&m.account_id))
                .width(ID_WIDTH),
            Column::new("domain_id", "Domain ID", |m: &Message| text(&m.domain_id))
                .width(ID_WIDTH),
            Column::new("tags", "Tags", |m: &Message| FieldValue::List(m.tags.clone()))
                .width(WIDE),
            Column::new("bounce_classification", "Bounce Classification", |m: &Message| {
                optional(m.bounce_classification.as_ref())
            }),
            Column::new("delivery_attempts", "Delivery Attempts", |m: &Message| {
                FieldValue::Count(m.delivery_attempts)
            }),
            Column::new("open_count", "Opens", |m: &Message| FieldValue::Count(m.open_count)),
            Column::new("click_count", "Clicks", |m: &Message| {
                FieldValue::Count(m.click_count)
            }),
            Column::new("created_at", "Created", |m: &Message| time(&m.created_at)).listed(),
            Column::new("delivered_at", "Delivered", |m: &Message| {
                maybe_time(m.delivered_at.as_ref())
            }),
            Column::new("retain_until", "Retain Until", |m: &Message| {
                maybe_time(m.retain_until.as_ref())
            }),
        ]
    }
}

impl Record for SendResult {
    const NOUN: &'static str = "message";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("recipient", "Recipient", |r: &SendResult| text(&r.recipient)).listed(),
            Column::new("id", "Message ID", |r: &SendResult| optional(r.id.as_ref()))
                .listed()
                .width(ID_WIDTH),
            Column::new("status", "Status", |r: &SendResult| text(&r.status)).listed(),
            Column::new("error", "Error", |r: &SendResult| optional(r.error.as_ref())).listed(),
        ]
    }
}

// ============================================================================
// Webhooks and routes
// ============================================================================

impl Record for Webhook {
    const NOUN: &'static str = "webhook";
    const SECRET_KEYS: &'static [&'static str] = &["secret"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |w: &Webhook| text(&w.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("name", "Name", |w: &Webhook| text(&w.name)).listed(),
            Column::new("url", "URL", |w: &Webhook| text(&w.url))
                .listed()
                .width(WIDE),
            Column::new("enabled", "Status", |w: &Webhook| enabled(w.enabled)).listed(),
            Column::new("events", "Events", |w: &Webhook| FieldValue::List(w.events()))
                .listed()
                .width(WIDE),
            Column::new("scope", "Scope", |w: &Webhook| optional(w.scope.as_ref())),
            Column::new("domains", "Domains", |w: &Webhook| {
                FieldValue::List(w.domains.clone().unwrap_or_default())
            })
            .width(WIDE),
            Column::new("secret", "Signing Secret", |w: &Webhook| {
                FieldValue::Secret(w.secret.clone())
            }),
            Column::new("account_id", "Account ID", |w: &Webhook| text(&w.account_id))
                .width(ID_WIDTH),
            Column::new("success_count", "Successes", |w: &Webhook| {
                FieldValue::Count(w.success_count)
            }),
            Column::new("error_count", "Errors", |w: &Webhook| FieldValue::Count(w.error_count)),
            Column::new(
                "errors_since_last_success",
                "Errors Since Last Success",
                |w: &Webhook| FieldValue::Count(w.errors_since_last_success),
            ),
            Column::new("last_request_at", "Last Request", |w: &Webhook| {
                maybe_time(w.last_request_at.as_ref())
            }),
            Column::new("created_at", "Created", |w: &Webhook| time(&w.created_at)),
            Column::new("updated_at", "Updated", |w: &Webhook| time(&w.updated_at)),
        ]
    }
}

impl Record for Route {
    const NOUN: &'static str = "route";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |r: &Route| text(&r.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("name", "Name", |r: &Route| text(&r.name)).listed(),
            Column::new("recipient", "Recipient", |r: &Route| text(&r.recipient)).listed(),
            Column::new("url", "URL", |r: &Route| text(&r.url))
                .listed()
                .width(WIDE),
            Column::new("enabled", "Status", |r: &Route| enabled(r.enabled)).listed(),
            Column::new("attachments", "Attachments", |r: &Route| {
                FieldValue::yes_no(r.attachments)
            }),
            Column::new("headers", "Headers", |r: &Route| FieldValue::yes_no(r.headers)),
            Column::new("group_by_message_id", "Group By Message ID", |r: &Route| {
                FieldValue::yes_no(r.group_by_message_id)
            }),
            Column::new("strip_replies", "Strip Replies", |r: &Route| {
                FieldValue::yes_no(r.strip_replies)
            }),
            Column::new("account_id", "Account ID", |r: &Route| text(&r.account_id))
                .width(ID_WIDTH),
            Column::new("success_count", "Successes", |r: &Route| {
                FieldValue::Count(r.success_count)
            }),
            Column::new("error_count", "Errors", |r: &Route| FieldValue::Count(r.error_count)),
            Column::new(
                "errors_since_last_success",
                "Errors Since Last Success",
                |r: &Route| FieldValue::Count(r.errors_since_last_success),
            ),
            Column::new("last_request_at", "Last Request", |r: &Route| {
                maybe_time(r.last_request_at.as_ref())
            }),
            Column::new("created_at", "Created", |r: &Route| time(&r.created_at)),
            Column::new("updated_at", "Updated", |r: &Route| time(&r.updated_at)),
        ]
    }
}

// ============================================================================
// Suppressions
// ============================================================================

impl Record for Suppression {
    const NOUN: &'static str = "suppression";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("email", "Email", |s: &Suppression| text(&s.email)).listed(),
            Column::new("domain", "Domain", |s: &Suppression| optional(s.domain.as_ref()))
                .listed(),
            Column::new("reason", "Reason", |s: &Suppression| optional(s.reason.as_ref()))
                .listed(),
            Column::new("created_at", "Created", |s: &Suppression| time(&s.created_at)).listed(),
            Column::new("expires_at", "Expires", |s: &Suppression| {
                maybe_time(s.expires_at.as_ref())
            })
            .listed(),
            Column::new("id", "ID", |s: &Suppression| text(&s.id)).width(ID_WIDTH),
            Column::new("account_id", "Account ID", |s: &Suppression| text(&s.account_id))
                .width(ID_WIDTH),
        ]
    }
}

// ============================================================================
// Credentials
// ============================================================================

impl Record for SmtpCredential {
    const NOUN: &'static str = "SMTP credential";
    const SECRET_KEYS: &'static [&'static str] = &["password"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |c: &SmtpCredential| text(&c.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("name", "Name", |c: &SmtpCredential| text(&c.name)).listed(),
            Column::new("username", "Username", |c: &SmtpCredential| text(&c.username))
                .listed(),
            Column::new("password", "Password", |c: &SmtpCredential| {
                FieldValue::Secret(c.password.clone())
            }),
            Column::new("scope", "Scope", |c: &SmtpCredential| text(&c.scope)).listed(),
            Column::new("domains", "Domains", |c: &SmtpCredential| {
                FieldValue::List(c.domains.clone().unwrap_or_default())
            })
            .listed()
            .width(WIDE),
            Column::new("sandbox", "Sandbox", |c: &SmtpCredential| {
                FieldValue::yes_no(c.sandbox)
            })
            .listed(),
            Column::new("account_id", "Account ID", |c: &SmtpCredential| {
                text(&c.account_id)
            })
            .width(ID_WIDTH),
            Column::new("created_at", "Created", |c: &SmtpCredential| time(&c.created_at)),
            Column::new("updated_at", "Updated", |c: &SmtpCredential| time(&c.updated_at)),
        ]
    }
}

impl Record for ApiKey {
    const NOUN: &'static str = "API key";
    const SECRET_KEYS: &'static [&'static str] = &["secret_key"];

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |k: &ApiKey| text(&k.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("label", "Label", |k: &ApiKey| text(&k.label)).listed(),
            Column::new("public_key", "Public Key", |k: &ApiKey| text(&k.public_key))
                .listed()
                .width(WIDE),
            Column::new("secret_key", "Secret Key", |k: &ApiKey| {
                FieldValue::Secret(k.secret_key.clone())
            }),
            Column::new("scopes", "Scopes", |k: &ApiKey| FieldValue::List(k.scope_names()))
                .listed()
                .width(WIDE),
            Column::new("account_id", "Account ID", |k: &ApiKey| text(&k.account_id))
                .width(ID_WIDTH),
            Column::new("last_used_at", "Last Used", |k: &ApiKey| {
                maybe_time(k.last_used_at.as_ref())
            })
            .listed(),
            Column::new("created_at", "Created", |k: &ApiKey| time(&k.created_at)),
            Column::new("updated_at", "Updated", |k: &ApiKey| time(&k.updated_at)),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        vec![Section::of("scopes", "Scopes", &self.scopes)]
    }
}

impl Record for ApiKeyScope {
    const NOUN: &'static str = "scope";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("id", "ID", |s: &ApiKeyScope| text(&s.id))
                .listed()
                .width(ID_WIDTH),
            Column::new("scope", "Scope", |s: &ApiKeyScope| text(&s.scope)).listed(),
            Column::new("domain_id", "Domain ID", |s: &ApiKeyScope| {
                optional(s.domain_id.as_ref())
            })
            .listed(),
        ]
    }
}

// ============================================================================
// Auth
// ============================================================================

impl Record for AuthStatus {
    const NOUN: &'static str = "profile";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("profile", "Profile", |a: &AuthStatus| text(&a.profile)).listed(),
            Column::new("api_key", "API Key", |a: &AuthStatus| {
                FieldValue::Text(mask_key(&a.api_key))
            })
            .listed(),
            Column::new("account_id", "Account ID", |a: &AuthStatus| text(&a.account_id))
                .listed(),
            Column::new("account_name", "Account Name", |a: &AuthStatus| {
                optional(a.account_name.as_ref())
            })
            .listed(),
            Column::new("valid", "Status", |a: &AuthStatus| {
                FieldValue::flag(a.valid, "Valid", "Invalid")
            })
            .listed(),
            Column::new("api_url", "API URL", |a: &AuthStatus| optional(a.api_url.as_ref())),
        ]
    }

    fn mask_json(&self, value: &mut Value) {
        if let Value::Object(map) = value {
            map.insert("api_key".to_string(), Value::String(mask_key(&self.api_key)));
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

impl Record for DeliverabilityBucket {
    const NOUN: &'static str = "statistic";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("from_timestamp", "From", |b: &DeliverabilityBucket| {
                time(&b.from_timestamp)
            })
            .listed(),
            Column::new("to_timestamp", "To", |b: &DeliverabilityBucket| {
                time(&b.to_timestamp)
            })
            .listed(),
            Column::new("reception_count", "Received", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.reception_count)
            })
            .listed(),
            Column::new("delivered_count", "Delivered", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.delivered_count)
            })
            .listed(),
            Column::new("deferred_count", "Deferred", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.deferred_count)
            })
            .listed(),
            Column::new("bounced_count", "Bounced", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.bounced_count)
            })
            .listed(),
            Column::new("failed_count", "Failed", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.failed_count)
            })
            .listed(),
            Column::new("suppressed_count", "Suppressed", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.suppressed_count)
            })
            .listed(),
            Column::new("opened_count", "Opened", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.opened_count)
            })
            .listed(),
            Column::new("clicked_count", "Clicked", |b: &DeliverabilityBucket| {
                FieldValue::Count(b.clicked_count)
            })
            .listed(),
        ]
    }
}

impl StatsRecord for DeliverabilityBucket {
    const CHART_METRIC: &'static str = "Delivered";

    fn from_timestamp(&self) -> &DateTime<Utc> {
        &self.from_timestamp
    }

    fn to_timestamp(&self) -> &DateTime<Utc> {
        &self.to_timestamp
    }

    #[allow(clippy::cast_precision_loss)]
    fn chart_value(&self) -> f64 {
        self.delivered_count as f64
    }

    fn chart_label(&self) -> String {
        self.delivered_count.to_string()
    }
}

/// One classification's share of a bounce bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BounceShare {
    pub classification: String,
    pub count: u64,
    #[serde(skip)]
    pub total: u64,
}

impl Record for BounceShare {
    const NOUN: &'static str = "bounce";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("classification", "Classification", |s: &BounceShare| {
                text(&s.classification)
            })
            .listed(),
            Column::new("count", "Count", |s: &BounceShare| FieldValue::Count(s.count)).listed(),
            Column::new("percentage", "Percentage", |s: &BounceShare| FieldValue::Percent {
                part: s.count,
                total: s.total,
            })
            .listed(),
        ]
    }
}

fn bounce_shares(bucket: &BounceBucket) -> Vec<BounceShare> {
    let total = bucket.total();
    bucket
        .bounces
        .iter()
        .map(|b| BounceShare {
            classification: b.classification.clone(),
            count: b.count,
            total,
        })
        .collect()
}

impl Record for BounceBucket {
    const NOUN: &'static str = "statistic";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("from_timestamp", "From", |b: &BounceBucket| time(&b.from_timestamp))
                .listed(),
            Column::new("to_timestamp", "To", |b: &BounceBucket| time(&b.to_timestamp)).listed(),
            Column::new("total", "Total Bounces", |b: &BounceBucket| {
                FieldValue::Count(b.total())
            })
            .listed(),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        vec![Section::of("bounces", "Bounces", &bounce_shares(self))]
    }
}

impl StatsRecord for BounceBucket {
    const CHART_METRIC: &'static str = "Bounces";

    fn from_timestamp(&self) -> &DateTime<Utc> {
        &self.from_timestamp
    }

    fn to_timestamp(&self) -> &DateTime<Utc> {
        &self.to_timestamp
    }

    #[allow(clippy::cast_precision_loss)]
    fn chart_value(&self) -> f64 {
        self.total() as f64
    }

    fn chart_label(&self) -> String {
        self.total().to_string()
    }
}

impl Record for DomainDeliveryTime {
    const NOUN: &'static str = "recipient domain";

    // Keys differ from the bucket's own counters so both can be requested.
    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("recipient_domain", "Recipient Domain", |d: &DomainDeliveryTime| {
                text(&d.recipient_domain)
            })
            .listed(),
            Column::new(
                "domain_delivered_count",
                "Domain Delivered",
                |d: &DomainDeliveryTime| FieldValue::Count(d.delivered_count),
            )
            .listed(),
            Column::new(
                "domain_avg_delivery_time",
                "Domain Avg Time",
                |d: &DomainDeliveryTime| FieldValue::Seconds(d.avg_delivery_time),
            )
            .listed(),
        ]
    }
}

impl Record for DeliveryTimeBucket {
    const NOUN: &'static str = "statistic";

    fn columns() -> Vec<Column<Self>> {
        vec![
            Column::new("from_timestamp", "From", |b: &DeliveryTimeBucket| {
                time(&b.from_timestamp)
            })
            .listed(),
            Column::new("to_timestamp", "To", |b: &DeliveryTimeBucket| {
                time(&b.to_timestamp)
            })
            .listed(),
            Column::new("delivered_count", "Delivered", |b: &DeliveryTimeBucket| {
                FieldValue::Count(b.delivered_count)
            })
            .listed(),
            Column::new("avg_delivery_time", "Avg Time", |b: &DeliveryTimeBucket| {
                FieldValue::Seconds(b.avg_delivery_time)
            })
            .listed(),
        ]
    }

    fn sections(&self) -> Vec<Section> {
        vec![Section::of(
            "delivery_times",
            "Delivery Times By Domain",
            &self.delivery_times,
        )]
    }
}

impl StatsRecord for DeliveryTimeBucket {
    const CHART_METRIC: &'static str = "Avg Time";

    fn from_timestamp(&self) -> &DateTime<Utc> {
        &self.from_timestamp
    }

    fn to_timestamp(&self) -> &DateTime<Utc> {
        &self.to_timestamp
    }

    fn chart_value(&self) -> f64 {
        self.avg_delivery_time
    }

    fn chart_label(&self) -> String {
        format::seconds(self.avg_delivery_time)
    }
}
