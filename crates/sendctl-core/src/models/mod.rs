// SPDX-License-Identifier: Apache-2.0

//! Typed resource models returned by the email service.
//!
//! These are plain data carriers: deserialized once per command, rendered
//! once, then dropped. Unknown keys on a top-level resource are collected into
//! its `additional_properties` bag and written back inline on serialization.

mod api_key;
mod auth;
mod domain;
mod message;
mod page;
mod route;
mod smtp;
mod stats;
mod suppression;
mod webhook;

use std::collections::BTreeMap;

pub use api_key::{ApiKey, ApiKeyScope};
pub use auth::AuthStatus;
pub use domain::{DnsRecord, Domain};
pub use message::{Message, SendResponse, SendResult};
pub use page::{Page, Pagination};
pub use route::Route;
pub use smtp::SmtpCredential;
pub use stats::{
    BounceBucket, BounceCount, DeliverabilityBucket, DeliveryTimeBucket, DomainDeliveryTime,
    StatsResponse,
};
pub use suppression::Suppression;
pub use webhook::{WEBHOOK_EVENTS, Webhook};

/// Extension fields not modelled explicitly.
pub type AdditionalProperties = BTreeMap<String, serde_json::Value>;
