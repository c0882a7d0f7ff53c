// SPDX-License-Identifier: Apache-2.0

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics response: one bucket per time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsResponse<B> {
    /// Time buckets in chronological order.
    pub data: Vec<B>,
}

/// Delivery outcome counts for one time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverabilityBucket {
    /// Window start.
    pub from_timestamp: DateTime<Utc>,
    /// Window end.
    pub to_timestamp: DateTime<Utc>,
    #[serde(default)]
    pub reception_count: u64,
    #[serde(default)]
    pub delivered_count: u64,
    #[serde(default)]
    pub deferred_count: u64,
    #[serde(default)]
    pub bounced_count: u64,
    #[serde(default)]
    pub failed_count: u64,
    #[serde(default)]
    pub suppressed_count: u64,
    #[serde(default)]
    pub opened_count: u64,
    #[serde(default)]
    pub clicked_count: u64,
}

/// Bounce counts per classification for one time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BounceBucket {
    /// Window start.
    pub from_timestamp: DateTime<Utc>,
    /// Window end.
    pub to_timestamp: DateTime<Utc>,
    /// One entry per bounce classification seen in the window.
    #[serde(default)]
    pub bounces: Vec<BounceCount>,
}

impl BounceBucket {
    /// Total bounces across classifications.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.bounces.iter().map(|b| b.count).sum()
    }
}

/// Bounces of a single classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BounceCount {
    /// Classification name (e.g. `hard`, `soft`, `spam`).
    pub classification: String,
    /// Number of bounces.
    pub count: u64,
}

/// Delivery latency for one time window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryTimeBucket {
    /// Window start.
    pub from_timestamp: DateTime<Utc>,
    /// Window end.
    pub to_timestamp: DateTime<Utc>,
    /// Messages delivered in the window.
    #[serde(default)]
    pub delivered_count: u64,
    /// Mean seconds from reception to delivery.
    #[serde(default)]
    pub avg_delivery_time: f64,
    /// Breakdown per recipient domain.
    #[serde(default)]
    pub delivery_times: Vec<DomainDeliveryTime>,
}

/// Delivery latency towards one recipient domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainDeliveryTime {
    /// Recipient domain.
    pub recipient_domain: String,
    /// Messages delivered to the domain.
    pub delivered_count: u64,
    /// Mean seconds from reception to delivery.
    pub avg_delivery_time: f64,
}
