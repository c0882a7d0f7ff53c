// SPDX-License-Identifier: Apache-2.0

//! Per-call render configuration.
//!
//! One value type per operation shape. A command builds the value, lends it
//! to exactly one render call and drops it.

/// Multi-row listing.
#[derive(Debug, Clone, Default)]
pub struct ListConfig {
    pub success_message: String,
    pub empty_message: String,
    pub show_pagination: bool,
    pub field_order: Option<Vec<String>>,
}

/// Single resource lookup.
#[derive(Debug, Clone, Default)]
pub struct SingleConfig {
    pub success_message: String,
    pub empty_message: String,
    pub field_order: Option<Vec<String>>,
}

/// Freshly created resource; the only shape that shows secrets.
#[derive(Debug, Clone, Default)]
pub struct CreateConfig {
    pub success_message: String,
    pub item_name: String,
    pub field_order: Option<Vec<String>>,
}

/// Modified resource.
#[derive(Debug, Clone, Default)]
pub struct UpdateConfig {
    pub success_message: String,
    pub item_name: String,
    pub field_order: Option<Vec<String>>,
}

/// Removal of one resource.
#[derive(Debug, Clone, Default)]
pub struct DeleteConfig {
    pub success_message: String,
    pub item_name: String,
}

/// Time-bucketed statistics.
#[derive(Debug, Clone, Default)]
pub struct StatsConfig {
    pub title: String,
    pub show_chart: bool,
    pub field_order: Option<Vec<String>>,
}

/// Yes/no lookups such as suppression checks and DNS verification.
#[derive(Debug, Clone, Default)]
pub struct CheckConfig {
    pub found_message: String,
    pub not_found_message: String,
    pub field_order: Option<Vec<String>>,
}

/// Bulk removal.
#[derive(Debug, Clone, Default)]
pub struct WipeConfig {
    pub success_message: String,
    pub item_name: String,
}

/// Message printed when a delete or wipe reports failure.
pub(crate) fn failure_message(item_name: &str) -> String {
    if item_name.is_empty() {
        "operation failed".to_string()
    } else {
        format!("failed to remove {item_name}")
    }
}

/// Message printed when a delete or wipe succeeds without a configured message.
pub(crate) fn removed_message(configured: &str, item_name: &str) -> String {
    if !configured.is_empty() {
        return configured.to_string();
    }
    if item_name.is_empty() {
        "Deleted.".to_string()
    } else {
        format!("Deleted {item_name}.")
    }
}

/// Configured empty message, or a generic one naming the resource.
pub(crate) fn empty_message(configured: &str, noun: &str) -> String {
    if configured.is_empty() {
        format!("No {noun}s found.")
    } else {
        configured.to_string()
    }
}
