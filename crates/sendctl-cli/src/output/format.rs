// SPDX-License-Identifier: Apache-2.0

//! Formatting primitives shared by every renderer.
//!
//! Human forms (table, plain) and machine forms (CSV) are kept side by side
//! so a field always means the same thing whichever format shows it.

use chrono::{DateTime, SecondsFormat, Utc};

/// Placeholder shown instead of a secret outside create output.
pub const REDACTED: &str = "[HIDDEN]";

/// Placeholder for an absent value in human output.
pub const ABSENT: &str = "-";

/// `2024-01-02 15:04:05 UTC`, or `-` when absent.
#[must_use]
pub fn human_time(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(
        || ABSENT.to_string(),
        |t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    )
}

/// RFC 3339 with second precision, or empty when absent.
#[must_use]
pub fn machine_time(value: Option<&DateTime<Utc>>) -> String {
    value.map_or_else(String::new, |t| {
        t.to_rfc3339_opts(SecondsFormat::Secs, true)
    })
}

/// The value itself, or `-` when absent or blank.
#[must_use]
pub fn or_absent(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => ABSENT.to_string(),
    }
}

/// Joins list items, or `-` when the list is empty.
#[must_use]
pub fn human_list(items: &[String]) -> String {
    if items.is_empty() {
        ABSENT.to_string()
    } else {
        items.join(", ")
    }
}

/// Seconds with two decimals, e.g. `1.25s`.
#[must_use]
pub fn seconds(value: f64) -> String {
    format!("{value:.2}s")
}

/// Share of `part` in `total` with one decimal, without the percent sign.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percent_value(part: u64, total: u64) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", part as f64 * 100.0 / total as f64)
}

/// Share of `part` in `total`, e.g. `60.0%`.
#[must_use]
pub fn percentage(part: u64, total: u64) -> String {
    format!("{}%", percent_value(part, total))
}

/// Shows only the first eight characters of a credential.
#[must_use]
pub fn mask_key(key: &str) -> String {
    if key.chars().count() <= 8 {
        return "*".repeat(key.chars().count());
    }
    let prefix: String = key.chars().take(8).collect();
    format!("{prefix}...")
}

/// Horizontal bar scaled so that `max` fills `width` cells.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * width as f64).round() as usize;
    "#".repeat(cells.clamp(1, width))
}

/// Normalizes a user-supplied field name: lower case, `-` and spaces to `_`.
#[must_use]
pub fn field_key(name: &str) -> String {
    name.trim().to_lowercase().replace(['-', ' '], "_")
}
