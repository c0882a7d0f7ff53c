// SPDX-License-Identifier: Apache-2.0

//! Text and date utility functions for sendctl.
//!
//! Provides reusable helpers for truncation and date parsing. These are
//! shared by the CLI renderers and the command layer.

use chrono::{DateTime, NaiveDate, Utc};

use crate::error::SendctlError;

/// Truncates text to a maximum length with a custom suffix.
///
/// Uses character count (not byte count) to safely handle multi-byte UTF-8.
/// The suffix is included in the max length calculation.
///
/// # Examples
///
/// ```
/// use sendctl_core::utils::truncate_with_suffix;
///
/// let text = "This is a very long string that needs truncation";
/// let result = truncate_with_suffix(text, 20, "... [more]");
/// assert!(result.ends_with("... [more]"));
/// assert!(result.chars().count() <= 20);
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        text.to_string()
    } else {
        let suffix_len = suffix.chars().count();
        let truncate_at = max_len.saturating_sub(suffix_len);
        let truncated: String = text.chars().take(truncate_at).collect();
        format!("{truncated}{suffix}")
    }
}

/// Truncates text to a maximum length with default ellipsis suffix "...".
///
/// # Examples
///
/// ```
/// use sendctl_core::utils::truncate;
///
/// assert_eq!(truncate("Hello", 10), "Hello");
///
/// let long = "https://hooks.example.com/inbound/very/long/path";
/// let result = truncate(long, 20);
/// assert!(result.ends_with("..."));
/// assert_eq!(result.chars().count(), 20);
/// ```
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Parses a date in YYYY-MM-DD or RFC 3339 format into a UTC timestamp.
///
/// Bare dates resolve to midnight UTC.
///
/// # Examples
///
/// ```
/// use sendctl_core::utils::parse_date;
///
/// let dt = parse_date("2024-03-01").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-03-01T00:00:00+00:00");
/// assert!(parse_date("March 1st").is_err());
/// ```
pub fn parse_date(date_str: &str) -> Result<DateTime<Utc>, SendctlError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        && let Some(datetime) = date.and_hms_opt(0, 0, 0)
    {
        return Ok(datetime.and_utc());
    }

    Err(SendctlError::Validation {
        message: format!("Invalid date: {date_str}"),
        details: Some("expected YYYY-MM-DD or RFC 3339".to_string()),
    })
}
