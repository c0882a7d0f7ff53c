// SPDX-License-Identifier: Apache-2.0

//! Field model shared by the table, plain and CSV renderers.
//!
//! Each resource describes its fields once as a list of [`Column`]s. A
//! renderer picks the columns to show with [`resolve`] and asks each
//! [`FieldValue`] for its human or machine form.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use sendctl_core::models::StatsResponse;

use super::format::{
    self, ABSENT, REDACTED, human_list, human_time, machine_time, or_absent, percent_value,
};

/// Default truncation width for listing-table cells.
pub const DEFAULT_WIDTH: usize = 48;

/// Whether secrets may be shown in clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Secrets are replaced by [`REDACTED`].
    Masked,
    /// Secrets are shown; create output only.
    Revealed,
}

/// A single field value before formatting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Required text.
    Text(String),
    /// Nullable text.
    Optional(Option<String>),
    /// Boolean with human labels for each state.
    Flag {
        value: bool,
        on: &'static str,
        off: &'static str,
    },
    /// Nullable timestamp.
    Time(Option<DateTime<Utc>>),
    /// Counter.
    Count(u64),
    /// Duration in seconds.
    Seconds(f64),
    /// Share of a total.
    Percent { part: u64, total: u64 },
    /// List of strings.
    List(Vec<String>),
    /// Sensitive value.
    Secret(Option<String>),
}

impl FieldValue {
    pub fn flag(value: bool, on: &'static str, off: &'static str) -> Self {
        FieldValue::Flag { value, on, off }
    }

    pub fn yes_no(value: bool) -> Self {
        Self::flag(value, "Yes", "No")
    }

    pub fn time(value: &DateTime<Utc>) -> Self {
        FieldValue::Time(Some(*value))
    }

    /// Form used by table and plain output.
    #[must_use]
    pub fn human(&self, visibility: Visibility) -> String {
        match self {
            FieldValue::Text(s) => {
                if s.is_empty() {
                    ABSENT.to_string()
                } else {
                    s.clone()
                }
            }
            FieldValue::Optional(v) => or_absent(v.as_deref()),
            FieldValue::Flag { value, on, off } => {
                if *value {
                    (*on).to_string()
                } else {
                    (*off).to_string()
                }
            }
            FieldValue::Time(t) => human_time(t.as_ref()),
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Seconds(s) => format::seconds(*s),
            FieldValue::Percent { part, total } => format::percentage(*part, *total),
            FieldValue::List(items) => human_list(items),
            FieldValue::Secret(secret) => match (secret, visibility) {
                (None, _) => ABSENT.to_string(),
                (Some(s), _) if s.is_empty() => ABSENT.to_string(),
                (Some(s), Visibility::Revealed) => s.clone(),
                (Some(_), Visibility::Masked) => REDACTED.to_string(),
            },
        }
    }

    /// Form used by CSV output.
    #[must_use]
    pub fn machine(&self, visibility: Visibility) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Optional(v) => v.clone().unwrap_or_default(),
            FieldValue::Flag { value, .. } => value.to_string(),
            FieldValue::Time(t) => machine_time(t.as_ref()),
            FieldValue::Count(n) => n.to_string(),
            FieldValue::Seconds(s) => format!("{s:.3}"),
            FieldValue::Percent { part, total } => percent_value(*part, *total),
            FieldValue::List(items) => items.join(";"),
            FieldValue::Secret(secret) => match (secret, visibility) {
                (None, _) => String::new(),
                (Some(s), _) if s.is_empty() => String::new(),
                (Some(s), Visibility::Revealed) => s.clone(),
                (Some(_), Visibility::Masked) => REDACTED.to_string(),
            },
        }
    }

    /// Whether the value holds a non-empty secret.
    #[must_use]
    pub fn is_secret(&self) -> bool {
        matches!(self, FieldValue::Secret(Some(s)) if !s.is_empty())
    }
}

/// One logical field of a resource.
pub struct Column<T> {
    /// Name used by `--fields`; matches the JSON key where one exists.
    pub key: &'static str,
    /// Header or label text.
    pub label: &'static str,
    /// Shown in listing tables when no field order is given.
    pub listed: bool,
    /// Listing-table truncation width.
    pub width: usize,
    value: fn(&T) -> FieldValue,
}

impl<T> Column<T> {
    pub fn new(key: &'static str, label: &'static str, value: fn(&T) -> FieldValue) -> Self {
        Self {
            key,
            label,
            listed: false,
            width: DEFAULT_WIDTH,
            value,
        }
    }

    /// Marks the column as part of the default listing.
    #[must_use]
    pub fn listed(mut self) -> Self {
        self.listed = true;
        self
    }

    /// Sets the listing-table truncation width.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn value(&self, item: &T) -> FieldValue {
        (self.value)(item)
    }
}

/// Nested rows shown under a resource (DNS records, scopes, breakdowns).
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    /// Field-order key that selects the section.
    pub key: &'static str,
    /// Heading.
    pub title: String,
    /// `(key, label)` per nested column.
    pub columns: Vec<(&'static str, &'static str)>,
    /// One entry per nested record.
    pub rows: Vec<Vec<FieldValue>>,
}

impl Section {
    /// Builds a section from nested records.
    pub fn of<N: Record>(key: &'static str, title: impl Into<String>, items: &[N]) -> Self {
        let columns = N::columns();
        Self {
            key,
            title: title.into(),
            columns: columns.iter().map(|c| (c.key, c.label)).collect(),
            rows: items
                .iter()
                .map(|item| columns.iter().map(|c| c.value(item)).collect())
                .collect(),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.columns.iter().map(|(_, label)| *label).collect()
    }
}

/// A resource the renderers know how to display.
pub trait Record: Serialize {
    /// Singular noun used in generic messages.
    const NOUN: &'static str;

    /// JSON keys holding secrets.
    const SECRET_KEYS: &'static [&'static str] = &[];

    /// Every field in default single-view order.
    fn columns() -> Vec<Column<Self>>
    where
        Self: Sized;

    /// Nested sections, present even when they have no rows.
    fn sections(&self) -> Vec<Section> {
        Vec::new()
    }

    /// Replaces secrets in this record's serialized form.
    fn mask_json(&self, value: &mut Value) {
        if let Value::Object(map) = value {
            for key in Self::SECRET_KEYS {
                if let Some(v) = map.get_mut(*key)
                    && !v.is_null()
                    && v.as_str() != Some("")
                {
                    *v = Value::String(REDACTED.to_string());
                }
            }
        }
    }
}

/// A statistics bucket.
pub trait StatsRecord: Record {
    /// Label of the metric drawn by `--chart`.
    const CHART_METRIC: &'static str;

    fn from_timestamp(&self) -> &DateTime<Utc>;

    fn to_timestamp(&self) -> &DateTime<Utc>;

    /// Value drawn by `--chart`.
    fn chart_value(&self) -> f64;

    /// Human form of the chart value.
    fn chart_label(&self) -> String;

    /// Human `from - to` label.
    fn period(&self) -> String {
        format!(
            "{} - {}",
            human_time(Some(self.from_timestamp())),
            human_time(Some(self.to_timestamp()))
        )
    }
}

/// Which default applies when no field order is given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Multi-row listing: the resource's listed subset.
    Listing,
    /// Single resource: every field.
    Detail,
}

/// Picks the columns to show.
///
/// With an explicit order the result follows it, skipping unknown and
/// repeated names. Without one the view's default applies.
pub fn resolve<'c, T>(
    columns: &'c [Column<T>],
    order: Option<&[String]>,
    view: View,
) -> Vec<&'c Column<T>> {
    match order {
        Some(order) => {
            let mut picked: Vec<&Column<T>> = Vec::new();
            for name in order {
                let key = format::field_key(name);
                if let Some(column) = columns.iter().find(|c| c.key == key)
                    && !picked.iter().any(|p| p.key == column.key)
                {
                    picked.push(column);
                }
            }
            picked
        }
        None => columns
            .iter()
            .filter(|c| view == View::Detail || c.listed)
            .collect(),
    }
}

/// Sections of `item` to draw, in order, skipping empty ones.
pub fn visible_sections<T: Record>(item: &T, order: Option<&[String]>) -> Vec<Section> {
    let sections = item.sections();
    match order {
        None => sections.into_iter().filter(|s| !s.rows.is_empty()).collect(),
        Some(order) => {
            let mut picked = Vec::new();
            for name in order {
                let key = format::field_key(name);
                if let Some(section) = sections.iter().find(|s| s.key == key)
                    && !section.rows.is_empty()
                    && !picked.iter().any(|p: &Section| p.key == section.key)
                {
                    picked.push(section.clone());
                }
            }
            picked
        }
    }
}

/// Serializes `item` with secrets masked.
pub fn masked_json<T: Record>(item: &T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(item)?;
    item.mask_json(&mut value);
    Ok(value)
}

/// Maximum chart value across buckets.
pub fn chart_max<B: StatsRecord>(stats: &StatsResponse<B>) -> f64 {
    stats
        .data
        .iter()
        .map(StatsRecord::chart_value)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        name: String,
        token: Option<String>,
        active: bool,
    }

    impl Record for Sample {
        const NOUN: &'static str = "sample";
        const SECRET_KEYS: &'static [&'static str] = &["token"];

        fn columns() -> Vec<Column<Self>> {
            vec![
                Column::new("name", "Name", |s: &Sample| FieldValue::Text(s.name.clone())).listed(),
                Column::new("token", "Token", |s: &Sample| FieldValue::Secret(s.token.clone())),
                Column::new("active", "Active", |s: &Sample| {
                    FieldValue::flag(s.active, "Active", "Inactive")
                })
                .listed(),
            ]
        }
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_resolve_defaults() {
        let columns = Sample::columns();
        let listing: Vec<_> = resolve(&columns, None, View::Listing)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(listing, vec!["name", "active"]);
        let detail: Vec<_> = resolve(&columns, None, View::Detail)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(detail, vec!["name", "token", "active"]);
    }

    #[test]
    fn test_resolve_explicit_order_drops_unknown() {
        let columns = Sample::columns();
        let wanted = order(&["Active", "bogus", "name", "active"]);
        let keys: Vec<_> = resolve(&columns, Some(&wanted), View::Listing)
            .iter()
            .map(|c| c.key)
            .collect();
        assert_eq!(keys, vec!["active", "name"]);
    }

    #[test]
    fn test_secret_visibility() {
        let secret = FieldValue::Secret(Some("s3cr3t".to_string()));
        assert_eq!(secret.human(Visibility::Masked), REDACTED);
        assert_eq!(secret.human(Visibility::Revealed), "s3cr3t");
        assert_eq!(secret.machine(Visibility::Masked), REDACTED);
        assert_eq!(FieldValue::Secret(None).human(Visibility::Masked), "-");
        assert_eq!(FieldValue::Secret(None).machine(Visibility::Revealed), "");
    }

    #[test]
    fn test_flag_forms() {
        let flag = FieldValue::flag(true, "Valid", "Invalid");
        assert_eq!(flag.human(Visibility::Masked), "Valid");
        assert_eq!(flag.machine(Visibility::Masked), "true");
    }

    #[test]
    fn test_masked_json() {
        let sample = Sample {
            name: "n".to_string(),
            token: Some("s3cr3t".to_string()),
            active: true,
        };
        let value = masked_json(&sample).unwrap();
        assert_eq!(value["token"], REDACTED);
        assert_eq!(value["name"], "n");

        let no_token = Sample {
            name: "n".to_string(),
            token: None,
            active: true,
        };
        assert!(masked_json(&no_token).unwrap()["token"].is_null());
    }
}
