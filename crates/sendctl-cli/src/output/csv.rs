// SPDX-License-Identifier: Apache-2.0

//! CSV renderer: header row plus one row per record, for other programs.
//!
//! Narrative success, empty and check-miss text is never written. Deletes
//! and wipes write a `success,message` status row since they carry no data.
//! Statistics are denormalized: a bucket with nested entries expands to one
//! row per entry.

use std::io::Write;

use anyhow::{Context, Result};
use sendctl_core::models::{Page, StatsResponse};

use super::fields::{self, Record, StatsRecord, View, Visibility};
use super::format::field_key;
use super::options::{self, CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use super::options::{StatsConfig, UpdateConfig, WipeConfig};
use super::{OutputRenderer, reported};

/// Where a statistics column takes its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Bucket(usize),
    Nested(usize),
}

/// Writes resources as comma-separated rows.
pub struct CsvRenderer {
    out: Box<dyn Write>,
}

impl CsvRenderer {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    /// Writes `header` and `rows`, flushing before returning.
    fn write(&mut self, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(&mut self.out);
        wtr.write_record(header).context("Failed to write CSV header")?;
        for row in rows {
            wtr.write_record(row).context("Failed to write CSV row")?;
        }
        wtr.flush()?;
        Ok(())
    }

    fn records<T: Record>(
        &mut self,
        items: &[T],
        order: Option<&[String]>,
        view: View,
        visibility: Visibility,
    ) -> Result<()> {
        let all = T::columns();
        let columns = fields::resolve(&all, order, view);
        if items.is_empty() || columns.is_empty() {
            return Ok(());
        }
        let header: Vec<&str> = columns.iter().map(|c| c.label).collect();
        let rows: Vec<Vec<String>> = items
            .iter()
            .map(|item| {
                columns
                    .iter()
                    .map(|c| c.value(item).machine(visibility))
                    .collect()
            })
            .collect();
        self.write(&header, &rows)
    }

    fn status(&mut self, message: &str) -> Result<()> {
        self.write(&["success", "message"], &[vec![
            "true".to_string(),
            message.to_string(),
        ]])
    }

    fn text(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Resolves the flattened statistics columns: bucket fields first, then
/// the nested breakdown, unless an explicit order says otherwise.
///
/// A section key in the order expands to all of its nested columns.
fn stats_layout<B: StatsRecord>(
    sample: &B,
    order: Option<&[String]>,
) -> Vec<(&'static str, Source)> {
    let bucket = B::columns();
    let section = sample.sections().into_iter().next();
    let nested: Vec<(&'static str, &'static str)> = section
        .as_ref()
        .map(|s| s.columns.clone())
        .unwrap_or_default();

    let Some(order) = order else {
        let mut layout: Vec<(&'static str, Source)> = bucket
            .iter()
            .enumerate()
            .filter(|(_, c)| c.listed)
            .map(|(i, c)| (c.label, Source::Bucket(i)))
            .collect();
        layout.extend(
            nested
                .iter()
                .enumerate()
                .map(|(j, (_, label))| (*label, Source::Nested(j))),
        );
        return layout;
    };

    let mut layout: Vec<(&'static str, Source)> = Vec::new();
    let mut push = |label: &'static str, source: Source| {
        if !layout.iter().any(|(_, s)| *s == source) {
            layout.push((label, source));
        }
    };
    for name in order {
        let key = field_key(name);
        if let Some(i) = bucket.iter().position(|c| c.key == key) {
            push(bucket[i].label, Source::Bucket(i));
        } else if section.as_ref().is_some_and(|s| s.key == key) {
            for (j, (_, label)) in nested.iter().enumerate() {
                push(*label, Source::Nested(j));
            }
        } else if let Some(j) = nested.iter().position(|(k, _)| *k == key) {
            push(nested[j].1, Source::Nested(j));
        }
    }
    layout
}

impl OutputRenderer for CsvRenderer {
    fn format_name(&self) -> &str {
        "csv"
    }

    fn set_writer(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn list<T: Record>(&mut self, page: &Page<T>, config: &ListConfig) -> Result<()> {
        self.records(
            &page.data,
            config.field_order.as_deref(),
            View::Listing,
            Visibility::Masked,
        )
    }

    fn single<T: Record>(&mut self, item: Option<&T>, config: &SingleConfig) -> Result<()> {
        match item {
            Some(item) => self.records(
                std::slice::from_ref(item),
                config.field_order.as_deref(),
                View::Detail,
                Visibility::Masked,
            ),
            None => self.text(&options::empty_message(&config.empty_message, T::NOUN)),
        }
    }

    fn created<T: Record>(&mut self, item: &T, config: &CreateConfig) -> Result<()> {
        self.records(
            std::slice::from_ref(item),
            config.field_order.as_deref(),
            View::Detail,
            Visibility::Revealed,
        )
    }

    fn created_many<T: Record>(&mut self, items: &[T], config: &CreateConfig) -> Result<()> {
        self.records(
            items,
            config.field_order.as_deref(),
            View::Listing,
            Visibility::Revealed,
        )
    }

    fn updated<T: Record>(&mut self, item: &T, config: &UpdateConfig) -> Result<()> {
        self.records(
            std::slice::from_ref(item),
            config.field_order.as_deref(),
            View::Detail,
            Visibility::Masked,
        )
    }

    fn deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        self.status(&options::removed_message(
            &config.success_message,
            &config.item_name,
        ))
    }

    fn wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        self.status(&options::removed_message(
            &config.success_message,
            &config.item_name,
        ))
    }

    fn check<T: Record>(&mut self, _found: bool, items: &[T], config: &CheckConfig) -> Result<()> {
        let view = if items.len() == 1 {
            View::Detail
        } else {
            View::Listing
        };
        self.records(
            items,
            config.field_order.as_deref(),
            view,
            Visibility::Masked,
        )
    }

    fn stats<B: StatsRecord>(
        &mut self,
        stats: &StatsResponse<B>,
        config: &StatsConfig,
    ) -> Result<()> {
        let Some(sample) = stats.data.first() else {
            return Ok(());
        };
        let layout = stats_layout(sample, config.field_order.as_deref());
        if layout.is_empty() {
            return Ok(());
        }
        let wants_nested = layout.iter().any(|(_, s)| matches!(s, Source::Nested(_)));

        let columns = B::columns();
        let mut rows = Vec::new();
        for bucket in &stats.data {
            let nested_rows = bucket
                .sections()
                .into_iter()
                .next()
                .map(|s| s.rows)
                .unwrap_or_default();

            let cell = |source: Source, nested: Option<&Vec<fields::FieldValue>>| match source {
                Source::Bucket(i) => columns[i].value(bucket).machine(Visibility::Masked),
                Source::Nested(j) => nested
                    .and_then(|row| row.get(j))
                    .map(|v| v.machine(Visibility::Masked))
                    .unwrap_or_default(),
            };

            if wants_nested && !nested_rows.is_empty() {
                for nested in &nested_rows {
                    rows.push(layout.iter().map(|(_, s)| cell(*s, Some(nested))).collect());
                }
            } else {
                rows.push(layout.iter().map(|(_, s)| cell(*s, None)).collect());
            }
        }

        let header: Vec<&str> = layout.iter().map(|(label, _)| *label).collect();
        self.write(&header, &rows)
    }

    fn success(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn empty(&mut self, _message: &str) -> Result<()> {
        Ok(())
    }

    fn handle_error(&mut self, err: &anyhow::Error) -> Result<()> {
        self.text(&format!("Error: {err:#}"))?;
        Err(reported(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{self, capture, order};
    use sendctl_core::models::{BounceBucket, DeliveryTimeBucket, DomainDeliveryTime};

    #[test]
    fn test_bounce_stats_denormalized() {
        let (mut renderer, sink) = capture("csv");
        renderer
            .stats(&testing::bounce_stats(), &StatsConfig::default())
            .unwrap();
        let out = sink.text();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            "From,To,Total Bounces,Classification,Count,Percentage"
        );
        assert_eq!(lines.len(), 4);
        for line in &lines[1..] {
            assert!(line.starts_with("2024-01-02T15:04:05Z,2024-01-02T15:04:05Z,5,"));
        }
        assert_eq!(lines[1], "2024-01-02T15:04:05Z,2024-01-02T15:04:05Z,5,hard,3,60.0");
    }

    #[test]
    fn test_bucket_without_entries_yields_one_row() {
        let (mut renderer, sink) = capture("csv");
        let stats = StatsResponse {
            data: vec![BounceBucket {
                from_timestamp: testing::ts(),
                to_timestamp: testing::ts(),
                bounces: Vec::new(),
            }],
        };
        renderer.stats(&stats, &StatsConfig::default()).unwrap();
        let out = sink.text();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2024-01-02T15:04:05Z,2024-01-02T15:04:05Z,0,,,");
    }

    #[test]
    fn test_stats_order_mixes_bucket_and_nested() {
        let (mut renderer, sink) = capture("csv");
        let stats = StatsResponse {
            data: vec![DeliveryTimeBucket {
                from_timestamp: testing::ts(),
                to_timestamp: testing::ts(),
                delivered_count: 10,
                avg_delivery_time: 1.5,
                delivery_times: vec![DomainDeliveryTime {
                    recipient_domain: "gmail.com".to_string(),
                    delivered_count: 10,
                    avg_delivery_time: 1.5,
                }],
            }],
        };
        let config = StatsConfig {
            field_order: order(&["recipient_domain", "nope", "from_timestamp"]),
            ..Default::default()
        };
        renderer.stats(&stats, &config).unwrap();
        assert_eq!(
            sink.text(),
            "Recipient Domain,From\ngmail.com,2024-01-02T15:04:05Z\n"
        );
    }

    #[test]
    fn test_header_follows_order_and_drops_unknown() {
        let (mut renderer, sink) = capture("csv");
        let config = ListConfig {
            field_order: order(&["domain", "bogus", "id"]),
            ..Default::default()
        };
        renderer
            .list(&testing::page(vec![testing::domain()]), &config)
            .unwrap();
        assert_eq!(sink.text(), "Domain,ID\nexample.com,dom-1\n");
    }

    #[test]
    fn test_machine_forms() {
        let (mut renderer, sink) = capture("csv");
        let config = SingleConfig {
            field_order: order(&["dns_valid", "created_at", "return_path_subdomain"]),
            ..Default::default()
        };
        renderer.single(Some(&testing::domain()), &config).unwrap();
        assert_eq!(
            sink.text(),
            "DNS,Created,Return Path Subdomain\ntrue,2024-01-02T15:04:05Z,\n"
        );
    }

    #[test]
    fn test_delete_writes_status_row() {
        let (mut renderer, sink) = capture("csv");
        let config = DeleteConfig {
            success_message: "Route deleted.".to_string(),
            item_name: "route".to_string(),
        };
        renderer.deleted(true, &config).unwrap();
        assert_eq!(sink.text(), "success,message\ntrue,Route deleted.\n");
    }

    #[test]
    fn test_narrative_text_is_never_written() {
        let (mut renderer, sink) = capture("csv");
        renderer.success("done").unwrap();
        renderer.empty("nothing").unwrap();
        let config = CheckConfig {
            found_message: "found".to_string(),
            not_found_message: "not suppressed".to_string(),
            field_order: None,
        };
        renderer
            .check::<sendctl_core::models::Suppression>(false, &[], &config)
            .unwrap();
        assert!(sink.text().is_empty());
    }

    #[test]
    fn test_list_masks_secrets() {
        let (mut renderer, sink) = capture("csv");
        let config = ListConfig {
            field_order: order(&["label", "secret_key"]),
            ..Default::default()
        };
        renderer
            .list(&testing::page(vec![testing::api_key()]), &config)
            .unwrap();
        assert_eq!(sink.text(), "Label,Secret Key\nci,[HIDDEN]\n");
    }
}
