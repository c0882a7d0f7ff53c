// SPDX-License-Identifier: Apache-2.0

//! Plain renderer: `Label: value` lines for grep and shell scripts.
//!
//! Shows the same fields and nesting as the table renderer, without borders,
//! alignment, truncation or color.

use std::io::Write;

use anyhow::Result;
use sendctl_core::models::{Page, StatsResponse};

use super::fields::{self, Record, Section, StatsRecord, View, Visibility};
use super::format::bar;
use super::options::{self, CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use super::options::{StatsConfig, UpdateConfig, WipeConfig};
use super::{OutputRenderer, reported};

const CHART_WIDTH: usize = 40;

/// Renders resources as unaligned `Label: value` lines.
pub struct PlainRenderer {
    out: Box<dyn Write>,
}

impl PlainRenderer {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    fn line(&mut self, text: &str) -> Result<()> {
        if !text.is_empty() {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn record<T: Record>(
        &mut self,
        item: &T,
        order: Option<&[String]>,
        view: View,
        visibility: Visibility,
    ) -> Result<bool> {
        let all = T::columns();
        let mut has_secret = false;
        for column in fields::resolve(&all, order, view) {
            let value = column.value(item);
            has_secret |= value.is_secret();
            writeln!(self.out, "{}: {}", column.label, value.human(visibility))?;
        }
        if view == View::Detail {
            self.sections(&fields::visible_sections(item, order))?;
        }
        Ok(has_secret)
    }

    fn records<T: Record>(
        &mut self,
        items: &[T],
        order: Option<&[String]>,
        view: View,
        visibility: Visibility,
    ) -> Result<()> {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                writeln!(self.out)?;
            }
            self.record(item, order, view, visibility)?;
        }
        Ok(())
    }

    fn sections(&mut self, sections: &[Section]) -> Result<()> {
        for section in sections {
            writeln!(self.out, "{}:", section.title)?;
            for row in &section.rows {
                let cells: Vec<String> = section
                    .columns
                    .iter()
                    .zip(row)
                    .map(|((_, label), value)| {
                        format!("{label}: {}", value.human(Visibility::Masked))
                    })
                    .collect();
                writeln!(self.out, "  - {}", cells.join(", "))?;
            }
        }
        Ok(())
    }

    fn detail<T: Record>(
        &mut self,
        item: &T,
        order: Option<&[String]>,
        visibility: Visibility,
    ) -> Result<()> {
        let has_secret = self.record(item, order, View::Detail, visibility)?;
        if visibility == Visibility::Revealed && has_secret {
            self.line("Note: store the secret now; it will not be shown again.")?;
        }
        Ok(())
    }
}

impl OutputRenderer for PlainRenderer {
    fn format_name(&self) -> &str {
        "plain"
    }

    fn set_writer(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn list<T: Record>(&mut self, page: &Page<T>, config: &ListConfig) -> Result<()> {
        if page.is_empty() {
            self.line(&options::empty_message(&config.empty_message, T::NOUN))?;
            return self.finish();
        }
        self.line(&config.success_message)?;
        self.records(
            &page.data,
            config.field_order.as_deref(),
            View::Listing,
            Visibility::Masked,
        )?;
        if config.show_pagination && page.pagination.has_more {
            writeln!(self.out)?;
            match page.pagination.next_cursor.as_deref() {
                Some(cursor) if !cursor.is_empty() => {
                    writeln!(self.out, "More results available (next cursor: {cursor})")?;
                }
                _ => writeln!(self.out, "More results available")?,
            }
        }
        self.finish()
    }

    fn single<T: Record>(&mut self, item: Option<&T>, config: &SingleConfig) -> Result<()> {
        let Some(item) = item else {
            self.line(&options::empty_message(&config.empty_message, T::NOUN))?;
            return self.finish();
        };
        self.line(&config.success_message)?;
        self.detail(item, config.field_order.as_deref(), Visibility::Masked)?;
        self.finish()
    }

    fn created<T: Record>(&mut self, item: &T, config: &CreateConfig) -> Result<()> {
        self.line(&config.success_message)?;
        self.detail(item, config.field_order.as_deref(), Visibility::Revealed)?;
        self.finish()
    }

    fn created_many<T: Record>(&mut self, items: &[T], config: &CreateConfig) -> Result<()> {
        self.line(&config.success_message)?;
        self.records(
            items,
            config.field_order.as_deref(),
            View::Listing,
            Visibility::Revealed,
        )?;
        self.finish()
    }

    fn updated<T: Record>(&mut self, item: &T, config: &UpdateConfig) -> Result<()> {
        self.line(&config.success_message)?;
        self.detail(item, config.field_order.as_deref(), Visibility::Masked)?;
        self.finish()
    }

    fn deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        self.line(&options::removed_message(
            &config.success_message,
            &config.item_name,
        ))?;
        self.finish()
    }

    fn wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        self.line(&options::removed_message(
            &config.success_message,
            &config.item_name,
        ))?;
        self.finish()
    }

    fn check<T: Record>(&mut self, found: bool, items: &[T], config: &CheckConfig) -> Result<()> {
        if found {
            self.line(&config.found_message)?;
        } else {
            self.line(&config.not_found_message)?;
        }
        let order = config.field_order.as_deref();
        match items {
            [] => {}
            [item] => self.detail(item, order, Visibility::Masked)?,
            _ => self.records(items, order, View::Listing, Visibility::Masked)?,
        }
        self.finish()
    }

    fn stats<B: StatsRecord>(
        &mut self,
        stats: &StatsResponse<B>,
        config: &StatsConfig,
    ) -> Result<()> {
        self.line(&config.title)?;
        if stats.data.is_empty() {
            self.line(&options::empty_message("", B::NOUN))?;
            return self.finish();
        }

        let order = config.field_order.as_deref();
        self.records(&stats.data, order, View::Detail, Visibility::Masked)?;

        if config.show_chart {
            let max = fields::chart_max(stats);
            writeln!(self.out)?;
            writeln!(self.out, "{}:", B::CHART_METRIC)?;
            for bucket in &stats.data {
                writeln!(
                    self.out,
                    "{}: {} {}",
                    bucket.period(),
                    bar(bucket.chart_value(), max, CHART_WIDTH),
                    bucket.chart_label()
                )?;
            }
        }
        self.finish()
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.line(message)?;
        self.finish()
    }

    fn empty(&mut self, message: &str) -> Result<()> {
        self.line(message)?;
        self.finish()
    }

    fn handle_error(&mut self, err: &anyhow::Error) -> Result<()> {
        writeln!(self.out, "Error: {err:#}")?;
        self.finish()?;
        Err(reported(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{self, capture, order};

    #[test]
    fn test_domain_with_explicit_order() {
        let (mut renderer, sink) = capture("plain");
        let config = SingleConfig {
            field_order: order(&["domain", "dns_valid"]),
            ..Default::default()
        };
        renderer.single(Some(&testing::domain()), &config).unwrap();
        assert_eq!(sink.text(), "Domain: example.com\nDNS: Valid\n");
    }

    #[test]
    fn test_records_separated_by_blank_line() {
        let (mut renderer, sink) = capture("plain");
        let mut second = testing::domain();
        second.domain = "example.org".to_string();
        let config = ListConfig {
            field_order: order(&["domain"]),
            ..Default::default()
        };
        renderer
            .list(&testing::page(vec![testing::domain(), second]), &config)
            .unwrap();
        assert_eq!(sink.text(), "Domain: example.com\n\nDomain: example.org\n");
    }

    #[test]
    fn test_sections_are_indented() {
        let (mut renderer, sink) = capture("plain");
        let config = SingleConfig {
            field_order: order(&["domain", "dns_records"]),
            ..Default::default()
        };
        renderer.single(Some(&testing::domain()), &config).unwrap();
        let out = sink.text();
        assert!(out.contains("DNS Records:\n  - Type: TXT, Host: _dmarc.example.com"));
    }

    #[test]
    fn test_no_truncation() {
        let mut webhook = testing::webhook();
        webhook.url = format!("https://hooks.example.com/{}", "y".repeat(80));
        let (mut renderer, sink) = capture("plain");
        renderer
            .list(&testing::page(vec![webhook.clone()]), &ListConfig::default())
            .unwrap();
        assert!(sink.text().contains(&format!("URL: {}", webhook.url)));
    }

    #[test]
    fn test_webhook_secret_masked() {
        let (mut renderer, sink) = capture("plain");
        renderer
            .single(Some(&testing::webhook()), &SingleConfig::default())
            .unwrap();
        assert!(sink.text().contains("Signing Secret: [HIDDEN]"));
    }

    #[test]
    fn test_error_line() {
        let (mut renderer, sink) = capture("plain");
        assert!(
            renderer
                .handle_error(&anyhow::anyhow!("operation cancelled"))
                .is_err()
        );
        assert_eq!(sink.text(), "Error: operation cancelled\n");
    }
}
