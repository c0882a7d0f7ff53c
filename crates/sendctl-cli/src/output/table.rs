// SPDX-License-Identifier: Apache-2.0

//! Table renderer: comfy-table listings and field/value tables.

use std::io::Write;

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Table};
use console::style;
use sendctl_core::models::{Page, Pagination, StatsResponse};
use sendctl_core::truncate;

use super::fields::{self, Record, Section, StatsRecord, View, Visibility};
use super::format::bar;
use super::options::{self, CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use super::options::{StatsConfig, UpdateConfig, WipeConfig};
use super::{OutputRenderer, reported};

const CHART_WIDTH: usize = 40;

#[derive(Clone, Copy)]
enum Tone {
    Success,
    Warning,
    Error,
    Heading,
}

/// Renders resources as bordered tables for people.
pub struct TableRenderer {
    out: Box<dyn Write>,
    color: bool,
}

impl TableRenderer {
    pub fn new(out: Box<dyn Write>, color: bool) -> Self {
        Self { out, color }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if self.color {
            table.enforce_styling();
        } else {
            table.force_no_tty();
        }
        table
    }

    fn header<'a>(labels: impl IntoIterator<Item = &'a str>) -> Vec<Cell> {
        labels
            .into_iter()
            .map(|label| Cell::new(label).add_attribute(Attribute::Bold))
            .collect()
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        let styled = match tone {
            Tone::Success => style(text).green(),
            Tone::Warning => style(text).yellow(),
            Tone::Error => style(text).red(),
            Tone::Heading => style(text).cyan().bold(),
        };
        styled.force_styling(self.color).to_string()
    }

    fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{text}")?;
        Ok(())
    }

    fn toned(&mut self, text: &str, tone: Tone) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let painted = self.paint(text, tone);
        self.line(&painted)
    }

    fn print(&mut self, table: &Table) -> Result<()> {
        writeln!(self.out, "{table}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// One row per item; cells truncated at each column's width.
    fn listing<T: Record>(
        &mut self,
        items: &[T],
        order: Option<&[String]>,
        visibility: Visibility,
    ) -> Result<()> {
        let all = T::columns();
        let columns = fields::resolve(&all, order, View::Listing);
        if items.is_empty() || columns.is_empty() {
            return Ok(());
        }

        let mut table = self.table();
        table.set_header(Self::header(columns.iter().map(|c| c.label)));
        for item in items {
            table.add_row(
                columns
                    .iter()
                    .map(|c| truncate(&c.value(item).human(visibility), c.width))
                    .collect::<Vec<_>>(),
            );
        }
        self.print(&table)
    }

    /// Field/value table for one item, followed by its nested sections.
    fn field_table<T: Record>(
        &mut self,
        item: &T,
        order: Option<&[String]>,
        visibility: Visibility,
    ) -> Result<()> {
        let all = T::columns();
        let columns = fields::resolve(&all, order, View::Detail);

        let mut has_secret = false;
        if !columns.is_empty() {
            let mut table = self.table();
            table.set_header(Self::header(["Field", "Value"]));
            for column in &columns {
                let value = column.value(item);
                has_secret |= value.is_secret();
                table.add_row(vec![column.label.to_string(), value.human(visibility)]);
            }
            self.print(&table)?;
        }

        self.sections(&fields::visible_sections(item, order))?;

        if visibility == Visibility::Revealed && has_secret {
            self.toned(
                "Store the secret above now; it will not be shown again.",
                Tone::Warning,
            )?;
        }
        Ok(())
    }

    fn sections(&mut self, sections: &[Section]) -> Result<()> {
        for section in sections {
            self.toned(&section.title, Tone::Heading)?;
            let mut table = self.table();
            table.set_header(Self::header(section.labels()));
            for row in &section.rows {
                table.add_row(
                    row.iter()
                        .map(|v| v.human(Visibility::Masked))
                        .collect::<Vec<_>>(),
                );
            }
            self.print(&table)?;
        }
        Ok(())
    }

    fn pagination(&mut self, pagination: &Pagination) -> Result<()> {
        if !pagination.has_more {
            return Ok(());
        }
        let text = match pagination.next_cursor.as_deref() {
            Some(cursor) if !cursor.is_empty() => {
                format!("More results available (next cursor: {cursor})")
            }
            _ => "More results available".to_string(),
        };
        self.line(&text)
    }

    fn chart<B: StatsRecord>(&mut self, stats: &StatsResponse<B>) -> Result<()> {
        let max = fields::chart_max(stats);
        self.toned(B::CHART_METRIC, Tone::Heading)?;
        for bucket in &stats.data {
            let bar = bar(bucket.chart_value(), max, CHART_WIDTH);
            let line = format!(
                "{}  {bar:<width$}  {}",
                bucket.period(),
                bucket.chart_label(),
                width = CHART_WIDTH
            );
            self.line(&line)?;
        }
        Ok(())
    }
}

impl OutputRenderer for TableRenderer {
    fn format_name(&self) -> &str {
        "table"
    }

    fn set_writer(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn list<T: Record>(&mut self, page: &Page<T>, config: &ListConfig) -> Result<()> {
        if page.is_empty() {
            self.line(&options::empty_message(&config.empty_message, T::NOUN))?;
            return self.finish();
        }
        self.toned(&config.success_message, Tone::Success)?;
        self.listing(&page.data, config.field_order.as_deref(), Visibility::Masked)?;
        if config.show_pagination {
            self.pagination(&page.pagination)?;
        }
        self.finish()
    }

    fn single<T: Record>(&mut self, item: Option<&T>, config: &SingleConfig) -> Result<()> {
        let Some(item) = item else {
            self.line(&options::empty_message(&config.empty_message, T::NOUN))?;
            return self.finish();
        };
        self.toned(&config.success_message, Tone::Success)?;
        self.field_table(item, config.field_order.as_deref(), Visibility::Masked)?;
        self.finish()
    }

    fn created<T: Record>(&mut self, item: &T, config: &CreateConfig) -> Result<()> {
        self.toned(&config.success_message, Tone::Success)?;
        self.field_table(item, config.field_order.as_deref(), Visibility::Revealed)?;
        self.finish()
    }

    fn created_many<T: Record>(&mut self, items: &[T], config: &CreateConfig) -> Result<()> {
        self.toned(&config.success_message, Tone::Success)?;
        self.listing(items, config.field_order.as_deref(), Visibility::Revealed)?;
        self.finish()
    }

    fn updated<T: Record>(&mut self, item: &T, config: &UpdateConfig) -> Result<()> {
        self.toned(&config.success_message, Tone::Success)?;
        self.field_table(item, config.field_order.as_deref(), Visibility::Masked)?;
        self.finish()
    }

    fn deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        let message = options::removed_message(&config.success_message, &config.item_name);
        self.toned(&message, Tone::Success)?;
        self.finish()
    }

    fn wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        let message = options::removed_message(&config.success_message, &config.item_name);
        self.toned(&message, Tone::Success)?;
        self.finish()
    }

    fn check<T: Record>(&mut self, found: bool, items: &[T], config: &CheckConfig) -> Result<()> {
        if found {
            self.toned(&config.found_message, Tone::Success)?;
        } else {
            self.toned(&config.not_found_message, Tone::Warning)?;
        }
        let order = config.field_order.as_deref();
        match items {
            [] => {}
            [item] => self.field_table(item, order, Visibility::Masked)?,
            _ => self.listing(items, order, Visibility::Masked)?,
        }
        self.finish()
    }

    fn stats<B: StatsRecord>(
        &mut self,
        stats: &StatsResponse<B>,
        config: &StatsConfig,
    ) -> Result<()> {
        self.toned(&config.title, Tone::Heading)?;
        if stats.data.is_empty() {
            self.line(&options::empty_message("", B::NOUN))?;
            return self.finish();
        }

        let order = config.field_order.as_deref();
        self.listing(&stats.data, order, Visibility::Masked)?;
        for bucket in &stats.data {
            let mut sections = fields::visible_sections(bucket, order);
            for section in &mut sections {
                section.title = format!("{} ({})", section.title, bucket.period());
            }
            self.sections(&sections)?;
        }
        if config.show_chart {
            self.chart(stats)?;
        }
        self.finish()
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.toned(message, Tone::Success)?;
        self.finish()
    }

    fn empty(&mut self, message: &str) -> Result<()> {
        self.line(message)?;
        self.finish()
    }

    fn handle_error(&mut self, err: &anyhow::Error) -> Result<()> {
        let text = format!("Error: {err:#}");
        self.toned(&text, Tone::Error)?;
        self.finish()?;
        Err(reported(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{self, capture, order};
    use sendctl_core::models::{Domain, SendResult};

    fn header_line(out: &str, needle: &str) -> String {
        out.lines()
            .find(|line| line.contains(needle))
            .unwrap_or_default()
            .to_string()
    }

    #[test]
    fn test_domain_with_explicit_order() {
        let (mut renderer, sink) = capture("table");
        let config = SingleConfig {
            field_order: order(&["domain", "dns_valid"]),
            ..Default::default()
        };
        renderer.single(Some(&testing::domain()), &config).unwrap();
        let out = sink.text();

        let domain_at = out.find("example.com").unwrap();
        let valid_at = out.find("Valid").unwrap();
        assert!(domain_at < valid_at);
        assert!(out.contains("Field"));
        assert!(!out.contains("dom-1"));
        assert!(!out.contains("DNS Records"));
    }

    #[test]
    fn test_listing_header_follows_order() {
        let (mut renderer, sink) = capture("table");
        let config = ListConfig {
            field_order: order(&["created_at", "bogus", "domain"]),
            ..Default::default()
        };
        renderer
            .list(&testing::page(vec![testing::domain()]), &config)
            .unwrap();
        let header = header_line(&sink.text(), "Created");
        let created = header.find("Created").unwrap();
        let domain = header.find("Domain").unwrap();
        assert!(created < domain);
        assert!(!header.contains("ID"));
    }

    #[test]
    fn test_listing_truncates_but_detail_does_not() {
        let mut webhook = testing::webhook();
        webhook.url = format!("https://hooks.example.com/{}", "x".repeat(60));

        let (mut renderer, sink) = capture("table");
        renderer
            .list(&testing::page(vec![webhook.clone()]), &ListConfig::default())
            .unwrap();
        assert!(!sink.text().contains(&webhook.url));
        assert!(sink.text().contains(&truncate(&webhook.url, 40)));

        let (mut renderer, sink) = capture("table");
        renderer
            .single(Some(&webhook), &SingleConfig::default())
            .unwrap();
        assert!(sink.text().contains(&webhook.url));
    }

    #[test]
    fn test_pagination_line() {
        let (mut renderer, sink) = capture("table");
        let config = ListConfig {
            show_pagination: true,
            ..Default::default()
        };
        let page = testing::page_with_more(vec![testing::domain()], "cur_2");
        renderer.list(&page, &config).unwrap();
        assert!(
            sink.text()
                .trim_end()
                .ends_with("More results available (next cursor: cur_2)")
        );
    }

    #[test]
    fn test_pagination_hidden_unless_requested() {
        let (mut renderer, sink) = capture("table");
        let page = testing::page_with_more(vec![testing::domain()], "cur_2");
        renderer.list(&page, &ListConfig::default()).unwrap();
        assert!(!sink.text().contains("More results"));
    }

    #[test]
    fn test_dns_records_secondary_table() {
        let (mut renderer, sink) = capture("table");
        renderer
            .single(Some(&testing::domain()), &SingleConfig::default())
            .unwrap();
        let out = sink.text();
        assert!(out.contains("DNS Records"));
        assert!(out.contains("_dmarc.example.com"));
    }

    #[test]
    fn test_empty_list_uses_configured_message_only() {
        let (mut renderer, sink) = capture("table");
        let config = ListConfig {
            empty_message: "No domains configured.".to_string(),
            success_message: "Domains:".to_string(),
            ..Default::default()
        };
        renderer.list(&Page::<Domain>::default(), &config).unwrap();
        assert_eq!(sink.text(), "No domains configured.\n");
    }

    #[test]
    fn test_created_many_without_items_has_no_header() {
        let (mut renderer, sink) = capture("table");
        let config = CreateConfig {
            success_message: "Message accepted for 0 recipient(s).".to_string(),
            ..Default::default()
        };
        renderer.created_many::<SendResult>(&[], &config).unwrap();
        assert_eq!(sink.text(), "Message accepted for 0 recipient(s).\n");
    }

    #[test]
    fn test_bounce_stats_with_chart() {
        let (mut renderer, sink) = capture("table");
        let config = StatsConfig {
            title: "Bounce statistics".to_string(),
            show_chart: true,
            field_order: None,
        };
        renderer.stats(&testing::bounce_stats(), &config).unwrap();
        let out = sink.text();
        assert!(out.starts_with("Bounce statistics\n"));
        assert!(out.contains("60.0%"));
        assert!(out.contains(&"#".repeat(CHART_WIDTH)));
    }

    #[test]
    fn test_error_line_and_failure() {
        let (mut renderer, sink) = capture("table");
        let err = anyhow::anyhow!("invalid domain 'exa mple'");
        assert!(renderer.handle_error(&err).is_err());
        assert_eq!(sink.text(), "Error: invalid domain 'exa mple'\n");
    }

    #[test]
    fn test_no_ansi_without_color() {
        let (mut renderer, sink) = capture("table");
        renderer
            .created(&testing::api_key(), &CreateConfig {
                success_message: "API key created.".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert!(!sink.text().contains('\u{1b}'));
        assert!(sink.text().contains("will not be shown again"));
    }

    #[test]
    fn test_color_adds_styling() {
        let sink = testing::Captured::default();
        let mut renderer = TableRenderer::new(Box::new(sink.clone()), true);
        renderer.success("Done.").unwrap();
        assert!(sink.text().contains('\u{1b}'));
    }
}
