// SPDX-License-Identifier: Apache-2.0

//! Delivery statistics commands.

use anyhow::{Context, Result};
use sendctl_core::api::StatsQuery;
use sendctl_core::{Client, SendctlError, parse_date, validate};
use tracing::debug;

use crate::cli::{CommandContext, StatsArgs, StatsCommand};
use crate::output::OutputRenderer;
use crate::output::options::StatsConfig;

/// Bucket sizes accepted by `--group-by`.
const GROUPINGS: [&str; 4] = ["hour", "day", "week", "month"];

/// Run a `stats` subcommand.
pub fn run(
    cmd: StatsCommand,
    ctx: &CommandContext,
    client: &Client,
    out: &mut impl OutputRenderer,
) -> Result<()> {
    match cmd {
        StatsCommand::Deliverability(args) => {
            let query = stats_query(&args)?;
            debug!(?query, "fetching deliverability statistics");
            let stats = client
                .deliverability_stats(&query)
                .context("Failed to fetch deliverability statistics")?;
            out.render_deliverability_stats(&stats, &config(ctx, &args, "Deliverability"))
        }
        StatsCommand::Bounce(args) => {
            let query = stats_query(&args)?;
            debug!(?query, "fetching bounce statistics");
            let stats = client
                .bounce_stats(&query)
                .context("Failed to fetch bounce statistics")?;
            out.render_bounce_stats(&stats, &config(ctx, &args, "Bounces"))
        }
        StatsCommand::DeliveryTime(args) => {
            let query = stats_query(&args)?;
            debug!(?query, "fetching delivery time statistics");
            let stats = client
                .delivery_time_stats(&query)
                .context("Failed to fetch delivery time statistics")?;
            out.render_delivery_time_stats(&stats, &config(ctx, &args, "Delivery Time"))
        }
    }
}

/// Parses and checks the window and filters.
fn stats_query(args: &StatsArgs) -> Result<StatsQuery, SendctlError> {
    let from = args.from.as_deref().map(parse_date).transpose()?;
    let to = args.to.as_deref().map(parse_date).transpose()?;
    validate::date_range(from, to)?;

    if let Some(domain) = &args.domain {
        validate::domain(domain)?;
    }

    let group_by = args.group_by.as_deref().map(str::to_lowercase);
    if let Some(group) = &group_by
        && !GROUPINGS.contains(&group.as_str())
    {
        return Err(SendctlError::Validation {
            message: format!("Invalid grouping: {group}"),
            details: Some(format!("expected one of {}", GROUPINGS.join(", "))),
        });
    }

    Ok(StatsQuery {
        from,
        to,
        sender_domain: args.domain.clone(),
        group_by,
    })
}

fn config(ctx: &CommandContext, args: &StatsArgs, title: &str) -> StatsConfig {
    let title = match &args.domain {
        Some(domain) => format!("{title} for {domain}"),
        None => title.to_string(),
    };
    StatsConfig {
        title,
        show_chart: args.chart,
        field_order: ctx.fields.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{client, ctx};
    use crate::output::testing::capture;

    #[test]
    fn test_reversed_window_is_rejected() {
        let args = StatsArgs {
            from: Some("2024-03-02".to_string()),
            to: Some("2024-03-01".to_string()),
            ..StatsArgs::default()
        };
        let err = stats_query(&args).unwrap_err();
        assert!(err.to_string().contains("--from"));
    }

    #[test]
    fn test_grouping_is_normalized() {
        let args = StatsArgs {
            group_by: Some("Day".to_string()),
            ..StatsArgs::default()
        };
        assert_eq!(stats_query(&args).unwrap().group_by.as_deref(), Some("day"));

        let args = StatsArgs {
            group_by: Some("fortnight".to_string()),
            ..StatsArgs::default()
        };
        assert!(stats_query(&args).is_err());
    }

    #[test]
    fn test_title_names_domain() {
        let args = StatsArgs {
            domain: Some("example.com".to_string()),
            ..StatsArgs::default()
        };
        assert_eq!(config(&ctx(), &args, "Bounces").title, "Bounces for example.com");
    }

    #[test]
    fn test_bounce_stats_as_csv() {
        let document = r#"{"data": [{
            "from_timestamp": "2024-01-01T00:00:00Z",
            "to_timestamp": "2024-01-02T00:00:00Z",
            "bounces": [
                {"classification": "hard", "count": 3},
                {"classification": "soft", "count": 1}
            ]
        }]}"#;
        let (mut out, sink) = capture("csv");
        run(
            StatsCommand::Bounce(StatsArgs::default()),
            &ctx(),
            &client(document),
            &mut out,
        )
        .unwrap();
        let text = sink.text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("hard,3,75.0"));
        assert!(lines[2].contains("soft,1,25.0"));
    }
}
