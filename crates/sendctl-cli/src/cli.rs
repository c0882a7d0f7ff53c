// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for sendctl.
//!
//! Uses clap's derive API with noun-verb subcommands
//! (`sendctl domains list`, `sendctl apikeys create`, ...).

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use sendctl_core::AppConfig;
use sendctl_core::api::ListQuery;

/// Extended help text for the completion subcommand.
const COMPLETION_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc:
      eval "$(sendctl completion bash)"

  zsh
    sendctl completion zsh > ~/.zsh/completions/_sendctl

  fish
    sendctl completion fish > ~/.config/fish/completions/sendctl.fish
"#;

/// Per-invocation settings shared by every command handler.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Field order from `--fields`.
    pub fields: Option<Vec<String>>,
    /// Skip confirmation prompts.
    pub assume_yes: bool,
    /// Ask before destructive operations.
    pub confirm_destructive: bool,
    /// Whether stdin is a terminal a prompt can read from.
    pub interactive: bool,
    /// Page size used when `--limit` is not given.
    pub page_limit: u32,
    /// Profile reported by `auth status`.
    pub profile: String,
}

impl CommandContext {
    /// Creates a `CommandContext` from CLI arguments and configuration.
    pub fn from_cli(cli: &Cli, config: &AppConfig) -> Self {
        Self {
            fields: cli.field_order(),
            assume_yes: cli.yes,
            confirm_destructive: config.defaults.confirm_destructive,
            interactive: std::io::stdin().is_terminal(),
            page_limit: config.defaults.page_limit,
            profile: config.api.profile.clone(),
        }
    }
}

/// sendctl - command-line client for a transactional email service.
///
/// Manage sending domains, messages, webhooks, inbound routes,
/// suppressions, SMTP credentials and API keys, and read delivery
/// statistics, in table, plain, JSON or CSV form.
#[derive(Parser)]
#[command(name = "sendctl")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format: table, plain, json or csv (default from config, else table)
    #[arg(long, short = 'o', global = true, value_name = "FORMAT")]
    pub output: Option<String>,

    /// Comma-separated fields to show, in order (e.g. domain,dns_valid)
    #[arg(long, global = true, value_delimiter = ',', value_name = "FIELDS")]
    pub fields: Option<Vec<String>>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Only log errors
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (error hints and debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Recorded API response to replay; `-` reads standard input
    #[arg(long, global = true, value_name = "PATH")]
    pub response_file: Option<PathBuf>,

    /// Answer yes to confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// `--fields` with blank entries removed; `None` when nothing usable was given.
    pub fn field_order(&self) -> Option<Vec<String>> {
        let fields: Vec<String> = self
            .fields
            .as_ref()?
            .iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        (!fields.is_empty()).then_some(fields)
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Manage sending domains
    #[command(subcommand)]
    Domains(DomainsCommand),

    /// List, inspect, send and cancel messages
    #[command(subcommand)]
    Messages(MessagesCommand),

    /// Manage event webhooks
    #[command(subcommand)]
    Webhooks(WebhooksCommand),

    /// Manage inbound routes
    #[command(subcommand)]
    Routes(RoutesCommand),

    /// Manage the suppression list
    #[command(subcommand)]
    Suppressions(SuppressionsCommand),

    /// Manage SMTP credentials
    #[command(subcommand)]
    Smtp(SmtpCommand),

    /// Manage API keys
    #[command(subcommand)]
    Apikeys(ApiKeysCommand),

    /// Show delivery statistics
    #[command(subcommand)]
    Stats(StatsCommand),

    /// Show authentication status
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Generate a shell completion script
    #[command(after_long_help = COMPLETION_HELP)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Pagination flags shared by list subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Maximum number of results (default from config)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Cursor from a previous page
    #[arg(long)]
    pub cursor: Option<String>,
}

impl PageArgs {
    /// Builds the list query, falling back to the configured page size.
    pub fn query(&self, default_limit: u32) -> ListQuery {
        ListQuery {
            limit: Some(self.limit.unwrap_or(default_limit)),
            cursor: self.cursor.clone(),
        }
    }
}

/// Domain subcommands
#[derive(Subcommand)]
pub enum DomainsCommand {
    /// List sending domains
    List(PageArgs),

    /// Show one domain with its DNS records
    Get {
        /// Domain name
        domain: String,
    },

    /// Register a sending domain
    Create {
        /// Domain name
        domain: String,
    },

    /// Remove a sending domain
    Delete {
        /// Domain name
        domain: String,
    },

    /// Re-check DNS records for a domain
    Verify {
        /// Domain name
        domain: String,
    },
}

/// Message subcommands
#[derive(Subcommand)]
pub enum MessagesCommand {
    /// List messages
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only messages from this sender
        #[arg(long)]
        sender: Option<String>,

        /// Only messages to this recipient
        #[arg(long)]
        recipient: Option<String>,

        /// Only messages with this status
        #[arg(long)]
        status: Option<String>,
    },

    /// Show one message
    Get {
        /// Message ID
        id: String,
    },

    /// Send a message
    Send {
        /// Sender address
        #[arg(long)]
        from: String,

        /// Recipient addresses (comma-separated)
        #[arg(long, value_delimiter = ',', required = true)]
        to: Vec<String>,

        /// Subject line
        #[arg(long)]
        subject: String,

        /// Plain-text body
        #[arg(long)]
        text: Option<String>,

        /// HTML body
        #[arg(long)]
        html: Option<String>,

        /// Tags (comma-separated)
        #[arg(long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// Cancel a scheduled message
    Cancel {
        /// Message ID
        id: String,
    },
}

/// Webhook subcommands
#[derive(Subcommand)]
pub enum WebhooksCommand {
    /// List webhooks
    List(PageArgs),

    /// Show one webhook
    Get {
        /// Webhook ID
        id: String,
    },

    /// Create a webhook
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Endpoint URL (http or https)
        #[arg(long)]
        url: String,

        /// Events to deliver (comma-separated, e.g. delivered,bounced)
        #[arg(long)]
        events: String,

        /// Limit to these domains (comma-separated)
        #[arg(long, value_delimiter = ',')]
        domains: Option<Vec<String>>,
    },

    /// Update a webhook
    Update {
        /// Webhook ID
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New endpoint URL
        #[arg(long)]
        url: Option<String>,

        /// Replace the subscribed events (comma-separated)
        #[arg(long)]
        events: Option<String>,

        /// Enable the webhook
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Disable the webhook
        #[arg(long)]
        disable: bool,
    },

    /// Delete a webhook
    Delete {
        /// Webhook ID
        id: String,
    },
}

/// Route subcommands
#[derive(Subcommand)]
pub enum RoutesCommand {
    /// List inbound routes
    List(PageArgs),

    /// Show one route
    Get {
        /// Route ID
        id: String,
    },

    /// Create an inbound route
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Endpoint URL receiving inbound mail
        #[arg(long)]
        url: String,

        /// Recipient address the route matches
        #[arg(long)]
        recipient: String,

        /// Include attachments in the payload
        #[arg(long)]
        attachments: bool,

        /// Include raw headers in the payload
        #[arg(long)]
        headers: bool,

        /// Strip quoted replies from the body
        #[arg(long)]
        strip_replies: bool,
    },

    /// Update a route
    Update {
        /// Route ID
        id: String,

        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New endpoint URL
        #[arg(long)]
        url: Option<String>,

        /// New recipient address
        #[arg(long)]
        recipient: Option<String>,

        /// Enable the route
        #[arg(long, conflicts_with = "disable")]
        enable: bool,

        /// Disable the route
        #[arg(long)]
        disable: bool,
    },

    /// Delete a route
    Delete {
        /// Route ID
        id: String,
    },
}

/// Suppression subcommands
#[derive(Subcommand)]
pub enum SuppressionsCommand {
    /// List suppressed addresses
    List {
        #[command(flatten)]
        page: PageArgs,

        /// Only suppressions for this domain
        #[arg(long)]
        domain: Option<String>,
    },

    /// Check whether an address is suppressed
    Check {
        /// Email address
        email: String,
    },

    /// Suppress an address
    Create {
        /// Email address
        email: String,

        /// Limit the suppression to one domain
        #[arg(long)]
        domain: Option<String>,

        /// Reason recorded with the suppression
        #[arg(long)]
        reason: Option<String>,

        /// Expiry date (YYYY-MM-DD or RFC 3339)
        #[arg(long)]
        expires_at: Option<String>,
    },

    /// Remove a suppression
    Delete {
        /// Email address
        email: String,

        /// Domain the suppression is limited to
        #[arg(long)]
        domain: Option<String>,
    },

    /// Remove every suppression
    Wipe {
        /// Only suppressions for this domain
        #[arg(long)]
        domain: Option<String>,
    },
}

/// SMTP credential subcommands
#[derive(Subcommand)]
pub enum SmtpCommand {
    /// List SMTP credentials
    List(PageArgs),

    /// Show one SMTP credential
    Get {
        /// Credential ID
        id: String,
    },

    /// Create an SMTP credential
    Create {
        /// Display name
        #[arg(long)]
        name: String,

        /// Credential scope: smtp or smtp_domain
        #[arg(long, default_value = "smtp")]
        scope: String,

        /// Domains for smtp_domain scope (comma-separated)
        #[arg(long, value_delimiter = ',')]
        domains: Option<Vec<String>>,

        /// Accept mail without delivering it
        #[arg(long)]
        sandbox: bool,
    },

    /// Delete an SMTP credential
    Delete {
        /// Credential ID
        id: String,
    },
}

/// API key subcommands
#[derive(Subcommand)]
pub enum ApiKeysCommand {
    /// List API keys
    List(PageArgs),

    /// Show one API key
    Get {
        /// API key ID
        id: String,
    },

    /// Create an API key
    Create {
        /// Display label
        #[arg(long)]
        label: String,

        /// Scopes (comma-separated, e.g. messages:send:all,domains:read)
        #[arg(long)]
        scopes: String,
    },

    /// Update an API key
    Update {
        /// API key ID
        id: String,

        /// New display label
        #[arg(long)]
        label: Option<String>,

        /// Replace the scopes (comma-separated)
        #[arg(long)]
        scopes: Option<String>,
    },

    /// Delete an API key
    Delete {
        /// API key ID
        id: String,
    },
}

/// Flags shared by statistics subcommands.
#[derive(Args, Debug, Clone, Default)]
pub struct StatsArgs {
    /// Start of the window (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub from: Option<String>,

    /// End of the window (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    pub to: Option<String>,

    /// Only mail sent from this domain
    #[arg(long)]
    pub domain: Option<String>,

    /// Bucket size: hour, day, week or month
    #[arg(long)]
    pub group_by: Option<String>,

    /// Draw a bar chart of the headline metric
    #[arg(long)]
    pub chart: bool,
}

/// Statistics subcommands
#[derive(Subcommand)]
pub enum StatsCommand {
    /// Delivered, deferred, bounced and engagement counts
    Deliverability(StatsArgs),

    /// Bounces by classification
    Bounce(StatsArgs),

    /// Average delivery time, overall and per recipient domain
    DeliveryTime(StatsArgs),
}

/// Authentication subcommands
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Show the active profile and whether its key is valid
    Status,
}
