// SPDX-License-Identifier: Apache-2.0

//! Output rendering for CLI commands.
//!
//! Every command hands its typed result to one [`OutputRenderer`] method.
//! The renderer is chosen once per invocation by [`renderer_for`] and owns
//! the cross-format rules: which fields show, how secrets are masked, how
//! empty results and pagination read, and whether an error fails the
//! process.

use std::io::Write;

use anyhow::Result;
use sendctl_core::SendctlError;
use sendctl_core::models::{
    ApiKey, AuthStatus, BounceBucket, DeliverabilityBucket, DeliveryTimeBucket, Domain, Message,
    Page, Route, SendResponse, SmtpCredential, StatsResponse, Suppression, Webhook,
};

mod csv;
pub mod fields;
pub mod format;
mod json;
pub mod options;
mod plain;
mod records;
mod table;
#[cfg(test)]
pub(crate) mod testing;
mod unsupported;

pub use self::csv::CsvRenderer;
pub use fields::{Record, StatsRecord};
pub use json::JsonRenderer;
pub use options::{
    CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig, StatsConfig, UpdateConfig,
    WipeConfig,
};
pub use plain::PlainRenderer;
pub use table::TableRenderer;
pub use unsupported::UnsupportedRenderer;

/// Format names accepted by `--output`.
pub const FORMATS: [&str; 4] = ["json", "table", "plain", "csv"];

/// The rendering contract shared by every output format.
///
/// Implementors provide the generic primitives. The `render_*` methods map
/// each resource and operation onto them so call sites never look at the
/// format.
pub trait OutputRenderer {
    /// Format identifier: `json`, `table`, `plain`, `csv`, or the rejected name.
    fn format_name(&self) -> &str;

    /// Rebinds the output sink.
    fn set_writer(&mut self, writer: Box<dyn Write>);

    /// Multi-row listing with optional pagination summary.
    fn list<T: Record>(&mut self, page: &Page<T>, config: &ListConfig) -> Result<()>;

    /// One resource, or the configured empty message when absent.
    fn single<T: Record>(&mut self, item: Option<&T>, config: &SingleConfig) -> Result<()>;

    /// A freshly created resource, secrets included.
    fn created<T: Record>(&mut self, item: &T, config: &CreateConfig) -> Result<()>;

    /// Several results of one create call, secrets included.
    fn created_many<T: Record>(&mut self, items: &[T], config: &CreateConfig) -> Result<()>;

    /// A modified resource.
    fn updated<T: Record>(&mut self, item: &T, config: &UpdateConfig) -> Result<()>;

    /// Outcome of removing one resource. Fails when `success` is false.
    fn deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()>;

    /// Outcome of a bulk removal. Fails when `success` is false.
    fn wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()>;

    /// Yes/no lookup with the matching records.
    fn check<T: Record>(&mut self, found: bool, items: &[T], config: &CheckConfig) -> Result<()>;

    /// Time-bucketed statistics.
    fn stats<B: StatsRecord>(&mut self, stats: &StatsResponse<B>, config: &StatsConfig)
    -> Result<()>;

    /// Narrative success line. Silent in machine formats.
    fn success(&mut self, message: &str) -> Result<()>;

    /// Narrative empty-result line.
    fn empty(&mut self, message: &str) -> Result<()>;

    /// Renders `err` and returns the process verdict.
    fn handle_error(&mut self, err: &anyhow::Error) -> Result<()>;

    // ------------------------------------------------------------------------
    // Domains
    // ------------------------------------------------------------------------

    fn render_domain_list(&mut self, page: &Page<Domain>, config: &ListConfig) -> Result<()> {
        self.list(page, config)
    }

    fn render_domain(&mut self, domain: Option<&Domain>, config: &SingleConfig) -> Result<()> {
        self.single(domain, config)
    }

    fn render_domain_created(&mut self, domain: &Domain, config: &CreateConfig) -> Result<()> {
        self.created(domain, config)
    }

    fn render_domain_deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    /// Found means every required DNS record has propagated.
    fn render_domain_verify(&mut self, domain: &Domain, config: &CheckConfig) -> Result<()> {
        self.check(domain.dns_valid, std::slice::from_ref(domain), config)
    }

    // ------------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------------

    fn render_message_list(&mut self, page: &Page<Message>, config: &ListConfig) -> Result<()> {
        self.list(page, config)
    }

    fn render_message(&mut self, message: Option<&Message>, config: &SingleConfig) -> Result<()> {
        self.single(message, config)
    }

    fn render_message_send(
        &mut self,
        response: &SendResponse,
        config: &CreateConfig,
    ) -> Result<()> {
        self.created_many(&response.data, config)
    }

    fn render_message_cancelled(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    // ------------------------------------------------------------------------
    // Webhooks
    // ------------------------------------------------------------------------

    fn render_webhook_list(&mut self, page: &Page<Webhook>, config: &ListConfig) -> Result<()> {
        self.list(page, config)
    }

    fn render_webhook(&mut self, webhook: Option<&Webhook>, config: &SingleConfig) -> Result<()> {
        self.single(webhook, config)
    }

    fn render_webhook_created(&mut self, webhook: &Webhook, config: &CreateConfig) -> Result<()> {
        self.created(webhook, config)
    }

    fn render_webhook_updated(&mut self, webhook: &Webhook, config: &UpdateConfig) -> Result<()> {
        self.updated(webhook, config)
    }

    fn render_webhook_deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    // ------------------------------------------------------------------------
    // Routes
    // ------------------------------------------------------------------------

    fn render_route_list(&mut self, page: &Page<Route>, config: &ListConfig) -> Result<()> {
        self.list(page, config)
    }

    fn render_route(&mut self, route: Option<&Route>, config: &SingleConfig) -> Result<()> {
        self.single(route, config)
    }

    fn render_route_created(&mut self, route: &Route, config: &CreateConfig) -> Result<()> {
        self.created(route, config)
    }

    fn render_route_updated(&mut self, route: &Route, config: &UpdateConfig) -> Result<()> {
        self.updated(route, config)
    }

    fn render_route_deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    // ------------------------------------------------------------------------
    // Suppressions
    // ------------------------------------------------------------------------

    fn render_suppression_list(
        &mut self,
        page: &Page<Suppression>,
        config: &ListConfig,
    ) -> Result<()> {
        self.list(page, config)
    }

    /// Found means at least one suppression matched.
    fn render_suppression_check(
        &mut self,
        matches: &Page<Suppression>,
        config: &CheckConfig,
    ) -> Result<()> {
        self.check(!matches.is_empty(), &matches.data, config)
    }

    fn render_suppression_created(
        &mut self,
        suppression: &Suppression,
        config: &CreateConfig,
    ) -> Result<()> {
        self.created(suppression, config)
    }

    fn render_suppression_deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    fn render_suppressions_wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()> {
        self.wiped(success, config)
    }

    // ------------------------------------------------------------------------
    // SMTP credentials
    // ------------------------------------------------------------------------

    fn render_smtp_list(&mut self, page: &Page<SmtpCredential>, config: &ListConfig) -> Result<()> {
        self.list(page, config)
    }

    fn render_smtp(
        &mut self,
        credential: Option<&SmtpCredential>,
        config: &SingleConfig,
    ) -> Result<()> {
        self.single(credential, config)
    }

    fn render_smtp_created(
        &mut self,
        credential: &SmtpCredential,
        config: &CreateConfig,
    ) -> Result<()> {
        self.created(credential, config)
    }

    fn render_smtp_deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    // ------------------------------------------------------------------------
    // API keys
    // ------------------------------------------------------------------------

    fn render_api_key_list(&mut self, page: &Page<ApiKey>, config: &ListConfig) -> Result<()> {
        self.list(page, config)
    }

    fn render_api_key(&mut self, key: Option<&ApiKey>, config: &SingleConfig) -> Result<()> {
        self.single(key, config)
    }

    fn render_api_key_created(&mut self, key: &ApiKey, config: &CreateConfig) -> Result<()> {
        self.created(key, config)
    }

    fn render_api_key_updated(&mut self, key: &ApiKey, config: &UpdateConfig) -> Result<()> {
        self.updated(key, config)
    }

    fn render_api_key_deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        self.deleted(success, config)
    }

    // ------------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------------

    fn render_deliverability_stats(
        &mut self,
        stats: &StatsResponse<DeliverabilityBucket>,
        config: &StatsConfig,
    ) -> Result<()> {
        self.stats(stats, config)
    }

    fn render_bounce_stats(
        &mut self,
        stats: &StatsResponse<BounceBucket>,
        config: &StatsConfig,
    ) -> Result<()> {
        self.stats(stats, config)
    }

    fn render_delivery_time_stats(
        &mut self,
        stats: &StatsResponse<DeliveryTimeBucket>,
        config: &StatsConfig,
    ) -> Result<()> {
        self.stats(stats, config)
    }

    // ------------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------------

    fn render_auth_status(&mut self, status: &AuthStatus, config: &SingleConfig) -> Result<()> {
        self.single(Some(status), config)
    }
}

/// One renderer per known format plus the fallback for anything else.
pub enum Renderer {
    Json(JsonRenderer),
    Table(TableRenderer),
    Plain(PlainRenderer),
    Csv(CsvRenderer),
    Unsupported(UnsupportedRenderer),
}

macro_rules! each_renderer {
    ($renderer:expr, $inner:ident => $call:expr) => {
        match $renderer {
            Renderer::Json($inner) => $call,
            Renderer::Table($inner) => $call,
            Renderer::Plain($inner) => $call,
            Renderer::Csv($inner) => $call,
            Renderer::Unsupported($inner) => $call,
        }
    };
}

impl OutputRenderer for Renderer {
    fn format_name(&self) -> &str {
        each_renderer!(self, r => r.format_name())
    }

    fn set_writer(&mut self, writer: Box<dyn Write>) {
        each_renderer!(self, r => r.set_writer(writer));
    }

    fn list<T: Record>(&mut self, page: &Page<T>, config: &ListConfig) -> Result<()> {
        each_renderer!(self, r => r.list(page, config))
    }

    fn single<T: Record>(&mut self, item: Option<&T>, config: &SingleConfig) -> Result<()> {
        each_renderer!(self, r => r.single(item, config))
    }

    fn created<T: Record>(&mut self, item: &T, config: &CreateConfig) -> Result<()> {
        each_renderer!(self, r => r.created(item, config))
    }

    fn created_many<T: Record>(&mut self, items: &[T], config: &CreateConfig) -> Result<()> {
        each_renderer!(self, r => r.created_many(items, config))
    }

    fn updated<T: Record>(&mut self, item: &T, config: &UpdateConfig) -> Result<()> {
        each_renderer!(self, r => r.updated(item, config))
    }

    fn deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        each_renderer!(self, r => r.deleted(success, config))
    }

    fn wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()> {
        each_renderer!(self, r => r.wiped(success, config))
    }

    fn check<T: Record>(&mut self, found: bool, items: &[T], config: &CheckConfig) -> Result<()> {
        each_renderer!(self, r => r.check(found, items, config))
    }

    fn stats<B: StatsRecord>(
        &mut self,
        stats: &StatsResponse<B>,
        config: &StatsConfig,
    ) -> Result<()> {
        each_renderer!(self, r => r.stats(stats, config))
    }

    fn success(&mut self, message: &str) -> Result<()> {
        each_renderer!(self, r => r.success(message))
    }

    fn empty(&mut self, message: &str) -> Result<()> {
        each_renderer!(self, r => r.empty(message))
    }

    fn handle_error(&mut self, err: &anyhow::Error) -> Result<()> {
        each_renderer!(self, r => r.handle_error(err))
    }
}

/// Builds the renderer for `format`, bound to `writer`.
///
/// Names are matched case-insensitively. Anything else yields the
/// [`UnsupportedRenderer`], whose every call fails.
pub fn renderer_for(format: &str, color: bool, writer: Box<dyn Write>) -> Renderer {
    match format.trim().to_ascii_lowercase().as_str() {
        "json" => Renderer::Json(JsonRenderer::new(writer)),
        "table" => Renderer::Table(TableRenderer::new(writer, color)),
        "plain" => Renderer::Plain(PlainRenderer::new(writer)),
        "csv" => Renderer::Csv(CsvRenderer::new(writer)),
        _ => Renderer::Unsupported(UnsupportedRenderer::new(format)),
    }
}

/// First [`SendctlError`] in the error's chain.
pub(crate) fn find_sendctl_error(err: &anyhow::Error) -> Option<&SendctlError> {
    err.chain().find_map(|cause| cause.downcast_ref::<SendctlError>())
}

/// Failure verdict for an error that has already been written to the sink.
pub(crate) fn reported(err: &anyhow::Error) -> anyhow::Error {
    anyhow::anyhow!("{err:#}")
}
