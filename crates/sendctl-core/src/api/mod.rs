// SPDX-License-Identifier: Apache-2.0

//! Typed client facade over a pluggable transport.
//!
//! [`Client`] exposes one method per remote operation and hands back
//! already-decoded models. How a request reaches the service is the
//! [`Transport`]'s business; [`RecordedTransport`] replays a captured
//! response document.

mod recorded;
mod requests;

use std::collections::BTreeMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::SendctlError;
use crate::models::{
    ApiKey, AuthStatus, BounceBucket, DeliverabilityBucket, DeliveryTimeBucket, Domain, Message,
    Page, Route, SendResponse, SmtpCredential, StatsResponse, Suppression, Webhook,
};

pub use recorded::{RecordedTransport, ResponseSource, UnconfiguredTransport, decode_document};
pub use requests::{
    ApiKeyInput, ListQuery, MessageFilter, NewMessage, NewRoute, NewSmtpCredential,
    NewSuppression, NewWebhook, RouteUpdate, StatsQuery, WebhookUpdate,
};

/// Description of one remote operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Operation name, e.g. `domains.list`.
    pub operation: &'static str,
    /// Path and query parameters.
    pub params: BTreeMap<String, String>,
    /// Request payload for write operations.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// Starts a request for `operation`.
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            params: BTreeMap::new(),
            body: None,
        }
    }

    /// Adds a parameter.
    #[must_use]
    pub fn param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Adds a parameter when a value is present.
    #[must_use]
    pub fn param_opt(self, key: &str, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.param(key, v),
            None => self,
        }
    }

    /// Adds pagination parameters.
    #[must_use]
    pub fn page(self, query: &ListQuery) -> Self {
        self.param_opt("limit", query.limit.map(|l| l.to_string()))
            .param_opt("cursor", query.cursor.clone())
    }

    /// Attaches a serialized payload.
    pub fn body<B: Serialize>(mut self, body: &B) -> Result<Self, SendctlError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

/// Delivers a request and returns the decoded JSON response body.
///
/// Implementations report remote failures as [`SendctlError::Api`].
pub trait Transport {
    /// Performs `request`.
    fn send(&self, request: &ApiRequest) -> Result<Value, SendctlError>;
}

/// Typed facade over a [`Transport`].
pub struct Client {
    transport: Box<dyn Transport>,
}

impl Client {
    /// Wraps a transport.
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    fn fetch<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, SendctlError> {
        debug!(operation = request.operation, "sending request");
        let value = self.transport.send(&request)?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetches a single resource; a null body means absent.
    ///
    /// Remote errors, 404 included, propagate unchanged.
    fn fetch_optional<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<Option<T>, SendctlError> {
        debug!(operation = request.operation, "sending request");
        match self.transport.send(&request)? {
            Value::Null => Ok(None),
            value => Ok(Some(serde_json::from_value(value)?)),
        }
    }

    /// Runs an operation with no payload; `{"success": false}` reports failure.
    fn acknowledge(&self, request: ApiRequest) -> Result<bool, SendctlError> {
        debug!(operation = request.operation, "sending request");
        let value = self.transport.send(&request)?;
        Ok(value
            .get("success")
            .and_then(Value::as_bool)
            .unwrap_or(true))
    }

    // ------------------------------------------------------------------
    // Domains
    // ------------------------------------------------------------------

    pub fn list_domains(&self, query: &ListQuery) -> Result<Page<Domain>, SendctlError> {
        self.fetch(ApiRequest::new("domains.list").page(query))
    }

    pub fn get_domain(&self, domain: &str) -> Result<Option<Domain>, SendctlError> {
        self.fetch_optional(ApiRequest::new("domains.get").param("domain", domain))
    }

    pub fn create_domain(&self, domain: &str) -> Result<Domain, SendctlError> {
        self.fetch(ApiRequest::new("domains.create").param("domain", domain))
    }

    pub fn delete_domain(&self, domain: &str) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("domains.delete").param("domain", domain))
    }

    /// Re-checks DNS for a domain and returns its refreshed state.
    ///
    /// A null body means the domain is not registered.
    pub fn verify_domain(&self, domain: &str) -> Result<Domain, SendctlError> {
        self.fetch::<Option<Domain>>(ApiRequest::new("domains.verify").param("domain", domain))?
            .ok_or_else(|| SendctlError::NotFound {
                resource: "domain".to_string(),
                id: domain.to_string(),
            })
    }

    // ------------------------------------------------------------------
    // Messages
    // ------------------------------------------------------------------

    pub fn list_messages(&self, filter: &MessageFilter) -> Result<Page<Message>, SendctlError> {
        self.fetch(
            ApiRequest::new("messages.list")
                .param_opt("sender", filter.sender.clone())
                .param_opt("recipient", filter.recipient.clone())
                .param_opt("status", filter.status.clone())
                .page(&filter.page),
        )
    }

    pub fn get_message(&self, id: &str) -> Result<Option<Message>, SendctlError> {
        self.fetch_optional(ApiRequest::new("messages.get").param("id", id))
    }

    pub fn send_message(&self, message: &NewMessage) -> Result<SendResponse, SendctlError> {
        self.fetch(ApiRequest::new("messages.send").body(message)?)
    }

    pub fn cancel_message(&self, id: &str) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("messages.cancel").param("id", id))
    }

    // ------------------------------------------------------------------
    // Webhooks
    // ------------------------------------------------------------------

    pub fn list_webhooks(&self, query: &ListQuery) -> Result<Page<Webhook>, SendctlError> {
        self.fetch(ApiRequest::new("webhooks.list").page(query))
    }

    pub fn get_webhook(&self, id: &str) -> Result<Option<Webhook>, SendctlError> {
        self.fetch_optional(ApiRequest::new("webhooks.get").param("id", id))
    }

    pub fn create_webhook(&self, webhook: &NewWebhook) -> Result<Webhook, SendctlError> {
        self.fetch(ApiRequest::new("webhooks.create").body(webhook)?)
    }

    pub fn update_webhook(
        &self,
        id: &str,
        update: &WebhookUpdate,
    ) -> Result<Webhook, SendctlError> {
        self.fetch(
            ApiRequest::new("webhooks.update")
                .param("id", id)
                .body(update)?,
        )
    }

    pub fn delete_webhook(&self, id: &str) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("webhooks.delete").param("id", id))
    }

    // ------------------------------------------------------------------
    // Routes
    // ------------------------------------------------------------------

    pub fn list_routes(&self, query: &ListQuery) -> Result<Page<Route>, SendctlError> {
        self.fetch(ApiRequest::new("routes.list").page(query))
    }

    pub fn get_route(&self, id: &str) -> Result<Option<Route>, SendctlError> {
        self.fetch_optional(ApiRequest::new("routes.get").param("id", id))
    }

    pub fn create_route(&self, route: &NewRoute) -> Result<Route, SendctlError> {
        self.fetch(ApiRequest::new("routes.create").body(route)?)
    }

    pub fn update_route(&self, id: &str, update: &RouteUpdate) -> Result<Route, SendctlError> {
        self.fetch(ApiRequest::new("routes.update").param("id", id).body(update)?)
    }

    pub fn delete_route(&self, id: &str) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("routes.delete").param("id", id))
    }

    // ------------------------------------------------------------------
    // Suppressions
    // ------------------------------------------------------------------

    pub fn list_suppressions(
        &self,
        domain: Option<&str>,
        query: &ListQuery,
    ) -> Result<Page<Suppression>, SendctlError> {
        self.fetch(
            ApiRequest::new("suppressions.list")
                .param_opt("domain", domain)
                .page(query),
        )
    }

    /// Looks up suppressions matching an address.
    pub fn check_suppression(&self, email: &str) -> Result<Page<Suppression>, SendctlError> {
        self.fetch(ApiRequest::new("suppressions.check").param("email", email))
    }

    pub fn create_suppression(
        &self,
        suppression: &NewSuppression,
    ) -> Result<Suppression, SendctlError> {
        self.fetch(ApiRequest::new("suppressions.create").body(suppression)?)
    }

    pub fn delete_suppression(
        &self,
        email: &str,
        domain: Option<&str>,
    ) -> Result<bool, SendctlError> {
        self.acknowledge(
            ApiRequest::new("suppressions.delete")
                .param("email", email)
                .param_opt("domain", domain),
        )
    }

    /// Removes every suppression, optionally limited to one domain.
    pub fn wipe_suppressions(&self, domain: Option<&str>) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("suppressions.wipe").param_opt("domain", domain))
    }

    // ------------------------------------------------------------------
    // SMTP credentials
    // ------------------------------------------------------------------

    pub fn list_smtp_credentials(
        &self,
        query: &ListQuery,
    ) -> Result<Page<SmtpCredential>, SendctlError> {
        self.fetch(ApiRequest::new("smtp.list").page(query))
    }

    pub fn get_smtp_credential(&self, id: &str) -> Result<Option<SmtpCredential>, SendctlError> {
        self.fetch_optional(ApiRequest::new("smtp.get").param("id", id))
    }

    pub fn create_smtp_credential(
        &self,
        credential: &NewSmtpCredential,
    ) -> Result<SmtpCredential, SendctlError> {
        self.fetch(ApiRequest::new("smtp.create").body(credential)?)
    }

    pub fn delete_smtp_credential(&self, id: &str) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("smtp.delete").param("id", id))
    }

    // ------------------------------------------------------------------
    // API keys
    // ------------------------------------------------------------------

    pub fn list_api_keys(&self, query: &ListQuery) -> Result<Page<ApiKey>, SendctlError> {
        self.fetch(ApiRequest::new("apikeys.list").page(query))
    }

    pub fn get_api_key(&self, id: &str) -> Result<Option<ApiKey>, SendctlError> {
        self.fetch_optional(ApiRequest::new("apikeys.get").param("id", id))
    }

    pub fn create_api_key(&self, input: &ApiKeyInput) -> Result<ApiKey, SendctlError> {
        self.fetch(ApiRequest::new("apikeys.create").body(input)?)
    }

    pub fn update_api_key(&self, id: &str, input: &ApiKeyInput) -> Result<ApiKey, SendctlError> {
        self.fetch(ApiRequest::new("apikeys.update").param("id", id).body(input)?)
    }

    pub fn delete_api_key(&self, id: &str) -> Result<bool, SendctlError> {
        self.acknowledge(ApiRequest::new("apikeys.delete").param("id", id))
    }

    // ------------------------------------------------------------------
    // Statistics
    // ------------------------------------------------------------------

    pub fn deliverability_stats(
        &self,
        query: &StatsQuery,
    ) -> Result<StatsResponse<DeliverabilityBucket>, SendctlError> {
        self.fetch(ApiRequest::new("stats.deliverability").body(query)?)
    }

    pub fn bounce_stats(
        &self,
        query: &StatsQuery,
    ) -> Result<StatsResponse<BounceBucket>, SendctlError> {
        self.fetch(ApiRequest::new("stats.bounce").body(query)?)
    }

    pub fn delivery_time_stats(
        &self,
        query: &StatsQuery,
    ) -> Result<StatsResponse<DeliveryTimeBucket>, SendctlError> {
        self.fetch(ApiRequest::new("stats.delivery_time").body(query)?)
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub fn auth_status(&self, profile: &str) -> Result<AuthStatus, SendctlError> {
        self.fetch(ApiRequest::new("auth.status").param("profile", profile))
    }
}
