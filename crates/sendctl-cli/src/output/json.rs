// SPDX-License-Identifier: Apache-2.0

//! JSON renderer: pretty-printed serde output.

use std::io::Write;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Value, json};
use sendctl_core::SendctlError;
use sendctl_core::models::{Page, StatsResponse};

use super::fields::{Record, StatsRecord, masked_json};
use super::options::{self, CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use super::options::{StatsConfig, UpdateConfig, WipeConfig};
use super::{OutputRenderer, find_sendctl_error, reported};

/// Emits resources as indented JSON.
pub struct JsonRenderer {
    out: Box<dyn Write>,
}

/// Structured error object for everything except replayed remote errors.
#[derive(Serialize)]
struct ErrorBody<'a> {
    error: bool,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl JsonRenderer {
    pub fn new(out: Box<dyn Write>) -> Self {
        Self { out }
    }

    fn emit(&mut self, mut value: Value) -> Result<()> {
        strip_empty_extensions(&mut value);
        serde_json::to_writer_pretty(&mut self.out, &value).context("Failed to serialize to JSON")?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }

    fn masked_all<T: Record>(items: &[T]) -> Result<Vec<Value>> {
        items
            .iter()
            .map(|item| masked_json(item).context("Failed to serialize to JSON"))
            .collect()
    }
}

/// Whether `key` names an extension bag such as `additional_properties`.
fn is_extension_key(key: &str) -> bool {
    key.to_lowercase().replace('_', "") == "additionalproperties"
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Removes empty extension bags anywhere in the tree. Populated ones stay.
fn strip_empty_extensions(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|key, v| !(is_extension_key(key) && is_blank(v)));
            map.values_mut().for_each(strip_empty_extensions);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_empty_extensions),
        _ => {}
    }
}

impl OutputRenderer for JsonRenderer {
    fn format_name(&self) -> &str {
        "json"
    }

    fn set_writer(&mut self, writer: Box<dyn Write>) {
        self.out = writer;
    }

    fn list<T: Record>(&mut self, page: &Page<T>, _config: &ListConfig) -> Result<()> {
        let data = Self::masked_all(&page.data)?;
        self.emit(json!({ "data": data, "pagination": page.pagination }))
    }

    fn single<T: Record>(&mut self, item: Option<&T>, config: &SingleConfig) -> Result<()> {
        match item {
            Some(item) => self.emit(masked_json(item)?),
            None => {
                let message = options::empty_message(&config.empty_message, T::NOUN);
                self.emit(json!({ "message": message }))
            }
        }
    }

    fn created<T: Record>(&mut self, item: &T, _config: &CreateConfig) -> Result<()> {
        self.emit(serde_json::to_value(item)?)
    }

    fn created_many<T: Record>(&mut self, items: &[T], _config: &CreateConfig) -> Result<()> {
        self.emit(json!({ "data": items }))
    }

    fn updated<T: Record>(&mut self, item: &T, _config: &UpdateConfig) -> Result<()> {
        self.emit(masked_json(item)?)
    }

    fn deleted(&mut self, success: bool, config: &DeleteConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        let message = options::removed_message(&config.success_message, &config.item_name);
        self.emit(json!({ "success": true, "message": message }))
    }

    fn wiped(&mut self, success: bool, config: &WipeConfig) -> Result<()> {
        if !success {
            anyhow::bail!(options::failure_message(&config.item_name));
        }
        let message = options::removed_message(&config.success_message, &config.item_name);
        self.emit(json!({ "success": true, "message": message }))
    }

    fn check<T: Record>(&mut self, found: bool, items: &[T], config: &CheckConfig) -> Result<()> {
        let message = if found {
            &config.found_message
        } else {
            &config.not_found_message
        };
        let data = Self::masked_all(items)?;
        self.emit(json!({ "found": found, "message": message, "data": data }))
    }

    fn stats<B: StatsRecord>(
        &mut self,
        stats: &StatsResponse<B>,
        _config: &StatsConfig,
    ) -> Result<()> {
        self.emit(serde_json::to_value(stats)?)
    }

    fn success(&mut self, message: &str) -> Result<()> {
        self.emit(json!({ "success": true, "message": message }))
    }

    fn empty(&mut self, message: &str) -> Result<()> {
        self.emit(json!({ "message": message }))
    }

    fn handle_error(&mut self, err: &anyhow::Error) -> Result<()> {
        let source = find_sendctl_error(err);

        // The service's own error body is complete output on its own.
        if let Some(SendctlError::Api {
            raw_body: Some(raw),
            ..
        }) = source
        {
            writeln!(self.out, "{raw}")?;
            self.out.flush()?;
            return Ok(());
        }

        let body = ErrorBody {
            error: true,
            message: format!("{err:#}"),
            code: source.and_then(SendctlError::code),
            details: source.and_then(SendctlError::details),
        };
        self.emit(serde_json::to_value(&body)?)?;
        Err(reported(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::testing::{self, capture};

    fn parse(text: &str) -> Value {
        serde_json::from_str(text).unwrap()
    }

    #[test]
    fn test_remote_error_body_replayed_verbatim() {
        let (mut renderer, sink) = capture("json");
        let err = anyhow::Error::new(SendctlError::Api {
            status: 400,
            message: "x".to_string(),
            code: Some("y".to_string()),
            raw_body: Some(r#"{"message":"x","code":"y"}"#.to_string()),
        });
        renderer.handle_error(&err).unwrap();
        assert_eq!(sink.text(), "{\"message\":\"x\",\"code\":\"y\"}\n");
    }

    #[test]
    fn test_cancelled_renders_error_object_and_fails() {
        let (mut renderer, sink) = capture("json");
        let err = anyhow::Error::new(SendctlError::Cancelled);
        assert!(renderer.handle_error(&err).is_err());
        assert_eq!(
            parse(&sink.text()),
            json!({ "error": true, "message": "operation cancelled" })
        );
    }

    #[test]
    fn test_validation_error_carries_code_and_details() {
        let (mut renderer, sink) = capture("json");
        let err = anyhow::Error::new(SendctlError::Validation {
            message: "invalid scope 'foo'".to_string(),
            details: Some("expected resource:action".to_string()),
        });
        assert!(renderer.handle_error(&err).is_err());
        let value = parse(&sink.text());
        assert_eq!(value["code"], "validation_error");
        assert_eq!(value["details"], "expected resource:action");
    }

    #[test]
    fn test_remote_error_without_body_fails() {
        let (mut renderer, sink) = capture("json");
        let err = anyhow::Error::new(SendctlError::Api {
            status: 500,
            message: "boom".to_string(),
            code: None,
            raw_body: None,
        });
        assert!(renderer.handle_error(&err).is_err());
        let value = parse(&sink.text());
        assert_eq!(value["message"], "boom");
        assert_eq!(value["details"], "HTTP 500");
        assert!(value.get("code").is_none());
    }

    #[test]
    fn test_empty_extension_bags_are_stripped() {
        let mut value = json!({
            "id": "d-1",
            "additional_properties": {},
            "nested": [{ "AdditionalProperties": null, "keep": "" }],
            "additionalProperties": { "beta": true }
        });
        strip_empty_extensions(&mut value);
        assert_eq!(
            value,
            json!({
                "id": "d-1",
                "nested": [{ "keep": "" }],
                "additionalProperties": { "beta": true }
            })
        );
    }

    #[test]
    fn test_domain_output_has_no_empty_bag() {
        let (mut renderer, sink) = capture("json");
        renderer
            .single(Some(&testing::domain()), &SingleConfig::default())
            .unwrap();
        let value = parse(&sink.text());
        assert!(value.get("additional_properties").is_none());
        assert_eq!(value["domain"], "example.com");
    }

    #[test]
    fn test_domain_output_keeps_extension_fields() {
        let (mut renderer, sink) = capture("json");
        let mut domain = testing::domain();
        domain
            .additional_properties
            .insert("beta_feature".to_string(), json!({ "x": 1 }));
        renderer.single(Some(&domain), &SingleConfig::default()).unwrap();
        assert_eq!(parse(&sink.text())["beta_feature"], json!({ "x": 1 }));
    }

    #[test]
    fn test_no_html_escaping() {
        let (mut renderer, sink) = capture("json");
        renderer.empty("<none> & nothing").unwrap();
        assert!(sink.text().contains("<none> & nothing"));
    }

    #[test]
    fn test_check_reports_found_flag() {
        let (mut renderer, sink) = capture("json");
        let config = CheckConfig {
            found_message: "suppressed".to_string(),
            not_found_message: "not suppressed".to_string(),
            field_order: None,
        };
        renderer
            .check::<sendctl_core::models::Suppression>(false, &[], &config)
            .unwrap();
        assert_eq!(
            parse(&sink.text()),
            json!({ "found": false, "message": "not suppressed", "data": [] })
        );
    }

    #[test]
    fn test_list_keeps_pagination() {
        let (mut renderer, sink) = capture("json");
        let page = testing::page_with_more(vec![testing::webhook()], "c-2");
        renderer.list(&page, &ListConfig::default()).unwrap();
        let value = parse(&sink.text());
        assert_eq!(value["pagination"]["next_cursor"], "c-2");
        assert_eq!(value["data"][0]["secret"], crate::output::format::REDACTED);
    }
}
