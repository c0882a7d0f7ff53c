// SPDX-License-Identifier: Apache-2.0

//! Fixtures and a capturing sink for renderer tests.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use sendctl_core::models::{
    ApiKey, ApiKeyScope, BounceBucket, BounceCount, DnsRecord, Domain, Page, Pagination,
    SmtpCredential, StatsResponse, Webhook,
};

use super::{Renderer, renderer_for};

pub const SECRET: &str = "sk_live_9f8e7d6c5b4a";
pub const PASSWORD: &str = "smtp-pass-123456";

/// Sink that keeps everything written to it.
#[derive(Clone, Default)]
pub struct Captured(Rc<RefCell<Vec<u8>>>);

impl Captured {
    pub fn text(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Renderer for `format` writing into a fresh capture, colors off.
pub fn capture(format: &str) -> (Renderer, Captured) {
    let sink = Captured::default();
    (renderer_for(format, false, Box::new(sink.clone())), sink)
}

pub fn order(names: &[&str]) -> Option<Vec<String>> {
    Some(names.iter().map(|s| (*s).to_string()).collect())
}

pub fn ts() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap()
}

pub fn domain() -> Domain {
    Domain {
        id: "dom-1".to_string(),
        account_id: "acct-1".to_string(),
        domain: "example.com".to_string(),
        dns_records: vec![DnsRecord {
            record_type: "TXT".to_string(),
            host: "_dmarc.example.com".to_string(),
            content: "v=DMARC1; p=none".to_string(),
            required: true,
            propagated: false,
        }],
        dns_valid: true,
        last_dns_check_at: None,
        tracking_subdomain: Some("track".to_string()),
        return_path_subdomain: None,
        created_at: ts(),
        updated_at: ts(),
        additional_properties: Default::default(),
    }
}

pub fn api_key() -> ApiKey {
    ApiKey {
        id: "key-1".to_string(),
        account_id: "acct-1".to_string(),
        label: "ci".to_string(),
        public_key: "pk_live_abcdef".to_string(),
        secret_key: Some(SECRET.to_string()),
        scopes: vec![ApiKeyScope {
            id: "scope-1".to_string(),
            scope: "messages:send:all".to_string(),
            domain_id: None,
        }],
        last_used_at: None,
        created_at: ts(),
        updated_at: ts(),
        additional_properties: Default::default(),
    }
}

pub fn smtp() -> SmtpCredential {
    SmtpCredential {
        id: "smtp-1".to_string(),
        account_id: "acct-1".to_string(),
        name: "relay".to_string(),
        username: "relay@example.com".to_string(),
        password: Some(PASSWORD.to_string()),
        scope: "smtp".to_string(),
        domains: Some(vec!["example.com".to_string()]),
        sandbox: false,
        created_at: ts(),
        updated_at: ts(),
        additional_properties: Default::default(),
    }
}

pub fn webhook() -> Webhook {
    Webhook {
        id: "wh-1".to_string(),
        account_id: "acct-1".to_string(),
        name: "events".to_string(),
        url: "https://hooks.example.com/in".to_string(),
        enabled: true,
        on_reception: false,
        on_delivered: true,
        on_transient_error: false,
        on_failed: false,
        on_bounced: true,
        on_suppressed: false,
        on_opened: false,
        on_clicked: false,
        on_suppression_created: false,
        on_dns_error: false,
        scope: None,
        domains: None,
        secret: Some(SECRET.to_string()),
        success_count: 4,
        error_count: 0,
        errors_since_last_success: 0,
        last_request_at: None,
        created_at: ts(),
        updated_at: ts(),
        additional_properties: Default::default(),
    }
}

pub fn page<T>(data: Vec<T>) -> Page<T> {
    Page::single(data)
}

pub fn page_with_more<T>(data: Vec<T>, cursor: &str) -> Page<T> {
    Page {
        data,
        pagination: Pagination {
            has_more: true,
            next_cursor: Some(cursor.to_string()),
            previous_cursor: None,
        },
    }
}

pub fn bounce_stats() -> StatsResponse<BounceBucket> {
    StatsResponse {
        data: vec![BounceBucket {
            from_timestamp: ts(),
            to_timestamp: ts(),
            bounces: vec![
                BounceCount {
                    classification: "hard".to_string(),
                    count: 3,
                },
                BounceCount {
                    classification: "soft".to_string(),
                    count: 1,
                },
                BounceCount {
                    classification: "spam".to_string(),
                    count: 1,
                },
            ],
        }],
    }
}
