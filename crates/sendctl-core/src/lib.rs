// SPDX-License-Identifier: Apache-2.0

//! # sendctl core
//!
//! Core library for the `sendctl` CLI, a client for a hosted
//! transactional-email service.
//!
//! This crate provides reusable components for:
//! - Typed resource models (domains, messages, webhooks, routes,
//!   suppressions, SMTP credentials, API keys, statistics, auth status)
//! - A typed client facade over a pluggable transport
//! - Local input validation
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust
//! use sendctl_core::api::{Client, ListQuery, RecordedTransport};
//!
//! let client = Client::new(RecordedTransport::inline(
//!     r#"{"data": [], "pagination": {"has_more": false}}"#,
//! ));
//! let page = client.list_domains(&ListQuery::default()).unwrap();
//! assert!(page.is_empty());
//! ```

// ============================================================================
// Error Handling
// ============================================================================

pub use error::SendctlError;

/// Convenience Result type for sendctl operations.
pub type Result<T> = std::result::Result<T, SendctlError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    ApiConfig, AppConfig, DefaultsConfig, OutputConfig, config_dir, config_file_path, load_config,
};

// ============================================================================
// API Client
// ============================================================================

pub use api::{ApiRequest, Client, RecordedTransport, Transport, UnconfiguredTransport};

// ============================================================================
// Utilities
// ============================================================================

pub use utils::{parse_date, truncate, truncate_with_suffix};

// ============================================================================
// Modules
// ============================================================================

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod validate;
