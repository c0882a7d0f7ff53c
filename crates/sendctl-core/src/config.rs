// SPDX-License-Identifier: Apache-2.0

//! Configuration management for sendctl.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `SENDCTL_`)
//! 2. Config file: `~/.config/sendctl/config.toml`
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Default to CSV output via environment variable
//! SENDCTL_OUTPUT__FORMAT=csv sendctl domains list
//! ```

use std::path::PathBuf;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::SendctlError;

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output preferences.
    pub output: OutputConfig,
    /// API client settings.
    pub api: ApiConfig,
    /// Command defaults.
    pub defaults: DefaultsConfig,
}

/// Output preferences.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format when `--output` is not given.
    pub format: String,
    /// Enable colored table output.
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "table".to_string(),
            color: true,
        }
    }
}

/// API client settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Recorded response document replayed by the client (`-` for stdin).
    pub response_file: Option<PathBuf>,
    /// Profile name reported by `auth status`.
    pub profile: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            response_file: None,
            profile: "default".to_string(),
        }
    }
}

/// Command defaults.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Page size for list commands.
    pub page_limit: u32,
    /// Ask before deleting or wiping resources.
    pub confirm_destructive: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            page_limit: 50,
            confirm_destructive: true,
        }
    }
}

/// Returns the sendctl configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/sendctl`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("sendctl");
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join("sendctl")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration.
///
/// Loads from config file (if exists) and environment variables.
/// Environment variables use the prefix `SENDCTL_` and double underscore
/// for nested keys (e.g., `SENDCTL_OUTPUT__FORMAT`).
///
/// # Errors
///
/// Returns `SendctlError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, SendctlError> {
    let config_path = config_file_path();

    let config = Config::builder()
        // Load from config file (optional - may not exist)
        .add_source(File::with_name(config_path.to_string_lossy().as_ref()).required(false))
        // Override with environment variables
        .add_source(
            Environment::with_prefix("SENDCTL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
