// SPDX-License-Identifier: Apache-2.0

//! Fallback renderer for unknown `--output` values.

use std::io::Write;

use anyhow::Result;
use sendctl_core::SendctlError;
use sendctl_core::models::{Page, StatsResponse};

use super::OutputRenderer;
use super::fields::{Record, StatsRecord};
use super::options::{CheckConfig, CreateConfig, DeleteConfig, ListConfig, SingleConfig};
use super::options::{StatsConfig, UpdateConfig, WipeConfig};

/// Fails every call with `unsupported output format: <name>` and writes nothing.
pub struct UnsupportedRenderer {
    format: String,
}

impl UnsupportedRenderer {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    fn fail(&self) -> Result<()> {
        Err(SendctlError::UnsupportedFormat {
            format: self.format.clone(),
        }
        .into())
    }
}

impl OutputRenderer for UnsupportedRenderer {
    fn format_name(&self) -> &str {
        &self.format
    }

    fn set_writer(&mut self, _writer: Box<dyn Write>) {}

    fn list<T: Record>(&mut self, _page: &Page<T>, _config: &ListConfig) -> Result<()> {
        self.fail()
    }

    fn single<T: Record>(&mut self, _item: Option<&T>, _config: &SingleConfig) -> Result<()> {
        self.fail()
    }

    fn created<T: Record>(&mut self, _item: &T, _config: &CreateConfig) -> Result<()> {
        self.fail()
    }

    fn created_many<T: Record>(&mut self, _items: &[T], _config: &CreateConfig) -> Result<()> {
        self.fail()
    }

    fn updated<T: Record>(&mut self, _item: &T, _config: &UpdateConfig) -> Result<()> {
        self.fail()
    }

    fn deleted(&mut self, _success: bool, _config: &DeleteConfig) -> Result<()> {
        self.fail()
    }

    fn wiped(&mut self, _success: bool, _config: &WipeConfig) -> Result<()> {
        self.fail()
    }

    fn check<T: Record>(
        &mut self,
        _found: bool,
        _items: &[T],
        _config: &CheckConfig,
    ) -> Result<()> {
        self.fail()
    }

    fn stats<B: StatsRecord>(
        &mut self,
        _stats: &StatsResponse<B>,
        _config: &StatsConfig,
    ) -> Result<()> {
        self.fail()
    }

    fn success(&mut self, _message: &str) -> Result<()> {
        self.fail()
    }

    fn empty(&mut self, _message: &str) -> Result<()> {
        self.fail()
    }

    fn handle_error(&mut self, _err: &anyhow::Error) -> Result<()> {
        self.fail()
    }
}
