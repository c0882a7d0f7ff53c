// SPDX-License-Identifier: Apache-2.0

//! sendctl - command-line client for a hosted transactional email service.
//!
//! Every command result goes through one output renderer, selected once per
//! invocation from `--output` or the configured default.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod prompt;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use sendctl_core::{AppConfig, Client, RecordedTransport, SendctlError, UnconfiguredTransport};
use tracing::{debug, warn};

use crate::cli::{Cli, CommandContext};
use crate::output::{OutputRenderer, find_sendctl_error, renderer_for};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let config = match sendctl_core::load_config() {
        Ok(config) => {
            debug!("Configuration loaded successfully");
            config
        }
        Err(e) => {
            warn!("{e}; using default configuration");
            AppConfig::default()
        }
    };

    let format = cli
        .output
        .clone()
        .unwrap_or_else(|| config.output.format.clone());
    let color = config.output.color && !cli.no_color && io::stdout().is_terminal();
    let mut renderer = renderer_for(&format, color, Box::new(io::stdout()));
    debug!(format = renderer.format_name(), color, "renderer selected");

    let client = match cli.response_file.clone().or_else(|| config.api.response_file.clone()) {
        Some(path) => Client::new(RecordedTransport::new(path)),
        None => Client::new(UnconfiguredTransport),
    };

    let ctx = CommandContext::from_cli(&cli, &config);
    let verbose = cli.verbose;

    let Err(err) = commands::run(cli.command, &ctx, &client, &mut renderer) else {
        return ExitCode::SUCCESS;
    };

    match renderer.handle_error(&err) {
        Ok(()) => ExitCode::SUCCESS,
        Err(reported) => {
            if matches!(
                find_sendctl_error(&reported),
                Some(SendctlError::UnsupportedFormat { .. })
            ) {
                eprintln!("Error: {}", errors::format_error(&reported));
            } else if verbose {
                eprintln!("{}", errors::format_error(&err));
            }
            ExitCode::FAILURE
        }
    }
}
