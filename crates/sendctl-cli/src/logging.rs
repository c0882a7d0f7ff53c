// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the sendctl CLI.
//!
//! Uses `tracing` with `tracing-subscriber`, writing to stderr so rendered
//! output on stdout stays machine-readable. `RUST_LOG` overrides the
//! default filter.
//!
//! # Examples
//!
//! ```bash
//! # Trace every replayed request
//! RUST_LOG=sendctl=debug sendctl domains list --response-file domains.json
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Picks the default filter directives from the verbosity flags.
fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "sendctl=error,sendctl_core=error"
    } else if verbose {
        "sendctl=debug,sendctl_core=debug"
    } else {
        "sendctl=warn,sendctl_core=warn"
    }
}

/// Initialize the logging subsystem.
///
/// `-v` raises sendctl's own targets to debug and `-q` lowers them to
/// errors only. `RUST_LOG`, when set, wins over both.
pub fn init_logging(verbose: bool, quiet: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, quiet)));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
