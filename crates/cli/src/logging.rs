// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing setup for the `nut` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `NUT_LOG=provardx_nut=debug`
pub const LOG_ENV: &str = "NUT_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Filter from `directives`, falling back to `warn` when unset or invalid.
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a stderr fmt subscriber filtered by [`LOG_ENV`].
///
/// Stdout stays reserved for reports. A second call is a no-op.
pub fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*};

    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directives.as_deref());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
