//! Logging setup built on `tracing`.
//!
//! Diagnostics go to stderr so that stdout carries nothing but the tree. The
//! filter is fixed at `warn`: tolerated scan failures are reported, scan
//! progress (`debug`) is not. No environment variables are consulted.
//!
//! File: src/logging.rs
//! Date: 2026-10-17

#![forbid(unsafe_code)]

use std::io::{self, IsTerminal};

use tracing_subscriber::EnvFilter;

/// Filter directive applied to every run.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Builds the event filter used by [`init_logging`].
#[must_use]
pub fn build_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_DIRECTIVE)
}

/// Installs the global stderr subscriber.
///
/// Calling it more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter())
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
