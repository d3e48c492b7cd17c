//! dirtree: print a directory as a connected text tree.
//!
//! The pipeline is `cli -> config -> scan -> render -> output`:
//!
//! 1. **CLI parsing** turns process arguments into a `Config`
//! 2. **Scanning** builds the sorted in-memory tree and collects failures
//! 3. **Rendering** writes connector-annotated lines to a sink
//! 4. **Error policy** decides whether partial output is written and whether
//!    nested failures are fatal
//!
//! # Examples
//!
//! ```no_run
//! use std::io;
//! use std::path::Path;
//!
//! dirtree::dir_tree(io::stdout(), Path::new("."), true).unwrap();
//! ```
//!
//! File: src/lib.rs
//! Date: 2026-10-17

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod render;
pub mod scan;

use std::io::Write;
use std::path::Path;

use config::Config;
use error::{DirtreeResult, ScanError};
use scan::ScanStats;

/// Runs a full scan-and-render pass for `config`, writing the tree to `out`.
///
/// Partial output and nested failures are handled according to
/// `config.policy`. On success the scan statistics are returned, including
/// any nested failures that were tolerated.
///
/// # Errors
///
/// - `DirtreeError::Scan` if the root cannot be listed, or if a nested
///   listing failed under `NestedFailurePolicy::Fail`
/// - `DirtreeError::Output` if writing to `out` fails
///
/// # Examples
///
/// ```
/// use std::fs;
/// use dirtree::config::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// fs::create_dir(dir.path().join("a")).unwrap();
///
/// let mut out = Vec::new();
/// let stats = dirtree::run(&Config::with_root(dir.path().to_path_buf()), &mut out).unwrap();
/// assert_eq!(out, "└───a\n".as_bytes());
/// assert_eq!(stats.directory_count, 1);
/// ```
pub fn run<W: Write>(config: &Config, out: W) -> DirtreeResult<ScanStats> {
    let mut stats = scan::scan(config);

    let Some(failure) = take_fatal_failure(&mut stats, config) else {
        output::write_tree(out, &stats.nodes)?;
        return Ok(stats);
    };

    if !config.checks_before_render() {
        output::write_tree(out, &stats.nodes)?;
    }
    Err(failure.into())
}

/// Prints the tree of `path` to `out` with the default error policy.
///
/// # Errors
///
/// Same as [`run`].
pub fn dir_tree<W: Write>(out: W, path: &Path, include_files: bool) -> DirtreeResult<()> {
    let mut config = Config::with_root(path.to_path_buf());
    config.scan.include_files = include_files;
    run(&config, out).map(|_| ())
}

/// Removes and returns the failure that makes this run fail, if any.
///
/// The root failure always wins; the first nested failure counts only when
/// the policy says so.
fn take_fatal_failure(stats: &mut ScanStats, config: &Config) -> Option<ScanError> {
    if let Some(err) = stats.root_failure.take() {
        return Some(err);
    }
    if config.fails_on_nested() && !stats.nested_failures.is_empty() {
        return Some(stats.nested_failures.remove(0));
    }
    None
}
