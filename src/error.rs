//! Error handling module: unified error types for dirtree.
//!
//! The hierarchy mirrors the pipeline stages:
//!
//! - **CLI errors**: wrong number of positional arguments
//! - **Scan errors**: directory listing and metadata failures, each carrying
//!   the failing path
//! - **Output errors**: writing the rendered tree to stdout
//!
//! All error types implement `std::error::Error` with source chains intact, so
//! the entry point can print the full cause of a failure.
//!
//! File: src/error.rs
//! Date: 2026-10-17

#![forbid(unsafe_code)]

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Top-level error type for dirtree.
///
/// Aggregates all stage errors and is the error type of the library entry
/// points. Converted into an exit code only in `main`.
///
/// # Examples
///
/// ```
/// use dirtree::error::{CliError, DirtreeError};
///
/// let err: DirtreeError = CliError::WrongArgumentCount { given: 0 }.into();
/// assert!(matches!(err, DirtreeError::Cli(_)));
/// assert!(err.to_string().contains("usage"));
/// ```
#[derive(Debug, Error)]
pub enum DirtreeError {
    /// CLI parsing error.
    #[error(transparent)]
    Cli(#[from] CliError),

    /// Directory scan error.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Output error.
    #[error(transparent)]
    Output(#[from] OutputError),
}

/// Result type alias for dirtree operations.
pub type DirtreeResult<T> = Result<T, DirtreeError>;

/// CLI argument errors.
///
/// # Examples
///
/// ```
/// use dirtree::error::CliError;
///
/// let err = CliError::WrongArgumentCount { given: 3 };
/// assert!(err.to_string().contains("dirtree <path> [-f]"));
/// assert!(err.to_string().contains("got 3"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Zero or more than two positional arguments were given.
    #[error("usage: dirtree <path> [-f] (expected 1 or 2 arguments, got {given})")]
    WrongArgumentCount {
        /// Number of arguments actually supplied.
        given: usize,
    },
}

/// Directory scanning errors.
///
/// Every variant carries the path it failed on so that nested failures can be
/// reported after the walk.
///
/// # Examples
///
/// ```
/// use std::io::{self, ErrorKind};
/// use std::path::PathBuf;
/// use dirtree::error::ScanError;
///
/// let err = ScanError::PathNotFound {
///     path: PathBuf::from("/nonexistent"),
///     source: io::Error::new(ErrorKind::NotFound, "no such file"),
/// };
/// assert!(err.to_string().contains("Path not found"));
/// assert!(err.to_string().contains("nonexistent"));
/// ```
#[derive(Debug, Error)]
pub enum ScanError {
    /// The specified path does not exist.
    #[error("Path not found: {path}")]
    PathNotFound {
        /// The non-existent path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The specified path is not a directory.
    #[error("Path is not a directory: {path}")]
    NotADirectory {
        /// The non-directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Permission was denied for the path.
    #[error("Permission denied: {path}")]
    PermissionDenied {
        /// The inaccessible path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Failed to read directory contents.
    #[error("Failed to read directory: {path}")]
    ReadDirFailed {
        /// The directory path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },

    /// Failed to retrieve entry metadata.
    #[error("Failed to retrieve metadata: {path}")]
    MetadataFailed {
        /// The entry path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Creates the matching scan error for an IO error raised while listing
    /// `path`.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io::{self, ErrorKind};
    /// use std::path::PathBuf;
    /// use dirtree::error::ScanError;
    ///
    /// let err = ScanError::from_io_error(
    ///     io::Error::new(ErrorKind::NotFound, "gone"),
    ///     PathBuf::from("/missing"),
    /// );
    /// assert!(matches!(err, ScanError::PathNotFound { .. }));
    ///
    /// let err = ScanError::from_io_error(
    ///     io::Error::new(ErrorKind::Other, "other"),
    ///     PathBuf::from("/dir"),
    /// );
    /// assert!(matches!(err, ScanError::ReadDirFailed { .. }));
    /// ```
    #[must_use]
    pub fn from_io_error(err: io::Error, path: PathBuf) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => Self::PathNotFound { path, source: err },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source: err },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path, source: err },
            _ => Self::ReadDirFailed { path, source: err },
        }
    }

    /// Path the failure occurred on.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::PathNotFound { path, .. }
            | Self::NotADirectory { path, .. }
            | Self::PermissionDenied { path, .. }
            | Self::ReadDirFailed { path, .. }
            | Self::MetadataFailed { path, .. } => path,
        }
    }
}

/// Output errors.
///
/// # Examples
///
/// ```
/// use std::io::{self, ErrorKind};
/// use dirtree::error::OutputError;
///
/// let err: OutputError = io::Error::new(ErrorKind::BrokenPipe, "closed").into();
/// assert!(err.to_string().contains("stdout"));
/// ```
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write to stdout.
    #[error("Failed to write to stdout")]
    StdoutFailed {
        /// The underlying IO error.
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> Self {
        Self::StdoutFailed { source: err }
    }
}
