//! # Error Types
//!
//! Centralized error definitions for the logbuilder crate.
//! All errors implement `std::error::Error` and `std::fmt::Display`.

use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::rolling::InitError;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LogBuilderError>;

/// Errors raised while building loggers or call loggers.
///
/// I/O failures are not translated: the underlying error is kept as the
/// `source` so callers can inspect the platform's own diagnosis.
#[derive(Error, Debug)]
pub enum LogBuilderError {
    #[error("Unrecognized log level: '{level}' (expected one of CRITICAL, ERROR, WARNING, INFO, DEBUG)")]
    UnrecognizedLevel { level: String },

    #[error("Failed to create logging directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open log file {}: {source}", .path.display())]
    OpenLogFile {
        path: PathBuf,
        #[source]
        source: InitError,
    },
}

impl LogBuilderError {
    pub(crate) fn unrecognized_level(level: impl Into<String>) -> Self {
        LogBuilderError::UnrecognizedLevel {
            level: level.into(),
        }
    }
}
