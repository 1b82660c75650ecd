//! # logbuilder - Call Logging and Per-Name Loggers
//!
//! This crate provides two small tools on top of `tracing`: a wrapper that
//! logs every call to a function together with a summary of its arguments,
//! and a factory that builds named loggers writing to their own file and to
//! the console.
//!
//! ## Modules
//!
//! - [`call_logger`] - Function wrappers that log each call
//! - [`config`] - Logger configuration
//! - [`error`] - Typed error handling with thiserror
//! - [`level`] - Severity levels
//! - [`logger`] - Named logger handle with file and console sinks
//! - [`registry`] - Logger factory keyed by name

pub mod call_logger;
pub mod config;
pub mod error;
pub mod level;
pub mod logger;
pub mod registry;
pub(crate) mod utils;

pub use call_logger::{Arguments, CallLogger, CallSummary, Invoke, Logged};
pub use config::{ConsoleTarget, FileRotation, LoggerConfig, DEFAULT_LOG_DIRECTORY};
pub use error::{LogBuilderError, Result};
pub use level::Level;
pub use logger::{Logger, Sink};
pub use registry::{LoggerRegistry, BOOTSTRAP_LOGGER};

// Argument summaries are reusable outside of call logging
pub use utils::{describe, MAX_REPR_LEN};
