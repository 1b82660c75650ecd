//! Named logger handle.
//!
//! A [`Logger`] owns its own `tracing` dispatcher with exactly two sinks:
//! a file sink that records every level and a console sink that only
//! shows INFO records. Records below the logger's threshold are dropped
//! before they reach either sink.

use crate::config::{ConsoleTarget, FileRotation, LoggerConfig};
use crate::error::Result;
use crate::level::Level;
use crate::utils::sinks;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;

/// Where a logger's records are delivered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// All levels, `timestamp | name | LEVEL | message`, in `directory`.
    /// Rotating sinks add the date to `stem` in each file name.
    File {
        directory: PathBuf,
        stem: String,
        rotation: FileRotation,
    },
    /// INFO only, message text. `target` is `None` for a caller-supplied writer.
    Console { target: Option<ConsoleTarget> },
}

#[derive(Debug)]
pub struct Logger {
    name: String,
    threshold: AtomicU8,
    file: LoggerConfig,
    sinks: [Sink; 2],
    dispatch: Dispatch,
}

impl Logger {
    pub(crate) fn build<W>(
        config: &LoggerConfig,
        console_writer: W,
        console_target: Option<ConsoleTarget>,
    ) -> Result<Self>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        let dispatch = sinks::build_dispatch(config, console_writer)?;

        Ok(Self {
            name: config.name.clone(),
            threshold: AtomicU8::new(config.level as u8),
            sinks: [
                Sink::File {
                    directory: config.directory.clone(),
                    stem: config.file_stem(),
                    rotation: config.rotation,
                },
                Sink::Console {
                    target: console_target,
                },
            ],
            file: config.clone(),
            dispatch,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current minimum severity.
    pub fn level(&self) -> Level {
        Level::from_u8(self.threshold.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: Level) {
        self.threshold.store(level as u8, Ordering::Relaxed);
    }

    pub fn is_enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// File the sink is currently writing. For rotating sinks this changes
    /// when the date (or hour) does.
    pub fn log_file(&self) -> PathBuf {
        self.file.log_file()
    }

    pub fn sinks(&self) -> &[Sink] {
        &self.sinks
    }

    pub fn log(&self, level: Level, message: impl fmt::Display) {
        if !self.is_enabled(level) {
            return;
        }

        let severity = level.as_str();
        tracing::dispatcher::with_default(&self.dispatch, || match level.to_tracing() {
            tracing::Level::ERROR => tracing::error!(severity, "{}", message),
            tracing::Level::WARN => tracing::warn!(severity, "{}", message),
            tracing::Level::INFO => tracing::info!(severity, "{}", message),
            tracing::Level::DEBUG => tracing::debug!(severity, "{}", message),
            _ => tracing::trace!(severity, "{}", message),
        });
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Level::Critical, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Level::Error, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Level::Warning, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Level::Info, message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Level::Debug, message);
    }
}
