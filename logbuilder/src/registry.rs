//! Logger factory.
//!
//! [`LoggerRegistry`] maps logger names to [`Logger`] handles. The first
//! request for a name creates the log directory, opens `<dir>/<name>.log`
//! and wires the file and console sinks. Later requests for the same name
//! return the existing handle untouched, so sinks are never attached twice.

use crate::config::{LoggerConfig, DEFAULT_LOG_DIRECTORY};
use crate::error::{LogBuilderError, Result};
use crate::level::Level;
use crate::logger::Logger;
use crate::utils::sinks;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::{Arc, RwLock};
use tracing::debug;
use tracing_subscriber::fmt::MakeWriter;

/// Name of the logger the library uses for its own bootstrap record.
pub const BOOTSTRAP_LOGGER: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Default)]
pub struct LoggerRegistry {
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry and logs the library's own startup through a
    /// logger named [`BOOTSTRAP_LOGGER`] in `directory`.
    pub fn bootstrap(directory: impl AsRef<Path>) -> Result<Self> {
        let registry = Self::new();
        let logger = registry.get_or_create(
            &LoggerConfig::new(BOOTSTRAP_LOGGER).with_directory(directory),
        )?;
        logger.debug(format!("Finished defining logging tools {}", BOOTSTRAP_LOGGER));
        Ok(registry)
    }

    /// Returns the logger called `name`, creating it in `directory` with
    /// threshold `level` on first use.
    pub fn setup_logger(
        &self,
        name: &str,
        level: Level,
        directory: impl AsRef<Path>,
    ) -> Result<Arc<Logger>> {
        self.get_or_create(
            &LoggerConfig::new(name)
                .with_level(level)
                .with_directory(directory),
        )
    }

    /// [`setup_logger`](Self::setup_logger) with DEBUG and the default
    /// `log` directory.
    pub fn setup_default(&self, name: &str) -> Result<Arc<Logger>> {
        self.setup_logger(name, Level::Debug, DEFAULT_LOG_DIRECTORY)
    }

    pub fn get_or_create(&self, config: &LoggerConfig) -> Result<Arc<Logger>> {
        self.get_or_insert_with(config, || {
            Logger::build(
                config,
                sinks::console_writer(config.console),
                Some(config.console),
            )
        })
    }

    /// Like [`get_or_create`](Self::get_or_create) but the console sink writes
    /// to `console_writer` instead of a standard stream. Ignored when the
    /// logger already exists.
    pub fn get_or_create_with_console<W>(
        &self,
        config: &LoggerConfig,
        console_writer: W,
    ) -> Result<Arc<Logger>>
    where
        W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    {
        self.get_or_insert_with(config, || Logger::build(config, console_writer, None))
    }

    fn get_or_insert_with<F>(&self, config: &LoggerConfig, build: F) -> Result<Arc<Logger>>
    where
        F: FnOnce() -> Result<Logger>,
    {
        // Fast path: logger exists
        if let Some(logger) = self.get(&config.name) {
            debug!(logger = %config.name, "Reusing registered logger");
            return Ok(logger);
        }

        // Slow path: create new logger
        let mut loggers = self.loggers.write().unwrap_or_else(|e| e.into_inner());

        // Double-check (another thread might have created it)
        if let Some(logger) = loggers.get(&config.name) {
            return Ok(logger.clone());
        }

        ensure_directory(&config.directory)?;
        let logger = Arc::new(build()?);
        loggers.insert(config.name.clone(), logger.clone());
        drop(loggers);

        logger.debug(format!(
            "Finished creating log file {} with logging level {}",
            logger.log_file().display(),
            config.level
        ));

        Ok(logger)
    }

    pub fn get(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(name)
            .cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.loggers.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .loggers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

/// Creates `directory` if it is missing. Parents are not created.
fn ensure_directory(directory: &Path) -> Result<()> {
    if directory.is_dir() {
        return Ok(());
    }
    match std::fs::create_dir(directory) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && directory.is_dir() => Ok(()),
        Err(source) => Err(LogBuilderError::CreateDirectory {
            path: directory.to_path_buf(),
            source,
        }),
    }
}
