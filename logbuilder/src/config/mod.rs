use crate::level::Level;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory used when the caller does not name one.
pub const DEFAULT_LOG_DIRECTORY: &str = "log";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub name: String,
    pub level: Level,
    pub directory: PathBuf,
    pub console: ConsoleTarget,
    pub rotation: FileRotation,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            level: Level::Debug,
            directory: PathBuf::from(DEFAULT_LOG_DIRECTORY),
            console: ConsoleTarget::Stderr,
            rotation: FileRotation::Never,
        }
    }
}

impl LoggerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_directory(mut self, directory: impl AsRef<Path>) -> Self {
        self.directory = directory.as_ref().to_path_buf();
        self
    }

    pub fn with_console(mut self, console: ConsoleTarget) -> Self {
        self.console = console;
        self
    }

    pub fn with_rotation(mut self, rotation: FileRotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// File name stem for this logger. Separators that are invalid in file
    /// names (`::` from module paths included) are replaced with `_`.
    pub fn file_stem(&self) -> String {
        self.name.replace([':', '/', '\\'], "_")
    }

    /// Name of the file the sink writes at `now`. Rotating sinks put the
    /// UTC date (and hour) between the stem and the extension.
    pub fn file_name_at(&self, now: DateTime<Utc>) -> String {
        let stem = self.file_stem();
        let date = match self.rotation {
            FileRotation::Never => return format!("{}.log", stem),
            FileRotation::Hourly => now.format("%Y-%m-%d-%H").to_string(),
            FileRotation::Daily => now.format("%Y-%m-%d").to_string(),
        };
        if stem.is_empty() {
            format!("{}.log", date)
        } else {
            format!("{}.{}.log", stem, date)
        }
    }

    /// Path of the file the sink is writing to right now.
    pub fn log_file(&self) -> PathBuf {
        self.directory.join(self.file_name_at(Utc::now()))
    }
}

/// Stream that receives the console sink's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stderr,
    Stdout,
}

/// How often the file sink starts a new file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRotation {
    #[default]
    Never,
    Hourly,
    Daily,
}

impl From<FileRotation> for tracing_appender::rolling::Rotation {
    fn from(rotation: FileRotation) -> Self {
        match rotation {
            FileRotation::Never => tracing_appender::rolling::Rotation::NEVER,
            FileRotation::Hourly => tracing_appender::rolling::Rotation::HOURLY,
            FileRotation::Daily => tracing_appender::rolling::Rotation::DAILY,
        }
    }
}
