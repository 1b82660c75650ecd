#![allow(dead_code)]

use logbuilder::{Level, Logger, LoggerConfig, LoggerRegistry};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// In-memory console that tests can read back.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Logger in `dir` whose console output lands in the returned buffer.
pub fn captured_logger(
    registry: &LoggerRegistry,
    name: &str,
    level: Level,
    dir: &Path,
) -> (Arc<Logger>, SharedBuffer) {
    let console = SharedBuffer::default();
    let config = LoggerConfig::new(name)
        .with_level(level)
        .with_directory(dir);
    let logger = registry
        .get_or_create_with_console(&config, console.clone())
        .unwrap();
    (logger, console)
}

/// Message part of every line in the logger's file.
pub fn file_messages(logger: &Logger) -> Vec<String> {
    std::fs::read_to_string(logger.log_file())
        .unwrap()
        .lines()
        .map(|line| line.splitn(4, " | ").nth(3).unwrap_or_default().to_string())
        .collect()
}

/// Level part of every line in the logger's file.
pub fn file_levels(logger: &Logger) -> Vec<String> {
    std::fs::read_to_string(logger.log_file())
        .unwrap()
        .lines()
        .map(|line| line.splitn(4, " | ").nth(2).unwrap_or_default().to_string())
        .collect()
}
