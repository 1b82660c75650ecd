use crate::config::{ConsoleTarget, FileRotation, LoggerConfig};
use crate::error::{LogBuilderError, Result};
use chrono::Local;
use std::fmt;
use tracing::{Dispatch, Event, Metadata, Subscriber};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    filter::{filter_fn, FilterFn, LevelFilter},
    fmt::{
        format::Writer, writer::BoxMakeWriter, FmtContext, FormatEvent, FormatFields, MakeWriter,
    },
    prelude::*,
    registry::LookupSpan,
    Layer,
};

/// Builds the dispatcher behind one named logger: a file layer that accepts
/// every level and a console layer that accepts INFO only.
pub(crate) fn build_dispatch<W>(config: &LoggerConfig, console_writer: W) -> Result<Dispatch>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    // An empty prefix is dropped by the builder, so a non-rotating sink
    // carries the whole file name in the prefix.
    let builder = match config.rotation {
        FileRotation::Never => RollingFileAppender::builder()
            .filename_prefix(format!("{}.log", config.file_stem())),
        rotation => RollingFileAppender::builder()
            .rotation(rotation.into())
            .filename_prefix(config.file_stem())
            .filename_suffix("log"),
    };
    let file_appender = builder
        .build(&config.directory)
        .map_err(|source| LogBuilderError::OpenLogFile {
            path: config.log_file(),
            source,
        })?;

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .event_format(FileFormatter::new(&config.name))
        .with_filter(LevelFilter::TRACE);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_writer(console_writer)
        .with_ansi(false)
        .event_format(ConsoleFormatter)
        .with_filter(exact_level(tracing::Level::INFO));

    let subscriber = tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer);

    Ok(Dispatch::new(subscriber))
}

pub(crate) fn console_writer(target: ConsoleTarget) -> BoxMakeWriter {
    match target {
        ConsoleTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        ConsoleTarget::Stdout => BoxMakeWriter::new(std::io::stdout),
    }
}

/// Passes records at exactly `level` and suppresses everything else.
pub(crate) fn exact_level(
    level: tracing::Level,
) -> FilterFn<impl Fn(&Metadata<'_>) -> bool + Send + Sync + 'static> {
    filter_fn(move |metadata| *metadata.level() == level)
}

// --- Formatters ---

#[derive(Default)]
struct RecordVisitor {
    message: String,
    severity: Option<String>,
}

impl tracing::field::Visit for RecordVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{:?}", value),
            "severity" => self.severity = Some(format!("{:?}", value)),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        match field.name() {
            "message" => self.message = value.to_string(),
            "severity" => self.severity = Some(value.to_string()),
            _ => {}
        }
    }
}

/// `timestamp | name | LEVEL | message`
pub(crate) struct FileFormatter {
    logger_name: String,
}

impl FileFormatter {
    pub(crate) fn new(logger_name: &str) -> Self {
        Self {
            logger_name: logger_name.to_string(),
        }
    }
}

impl<S, N> FormatEvent<S, N> for FileFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);

        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        let level = visitor
            .severity
            .unwrap_or_else(|| event.metadata().level().to_string());

        writeln!(
            writer,
            "{} | {} | {} | {}",
            timestamp, self.logger_name, level, visitor.message
        )
    }
}

/// Message text only.
pub(crate) struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        writeln!(writer, "{}", visitor.message)
    }
}
