mod common;

use common::{captured_logger, file_levels, file_messages};
use logbuilder::{
    FileRotation, Level, LogBuilderError, LoggerConfig, LoggerRegistry, Sink, BOOTSTRAP_LOGGER,
};
use std::sync::Arc;
use std::thread;

#[test]
fn test_fresh_logger_creates_file_with_creation_record() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();

    let logger = registry
        .setup_logger("billing", Level::Debug, temp_dir.path())
        .unwrap();

    let path = temp_dir.path().join("billing.log");
    assert_eq!(logger.log_file(), path);
    assert!(path.exists());

    let messages = file_messages(&logger);
    assert_eq!(
        messages,
        vec![format!(
            "Finished creating log file {} with logging level DEBUG",
            path.display()
        )]
    );
    assert_eq!(file_levels(&logger), vec!["DEBUG"]);
}

#[test]
fn test_creates_missing_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let log_dir = temp_dir.path().join("log");
    let registry = LoggerRegistry::new();

    let logger = registry.setup_logger("api", Level::Debug, &log_dir).unwrap();

    assert!(log_dir.is_dir());
    assert!(logger.log_file().exists());
}

#[test]
fn test_missing_parent_directory_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let log_dir = temp_dir.path().join("a").join("b");
    let registry = LoggerRegistry::new();

    let err = registry
        .setup_logger("api", Level::Debug, &log_dir)
        .unwrap_err();

    assert!(matches!(err, LogBuilderError::CreateDirectory { .. }));
    assert!(!registry.contains("api"));
}

#[test]
fn test_same_name_returns_same_logger_without_new_sinks() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();

    let (first, console) = captured_logger(&registry, "orders", Level::Debug, temp_dir.path());
    let (second, unused_console) =
        captured_logger(&registry, "orders", Level::Debug, temp_dir.path());

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.sinks().len(), 2);
    assert_eq!(registry.len(), 1);

    second.info("order placed");

    // One creation record plus one info record: no duplicated sinks
    assert_eq!(file_messages(&first).len(), 2);
    assert_eq!(console.lines(), vec!["order placed"]);
    assert!(unused_console.contents().is_empty());
}

#[test]
fn test_console_only_receives_info() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();
    let (logger, console) = captured_logger(&registry, "console", Level::Debug, temp_dir.path());

    logger.debug("debug detail");
    logger.info("info line");
    logger.warning("warning line");
    logger.error("error line");
    logger.critical("critical line");

    assert_eq!(console.lines(), vec!["info line"]);
    assert_eq!(
        file_levels(&logger),
        vec!["DEBUG", "DEBUG", "INFO", "WARNING", "ERROR", "CRITICAL"]
    );
}

#[test]
fn test_threshold_applies_to_both_sinks() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();
    let (logger, console) = captured_logger(&registry, "quiet", Level::Warning, temp_dir.path());

    // Creation record is DEBUG and therefore dropped
    assert!(file_messages(&logger).is_empty());

    logger.info("hidden");
    logger.warning("shown");
    assert_eq!(file_messages(&logger), vec!["shown"]);
    assert!(console.contents().is_empty());

    logger.set_level(Level::Info);
    logger.info("now visible");
    assert_eq!(file_messages(&logger), vec!["shown", "now visible"]);
    assert_eq!(console.lines(), vec!["now visible"]);
}

#[test]
fn test_file_is_appended_across_registries() {
    let temp_dir = tempfile::tempdir().unwrap();

    {
        let registry = LoggerRegistry::new();
        let logger = registry
            .setup_logger("jobs", Level::Debug, temp_dir.path())
            .unwrap();
        logger.info("first run");
    }

    let registry = LoggerRegistry::new();
    let logger = registry
        .setup_logger("jobs", Level::Debug, temp_dir.path())
        .unwrap();
    logger.info("second run");

    let messages = file_messages(&logger);
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[1], "first run");
    assert_eq!(messages[3], "second run");
}

#[test]
fn test_module_path_names_are_sanitized() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();

    let logger = registry
        .setup_logger("app::net", Level::Debug, temp_dir.path())
        .unwrap();

    assert_eq!(logger.name(), "app::net");
    assert_eq!(logger.log_file(), temp_dir.path().join("app__net.log"));
    assert!(registry.contains("app::net"));

    let line = std::fs::read_to_string(logger.log_file()).unwrap();
    assert!(line.contains(" | app::net | DEBUG | "));
}

#[test]
fn test_empty_name_writes_dot_log() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();

    let logger = registry.setup_logger("", Level::Debug, temp_dir.path()).unwrap();
    logger.info("x");

    let path = temp_dir.path().join(".log");
    assert_eq!(logger.log_file(), path);
    assert!(path.exists());
    assert!(!temp_dir.path().join("log").exists());
    assert_eq!(file_messages(&logger).last().unwrap(), "x");
}

#[test]
fn test_rotating_logger_reports_the_file_it_writes() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();

    let config = LoggerConfig::new("hr")
        .with_directory(temp_dir.path())
        .with_rotation(FileRotation::Hourly);
    let logger = registry.get_or_create(&config).unwrap();
    logger.warning("rotated record");

    let written: Vec<String> = std::fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(written.len(), 1);
    assert!(written[0].starts_with("hr.") && written[0] != "hr.log");
    assert_eq!(logger.log_file(), temp_dir.path().join(&written[0]));

    let messages = file_messages(&logger);
    assert_eq!(
        messages,
        vec![
            format!(
                "Finished creating log file {} with logging level DEBUG",
                logger.log_file().display()
            ),
            "rotated record".to_string(),
        ]
    );
    assert_eq!(
        logger.sinks()[0],
        Sink::File {
            directory: temp_dir.path().to_path_buf(),
            stem: "hr".to_string(),
            rotation: FileRotation::Hourly,
        }
    );
}

#[test]
fn test_concurrent_requests_create_one_logger() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = Arc::new(LoggerRegistry::new());
    let dir = temp_dir.path().to_path_buf();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = registry.clone();
            let dir = dir.clone();
            thread::spawn(move || registry.setup_logger("shared", Level::Debug, &dir).unwrap())
        })
        .collect();

    let loggers: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for logger in &loggers[1..] {
        assert!(Arc::ptr_eq(&loggers[0], logger));
    }
    assert_eq!(registry.len(), 1);
    assert_eq!(file_messages(&loggers[0]).len(), 1);
}

#[test]
fn test_bootstrap_logs_library_startup() {
    let temp_dir = tempfile::tempdir().unwrap();

    let registry = LoggerRegistry::bootstrap(temp_dir.path()).unwrap();

    let logger = registry.get(BOOTSTRAP_LOGGER).unwrap();
    assert_eq!(registry.names(), vec![BOOTSTRAP_LOGGER.to_string()]);
    let messages = file_messages(&logger);
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1], "Finished defining logging tools logbuilder");
}

#[test]
fn test_sinks_reflect_config() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();

    let config = LoggerConfig::new("streams")
        .with_directory(temp_dir.path())
        .with_console(logbuilder::ConsoleTarget::Stdout);
    let logger = registry.get_or_create(&config).unwrap();

    assert_eq!(
        logger.sinks()[1],
        Sink::Console {
            target: Some(logbuilder::ConsoleTarget::Stdout)
        }
    );
    assert!(matches!(logger.sinks()[0], Sink::File { .. }));
}

#[test]
fn test_registry_inspection() {
    let temp_dir = tempfile::tempdir().unwrap();
    let registry = LoggerRegistry::new();
    assert!(registry.is_empty());

    registry.setup_logger("b", Level::Info, temp_dir.path()).unwrap();
    registry.setup_logger("a", Level::Info, temp_dir.path()).unwrap();

    assert_eq!(registry.names(), vec!["a", "b"]);
    assert!(registry.get("c").is_none());
    assert_eq!(registry.get("a").unwrap().level(), Level::Info);
}
