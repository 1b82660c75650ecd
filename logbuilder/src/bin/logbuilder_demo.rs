use anyhow::{Context, Result};
use clap::Parser;
use logbuilder::{log_call, CallLogger, CallSummary, Level, LoggerRegistry, DEFAULT_LOG_DIRECTORY};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
struct Args {
    /// Logger name, also the log file's stem
    #[arg(short, long, default_value = "demo")]
    name: String,
    /// Initial threshold of the logger
    #[arg(short, long, default_value = "DEBUG")]
    level: Level,
    /// Level of the call records
    #[arg(long, default_value = "INFO")]
    call_level: String,
    /// Log directory (falls back to LOGBUILDER_DIR, then `log`)
    #[arg(short, long)]
    dir: Option<String>,
    #[arg(long)]
    silent: bool,
}

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    // Library diagnostics go to the global subscriber, off unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let directory = args
        .dir
        .or_else(|| std::env::var("LOGBUILDER_DIR").ok())
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTORY.to_string());

    let registry = LoggerRegistry::bootstrap(&directory)
        .with_context(|| format!("Failed to bootstrap logging in {}", directory))?;
    let logger = registry
        .setup_logger(&args.name, args.level, &directory)
        .context("Failed to set up demo logger")?;

    let traced = CallLogger::from_level_name(logger.clone(), args.silent, &args.call_level)
        .context("Invalid call level")?;

    let sum = log_call!(traced, add(1, 2));
    logger.info(format!("add(1, 2) = {}", sum));

    let summary = CallSummary::new()
        .arg(&"payload")
        .keyword("retries", &3)
        .keyword("body", &"x".repeat(64));
    let length = traced.invoke("upload", &summary, || 64usize);
    logger.info(format!("upload sent {} bytes", length));

    println!("Log written to {}", logger.log_file().display());
    Ok(())
}
