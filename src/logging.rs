//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::AppError;

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogSink {
    /// Interactive UI: stdout belongs to the terminal, so only a log file
    /// is acceptable.
    FileOnly,
    /// Non-interactive commands: the log file if configured, else stderr.
    FileOrStderr,
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Install the global subscriber. Returns `Ok(false)` when nothing was
/// installed because no sink applies.
pub fn init_tracing(config: &LoggingConfig, sink: LogSink) -> Result<bool, AppError> {
    match (&config.file, sink) {
        (Some(path), _) => init_file(path, &config.level).map(|_| true),
        (None, LogSink::FileOnly) => Ok(false),
        (None, LogSink::FileOrStderr) => tracing_subscriber::fmt()
            .with_env_filter(env_filter(&config.level))
            .with_target(true)
            .with_level(true)
            .with_timer(UtcTime::rfc_3339())
            .with_writer(std::io::stderr)
            .try_init()
            .map(|_| true)
            .map_err(|e| AppError::Logging(e.to_string())),
    }
}

fn init_file(path: &Path, level: &str) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(level))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}
