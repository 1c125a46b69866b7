//! Logging setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`]. Output
//! always goes to stdout; when a log file is configured every line is also
//! appended there.

use crate::config::{LogFormat, LoggingConfig};
use crate::utils::error::{MonitorError, Result};
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

/// Install the global subscriber
///
/// `RUST_LOG`, when set and valid, takes precedence over the configured
/// level. Fails if a subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;

    let writer = match &config.file {
        Some(path) => {
            let file = open_log_file(path)?;
            BoxMakeWriter::new(std::io::stdout.and(Mutex::new(file)))
        }
        None => BoxMakeWriter::new(std::io::stdout),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.file.is_none())
        .with_target(false)
        .with_thread_ids(false);

    let installed = match config.format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| MonitorError::internal(format!("Failed to install logger: {}", e)))
}

/// Resolve the effective filter
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(level)
        .map_err(|e| MonitorError::config(format!("Invalid log level '{}': {}", level, e)))
}

/// Open a log file for appending, creating it if needed
pub fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| MonitorError::config(format!("Failed to open log file {:?}: {}", path, e)))
}
