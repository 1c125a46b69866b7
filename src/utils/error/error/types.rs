//! Error types for the monitor

use thiserror::Error;

/// Result type alias for the monitor
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Main error type for the monitor
///
/// Only configuration and startup failures are expected to reach `main`.
/// Probe and dispatch failures are contained inside the cycle that produced
/// them and never surface as a `MonitorError`.
#[derive(Error, Debug)]
pub enum MonitorError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Email service errors
    #[error("Email error: {0}")]
    Email(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
