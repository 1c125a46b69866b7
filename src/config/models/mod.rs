//! Configuration data models
//!
//! This module defines all configuration structures used throughout the monitor.

#![allow(missing_docs)]

pub mod alert;
pub mod check;
pub mod logging;
pub mod monitor;
pub mod smtp;

// Re-export all configuration types
pub use alert::*;
pub use check::*;
pub use logging::*;
pub use monitor::*;
pub use smtp::*;

/// Default SMTP port (implicit TLS)
pub fn default_smtp_port() -> u16 {
    465
}

/// Default per-probe timeout in seconds
pub fn default_timeout() -> u64 {
    10
}

/// Default interval between cycles in seconds
pub fn default_interval() -> u64 {
    300 // 5 minutes
}

/// Default identifying client header value
pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Default alert subject line
pub fn default_alert_subject() -> String {
    "Website Monitor Alert".to_string()
}

/// Default log filter directive
pub fn default_log_level() -> String {
    "info".to_string()
}
