//! Configuration validation
//!
//! - `monitor_validators`: Validators for every section of the monitor config
//! - `tests`: Test suite for all validators

mod monitor_validators;

/// Validation trait for configuration sections
///
/// Errors are plain messages; `Config::validate` wraps them into
/// `MonitorError::Config` with the section name prepended.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
