//! Configuration loading utilities
//!
//! Environment overrides are applied on top of whatever the YAML file
//! provided. Every variable is optional; empty values are ignored.

use super::models::*;
use crate::utils::error::{MonitorError, Result};
use std::env;
use std::str::FromStr;

impl MonitorConfig {
    /// Apply overrides from the process environment
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok().filter(|v| !v.is_empty()))
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        // SMTP configuration
        if let Some(host) = lookup("SMTP_HOST") {
            self.smtp.host = host;
        }
        if let Some(port) = lookup("SMTP_PORT") {
            self.smtp.port = parse_var("SMTP_PORT", &port)?;
        }
        if let Some(user) = lookup("SMTP_USER") {
            self.smtp.username = user;
        }
        if let Some(pass) = lookup("SMTP_PASS") {
            self.smtp.password = pass;
        }
        if let Some(security) = lookup("SMTP_SECURITY") {
            self.smtp.security = security.parse().map_err(MonitorError::Config)?;
        }
        if let Some(from) = lookup("SMTP_FROM") {
            self.smtp.from = Some(from);
        }

        // Alert configuration
        if let Some(recipient) = lookup("ALERT_TO_EMAIL") {
            self.alert.recipient = recipient;
        }
        if let Some(subject) = lookup("ALERT_SUBJECT") {
            self.alert.subject = subject;
        }

        // Check configuration
        if let Some(urls) = lookup("MONITORED_URLS") {
            self.check.urls = split_list(&urls);
        }
        if let Some(timeout) = lookup("CHECK_TIMEOUT") {
            self.check.timeout_secs = parse_var("CHECK_TIMEOUT", &timeout)?;
        }
        if let Some(interval) = lookup("CHECK_INTERVAL") {
            self.check.interval_secs = parse_var("CHECK_INTERVAL", &interval)?;
        }
        if let Some(user_agent) = lookup("CHECK_USER_AGENT") {
            self.check.user_agent = user_agent;
        }

        // Logging configuration
        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("LOG_FORMAT") {
            self.logging.format = format.parse().map_err(MonitorError::Config)?;
        }
        if let Some(file) = lookup("LOG_FILE") {
            self.logging.file = Some(file.into());
        }

        Ok(())
    }
}

/// Load a `.env` file from the working directory if there is one
///
/// A missing file is fine; one that exists but cannot be parsed is a
/// configuration error.
pub fn load_dotenv() -> Result<()> {
    match dotenvy::dotenv() {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(MonitorError::Config(format!("Failed to load .env file: {}", e))),
    }
}

fn parse_var<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| MonitorError::Config(format!("Invalid {}: {}", key, e)))
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}
