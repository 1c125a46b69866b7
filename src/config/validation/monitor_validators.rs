//! Monitor configuration validators
//!
//! Validation implementations for each section of MonitorConfig.

use super::Validate;
use crate::config::models::*;
use lettre::message::Mailbox;
use std::collections::HashSet;
use tracing_subscriber::EnvFilter;

impl Validate for SmtpConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("SMTP host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("SMTP port must be greater than 0".to_string());
        }

        if self.sender().is_empty() {
            return Err("SMTP sender is required: set username or from".to_string());
        }

        self.sender()
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid SMTP sender '{}': {}", self.sender(), e))?;

        Ok(())
    }
}

impl Validate for AlertConfig {
    fn validate(&self) -> Result<(), String> {
        if self.recipient.is_empty() {
            return Err("Alert recipient cannot be empty".to_string());
        }

        self.recipient
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid alert recipient '{}': {}", self.recipient, e))?;

        if self.subject.trim().is_empty() {
            return Err("Alert subject cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<(), String> {
        if self.urls.is_empty() {
            return Err("At least one monitored URL is required".to_string());
        }

        let mut seen = HashSet::new();
        for url in &self.urls {
            let parsed =
                url::Url::parse(url).map_err(|e| format!("Invalid URL '{}': {}", url, e))?;

            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(format!(
                    "URL '{}' must use http or https, got '{}'",
                    url,
                    parsed.scheme()
                ));
            }

            if !seen.insert(url.as_str()) {
                return Err(format!("Duplicate monitored URL: {}", url));
            }
        }

        if self.timeout_secs == 0 {
            return Err("Check timeout must be greater than 0".to_string());
        }

        if self.interval_secs == 0 {
            return Err("Check interval must be greater than 0".to_string());
        }

        if self.user_agent.trim().is_empty() {
            return Err("User agent cannot be empty".to_string());
        }

        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        EnvFilter::try_new(&self.level)
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))?;

        if let Some(file) = &self.file {
            if file.as_os_str().is_empty() {
                return Err("Log file path cannot be empty".to_string());
            }
        }

        Ok(())
    }
}
