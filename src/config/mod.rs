//! Configuration management for the monitor
//!
//! Configuration is read exactly once at startup: an optional YAML file,
//! then environment overrides, then validation. Any failure here is fatal.

pub mod loader;
pub mod models;
pub mod validation;

pub use loader::load_dotenv;
pub use models::*;
pub use validation::Validate;

use crate::utils::error::{MonitorError, Result};
use std::path::Path;

/// Main configuration struct for the monitor
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Monitor configuration
    pub monitor: MonitorConfig,
}

impl Config {
    /// Load configuration from an optional file plus the environment
    ///
    /// Runs before the subscriber is installed, so nothing here logs.
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        load_dotenv()?;

        let mut monitor = match path {
            Some(path) => Self::read_file(path).await?,
            None => MonitorConfig::default(),
        };
        monitor.apply_env()?;

        let config = Self { monitor };
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let monitor = Self::read_file(path.as_ref()).await?;
        let config = Self { monitor };

        config.validate()?;
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<MonitorConfig> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| MonitorError::Config(format!("Failed to read config file: {}", e)))?;

        serde_yaml::from_str(&content)
            .map_err(|e| MonitorError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get SMTP configuration
    pub fn smtp(&self) -> &SmtpConfig {
        &self.monitor.smtp
    }

    /// Get alert configuration
    pub fn alert(&self) -> &AlertConfig {
        &self.monitor.alert
    }

    /// Get check configuration
    pub fn check(&self) -> &CheckConfig {
        &self.monitor.check
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.monitor.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        self.monitor
            .smtp
            .validate()
            .map_err(|e| MonitorError::Config(format!("SMTP config error: {}", e)))?;

        self.monitor
            .alert
            .validate()
            .map_err(|e| MonitorError::Config(format!("Alert config error: {}", e)))?;

        self.monitor
            .check
            .validate()
            .map_err(|e| MonitorError::Config(format!("Check config error: {}", e)))?;

        self.monitor
            .logging
            .validate()
            .map_err(|e| MonitorError::Config(format!("Logging config error: {}", e)))?;

        Ok(())
    }
}
