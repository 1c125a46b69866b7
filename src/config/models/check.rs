//! Endpoint check configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Monitored endpoints plus probe timeout and cycle interval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// Endpoints probed every cycle
    #[serde(default)]
    pub urls: Vec<String>,
    /// Per-probe timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    /// Seconds between cycle starts
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
    /// `User-Agent` sent with every probe
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            urls: Vec::new(),
            timeout_secs: default_timeout(),
            interval_secs: default_interval(),
            user_agent: default_user_agent(),
        }
    }
}

impl CheckConfig {
    /// Per-probe timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Interval between cycle starts
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }
}
