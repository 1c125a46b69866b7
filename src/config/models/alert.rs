//! Alert configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Where and how failure alerts are addressed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertConfig {
    /// Operator mailbox receiving alerts
    #[serde(default)]
    pub recipient: String,
    /// Fixed subject line
    #[serde(default = "default_alert_subject")]
    pub subject: String,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            subject: default_alert_subject(),
        }
    }
}
