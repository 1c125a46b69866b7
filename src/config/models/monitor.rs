//! Top-level monitor configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Root of the monitor configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MonitorConfig {
    /// Outbound mail server
    #[serde(default)]
    pub smtp: SmtpConfig,
    /// Alert addressing
    #[serde(default)]
    pub alert: AlertConfig,
    /// Monitored endpoints and cadence
    #[serde(default)]
    pub check: CheckConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}
