//! HTTP prober implementation

use super::types::ProbeOutcome;
use crate::config::CheckConfig;
use crate::utils::error::{MonitorError, Result};
use crate::utils::format_duration;
use reqwest::{Client, StatusCode};
use std::error::Error as StdError;
use std::time::Duration;
use tracing::{error, info};

/// Anything that can check a single endpoint
///
/// The cycle runner only depends on this seam, so probes can be swapped
/// without touching fan-out or aggregation.
#[async_trait::async_trait]
pub trait EndpointProbe: Send + Sync + std::fmt::Debug {
    /// Check one URL; failures are reported in the outcome, never raised
    async fn probe(&self, url: &str) -> ProbeOutcome;
}

/// Issues one bounded GET per call
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    timeout: Duration,
}

impl Prober {
    /// Create a prober with a fixed per-request timeout and client header
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        if timeout.is_zero() {
            return Err(MonitorError::validation(
                "Probe timeout must be greater than 0",
            ));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, timeout })
    }

    /// Create a prober from the check configuration
    pub fn from_config(config: &CheckConfig) -> Result<Self> {
        Self::new(config.timeout(), &config.user_agent)
    }

    /// Probe one URL
    ///
    /// Never fails: every transport problem becomes a `Failed` outcome. No
    /// retries are attempted.
    pub async fn check(&self, url: &str) -> ProbeOutcome {
        match self.client.get(url).send().await {
            Ok(response) if response.status() == StatusCode::OK => {
                info!(url = %url, "URL [{}] returned OK", url);
                ProbeOutcome::Healthy
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let reason = format!(
                    "Error! Url [{}] is down, returned status code [{}]",
                    url, status
                );
                error!(url = %url, status, "URL [{}] returned status {}", url, status);
                ProbeOutcome::failed(url, reason)
            }
            Err(e) => {
                let reason = self.describe_transport_error(url, &e);
                error!(url = %url, "{}", reason);
                ProbeOutcome::failed(url, reason)
            }
        }
    }

    fn describe_transport_error(&self, url: &str, err: &reqwest::Error) -> String {
        let detail = error_chain(err);
        if err.is_timeout() {
            format!(
                "Error! Url [{}] timed out after {}: {}",
                url,
                format_duration(self.timeout),
                detail
            )
        } else if err.is_connect() {
            format!("Error! Url [{}] connection failed: {}", url, detail)
        } else {
            format!("Error! Url [{}] request failed: {}", url, detail)
        }
    }
}

#[async_trait::async_trait]
impl EndpointProbe for Prober {
    async fn probe(&self, url: &str) -> ProbeOutcome {
        self.check(url).await
    }
}

/// Render an error with all of its sources
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.contains(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
