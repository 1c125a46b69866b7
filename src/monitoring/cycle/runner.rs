//! Cycle runner implementation

use super::report::CycleReport;
use crate::monitoring::alerts::AlertDispatcher;
use crate::monitoring::probe::{EndpointProbe, ProbeOutcome};
use crate::utils::format_duration;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinError;
use tracing::{error, info, warn};

/// Runs one check-and-aggregate cycle per call
///
/// The URL set is shared read-only between cycles. Each cycle spawns one
/// task per URL and collects the results by position, so no probe ever
/// writes to shared state.
#[derive(Debug, Clone)]
pub struct CycleRunner {
    urls: Arc<[String]>,
    probe: Arc<dyn EndpointProbe>,
    dispatcher: AlertDispatcher,
    recipient: String,
}

impl CycleRunner {
    /// Create a new cycle runner
    pub fn new<U, R>(
        urls: U,
        probe: Arc<dyn EndpointProbe>,
        dispatcher: AlertDispatcher,
        recipient: R,
    ) -> Self
    where
        U: Into<Arc<[String]>>,
        R: Into<String>,
    {
        Self {
            urls: urls.into(),
            probe,
            dispatcher,
            recipient: recipient.into(),
        }
    }

    /// Monitored URLs
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    /// Alert dispatcher used by this runner
    pub fn dispatcher(&self) -> &AlertDispatcher {
        &self.dispatcher
    }

    /// Run one full cycle
    ///
    /// Returns after every probe has resolved and, when something failed,
    /// after the single alert dispatch attempt has finished.
    pub async fn run_cycle(&self) -> CycleReport {
        let started_at = chrono::Utc::now();
        let started = Instant::now();

        let outcomes = self.probe_all().await;
        let report = CycleReport::from_outcomes(started_at, started.elapsed(), outcomes);

        if let Some(body) = report.alert_body() {
            warn!(
                "{} of {} URLs failed, sending alert to {}",
                report.failures().len(),
                report.probed(),
                self.recipient
            );
            self.dispatcher.send_alert(&self.recipient, &body).await;
        }

        info!(
            started_at = %report.started_at().to_rfc3339(),
            probed = report.probed(),
            failed = report.failures().len(),
            "Cycle finished in {}",
            format_duration(report.elapsed())
        );

        report
    }

    /// Fan out one task per URL and fan the outcomes back in by position
    async fn probe_all(&self) -> Vec<ProbeOutcome> {
        let handles: Vec<_> = self
            .urls
            .iter()
            .map(|url| {
                let probe = Arc::clone(&self.probe);
                let url = url.clone();
                tokio::spawn(async move { probe.probe(&url).await })
            })
            .collect();

        join_all(handles)
            .await
            .into_iter()
            .zip(self.urls.iter())
            .map(|(joined, url)| joined.unwrap_or_else(|e| Self::lost_probe(url, e)))
            .collect()
    }

    /// Outcome for a probe task that died instead of returning
    fn lost_probe(url: &str, err: JoinError) -> ProbeOutcome {
        let reason = if err.is_panic() {
            format!("Error! Url [{}] probe crashed: {}", url, err)
        } else {
            format!("Error! Url [{}] probe was cancelled: {}", url, err)
        };
        error!(url = %url, "{}", reason);
        ProbeOutcome::failed(url, reason)
    }
}
