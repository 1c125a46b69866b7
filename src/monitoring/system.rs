//! Monitor wiring

use super::alerts::{AlertDispatcher, EmailChannel, NotificationChannel};
use super::cycle::{CycleReport, CycleRunner};
use super::probe::{EndpointProbe, Prober};
use super::scheduler::{Scheduler, SchedulerStats};
use crate::config::Config;
use crate::utils::error::Result;
use crate::utils::format_duration;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tracing::info;

/// Probes, alerts and schedule assembled from one validated configuration
#[derive(Debug, Clone)]
pub struct Monitor {
    runner: CycleRunner,
    scheduler: Scheduler,
}

impl Monitor {
    /// Create a monitor that alerts over SMTP
    pub fn new(config: &Config) -> Result<Self> {
        let channel = Arc::new(EmailChannel::new(config.smtp())?);
        Self::with_channel(config, channel)
    }

    /// Create a monitor that alerts through the given channel
    pub fn with_channel(config: &Config, channel: Arc<dyn NotificationChannel>) -> Result<Self> {
        let probe = Arc::new(Prober::from_config(config.check())?);
        Self::with_parts(config, probe, channel)
    }

    /// Create a monitor from explicit probe and channel implementations
    pub fn with_parts(
        config: &Config,
        probe: Arc<dyn EndpointProbe>,
        channel: Arc<dyn NotificationChannel>,
    ) -> Result<Self> {
        let dispatcher = AlertDispatcher::new(channel, config.alert().subject.as_str());
        let runner = CycleRunner::new(
            config.check().urls.clone(),
            probe,
            dispatcher,
            config.alert().recipient.as_str(),
        );
        let scheduler = Scheduler::new(config.check().interval())?;

        Ok(Self { runner, scheduler })
    }

    /// The cycle runner driven by this monitor
    pub fn runner(&self) -> &CycleRunner {
        &self.runner
    }

    /// Run a single cycle
    pub async fn run_once(&self) -> CycleReport {
        self.runner.run_cycle().await
    }

    /// Run cycles on schedule until `stop` turns true
    pub async fn run(&self, stop: watch::Receiver<bool>) -> SchedulerStats {
        let start_time = Instant::now();
        info!(
            "Monitor started: {} URL(s), every {}",
            self.runner.urls().len(),
            format_duration(self.scheduler.interval())
        );

        let runner = &self.runner;
        let stats = self
            .scheduler
            .run(
                || async move {
                    runner.run_cycle().await;
                },
                stop,
            )
            .await;

        let alerts = runner.dispatcher().stats();
        info!(
            cycles = stats.cycles_run,
            skipped = stats.triggers_skipped,
            alerts_sent = alerts.sent,
            alerts_failed = alerts.failed,
            "Monitor stopped after {}",
            format_duration(start_time.elapsed())
        );

        stats
    }
}
