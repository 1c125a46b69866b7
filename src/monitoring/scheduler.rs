//! Fixed-cadence cycle scheduler

use crate::utils::error::{MonitorError, Result};
use crate::utils::format_duration;
use std::future::Future;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, warn};

/// Counters reported when the scheduler stops
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerStats {
    /// Jobs that ran to completion
    pub cycles_run: u64,
    /// Triggers dropped because the previous job was still running
    pub triggers_skipped: u64,
}

/// Runs a job immediately and then once per interval
///
/// Jobs run inline on the scheduler loop, so two never overlap. A trigger
/// that comes due while a job is still running is skipped, and the cadence
/// stays anchored to the first run.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler {
    interval: Duration,
}

impl Scheduler {
    /// Create a scheduler with a non-zero interval
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(MonitorError::validation(
                "Scheduler interval must be greater than 0",
            ));
        }
        Ok(Self { interval })
    }

    /// Interval between triggers
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Run `job` until `stop` turns true or its sender goes away
    ///
    /// A stop request never interrupts a running job; the loop exits once the
    /// job returns.
    pub async fn run<F, Fut>(&self, mut job: F, mut stop: watch::Receiver<bool>) -> SchedulerStats
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ()>,
    {
        let mut stats = SchedulerStats::default();
        let mut next_due = Some(Instant::now());

        loop {
            if *stop.borrow() {
                break;
            }

            let Some(due) = next_due else {
                Self::wait_for_stop(&mut stop).await;
                break;
            };

            tokio::select! {
                biased;
                changed = stop.changed() => {
                    if changed.is_err() || *stop.borrow() {
                        break;
                    }
                    continue;
                }
                _ = sleep_until(due) => {}
            }

            job().await;
            stats.cycles_run += 1;

            let now = Instant::now();
            let (next, skipped) = self.advance(due, now);
            next_due = next;

            if skipped > 0 {
                stats.triggers_skipped += skipped;
                warn!(
                    "Cycle overran the {} interval, skipped {} trigger(s)",
                    format_duration(self.interval),
                    skipped
                );
            }
            match next_due {
                Some(next) => debug!(
                    "Next cycle in {}",
                    format_duration(next.saturating_duration_since(now))
                ),
                None => warn!(
                    "Interval of {} is beyond the clock range, no further cycles will run",
                    format_duration(self.interval)
                ),
            }
        }

        stats
    }

    /// First trigger after `now` that follows `due`, plus how many were skipped
    ///
    /// `None` once the next trigger would fall outside the clock's range.
    fn advance(&self, due: Instant, now: Instant) -> (Option<Instant>, u64) {
        let mut next = due.checked_add(self.interval);
        let mut skipped = 0;
        while let Some(candidate) = next {
            if candidate >= now {
                break;
            }
            next = candidate.checked_add(self.interval);
            skipped += 1;
        }
        (next, skipped)
    }

    async fn wait_for_stop(stop: &mut watch::Receiver<bool>) {
        while stop.changed().await.is_ok() {
            if *stop.borrow() {
                break;
            }
        }
    }
}
