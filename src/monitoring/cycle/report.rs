//! Per-cycle failure report

use crate::monitoring::probe::ProbeOutcome;
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Aggregated result of one cycle
///
/// Built once from the cycle's outcomes and never merged with another
/// cycle's data.
#[derive(Debug, Clone)]
pub struct CycleReport {
    started_at: DateTime<Utc>,
    elapsed: Duration,
    probed: usize,
    failures: Vec<String>,
}

impl CycleReport {
    /// Build a report from every outcome of one cycle
    pub fn from_outcomes(
        started_at: DateTime<Utc>,
        elapsed: Duration,
        outcomes: Vec<ProbeOutcome>,
    ) -> Self {
        let probed = outcomes.len();
        let failures = outcomes
            .into_iter()
            .filter_map(ProbeOutcome::into_reason)
            .collect();

        Self {
            started_at,
            elapsed,
            probed,
            failures,
        }
    }

    /// True when every probe was healthy
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure reasons, one per failed URL
    pub fn failures(&self) -> &[String] {
        &self.failures
    }

    /// Number of outcomes collected
    pub fn probed(&self) -> usize {
        self.probed
    }

    /// Number of healthy outcomes
    pub fn healthy(&self) -> usize {
        self.probed - self.failures.len()
    }

    /// Wall-clock time the cycle began
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Time spent probing
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Newline-joined reasons, or `None` when there is nothing to report
    pub fn alert_body(&self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self.failures.join("\n"))
        }
    }
}
