//! Alert dispatcher

use super::channels::NotificationChannel;
use super::types::Alert;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{error, info};

/// Best-effort alert sender
#[derive(Debug, Clone)]
pub struct AlertDispatcher {
    channel: Arc<dyn NotificationChannel>,
    subject: String,
    stats: Arc<DispatchCounters>,
}

#[derive(Debug, Default)]
struct DispatchCounters {
    sent: AtomicU64,
    failed: AtomicU64,
}

/// Snapshot of delivery counters
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    /// Alerts accepted by the channel
    pub sent: u64,
    /// Alerts the channel rejected
    pub failed: u64,
}

impl AlertDispatcher {
    /// Create a dispatcher that sends every alert with the given subject
    pub fn new<S: Into<String>>(channel: Arc<dyn NotificationChannel>, subject: S) -> Self {
        Self {
            channel,
            subject: subject.into(),
            stats: Arc::new(DispatchCounters::default()),
        }
    }

    /// Send one alert
    ///
    /// Never propagates failure: a rejected delivery is logged and counted,
    /// then control returns to the caller as if it had succeeded.
    pub async fn send_alert(&self, recipient: &str, body: &str) {
        let alert = Alert::new(recipient, self.subject.as_str(), body);

        match self.channel.send(&alert).await {
            Ok(()) => {
                self.stats.sent.fetch_add(1, Ordering::Relaxed);
                info!("Alert sent via {} to {}", self.channel.name(), recipient);
            }
            Err(e) => {
                self.stats.failed.fetch_add(1, Ordering::Relaxed);
                error!("Failed to send alert via {}: {}", self.channel.name(), e);
            }
        }
    }

    /// Get delivery counters
    pub fn stats(&self) -> DispatchStats {
        DispatchStats {
            sent: self.stats.sent.load(Ordering::Relaxed),
            failed: self.stats.failed.load(Ordering::Relaxed),
        }
    }
}
