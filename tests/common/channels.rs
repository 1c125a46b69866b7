//! Notification channels for tests

use parking_lot::Mutex;
use site_monitor::Result;
use site_monitor::monitoring::alerts::Alert;
use site_monitor::monitoring::NotificationChannel;

/// Keeps every alert it is given
#[derive(Debug, Default)]
pub struct RecordingChannel {
    alerts: Mutex<Vec<Alert>>,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Alerts received so far
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.lock().clone()
    }

    pub fn count(&self) -> usize {
        self.alerts.lock().len()
    }
}

#[async_trait::async_trait]
impl NotificationChannel for RecordingChannel {
    async fn send(&self, alert: &Alert) -> Result<()> {
        self.alerts.lock().push(alert.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "recording"
    }
}
