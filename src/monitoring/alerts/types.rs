//! Alert types

use chrono::{DateTime, Utc};

/// One outbound notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    /// Destination mailbox
    pub recipient: String,
    /// Subject line
    pub subject: String,
    /// Newline-joined failure reasons
    pub body: String,
    /// Creation time
    pub timestamp: DateTime<Utc>,
}

impl Alert {
    /// Create an alert stamped with the current time
    pub fn new<R, S, B>(recipient: R, subject: S, body: B) -> Self
    where
        R: Into<String>,
        S: Into<String>,
        B: Into<String>,
    {
        Self {
            recipient: recipient.into(),
            subject: subject.into(),
            body: body.into(),
            timestamp: Utc::now(),
        }
    }
}
