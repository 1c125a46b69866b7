//! Probe outcome types

/// Result of probing one monitored URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The endpoint answered with 200
    Healthy,
    /// Non-200 status or transport failure
    Failed {
        /// Probed URL
        url: String,
        /// Human readable description, embeds the URL
        reason: String,
    },
}

impl ProbeOutcome {
    /// Create a failed outcome
    pub fn failed<U: Into<String>, R: Into<String>>(url: U, reason: R) -> Self {
        Self::Failed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn is_healthy(&self) -> bool {
        matches!(self, Self::Healthy)
    }

    /// Failure reason, if any
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Healthy => None,
            Self::Failed { reason, .. } => Some(reason),
        }
    }

    /// Consume the outcome, keeping only the failure reason
    pub fn into_reason(self) -> Option<String> {
        match self {
            Self::Healthy => None,
            Self::Failed { reason, .. } => Some(reason),
        }
    }
}
