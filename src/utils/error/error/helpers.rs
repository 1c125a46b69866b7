//! Helper functions for creating specific error types

use super::types::MonitorError;

/// Helper functions for creating specific errors
impl MonitorError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn email<S: Into<String>>(message: S) -> Self {
        Self::Email(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
