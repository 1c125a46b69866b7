//! Type conversions for MonitorError

use super::types::MonitorError;

impl From<lettre::error::Error> for MonitorError {
    fn from(err: lettre::error::Error) -> Self {
        MonitorError::email(format!("Failed to build message: {}", err))
    }
}

impl From<lettre::address::AddressError> for MonitorError {
    fn from(err: lettre::address::AddressError) -> Self {
        MonitorError::email(format!("Invalid address: {}", err))
    }
}

impl From<lettre::transport::smtp::Error> for MonitorError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MonitorError::email(format!("SMTP transport error: {}", err))
    }
}
