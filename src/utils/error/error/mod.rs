//! Error handling for the monitor
//!
//! This module defines all error types used throughout the monitor.

#![allow(missing_docs)]

mod conversions;
mod helpers;
mod types;

pub use types::{MonitorError, Result};
