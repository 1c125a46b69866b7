//! # site-monitor
//!
//! A small async uptime monitor. Every interval it probes a fixed set of HTTP
//! endpoints concurrently, gathers every failure of the cycle into one report
//! and emails it to an operator.
//!
//! ## Features
//!
//! - **Concurrent probing**: one task per URL, each bounded by its own timeout
//! - **One alert per failing cycle**: all failure reasons in a single email
//! - **Fixed cadence**: overrunning cycles skip missed triggers instead of piling up
//! - **Best-effort delivery**: SMTP problems are logged and never stop monitoring
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use site_monitor::{Config, Monitor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/monitor.yaml").await?;
//!     let monitor = Monitor::new(&config)?;
//!
//!     let report = monitor.run_once().await;
//!     println!("{} of {} URLs failed", report.failures().len(), report.probed());
//!
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod monitoring;
pub mod shutdown;
pub mod utils;

pub use config::Config;
pub use monitoring::{
    AlertDispatcher, CycleReport, CycleRunner, EmailChannel, EndpointProbe, LogChannel, Monitor,
    NotificationChannel, ProbeOutcome, Prober, Scheduler, SchedulerStats,
};
pub use utils::error::{MonitorError, Result};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
