//! Endpoint monitoring
//!
//! - **probe**: one bounded HTTP check of one URL
//! - **cycle**: concurrent probing of the whole URL set plus aggregation
//! - **alerts**: best-effort delivery of a cycle's failures
//! - **scheduler**: fixed-cadence re-running of the cycle

pub mod alerts;
pub mod cycle;
pub mod probe;
pub mod scheduler;

mod system;

pub use alerts::{AlertDispatcher, EmailChannel, LogChannel, NotificationChannel};
pub use cycle::{CycleReport, CycleRunner};
pub use probe::{EndpointProbe, ProbeOutcome, Prober};
pub use scheduler::{Scheduler, SchedulerStats};
pub use system::Monitor;
