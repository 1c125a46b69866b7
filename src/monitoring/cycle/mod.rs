//! Check-and-aggregate cycle
//!
//! One cycle probes every monitored URL concurrently, waits for all of
//! them, and sends at most one alert carrying every failure reason.

mod report;
mod runner;

pub use report::CycleReport;
pub use runner::CycleRunner;
