//! Single-endpoint probing
//!
//! A probe is one bounded-timeout GET classified as healthy or failed.

mod prober;
mod types;

pub use prober::{EndpointProbe, Prober};
pub use types::ProbeOutcome;
