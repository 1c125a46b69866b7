//! Integration tests for site-monitor
//!
//! These drive the real prober, dispatcher and email channel against
//! servers running inside the test process.

pub mod cycle_tests;
pub mod email_tests;
