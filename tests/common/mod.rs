//! Common test utilities for site-monitor

pub mod channels;

pub use channels::RecordingChannel;
pub use fixtures::ConfigFactory;
pub use smtp::FakeSmtpServer;
