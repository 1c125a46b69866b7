//! Alert delivery
//!
//! The dispatcher is the only entry point used by the cycle runner. It
//! never returns an error: delivery problems are logged and counted here.

mod channels;
mod dispatcher;
mod types;

pub use channels::{EmailChannel, LogChannel, NotificationChannel};
pub use dispatcher::{AlertDispatcher, DispatchStats};
pub use types::Alert;
