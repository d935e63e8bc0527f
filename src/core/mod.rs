//! Core module containing shared infrastructure components.
//!
//! Configuration, error handling, the time source, the domain guard, the
//! MCP server handler, transports and the HTTP health side-channel.

pub mod clock;
pub mod config;
pub mod error;
#[cfg(feature = "health")]
pub mod health;
pub mod security;
pub mod server;
pub mod transport;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use error::{Error, Result};
pub use security::{GuardContext, ZeroGuard};
pub use server::LogisticsServer;
pub use transport::{TransportConfig, TransportService};
