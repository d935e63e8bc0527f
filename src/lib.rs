//! Samsung Logistics MCP Server
//!
//! An MCP tool server for HVDC project logistics: invoice audit, container
//! tracking, shipping cost, ETA prediction and weather-tied planning. Domain
//! numbers are synthesized deterministically from the inputs.
//!
//! # Architecture
//!
//! - **core**: configuration, errors, clock, domain guard, server, transports, health endpoint
//! - **domains**: business logic organized by bounded contexts
//!   - **logistics**: validators, reference data, deterministic seed
//!   - **tools**: MCP tools, their registry and response envelopes
//!   - **prompts**: static prompt catalog
//!
//! # Example
//!
//! ```rust,no_run
//! use logistics_mcp_server::{Config, LogisticsServer};
//!
//! let server = LogisticsServer::new(Config::from_env());
//! let result = server.dispatch("health_ping", None);
//! assert_eq!(result.is_error, Some(false));
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, LogisticsServer, Result};
