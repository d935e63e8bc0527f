//! Tools domain module.
//!
//! Tools are the executable functions MCP clients call. Every tool reads a
//! typed parameter struct, runs against a per-call [`CallContext`] and returns
//! a [`ToolResult`] or a [`DomainError`]; the server turns either into the
//! response envelope.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `registry.rs` - Ordered name -> contract table and lookup
//! - `handlers.rs` - Tool contract, descriptor and the `LogisticsTool` trait
//! - `envelope.rs` - Success/error response envelopes
//! - `error.rs` - Domain error codes
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/` implementing `LogisticsTool`
//! 2. Export it in `definitions/mod.rs`
//! 3. Register it in `ToolRegistry::logistics()`

mod context;
pub mod definitions;
pub mod envelope;
mod error;
mod handlers;
mod registry;

pub use context::CallContext;
pub use error::{DomainError, DomainResult, ErrorCode};
pub use handlers::{
    LogisticsTool, ToolContract, ToolDescriptor, ToolHandler, ToolResult, parse_params,
};
pub use registry::ToolRegistry;
