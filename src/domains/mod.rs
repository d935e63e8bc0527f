//! Domains module containing business logic organized by bounded contexts.
//!
//! - `logistics` - validators, reference data and the deterministic seed
//! - `tools` - the MCP tools and their registry
//! - `prompts` - static prompt templates

pub mod logistics;
pub mod prompts;
pub mod tools;
