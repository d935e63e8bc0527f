//! Prompts domain module.
//!
//! Static prompt catalog: fixed instructions clients can request by name.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual prompt definitions (one file per prompt)
//! - `registry.rs` - Central prompt registration and ordering
//! - `service.rs` - Prompt service for listing and lookup

pub mod definitions;
mod error;
mod registry;
mod service;

pub use definitions::PromptDefinition;
pub use error::PromptError;
pub use registry::{PromptEntry, get_all_prompts, prompt_names};
pub use service::PromptService;
