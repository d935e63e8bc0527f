//! Prompt-specific error types.

use serde_json::json;
use thiserror::Error;

use crate::domains::tools::ErrorCode;

/// Errors that can occur during prompt operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PromptError {
    /// The requested prompt was not found.
    #[error("Unknown prompt: {0}")]
    NotFound(String),
}

impl PromptError {
    /// Create a new "not found" error.
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    /// Domain error code reported to clients.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::NotFound(_) => ErrorCode::PromptNotFound,
        }
    }

    /// Protocol error data: `{code, name}`.
    pub fn data(&self) -> serde_json::Value {
        match self {
            Self::NotFound(name) => json!({ "code": self.code(), "name": name }),
        }
    }
}
