//! Error types and handling for the MCP server.
//!
//! Domain errors never reach this type during a tool call; the dispatch
//! boundary turns them into error envelopes. [`Error`] covers startup and
//! transport failures plus conversions for library users.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domains::tools::DomainError),

    /// Error originating from the prompts domain.
    #[error("Prompt error: {0}")]
    Prompt(#[from] crate::domains::prompts::PromptError),

    /// Error raised by the MCP transport.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::DomainError;

    #[test]
    fn test_domain_error_conversion() {
        let err: Error = DomainError::tool_not_found("x").into();
        assert_eq!(err.to_string(), "Domain error: Unknown tool: x");
    }
}
