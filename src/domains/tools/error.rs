//! Tool-specific error types.
//!
//! Every failure a tool call can produce is one of these variants. They carry
//! a stable machine-readable [`ErrorCode`] that the dispatch boundary copies
//! into the error envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

/// Result alias for tool and validator operations.
pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Machine-readable error codes exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    BadInput,
    InvalidDate,
    HsRiskStop,
    CertMissing,
    ToolNotFound,
    PromptNotFound,
    Unexpected,
}

impl ErrorCode {
    /// Wire representation of the code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BadInput => "BAD_INPUT",
            Self::InvalidDate => "INVALID_DATE",
            Self::HsRiskStop => "HS_RISK_STOP",
            Self::CertMissing => "CERT_MISSING",
            Self::ToolNotFound => "TOOL_NOT_FOUND",
            Self::PromptNotFound => "PROMPT_NOT_FOUND",
            Self::Unexpected => "UNEXPECTED",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that abort a tool call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A required field is missing or malformed.
    #[error("{0}")]
    BadInput(String),

    /// A date argument could not be parsed.
    #[error("{0}")]
    InvalidDate(String),

    /// The ZERO guard stopped the operation on HS risk.
    #[error("High HS risk requires manual review")]
    HsRiskStop { hs_risk: f64, threshold: f64 },

    /// The ZERO guard stopped the operation on a missing certification.
    #[error("FANR/MOIAT certification missing")]
    CertMissing,

    /// No tool is registered under the requested name.
    #[error("Unknown tool: {0}")]
    ToolNotFound(String),

    /// Anything else, e.g. a payload that failed to serialize.
    #[error("{0}")]
    Unexpected(String),
}

impl DomainError {
    /// Create a new "bad input" error.
    pub fn bad_input(msg: impl Into<String>) -> Self {
        Self::BadInput(msg.into())
    }

    /// Create a new "invalid date" error.
    pub fn invalid_date(msg: impl Into<String>) -> Self {
        Self::InvalidDate(msg.into())
    }

    /// Create a new "tool not found" error.
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }

    /// The wire code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::BadInput(_) => ErrorCode::BadInput,
            Self::InvalidDate(_) => ErrorCode::InvalidDate,
            Self::HsRiskStop { .. } => ErrorCode::HsRiskStop,
            Self::CertMissing => ErrorCode::CertMissing,
            Self::ToolNotFound(_) => ErrorCode::ToolNotFound,
            Self::Unexpected(_) => ErrorCode::Unexpected,
        }
    }

    /// Structured details attached to the error envelope, if any.
    pub fn details(&self) -> Option<Value> {
        match self {
            Self::HsRiskStop { hs_risk, threshold } => Some(json!({
                "hs_risk": hs_risk,
                "threshold": threshold,
            })),
            Self::ToolNotFound(name) => Some(json!({ "name": name })),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}
