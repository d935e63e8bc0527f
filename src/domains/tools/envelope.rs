//! Response envelopes.
//!
//! Success: the tool payload as structured content, plus its JSON text and
//! the summary line. Failure: `{ok: false, code, ...details}` flagged as an
//! error result.

use rmcp::model::{CallToolResult, Content};
use serde_json::{Map, Value, json};

use super::error::{DomainError, ErrorCode};

/// Build a success envelope. The summary is appended only when non-empty.
pub fn ok(json: Value, text: &str) -> CallToolResult {
    let mut content = vec![Content::text(json.to_string())];
    if !text.is_empty() {
        content.push(Content::text(text.to_string()));
    }

    CallToolResult {
        content,
        structured_content: Some(json),
        is_error: Some(false),
        meta: None,
    }
}

/// Build an error envelope.
pub fn fail(code: ErrorCode, details: Map<String, Value>) -> CallToolResult {
    let mut body = Map::new();
    body.insert("ok".to_string(), Value::Bool(false));
    body.insert("code".to_string(), json!(code));
    body.extend(details);
    let body = Value::Object(body);

    CallToolResult {
        content: vec![Content::text(body.to_string())],
        structured_content: Some(body),
        is_error: Some(true),
        meta: None,
    }
}

/// Translate a domain error into an error envelope stamped with `ts`.
pub fn from_error(err: &DomainError, ts: String) -> CallToolResult {
    let mut details = Map::new();
    details.insert("ts".to_string(), Value::String(ts));
    details.insert("message".to_string(), Value::String(err.to_string()));
    if let Some(extra) = err.details() {
        details.insert("details".to_string(), extra);
    }
    fail(err.code(), details)
}
