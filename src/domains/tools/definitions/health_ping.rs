//! Health ping tool definition.
//!
//! A readiness probe that always succeeds and echoes its (clamped) input.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::common::lenient_string;
use crate::domains::logistics::validation::{DEFAULT_MAX_LEN, clamp_opt};
use crate::domains::tools::{CallContext, DomainResult, LogisticsTool, ToolResult};

/// Parameters for the health ping tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct HealthPingParams {
    /// Optional text echoed back in the response.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "Option<String>")]
    pub echo: Option<String>,
}

#[derive(Debug, Serialize)]
struct HealthPingPayload {
    ok: bool,
    ts: String,
    echo: String,
}

/// Health ping tool - MCP readiness probe.
pub struct HealthPingTool;

impl LogisticsTool for HealthPingTool {
    const NAME: &'static str = "health_ping";
    const DESCRIPTION: &'static str = "MCP health readiness probe";
    type Params = HealthPingParams;

    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
        let echo = clamp_opt(params.echo.as_deref(), DEFAULT_MAX_LEN);
        debug!("Health ping, echo length {}", echo.len());

        let text = if echo.is_empty() {
            "✅ health ping".to_string()
        } else {
            format!("✅ health ping echo:{}", echo)
        };

        let payload = HealthPingPayload {
            ok: true,
            ts: context.now(),
            echo,
        };
        Ok(ToolResult::new(serde_json::to_value(payload)?, text))
    }
}
