//! Container status tool definition.
//!
//! Deterministic tracking snapshot for an ISO 6346 container.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::common::{format_percent, lenient_required};
use crate::domains::logistics::{hash_to_int, seeded_range, validate_container_id};
use crate::domains::tools::{CallContext, DomainResult, LogisticsTool, ToolResult};

const ETA_UTC: &str = "2025-08-18T14:30:00Z";

/// Parameters for the container status tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(extend("required" = ["container_id"]))]
pub struct ContainerStatusParams {
    /// ISO 6346 container id: 4 letters followed by 7 digits.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub container_id: String,
}

#[derive(Debug, Serialize)]
struct ContainerStatusPayload {
    ok: bool,
    ts: String,
    container_id: String,
    status: &'static str,
    progress_pct: u32,
    location: Location,
    vessel: Vessel,
    eta_utc: &'static str,
    conditions: Conditions,
}

#[derive(Debug, Serialize)]
struct Location {
    port: &'static str,
    terminal: String,
}

#[derive(Debug, Serialize)]
struct Vessel {
    name: &'static str,
    voyage: String,
}

#[derive(Debug, Serialize)]
struct Conditions {
    temp_ok: bool,
    humidity_ok: bool,
    security_ok: bool,
    docs_ok: bool,
}

/// Container status tool - ISO 6346 tracking snapshot.
pub struct ContainerStatusTool;

impl LogisticsTool for ContainerStatusTool {
    const NAME: &'static str = "check_container_status";
    const DESCRIPTION: &'static str = "ISO 6346 container tracking snapshot (deterministic)";
    type Params = ContainerStatusParams;

    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
        let container_id = validate_container_id(Some(&params.container_id))?;
        let seed = hash_to_int(&container_id);

        let progress_pct = seeded_range(seed, 50, 41);
        let even = seed % 2 == 0;
        let (port, vessel_name) = if even {
            ("BUSAN", "SAMSUNG DYNASTY")
        } else {
            ("JEBEL ALI", "ADNOC RELIANCE")
        };
        let voyage = format!(
            "SD-{}-{:04}",
            seeded_range(seed, 2025, 3),
            seeded_range(seed, 814, 50)
        );

        info!("Container {} at {}% ({})", container_id, progress_pct, port);

        let text = format!(
            "📦 {} transit {}  Vessel:{}  ETA:{}",
            container_id,
            format_percent(progress_pct),
            vessel_name,
            ETA_UTC
        );

        let payload = ContainerStatusPayload {
            ok: true,
            ts: context.now(),
            container_id,
            status: "IN_TRANSIT",
            progress_pct,
            location: Location {
                port,
                terminal: format!("T{}", seeded_range(seed, 1, 4)),
            },
            vessel: Vessel {
                name: vessel_name,
                voyage,
            },
            eta_utc: ETA_UTC,
            conditions: Conditions {
                temp_ok: true,
                humidity_ok: true,
                security_ok: true,
                docs_ok: true,
            },
        };

        Ok(ToolResult::new(serde_json::to_value(payload)?, text))
    }
}
