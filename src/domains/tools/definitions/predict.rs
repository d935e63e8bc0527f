//! ETA/KPI prediction tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::common::{format_js_number, lenient_required, round_to, serialize_number};
use crate::domains::logistics::{clamp, hash_to_int, seeded_range, validate_weight};
use crate::domains::tools::{CallContext, DomainError, DomainResult, LogisticsTool, ToolResult};

const ON_TIME_RATE: f64 = 0.93;

/// Parameters for the prediction tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(extend("required" = ["origin", "destination", "weight"]))]
pub struct PredictParams {
    /// Origin port or site.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub origin: String,

    /// Destination port or site.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub destination: String,

    /// Cargo weight in kilograms.
    #[serde(default)]
    #[schemars(with = "f64")]
    pub weight: Value,
}

#[derive(Debug, Serialize)]
struct PredictPayload {
    ok: bool,
    ts: String,
    route: Route,
    #[serde(serialize_with = "serialize_number")]
    cargo_weight_kg: f64,
    eta_days: u32,
    confidence: f64,
    drivers: Drivers,
    kpi_targets: KpiTargets,
}

#[derive(Debug, Serialize)]
struct Route {
    origin: String,
    destination: String,
}

#[derive(Debug, Serialize)]
struct Drivers {
    weather: &'static str,
    port_congestion: &'static str,
    customs_days: String,
}

#[derive(Debug, Serialize)]
struct KpiTargets {
    on_time_rate: f64,
    risk: &'static str,
}

/// Prediction tool - deterministic ETA and KPI snapshot for a route.
pub struct PredictTool;

impl LogisticsTool for PredictTool {
    const NAME: &'static str = "logi_master_predict";
    const DESCRIPTION: &'static str = "ETA/KPI prediction (deterministic seed)";
    type Params = PredictParams;

    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
        let origin = clamp(&params.origin, 80);
        let destination = clamp(&params.destination, 80);
        if origin.is_empty() || destination.is_empty() {
            return Err(DomainError::bad_input("origin/destination required"));
        }
        let weight = validate_weight(Some(&params.weight))?;

        let seed = hash_to_int(&format!(
            "{}|{}|{}",
            origin,
            destination,
            format_js_number(weight)
        ));
        let eta_days = seeded_range(seed, 7, 7);
        let customs_days = seeded_range(seed, 2, 2);
        let confidence = round_to(0.82 + f64::from(seed % 5) / 100.0, 2);

        let drivers = Drivers {
            weather: if seed % 3 == 0 { "MODERATE" } else { "LOW" },
            port_congestion: if seed % 4 == 0 { "MEDIUM" } else { "LOW" },
            customs_days: format!("{}-{}", customs_days, customs_days + 1),
        };

        info!("Predicted {} -> {}: ETA {}d", origin, destination, eta_days);

        let text = format!(
            "🚢 ETA {}d (conf {:.0}%)  weather:{} / congestion:{} / customs:{}d",
            eta_days,
            confidence * 100.0,
            drivers.weather.to_lowercase(),
            drivers.port_congestion.to_lowercase(),
            drivers.customs_days
        );

        let payload = PredictPayload {
            ok: true,
            ts: context.now(),
            route: Route {
                origin,
                destination,
            },
            cargo_weight_kg: weight,
            eta_days,
            confidence,
            drivers,
            kpi_targets: KpiTargets {
                on_time_rate: ON_TIME_RATE,
                risk: if seed % 2 == 0 { "LOW" } else { "MEDIUM" },
            },
        };

        Ok(ToolResult::new(serde_json::to_value(payload)?, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::tools::ErrorCode;
    use serde_json::json;

    fn params(origin: &str, destination: &str, weight: Value) -> PredictParams {
        PredictParams {
            origin: origin.to_string(),
            destination: destination.to_string(),
            weight,
        }
    }

    #[test]
    fn test_predict_follows_seed() {
        let ctx = CallContext::for_tests();
        let result =
            PredictTool::execute(&params("BUSAN", "JEBEL ALI", json!(12000)), &ctx).unwrap();
        let json = &result.json;

        let seed = hash_to_int("BUSAN|JEBEL ALI|12000");
        assert_eq!(json["eta_days"], json!(7 + seed % 7));
        assert_eq!(json["cargo_weight_kg"], json!(12000));
        assert_eq!(
            json["drivers"]["customs_days"],
            json!(format!("{}-{}", 2 + seed % 2, 3 + seed % 2))
        );
        assert_eq!(json["kpi_targets"]["on_time_rate"], json!(0.93));

        let eta = json["eta_days"].as_u64().unwrap();
        assert!((7..=13).contains(&eta));
        let confidence = json["confidence"].as_f64().unwrap();
        assert!((0.82..=0.86).contains(&confidence));
        assert!(result.text.starts_with(&format!("🚢 ETA {}d (conf ", eta)));
    }

    #[test]
    fn test_predict_fractional_weight_changes_seed_input() {
        let ctx = CallContext::for_tests();
        let result = PredictTool::execute(&params("A", "B", json!("2.5")), &ctx).unwrap();
        let seed = hash_to_int("A|B|2.5");
        assert_eq!(result.json["eta_days"], json!(7 + seed % 7));
        assert_eq!(result.json["cargo_weight_kg"], json!(2.5));
    }

    #[test]
    fn test_predict_seed_uses_exponent_form_for_extreme_weights() {
        let ctx = CallContext::for_tests();

        let result = PredictTool::execute(&params("A", "B", json!(1e-7)), &ctx).unwrap();
        let seed = hash_to_int("A|B|1e-7");
        assert_eq!(result.json["eta_days"], json!(7 + seed % 7));

        let result = PredictTool::execute(&params("A", "B", json!(2e21)), &ctx).unwrap();
        let seed = hash_to_int("A|B|2e+21");
        assert_eq!(result.json["eta_days"], json!(7 + seed % 7));
    }

    #[test]
    fn test_predict_requires_route() {
        let ctx = CallContext::for_tests();
        let err = PredictTool::execute(&params("", "B", json!(1)), &ctx).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadInput);
        assert_eq!(err.to_string(), "origin/destination required");

        let err = PredictTool::execute(&params("A", "B", json!(0)), &ctx).unwrap_err();
        assert_eq!(err.code(), ErrorCode::BadInput);
    }
}
