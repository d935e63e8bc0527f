//! Weather-tied plan tool definition.
//!
//! Returns a fixed advisory for a route once the departure date parses.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::common::lenient_required;
use crate::core::clock::to_iso_utc;
use crate::domains::logistics::clamp;
use crate::domains::tools::{CallContext, DomainError, DomainResult, LogisticsTool, ToolResult};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Parameters for the weather-tie tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(extend("required" = ["route", "departure_date"]))]
pub struct WeatherTieParams {
    /// Route description, e.g. `BUSAN-JEBEL ALI`.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub route: String,

    /// Planned departure: RFC 3339, `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD` (UTC).
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub departure_date: String,
}

#[derive(Debug, Serialize)]
struct WeatherTiePayload {
    ok: bool,
    ts: String,
    route: String,
    departure_utc: String,
    weather: WeatherProfile,
    risk: &'static str,
    recommendation: &'static str,
    optimal_window_days: u32,
    backup: &'static str,
}

#[derive(Debug, Serialize)]
struct WeatherProfile {
    storm_risk: f64,
    sea_state_m: &'static str,
    wind_kt: &'static str,
}

/// Parse a departure date; naive forms are taken as UTC.
pub fn parse_departure(value: &str) -> DomainResult<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(naive.and_utc());
    }

    debug!("Rejected departure date {:?}", value);
    Err(DomainError::invalid_date("Invalid date value supplied"))
}

/// Weather-tie tool - weather-tied plan snapshot.
pub struct WeatherTieTool;

impl LogisticsTool for WeatherTieTool {
    const NAME: &'static str = "logi_master_weather_tie";
    const DESCRIPTION: &'static str = "Weather-tied plan snapshot";
    type Params = WeatherTieParams;

    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
        let route = clamp(&params.route, 120);
        let departure_date = clamp(&params.departure_date, 40);
        if route.is_empty() || departure_date.is_empty() {
            return Err(DomainError::bad_input("route/departure_date required"));
        }

        let departure_utc = to_iso_utc(&parse_departure(&departure_date)?);
        info!("Weather-tie for {} departing {}", route, departure_utc);

        let payload = WeatherTiePayload {
            ok: true,
            ts: context.now(),
            route,
            departure_utc,
            weather: WeatherProfile {
                storm_risk: 0.15,
                sea_state_m: "2-3",
                wind_kt: "12-18",
            },
            risk: "LOW",
            recommendation: "PROCEED",
            optimal_window_days: 3,
            backup: "delay_48h",
        };

        let text = format!(
            "🌤️ Weather-tie: {} risk, {}-day optimal window from T+1",
            payload.risk, payload.optimal_window_days
        );

        Ok(ToolResult::new(serde_json::to_value(payload)?, text))
    }
}
