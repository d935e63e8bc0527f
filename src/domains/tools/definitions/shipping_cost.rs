//! HVDC shipping cost tool definition.
//!
//! Port-to-port cost estimate with demurrage/detention reserves. Every
//! component is an integer; only the weight charge and the percentage-based
//! components go through a single ceil or round step.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use super::common::{format_currency, lenient_required, lenient_string, serialize_number};
use crate::domains::logistics::{ValidationResult, clamp, validate_incoterm, validate_weight};
use crate::domains::tools::{CallContext, DomainError, DomainResult, LogisticsTool, ToolResult};

const BASE_USD: i64 = 15_000;
const WEIGHT_RATE_PER_KG: f64 = 2.8;
const HVDC_HANDLING_RATE: f64 = 0.3;
const INSURANCE_RATE: f64 = 0.05;
const DEMURRAGE_RESERVE_USD: i64 = 2_800;
const DETENTION_RESERVE_USD: i64 = 1_800;
const DEFAULT_INCOTERM: &str = "CFR";
// Largest weight charge that stays exact as an integer and leaves headroom for the sum.
const MAX_WEIGHT_CHARGE_USD: f64 = 9.0e15;

const NOTES: [&str; 4] = ["Port-to-port", "HVDC handling", "Tracking", "Security"];

/// Parameters for the shipping cost tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(extend("required" = ["equipment_type", "weight", "origin_port", "destination_port"]))]
pub struct ShippingCostParams {
    /// Equipment being shipped (e.g. Transformer).
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub equipment_type: String,

    /// Cargo weight in kilograms; must be greater than zero.
    #[serde(default)]
    #[schemars(with = "f64")]
    pub weight: Value,

    /// Port of loading.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub origin_port: String,

    /// Port of discharge.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub destination_port: String,

    /// Incoterm (e.g. FOB, CFR, DDP). Defaults to CFR.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "Option<String>")]
    pub incoterm: Option<String>,
}

/// Itemized cost estimate in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub base: i64,
    pub weight: i64,
    pub hvdc_handling: i64,
    pub insurance: i64,
    pub demurrage_reserve: i64,
    pub detention_reserve: i64,
    pub total: i64,
}

impl CostBreakdown {
    /// Compute the breakdown for a validated weight.
    ///
    /// Weights whose charge cannot be carried as whole dollars are rejected
    /// with `BAD_INPUT` instead of saturating.
    pub fn for_weight(weight_kg: f64) -> DomainResult<Self> {
        let out_of_range = || DomainError::bad_input("weight out of range");

        let weight_charge = (weight_kg * WEIGHT_RATE_PER_KG).ceil();
        if !weight_charge.is_finite() || weight_charge > MAX_WEIGHT_CHARGE_USD {
            return Err(out_of_range());
        }

        let base = BASE_USD;
        let weight = weight_charge as i64;
        let hvdc_handling = (base as f64 * HVDC_HANDLING_RATE).round() as i64;
        let insured = base.checked_add(weight).ok_or_else(out_of_range)?;
        let insurance = (insured as f64 * INSURANCE_RATE).round() as i64;
        let demurrage_reserve = DEMURRAGE_RESERVE_USD;
        let detention_reserve = DETENTION_RESERVE_USD;

        let total = [hvdc_handling, insurance, demurrage_reserve, detention_reserve]
            .into_iter()
            .try_fold(insured, i64::checked_add)
            .ok_or_else(out_of_range)?;

        Ok(Self {
            base,
            weight,
            hvdc_handling,
            insurance,
            demurrage_reserve,
            detention_reserve,
            total,
        })
    }
}

#[derive(Debug, Serialize)]
struct ShippingCostPayload {
    ok: bool,
    ts: String,
    equipment: String,
    route: Route,
    #[serde(serialize_with = "serialize_number")]
    weight_kg: f64,
    incoterm: ValidationResult,
    breakdown_usd: CostBreakdown,
    notes: [&'static str; 4],
}

#[derive(Debug, Serialize)]
struct Route {
    origin: String,
    destination: String,
}

/// Shipping cost tool - HVDC cost calculation with DEM/DET placeholders.
pub struct ShippingCostTool;

impl LogisticsTool for ShippingCostTool {
    const NAME: &'static str = "calculate_hvdc_shipping_cost";
    const DESCRIPTION: &'static str = "HVDC shipping cost calc with DEM/DET placeholders";
    type Params = ShippingCostParams;

    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
        let equipment = clamp(&params.equipment_type, 80).to_uppercase();
        let weight_kg = validate_weight(Some(&params.weight))?;
        let origin = clamp(&params.origin_port, 80);
        let destination = clamp(&params.destination_port, 80);
        let incoterm = validate_incoterm(
            Some(params.incoterm.as_deref().unwrap_or(DEFAULT_INCOTERM)),
            context.reference().incoterms(),
        );

        let breakdown = CostBreakdown::for_weight(weight_kg)?;
        info!(
            "Shipping cost for {} kg {} -> {}: {}",
            weight_kg, origin, destination, breakdown.total
        );

        let text = format!(
            "💰 Cost {}  ({} base / {} weight / {} hvdc / {} ins)",
            format_currency(breakdown.total),
            format_currency(breakdown.base),
            format_currency(breakdown.weight),
            format_currency(breakdown.hvdc_handling),
            format_currency(breakdown.insurance),
        );

        let payload = ShippingCostPayload {
            ok: true,
            ts: context.now(),
            equipment,
            route: Route {
                origin,
                destination,
            },
            weight_kg,
            incoterm,
            breakdown_usd: breakdown,
            notes: NOTES,
        };

        Ok(ToolResult::new(serde_json::to_value(payload)?, text))
    }
}
