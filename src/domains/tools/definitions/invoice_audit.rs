//! Invoice audit tool definition.
//!
//! Simulated OCR audit of an invoice file: extracts the invoice number from
//! the path, checks the Incoterm and HS code against reference data, runs the
//! ZERO guard on the derived HS risk and reports a fixed cost breakdown.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::common::{format_currency, lenient_required, lenient_string, round_to};
use crate::core::security::GuardContext;
use crate::domains::logistics::validation::DEFAULT_MAX_LEN;
use crate::domains::logistics::{
    ValidationResult, clamp, extract_invoice_number, hash_to_int, validate_hs_code,
    validate_incoterm,
};
use crate::domains::tools::{CallContext, DomainError, DomainResult, LogisticsTool, ToolResult};

const NET_AMOUNT: i64 = 102_000;
const HANDLING_AMOUNT: i64 = 33_000;
const INSPECTION_AMOUNT: i64 = 4_500;

const NEXT_STEPS: [&str; 3] = ["sap_entry_ready", "approval_workflow", "payment_queue"];

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the invoice audit tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[schemars(extend("required" = ["invoice_path"]))]
pub struct InvoiceAuditParams {
    /// Path or file name of the scanned invoice.
    #[serde(default, deserialize_with = "lenient_required")]
    #[schemars(with = "String")]
    pub invoice_path: String,

    /// Incoterm declared on the invoice (e.g. CFR, DAP).
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "Option<String>")]
    pub incoterm: Option<String>,

    /// HS commodity code declared on the invoice.
    #[serde(default, deserialize_with = "lenient_string")]
    #[schemars(with = "Option<String>")]
    pub hs_code: Option<String>,
}

// ============================================================================
// Payload
// ============================================================================

#[derive(Debug, Serialize)]
struct InvoiceAuditPayload {
    ok: bool,
    ts: String,
    file: String,
    invoice_no: String,
    metrics: AuditMetrics,
    validations: AuditValidations,
    amounts: AuditAmounts,
    next: [&'static str; 3],
}

#[derive(Debug, Serialize)]
struct AuditMetrics {
    ocr_confidence: f64,
    hs_risk: f64,
}

#[derive(Debug, Serialize)]
struct AuditValidations {
    incoterm: ValidationResult,
    hs_code: ValidationResult,
    dem_det_ready: bool,
    vendor_whitelist: bool,
    format: bool,
}

#[derive(Debug, Serialize)]
struct AuditAmounts {
    currency: &'static str,
    net: i64,
    handling: i64,
    inspection: i64,
    total: i64,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Invoice audit tool - Incoterm/HS/DEM-DET checks on an invoice.
pub struct InvoiceAuditTool;

impl LogisticsTool for InvoiceAuditTool {
    const NAME: &'static str = "logi_master_invoice_audit";
    const DESCRIPTION: &'static str = "OCR-based invoice audit (Incoterm/HS/DEM-DET checks)";
    type Params = InvoiceAuditParams;

    fn execute(params: &Self::Params, context: &CallContext) -> DomainResult<ToolResult> {
        let invoice_path = clamp(&params.invoice_path, DEFAULT_MAX_LEN);
        if invoice_path.is_empty() {
            return Err(DomainError::bad_input("invoice_path required"));
        }

        let invoice_no = extract_invoice_number(&invoice_path);
        let reference = context.reference();
        let incoterm = validate_incoterm(params.incoterm.as_deref(), reference.incoterms());
        let hs_code = validate_hs_code(params.hs_code.as_deref(), reference.hs_codes());

        let seed = hash_to_int(&invoice_no);
        let ocr_confidence = 0.90 + f64::from(seed % 6) / 100.0;
        let hs_risk = 0.05 + f64::from(seed % 25) / 100.0;

        context.enforce_guard(GuardContext {
            hs_risk,
            cert_missing: false,
        })?;

        info!("Audited invoice {} from {}", invoice_no, invoice_path);
        if !incoterm.valid || !hs_code.valid {
            warn!(
                "Invoice {} has reference warnings: incoterm={:?} hs={:?}",
                invoice_no, incoterm.reason, hs_code.reason
            );
        }

        let total = NET_AMOUNT + HANDLING_AMOUNT + INSPECTION_AMOUNT;

        let mut parts = vec![
            "📋 Invoice Audit ✔".to_string(),
            format!("File:{}", invoice_path),
            format!("Inv:{}", invoice_no),
            format!("OCR:{:.1}%", ocr_confidence * 100.0),
            format!("Incoterm:{}", incoterm.code.as_deref().unwrap_or("N/A")),
            format!("HS:{}", hs_code.code.as_deref().unwrap_or("N/A")),
            format!("Total:{}", format_currency(total)),
        ];
        if !incoterm.valid {
            parts.push("⚠️INCOTERM".to_string());
        }
        if !hs_code.valid {
            parts.push("⚠️HS".to_string());
        }

        let payload = InvoiceAuditPayload {
            ok: true,
            ts: context.now(),
            file: invoice_path,
            invoice_no,
            metrics: AuditMetrics {
                ocr_confidence: round_to(ocr_confidence, 3),
                hs_risk: round_to(hs_risk, 2),
            },
            validations: AuditValidations {
                incoterm,
                hs_code,
                dem_det_ready: true,
                vendor_whitelist: true,
                format: true,
            },
            amounts: AuditAmounts {
                currency: "USD",
                net: NET_AMOUNT,
                handling: HANDLING_AMOUNT,
                inspection: INSPECTION_AMOUNT,
                total,
            },
            next: NEXT_STEPS,
        };

        Ok(ToolResult::new(serde_json::to_value(payload)?, parts.join("  ")))
    }
}

// ============================================================================
// Tests
// ============================================================================
