//! Input validators and normalizers.
//!
//! Hard preconditions (container id format, weight positivity) fail with
//! [`DomainError::BadInput`]. Soft business rules (Incoterm and HS code
//! membership) return a [`ValidationResult`] instead so a tool can still
//! produce a best-effort report.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::domains::tools::{DomainError, DomainResult};

/// Default clamp applied to free-text string arguments.
pub const DEFAULT_MAX_LEN: usize = 256;

/// Invoice number used when a path carries no recognizable identifier.
pub const FALLBACK_INVOICE_NO: &str = "HVDC-INV-001";

static ISO_CONTAINER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{4}[0-9]{7}$").expect("container regex is valid"));

static INVOICE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(AE[0-9]{6,}|HVDC[-_]INV[-_][0-9]{3,}|INV[-_][0-9]{3,}|[0-9]{8})")
        .expect("invoice regex is valid")
});

/// Why a soft validation passed or failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationReason {
    Ok,
    Missing,
    UnknownIncoterm,
    UnknownHsCode,
}

/// Outcome of an Incoterm or HS code check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub reason: ValidationReason,
}

impl ValidationResult {
    fn missing() -> Self {
        Self {
            valid: false,
            code: None,
            description: None,
            reason: ValidationReason::Missing,
        }
    }
}

/// Truncate a string to at most `max_len` characters.
pub fn clamp(value: &str, max_len: usize) -> String {
    value.chars().take(max_len).collect()
}

/// Clamp an optional argument, treating absence as the empty string.
pub fn clamp_opt(value: Option<&str>, max_len: usize) -> String {
    value.map(|v| clamp(v, max_len)).unwrap_or_default()
}

/// Normalize and validate an ISO 6346 container identifier.
pub fn validate_container_id(raw: Option<&str>) -> DomainResult<String> {
    let id = clamp_opt(raw, 50).to_uppercase();
    if !ISO_CONTAINER_RE.is_match(&id) {
        return Err(DomainError::bad_input(
            "container_id must be ISO 6346 compliant",
        ));
    }
    Ok(id)
}

/// Extract an invoice identifier from a file path, falling back to
/// [`FALLBACK_INVOICE_NO`] when nothing matches.
pub fn extract_invoice_number(raw_path: &str) -> String {
    let path = clamp(raw_path, DEFAULT_MAX_LEN);
    INVOICE_RE
        .find(&path)
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_else(|| FALLBACK_INVOICE_NO.to_string())
}

/// Check an Incoterm code against the reference set.
pub fn validate_incoterm(raw: Option<&str>, incoterms: &HashSet<String>) -> ValidationResult {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return ValidationResult::missing();
    };

    let normalized = clamp(raw, 8).to_uppercase();
    let valid = incoterms.contains(&normalized);
    ValidationResult {
        valid,
        code: Some(normalized),
        description: None,
        reason: if valid {
            ValidationReason::Ok
        } else {
            ValidationReason::UnknownIncoterm
        },
    }
}

/// Check an HS code against the reference mapping.
pub fn validate_hs_code(raw: Option<&str>, hs_codes: &HashMap<String, String>) -> ValidationResult {
    let Some(raw) = raw.filter(|v| !v.is_empty()) else {
        return ValidationResult::missing();
    };

    let normalized: String = raw.chars().filter(char::is_ascii_digit).take(10).collect();
    let description = hs_codes.get(&normalized).cloned();
    ValidationResult {
        valid: description.is_some(),
        reason: if description.is_some() {
            ValidationReason::Ok
        } else {
            ValidationReason::UnknownHsCode
        },
        code: Some(normalized),
        description,
    }
}

/// Coerce a JSON value to a weight and require it to be finite and positive.
pub fn validate_weight(raw: Option<&Value>) -> DomainResult<f64> {
    let numeric = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Some(0.0)
            } else {
                trimmed.parse::<f64>().ok()
            }
        }
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match numeric {
        Some(w) if w.is_finite() && w > 0.0 => Ok(w),
        _ => Err(DomainError::bad_input("weight must be greater than zero")),
    }
}
