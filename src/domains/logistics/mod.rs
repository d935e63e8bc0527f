//! Logistics domain module.
//!
//! Pure building blocks shared by the tool handlers:
//!
//! - `seed` - deterministic string hash used for all synthesized figures
//! - `validation` - container id, invoice number, Incoterm, HS code and weight checks
//! - `reference` - cached Incoterm and HS code tables with a built-in fallback

pub mod reference;
pub mod seed;
pub mod validation;

pub use reference::ReferenceData;
pub use seed::{hash_to_int, seeded_range};
pub use validation::{
    ValidationReason, ValidationResult, clamp, clamp_opt, extract_invoice_number,
    validate_container_id, validate_hs_code, validate_incoterm, validate_weight,
};
