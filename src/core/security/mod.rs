// Security module for the ZERO rule
//
// Hard stops that abort a tool call when a risk threshold is crossed or a
// required certification is missing. These are never downgraded to warnings.

pub mod zero_guard;

pub use zero_guard::{DEFAULT_HS_RISK_STOP, GuardContext, ZeroGuard};
