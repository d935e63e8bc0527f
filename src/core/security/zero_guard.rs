use serde::{Deserialize, Serialize};

use crate::domains::tools::{DomainError, DomainResult};

/// HS risk at or above which an operation is stopped.
pub const DEFAULT_HS_RISK_STOP: f64 = 0.8;

/// Risk facts evaluated by the guard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GuardContext {
    #[serde(default)]
    pub hs_risk: f64,

    #[serde(default)]
    pub cert_missing: bool,
}

impl GuardContext {
    pub fn with_hs_risk(hs_risk: f64) -> Self {
        Self {
            hs_risk,
            ..Default::default()
        }
    }
}

/// The ZERO rule: a hard stop on HS risk or missing certification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZeroGuard {
    /// Threshold for [`DomainError::HsRiskStop`].
    pub hs_risk_stop: f64,
}

impl Default for ZeroGuard {
    fn default() -> Self {
        Self {
            hs_risk_stop: DEFAULT_HS_RISK_STOP,
        }
    }
}

impl ZeroGuard {
    pub fn new(hs_risk_stop: f64) -> Self {
        Self { hs_risk_stop }
    }

    /// Evaluate the rule.
    ///
    /// The HS risk check runs first, so when both conditions hold the error
    /// is [`DomainError::HsRiskStop`].
    pub fn enforce(&self, context: GuardContext) -> DomainResult<()> {
        if context.hs_risk >= self.hs_risk_stop {
            return Err(DomainError::HsRiskStop {
                hs_risk: context.hs_risk,
                threshold: self.hs_risk_stop,
            });
        }

        if context.cert_missing {
            return Err(DomainError::CertMissing);
        }

        Ok(())
    }
}
