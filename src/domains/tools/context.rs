//! Per-call context handed to every tool handler.

use std::sync::Arc;

use tracing::Span;

use super::error::DomainResult;
use crate::core::clock::Clock;
use crate::core::security::{GuardContext, ZeroGuard};
use crate::domains::logistics::ReferenceData;

/// Collaborators available to a single tool invocation.
///
/// Built fresh for each call and dropped afterwards. The span is the logging
/// capability: the registry runs the handler inside it, so every event a
/// handler emits is tagged with the tool being called.
#[derive(Clone)]
pub struct CallContext {
    clock: Arc<dyn Clock>,
    guard: ZeroGuard,
    reference: Arc<ReferenceData>,
    span: Span,
}

impl CallContext {
    pub fn new(
        clock: Arc<dyn Clock>,
        guard: ZeroGuard,
        reference: Arc<ReferenceData>,
        span: Span,
    ) -> Self {
        Self {
            clock,
            guard,
            reference,
            span,
        }
    }

    /// Current instant as an ISO-8601 UTC string.
    pub fn now(&self) -> String {
        self.clock.now_utc()
    }

    /// Apply the ZERO rule.
    pub fn enforce_guard(&self, context: GuardContext) -> DomainResult<()> {
        self.guard.enforce(context)
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Context with a frozen clock, built-in reference data and the default guard.
    #[cfg(test)]
    pub(crate) fn for_tests() -> Self {
        use crate::core::clock::FixedClock;
        use chrono::TimeZone;

        let instant = chrono::Utc
            .with_ymd_and_hms(2025, 8, 1, 9, 0, 0)
            .single()
            .unwrap_or_default();
        Self::new(
            Arc::new(FixedClock::new(instant)),
            ZeroGuard::default(),
            Arc::new(ReferenceData::builtin()),
            Span::none(),
        )
    }
}

impl std::fmt::Debug for CallContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallContext")
            .field("guard", &self.guard)
            .finish_non_exhaustive()
    }
}
