//! Time source injected into every tool call.
//!
//! Handlers never read the wall clock directly; they ask the call context,
//! which makes payload timestamps controllable in tests.

use chrono::{DateTime, SecondsFormat, Utc};

/// A source of "now" as an ISO-8601 UTC string.
pub trait Clock: Send + Sync {
    /// Current instant, formatted like `2025-08-18T14:30:00.000Z`.
    fn now_utc(&self) -> String;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> String {
        to_iso_utc(&Utc::now())
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone)]
pub struct FixedClock(String);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(to_iso_utc(&instant))
    }
}

impl Clock for FixedClock {
    fn now_utc(&self) -> String {
        self.0.clone()
    }
}

/// Format an instant with millisecond precision and a `Z` suffix.
pub fn to_iso_utc(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_format() {
        let instant = Utc.with_ymd_and_hms(2025, 8, 18, 14, 30, 0).unwrap();
        assert_eq!(to_iso_utc(&instant), "2025-08-18T14:30:00.000Z");
    }

    #[test]
    fn test_fixed_clock_is_stable() {
        let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap());
        assert_eq!(clock.now_utc(), clock.now_utc());
        assert_eq!(clock.now_utc(), "2025-01-02T03:04:05.000Z");
    }

    #[test]
    fn test_system_clock_parses_back() {
        let now = SystemClock.now_utc();
        assert!(now.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&now).is_ok());
    }
}
