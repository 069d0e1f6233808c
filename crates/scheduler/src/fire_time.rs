//! Fire-time arithmetic: pure offset subtraction over UTC instants.

use chrono::{DateTime, Utc};
use skywatch_core::LeadTime;

/// Absolute instant at which the notification for `(start_time, lead_time)`
/// should fire. Pure; whether the result is still in the future is the
/// caller's decision.
pub fn fire_at(start_time: DateTime<Utc>, lead_time: &LeadTime) -> DateTime<Utc> {
    start_time - lead_time.to_duration()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use skywatch_core::LeadTime;

    use super::*;

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 12, 3, 0, 0).unwrap()
    }

    #[test]
    fn subtracts_hours() {
        let fire = fire_at(start(), &LeadTime::hours(1));
        assert_eq!(fire, Utc.with_ymd_and_hms(2026, 8, 12, 2, 0, 0).unwrap());
    }

    #[test]
    fn subtracts_minutes() {
        let fire = fire_at(start(), &LeadTime::minutes(3));
        assert_eq!(fire, Utc.with_ymd_and_hms(2026, 8, 12, 2, 57, 0).unwrap());
    }

    #[test]
    fn crosses_day_boundaries() {
        let fire = fire_at(start(), &LeadTime::hours(24));
        assert_eq!(fire, Utc.with_ymd_and_hms(2026, 8, 11, 3, 0, 0).unwrap());
    }

    #[test]
    fn is_pure() {
        let lead = LeadTime::minutes(2);
        assert_eq!(fire_at(start(), &lead), fire_at(start(), &lead));
    }
}
