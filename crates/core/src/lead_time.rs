//! Lead-time catalog: the fixed offsets before an event's start at which
//! notifications fire. Static configuration, not user data.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Unit of a lead-time offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeadTimeUnit {
    Hours,
    Minutes,
}

/// A duration before an event's start at which a notification should fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeadTime {
    pub amount: i64,
    pub unit: LeadTimeUnit,
}

impl LeadTime {
    pub const fn hours(amount: i64) -> Self {
        Self {
            amount,
            unit: LeadTimeUnit::Hours,
        }
    }

    pub const fn minutes(amount: i64) -> Self {
        Self {
            amount,
            unit: LeadTimeUnit::Minutes,
        }
    }

    /// The full catalog of configured lead-times, largest offset first.
    pub fn catalog() -> Vec<LeadTime> {
        vec![
            LeadTime::hours(24),
            LeadTime::hours(12),
            LeadTime::hours(6),
            LeadTime::hours(3),
            LeadTime::hours(1),
            LeadTime::minutes(3),
            LeadTime::minutes(2),
            LeadTime::minutes(1),
        ]
    }

    /// Canonical label, as stored in subscriber preferences
    /// (e.g. `"1 hour"`, `"3 minutes"`).
    pub fn label(&self) -> String {
        let unit = match (self.unit, self.amount) {
            (LeadTimeUnit::Hours, 1) => "hour",
            (LeadTimeUnit::Hours, _) => "hours",
            (LeadTimeUnit::Minutes, 1) => "minute",
            (LeadTimeUnit::Minutes, _) => "minutes",
        };
        format!("{} {}", self.amount, unit)
    }

    /// Offset as a chrono duration, for fire-time arithmetic.
    pub fn to_duration(&self) -> Duration {
        match self.unit {
            LeadTimeUnit::Hours => Duration::hours(self.amount),
            LeadTimeUnit::Minutes => Duration::minutes(self.amount),
        }
    }
}

impl std::fmt::Display for LeadTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_pluralize() {
        assert_eq!(LeadTime::hours(1).label(), "1 hour");
        assert_eq!(LeadTime::hours(24).label(), "24 hours");
        assert_eq!(LeadTime::minutes(1).label(), "1 minute");
        assert_eq!(LeadTime::minutes(3).label(), "3 minutes");
    }

    #[test]
    fn catalog_has_eight_entries_largest_first() {
        let catalog = LeadTime::catalog();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog[0].label(), "24 hours");
        assert_eq!(catalog[7].label(), "1 minute");
        for pair in catalog.windows(2) {
            assert!(pair[0].to_duration() > pair[1].to_duration());
        }
    }

    #[test]
    fn duration_conversion() {
        assert_eq!(LeadTime::hours(6).to_duration(), Duration::hours(6));
        assert_eq!(LeadTime::minutes(2).to_duration(), Duration::minutes(2));
    }
}
