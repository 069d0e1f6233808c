use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Astronomical event categories users can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Meteors,
    LunarEclipse,
    SolarEclipse,
}

impl Category {
    /// All known categories, in catalog order.
    pub const ALL: [Category; 3] = [
        Category::Meteors,
        Category::LunarEclipse,
        Category::SolarEclipse,
    ];

    /// Wire/storage name for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Meteors => "meteors",
            Category::LunarEclipse => "lunar_eclipse",
            Category::SolarEclipse => "solar_eclipse",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An upcoming astronomical event. Immutable once loaded; the scheduler
/// reads events exactly once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub category: Category,
    /// Absolute start instant, UTC-normalized.
    pub start_time: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_names() {
        assert_eq!(Category::Meteors.as_str(), "meteors");
        assert_eq!(Category::LunarEclipse.as_str(), "lunar_eclipse");
        assert_eq!(Category::SolarEclipse.as_str(), "solar_eclipse");
    }

    #[test]
    fn event_round_trips_through_json() {
        let json = r#"{"category":"meteors","start_time":"2026-08-12T03:00:00Z"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.category, Category::Meteors);
        assert_eq!(
            serde_json::to_value(event).unwrap()["category"],
            "meteors"
        );
    }
}
