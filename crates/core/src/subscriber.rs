//! Subscriber snapshot rows, read-only to the scheduler.
//!
//! Subscriptions are owned by the account system; the scheduler only reads
//! a snapshot at each fire time. Rows that omit the preference fields get
//! the defaults a fresh account starts with: all categories, a 1 hour
//! lead-time, email delivery.

use serde::{Deserialize, Serialize};

use crate::event::Category;

/// A delivery channel a subscriber can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Email => write!(f, "email"),
            Channel::Sms => write!(f, "sms"),
        }
    }
}

/// A user with a standing interest in event categories and lead-times,
/// reachable via one or more channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscriber {
    pub email: String,
    /// E.164 phone number; empty when none is on file.
    #[serde(default)]
    pub phone: String,
    #[serde(default = "default_categories")]
    pub categories: Vec<Category>,
    /// Lead-time labels, e.g. `"1 hour"`.
    #[serde(default = "default_lead_times")]
    pub lead_times: Vec<String>,
    #[serde(default = "default_channels")]
    pub channels: Vec<Channel>,
}

fn default_categories() -> Vec<Category> {
    Category::ALL.to_vec()
}

fn default_lead_times() -> Vec<String> {
    vec!["1 hour".to_string()]
}

fn default_channels() -> Vec<Channel> {
    vec![Channel::Email]
}

impl Subscriber {
    pub fn is_subscribed(&self, category: Category) -> bool {
        self.categories.contains(&category)
    }

    pub fn wants_lead_time(&self, label: &str) -> bool {
        self.lead_times.iter().any(|l| l == label)
    }

    pub fn has_channel(&self, channel: Channel) -> bool {
        self.channels.contains(&channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn omitted_fields_get_account_defaults() {
        let row: Subscriber =
            serde_json::from_str(r#"{"email":"alice@example.com"}"#).unwrap();
        assert_eq!(row.phone, "");
        assert_eq!(row.categories, Category::ALL.to_vec());
        assert_eq!(row.lead_times, vec!["1 hour".to_string()]);
        assert_eq!(row.channels, vec![Channel::Email]);
    }

    #[test]
    fn preference_checks() {
        let sub = Subscriber {
            email: "bob@example.com".to_string(),
            phone: "+15551234567".to_string(),
            categories: vec![Category::Meteors],
            lead_times: vec!["3 minutes".to_string()],
            channels: vec![Channel::Sms],
        };
        assert!(sub.is_subscribed(Category::Meteors));
        assert!(!sub.is_subscribed(Category::SolarEclipse));
        assert!(sub.wants_lead_time("3 minutes"));
        assert!(!sub.wants_lead_time("1 hour"));
        assert!(sub.has_channel(Channel::Sms));
        assert!(!sub.has_channel(Channel::Email));
    }
}
