//! Minijinja rendering of notification messages.
//!
//! One subject/body template pair per event category, registered and
//! syntax-checked at construction. Rendering is pure: the same category,
//! lead-time label, and start time always produce the same message.

use chrono::{DateTime, Utc};
use minijinja::{context, Environment};
use skywatch_core::Category;

use crate::traits::NotifyError;

/// A rendered notification ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
    pub subject: String,
    pub body: String,
}

const METEORS_SUBJECT: &str = "Meteor shower {{ lead_time }} away";
const METEORS_BODY: &str = "\
A meteor shower begins at {{ starts_at }}, {{ lead_time }} from now.\n\
Find a dark spot away from city lights and look up. Clear skies!";

const LUNAR_SUBJECT: &str = "Lunar eclipse {{ lead_time }} away";
const LUNAR_BODY: &str = "\
A lunar eclipse begins at {{ starts_at }}, {{ lead_time }} from now.\n\
The Moon will pass through Earth's shadow; no equipment needed to watch.";

const SOLAR_SUBJECT: &str = "Solar eclipse {{ lead_time }} away";
const SOLAR_BODY: &str = "\
A solar eclipse begins at {{ starts_at }}, {{ lead_time }} from now.\n\
Never look at the Sun directly; use certified eclipse glasses or a projection.";

/// Renders per-category notification messages.
#[derive(Debug)]
pub struct MessageRenderer {
    env: Environment<'static>,
}

impl MessageRenderer {
    /// Build a renderer with the built-in templates registered.
    ///
    /// Registration parses every template, so syntax errors surface here
    /// rather than at fire time.
    pub fn new() -> Result<Self, NotifyError> {
        let mut env = Environment::new();

        let templates = [
            ("meteors.subject", METEORS_SUBJECT),
            ("meteors.body", METEORS_BODY),
            ("lunar_eclipse.subject", LUNAR_SUBJECT),
            ("lunar_eclipse.body", LUNAR_BODY),
            ("solar_eclipse.subject", SOLAR_SUBJECT),
            ("solar_eclipse.body", SOLAR_BODY),
        ];
        for (name, source) in templates {
            env.add_template(name, source)
                .map_err(|e| NotifyError::Template(e.to_string()))?;
        }

        Ok(Self { env })
    }

    /// Render the subject and body for a `(category, lead-time)` tick.
    pub fn render(
        &self,
        category: Category,
        lead_time_label: &str,
        start_time: DateTime<Utc>,
    ) -> Result<RenderedMessage, NotifyError> {
        let ctx = context! {
            lead_time => lead_time_label,
            starts_at => start_time.format("%Y-%m-%d %H:%M UTC").to_string(),
        };

        let subject = self
            .env
            .get_template(&format!("{}.subject", category.as_str()))
            .and_then(|t| t.render(&ctx))
            .map_err(|e| NotifyError::Template(e.to_string()))?;

        let body = self
            .env
            .get_template(&format!("{}.body", category.as_str()))
            .and_then(|t| t.render(&ctx))
            .map_err(|e| NotifyError::Template(e.to_string()))?;

        Ok(RenderedMessage { subject, body })
    }
}
