//! File-backed event source.

use std::path::PathBuf;

use async_trait::async_trait;
use skywatch_core::{Event, EventSource, StoreError};

/// Reads the event catalog from a JSON array file.
///
/// The scheduler calls [`EventSource::list_events`] exactly once, at
/// startup; an unreadable or malformed file is a fatal configuration
/// error for the process.
#[derive(Debug, Clone)]
pub struct JsonEventSource {
    path: PathBuf,
}

impl JsonEventSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl EventSource for JsonEventSource {
    async fn list_events(&self) -> Result<Vec<Event>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let events: Vec<Event> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Parse(e.to_string()))?;
        tracing::info!(path = %self.path.display(), count = events.len(), "loaded events");
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use skywatch_core::Category;

    use super::*;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[tokio::test]
    async fn lists_events_from_file() {
        let file = write_snapshot(
            r#"[
                {"category": "meteors", "start_time": "2026-08-12T03:00:00Z"},
                {"category": "solar_eclipse", "start_time": "2026-08-12T17:30:00Z"}
            ]"#,
        );

        let source = JsonEventSource::new(file.path());
        let events = source.list_events().await.unwrap();

        assert_eq!(events.len(), 2);
        assert_eq!(events[0].category, Category::Meteors);
        assert_eq!(events[1].category, Category::SolarEclipse);
    }

    #[tokio::test]
    async fn missing_file_is_io_error() {
        let source = JsonEventSource::new("/nonexistent/events.json");
        assert!(matches!(
            source.list_events().await,
            Err(StoreError::Io(_))
        ));
    }

    #[tokio::test]
    async fn malformed_json_is_parse_error() {
        let file = write_snapshot("{not json");
        let source = JsonEventSource::new(file.path());
        assert!(matches!(
            source.list_events().await,
            Err(StoreError::Parse(_))
        ));
    }
}
