//! File-backed subscriber store.

use std::path::PathBuf;

use async_trait::async_trait;
use skywatch_core::{Category, StoreError, Subscriber, SubscriberStore};

/// Reads subscriber rows from a JSON array file.
///
/// The file is re-read on every [`SubscriberStore::find_subscribers`]
/// call, so each tick sees the snapshot current at its fire time. Rows
/// that omit preference fields get the fresh-account defaults.
#[derive(Debug, Clone)]
pub struct JsonSubscriberStore {
    path: PathBuf,
}

impl JsonSubscriberStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SubscriberStore for JsonSubscriberStore {
    async fn find_subscribers(&self, category: Category) -> Result<Vec<Subscriber>, StoreError> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let rows: Vec<Subscriber> =
            serde_json::from_str(&raw).map_err(|e| StoreError::Parse(e.to_string()))?;

        let matching: Vec<Subscriber> = rows
            .into_iter()
            .filter(|s| s.is_subscribed(category))
            .collect();
        tracing::debug!(
            path = %self.path.display(),
            category = %category,
            count = matching.len(),
            "subscriber snapshot read"
        );
        Ok(matching)
    }
}

#[cfg(test)]
mod tests {
    use skywatch_core::Channel;

    use super::*;

    fn write_snapshot(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[tokio::test]
    async fn filters_by_category() {
        let file = write_snapshot(
            r#"[
                {"email": "alice@example.com", "categories": ["meteors"], "lead_times": ["1 hour"], "channels": ["email"]},
                {"email": "bob@example.com", "categories": ["solar_eclipse"], "lead_times": ["1 hour"], "channels": ["email"]}
            ]"#,
        );

        let store = JsonSubscriberStore::new(file.path());
        let rows = store.find_subscribers(Category::Meteors).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].email, "alice@example.com");
    }

    #[tokio::test]
    async fn minimal_rows_get_defaults() {
        let file = write_snapshot(r#"[{"email": "carol@example.com"}]"#);

        let store = JsonSubscriberStore::new(file.path());
        // Default subscriptions cover every category.
        let rows = store.find_subscribers(Category::LunarEclipse).await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].lead_times, vec!["1 hour".to_string()]);
        assert_eq!(rows[0].channels, vec![Channel::Email]);
    }

    #[tokio::test]
    async fn reread_sees_updated_snapshot() {
        let file = write_snapshot(r#"[{"email": "carol@example.com"}]"#);
        let store = JsonSubscriberStore::new(file.path());

        assert_eq!(
            store.find_subscribers(Category::Meteors).await.unwrap().len(),
            1
        );

        std::fs::write(file.path(), "[]").unwrap();
        assert!(store
            .find_subscribers(Category::Meteors)
            .await
            .unwrap()
            .is_empty());
    }
}
