//! Subscriber resolution for one tick.

use skywatch_core::{Category, StoreError, Subscriber, SubscriberStore};

/// Resolve the subscribers to notify for `(category, lead_time_label)`.
///
/// A subscriber is interested iff they are subscribed to the category AND
/// their preferences contain the lead-time label. Always computed fresh
/// from the store's current snapshot; nothing is cached across ticks. An
/// empty result is not an error.
pub async fn resolve(
    store: &dyn SubscriberStore,
    category: Category,
    lead_time_label: &str,
) -> Result<Vec<Subscriber>, StoreError> {
    let candidates = store.find_subscribers(category).await?;
    Ok(candidates
        .into_iter()
        .filter(|s| s.is_subscribed(category) && s.wants_lead_time(lead_time_label))
        .collect())
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use skywatch_core::Channel;

    use super::*;

    struct FixedStore {
        rows: Vec<Subscriber>,
    }

    #[async_trait]
    impl SubscriberStore for FixedStore {
        async fn find_subscribers(
            &self,
            _category: Category,
        ) -> Result<Vec<Subscriber>, StoreError> {
            Ok(self.rows.clone())
        }
    }

    struct DownStore;

    #[async_trait]
    impl SubscriberStore for DownStore {
        async fn find_subscribers(
            &self,
            _category: Category,
        ) -> Result<Vec<Subscriber>, StoreError> {
            Err(StoreError::Unavailable("connection refused".to_string()))
        }
    }

    fn subscriber(email: &str, categories: Vec<Category>, lead_times: Vec<&str>) -> Subscriber {
        Subscriber {
            email: email.to_string(),
            phone: String::new(),
            categories,
            lead_times: lead_times.into_iter().map(String::from).collect(),
            channels: vec![Channel::Email],
        }
    }

    #[tokio::test]
    async fn requires_both_category_and_lead_time() {
        let store = FixedStore {
            rows: vec![
                subscriber("both@example.com", vec![Category::Meteors], vec!["1 hour"]),
                subscriber("wrong-lead@example.com", vec![Category::Meteors], vec!["24 hours"]),
                subscriber("wrong-cat@example.com", vec![Category::SolarEclipse], vec!["1 hour"]),
                subscriber("neither@example.com", vec![Category::SolarEclipse], vec!["24 hours"]),
            ],
        };

        let resolved = resolve(&store, Category::Meteors, "1 hour").await.unwrap();

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].email, "both@example.com");
    }

    #[tokio::test]
    async fn no_match_is_empty_not_error() {
        let store = FixedStore { rows: Vec::new() };
        let resolved = resolve(&store, Category::LunarEclipse, "2 minutes").await.unwrap();
        assert!(resolved.is_empty());
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let result = resolve(&DownStore, Category::Meteors, "1 hour").await;
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
    }

    #[tokio::test]
    async fn refilters_category_even_if_store_over_returns() {
        // A store that ignores the category argument entirely.
        let store = FixedStore {
            rows: vec![subscriber(
                "other@example.com",
                vec![Category::SolarEclipse],
                vec!["1 hour"],
            )],
        };

        let resolved = resolve(&store, Category::Meteors, "1 hour").await.unwrap();
        assert!(resolved.is_empty());
    }
}
