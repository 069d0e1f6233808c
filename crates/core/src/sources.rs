//! Collaborator capabilities the scheduler consumes.
//!
//! Both stores are read-only from the scheduler's point of view: events are
//! listed once at startup, subscribers are re-read at every fire time so a
//! tick always sees the current snapshot.

use async_trait::async_trait;

use crate::error::StoreError;
use crate::event::{Category, Event};
use crate::subscriber::Subscriber;

/// Source of the known events, queried once at orchestrator startup.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn list_events(&self) -> Result<Vec<Event>, StoreError>;
}

/// Subscriber snapshot store, queried once per timer fire.
///
/// Implementations return every subscriber interested in `category`;
/// lead-time filtering happens in the resolver.
#[async_trait]
pub trait SubscriberStore: Send + Sync {
    async fn find_subscribers(&self, category: Category) -> Result<Vec<Subscriber>, StoreError>;
}
