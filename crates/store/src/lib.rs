//! JSON snapshot stores.
//!
//! File-backed implementations of the scheduler's collaborator traits. The
//! event snapshot is read once at startup; the subscriber snapshot is
//! re-read on every fire so preference changes show up on the next tick
//! without a restart (eventual consistency, no coordination with writers).

pub mod events;
pub mod subscribers;

pub use events::JsonEventSource;
pub use subscribers::JsonSubscriberStore;
