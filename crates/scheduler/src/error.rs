use skywatch_core::StoreError;
use thiserror::Error;

/// Startup-time failures that abort the schedule build.
///
/// Errors inside a fire-handler never surface here; they are logged and
/// confined to their tick.
#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("event source unreachable: {0}")]
    EventSource(#[source] StoreError),

    #[error("lead-time catalog is empty")]
    EmptyCatalog,

    #[error("schedule already built")]
    AlreadyBuilt,
}
