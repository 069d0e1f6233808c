//! Per-event, per-lead-time notification scheduling.
//!
//! At startup the orchestrator loads all events once, computes an absolute
//! fire time for every event x lead-time pair, and registers a one-shot
//! timer for each pair still in the future. At fire time the handler
//! resolves the interested subscribers from the current snapshot, renders
//! the message, and dispatches it. The schedule is immutable for the
//! process lifetime; a restart picks up new events.

pub mod error;
pub mod fire_time;
pub mod orchestrator;
pub mod resolve;
pub mod timer;

pub use error::SchedulerError;
pub use fire_time::fire_at;
pub use orchestrator::{Scheduler, SchedulerContext, SchedulerState};
pub use resolve::resolve;
pub use timer::{TimerHandle, TimerRegistry};
