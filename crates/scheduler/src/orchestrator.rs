//! Scheduler orchestrator: builds the event x lead-time schedule once at
//! startup and owns the timer registry for the process lifetime.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use skywatch_core::{Event, EventSource, LeadTime, SubscriberStore};
use skywatch_notify::{dispatch, EmailTransport, MessageRenderer, SmsTransport};
use tracing::{debug, error, info};

use crate::error::SchedulerError;
use crate::fire_time::fire_at;
use crate::resolve::resolve;
use crate::timer::{TimerHandle, TimerRegistry};

/// Collaborators the scheduler needs, passed in explicitly at construction
/// so tests can substitute doubles without process-wide state.
pub struct SchedulerContext {
    pub events: Arc<dyn EventSource>,
    pub subscribers: Arc<dyn SubscriberStore>,
    pub email: Arc<dyn EmailTransport>,
    pub sms: Arc<dyn SmsTransport>,
    pub renderer: MessageRenderer,
}

/// Build lifecycle. `Running` is terminal: the schedule never goes back to
/// `Unbuilt`, and events added after the build require a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Unbuilt,
    Building,
    Running,
}

/// The scheduling authority. Owns every timer handle it registers.
pub struct Scheduler {
    ctx: Arc<SchedulerContext>,
    lead_times: Vec<LeadTime>,
    registry: TimerRegistry,
    handles: Vec<TimerHandle>,
    state: SchedulerState,
}

impl Scheduler {
    pub fn new(ctx: SchedulerContext, lead_times: Vec<LeadTime>) -> Self {
        Self {
            ctx: Arc::new(ctx),
            lead_times,
            registry: TimerRegistry::new(),
            handles: Vec::new(),
            state: SchedulerState::Unbuilt,
        }
    }

    /// Load all events once and register a one-shot timer for every
    /// event x lead-time pair whose fire time is still in the future.
    ///
    /// Pairs already elapsed are skipped at info level; they are expected
    /// during catch-up restarts, not errors. Returns the number of timers
    /// registered.
    pub async fn build_schedule(&mut self) -> Result<usize, SchedulerError> {
        if self.state != SchedulerState::Unbuilt {
            return Err(SchedulerError::AlreadyBuilt);
        }
        if self.lead_times.is_empty() {
            return Err(SchedulerError::EmptyCatalog);
        }
        self.state = SchedulerState::Building;

        let events = self
            .ctx
            .events
            .list_events()
            .await
            .map_err(SchedulerError::EventSource)?;

        let now = Utc::now();
        let mut skipped = 0usize;

        for event in events {
            for lead_time in &self.lead_times {
                let fire = fire_at(event.start_time, lead_time);
                if fire <= now {
                    info!(
                        category = %event.category,
                        lead_time = %lead_time,
                        fire_at = %fire,
                        "fire time already elapsed, skipping"
                    );
                    skipped += 1;
                    continue;
                }

                let ctx = Arc::clone(&self.ctx);
                let label = lead_time.label();
                let handle = self
                    .registry
                    .schedule(fire, now, move || run_tick(ctx, event, label));
                self.handles.push(handle);
            }
        }

        self.state = SchedulerState::Running;
        info!(
            timers = self.handles.len(),
            skipped,
            "schedule built"
        );
        Ok(self.handles.len())
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Number of registered timers (future pairs only).
    pub fn scheduled_count(&self) -> usize {
        self.handles.len()
    }

    /// Graceful shutdown: in-flight dispatches get up to `grace` to
    /// complete, pending timers are cancelled.
    pub async fn shutdown(self, grace: Duration) {
        info!(timers = self.handles.len(), "scheduler shutting down");
        self.registry.drain(self.handles, grace).await;
    }
}

/// One tick: resolve subscribers from the current snapshot, render the
/// message, dispatch. Every failure is confined to this tick; sibling
/// timers and the orchestrator never see it.
async fn run_tick(ctx: Arc<SchedulerContext>, event: Event, lead_time_label: String) {
    debug!(category = %event.category, lead_time = %lead_time_label, "tick fired");

    let subscribers = match resolve(ctx.subscribers.as_ref(), event.category, &lead_time_label).await
    {
        Ok(subscribers) => subscribers,
        Err(e) => {
            error!(
                category = %event.category,
                lead_time = %lead_time_label,
                error = %e,
                "subscriber resolution failed, abandoning tick"
            );
            return;
        }
    };

    if subscribers.is_empty() {
        debug!(
            category = %event.category,
            lead_time = %lead_time_label,
            "no interested subscribers"
        );
        return;
    }

    let message = match ctx
        .renderer
        .render(event.category, &lead_time_label, event.start_time)
    {
        Ok(message) => message,
        Err(e) => {
            error!(
                category = %event.category,
                lead_time = %lead_time_label,
                error = %e,
                "message rendering failed, abandoning tick"
            );
            return;
        }
    };

    let report = dispatch(
        &subscribers,
        &message,
        ctx.email.as_ref(),
        ctx.sms.as_ref(),
    )
    .await;

    info!(
        category = %event.category,
        lead_time = %lead_time_label,
        email_attempted = report.email.attempted,
        email_failed = report.email.failed,
        sms_attempted = report.sms.attempted,
        sms_failed = report.sms.failed,
        "tick dispatched"
    );
}
