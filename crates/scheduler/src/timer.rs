//! One-shot timer registry.
//!
//! Each `(event, lead-time)` pair gets exactly one timer for the lifetime
//! of the process. The duration until the fire instant is computed once and
//! slept on tokio's monotonic clock, so a wall-clock adjustment during the
//! wait cannot fire a timer twice or re-arm it.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::warn;

/// Handle to a scheduled one-shot timer.
pub struct TimerHandle {
    join: JoinHandle<()>,
}

impl TimerHandle {
    /// Cancel the timer. A handler already past its sleep keeps running.
    pub fn cancel(&self) {
        self.join.abort();
    }

    pub fn is_finished(&self) -> bool {
        self.join.is_finished()
    }
}

/// Registers one-shot timers and tracks their in-flight handlers for
/// graceful drain at shutdown.
#[derive(Default)]
pub struct TimerRegistry {
    draining: Arc<AtomicBool>,
    in_flight: Arc<AtomicUsize>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `on_fire` to run once at `fire_at`.
    ///
    /// The wait is computed against the caller-provided `now` so every
    /// timer of one schedule build shares a single reference instant.
    /// A fire time at or before `now` fires immediately.
    pub fn schedule<F, Fut>(
        &self,
        fire_at: DateTime<Utc>,
        now: DateTime<Utc>,
        on_fire: F,
    ) -> TimerHandle
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = ()> + Send + 'static,
    {
        let wait = (fire_at - now).to_std().unwrap_or(Duration::ZERO);
        let draining = Arc::clone(&self.draining);
        let in_flight = Arc::clone(&self.in_flight);

        let join = tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            if draining.load(Ordering::SeqCst) {
                return;
            }
            in_flight.fetch_add(1, Ordering::SeqCst);
            on_fire().await;
            in_flight.fetch_sub(1, Ordering::SeqCst);
        });

        TimerHandle { join }
    }

    /// Number of handlers currently executing.
    pub fn in_flight(&self) -> usize {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Graceful drain: timers that have not fired yet are suppressed,
    /// handlers already executing get up to `grace` to finish, then every
    /// pending timer task is cancelled.
    pub async fn drain(&self, handles: Vec<TimerHandle>, grace: Duration) {
        self.draining.store(true, Ordering::SeqCst);

        let deadline = tokio::time::Instant::now() + grace;
        while self.in_flight.load(Ordering::SeqCst) > 0 {
            if tokio::time::Instant::now() >= deadline {
                warn!(
                    in_flight = self.in_flight.load(Ordering::SeqCst),
                    "shutdown grace elapsed with dispatches still in flight"
                );
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }

        for handle in handles {
            handle.cancel();
        }
    }
}
