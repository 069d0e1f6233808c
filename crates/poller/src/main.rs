//! poller — builds the notification schedule and runs it until shutdown.
//!
//! Loads all events once at startup, registers a one-shot timer per
//! event x lead-time pair still in the future, and dispatches email/SMS
//! notifications as the timers fire. New events require a restart.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use skywatch_core::{config, Config, LeadTime};
use skywatch_notify::{
    email::SmtpEmailTransport, sms::TwilioSmsTransport, MessageRenderer,
};
use skywatch_scheduler::{Scheduler, SchedulerContext};
use skywatch_store::{JsonEventSource, JsonSubscriberStore};

// ── CLI ─────────────────────────────────────────────────────────────

/// Skywatch poller — schedules and dispatches event notifications.
#[derive(Parser, Debug)]
#[command(name = "poller", version, about)]
struct Cli {
    /// Path to the event snapshot file.
    #[arg(long, env = "SKYWATCH_EVENTS", default_value = "data/events.json")]
    events: String,

    /// Path to the subscriber snapshot file.
    #[arg(long, env = "SKYWATCH_SUBSCRIBERS", default_value = "data/subscribers.json")]
    subscribers: String,

    /// Seconds to let in-flight dispatches finish during shutdown.
    #[arg(long, env = "SKYWATCH_SHUTDOWN_GRACE", default_value_t = 10)]
    shutdown_grace: u64,
}

// ── main ────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    config::load_dotenv();
    let cli = Cli::parse();
    let config = Config::from_env();

    let email = SmtpEmailTransport::from_config(&config.smtp)
        .context("building SMTP transport")?;
    let sms = TwilioSmsTransport::from_config(&config.twilio)
        .context("building Twilio transport")?;
    let renderer = MessageRenderer::new().context("registering message templates")?;

    let ctx = SchedulerContext {
        events: Arc::new(JsonEventSource::new(&cli.events)),
        subscribers: Arc::new(JsonSubscriberStore::new(&cli.subscribers)),
        email: Arc::new(email),
        sms: Arc::new(sms),
        renderer,
    };

    let mut scheduler = Scheduler::new(ctx, LeadTime::catalog());
    let registered = scheduler
        .build_schedule()
        .await
        .context("building notification schedule")?;
    info!(timers = registered, "poller running");

    tokio::signal::ctrl_c()
        .await
        .context("waiting for shutdown signal")?;
    info!("shutdown signal received");

    scheduler
        .shutdown(Duration::from_secs(cli.shutdown_grace))
        .await;
    info!("poller exited cleanly");

    Ok(())
}
