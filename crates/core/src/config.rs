use std::env;

use serde::{Deserialize, Serialize};

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_u16(key: &str, default: u16) -> u16 {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub smtp: SmtpConfig,
    pub twilio: TwilioConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    pub fn from_env() -> Self {
        Self {
            smtp: SmtpConfig::from_env(),
            twilio: TwilioConfig::from_env(),
        }
    }
}

/// SMTP relay settings for the email channel. Credentials are picked up
/// separately by the transport from `SMTP_USERNAME`/`SMTP_PASSWORD`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    /// Sender mailbox, e.g. `"Skywatch <alerts@skywatch.example>"`.
    pub from: String,
}

impl SmtpConfig {
    pub fn from_env() -> Self {
        Self {
            host: env_or("SMTP_HOST", "localhost"),
            port: env_u16("SMTP_PORT", 587),
            from: env_or("SMTP_FROM", "Skywatch <alerts@skywatch.example>"),
        }
    }
}

/// Twilio REST API settings for the SMS channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Sending phone number in E.164 form.
    pub from_number: String,
}

impl TwilioConfig {
    pub fn from_env() -> Self {
        Self {
            account_sid: env_or("TWILIO_SID", ""),
            auth_token: env_or("TWILIO_TOKEN", ""),
            from_number: env_or("TWILIO_FROM", ""),
        }
    }
}
