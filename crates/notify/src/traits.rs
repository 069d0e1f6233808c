//! Transport trait definitions and shared error types.

/// Errors that can occur during notification delivery.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SMTP delivery failed: {0}")]
    Smtp(String),

    #[error("SMS delivery failed: {0}")]
    Sms(String),

    #[error("Template rendering failed: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Batched email channel: one outbound call delivers to every recipient.
#[async_trait::async_trait]
pub trait EmailTransport: Send + Sync {
    /// Send one message with all `recipients` addressed on it.
    async fn send_batch(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), NotifyError>;
}

/// Per-recipient SMS channel: no batching primitive exists, each message
/// is one outbound call.
#[async_trait::async_trait]
pub trait SmsTransport: Send + Sync {
    async fn send_one(&self, recipient: &str, body: &str) -> Result<(), NotifyError>;
}
