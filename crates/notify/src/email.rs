//! SMTP email transport via `lettre` with TLS support.
//!
//! Sends one message per dispatch batch, with every recipient of the tick
//! addressed on it.

use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};
use skywatch_core::config::SmtpConfig;

use crate::traits::{EmailTransport, NotifyError};

/// Sends notification emails through an SMTP relay.
#[derive(Debug)]
pub struct SmtpEmailTransport {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpEmailTransport {
    /// Build a transport from SMTP configuration.
    ///
    /// Port 465 uses implicit TLS; everything else uses STARTTLS.
    /// SMTP credentials are resolved from the `SMTP_USERNAME` and
    /// `SMTP_PASSWORD` environment variables; if both are set they are
    /// passed to the transport, otherwise the connection is
    /// unauthenticated.
    pub fn from_config(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e: lettre::address::AddressError| NotifyError::Config(e.to_string()))?;

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| NotifyError::Config(e.to_string()))?
            .port(config.port);

        if let (Ok(username), Ok(password)) =
            (std::env::var("SMTP_USERNAME"), std::env::var("SMTP_PASSWORD"))
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait::async_trait]
impl EmailTransport for SmtpEmailTransport {
    async fn send_batch(
        &self,
        recipients: &[String],
        subject: &str,
        body: &str,
    ) -> Result<(), NotifyError> {
        if recipients.is_empty() {
            return Err(NotifyError::Config(
                "at least one recipient is required".to_string(),
            ));
        }

        let mut message_builder = Message::builder().from(self.from.clone());
        for recipient in recipients {
            let mailbox: Mailbox = recipient
                .parse()
                .map_err(|e: lettre::address::AddressError| NotifyError::Smtp(e.to_string()))?;
            message_builder = message_builder.to(mailbox);
        }

        let email = message_builder
            .subject(subject)
            .body(body.to_string())
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| NotifyError::Smtp(e.to_string()))?;

        tracing::info!(
            channel = "email",
            subject = %subject,
            recipients = recipients.len(),
            "notification batch delivered"
        );

        Ok(())
    }
}
