//! SMS transport via the Twilio Messages REST API.
//!
//! Each message is one authenticated form POST to
//! `/2010-04-01/Accounts/{sid}/Messages.json`.

use skywatch_core::config::TwilioConfig;

use crate::traits::{NotifyError, SmsTransport};

/// Sends notification texts through Twilio.
#[derive(Debug)]
pub struct TwilioSmsTransport {
    account_sid: String,
    auth_token: String,
    from_number: String,
    client: reqwest::Client,
}

impl TwilioSmsTransport {
    /// Build a transport from Twilio configuration.
    ///
    /// Returns [`NotifyError::Config`] when the SID, auth token, or
    /// sending number is missing.
    pub fn from_config(config: &TwilioConfig) -> Result<Self, NotifyError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(NotifyError::Config(
                "Twilio SID and auth token must be set".to_string(),
            ));
        }
        if config.from_number.is_empty() {
            return Err(NotifyError::Config(
                "Twilio sending number must be set".to_string(),
            ));
        }

        Ok(Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait::async_trait]
impl SmsTransport for TwilioSmsTransport {
    async fn send_one(&self, recipient: &str, body: &str) -> Result<(), NotifyError> {
        let url = format!(
            "https://api.twilio.com/2010-04-01/Accounts/{}/Messages.json",
            self.account_sid
        );

        let params = [
            ("To", recipient),
            ("From", self.from_number.as_str()),
            ("Body", body),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let resp_body: serde_json::Value = response.json().await.unwrap_or_default();
            let message = resp_body
                .get("message")
                .and_then(|v| v.as_str())
                .unwrap_or("Unknown Twilio API error");
            return Err(NotifyError::Sms(format!("{status}: {message}")));
        }

        tracing::info!(channel = "sms", recipient = %recipient, "notification sent");
        Ok(())
    }
}
