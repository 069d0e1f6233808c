//! Fans one tick's resolved subscribers out to the delivery channels.
//!
//! Subscribers are partitioned by enabled channel; a subscriber with both
//! email and SMS enabled lands in both partitions and gets both messages.
//! The email partition goes out as a single batched send, SMS as one call
//! per recipient. Individual failures don't block other recipients or the
//! other channel.

use std::collections::HashSet;

use skywatch_core::{Channel, Subscriber};

use crate::templates::RenderedMessage;
use crate::traits::{EmailTransport, SmsTransport};

/// Delivery counts for one channel within a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChannelReport {
    pub attempted: usize,
    pub succeeded: usize,
    pub failed: usize,
}

/// Outcome of dispatching one tick. No retries happen after this; a failed
/// send is final for the tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub email: ChannelReport,
    pub sms: ChannelReport,
}

/// Deliver `message` to every subscriber over their enabled channels.
///
/// Within a channel each address or number appears at most once, even if
/// the subscriber list contains duplicates.
pub async fn dispatch(
    subscribers: &[Subscriber],
    message: &RenderedMessage,
    email: &dyn EmailTransport,
    sms: &dyn SmsTransport,
) -> DispatchReport {
    let mut report = DispatchReport::default();

    let mut email_recipients = Vec::new();
    let mut seen_addresses = HashSet::new();
    let mut sms_recipients = Vec::new();
    let mut seen_numbers = HashSet::new();

    for subscriber in subscribers {
        if subscriber.has_channel(Channel::Email)
            && seen_addresses.insert(subscriber.email.as_str())
        {
            email_recipients.push(subscriber.email.clone());
        }
        if subscriber.has_channel(Channel::Sms) {
            if subscriber.phone.is_empty() {
                tracing::warn!(
                    subscriber = %subscriber.email,
                    "sms channel enabled but no phone number on file"
                );
            } else if seen_numbers.insert(subscriber.phone.as_str()) {
                sms_recipients.push(subscriber.phone.clone());
            }
        }
    }

    if !email_recipients.is_empty() {
        report.email.attempted = email_recipients.len();
        match email
            .send_batch(&email_recipients, &message.subject, &message.body)
            .await
        {
            Ok(()) => report.email.succeeded = email_recipients.len(),
            Err(e) => {
                tracing::error!(
                    channel = "email",
                    recipients = email_recipients.len(),
                    error = %e,
                    "batch delivery failed"
                );
                report.email.failed = email_recipients.len();
            }
        }
    }

    for number in &sms_recipients {
        report.sms.attempted += 1;
        match sms.send_one(number, &message.body).await {
            Ok(()) => report.sms.succeeded += 1,
            Err(e) => {
                tracing::warn!(
                    channel = "sms",
                    recipient = %number,
                    error = %e,
                    "delivery failed"
                );
                report.sms.failed += 1;
            }
        }
    }

    report
}
