//! Queue-backed email dispatcher.
//!
//! Enqueueing is cheap and non-blocking for callers; the worker task owns
//! the transport and retries each message with doubling delays up to
//! `max_retries` attempts before dropping it with a warning.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use lh_core::services::account::{mask_email, Mailer};
use lh_shared::config::EmailConfig;

use super::{EmailMessage, MailTransport};

/// Queue-backed implementation of the core `Mailer` contract
pub struct EmailDispatcher {
    sender: mpsc::Sender<EmailMessage>,
}

impl EmailDispatcher {
    /// Spawn the delivery worker and return the dispatcher handle.
    ///
    /// The worker runs until every dispatcher handle is dropped and the
    /// queue has drained.
    pub fn start<T: MailTransport + 'static>(transport: Arc<T>, config: &EmailConfig) -> Self {
        let (sender, receiver) = mpsc::channel(config.queue_capacity);

        tokio::spawn(delivery_worker(
            receiver,
            transport,
            config.max_retries,
            config.retry_delay_ms,
        ));

        Self { sender }
    }
}

#[async_trait]
impl Mailer for EmailDispatcher {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), String> {
        let message = EmailMessage {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        };

        self.sender
            .send(message)
            .await
            .map_err(|_| "Email queue is closed".to_string())
    }
}

async fn delivery_worker<T: MailTransport>(
    mut receiver: mpsc::Receiver<EmailMessage>,
    transport: Arc<T>,
    max_retries: u32,
    retry_delay_ms: u64,
) {
    while let Some(message) = receiver.recv().await {
        deliver_with_retries(transport.as_ref(), &message, max_retries, retry_delay_ms).await;
    }
}

async fn deliver_with_retries<T: MailTransport>(
    transport: &T,
    message: &EmailMessage,
    max_retries: u32,
    retry_delay_ms: u64,
) {
    let attempts = max_retries.max(1);
    let mut delay = Duration::from_millis(retry_delay_ms);

    for attempt in 1..=attempts {
        match transport.deliver(message).await {
            Ok(()) => {
                debug!(
                    event = "email_delivered",
                    recipient = %mask_email(&message.recipient),
                    subject = %message.subject,
                    attempt = attempt,
                    "Email delivered"
                );
                return;
            }
            Err(err) if attempt < attempts => {
                warn!(
                    event = "email_delivery_retry",
                    recipient = %mask_email(&message.recipient),
                    attempt = attempt,
                    error = %err,
                    "Email delivery failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
            }
            Err(err) => {
                warn!(
                    event = "email_delivery_failed",
                    recipient = %mask_email(&message.recipient),
                    subject = %message.subject,
                    attempts = attempts,
                    error = %err,
                    "Email delivery abandoned"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::MockTransport;

    fn test_config() -> EmailConfig {
        EmailConfig {
            max_retries: 3,
            retry_delay_ms: 10,
            queue_capacity: 8,
            ..EmailConfig::default()
        }
    }

    async fn drain(transport: &MockTransport, expected: usize) {
        for _ in 0..100 {
            if transport.delivered().await.len() >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    }

    #[tokio::test]
    async fn test_dispatcher_delivers_queued_message() {
        let transport = Arc::new(MockTransport::new());
        let dispatcher = EmailDispatcher::start(transport.clone(), &test_config());

        dispatcher
            .send("student@example.com", "Welcome", "Your code is ABC123")
            .await
            .unwrap();

        drain(&transport, 1).await;
        let delivered = transport.delivered().await;
        assert_eq!(delivered.len(), 1);
        assert_eq!(delivered[0].recipient, "student@example.com");
        assert_eq!(delivered[0].body, "Your code is ABC123");
    }

    #[tokio::test]
    async fn test_dispatcher_retries_until_success() {
        let transport = Arc::new(MockTransport::failing_times(2));
        let dispatcher = EmailDispatcher::start(transport.clone(), &test_config());

        dispatcher
            .send("student@example.com", "Welcome", "hello")
            .await
            .unwrap();

        drain(&transport, 1).await;
        assert_eq!(transport.delivered().await.len(), 1);
        assert_eq!(transport.attempt_count(), 3);
    }

    #[tokio::test]
    async fn test_dispatcher_abandons_after_max_retries() {
        let transport = Arc::new(MockTransport::failing_times(10));
        let dispatcher = EmailDispatcher::start(transport.clone(), &test_config());

        dispatcher
            .send("student@example.com", "Welcome", "hello")
            .await
            .unwrap();

        // 3 attempts with 10/20ms delays, then the message is dropped
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(transport.delivered().await.is_empty());
        assert_eq!(transport.attempt_count(), 3);
    }

    #[tokio::test]
    async fn test_dispatcher_preserves_order() {
        let transport = Arc::new(MockTransport::new());
        let dispatcher = EmailDispatcher::start(transport.clone(), &test_config());

        for i in 0..3 {
            dispatcher
                .send("student@example.com", &format!("Subject {}", i), "body")
                .await
                .unwrap();
        }

        drain(&transport, 3).await;
        let delivered = transport.delivered().await;
        let subjects: Vec<&str> = delivered.iter().map(|m| m.subject.as_str()).collect();
        assert_eq!(subjects, vec!["Subject 0", "Subject 1", "Subject 2"]);
    }
}
