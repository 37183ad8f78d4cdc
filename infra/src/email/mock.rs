//! Recording transport for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::InfrastructureError;

use super::{EmailMessage, MailTransport};

/// Transport that records delivered messages and can inject failures
pub struct MockTransport {
    delivered: Arc<Mutex<Vec<EmailMessage>>>,
    attempts: AtomicU32,
    fail_first: u32,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            attempts: AtomicU32::new(0),
            fail_first: 0,
        }
    }

    /// Transport whose first `n` delivery attempts fail
    pub fn failing_times(n: u32) -> Self {
        Self {
            fail_first: n,
            ..Self::new()
        }
    }

    /// Messages successfully delivered so far
    pub async fn delivered(&self) -> Vec<EmailMessage> {
        self.delivered.lock().await.clone()
    }

    /// Total delivery attempts, including failed ones
    pub fn attempt_count(&self) -> u32 {
        self.attempts.load(Ordering::SeqCst)
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for MockTransport {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), InfrastructureError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if attempt <= self.fail_first {
            return Err(InfrastructureError::Email(format!(
                "Injected failure on attempt {}",
                attempt
            )));
        }
        self.delivered.lock().await.push(message.clone());
        Ok(())
    }
}
