//! Mock implementations for testing the account service

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use crate::services::account::Mailer;

/// A sent message captured by the mock mailer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Recording mailer; optionally fails every send
pub struct MockMailer {
    pub sent: Arc<Mutex<Vec<SentMail>>>,
    fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            fail: true,
        }
    }

    pub fn sent_messages(&self) -> Vec<SentMail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), String> {
        if self.fail {
            return Err("mail provider unavailable".to_string());
        }
        self.sent.lock().unwrap().push(SentMail {
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
