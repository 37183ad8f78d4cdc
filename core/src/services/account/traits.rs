//! Trait for outbound mail integration

use async_trait::async_trait;

/// Trait for the notification channel used by the account service.
///
/// Delivery is at-least-once and asynchronous; implementations queue or
/// send and may retry on their own schedule. The account service never
/// awaits delivery inside a request and ignores the outcome beyond
/// logging.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Hand a message to the delivery channel
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), String>;
}
