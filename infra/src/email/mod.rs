//! Outbound email delivery.
//!
//! [`EmailDispatcher`] implements the core `Mailer` contract by pushing
//! messages onto a bounded in-process queue; a background worker drains
//! the queue and hands each message to a [`MailTransport`]. Delivery is
//! at-least-once with bounded retries.

mod dispatcher;
mod http_api;
mod mock;

pub use dispatcher::EmailDispatcher;
pub use http_api::HttpApiMailer;
pub use mock::MockTransport;

use async_trait::async_trait;

use crate::InfrastructureError;

/// A fully addressed outbound message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Trait for the wire-level mail channel behind the dispatcher
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Deliver a single message to the provider
    async fn deliver(&self, message: &EmailMessage) -> Result<(), InfrastructureError>;
}
