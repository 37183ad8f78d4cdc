//! HTTP client for the mail provider's send API.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use tracing::debug;

use lh_core::services::account::mask_email;
use lh_shared::config::EmailConfig;

use crate::InfrastructureError;

use super::{EmailMessage, MailTransport};

/// Transport that posts messages to the provider's JSON send endpoint
pub struct HttpApiMailer {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from_address: String,
    from_name: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    from_address: &'a str,
    from_name: &'a str,
    to: &'a str,
    subject: &'a str,
    text_body: &'a str,
}

impl HttpApiMailer {
    /// Build the client from email configuration
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_api_key() {
            return Err(InfrastructureError::Config(
                "EMAIL_API_KEY is not configured".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| {
                InfrastructureError::Email(format!("Failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
            from_name: config.from_name.clone(),
        })
    }
}

#[async_trait]
impl MailTransport for HttpApiMailer {
    async fn deliver(&self, message: &EmailMessage) -> Result<(), InfrastructureError> {
        let payload = SendRequest {
            from_address: &self.from_address,
            from_name: &self.from_name,
            to: &message.recipient,
            subject: &message.subject,
            text_body: &message.body,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| InfrastructureError::Email(format!("Send request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Email(format!(
                "Provider returned {}: {}",
                status, detail
            )));
        }

        debug!(
            event = "email_provider_accepted",
            recipient = %mask_email(&message.recipient),
            status = %status,
            "Provider accepted message"
        );

        Ok(())
    }
}
