//! Outbound email configuration

use serde::{Deserialize, Serialize};

/// Configuration for the outbound email provider and sender identity
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Base URL of the mail provider HTTP API
    pub api_url: String,

    /// API key for the mail provider
    pub api_key: String,

    /// Sender address placed on every outbound message
    pub from_address: String,

    /// Sender display name
    pub from_name: String,

    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,

    /// Maximum delivery attempts per message
    pub max_retries: u32,

    /// Initial retry delay in milliseconds (doubled per attempt)
    pub retry_delay_ms: u64,

    /// Capacity of the in-process delivery queue
    pub queue_capacity: usize,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_url: String::from("https://api.mailprovider.example/v3/send"),
            api_key: String::new(),
            from_address: String::from("no-reply@learnhub.app"),
            from_name: String::from("LearnHub"),
            request_timeout_secs: 30,
            max_retries: 3,
            retry_delay_ms: 1000,
            queue_capacity: 256,
        }
    }
}

impl EmailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: std::env::var("EMAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("EMAIL_API_KEY").unwrap_or_default(),
            from_address: std::env::var("EMAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            from_name: std::env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            request_timeout_secs: std::env::var("EMAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
            max_retries: std::env::var("EMAIL_MAX_RETRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_retries),
            retry_delay_ms: std::env::var("EMAIL_RETRY_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.retry_delay_ms),
            queue_capacity: std::env::var("EMAIL_QUEUE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.queue_capacity),
        }
    }

    /// Check whether an API key has been configured
    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}
