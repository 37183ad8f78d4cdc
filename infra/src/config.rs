//! Configuration management for infrastructure services

use lh_shared::config::{DatabaseConfig, EmailConfig};
use serde::{Deserialize, Serialize};

/// Infrastructure configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfrastructureConfig {
    /// Database configuration
    pub database: DatabaseConfig,

    /// Email delivery configuration
    pub email: EmailConfig,
}

impl Default for InfrastructureConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

impl InfrastructureConfig {
    /// Assemble from environment variables, loading `.env` first if present
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
