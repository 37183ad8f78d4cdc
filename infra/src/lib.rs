//! # Infrastructure Layer
//!
//! Concrete implementations of the LearnHub core's external contracts:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: queue-backed dispatcher and mail-provider HTTP client
//! - **Configuration**: environment-driven infrastructure settings

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Email module - delivery queue and provider clients
pub mod email;

/// Configuration module for infrastructure services
pub mod config;

// Re-export core error types for convenience
pub use lh_core::errors::{DomainError, DomainResult};

/// Infrastructure-level failures, below the domain error taxonomy
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Email delivery error: {0}")]
    Email(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Dependency {
            message: err.to_string(),
        }
    }
}
