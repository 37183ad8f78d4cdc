//! Domain-specific error types and error handling.

mod types;

// Re-export all error types and utilities
pub use types::{AccountError, EngagementError, ValidationError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    /// Policy denial. Deliberately carries no detail so callers cannot
    /// probe resource ownership through error messages.
    #[error("Forbidden")]
    Forbidden,

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Conflict on resource: {resource}")]
    Conflict { resource: String },

    #[error("Dependency failure: {message}")]
    Dependency { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Engagement(#[from] EngagementError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            DomainError::Forbidden => "FORBIDDEN",
            DomainError::NotFound { .. } => "NOT_FOUND",
            DomainError::Conflict { .. } => "CONFLICT",
            DomainError::Dependency { .. } => "DEPENDENCY_FAILURE",
            DomainError::Internal { .. } => "INTERNAL_ERROR",
            DomainError::Account(e) => e.code(),
            DomainError::Engagement(e) => e.code(),
            DomainError::Validation(e) => e.code(),
        }
    }
}

impl From<DomainError> for lh_shared::ErrorResponse {
    fn from(err: DomainError) -> Self {
        lh_shared::ErrorResponse::new(err.code(), err.to_string())
    }
}
