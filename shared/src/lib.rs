//! Shared utilities and common types for the LearnHub server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Response envelope and error response structures
//! - Validation helpers (email format, field lengths)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, EmailConfig, ServerConfig};
pub use types::{ApiResponse, ErrorResponse};
pub use utils::validation;
