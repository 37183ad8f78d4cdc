//! Type definitions shared across the server crates.

pub mod response;

// Re-export commonly used types at module level
pub use response::{ApiResponse, ErrorResponse};
