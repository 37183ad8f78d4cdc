//! Value objects representing immutable domain concepts.

pub mod authenticated_user;
pub mod rating_value;

// Re-export commonly used types
pub use authenticated_user::AuthenticatedUser;
pub use rating_value::{AverageRating, RatingValue};
