//! Domain entities representing core business objects.

pub mod activation_code;
pub mod course;
pub mod engagement;
pub mod user;

// Re-export commonly used types
pub use activation_code::{generate_activation_code, generate_password, CODE_LENGTH};
pub use course::{Comment, Course, CourseModule, Subject};
pub use engagement::{EngagementKind, EngagementMark, Rating};
pub use user::User;
