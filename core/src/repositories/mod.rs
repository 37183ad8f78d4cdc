//! Repository interfaces abstracting the persistence layer.
//!
//! Each repository module carries the trait plus an in-memory mock used by
//! service tests (and available to downstream crates for their own tests).

pub mod engagement;
pub mod user;

pub use engagement::{EngagementRepository, MockEngagementRepository};
pub use user::{MockUserRepository, UserRepository};
