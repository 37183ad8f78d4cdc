//! Business services containing domain logic and use cases.

pub mod account;
pub mod authorization;
pub mod engagement;

// Re-export commonly used types
pub use account::{AccountService, AccountServiceConfig, Mailer, RegisterRequest};
pub use authorization::{allow, authorize, Action, Actor, Resource, ResourceKind};
pub use engagement::{EngagementService, ToggleOutcome};
