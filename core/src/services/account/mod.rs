//! Account service module
//!
//! This module provides the account lifecycle:
//! - Registration with email activation
//! - Account activation by code
//! - Login (credential + active-state check)
//! - Password recovery (reset-now) and password change

mod config;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::AccountServiceConfig;
pub use service::{mask_email, AccountService, RegisterRequest};
pub use traits::Mailer;
