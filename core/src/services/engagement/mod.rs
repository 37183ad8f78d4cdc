//! Engagement service module
//!
//! This module implements course engagement:
//! - Like and favourite toggles (collapse-on-off: storage only holds "on")
//! - Create-once ratings with an explicit update path
//! - Aggregate rating computation

mod key_lock;
mod service;

#[cfg(test)]
mod tests;

pub use service::{EngagementService, ToggleOutcome};
