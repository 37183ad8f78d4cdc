//! # LearnHub Core
//!
//! Core business logic and domain layer for the LearnHub backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the
//! application architecture.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{
    generate_activation_code, generate_password, Comment, Course, CourseModule, EngagementKind,
    EngagementMark, Rating, Subject, User, CODE_LENGTH,
};
pub use domain::value_objects::{AuthenticatedUser, AverageRating, RatingValue};
pub use errors::{AccountError, DomainError, DomainResult, EngagementError, ValidationError};
pub use repositories::{
    EngagementRepository, MockEngagementRepository, MockUserRepository, UserRepository,
};
pub use services::authorization::{allow, authorize, Action, Actor, Resource, ResourceKind};
pub use services::{
    AccountService, AccountServiceConfig, EngagementService, Mailer, RegisterRequest,
    ToggleOutcome,
};
