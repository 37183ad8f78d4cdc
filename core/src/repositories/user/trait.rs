//! User repository trait defining the interface for account persistence.
//!
//! The email column carries a unique constraint in every real
//! implementation; that constraint, not the advisory `exists_by_email`
//! pre-check, is the source of truth for duplicate detection.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::errors::DomainError;

/// Repository contract for User entity persistence
///
/// Implementations handle the actual database operations while keeping the
/// abstraction boundary between domain and infrastructure layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered under this email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Check whether an account exists for the given email
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;

    /// Find a user matching both email and pending activation code.
    ///
    /// This is a single conjunctive lookup. Activation must not be split
    /// into "does the email exist" and "does the code match" queries: the
    /// combined predicate leaves no timing or enumeration gap between the
    /// two checks, and an already-activated account (code cleared) simply
    /// fails to match.
    async fn find_by_email_and_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<Option<User>, DomainError>;

    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - The email is already registered
    /// * `Err(DomainError)` - Other store failure
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with this id
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
