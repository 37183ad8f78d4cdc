//! Engagement repository trait for like/favourite marks and ratings.
//!
//! Marks only exist in the "on" state: `upsert_mark_on` creates or
//! refreshes a mark, `delete_mark` removes it. Implementations must make
//! both idempotent so the toggle engine can treat the store as a set.
//!
//! Ratings carry a composite unique key on `(user_id, course_id)`; that
//! constraint is the source of truth for the one-rating-per-user rule.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::{EngagementKind, EngagementMark, Rating};
use crate::errors::DomainError;

/// Repository contract for engagement records
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Find the "on" mark for `(kind, user, course)`, if present
    async fn find_mark(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EngagementMark>, DomainError>;

    /// Create (or refresh) the "on" mark for `(kind, user, course)`
    async fn upsert_mark_on(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DomainError>;

    /// Remove the mark for `(kind, user, course)`; no-op when absent
    async fn delete_mark(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DomainError>;

    /// Insert a new rating
    ///
    /// # Returns
    /// * `Ok(Rating)` - The stored rating
    /// * `Err(DomainError::Conflict)` - A rating already exists for this
    ///   `(user, course)` pair
    async fn insert_rating(&self, rating: Rating) -> Result<Rating, DomainError>;

    /// Replace the value of an existing rating
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No rating for this `(user, course)`
    async fn update_rating(&self, rating: Rating) -> Result<Rating, DomainError>;

    /// Remove a user's rating of a course
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - No rating for this `(user, course)`
    async fn delete_rating(&self, user_id: Uuid, course_id: Uuid) -> Result<(), DomainError>;

    /// Find a user's rating of a course, if any
    async fn find_rating(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Rating>, DomainError>;

    /// All ratings recorded for a course
    async fn ratings_for_course(&self, course_id: Uuid) -> Result<Vec<Rating>, DomainError>;
}
