//! Mock implementation of EngagementRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{EngagementKind, EngagementMark, Rating};
use crate::errors::DomainError;

use super::trait_::EngagementRepository;

type MarkKey = (EngagementKind, Uuid, Uuid);

/// In-memory engagement store for testing.
///
/// Mirrors the MySQL composite unique key on `(user_id, course_id)` for
/// ratings so duplicate inserts conflict exactly as they would in
/// production.
pub struct MockEngagementRepository {
    marks: Arc<RwLock<HashMap<MarkKey, EngagementMark>>>,
    ratings: Arc<RwLock<HashMap<(Uuid, Uuid), Rating>>>,
}

impl MockEngagementRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self {
            marks: Arc::new(RwLock::new(HashMap::new())),
            ratings: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored marks, across all kinds
    pub async fn mark_count(&self) -> usize {
        self.marks.read().await.len()
    }
}

impl Default for MockEngagementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngagementRepository for MockEngagementRepository {
    async fn find_mark(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EngagementMark>, DomainError> {
        let marks = self.marks.read().await;
        Ok(marks.get(&(kind, user_id, course_id)).cloned())
    }

    async fn upsert_mark_on(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut marks = self.marks.write().await;
        marks
            .entry((kind, user_id, course_id))
            .or_insert_with(|| EngagementMark::new(kind, user_id, course_id));
        Ok(())
    }

    async fn delete_mark(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DomainError> {
        let mut marks = self.marks.write().await;
        marks.remove(&(kind, user_id, course_id));
        Ok(())
    }

    async fn insert_rating(&self, rating: Rating) -> Result<Rating, DomainError> {
        let mut ratings = self.ratings.write().await;
        let key = (rating.user_id, rating.course_id);

        if ratings.contains_key(&key) {
            return Err(DomainError::Conflict {
                resource: "rating".to_string(),
            });
        }

        ratings.insert(key, rating.clone());
        Ok(rating)
    }

    async fn update_rating(&self, rating: Rating) -> Result<Rating, DomainError> {
        let mut ratings = self.ratings.write().await;
        let key = (rating.user_id, rating.course_id);

        if !ratings.contains_key(&key) {
            return Err(DomainError::NotFound {
                resource: "Rating".to_string(),
            });
        }

        ratings.insert(key, rating.clone());
        Ok(rating)
    }

    async fn delete_rating(&self, user_id: Uuid, course_id: Uuid) -> Result<(), DomainError> {
        let mut ratings = self.ratings.write().await;

        if ratings.remove(&(user_id, course_id)).is_none() {
            return Err(DomainError::NotFound {
                resource: "Rating".to_string(),
            });
        }

        Ok(())
    }

    async fn find_rating(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        Ok(ratings.get(&(user_id, course_id)).cloned())
    }

    async fn ratings_for_course(&self, course_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let ratings = self.ratings.read().await;
        Ok(ratings
            .values()
            .filter(|r| r.course_id == course_id)
            .cloned()
            .collect())
    }
}
