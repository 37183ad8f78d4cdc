//! Course catalogue entities: subjects, courses, modules, and comments.
//!
//! These are carriers for ownership and identity; catalogue search,
//! pagination, and media storage live outside the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject grouping courses by topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
}

/// Course entity, owned by exactly one user (its creator)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for the course
    pub id: Uuid,

    /// The user who created and owns the course
    pub owner_id: Uuid,

    /// Subject the course belongs to
    pub subject_id: Uuid,

    pub title: String,

    /// URL slug, unique across courses
    pub slug: String,

    pub overview: String,

    /// Timestamp when the course was created
    pub created_at: DateTime<Utc>,
}

impl Course {
    /// Creates a new course owned by the given user
    pub fn new(
        owner_id: Uuid,
        subject_id: Uuid,
        title: String,
        slug: String,
        overview: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            subject_id,
            title,
            slug,
            overview,
            created_at: Utc::now(),
        }
    }

    /// Checks whether the given user owns this course
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.owner_id == user_id
    }
}

/// Content module inside a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseModule {
    pub id: Uuid,
    pub course_id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    /// External video URL; media file storage is out of scope
    pub video_url: Option<String>,
}

/// Comment left by a user on a course
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub course_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(course_id: Uuid, author_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            course_id,
            author_id,
            text,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_ownership() {
        let owner = Uuid::new_v4();
        let course = Course::new(
            owner,
            Uuid::new_v4(),
            "Rust for Backend Engineers".to_string(),
            "rust-for-backend-engineers".to_string(),
            "Ownership, borrowing, and async".to_string(),
        );

        assert!(course.is_owned_by(owner));
        assert!(!course.is_owned_by(Uuid::new_v4()));
    }
}
