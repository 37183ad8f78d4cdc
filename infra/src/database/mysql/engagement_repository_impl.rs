//! MySQL implementation of the EngagementRepository trait.
//!
//! `engagement_marks` carries a composite primary key on
//! `(kind, user_id, course_id)` and `ratings` a unique key on
//! `(user_id, course_id)`; those constraints back the toggle and
//! one-rating-per-user rules at the storage level.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use lh_core::domain::entities::{EngagementKind, EngagementMark, Rating};
use lh_core::errors::DomainError;
use lh_core::repositories::EngagementRepository;

use super::is_unique_violation;

/// MySQL implementation of EngagementRepository
pub struct MySqlEngagementRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlEngagementRepository {
    /// Create a new MySQL engagement repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn parse_kind(raw: &str) -> Result<EngagementKind, DomainError> {
        match raw {
            "like" => Ok(EngagementKind::Like),
            "favourite" => Ok(EngagementKind::Favourite),
            other => Err(DomainError::Internal {
                message: format!("Unknown engagement kind in storage: {}", other),
            }),
        }
    }

    /// Convert a database row to an EngagementMark entity
    fn row_to_mark(row: &sqlx::mysql::MySqlRow) -> Result<EngagementMark, DomainError> {
        let kind: String = row.try_get("kind").map_err(|e| DomainError::Internal {
            message: format!("Failed to get kind: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let course_id: String = row
            .try_get("course_id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get course_id: {}", e),
            })?;

        Ok(EngagementMark {
            kind: Self::parse_kind(&kind)?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            course_id: Uuid::parse_str(&course_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid course UUID: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }

    /// Convert a database row to a Rating entity
    fn row_to_rating(row: &sqlx::mysql::MySqlRow) -> Result<Rating, DomainError> {
        let id: String = row.try_get("id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get id: {}", e),
        })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;
        let course_id: String = row
            .try_get("course_id")
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to get course_id: {}", e),
            })?;

        Ok(Rating {
            id: Uuid::parse_str(&id).map_err(|e| DomainError::Internal {
                message: format!("Invalid rating UUID: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid user UUID: {}", e),
            })?,
            course_id: Uuid::parse_str(&course_id).map_err(|e| DomainError::Internal {
                message: format!("Invalid course UUID: {}", e),
            })?,
            value: row
                .try_get::<Decimal, _>("value")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get value: {}", e),
                })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl EngagementRepository for MySqlEngagementRepository {
    async fn find_mark(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<EngagementMark>, DomainError> {
        let query = r#"
            SELECT kind, user_id, course_id, created_at
            FROM engagement_marks
            WHERE kind = ? AND user_id = ? AND course_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(kind.as_str())
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to find engagement mark: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_mark(&row)?)),
            None => Ok(None),
        }
    }

    async fn upsert_mark_on(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DomainError> {
        // Composite PK makes the insert idempotent; a replay keeps the
        // original created_at
        let query = r#"
            INSERT INTO engagement_marks (kind, user_id, course_id, created_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE kind = kind
        "#;

        sqlx::query(query)
            .bind(kind.as_str())
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to upsert engagement mark: {}", e),
            })?;

        Ok(())
    }

    async fn delete_mark(
        &self,
        kind: EngagementKind,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<(), DomainError> {
        let query = r#"
            DELETE FROM engagement_marks
            WHERE kind = ? AND user_id = ? AND course_id = ?
        "#;

        sqlx::query(query)
            .bind(kind.as_str())
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to delete engagement mark: {}", e),
            })?;

        Ok(())
    }

    async fn insert_rating(&self, rating: Rating) -> Result<Rating, DomainError> {
        let query = r#"
            INSERT INTO ratings (id, user_id, course_id, value, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(rating.id.to_string())
            .bind(rating.user_id.to_string())
            .bind(rating.course_id.to_string())
            .bind(rating.value)
            .bind(rating.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict {
                        resource: "rating".to_string(),
                    }
                } else {
                    DomainError::Dependency {
                        message: format!("Failed to insert rating: {}", e),
                    }
                }
            })?;

        Ok(rating)
    }

    async fn update_rating(&self, rating: Rating) -> Result<Rating, DomainError> {
        let query = r#"
            UPDATE ratings
            SET value = ?
            WHERE user_id = ? AND course_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(rating.value)
            .bind(rating.user_id.to_string())
            .bind(rating.course_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to update rating: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "Rating".to_string(),
            });
        }

        Ok(rating)
    }

    async fn delete_rating(&self, user_id: Uuid, course_id: Uuid) -> Result<(), DomainError> {
        let query = r#"
            DELETE FROM ratings
            WHERE user_id = ? AND course_id = ?
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to delete rating: {}", e),
            })?;

        if result.rows_affected() == 0 {
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
        let query = r#"
            SELECT id, user_id, course_id, value, created_at
            FROM ratings
            WHERE user_id = ? AND course_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(course_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to find rating: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_rating(&row)?)),
            None => Ok(None),
        }
    }

    async fn ratings_for_course(&self, course_id: Uuid) -> Result<Vec<Rating>, DomainError> {
        let query = r#"
            SELECT id, user_id, course_id, value, created_at
            FROM ratings
            WHERE course_id = ?
            ORDER BY created_at ASC
        "#;

        let rows = sqlx::query(query)
            .bind(course_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Dependency {
                message: format!("Failed to list ratings for course: {}", e),
            })?;

        rows.iter().map(Self::row_to_rating).collect()
    }
}
