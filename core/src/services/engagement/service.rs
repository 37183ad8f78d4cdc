//! Main engagement service implementation

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{EngagementKind, Rating};
use crate::domain::value_objects::{AverageRating, RatingValue};
use crate::errors::{DomainError, DomainResult, EngagementError};
use crate::repositories::EngagementRepository;
use crate::services::authorization::{authorize, Action, Actor, Resource};

use super::key_lock::KeyedLocks;

/// Observable result of a toggle call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    TurnedOn,
    TurnedOff,
}

type ToggleKey = (EngagementKind, Uuid, Uuid);

/// Engagement service for likes, favourites, and ratings
///
/// The toggle and the rating insert are both check-then-act sequences
/// against the store. Within this process they are serialized per
/// `(kind, user, course)` / `(user, course)` key; across processes the
/// store's own locking and unique keys close the same window.
pub struct EngagementService<E>
where
    E: EngagementRepository,
{
    /// Engagement repository for marks and ratings
    engagement_repository: Arc<E>,
    /// Per-key serialization of toggle sequences
    toggle_locks: KeyedLocks<ToggleKey>,
    /// Per-key serialization of rating existence-check-then-insert
    rating_locks: KeyedLocks<(Uuid, Uuid)>,
}

impl<E> EngagementService<E>
where
    E: EngagementRepository,
{
    /// Create a new engagement service
    pub fn new(engagement_repository: Arc<E>) -> Self {
        Self {
            engagement_repository,
            toggle_locks: KeyedLocks::new(),
            rating_locks: KeyedLocks::new(),
        }
    }

    /// Toggle a like or favourite for `(actor, course)`
    ///
    /// State machine per key:
    /// - no mark stored -> store "on" mark, report `TurnedOn`
    /// - mark stored -> delete it, report `TurnedOff`
    ///
    /// Storage never holds an "off" record; absence is the off state. The
    /// whole read-decide-write sequence runs under the key's lock so two
    /// concurrent toggles cannot both observe "absent".
    pub async fn toggle(
        &self,
        kind: EngagementKind,
        actor: &Actor,
        course_id: Uuid,
    ) -> DomainResult<ToggleOutcome> {
        authorize(actor, Action::Toggle, &Resource::course(None))?;
        let user_id = actor.user_id().ok_or(DomainError::Forbidden)?;

        let _guard = self.toggle_locks.acquire((kind, user_id, course_id)).await;

        let outcome = match self
            .engagement_repository
            .find_mark(kind, user_id, course_id)
            .await?
        {
            None => {
                self.engagement_repository
                    .upsert_mark_on(kind, user_id, course_id)
                    .await?;
                ToggleOutcome::TurnedOn
            }
            Some(_) => {
                self.engagement_repository
                    .delete_mark(kind, user_id, course_id)
                    .await?;
                ToggleOutcome::TurnedOff
            }
        };

        tracing::info!(
            kind = kind.as_str(),
            user_id = %user_id,
            course_id = %course_id,
            outcome = ?outcome,
            event = "engagement_toggled",
            "Engagement toggled"
        );

        Ok(outcome)
    }

    /// Rate a course, once per `(user, course)`
    ///
    /// Rating is create-once: a second rating from the same user fails
    /// `AlreadyRated` and changes go through [`Self::update_rating`]. The
    /// store's composite unique key is the source of truth; the in-process
    /// lock merely keeps the error deterministic under local contention.
    pub async fn rate(
        &self,
        actor: &Actor,
        course_id: Uuid,
        value: Decimal,
    ) -> DomainResult<Rating> {
        authorize(actor, Action::Create, &Resource::rating(None))?;
        let user_id = actor.user_id().ok_or(DomainError::Forbidden)?;

        let value = RatingValue::new(value)?;

        let _guard = self.rating_locks.acquire((user_id, course_id)).await;

        let rating = Rating::new(user_id, course_id, value.get());
        match self.engagement_repository.insert_rating(rating).await {
            Ok(rating) => Ok(rating),
            Err(DomainError::Conflict { .. }) => Err(EngagementError::AlreadyRated.into()),
            Err(e) => Err(e),
        }
    }

    /// Replace the actor's existing rating of a course
    ///
    /// Owner-only: the policy is consulted against the stored rating's
    /// owner, so only the rater (or an admin) may change it.
    pub async fn update_rating(
        &self,
        actor: &Actor,
        course_id: Uuid,
        value: Decimal,
    ) -> DomainResult<Rating> {
        let user_id = actor.user_id().ok_or(DomainError::Forbidden)?;

        let value = RatingValue::new(value)?;

        let _guard = self.rating_locks.acquire((user_id, course_id)).await;

        let mut existing = self
            .engagement_repository
            .find_rating(user_id, course_id)
            .await?
            .ok_or(EngagementError::RatingNotFound)?;

        authorize(
            actor,
            Action::Update,
            &Resource::rating(Some(existing.user_id)),
        )?;

        existing.value = value.get();
        self.engagement_repository.update_rating(existing).await
    }

    /// Remove the actor's rating of a course
    ///
    /// Owner-only, like [`Self::update_rating`]; `RatingNotFound` when the
    /// actor never rated the course. After deletion the actor may rate the
    /// course again from scratch.
    pub async fn delete_rating(&self, actor: &Actor, course_id: Uuid) -> DomainResult<()> {
        let user_id = actor.user_id().ok_or(DomainError::Forbidden)?;

        let _guard = self.rating_locks.acquire((user_id, course_id)).await;

        let existing = self
            .engagement_repository
            .find_rating(user_id, course_id)
            .await?
            .ok_or(EngagementError::RatingNotFound)?;

        authorize(
            actor,
            Action::Delete,
            &Resource::rating(Some(existing.user_id)),
        )?;

        self.engagement_repository
            .delete_rating(user_id, course_id)
            .await?;

        tracing::info!(
            user_id = %user_id,
            course_id = %course_id,
            event = "rating_deleted",
            "Rating deleted"
        );

        Ok(())
    }

    /// Aggregate rating of a course
    ///
    /// Arithmetic mean of all stored values, rounded to two decimals; a
    /// course nobody rated reports `NoRatings`, never `0.00`.
    pub async fn average_rating(&self, course_id: Uuid) -> DomainResult<AverageRating> {
        let ratings = self
            .engagement_repository
            .ratings_for_course(course_id)
            .await?;
        let values: Vec<Decimal> = ratings.iter().map(|r| r.value).collect();
        Ok(AverageRating::from_values(&values))
    }
}
