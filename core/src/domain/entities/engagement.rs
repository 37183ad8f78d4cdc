//! Engagement records: like/favourite marks and ratings.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two structurally identical toggles a user can set on a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngagementKind {
    Like,
    Favourite,
}

impl EngagementKind {
    /// Stable name used in storage keys and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementKind::Like => "like",
            EngagementKind::Favourite => "favourite",
        }
    }
}

/// A stored "on" record for `(user, course, kind)`.
///
/// Storage never holds an "off" mark: turning a toggle off deletes the
/// record, so absence and "off" are one state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementMark {
    pub kind: EngagementKind,
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl EngagementMark {
    pub fn new(kind: EngagementKind, user_id: Uuid, course_id: Uuid) -> Self {
        Self {
            kind,
            user_id,
            course_id,
            created_at: Utc::now(),
        }
    }
}

/// A user's rating of a course, unique per `(user, course)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    pub id: Uuid,
    pub user_id: Uuid,
    pub course_id: Uuid,
    /// Value in [1.00, 5.00], two-decimal scale
    pub value: Decimal,
    pub created_at: DateTime<Utc>,
}

impl Rating {
    pub fn new(user_id: Uuid, course_id: Uuid, value: Decimal) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            course_id,
            value,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_kind_storage_names() {
        assert_eq!(EngagementKind::Like.as_str(), "like");
        assert_eq!(EngagementKind::Favourite.as_str(), "favourite");
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_string(&EngagementKind::Favourite).unwrap();
        assert_eq!(json, "\"favourite\"");
    }

    #[test]
    fn test_rating_construction() {
        let rating = Rating::new(Uuid::new_v4(), Uuid::new_v4(), dec!(4.50));
        assert_eq!(rating.value, dec!(4.50));
    }
}
