//! Authenticated user value object returned by a successful login.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::User;

/// Proof of a successful credential check.
///
/// The transport layer decides what session artifact to mint from this;
/// the core only vouches that the credentials matched an active account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub is_admin: bool,
}

impl From<&User> for AuthenticatedUser {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            is_admin: user.is_admin,
        }
    }
}
