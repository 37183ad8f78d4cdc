//! User entity representing a registered account in the LearnHub system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// Lifecycle: a user is created inactive with a pending activation code;
/// activation clears the code and flips `is_active`. The code is never
/// present on an active account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address, unique across the platform
    pub email: String,

    /// Bcrypt hash of the password; never the plaintext
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Optional last name
    pub last_name: Option<String>,

    /// Whether the account has been activated
    pub is_active: bool,

    /// Pending activation code; `Some` only while `is_active` is false
    #[serde(skip_serializing)]
    pub activation_code: Option<String>,

    /// Whether the user holds admin privileges
    pub is_admin: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new inactive User with a pending activation code
    pub fn new(
        email: String,
        password_hash: String,
        name: String,
        last_name: Option<String>,
        activation_code: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            name,
            last_name,
            is_active: false,
            activation_code: Some(activation_code),
            is_admin: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Marks the account as active and clears the activation code
    pub fn activate(&mut self) {
        self.is_active = true;
        self.activation_code = None;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored credential
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Grants admin privileges
    pub fn promote_to_admin(&mut self) {
        self.is_admin = true;
        self.updated_at = Utc::now();
    }

    /// Checks whether the account is still waiting for activation
    pub fn is_pending_activation(&self) -> bool {
        !self.is_active && self.activation_code.is_some()
    }
}
