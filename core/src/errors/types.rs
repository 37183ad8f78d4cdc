//! Error families for account lifecycle, engagement, and validation.
//!
//! Messages here are developer-facing; user-facing copy and i18n are the
//! presentation layer's concern.

use thiserror::Error;

/// Account lifecycle errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AccountError {
    #[error("Email already registered")]
    DuplicateAccount,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid activation code")]
    InvalidCode,

    #[error("User not registered")]
    UnknownUser,

    /// Covers both a failed password check and an inactive account, so a
    /// caller cannot distinguish the two.
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Wrong current password")]
    WrongOldPassword,
}

impl AccountError {
    pub fn code(&self) -> &'static str {
        match self {
            AccountError::DuplicateAccount => "DUPLICATE_ACCOUNT",
            AccountError::PasswordMismatch => "PASSWORD_MISMATCH",
            AccountError::InvalidCode => "INVALID_ACTIVATION_CODE",
            AccountError::UnknownUser => "UNKNOWN_USER",
            AccountError::InvalidCredentials => "INVALID_CREDENTIALS",
            AccountError::WrongOldPassword => "WRONG_OLD_PASSWORD",
        }
    }
}

/// Engagement (like/favourite/rating) errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EngagementError {
    #[error("Course already rated by this user")]
    AlreadyRated,

    #[error("Rating not found")]
    RatingNotFound,
}

impl EngagementError {
    pub fn code(&self) -> &'static str {
        match self {
            EngagementError::AlreadyRated => "ALREADY_RATED",
            EngagementError::RatingNotFound => "RATING_NOT_FOUND",
        }
    }
}

/// Input validation errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid length for field: {field} (min: {min}, max: {max})")]
    InvalidLength {
        field: String,
        min: usize,
        max: usize,
    },

    #[error("Value out of range for field: {field} (min: {min}, max: {max})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
    },
}

impl ValidationError {
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::RequiredField { .. } => "REQUIRED_FIELD",
            ValidationError::InvalidEmail => "INVALID_EMAIL",
            ValidationError::InvalidLength { .. } => "INVALID_LENGTH",
            ValidationError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}
