//! Rating value object and aggregate rating result.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Minimum accepted rating
pub const MIN_RATING: Decimal = dec!(1.00);

/// Maximum accepted rating
pub const MAX_RATING: Decimal = dec!(5.00);

/// A validated rating value in [1.00, 5.00] with two-decimal scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingValue(Decimal);

impl RatingValue {
    /// Validates range and scale, normalizing the value to two decimals.
    ///
    /// Values with more than two decimal places are rejected rather than
    /// silently rounded, so a caller sending `3.456` gets an error instead
    /// of a surprise `3.46`.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value < MIN_RATING || value > MAX_RATING {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING.to_string(),
                max: MAX_RATING.to_string(),
            });
        }
        if value.round_dp(2) != value {
            return Err(ValidationError::OutOfRange {
                field: "rating".to_string(),
                min: MIN_RATING.to_string(),
                max: MAX_RATING.to_string(),
            });
        }
        Ok(Self(value.round_dp(2)))
    }

    /// The underlying decimal value
    pub fn get(&self) -> Decimal {
        self.0
    }
}

/// Aggregate rating of a course.
///
/// Zero ratings are reported as `NoRatings`, never as `Rated(0.00)`:
/// callers must be able to tell "no data" from "rated zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum AverageRating {
    NoRatings,
    Rated(Decimal),
}

impl AverageRating {
    /// Computes the two-decimal arithmetic mean of the given values
    pub fn from_values(values: &[Decimal]) -> Self {
        if values.is_empty() {
            return AverageRating::NoRatings;
        }
        let sum: Decimal = values.iter().copied().sum();
        let count = Decimal::from(values.len() as u64);
        AverageRating::Rated((sum / count).round_dp(2))
    }
}
