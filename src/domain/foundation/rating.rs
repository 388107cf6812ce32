//! Star rating value object (0 to 5, one decimal place).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::ValidationError;

/// Maximum number of stars.
pub const MAX_STARS: f32 = 5.0;

/// Average customer rating on a 0–5 scale, stored in tenths of a star.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarRating(u8);

impl StarRating {
    /// Creates a rating, returning error if outside 0–5.
    pub fn try_new(stars: f32) -> Result<Self, ValidationError> {
        if !stars.is_finite() || !(0.0..=MAX_STARS).contains(&stars) {
            return Err(ValidationError::out_of_range(
                "rating",
                0,
                MAX_STARS as i64,
                stars.round() as i64,
            ));
        }
        Ok(Self((stars * 10.0).round() as u8))
    }

    /// Returns the rating in stars.
    pub fn stars(&self) -> f32 {
        f32::from(self.0) / 10.0
    }

    /// Number of fully filled stars when rendered.
    pub fn full_stars(&self) -> u8 {
        self.0 / 10
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

impl Serialize for StarRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f32(self.stars())
    }
}

impl<'de> Deserialize<'de> for StarRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stars = f32::deserialize(deserializer)?;
        StarRating::try_new(stars).map_err(serde::de::Error::custom)
    }
}
