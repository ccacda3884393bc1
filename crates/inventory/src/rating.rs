//! Star ratings.

use core::fmt;

use serde::{Deserialize, Serialize};
use teashop_core::{DomainError, DomainResult, ValueObject};

/// A tea's star rating, always within `1..=5`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct StarRating(u8);

impl StarRating {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub const ONE: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);
    pub const FIVE: Self = Self(5);

    /// Fails with [`DomainError::Validation`] outside `1..=5`.
    pub fn new(rating: i32) -> DomainResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&rating) {
            return Err(DomainError::validation(format!(
                "rating must be between {} and {} (got {rating})",
                Self::MIN,
                Self::MAX
            )));
        }
        // Range-checked above.
        Ok(Self(rating as u8))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl ValueObject for StarRating {}

impl TryFrom<i32> for StarRating {
    type Error = DomainError;

    fn try_from(value: i32) -> DomainResult<Self> {
        Self::new(value)
    }
}

impl From<StarRating> for i32 {
    fn from(value: StarRating) -> Self {
        i32::from(value.0)
    }
}

/// `4****`
impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, "*".repeat(usize::from(self.0)))
    }
}
