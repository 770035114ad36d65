use serde::{Deserialize, Serialize};

use crate::{MAX_YEAR, MIN_YEAR, prelude::*};

/// Inclusive range of years the engine accepts.
///
/// The default range is the widest one a millisecond-precision epoch
/// timestamp can express. Narrower ranges may be configured; wider ones are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{min}..={max}")]
#[serde(try_from = "RawBounds", into = "RawBounds")]
pub struct YearBounds {
    min: i32,
    max: i32,
}

/// Error type for year bound construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Lower bound is above upper bound.
    #[error("Invalid year bounds: min ({min}) is greater than max ({max})")]
    Inverted { min: i32, max: i32 },

    /// A bound lies outside what a calendar date can represent.
    #[error("Year bound {0} is outside the representable range {min}..={max}", min = MIN_YEAR, max = MAX_YEAR)]
    Unrepresentable(i32),
}

/// Unvalidated serde shape of [`YearBounds`].
#[derive(Serialize, Deserialize)]
struct RawBounds {
    min: i32,
    max: i32,
}

impl YearBounds {
    /// Full representable range, `MIN_YEAR..=MAX_YEAR`.
    pub const FULL: Self = Self {
        min: MIN_YEAR,
        max: MAX_YEAR,
    };

    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::Inverted` if min > max, or
    /// `BoundsError::Unrepresentable` if either end is outside `MIN_YEAR..=MAX_YEAR`.
    pub const fn new(min: i32, max: i32) -> Result<Self, BoundsError> {
        if min < MIN_YEAR || min > MAX_YEAR {
            return Err(BoundsError::Unrepresentable(min));
        }
        if max < MIN_YEAR || max > MAX_YEAR {
            return Err(BoundsError::Unrepresentable(max));
        }
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the lowest accepted year
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Returns the highest accepted year
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// Checks a raw numeric year before it is floored.
    ///
    /// NaN is never contained.
    pub fn contains(&self, year: f64) -> bool {
        f64::from(self.min) <= year && year <= f64::from(self.max)
    }
}

impl Default for YearBounds {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<RawBounds> for YearBounds {
    type Error = BoundsError;

    fn try_from(raw: RawBounds) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

impl From<YearBounds> for RawBounds {
    fn from(bounds: YearBounds) -> Self {
        Self {
            min: bounds.min,
            max: bounds.max,
        }
    }
}
