//! Gregorian Easter date computation and the movable feasts around it.
//!
//! ```
//! use computus::{compute_easter_sunday, derive_feast_set, format_date, MonthNames};
//!
//! let easter = compute_easter_sunday("2024")?;
//! assert_eq!(easter.to_string(), "2024-03-31");
//!
//! let feasts = derive_feast_set(easter);
//! assert_eq!(feasts.palm_sunday().to_string(), "2024-03-24");
//! assert_eq!(
//!     format_date(feasts.easter_monday(), &MonthNames::FINNISH),
//!     "1. huhtikuuta 2024"
//! );
//! # Ok::<(), computus::ComputusError>(())
//! ```

mod bounds;
mod computus;
mod consts;
mod feast;
mod format;
mod prelude;
mod types;

pub use bounds::{BoundsError, YearBounds};
pub use computus::{Computus, ComputusError, EasterSunday, YearInput, compute_easter_sunday};
pub use consts::*;
pub use feast::{Feast, FeastSet, derive_feast_set};
pub use format::{MonthNames, format_date, format_feast_set, heading};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use std::str::FromStr;
use types::{civil_from_days, days_from_civil};

/// A proleptic Gregorian calendar date with no time of day and no timezone.
///
/// Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}..={})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl CalendarDate {
    /// Creates a date from validated components, re-checking the day against
    /// the month length of that year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the day does not exist in that month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, DateError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns the `DateError` of the first invalid component.
    pub fn from_parts(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Returns the year (astronomical numbering)
    pub const fn year(&self) -> i32 {
        self.year.get()
    }

    /// Returns the month, 1-based
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since 1970-01-01 (negative before it).
    pub const fn to_epoch_days(&self) -> i64 {
        days_from_civil(self.year.get(), self.month.get(), self.day.get())
    }

    /// Date for a day count since 1970-01-01.
    /// Returns `None` if the year falls outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_epoch_days(days: i64) -> Option<Self> {
        let first = days_from_civil(MIN_YEAR, 1, MIN_DAY);
        let last = days_from_civil(MAX_YEAR, MAX_MONTH, DAYS_IN_MONTH[MAX_MONTH as usize]);
        if days < first || days > last {
            return None;
        }
        let (year, month, day) = civil_from_days(days);
        let year = Year::new(i32::try_from(year).ok()?).ok()?;
        // civil_from_days only yields existing month/day pairs
        Some(Self {
            year,
            month: Month::new_unchecked(month),
            day: Day::new_unchecked(day),
        })
    }

    /// Calendar-aware day arithmetic, rolling over month and year ends.
    /// Returns `None` if the result leaves `MIN_YEAR..=MAX_YEAR`.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        Self::from_epoch_days(self.to_epoch_days().checked_add(days)?)
    }

    /// Shifts by a few days where the caller knows the year does not change.
    pub(crate) fn shifted_within_year(self, days: i64) -> Self {
        let (year, month, day) = civil_from_days(self.to_epoch_days() + days);
        debug_assert_eq!(year, i64::from(self.year.get()));
        Self {
            year: self.year,
            month: Month::new_unchecked(month),
            day: Day::new_unchecked(day),
        }
    }

    pub const fn weekday(&self) -> Weekday {
        Weekday::from_epoch_days(self.to_epoch_days())
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses `YYYY-MM-DD`, with an optional leading minus on the year.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (negative, unsigned) = match trimmed.strip_prefix(DATE_SEPARATOR) {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            )));
        };

        let year = parse_component::<i32>(year)?;
        let month = parse_component::<u8>(month)?;
        let day = parse_component::<u8>(day)?;
        Self::from_parts(if negative { -year } else { year }, month, day)
    }
}

/// Parses one unsigned numeric date component
fn parse_component<T: FromStr>(s: &str) -> Result<T, DateError> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl TryFrom<(i32, u8, u8)> for CalendarDate {
    type Error = DateError;

    fn try_from(value: (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_parts(value.0, value.1, value.2)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
