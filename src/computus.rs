//! Easter Sunday computation.
//!
//! Uses the Gregorian algorithm credited to J.-M. Oudin (1940), as reprinted
//! by L. E. Doggett in the *Explanatory Supplement to the Astronomical
//! Almanac* (1992). Every division in it is a floor division.

use serde::Serialize;
use tracing::trace;

use crate::{CalendarDate, DateError, YearBounds, prelude::*};

/// Error type for Easter computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputusError {
    /// The year could not be read as a number.
    #[error("Invalid year: {0:?} is not a number")]
    InvalidInput(String),

    /// The numeric year lies outside the accepted bounds.
    #[error("Year {year} is outside the supported range {bounds}")]
    OutOfRange { year: f64, bounds: YearBounds },

    /// The computed date could not be represented.
    #[error(transparent)]
    InvalidDate(#[from] DateError),
}

/// A value that can be coerced into a numeric year.
///
/// Numbers convert directly. Text is trimmed and read as a decimal number,
/// so `"2024"`, `" 2024 "`, `"2024.9"` and `"2.024e3"` are all accepted.
pub trait YearInput {
    /// Returns the year as an unfloored number.
    ///
    /// # Errors
    /// Returns `ComputusError::InvalidInput` if the value is not a number.
    fn to_year_number(&self) -> Result<f64, ComputusError>;
}

macro_rules! impl_year_input_lossless {
    ($($t:ty),*) => {$(
        impl YearInput for $t {
            fn to_year_number(&self) -> Result<f64, ComputusError> {
                Ok(f64::from(*self))
            }
        }
    )*};
}

impl_year_input_lossless!(i8, i16, i32, u8, u16, u32, f32, f64);

impl YearInput for i64 {
    #[allow(clippy::cast_precision_loss)]
    fn to_year_number(&self) -> Result<f64, ComputusError> {
        // Precision is only lost far outside any accepted range
        Ok(*self as f64)
    }
}

impl YearInput for str {
    fn to_year_number(&self) -> Result<f64, ComputusError> {
        let trimmed = self.trim();
        trimmed
            .parse::<f64>()
            .map_err(|_| ComputusError::InvalidInput(self.to_owned()))
    }
}

impl YearInput for String {
    fn to_year_number(&self) -> Result<f64, ComputusError> {
        self.as_str().to_year_number()
    }
}

impl<T: YearInput + ?Sized> YearInput for &T {
    fn to_year_number(&self) -> Result<f64, ComputusError> {
        (**self).to_year_number()
    }
}

/// The date of Easter Sunday for some year.
///
/// Only [`Computus`] creates these, which guarantees the date is a Sunday in
/// March or April.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Deref, Into, Serialize,
)]
#[serde(transparent)]
pub struct EasterSunday(CalendarDate);

impl EasterSunday {
    /// Returns the underlying calendar date
    pub const fn date(self) -> CalendarDate {
        self.0
    }
}

/// Easter date engine with configurable year bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Computus {
    bounds: YearBounds,
}

impl Computus {
    pub const fn new(bounds: YearBounds) -> Self {
        Self { bounds }
    }

    pub const fn bounds(&self) -> YearBounds {
        self.bounds
    }

    /// Computes the date of Easter Sunday for `input`.
    ///
    /// The value is range-checked before it is floored, so with the default
    /// bounds `275760.5` is rejected while `-271819.5` becomes `-271820`.
    ///
    /// # Errors
    /// Returns `ComputusError::InvalidInput` if the input is not a number and
    /// `ComputusError::OutOfRange` if it lies outside the engine's bounds.
    pub fn compute(&self, input: impl YearInput) -> Result<EasterSunday, ComputusError> {
        let raw = input.to_year_number()?;
        if raw.is_nan() {
            return Err(ComputusError::InvalidInput(raw.to_string()));
        }
        if !self.bounds.contains(raw) {
            return Err(ComputusError::OutOfRange {
                year: raw,
                bounds: self.bounds,
            });
        }

        // In range, so the floored value fits an i32
        #[allow(clippy::cast_possible_truncation)]
        let year = raw.floor() as i32;
        let (month, day) = easter_month_day(i64::from(year));
        let date = CalendarDate::from_parts(year, month, day)?;

        trace!(year, easter = %date, "computed Easter Sunday");
        Ok(EasterSunday(date))
    }
}

/// Computes Easter Sunday with the default year bounds.
///
/// # Errors
/// See [`Computus::compute`].
pub fn compute_easter_sunday(input: impl YearInput) -> Result<EasterSunday, ComputusError> {
    Computus::default().compute(input)
}

/// Month and day of Easter Sunday in `year`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn easter_month_day(year: i64) -> (u8, u8) {
    let y = year;
    // Century
    let c = y.div_euclid(100);
    // Position in the 19-year Metonic cycle
    let n = y.rem_euclid(19);
    // Lunar correction for skipped leap days
    let k = (c - 17).div_euclid(25);
    let mut i = c - c.div_euclid(4) - (c - k).div_euclid(3) + 19 * n + 15;
    i = i.rem_euclid(30);
    // Days from 21 March to the Paschal full moon
    i -= i.div_euclid(28)
        * (1 - i.div_euclid(28) * 29_i64.div_euclid(i + 1) * (21 - n).div_euclid(11));
    // Weekday of the Paschal full moon
    let j = (y + y.div_euclid(4) + i + 2 - c + c.div_euclid(4)).rem_euclid(7);
    let l = i - j;
    let month = 3 + (l + 40).div_euclid(44);
    let day = l + 28 - 31 * month.div_euclid(4);
    (month as u8, day as u8)
}
