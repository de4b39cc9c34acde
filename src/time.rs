//! Sexagesimal time arithmetic.
//!
//! Sunrise, sunset and day length come out of the day-arc formula as decimal hours.
//! This module splits them into hour/minute/second triples, shifts those triples by
//! signed minute/second corrections, and turns the result back into a calendar
//! date-time.

use core::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::math::round_half_up;
use crate::{Error, Result};

/// Seconds per minute and minutes per hour
const SEXAGESIMAL_BASE: i32 = 60;

/// Seconds per hour (3,600)
const SECONDS_PER_HOUR: f64 = 3_600.0;

/// An (hour, minute, second) triple.
///
/// Minutes and seconds of a normalized triple lie in `[0, 60)`. The hour is not
/// reduced into a single day: it may be negative or 24 and above, meaning the
/// previous or next calendar day. Normalized triples order chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hms {
    /// Hours, possibly outside 0..24
    pub hour: i32,
    /// Minutes
    pub minute: i32,
    /// Seconds
    pub second: i32,
}

impl Hms {
    /// Creates a triple from its components, without normalizing them.
    #[must_use]
    pub const fn new(hour: i32, minute: i32, second: i32) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Splits decimal hours into an (hour, minute, second) triple.
    ///
    /// Every level is floored, never rounded, so `12.9999` becomes `12:59:59` and not
    /// `13:00:00`.
    ///
    /// # Example
    /// ```
    /// # use sun_position::time::Hms;
    /// assert_eq!(Hms::from_decimal_hours(6.5), Hms::new(6, 30, 0));
    /// assert_eq!(Hms::from_decimal_hours(12.9999), Hms::new(12, 59, 59));
    /// ```
    #[must_use]
    pub fn from_decimal_hours(hours: f64) -> Self {
        let whole_hours = hours.floor();
        let minutes = (hours - whole_hours) * 60.0;
        let whole_minutes = minutes.floor();
        let seconds = ((minutes - whole_minutes) * 60.0).floor();

        Self {
            hour: whole_hours as i32,
            minute: whole_minutes as i32,
            second: seconds as i32,
        }
    }

    /// Reads the whole-second wall-clock time of a `NaiveTime`.
    #[must_use]
    pub fn from_time(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as i32,
            minute: time.minute() as i32,
            second: time.second() as i32,
        }
    }

    /// Converts back to decimal hours.
    #[must_use]
    pub fn to_decimal_hours(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0 + f64::from(self.second) / SECONDS_PER_HOUR
    }

    /// Total signed number of seconds represented by the triple.
    #[must_use]
    pub fn total_seconds(self) -> i64 {
        i64::from(self.hour) * 3_600 + i64::from(self.minute) * 60 + i64::from(self.second)
    }

    /// Shifts the triple by a signed correction and renormalizes it.
    ///
    /// Seconds overflowing 60 carry into the minutes, negative seconds borrow from
    /// them, and the same rule is applied from the minutes into the hours. The hour
    /// only absorbs the carry and is never wrapped into a single day.
    ///
    /// # Example
    /// ```
    /// # use sun_position::time::{Correction, Hms};
    /// let shifted = Hms::new(10, 59, 50).corrected(Correction::new(0, 20));
    /// assert_eq!(shifted, Hms::new(11, 0, 10));
    ///
    /// let shifted = Hms::new(0, 0, 5).corrected(Correction::new(-1, -10));
    /// assert_eq!(shifted, Hms::new(-1, 58, 55));
    /// ```
    #[must_use]
    pub const fn corrected(self, correction: Correction) -> Self {
        let second = self.second + correction.seconds;
        let minute = self.minute + correction.minutes + second.div_euclid(SEXAGESIMAL_BASE);
        let second = second.rem_euclid(SEXAGESIMAL_BASE);
        let hour = self.hour + minute.div_euclid(SEXAGESIMAL_BASE);
        let minute = minute.rem_euclid(SEXAGESIMAL_BASE);

        Self {
            hour,
            minute,
            second,
        }
    }

    /// Places the triple on a calendar date.
    ///
    /// Hours below 0 or from 24 on roll over into the neighbouring days.
    ///
    /// # Errors
    /// Returns `InvalidDateTime` if the result is outside chrono's representable range.
    pub fn at_date(self, date: NaiveDate) -> Result<NaiveDateTime> {
        let offset = TimeDelta::try_seconds(self.total_seconds())
            .ok_or_else(|| Error::invalid_datetime("time of day offset out of range"))?;
        date.and_time(NaiveTime::MIN)
            .checked_add_signed(offset)
            .ok_or_else(|| Error::invalid_datetime("date-time out of range"))
    }
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// A signed shift in minutes and seconds applied to an [`Hms`] triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Correction {
    /// Whole minutes
    pub minutes: i32,
    /// Seconds, may carry the opposite sign of `minutes`
    pub seconds: i32,
}

impl Correction {
    /// The identity correction.
    pub const ZERO: Self = Self::new(0, 0);

    /// Creates a correction from its components.
    #[must_use]
    pub const fn new(minutes: i32, seconds: i32) -> Self {
        Self { minutes, seconds }
    }

    /// Splits fractional minutes into rounded minutes and the rounded remainder in seconds.
    ///
    /// Minutes are rounded to the nearest integer, so the seconds part can be negative:
    /// `3.7` minutes become `4 min -18 s`.
    #[must_use]
    pub fn from_minutes(minutes: f64) -> Self {
        let whole = round_half_up(minutes);
        let seconds = round_half_up((minutes - whole) * 60.0);
        Self {
            minutes: whole as i32,
            seconds: seconds as i32,
        }
    }

    /// The same shift in the opposite direction.
    #[must_use]
    pub const fn negated(self) -> Self {
        Self {
            minutes: -self.minutes,
            seconds: -self.seconds,
        }
    }

    /// The shift expressed in fractional minutes.
    #[must_use]
    pub fn to_minutes(self) -> f64 {
        f64::from(self.minutes) + f64::from(self.seconds) / 60.0
    }
}
