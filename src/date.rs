//! Calendar Date Module
//!
//! Gregorian date validation over the years the approximate solar ephemeris is
//! trusted for. 1753 is the first full Gregorian year in Britain; past 4582 the
//! accumulated leap-year drift exceeds a day.

use std::fmt;

use chrono::{Datelike, NaiveDate, Utc};
use serde::{Serialize, Serializer};

use crate::error::SunError;

// ===================== CONSTANTS =====================

/// First year accepted by `validate`.
pub const MIN_YEAR: i32 = 1753;

/// Last year accepted by `validate`.
pub const MAX_YEAR: i32 = 4582;

// ===================== VALIDATION =====================

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Is `year-month-day` a real date inside `MIN_YEAR..=MAX_YEAR`?
pub fn validate(year: i32, month: i32, day: i32) -> bool {
    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return false;
    }
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    match month {
        4 | 6 | 9 | 11 => day != 31,
        2 => day < 29 || (day == 29 && is_leap_year(year)),
        _ => true,
    }
}

// ===================== TYPES =====================

/// A date that has passed `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: i32,
    day: i32,
}

impl CalendarDate {
    /// # Errors
    /// `SunError::InvalidDate` when `validate` rejects the triple.
    pub fn new(year: i32, month: i32, day: i32) -> Result<Self, SunError> {
        if !validate(year, month, day) {
            return Err(SunError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Today's date on the UTC calendar.
    ///
    /// # Errors
    /// Only if the system clock reports a year outside the validity window.
    pub fn today_utc() -> Result<Self, SunError> {
        Self::try_from(Utc::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn day(&self) -> i32 {
        self.day
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = SunError;

    fn try_from(d: NaiveDate) -> Result<Self, Self::Error> {
        // month() and day() are at most 12 and 31.
        Self::new(d.year(), d.month() as i32, d.day() as i32)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ===================== TESTS =====================
