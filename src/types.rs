use crate::FieldError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_LONG_MONTH, DAYS_IN_SHORT_MONTH, FEBRUARY, FEBRUARY_DAYS,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, LONG_MONTHS, MAX_DAY, MAX_MONTH,
    MIN_YEAR, PASTIME_LABELS, SHORT_MONTHS,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A day value guaranteed to be in the range `1..=MAX_DAY` (1..=31).
/// Not calendar-aware: 31 is accepted regardless of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's within `1..=31`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidDay` if the value is outside the range.
    pub fn new(value: i64) -> Result<Self, FieldError> {
        let non_zero = u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .ok_or(FieldError::InvalidDay(value))?;
        if value > MAX_DAY {
            return Err(FieldError::InvalidDay(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i64> for Day {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for i64 {
    fn from(day: Day) -> Self {
        Self::from(day.get())
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's within `1..=12`
    ///
    /// # Errors
    /// Returns `FieldError::InvalidMonth` if the value is outside the range.
    pub fn new(value: i64) -> Result<Self, FieldError> {
        let non_zero = u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .ok_or(FieldError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(FieldError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<i64> for Month {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for i64 {
    fn from(month: Month) -> Self {
        Self::from(month.get())
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A non-negative year. Year 0 is valid and there is no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Year(i64);

impl Year {
    /// Creates a new Year, validating that it's not negative
    ///
    /// # Errors
    /// Returns `FieldError::InvalidYear` if the value is below `MIN_YEAR`.
    pub const fn new(value: i64) -> Result<Self, FieldError> {
        if value < MIN_YEAR {
            return Err(FieldError::InvalidYear(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> i64 {
        self.0
    }

    pub const fn is_leap(self) -> bool {
        is_leap_year(self.0)
    }
}

impl TryFrom<i64> for Year {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for i64 {
    fn from(year: Year) -> Self {
        year.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of pastimes a form may select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Pastime {
    #[display(fmt = "Surfing the Web")]
    #[serde(rename = "Surfing the Web")]
    SurfingTheWeb,
    #[display(fmt = "Playing Sport")]
    #[serde(rename = "Playing Sport")]
    PlayingSport,
    #[display(fmt = "Listening to Music")]
    #[serde(rename = "Listening to Music")]
    ListeningToMusic,
    #[display(fmt = "Watching TV")]
    #[serde(rename = "Watching TV")]
    WatchingTv,
    #[display(fmt = "Playing Games")]
    #[serde(rename = "Playing Games")]
    PlayingGames,
    #[display(fmt = "Community Service")]
    #[serde(rename = "Community Service")]
    CommunityService,
    #[display(fmt = "Daydreaming")]
    Daydreaming,
    #[display(fmt = "Reading")]
    Reading,
    #[display(fmt = "Meditation")]
    Meditation,
}

impl Pastime {
    /// Every pastime, in the same order as `PASTIME_LABELS`
    pub const ALL: [Self; 9] = [
        Self::SurfingTheWeb,
        Self::PlayingSport,
        Self::ListeningToMusic,
        Self::WatchingTv,
        Self::PlayingGames,
        Self::CommunityService,
        Self::Daydreaming,
        Self::Reading,
        Self::Meditation,
    ];

    pub const fn label(self) -> &'static str {
        PASTIME_LABELS[self as usize]
    }
}

impl FromStr for Pastime {
    type Err = FieldError;

    /// Exact, case-sensitive match against the labels. No trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pastime| pastime.label() == s)
            .ok_or_else(|| FieldError::InvalidPastime(s.to_owned()))
    }
}

// Helper functions

/// Gregorian leap-year rule, evaluated in priority order:
/// not divisible by 4, then not by 100, then not by 400.
pub const fn is_leap_year(year: i64) -> bool {
    if year % LEAP_YEAR_CYCLE != 0 {
        false
    } else if year % CENTURY_CYCLE != 0 {
        true
    } else {
        year % GREGORIAN_CYCLE == 0
    }
}

/// Number of days in `month`. The year is only consulted for February,
/// which has no answer without one. Months outside 1..=12 return `None`.
pub fn days_in_month(month: i64, year: Option<i64>) -> Option<u8> {
    if LONG_MONTHS.contains(&month) {
        Some(DAYS_IN_LONG_MONTH)
    } else if SHORT_MONTHS.contains(&month) {
        Some(DAYS_IN_SHORT_MONTH)
    } else if month == FEBRUARY {
        year.map(|year| {
            if is_leap_year(year) {
                FEBRUARY_DAYS_LEAP
            } else {
                FEBRUARY_DAYS
            }
        })
    } else {
        None
    }
}
