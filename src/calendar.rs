//! Month-granularity calendar arithmetic
//!
//! Projections reason in whole months. A `Month` is a calendar point with the
//! day normalized away; ordering, offsets, and age math operate directly on
//! the year/month pair.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A calendar month (year and month, day normalized to the first)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

/// Error parsing a `YYYY-MM` month string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMonthError {
    #[error("expected YYYY-MM, got {0:?}")]
    Format(String),
    #[error("month out of range: {0}")]
    OutOfRange(u32),
}

impl Month {
    /// Create a month. `month` must be in 1..=12.
    pub fn new(year: i32, month: u32) -> Self {
        debug_assert!((1..=12).contains(&month), "month out of range: {}", month);
        Self { year, month }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Month containing the given date (day discarded)
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month())
    }

    /// First day of this month as a calendar date
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("month is validated")
    }

    /// Zero-based month count since 0001-01, the working unit for offsets
    fn index(&self) -> i64 {
        self.year as i64 * 12 + (self.month as i64 - 1)
    }

    fn from_index(index: i64) -> Self {
        Self {
            year: index.div_euclid(12) as i32,
            month: (index.rem_euclid(12) + 1) as u32,
        }
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        self.plus_months(1)
    }

    /// Offset by a number of months (negative offsets step backwards)
    pub fn plus_months(&self, months: i64) -> Self {
        Self::from_index(self.index() + months)
    }

    /// Offset by a number of years, same month
    pub fn plus_years(&self, years: i32) -> Self {
        Self::new(self.year + years, self.month)
    }

    /// Whole years elapsed since `earlier`
    ///
    /// Month-aware: the year only counts once the anniversary month has been
    /// reached. `2026-01.years_since(1976-02)` is 49, `2026-02` makes it 50.
    pub fn years_since(&self, earlier: Month) -> i32 {
        let mut years = self.year - earlier.year;
        if self.month < earlier.month {
            years -= 1;
        }
        years
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = ParseMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| ParseMonthError::Format(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| ParseMonthError::Format(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| ParseMonthError::Format(s.to_string()))?;
        if !(1..=12).contains(&month) {
            return Err(ParseMonthError::OutOfRange(month));
        }
        Ok(Self { year, month })
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
