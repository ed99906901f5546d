//! Calendar dates and day count conventions.
//!
//! This module provides:
//! - `Date`: type-safe date wrapper around `chrono::NaiveDate`
//! - `DayCount`: year-fraction conventions for financial instruments
//!
//! # Examples
//!
//! ```
//! use swapopt_core::types::time::{Date, DayCount};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let end = Date::from_ymd(2024, 7, 1).unwrap();
//!
//! let yf = DayCount::Act365Fixed.year_fraction(start, end);
//! assert!((yf - 182.0 / 365.0).abs() < 1e-12);
//! ```

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe calendar date wrapper around `chrono::NaiveDate`.
///
/// Provides ISO 8601 parsing/formatting and day-level arithmetic. All
/// instrument and curve dates in the workspace use this type.
///
/// # Examples
///
/// ```
/// use swapopt_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// assert_eq!(date - start, 166);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from year, month (1-12), and day components.
    ///
    /// Returns `Err(DateError::InvalidDate)` for impossible dates such as
    /// February 30th.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from an ISO 8601 string (YYYY-MM-DD).
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(e.to_string()))
    }

    /// Returns the underlying `NaiveDate` for access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    ///
    /// Positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Day count convention for year-fraction calculations.
///
/// # Variants
///
/// - `Act365Fixed`: actual days / 365 — the derivatives-market standard and
///   the convention used for every time-axis conversion in the bond-option
///   decomposition
/// - `Act360`: actual days / 360 — money-market instruments
/// - `Thirty360US`: 30/360 US bond basis — US corporate bonds
///
/// # Examples
///
/// ```
/// use swapopt_core::types::time::{Date, DayCount};
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let end = Date::from_ymd(2024, 7, 1).unwrap();
///
/// assert!((DayCount::Act365Fixed.year_fraction(start, end) - 182.0 / 365.0).abs() < 1e-12);
/// assert!((DayCount::Act360.year_fraction(start, end) - 182.0 / 360.0).abs() < 1e-12);
/// assert!((DayCount::Thirty360US.year_fraction(start, end) - 0.5).abs() < 1e-12);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayCount {
    /// Actual/365 Fixed: actual days / 365.0
    Act365Fixed,
    /// Actual/360: actual days / 360.0
    Act360,
    /// 30/360 US bond basis: months of 30 days, years of 360
    Thirty360US,
}

impl DayCount {
    /// Returns the standard convention name.
    pub fn name(&self) -> &'static str {
        match self {
            DayCount::Act365Fixed => "ACT/365F",
            DayCount::Act360 => "ACT/360",
            DayCount::Thirty360US => "30/360",
        }
    }

    /// Calculates the year fraction between two dates.
    ///
    /// The result is signed: negative when `start > end`. Sign-sensitive
    /// callers (e.g. exercise-date validation) rely on this rather than a
    /// panicking precondition.
    pub fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCount::Act365Fixed => (end - start) as f64 / 365.0,
            DayCount::Act360 => (end - start) as f64 / 360.0,
            DayCount::Thirty360US => {
                let (lo, hi, sign) = if start <= end {
                    (start, end, 1.0)
                } else {
                    (end, start, -1.0)
                };

                let d1 = if lo.day() == 31 { 30 } else { lo.day() };
                let d2 = if hi.day() == 31 && d1 == 30 {
                    30
                } else {
                    hi.day()
                };

                let days = 360 * (hi.year() - lo.year())
                    + 30 * (hi.month() as i32 - lo.month() as i32)
                    + (d2 as i32 - d1 as i32);
                sign * days as f64 / 360.0
            }
        }
    }
}

impl FromStr for DayCount {
    type Err = String;

    /// Parses a day count convention from common aliases (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace(['/', ' ', '-'], "").as_str() {
            "ACT365" | "ACT365F" | "ACTUAL365" | "ACTUAL365FIXED" => Ok(DayCount::Act365Fixed),
            "ACT360" | "ACTUAL360" => Ok(DayCount::Act360),
            "30360" | "THIRTY360" => Ok(DayCount::Thirty360US),
            _ => Err(format!("Unknown day count convention: {}", s)),
        }
    }
}

impl fmt::Display for DayCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DayCount;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for DayCount {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for DayCount {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            DayCount::from_str(&s).map_err(de::Error::custom)
        }
    }
}
