//! Accrual period definition.

use std::fmt;
use swapopt_core::types::time::{Date, DayCount};

/// A single accrual period in a payment schedule.
///
/// Carries the accrual start and end dates, the payment date, and the day
/// count convention under which the period accrues.
///
/// # Examples
///
/// ```
/// use swapopt_models::schedules::Period;
/// use swapopt_core::types::time::{Date, DayCount};
///
/// let period = Period::new(
///     Date::from_ymd(2024, 1, 15).unwrap(),
///     Date::from_ymd(2024, 7, 15).unwrap(),
///     Date::from_ymd(2024, 7, 15).unwrap(),
///     DayCount::Thirty360US,
/// );
///
/// assert!((period.year_fraction() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Period {
    /// Accrual start date.
    start: Date,
    /// Accrual end date.
    end: Date,
    /// Payment date (equals the accrual end when no adjustment applies).
    payment: Date,
    /// Day count convention for the accrual fraction.
    day_count: DayCount,
}

impl Period {
    /// Creates a new period.
    #[inline]
    pub fn new(start: Date, end: Date, payment: Date, day_count: DayCount) -> Self {
        Self {
            start,
            end,
            payment,
            day_count,
        }
    }

    /// Creates a period paying on its accrual end date.
    #[inline]
    pub fn with_payment_on_end(start: Date, end: Date, day_count: DayCount) -> Self {
        Self::new(start, end, end, day_count)
    }

    /// Returns the accrual start date.
    #[inline]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the accrual end date.
    #[inline]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the payment date.
    #[inline]
    pub fn payment(&self) -> Date {
        self.payment
    }

    /// Returns the day count convention.
    #[inline]
    pub fn day_count(&self) -> DayCount {
        self.day_count
    }

    /// Returns the accrual fraction of this period under its own convention.
    #[inline]
    pub fn year_fraction(&self) -> f64 {
        self.day_count.year_fraction(self.start, self.end)
    }

    /// Returns whether this period is well-formed (end after start).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.end > self.start
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Period({} to {}, pay {}, {})",
            self.start, self.end, self.payment, self.day_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let period = Period::new(
            Date::from_ymd(2024, 1, 15).unwrap(),
            Date::from_ymd(2024, 7, 15).unwrap(),
            Date::from_ymd(2024, 7, 17).unwrap(),
            DayCount::Act360,
        );
        assert_eq!(period.start(), Date::from_ymd(2024, 1, 15).unwrap());
        assert_eq!(period.end(), Date::from_ymd(2024, 7, 15).unwrap());
        assert_eq!(period.payment(), Date::from_ymd(2024, 7, 17).unwrap());
        assert_eq!(period.day_count(), DayCount::Act360);
    }

    #[test]
    fn test_with_payment_on_end() {
        let period = Period::with_payment_on_end(
            Date::from_ymd(2024, 1, 15).unwrap(),
            Date::from_ymd(2024, 7, 15).unwrap(),
            DayCount::Act365Fixed,
        );
        assert_eq!(period.payment(), period.end());
    }

    #[test]
    fn test_year_fraction_act360() {
        let period = Period::with_payment_on_end(
            Date::from_ymd(2024, 1, 1).unwrap(),
            Date::from_ymd(2024, 7, 1).unwrap(),
            DayCount::Act360,
        );
        assert!((period.year_fraction() - 182.0 / 360.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_valid() {
        let valid = Period::with_payment_on_end(
            Date::from_ymd(2024, 1, 1).unwrap(),
            Date::from_ymd(2024, 7, 1).unwrap(),
            DayCount::Act365Fixed,
        );
        assert!(valid.is_valid());

        let degenerate = Period::with_payment_on_end(
            Date::from_ymd(2024, 1, 1).unwrap(),
            Date::from_ymd(2024, 1, 1).unwrap(),
            DayCount::Act365Fixed,
        );
        assert!(!degenerate.is_valid());
    }

    #[test]
    fn test_display() {
        let period = Period::with_payment_on_end(
            Date::from_ymd(2024, 1, 15).unwrap(),
            Date::from_ymd(2024, 7, 15).unwrap(),
            DayCount::Act360,
        );
        let display = format!("{}", period);
        assert!(display.contains("2024-01-15"));
        assert!(display.contains("ACT/360"));
    }
}
