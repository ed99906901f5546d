//! Schedule and ScheduleBuilder implementation.

use chrono::{Datelike, Months};
use swapopt_core::types::time::{Date, DayCount};

use super::error::ScheduleError;
use super::frequency::Frequency;
use super::period::Period;

/// An ordered collection of accrual periods.
///
/// A schedule produced by [`ScheduleBuilder`] always has at least one period;
/// the plain [`Schedule::new`] constructor accepts any period list so callers
/// downstream can signal empty-leg preconditions as errors rather than
/// panics.
///
/// # Examples
///
/// ```
/// use swapopt_models::schedules::{Frequency, ScheduleBuilder};
/// use swapopt_core::types::time::{Date, DayCount};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 1, 15).unwrap())
///     .end(Date::from_ymd(2026, 1, 15).unwrap())
///     .frequency(Frequency::SemiAnnual)
///     .day_count(DayCount::Act360)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    periods: Vec<Period>,
}

impl Schedule {
    /// Creates a schedule from a list of periods.
    pub fn new(periods: Vec<Period>) -> Self {
        Self { periods }
    }

    /// Returns the periods in order.
    #[inline]
    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Returns the number of periods.
    #[inline]
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    /// Returns whether the schedule has no periods.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Returns the first period, if any.
    #[inline]
    pub fn first(&self) -> Option<&Period> {
        self.periods.first()
    }

    /// Returns the last period, if any.
    #[inline]
    pub fn last(&self) -> Option<&Period> {
        self.periods.last()
    }

    /// Returns an iterator over the periods.
    pub fn iter(&self) -> impl Iterator<Item = &Period> {
        self.periods.iter()
    }

    /// Sums the accrual fractions of all periods.
    pub fn total_year_fraction(&self) -> f64 {
        self.periods.iter().map(|p| p.year_fraction()).sum()
    }
}

/// Builder for constructing regular schedules.
///
/// Periods are rolled forward from the start date by the frequency interval;
/// a final stub is capped at the end date. Payment falls on the accrual end
/// (no business day adjustment).
///
/// # Examples
///
/// ```
/// use swapopt_models::schedules::{Frequency, ScheduleBuilder};
/// use swapopt_core::types::time::{Date, DayCount};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2024, 1, 1).unwrap())
///     .end(Date::from_ymd(2025, 1, 1).unwrap())
///     .frequency(Frequency::Quarterly)
///     .build()
///     .unwrap();
///
/// assert_eq!(schedule.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    start_date: Option<Date>,
    end_date: Option<Date>,
    frequency: Option<Frequency>,
    day_count: DayCount,
}

impl Default for ScheduleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleBuilder {
    /// Creates a builder with the default ACT/365F day count.
    pub fn new() -> Self {
        Self {
            start_date: None,
            end_date: None,
            frequency: None,
            day_count: DayCount::Act365Fixed,
        }
    }

    /// Sets the schedule start date.
    pub fn start(mut self, date: Date) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the schedule end date.
    pub fn end(mut self, date: Date) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the payment frequency.
    pub fn frequency(mut self, freq: Frequency) -> Self {
        self.frequency = Some(freq);
        self
    }

    /// Sets the day count convention for accrual fractions.
    pub fn day_count(mut self, dc: DayCount) -> Self {
        self.day_count = dc;
        self
    }

    /// Builds the schedule.
    ///
    /// # Errors
    ///
    /// - `MissingField` if start, end, or frequency is unset
    /// - `InvalidDateRange` if start >= end
    /// - `DateOverflow` if date arithmetic leaves the representable range
    pub fn build(self) -> Result<Schedule, ScheduleError> {
        let start = self
            .start_date
            .ok_or(ScheduleError::MissingField { field: "start" })?;
        let end = self
            .end_date
            .ok_or(ScheduleError::MissingField { field: "end" })?;
        let frequency = self
            .frequency
            .ok_or(ScheduleError::MissingField { field: "frequency" })?;

        if start >= end {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }

        let months = frequency.months_between_payments();
        let mut periods = Vec::new();
        let mut current = start;

        while current < end {
            let next = advance_months(current, months)?;
            let period_end = if next > end { end } else { next };
            periods.push(Period::with_payment_on_end(
                current,
                period_end,
                self.day_count,
            ));
            current = period_end;
        }

        Ok(Schedule::new(periods))
    }
}

/// Advances a date by a whole number of months.
fn advance_months(date: Date, months: u32) -> Result<Date, ScheduleError> {
    let advanced = date
        .into_inner()
        .checked_add_months(Months::new(months))
        .ok_or_else(|| ScheduleError::DateOverflow {
            reason: format!("Adding {} months to {} overflowed", months, date),
        })?;

    Date::from_ymd(advanced.year(), advanced.month(), advanced.day()).map_err(|_| {
        ScheduleError::DateOverflow {
            reason: format!("Invalid date after advancing: {:?}", advanced),
        }
    })
}
