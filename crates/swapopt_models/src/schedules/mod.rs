//! Payment schedule generation for swap legs.
//!
//! This module provides:
//! - [`Period`]: a single accrual period with start, end, and payment dates
//! - [`Schedule`]: an ordered collection of periods
//! - [`Frequency`]: payment frequency (Annual through Monthly)
//! - [`ScheduleBuilder`]: builder for generating schedules
//!
//! # Examples
//!
//! ```
//! use swapopt_models::schedules::{Frequency, ScheduleBuilder};
//! use swapopt_core::types::time::{Date, DayCount};
//!
//! let schedule = ScheduleBuilder::new()
//!     .start(Date::from_ymd(2024, 1, 15).unwrap())
//!     .end(Date::from_ymd(2026, 1, 15).unwrap())
//!     .frequency(Frequency::SemiAnnual)
//!     .day_count(DayCount::Act360)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(schedule.len(), 4);
//! ```

mod error;
mod frequency;
mod period;
mod schedule;

pub use error::ScheduleError;
pub use frequency::Frequency;
pub use period::Period;
pub use schedule::{Schedule, ScheduleBuilder};
