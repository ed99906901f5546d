//! Error types for date handling.

use thiserror::Error;

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: impossible calendar components (e.g. February 30th)
/// - `ParseError`: string did not parse as an ISO 8601 date
///
/// # Examples
/// ```
/// use swapopt_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components.
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component.
        year: i32,
        /// Month component (1-12).
        month: u32,
        /// Day component (1-31).
        day: u32,
    },

    /// Failed to parse a date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}
