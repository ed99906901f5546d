//! Market data error types.

use crate::types::time::Date;
use thiserror::Error;

/// Discount curve lookup errors.
///
/// # Variants
///
/// - `BeforeReferenceDate`: requested date precedes the curve anchor
/// - `InvalidMaturity`: negative time to maturity
/// - `InvalidAccrual`: non-positive accrual fraction in a forward calculation
///
/// # Examples
///
/// ```
/// use swapopt_core::market_data::CurveError;
///
/// let err = CurveError::InvalidMaturity { t: -0.5 };
/// assert!(format!("{}", err).contains("-0.5"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CurveError {
    /// Requested date lies before the curve's reference date.
    #[error("Date {date} precedes curve reference date {reference}")]
    BeforeReferenceDate {
        /// The requested date.
        date: Date,
        /// The curve's reference date.
        reference: Date,
    },

    /// Invalid (negative) time to maturity.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity in years.
        t: f64,
    },

    /// Non-positive accrual fraction.
    #[error("Invalid accrual fraction: {accrual}")]
    InvalidAccrual {
        /// The invalid accrual fraction.
        accrual: f64,
    },
}
