//! Flat discount curve implementation.

use super::DiscountCurve;
use crate::market_data::error::CurveError;
use crate::types::time::Date;
use num_traits::Float;

/// Flat discount curve: one continuously compounded zero rate for all
/// maturities, anchored at a reference date.
///
/// Useful for prototyping, tests, and flat-term-structure scenarios.
///
/// # Example
///
/// ```
/// use swapopt_core::market_data::curves::{DiscountCurve, FlatCurve};
/// use swapopt_core::types::time::Date;
///
/// let reference = Date::from_ymd(2024, 1, 15).unwrap();
/// let curve = FlatCurve::new(reference, 0.05_f64);
///
/// assert_eq!(curve.reference_date(), reference);
///
/// // D(reference) = 1
/// let df0 = curve.discount(reference).unwrap();
/// assert!((df0 - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatCurve<T: Float> {
    /// Anchor date of the curve.
    reference: Date,
    /// The constant zero rate (continuously compounded).
    rate: T,
}

impl<T: Float> FlatCurve<T> {
    /// Constructs a flat curve from a reference date and constant rate.
    ///
    /// Negative rates are valid.
    pub fn new(reference: Date, rate: T) -> Self {
        Self { reference, rate }
    }

    /// Returns the constant zero rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }
}

impl<T: Float> DiscountCurve<T> for FlatCurve<T> {
    fn reference_date(&self) -> Date {
        self.reference
    }

    /// Returns `exp(-r * t)` with `t` the Act/365 time from the reference
    /// date.
    ///
    /// # Errors
    ///
    /// `CurveError::BeforeReferenceDate` if `date < reference_date()`.
    fn discount(&self, date: Date) -> Result<T, CurveError> {
        if date < self.reference {
            return Err(CurveError::BeforeReferenceDate {
                date,
                reference: self.reference,
            });
        }
        let t = T::from(self.time_from_reference(date)).unwrap_or_else(T::zero);
        Ok((-self.rate * t).exp())
    }
}
