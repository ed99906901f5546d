//! Discount curve trait definition.

use crate::market_data::error::CurveError;
use crate::types::time::{Date, DayCount};
use num_traits::Float;

/// Date-indexed discount factor source.
///
/// The curve is anchored at a reference date and resolves discount factors
/// by calendar date. Implementations must be generic over `T: Float` so the
/// same curve works with `f64` and `f32`.
///
/// # Contract
///
/// - `reference_date()` returns the anchor of the curve
/// - `discount(d)` returns the discount factor for date `d`
///
/// # Invariants
///
/// - `discount(reference_date()) == 1`
/// - `discount(d) > 0` for all resolvable `d`
/// - `discount(d1) >= discount(d2)` for `d1 <= d2` under non-negative rates
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
/// let df = curve.discount(Date::from_ymd(2025, 1, 15).unwrap()).unwrap();
/// assert!(df < 1.0);
///
/// // Dates before the reference date are rejected
/// assert!(curve.discount(Date::from_ymd(2023, 1, 15).unwrap()).is_err());
/// ```
pub trait DiscountCurve<T: Float> {
    /// Returns the curve's reference (anchor) date.
    fn reference_date(&self) -> Date;

    /// Returns the discount factor for the given date.
    ///
    /// # Errors
    ///
    /// `CurveError::BeforeReferenceDate` if `date` precedes the reference
    /// date; implementations may add further range errors.
    fn discount(&self, date: Date) -> Result<T, CurveError>;

    /// Returns the Act/365 Fixed year fraction from the reference date.
    ///
    /// Negative when `date` precedes the reference date; callers that need
    /// a non-negative time axis must validate the date ordering themselves.
    fn time_from_reference(&self, date: Date) -> f64 {
        DayCount::Act365Fixed.year_fraction(self.reference_date(), date)
    }

    /// Returns the simply-compounded forward rate over `[start, end]`.
    ///
    /// ```text
    /// F = (D(start) / D(end) - 1) / accrual
    /// ```
    ///
    /// The accrual fraction is supplied by the caller because it follows the
    /// instrument's own day count convention, not the curve's time axis.
    ///
    /// # Errors
    ///
    /// `CurveError::InvalidAccrual` if `accrual <= 0`; lookup errors
    /// propagate from [`DiscountCurve::discount`].
    fn simple_forward(&self, start: Date, end: Date, accrual: T) -> Result<T, CurveError> {
        if accrual <= T::zero() {
            return Err(CurveError::InvalidAccrual {
                accrual: accrual.to_f64().unwrap_or(0.0),
            });
        }
        let df_start = self.discount(start)?;
        let df_end = self.discount(end)?;
        Ok((df_start / df_end - T::one()) / accrual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock implementation exercising the provided methods
    struct MockCurve {
        reference: Date,
        rate: f64,
    }

    impl DiscountCurve<f64> for MockCurve {
        fn reference_date(&self) -> Date {
            self.reference
        }

        fn discount(&self, date: Date) -> Result<f64, CurveError> {
            if date < self.reference {
                return Err(CurveError::BeforeReferenceDate {
                    date,
                    reference: self.reference,
                });
            }
            let t = self.time_from_reference(date);
            Ok((-self.rate * t).exp())
        }
    }

    fn mock() -> MockCurve {
        MockCurve {
            reference: Date::from_ymd(2024, 1, 1).unwrap(),
            rate: 0.05,
        }
    }

    #[test]
    fn test_time_from_reference() {
        let curve = mock();
        let t = curve.time_from_reference(Date::from_ymd(2025, 1, 1).unwrap());
        // 2024 is a leap year
        assert!((t - 366.0 / 365.0).abs() < 1e-12);
    }

    #[test]
    fn test_time_from_reference_negative_before_anchor() {
        let curve = mock();
        let t = curve.time_from_reference(Date::from_ymd(2023, 7, 1).unwrap());
        assert!(t < 0.0);
    }

    #[test]
    fn test_simple_forward_recovers_flat_rate() {
        let curve = mock();
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 7, 1).unwrap();
        let accrual = DayCount::Act365Fixed.year_fraction(start, end);

        let fwd = curve.simple_forward(start, end, accrual).unwrap();
        // Simply-compounded forward of a flat 5% continuous curve
        let expected = ((0.05_f64 * accrual).exp() - 1.0) / accrual;
        assert!((fwd - expected).abs() < 1e-12);
    }

    #[test]
    fn test_simple_forward_rejects_zero_accrual() {
        let curve = mock();
        let start = Date::from_ymd(2025, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 7, 1).unwrap();

        let result = curve.simple_forward(start, end, 0.0);
        assert!(matches!(result, Err(CurveError::InvalidAccrual { .. })));
    }

    #[test]
    fn test_simple_forward_propagates_lookup_error() {
        let curve = mock();
        let before = Date::from_ymd(2023, 1, 1).unwrap();
        let end = Date::from_ymd(2025, 1, 1).unwrap();

        let result = curve.simple_forward(before, end, 0.5);
        assert!(matches!(
            result,
            Err(CurveError::BeforeReferenceDate { .. })
        ));
    }
}
