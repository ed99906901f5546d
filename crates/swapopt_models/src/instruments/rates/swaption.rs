//! Physically-settled European swaption.

use num_traits::Float;
use swapopt_core::market_data::curves::DiscountCurve;
use swapopt_core::types::time::Date;
use swapopt_core::types::Currency;

use super::error::SwaptionError;
use super::pricing;
use super::swap::VanillaSwap;
use crate::analytical::AnalyticalError;

/// Physically-settled European swaption.
///
/// Owns the economic trade definition: the underlying swap, the single
/// exercise date, and a normal (Bachelier) volatility quote. Valuation
/// delegates to the attached Bachelier analytic engine in
/// [`pricing`](super::pricing); exercising delivers the
/// underlying swap itself, so the option direction is the swap's direction.
///
/// # Example
///
/// ```
/// use swapopt_models::instruments::rates::{
///     FixedLeg, FloatingLeg, SwapDirection, SwaptionContract, VanillaSwap,
/// };
/// use swapopt_models::schedules::{Frequency, ScheduleBuilder};
/// use swapopt_core::types::{Currency, time::{Date, DayCount}};
///
/// let schedule = ScheduleBuilder::new()
///     .start(Date::from_ymd(2025, 1, 15).unwrap())
///     .end(Date::from_ymd(2030, 1, 15).unwrap())
///     .frequency(Frequency::Annual)
///     .day_count(DayCount::Thirty360US)
///     .build()
///     .unwrap();
///
/// let swap = VanillaSwap::new(
///     1_000_000.0,
///     FixedLeg::new(schedule.clone(), 0.03),
///     FloatingLeg::new(schedule, 0.0),
///     Currency::USD,
///     SwapDirection::ReceiveFixed,
/// );
///
/// let expiry = Date::from_ymd(2025, 1, 15).unwrap();
/// let swaption = SwaptionContract::new(swap, expiry, 0.005);
/// assert!(swaption.is_err()); // expiry must strictly precede the first cashflow date
/// ```
#[derive(Debug, Clone)]
pub struct SwaptionContract<T: Float> {
    /// Underlying swap entered upon exercise.
    underlying: VanillaSwap<T>,
    /// The single European exercise date.
    expiry_date: Date,
    /// Normal (Bachelier) volatility quote.
    normal_volatility: T,
}

impl<T: Float> SwaptionContract<T> {
    /// Creates a new swaption.
    ///
    /// # Errors
    ///
    /// - `SwaptionError::EmptyLeg` if either leg has no periods
    /// - `SwaptionError::InvalidExercise` if `expiry_date` does not strictly
    ///   precede every swap cashflow date
    /// - `SwaptionError::Model(InvalidVolatility)` if the volatility quote is
    ///   not positive
    pub fn new(
        underlying: VanillaSwap<T>,
        expiry_date: Date,
        normal_volatility: T,
    ) -> Result<Self, SwaptionError> {
        if normal_volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: normal_volatility.to_f64().unwrap_or(0.0),
            }
            .into());
        }
        if underlying.fixed_leg().schedule().is_empty() {
            return Err(SwaptionError::EmptyLeg { leg: "fixed" });
        }
        if underlying.floating_leg().schedule().is_empty() {
            return Err(SwaptionError::EmptyLeg { leg: "floating" });
        }

        // first_cashflow_date is Some here: both legs are non-empty
        if let Some(first_cashflow) = underlying.first_cashflow_date() {
            if expiry_date >= first_cashflow {
                return Err(SwaptionError::InvalidExercise {
                    expiry: expiry_date,
                    first_cashflow,
                });
            }
        }

        Ok(Self {
            underlying,
            expiry_date,
            normal_volatility,
        })
    }

    /// Returns the underlying swap.
    #[inline]
    pub fn underlying(&self) -> &VanillaSwap<T> {
        &self.underlying
    }

    /// Returns the exercise date.
    #[inline]
    pub fn expiry_date(&self) -> Date {
        self.expiry_date
    }

    /// Returns the normal volatility quote.
    #[inline]
    pub fn normal_volatility(&self) -> T {
        self.normal_volatility
    }

    /// Returns the settlement currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.underlying.currency()
    }

    /// Returns whether exercising delivers a payer swap.
    #[inline]
    pub fn is_payer(&self) -> bool {
        self.underlying.is_payer()
    }

    /// Returns whether exercising delivers a receiver swap.
    #[inline]
    pub fn is_receiver(&self) -> bool {
        self.underlying.is_receiver()
    }

    /// Returns the option's present value under the attached Bachelier
    /// engine, in the swap's settlement currency.
    ///
    /// # Errors
    ///
    /// Curve and analytic model failures propagate as [`SwaptionError`].
    pub fn npv<C: DiscountCurve<T>>(&self, curve: &C) -> Result<T, SwaptionError> {
        pricing::price_swaption_bachelier(self, curve)
    }

    /// Returns the underlying swap's annuity (fixed-leg PV01) under the
    /// given discount curve.
    ///
    /// # Errors
    ///
    /// Curve failures propagate as [`SwaptionError`].
    pub fn annuity<C: DiscountCurve<T>>(&self, curve: &C) -> Result<T, SwaptionError> {
        pricing::annuity(&self.underlying, curve)
    }
}
