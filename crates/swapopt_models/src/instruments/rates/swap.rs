//! Vanilla fixed-for-floating interest rate swap.
//!
//! The swap is a read-only schedule-and-cashflow source for valuation and
//! decomposition:
//! - the fixed leg reads out as dated coupon amounts, known at trade date
//! - the floating leg reads out as [`FloatingPeriod`] records whose fixing
//!   rates are projected from the discount curve when the leg is read
//!
//! # Example
//!
//! ```
//! use swapopt_models::instruments::rates::{FixedLeg, FloatingLeg, SwapDirection, VanillaSwap};
//! use swapopt_models::schedules::{Frequency, ScheduleBuilder};
//! use swapopt_core::types::{Currency, time::{Date, DayCount}};
//!
//! let schedule = ScheduleBuilder::new()
//!     .start(Date::from_ymd(2025, 1, 15).unwrap())
//!     .end(Date::from_ymd(2027, 1, 15).unwrap())
//!     .frequency(Frequency::Annual)
//!     .day_count(DayCount::Thirty360US)
//!     .build()
//!     .unwrap();
//!
//! let swap = VanillaSwap::new(
//!     1_000_000.0_f64,
//!     FixedLeg::new(schedule.clone(), 0.03),
//!     FloatingLeg::new(schedule, 0.0),
//!     Currency::USD,
//!     SwapDirection::PayFixed,
//! );
//!
//! let coupons = swap.fixed_cashflows();
//! assert_eq!(coupons.len(), 2);
//! assert!((coupons[0].amount - 30_000.0).abs() < 1e-9);
//! ```

use num_traits::Float;
use std::fmt;
use swapopt_core::market_data::curves::DiscountCurve;
use swapopt_core::market_data::CurveError;
use swapopt_core::types::time::Date;
use swapopt_core::types::Currency;

use crate::schedules::Schedule;

/// Swap direction, seen from the contract holder.
///
/// - **PayFixed** (payer swap): pay fixed, receive floating
/// - **ReceiveFixed** (receiver swap): receive fixed, pay floating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapDirection {
    /// Pay fixed rate, receive floating rate.
    PayFixed,
    /// Receive fixed rate, pay floating rate.
    ReceiveFixed,
}

impl fmt::Display for SwapDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SwapDirection::PayFixed => write!(f, "Pay Fixed"),
            SwapDirection::ReceiveFixed => write!(f, "Receive Fixed"),
        }
    }
}

/// Fixed leg: a payment schedule accruing a constant rate.
///
/// The accrual fraction of each coupon follows the day count convention the
/// schedule was built with.
#[derive(Debug, Clone)]
pub struct FixedLeg<T: Float> {
    /// Payment schedule.
    schedule: Schedule,
    /// Annual fixed rate (e.g. 0.03 for 3%).
    fixed_rate: T,
}

impl<T: Float> FixedLeg<T> {
    /// Creates a fixed leg from a schedule and an annual rate.
    pub fn new(schedule: Schedule, fixed_rate: T) -> Self {
        Self {
            schedule,
            fixed_rate,
        }
    }

    /// Returns the payment schedule.
    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the fixed rate.
    #[inline]
    pub fn fixed_rate(&self) -> T {
        self.fixed_rate
    }
}

/// Floating leg: a payment schedule indexed to the curve's forward rates
/// plus a constant spread.
#[derive(Debug, Clone)]
pub struct FloatingLeg<T: Float> {
    /// Payment schedule.
    schedule: Schedule,
    /// Spread over the projected rate (e.g. 0.001 for 10bp).
    spread: T,
}

impl<T: Float> FloatingLeg<T> {
    /// Creates a floating leg from a schedule and a spread.
    pub fn new(schedule: Schedule, spread: T) -> Self {
        Self { schedule, spread }
    }

    /// Returns the payment schedule.
    #[inline]
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Returns the spread over the projected rate.
    #[inline]
    pub fn spread(&self) -> T {
        self.spread
    }
}

/// A dated fixed coupon amount.
///
/// Amounts are unsigned coupon magnitudes (`notional × rate × accrual`);
/// pay/receive direction lives on the swap, not the cashflow.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedCashflow<T> {
    /// Payment date of the coupon.
    pub payment_date: Date,
    /// Coupon amount.
    pub amount: T,
}

/// One floating period, fully populated at read time.
///
/// The fixing rate is the simply-compounded forward implied by the curve
/// over the accrual period, plus the leg spread. Reading the leg once into
/// these records keeps later consumers free of curve lookups for rate data.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloatingPeriod<T> {
    /// Accrual start date.
    pub accrual_start: Date,
    /// Accrual end date.
    pub accrual_end: Date,
    /// Accrual fraction under the leg's day count convention.
    pub accrual_period: T,
    /// Projected fixing for the period (forward + spread).
    pub fixing_rate: T,
    /// Notional the period accrues on.
    pub nominal: T,
}

/// Plain vanilla fixed-for-floating interest rate swap.
///
/// One notional applies to both legs; amortising profiles are not
/// supported.
#[derive(Debug, Clone)]
pub struct VanillaSwap<T: Float> {
    /// Notional principal amount.
    notional: T,
    /// Fixed rate leg.
    fixed_leg: FixedLeg<T>,
    /// Floating rate leg.
    floating_leg: FloatingLeg<T>,
    /// Settlement currency.
    currency: Currency,
    /// Pay or receive fixed.
    direction: SwapDirection,
}

impl<T: Float> VanillaSwap<T> {
    /// Creates a new swap.
    pub fn new(
        notional: T,
        fixed_leg: FixedLeg<T>,
        floating_leg: FloatingLeg<T>,
        currency: Currency,
        direction: SwapDirection,
    ) -> Self {
        Self {
            notional,
            fixed_leg,
            floating_leg,
            currency,
            direction,
        }
    }

    /// Returns the notional principal amount.
    #[inline]
    pub fn notional(&self) -> T {
        self.notional
    }

    /// Returns the fixed leg.
    #[inline]
    pub fn fixed_leg(&self) -> &FixedLeg<T> {
        &self.fixed_leg
    }

    /// Returns the floating leg.
    #[inline]
    pub fn floating_leg(&self) -> &FloatingLeg<T> {
        &self.floating_leg
    }

    /// Returns the settlement currency.
    #[inline]
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns the swap direction.
    #[inline]
    pub fn direction(&self) -> SwapDirection {
        self.direction
    }

    /// Returns the fixed rate.
    #[inline]
    pub fn fixed_rate(&self) -> T {
        self.fixed_leg.fixed_rate()
    }

    /// Returns whether this is a payer swap (pay fixed).
    #[inline]
    pub fn is_payer(&self) -> bool {
        self.direction == SwapDirection::PayFixed
    }

    /// Returns whether this is a receiver swap (receive fixed).
    #[inline]
    pub fn is_receiver(&self) -> bool {
        self.direction == SwapDirection::ReceiveFixed
    }

    /// Reads the fixed leg as dated coupon amounts.
    ///
    /// Each coupon is `notional × fixed_rate × accrual`, numerically known
    /// at trade date. Order follows the leg's payment order.
    pub fn fixed_cashflows(&self) -> Vec<FixedCashflow<T>> {
        self.fixed_leg
            .schedule()
            .iter()
            .map(|period| {
                let accrual = T::from(period.year_fraction()).unwrap_or_else(T::zero);
                FixedCashflow {
                    payment_date: period.payment(),
                    amount: self.notional * self.fixed_leg.fixed_rate() * accrual,
                }
            })
            .collect()
    }

    /// Reads the floating leg as fully populated periods.
    ///
    /// Fixing rates are projected from the curve as simply-compounded
    /// forwards over each accrual period, plus the leg spread. The curve
    /// must resolve every accrual date.
    ///
    /// # Errors
    ///
    /// Curve lookup failures propagate unchanged.
    pub fn floating_periods<C: DiscountCurve<T>>(
        &self,
        curve: &C,
    ) -> Result<Vec<FloatingPeriod<T>>, CurveError> {
        let mut periods = Vec::with_capacity(self.floating_leg.schedule().len());

        for period in self.floating_leg.schedule().iter() {
            let accrual = T::from(period.year_fraction()).unwrap_or_else(T::zero);
            let forward = curve.simple_forward(period.start(), period.end(), accrual)?;
            periods.push(FloatingPeriod {
                accrual_start: period.start(),
                accrual_end: period.end(),
                accrual_period: accrual,
                fixing_rate: forward + self.floating_leg.spread(),
                nominal: self.notional,
            });
        }

        Ok(periods)
    }

    /// Returns the earliest cashflow-relevant date across both legs: the
    /// first fixed payment date or the first floating accrual start,
    /// whichever comes first. `None` when both legs are empty.
    pub fn first_cashflow_date(&self) -> Option<Date> {
        let first_fixed = self.fixed_leg.schedule().first().map(|p| p.payment());
        let first_floating = self.floating_leg.schedule().first().map(|p| p.start());

        match (first_fixed, first_floating) {
            (Some(a), Some(b)) => Some(if a < b { a } else { b }),
            (Some(a), None) => Some(a),
            (None, Some(b)) => Some(b),
            (None, None) => None,
        }
    }
}
