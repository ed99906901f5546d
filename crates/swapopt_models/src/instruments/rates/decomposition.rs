//! Swaption-to-bond-option cashflow decomposition.
//!
//! A physically-settled European swaption can be re-expressed as an option
//! on a coupon bond: the fixed leg plays the bond coupons, and the floating
//! leg plus two notional exchanges plays the financing leg. This module
//! performs that re-expression, producing the flat numeric inputs a
//! closed-form single-factor short-rate bond-option formula consumes:
//! expiry time, payment times, a signed cashflow vector, strike, and a
//! call/put flag.
//!
//! Floating coupons are not fixed at trade date, so each one is synthesised
//! from the term structure as a forward-implied amount:
//!
//! ```text
//! implied = ((1 + accrual × fixing) × DF(end) / DF(start) − 1) × nominal
//! ```
//!
//! For a curve consistent with the fixing this is the discounted-replication
//! value of the coupon, which makes the whole leg representable as a known
//! cashflow vector.
//!
//! All date conversions use Act/365 Fixed regardless of the legs' own
//! accrual conventions, keeping the bond-option time axis self-consistent
//! even where it diverges from the legs' native accrual fractions.

use num_traits::Float;
use swapopt_core::market_data::curves::DiscountCurve;

use super::error::SwaptionError;
use super::swap::{FloatingPeriod, VanillaSwap};
use super::swaption::SwaptionContract;
use swapopt_core::types::time::Date;

/// A single time-indexed leg cashflow.
///
/// `time` is the Act/365 year fraction from the curve's reference date: the
/// payment date for fixed coupons, the accrual start for floating coupons.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LegCashflow<T> {
    /// Year fraction from the reference date.
    pub time: T,
    /// Cashflow amount.
    pub amount: T,
}

/// The bond-option equivalent of a European swaption.
///
/// Immutable record handed to an analytic bond-option formula. Both notional
/// exchange entries use the first floating period's nominal; swaps with
/// amortising notionals are not supported.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BondOptionDecomposition<T> {
    /// `+1.0` for a receiver swaption (call on the bond), `-1.0` for a
    /// payer. Getting this sign wrong silently inverts moneyness in the
    /// consuming formula.
    pub call_or_put: T,
    /// Always `0.0`: the strike is absorbed into the cashflow vector by the
    /// notional exchanges.
    pub strike: T,
    /// Act/365 year fraction from the reference date to the exercise date.
    pub expiry_time: T,
    /// Fixed coupons as `(payment time, amount)`, in leg order.
    pub fixed_leg: Vec<LegCashflow<T>>,
    /// Forward-implied floating coupons as `(accrual start time, amount)`,
    /// in leg order.
    pub float_leg: Vec<LegCashflow<T>>,
    /// Payment times: first floating accrual start, floating times, fixed
    /// times, final floating accrual end.
    pub pay_times: Vec<T>,
    /// Cashflows parallel to `pay_times`: `-nominal`, negated implied
    /// floating amounts, fixed amounts, `+nominal`.
    pub cashflows: Vec<T>,
}

/// Computes the forward-implied amount of one floating period.
///
/// ```text
/// implied = ((1 + accrual × fixing) × df_end / df_start − 1) × nominal
/// ```
pub fn implied_floating_amount<T: Float>(
    period: &FloatingPeriod<T>,
    df_start: T,
    df_end: T,
) -> T {
    ((T::one() + period.accrual_period * period.fixing_rate) * df_end / df_start - T::one())
        * period.nominal
}

/// Decomposes a swap plus exercise date into the equivalent bond option.
///
/// Pure read of the swap and curve state at call time; nothing is cached or
/// mutated, and no partial result is ever returned.
///
/// # Errors
///
/// - `SwaptionError::EmptyLeg` if either leg has no periods
/// - `SwaptionError::InvalidExercise` if `expiry_date` does not strictly
///   precede the first swap cashflow date (the time axis would not be
///   monotonic)
/// - curve lookup failures propagate unchanged
pub fn decompose<T: Float, C: DiscountCurve<T>>(
    swap: &VanillaSwap<T>,
    expiry_date: Date,
    curve: &C,
) -> Result<BondOptionDecomposition<T>, SwaptionError> {
    let fixed_cashflows = swap.fixed_cashflows();
    if fixed_cashflows.is_empty() {
        return Err(SwaptionError::EmptyLeg { leg: "fixed" });
    }
    let floating_periods = swap.floating_periods(curve)?;
    let first_period = floating_periods
        .first()
        .copied()
        .ok_or(SwaptionError::EmptyLeg { leg: "floating" })?;
    let last_period = floating_periods
        .last()
        .copied()
        .ok_or(SwaptionError::EmptyLeg { leg: "floating" })?;

    let first_fixed_payment = fixed_cashflows[0].payment_date;
    let first_cashflow = if first_period.accrual_start < first_fixed_payment {
        first_period.accrual_start
    } else {
        first_fixed_payment
    };
    if expiry_date >= first_cashflow {
        return Err(SwaptionError::InvalidExercise {
            expiry: expiry_date,
            first_cashflow,
        });
    }

    let call_or_put = if swap.is_receiver() {
        T::one()
    } else {
        -T::one()
    };
    let expiry_time = T::from(curve.time_from_reference(expiry_date)).unwrap_or_else(T::zero);

    let fixed_leg: Vec<LegCashflow<T>> = fixed_cashflows
        .iter()
        .map(|cf| LegCashflow {
            time: T::from(curve.time_from_reference(cf.payment_date)).unwrap_or_else(T::zero),
            amount: cf.amount,
        })
        .collect();

    let mut float_leg = Vec::with_capacity(floating_periods.len());
    for period in &floating_periods {
        let df_start = curve.discount(period.accrual_start)?;
        let df_end = curve.discount(period.accrual_end)?;
        float_leg.push(LegCashflow {
            time: T::from(curve.time_from_reference(period.accrual_start))
                .unwrap_or_else(T::zero),
            amount: implied_floating_amount(period, df_start, df_end),
        });
    }

    // Constant-notional restriction: both exchanges use the first period's
    // nominal even though implied amounts are computed per period.
    let nominal = first_period.nominal;
    let final_time =
        T::from(curve.time_from_reference(last_period.accrual_end)).unwrap_or_else(T::zero);

    let mut pay_times = Vec::with_capacity(float_leg.len() + fixed_leg.len() + 2);
    pay_times.push(float_leg[0].time);
    pay_times.extend(float_leg.iter().map(|cf| cf.time));
    pay_times.extend(fixed_leg.iter().map(|cf| cf.time));
    pay_times.push(final_time);

    let mut cashflows = Vec::with_capacity(pay_times.len());
    cashflows.push(-nominal);
    cashflows.extend(float_leg.iter().map(|cf| -cf.amount));
    cashflows.extend(fixed_leg.iter().map(|cf| cf.amount));
    cashflows.push(nominal);

    Ok(BondOptionDecomposition {
        call_or_put,
        strike: T::zero(),
        expiry_time,
        fixed_leg,
        float_leg,
        pay_times,
        cashflows,
    })
}

impl<T: Float> SwaptionContract<T> {
    /// Decomposes this swaption into the equivalent bond option.
    ///
    /// See [`decompose`]; the swap and exercise date are this contract's.
    pub fn bond_option_details<C: DiscountCurve<T>>(
        &self,
        curve: &C,
    ) -> Result<BondOptionDecomposition<T>, SwaptionError> {
        decompose(self.underlying(), self.expiry_date(), curve)
    }
}
