//! Swap and swaption valuation.
//!
//! This module is the swaption's attached analytic engine:
//! - [`annuity`]: fixed-leg PV01 under a discount curve
//! - [`par_swap_rate`]: the fixed rate that prices the swap to zero
//! - [`price_swaption_bachelier`]: European swaption value under the
//!   Bachelier (normal) model, `notional × annuity × N(F, K, σ, T)`
//!
//! All functions are pure reads of the swap and curve.

use num_traits::Float;
use swapopt_core::market_data::curves::DiscountCurve;

use super::error::SwaptionError;
use super::swap::VanillaSwap;
use super::swaption::SwaptionContract;
use crate::analytical::{AnalyticalError, Bachelier};

/// Computes the annuity (fixed-leg PV01) of a swap.
///
/// ```text
/// A = Σ_i DF(payment_i) × accrual_i
/// ```
///
/// # Errors
///
/// - `SwaptionError::EmptyLeg` if the fixed leg has no periods
/// - curve lookup failures propagate unchanged
pub fn annuity<T: Float, C: DiscountCurve<T>>(
    swap: &VanillaSwap<T>,
    curve: &C,
) -> Result<T, SwaptionError> {
    let schedule = swap.fixed_leg().schedule();
    if schedule.is_empty() {
        return Err(SwaptionError::EmptyLeg { leg: "fixed" });
    }

    let mut total = T::zero();
    for period in schedule.iter() {
        let accrual = T::from(period.year_fraction()).unwrap_or_else(T::zero);
        let df = curve.discount(period.payment())?;
        total = total + df * accrual;
    }
    Ok(total)
}

/// Computes the par swap rate: the fixed rate making the swap worth zero.
///
/// ```text
/// par = Σ_i DF(payment_i) × fixing_i × accrual_i / A
/// ```
///
/// where the fixings are the curve's simply-compounded forwards plus the
/// floating leg spread.
///
/// # Errors
///
/// - `SwaptionError::EmptyLeg` if either leg has no periods
/// - curve lookup failures propagate unchanged
pub fn par_swap_rate<T: Float, C: DiscountCurve<T>>(
    swap: &VanillaSwap<T>,
    curve: &C,
) -> Result<T, SwaptionError> {
    let floating = swap.floating_leg().schedule();
    if floating.is_empty() {
        return Err(SwaptionError::EmptyLeg { leg: "floating" });
    }

    let mut floating_pv = T::zero();
    for period in floating.iter() {
        let accrual = T::from(period.year_fraction()).unwrap_or_else(T::zero);
        let fixing = curve.simple_forward(period.start(), period.end(), accrual)?
            + swap.floating_leg().spread();
        let df = curve.discount(period.payment())?;
        floating_pv = floating_pv + df * fixing * accrual;
    }

    let annuity = annuity(swap, curve)?;
    Ok(floating_pv / annuity)
}

/// Prices a European swaption under the Bachelier (normal) model.
///
/// The forward is the par swap rate, the strike is the underlying's fixed
/// rate, and the expiry time is the Act/365 year fraction from the curve's
/// reference date to the exercise date. A payer swaption is a call on the
/// par rate, a receiver swaption a put.
///
/// # Errors
///
/// - `SwaptionError::Model(InvalidExpiry)` if the exercise date does not lie
///   strictly after the curve's reference date
/// - leg and curve failures propagate from [`par_swap_rate`] and [`annuity`]
pub fn price_swaption_bachelier<T: Float, C: DiscountCurve<T>>(
    contract: &SwaptionContract<T>,
    curve: &C,
) -> Result<T, SwaptionError> {
    let expiry_time = curve.time_from_reference(contract.expiry_date());
    if expiry_time <= 0.0 {
        return Err(AnalyticalError::InvalidExpiry { expiry: expiry_time }.into());
    }
    let expiry = T::from(expiry_time).unwrap_or_else(T::zero);

    let swap = contract.underlying();
    let forward = par_swap_rate(swap, curve)?;
    let annuity = annuity(swap, curve)?;
    let strike = swap.fixed_rate();

    let model = Bachelier::new(forward, contract.normal_volatility())?;
    let unit_value = if swap.is_payer() {
        model.price_call(strike, expiry)
    } else {
        model.price_put(strike, expiry)
    };

    Ok(swap.notional() * annuity * unit_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::rates::swap::{FixedLeg, FloatingLeg, SwapDirection};
    use crate::schedules::{Frequency, ScheduleBuilder, Schedule};
    use approx::assert_relative_eq;
    use swapopt_core::market_data::curves::FlatCurve;
    use swapopt_core::types::time::{Date, DayCount};
    use swapopt_core::types::Currency;

    fn schedule(freq: Frequency, day_count: DayCount) -> Schedule {
        ScheduleBuilder::new()
            .start(Date::from_ymd(2025, 1, 15).unwrap())
            .end(Date::from_ymd(2030, 1, 15).unwrap())
            .frequency(freq)
            .day_count(day_count)
            .build()
            .unwrap()
    }

    fn sample_swap(fixed_rate: f64, direction: SwapDirection) -> VanillaSwap<f64> {
        VanillaSwap::new(
            1_000_000.0,
            FixedLeg::new(schedule(Frequency::Annual, DayCount::Thirty360US), fixed_rate),
            FloatingLeg::new(schedule(Frequency::SemiAnnual, DayCount::Act360), 0.0),
            Currency::USD,
            direction,
        )
    }

    fn flat_curve(rate: f64) -> FlatCurve<f64> {
        FlatCurve::new(Date::from_ymd(2024, 1, 15).unwrap(), rate)
    }

    #[test]
    fn test_annuity_five_annual_periods() {
        let swap = sample_swap(0.03, SwapDirection::PayFixed);
        let curve = flat_curve(0.02);

        let a = annuity(&swap, &curve).unwrap();
        // Five unit accruals discounted over years 2..6 at 2%
        assert!(a > 4.5 && a < 4.7, "annuity = {}", a);
    }

    #[test]
    fn test_annuity_decreases_with_rate() {
        let swap = sample_swap(0.03, SwapDirection::PayFixed);
        let low = annuity(&swap, &flat_curve(0.01)).unwrap();
        let high = annuity(&swap, &flat_curve(0.05)).unwrap();
        assert!(low > high);
    }

    #[test]
    fn test_annuity_empty_fixed_leg() {
        let swap: VanillaSwap<f64> = VanillaSwap::new(
            1_000_000.0,
            FixedLeg::new(Schedule::new(vec![]), 0.03),
            FloatingLeg::new(schedule(Frequency::SemiAnnual, DayCount::Act360), 0.0),
            Currency::USD,
            SwapDirection::PayFixed,
        );
        assert_eq!(
            annuity(&swap, &flat_curve(0.02)).unwrap_err(),
            SwaptionError::EmptyLeg { leg: "fixed" }
        );
    }

    #[test]
    fn test_par_rate_near_curve_rate() {
        let swap = sample_swap(0.03, SwapDirection::PayFixed);
        let par = par_swap_rate(&swap, &flat_curve(0.02)).unwrap();
        // Simply-compounded forwards of a flat 2% continuous curve
        assert!(par > 0.019 && par < 0.022, "par = {}", par);
    }

    #[test]
    fn test_par_rate_independent_of_fixed_rate() {
        let curve = flat_curve(0.02);
        let a = par_swap_rate(&sample_swap(0.01, SwapDirection::PayFixed), &curve).unwrap();
        let b = par_swap_rate(&sample_swap(0.08, SwapDirection::PayFixed), &curve).unwrap();
        assert_relative_eq!(a, b, epsilon = 1e-14);
    }

    #[test]
    fn test_par_rate_includes_spread() {
        let curve = flat_curve(0.02);
        let base = sample_swap(0.03, SwapDirection::PayFixed);
        let with_spread = VanillaSwap::new(
            1_000_000.0,
            FixedLeg::new(schedule(Frequency::Annual, DayCount::Thirty360US), 0.03),
            FloatingLeg::new(schedule(Frequency::SemiAnnual, DayCount::Act360), 0.005),
            Currency::USD,
            SwapDirection::PayFixed,
        );

        let without = par_swap_rate(&base, &curve).unwrap();
        let with = par_swap_rate(&with_spread, &curve).unwrap();
        assert!(with > without);
    }

    #[test]
    fn test_swaption_price_positive() {
        let curve = flat_curve(0.02);
        let expiry = Date::from_ymd(2025, 1, 10).unwrap();

        for direction in [SwapDirection::PayFixed, SwapDirection::ReceiveFixed] {
            let contract =
                SwaptionContract::new(sample_swap(0.03, direction), expiry, 0.005).unwrap();
            let pv = price_swaption_bachelier(&contract, &curve).unwrap();
            assert!(pv > 0.0, "{:?} swaption should have positive value", direction);
        }
    }

    #[test]
    fn test_receiver_worth_more_when_strike_above_par() {
        // Par ~2%, strike 3%: the right to receive 3% is the valuable side
        let curve = flat_curve(0.02);
        let expiry = Date::from_ymd(2025, 1, 10).unwrap();

        let payer =
            SwaptionContract::new(sample_swap(0.03, SwapDirection::PayFixed), expiry, 0.005)
                .unwrap();
        let receiver =
            SwaptionContract::new(sample_swap(0.03, SwapDirection::ReceiveFixed), expiry, 0.005)
                .unwrap();

        let payer_pv = price_swaption_bachelier(&payer, &curve).unwrap();
        let receiver_pv = price_swaption_bachelier(&receiver, &curve).unwrap();
        assert!(receiver_pv > payer_pv);
    }

    #[test]
    fn test_payer_receiver_parity() {
        // Payer − Receiver = Notional × Annuity × (F − K)
        let curve = flat_curve(0.02);
        let expiry = Date::from_ymd(2025, 1, 10).unwrap();
        let strike = 0.025;

        let payer_swap = sample_swap(strike, SwapDirection::PayFixed);
        let forward = par_swap_rate(&payer_swap, &curve).unwrap();
        let a = annuity(&payer_swap, &curve).unwrap();

        let payer =
            SwaptionContract::new(payer_swap, expiry, 0.005).unwrap();
        let receiver =
            SwaptionContract::new(sample_swap(strike, SwapDirection::ReceiveFixed), expiry, 0.005)
                .unwrap();

        let payer_pv = price_swaption_bachelier(&payer, &curve).unwrap();
        let receiver_pv = price_swaption_bachelier(&receiver, &curve).unwrap();

        let intrinsic = 1_000_000.0 * a * (forward - strike);
        assert!(
            (payer_pv - receiver_pv - intrinsic).abs() < 1e-3,
            "parity violated: {} vs {}",
            payer_pv - receiver_pv,
            intrinsic
        );
    }

    #[test]
    fn test_expiry_not_after_reference_rejected() {
        // Curve anchored between expiry and swap start
        let curve = FlatCurve::new(Date::from_ymd(2025, 1, 12).unwrap(), 0.02);
        let expiry = Date::from_ymd(2025, 1, 10).unwrap();
        let contract =
            SwaptionContract::new(sample_swap(0.03, SwapDirection::PayFixed), expiry, 0.005)
                .unwrap();

        let result = price_swaption_bachelier(&contract, &curve);
        assert!(matches!(
            result,
            Err(SwaptionError::Model(AnalyticalError::InvalidExpiry { .. }))
        ));
    }

    #[test]
    fn test_annuity_via_contract_delegation() {
        let curve = flat_curve(0.02);
        let expiry = Date::from_ymd(2025, 1, 10).unwrap();
        let swap = sample_swap(0.03, SwapDirection::PayFixed);
        let direct = annuity(&swap, &curve).unwrap();

        let contract = SwaptionContract::new(swap, expiry, 0.005).unwrap();
        assert_relative_eq!(contract.annuity(&curve).unwrap(), direct, epsilon = 1e-14);
    }
}
