//! Interest rate derivative instruments.
//!
//! This module provides:
//! - [`VanillaSwap`]: fixed-for-floating IRS built from two leg schedules
//! - [`SwaptionContract`]: physically-settled European swaption with an
//!   attached Bachelier engine
//! - [`pricing`]: annuity, par rate, and the Bachelier swaption value
//! - [`decomposition`]: re-expression of the swaption as an equivalent
//!   bond option (expiry time, payment times, signed cashflow vector)
//!
//! # Examples
//!
//! ```
//! use swapopt_models::instruments::rates::{
//!     FixedLeg, FloatingLeg, SwapDirection, SwaptionContract, VanillaSwap,
//! };
//! use swapopt_models::schedules::{Frequency, ScheduleBuilder};
//! use swapopt_core::market_data::curves::FlatCurve;
//! use swapopt_core::types::{Currency, time::{Date, DayCount}};
//!
//! let start = Date::from_ymd(2025, 1, 15).unwrap();
//! let end = Date::from_ymd(2029, 1, 15).unwrap();
//!
//! let fixed_schedule = ScheduleBuilder::new()
//!     .start(start)
//!     .end(end)
//!     .frequency(Frequency::Annual)
//!     .day_count(DayCount::Thirty360US)
//!     .build()
//!     .unwrap();
//! let floating_schedule = ScheduleBuilder::new()
//!     .start(start)
//!     .end(end)
//!     .frequency(Frequency::SemiAnnual)
//!     .day_count(DayCount::Act360)
//!     .build()
//!     .unwrap();
//!
//! let swap = VanillaSwap::new(
//!     1_000_000.0,
//!     FixedLeg::new(fixed_schedule, 0.03),
//!     FloatingLeg::new(floating_schedule, 0.0),
//!     Currency::EUR,
//!     SwapDirection::ReceiveFixed,
//! );
//!
//! let expiry = Date::from_ymd(2025, 1, 10).unwrap();
//! let swaption = SwaptionContract::new(swap, expiry, 0.005).unwrap();
//!
//! let curve = FlatCurve::new(Date::from_ymd(2024, 1, 15).unwrap(), 0.02);
//! let npv = swaption.npv(&curve).unwrap();
//! assert!(npv > 0.0);
//! ```

pub mod decomposition;
mod error;
pub mod pricing;
mod swap;
mod swaption;

pub use decomposition::{decompose, BondOptionDecomposition, LegCashflow};
pub use error::SwaptionError;
pub use swap::{FixedCashflow, FixedLeg, FloatingLeg, FloatingPeriod, SwapDirection, VanillaSwap};
pub use swaption::SwaptionContract;
