//! Financial instrument definitions.
//!
//! Instruments are organised by asset class; only interest rate products
//! live here:
//! - [`rates::VanillaSwap`]: fixed-for-floating interest rate swap
//! - [`rates::SwaptionContract`]: physically-settled European swaption
//! - [`rates::decomposition`]: the swaption-to-bond-option cashflow
//!   decomposition

pub mod rates;
