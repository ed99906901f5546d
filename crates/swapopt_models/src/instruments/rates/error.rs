//! Error types for swaption valuation and decomposition.

use swapopt_core::market_data::CurveError;
use swapopt_core::types::time::Date;
use thiserror::Error;

use crate::analytical::AnalyticalError;

/// Errors from swaption construction, valuation, and decomposition.
///
/// All failures are precondition violations or propagated collaborator
/// failures; there is no retry or partial result.
///
/// # Variants
///
/// - `InvalidExercise`: exercise date not strictly before the first swap
///   cashflow date, which would produce a non-monotonic time axis
/// - `EmptyLeg`: a leg with zero periods, for which the decomposition is
///   undefined
/// - `Curve`: discount curve lookup failure, propagated unchanged
/// - `Model`: analytic model failure (bad volatility or expiry)
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SwaptionError {
    /// Exercise date does not strictly precede the first swap cashflow date.
    #[error("Exercise date {expiry} does not precede first swap cashflow date {first_cashflow}")]
    InvalidExercise {
        /// The offending exercise date.
        expiry: Date,
        /// The earliest swap cashflow date.
        first_cashflow: Date,
    },

    /// A swap leg has no periods.
    #[error("Swap {leg} leg has no periods")]
    EmptyLeg {
        /// Which leg is empty ("fixed" or "floating").
        leg: &'static str,
    },

    /// Discount curve lookup failure.
    #[error("Curve lookup failed: {0}")]
    Curve(#[from] CurveError),

    /// Analytic model failure.
    #[error("Analytic model error: {0}")]
    Model(#[from] AnalyticalError),
}
