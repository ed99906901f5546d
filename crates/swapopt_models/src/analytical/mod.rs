//! Analytic pricing formulas.
//!
//! This module provides the closed-form machinery the swaption engine is
//! built on:
//! - Bachelier (normal) model for options on rates
//! - Standard normal distribution functions
//!
//! All code is generic over `T: Float` and avoids branching where a smooth
//! formulation exists.

pub mod bachelier;
pub mod distributions;
pub mod error;

pub use bachelier::Bachelier;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
