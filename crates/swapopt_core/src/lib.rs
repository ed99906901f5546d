//! # swapopt_core: Foundation Layer for Swaption Analytics
//!
//! Bottom layer of the two-crate workspace, providing:
//! - Time types: `Date`, `DayCount` (`types::time`)
//! - Currency tags: `Currency` (`types::currency`)
//! - Discount curve abstractions: `DiscountCurve`, `FlatCurve` (`market_data::curves`)
//! - Error types: `DateError`, `CurveError`
//!
//! ## Zero Dependency Principle
//!
//! This layer depends on no other swapopt crate and keeps external
//! dependencies minimal:
//! - num-traits: generic numerical computation
//! - chrono: date arithmetic
//! - thiserror: structured errors
//! - serde: serialisation support (optional)
//!
//! ## Usage
//!
//! ```rust
//! use swapopt_core::market_data::curves::{DiscountCurve, FlatCurve};
//! use swapopt_core::types::time::{Date, DayCount};
//!
//! let reference = Date::from_ymd(2024, 1, 15).unwrap();
//! let curve = FlatCurve::new(reference, 0.02_f64);
//!
//! let in_one_year = Date::from_ymd(2025, 1, 15).unwrap();
//! let df = curve.discount(in_one_year).unwrap();
//! assert!(df < 1.0 && df > 0.97);
//!
//! let yf = DayCount::Act365Fixed.year_fraction(reference, in_one_year);
//! assert!((yf - 366.0 / 365.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: enable serialisation for `Date`, `DayCount`, `Currency`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
