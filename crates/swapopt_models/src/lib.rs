//! # swapopt_models: Swaption Instruments and Bond-Option Decomposition
//!
//! Business layer of the workspace. This crate provides:
//! - Payment schedules for swap legs (`schedules`)
//! - Vanilla swap and European swaption instruments (`instruments::rates`)
//! - The Bachelier (normal) analytic model (`analytical`)
//! - The swaption-to-bond-option cashflow decomposition
//!   (`instruments::rates::decomposition`)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** so pricing code runs with `f64` or `f32`
//! - **Typed immutable results**: the decomposition is a plain record with
//!   named fields, not a string-keyed map
//! - **Errors, not panics**: preconditions surface as `SwaptionError`
//!   variants and curve failures propagate unchanged

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod schedules;
