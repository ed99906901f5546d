//! Bachelier (normal) pricing model for European options.
//!
//! The Bachelier model prices European options under normal (arithmetic)
//! dynamics of the underlying, which makes it the standard quoting model for
//! interest rate options where forwards can be negative.
//!
//! ## Formulas
//!
//! **Call**: C = (F − K)·N(d) + σ√T·φ(d)
//! **Put**:  P = (K − F)·N(−d) + σ√T·φ(d)
//!
//! with d = (F − K) / (σ√T).

use num_traits::Float;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Bachelier (normal) model.
///
/// Holds the forward level (which may be negative) and a positive normal
/// volatility.
///
/// # Examples
/// ```
/// use swapopt_models::analytical::Bachelier;
///
/// let model = Bachelier::new(0.03_f64, 0.005).unwrap();
/// let call = model.price_call(0.03, 1.0);
/// let put = model.price_put(0.03, 1.0);
///
/// // ATM: put-call parity degenerates to C = P
/// assert!((call - put).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Bachelier<T: Float> {
    /// Forward level (F), may be negative.
    forward: T,
    /// Normal volatility (σ), strictly positive.
    volatility: T,
}

impl<T: Float> Bachelier<T> {
    /// Creates a Bachelier model.
    ///
    /// # Errors
    ///
    /// `AnalyticalError::InvalidVolatility` if `volatility <= 0`.
    pub fn new(forward: T, volatility: T) -> Result<Self, AnalyticalError> {
        if volatility <= T::zero() {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self {
            forward,
            volatility,
        })
    }

    /// Returns the forward level.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the normal volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// d = (F − K) / (σ√T)
    #[inline]
    fn d(&self, strike: T, expiry: T) -> T {
        (self.forward - strike) / (self.volatility * expiry.sqrt())
    }

    /// European call price under normal dynamics.
    ///
    /// Returns the intrinsic value max(F − K, 0) at (or numerically at)
    /// expiry.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap_or_else(T::zero);

        if expiry <= epsilon {
            let intrinsic = self.forward - strike;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d = self.d(strike, expiry);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        (self.forward - strike) * norm_cdf(d) + vol_sqrt_t * norm_pdf(d)
    }

    /// European put price under normal dynamics.
    ///
    /// Returns the intrinsic value max(K − F, 0) at (or numerically at)
    /// expiry.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        let zero = T::zero();
        let epsilon = T::from(1e-10).unwrap_or_else(T::zero);

        if expiry <= epsilon {
            let intrinsic = strike - self.forward;
            return if intrinsic > zero { intrinsic } else { zero };
        }

        let d = self.d(strike, expiry);
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        (strike - self.forward) * norm_cdf(-d) + vol_sqrt_t * norm_pdf(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_rejects_non_positive_volatility() {
        assert!(matches!(
            Bachelier::new(0.03_f64, 0.0),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
        assert!(matches!(
            Bachelier::new(0.03_f64, -0.01),
            Err(AnalyticalError::InvalidVolatility { .. })
        ));
    }

    #[test]
    fn test_negative_forward_allowed() {
        let model = Bachelier::new(-0.005_f64, 0.01).unwrap();
        assert_eq!(model.forward(), -0.005);
    }

    #[test]
    fn test_atm_price_formula() {
        // ATM: d = 0, so C = σ√T · φ(0)
        let model = Bachelier::new(0.03_f64, 0.01).unwrap();
        let call = model.price_call(0.03, 1.0);
        assert_relative_eq!(call, 0.01 * norm_pdf(0.0_f64), epsilon = 1e-12);
    }

    #[test]
    fn test_put_call_parity() {
        // C − P = F − K
        let model = Bachelier::new(0.03_f64, 0.01).unwrap();
        for strike in [0.01, 0.02, 0.03, 0.04, 0.05] {
            let call = model.price_call(strike, 1.0);
            let put = model.price_put(strike, 1.0);
            assert_relative_eq!(call - put, 0.03 - strike, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_put_call_parity_negative_forward() {
        let model = Bachelier::new(-0.005_f64, 0.01).unwrap();
        let call = model.price_call(-0.01, 1.0);
        let put = model.price_put(-0.01, 1.0);
        assert_relative_eq!(call - put, -0.005 - (-0.01), epsilon = 1e-10);
    }

    #[test]
    fn test_expiry_zero_returns_intrinsic() {
        let model = Bachelier::new(0.05_f64, 0.01).unwrap();
        assert_relative_eq!(model.price_call(0.03, 0.0), 0.02, epsilon = 1e-12);
        assert_relative_eq!(model.price_put(0.03, 0.0), 0.0, epsilon = 1e-12);

        let model = Bachelier::new(0.01_f64, 0.01).unwrap();
        assert_relative_eq!(model.price_call(0.03, 0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(model.price_put(0.03, 0.0), 0.02, epsilon = 1e-12);
    }

    #[test]
    fn test_prices_increase_with_volatility() {
        let low = Bachelier::new(0.03_f64, 0.005).unwrap();
        let high = Bachelier::new(0.03_f64, 0.02).unwrap();
        assert!(high.price_call(0.03, 1.0) > low.price_call(0.03, 1.0));
        assert!(high.price_put(0.03, 1.0) > low.price_put(0.03, 1.0));
    }

    #[test]
    fn test_prices_increase_with_expiry() {
        let model = Bachelier::new(0.03_f64, 0.01).unwrap();
        let mut previous = 0.0;
        for expiry in [0.25, 0.5, 1.0, 2.0, 5.0] {
            let call = model.price_call(0.03, expiry);
            assert!(call > previous);
            previous = call;
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn call_dominates_intrinsic(
                forward in -0.05f64..0.10,
                strike in -0.05f64..0.10,
                vol in 0.001f64..0.05,
                expiry in 0.01f64..10.0,
            ) {
                let model = Bachelier::new(forward, vol).unwrap();
                let call = model.price_call(strike, expiry);
                prop_assert!(call >= (forward - strike).max(0.0) - 1e-12);
            }

            #[test]
            fn parity_holds(
                forward in -0.05f64..0.10,
                strike in -0.05f64..0.10,
                vol in 0.001f64..0.05,
                expiry in 0.01f64..10.0,
            ) {
                let model = Bachelier::new(forward, vol).unwrap();
                let call = model.price_call(strike, expiry);
                let put = model.price_put(strike, expiry);
                prop_assert!((call - put - (forward - strike)).abs() < 1e-9);
            }
        }
    }
}
