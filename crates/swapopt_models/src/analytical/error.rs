//! Error types for analytic pricing.

use thiserror::Error;

/// Analytic model errors.
///
/// # Variants
/// - `InvalidVolatility`: non-positive volatility
/// - `InvalidExpiry`: non-positive time to expiry
///
/// # Examples
/// ```
/// use swapopt_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.002 };
/// assert!(format!("{}", err).contains("-0.002"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value.
        volatility: f64,
    },

    /// Invalid time to expiry (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value in years.
        expiry: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = 0");
    }

    #[test]
    fn test_invalid_expiry_display() {
        let err = AnalyticalError::InvalidExpiry { expiry: -0.5 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -0.5");
    }

    #[test]
    fn test_error_trait() {
        let err = AnalyticalError::InvalidExpiry { expiry: 0.0 };
        let _: &dyn std::error::Error = &err;
    }
}
