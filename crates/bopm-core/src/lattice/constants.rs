//! Per-run lattice constants.

use serde::{Deserialize, Serialize};

use crate::types::ContractParameters;

/// Step factors, risk-neutral probability and discount factor of one run.
///
/// Values are kept at full precision. Use [`LatticeConstants::rounded`] when
/// displaying them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatticeConstants {
    /// Length of one step in years.
    pub dt: f64,
    /// Up factor `exp(sigma * sqrt(dt))`.
    pub up: f64,
    /// Down factor `exp(-sigma * sqrt(dt))`.
    pub down: f64,
    /// Risk-neutral up probability `(exp(r * dt) - d) / (u - d)`.
    pub probability: f64,
    /// One-step discount factor `exp(-r * dt)`.
    pub discount: f64,
}

impl LatticeConstants {
    /// Derives the constants for `params`.
    ///
    /// The caller is expected to have validated `params`; the probability is
    /// not clamped and may fall outside `[0, 1]` or be non-finite when the
    /// lattice is degenerate.
    #[must_use]
    pub fn derive(params: &ContractParameters) -> Self {
        let dt = params.dt();
        let jump = params.volatility * dt.sqrt();
        let up = jump.exp();
        let down = (-jump).exp();
        let probability = ((params.rate * dt).exp() - down) / (up - down);
        let discount = (-params.rate * dt).exp();

        Self {
            dt,
            up,
            down,
            probability,
            discount,
        }
    }

    /// Down probability `1 - p`.
    #[must_use]
    pub fn down_probability(&self) -> f64 {
        1.0 - self.probability
    }

    /// True when the up probability lies in `[0, 1]`.
    #[must_use]
    pub fn is_arbitrage_free(&self) -> bool {
        (0.0..=1.0).contains(&self.probability)
    }

    /// True when the up and down factors coincide (zero volatility).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.up == self.down
    }

    /// Constants rounded to `places` decimals for display.
    #[must_use]
    pub fn rounded(&self, places: u32) -> DisplayConstants {
        DisplayConstants {
            up: round_to(self.up, places),
            down: round_to(self.down, places),
            probability: round_to(self.probability, places),
            down_probability: round_to(self.down_probability(), places),
        }
    }
}

/// Display-rounded constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayConstants {
    /// Rounded up factor.
    pub up: f64,
    /// Rounded down factor.
    pub down: f64,
    /// Rounded up probability.
    pub probability: f64,
    /// Rounded down probability.
    pub down_probability: f64,
}

/// Rounds half away from zero to `places` decimals.
///
/// Non-finite values pass through and negative zero becomes zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let scale = 10f64.powi(places as i32);
    let rounded = (value * scale).round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> ContractParameters {
        ContractParameters::new(15.0, 14.0, 1.0, 2, 0.08, 0.25)
    }

    #[test]
    fn test_reference_constants() {
        let c = LatticeConstants::derive(&reference());

        assert_relative_eq!(c.dt, 0.5, epsilon = 1e-12);
        assert_relative_eq!(c.up, 1.193_364_579_447_949_7, epsilon = 1e-12);
        assert_relative_eq!(c.down, 0.837_966_885_578_755_8, epsilon = 1e-12);
        assert_relative_eq!(c.probability, 0.570_751_842_549_350_5, epsilon = 1e-12);
        assert_relative_eq!(c.discount, (-0.04f64).exp(), epsilon = 1e-15);
        assert!(c.is_arbitrage_free());
        assert!(!c.is_degenerate());
    }

    #[test]
    fn test_rounded() {
        let shown = LatticeConstants::derive(&reference()).rounded(4);
        assert_eq!(shown.up, 1.1934);
        assert_eq!(shown.down, 0.838);
        assert_eq!(shown.probability, 0.5708);
        assert_eq!(shown.down_probability, 0.4292);
    }

    #[test]
    fn test_up_down_recombine() {
        for v in [0.0, 0.01, 0.25, 1.5] {
            let mut params = reference();
            params.volatility = v;
            let c = LatticeConstants::derive(&params);
            assert_relative_eq!(c.up * c.down, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_probability_not_clamped() {
        let mut params = reference();
        params.rate = 2.0;
        params.volatility = 0.05;
        let c = LatticeConstants::derive(&params);
        assert!(c.probability > 1.0);
        assert!(!c.is_arbitrage_free());
    }

    #[test]
    fn test_zero_volatility_is_degenerate() {
        let mut params = reference();
        params.volatility = 0.0;
        let c = LatticeConstants::derive(&params);
        assert_eq!(c.up, 1.0);
        assert_eq!(c.down, 1.0);
        assert!(c.is_degenerate());
        assert!(!c.probability.is_finite());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(2.666_095, 4), 2.6661);
        assert_eq!(round_to(-0.000_01, 4), 0.0);
        assert!(round_to(0.0, 4).is_sign_positive());
        assert!(round_to(f64::NAN, 4).is_nan());
    }
}
