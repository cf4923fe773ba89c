//! Accepted input ranges for user-supplied contracts.
//!
//! The lattice itself only rejects a degenerate time step. These limits are
//! the bounds a front end enforces before pricing.

use serde::{Deserialize, Serialize};

use bopm_core::types::ContractParameters;

use crate::error::{Validate, ValidationError};

/// Closed interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl Bounds {
    /// Creates a bound.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// True if `value` lies inside the interval. NaN never does.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, field: &str, value: f64, errors: &mut Vec<ValidationError>) {
        if !self.contains(value) {
            errors.push(ValidationError::new(
                field,
                format!("{value} is outside [{}, {}]", self.min, self.max),
            ));
        }
    }

    fn check_ordered(&self, field: &str, errors: &mut Vec<ValidationError>) {
        if self.min.is_nan() || self.max.is_nan() || self.min > self.max {
            errors.push(ValidationError::new(
                field,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
    }
}

/// Bounds applied to every field of [`ContractParameters`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputLimits {
    /// Smallest accepted number of periods.
    #[serde(default = "default_min_periods")]
    pub min_periods: usize,
    /// Largest accepted number of periods.
    #[serde(default = "default_max_periods")]
    pub max_periods: usize,
    /// Initial underlying price.
    #[serde(default = "default_price_bounds")]
    pub spot: Bounds,
    /// Strike price.
    #[serde(default = "default_price_bounds")]
    pub strike: Bounds,
    /// Time to maturity in years.
    #[serde(default = "default_maturity_bounds")]
    pub maturity: Bounds,
    /// Annual discount rate.
    #[serde(default = "default_rate_bounds")]
    pub rate: Bounds,
    /// Annual volatility.
    #[serde(default = "default_rate_bounds")]
    pub volatility: Bounds,
}

fn default_price_bounds() -> Bounds {
    Bounds::new(0.0, 100_000_000.0)
}

fn default_maturity_bounds() -> Bounds {
    Bounds::new(0.000_001, 1000.0)
}

fn default_rate_bounds() -> Bounds {
    Bounds::new(0.0, 10_000.0)
}

fn default_min_periods() -> usize {
    1
}

fn default_max_periods() -> usize {
    50
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            spot: default_price_bounds(),
            strike: default_price_bounds(),
            maturity: default_maturity_bounds(),
            min_periods: default_min_periods(),
            max_periods: default_max_periods(),
            rate: default_rate_bounds(),
            volatility: default_rate_bounds(),
        }
    }
}

impl InputLimits {
    /// Lists every field of `params` that falls outside these limits.
    #[must_use]
    pub fn violations(&self, params: &ContractParameters) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.spot.check("spot", params.spot, &mut errors);
        self.strike.check("strike", params.strike, &mut errors);
        self.maturity.check("maturity", params.maturity, &mut errors);
        if params.periods < self.min_periods || params.periods > self.max_periods {
            errors.push(ValidationError::new(
                "periods",
                format!(
                    "{} is outside [{}, {}]",
                    params.periods, self.min_periods, self.max_periods
                ),
            ));
        }
        self.rate.check("rate", params.rate, &mut errors);
        self.volatility.check("volatility", params.volatility, &mut errors);
        errors
    }

    /// Fails with the collected violations, if any.
    pub fn check(&self, params: &ContractParameters) -> crate::ConfigResult<()> {
        crate::error::into_result(self.violations(params))
    }
}

impl Validate for InputLimits {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        self.spot.check_ordered("limits.spot", &mut errors);
        self.strike.check_ordered("limits.strike", &mut errors);
        self.maturity.check_ordered("limits.maturity", &mut errors);
        self.rate.check_ordered("limits.rate", &mut errors);
        self.volatility.check_ordered("limits.volatility", &mut errors);
        if self.min_periods == 0 {
            errors.push(ValidationError::new(
                "limits.min_periods",
                "must be at least 1",
            ));
        }
        if self.min_periods > self.max_periods {
            errors.push(ValidationError::new(
                "limits.max_periods",
                format!(
                    "max {} is below min {}",
                    self.max_periods, self.min_periods
                ),
            ));
        }
        if self.maturity.min.is_nan() || self.maturity.min <= 0.0 {
            errors.push(ValidationError::new(
                "limits.maturity",
                "minimum maturity must be positive",
            ));
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params() -> ContractParameters {
        ContractParameters::new(15.0, 14.0, 1.0, 2, 0.08, 0.25)
    }

    #[test]
    fn test_defaults_accept_reference_contract() {
        let limits = InputLimits::default();
        assert!(limits.violations(&params()).is_empty());
        assert!(limits.check(&params()).is_ok());
        assert!(limits.is_valid());
    }

    #[test]
    fn test_periods_capped() {
        let limits = InputLimits::default();
        let errors = limits.violations(&params().with_periods(51));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "periods");
        assert_eq!(errors[0].message, "51 is outside [1, 50]");
    }

    #[test]
    fn test_multiple_violations() {
        let mut p = params();
        p.spot = -1.0;
        p.volatility = f64::NAN;
        p.maturity = 0.0;
        let fields: Vec<String> = InputLimits::default()
            .violations(&p)
            .into_iter()
            .map(|e| e.field)
            .collect();
        assert_eq!(fields, vec!["spot", "maturity", "volatility"]);
    }

    #[test]
    fn test_inverted_limits_invalid() {
        let limits = InputLimits {
            min_periods: 10,
            max_periods: 5,
            rate: Bounds::new(1.0, 0.0),
            ..InputLimits::default()
        };
        let fields: Vec<String> = limits.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["limits.rate", "limits.max_periods"]);
    }

    proptest! {
        #[test]
        fn prop_in_range_contracts_pass(
            spot in 0.0f64..1e8,
            strike in 0.0f64..1e8,
            maturity in 1e-6f64..1000.0,
            periods in 1usize..=50,
            rate in 0.0f64..1e4,
            volatility in 0.0f64..1e4,
        ) {
            let p = ContractParameters::new(spot, strike, maturity, periods, rate, volatility);
            prop_assert!(InputLimits::default().violations(&p).is_empty());
        }
    }
}
