//! Default contract configuration.

use serde::{Deserialize, Serialize};

use bopm_core::types::{ContractParameters, ExerciseStyle, OptionType};

/// Contract used when the caller does not supply a value.
///
/// Every field is optional in the TOML file; missing fields take the
/// textbook example values (S0 = 15, K = 14, T = 1, N = 2, r = 8%,
/// sigma = 25%, European call).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    /// Initial underlying price.
    #[serde(default = "default_spot")]
    pub spot: f64,

    /// Strike price.
    #[serde(default = "default_strike")]
    pub strike: f64,

    /// Time to maturity in years.
    #[serde(default = "default_maturity")]
    pub maturity: f64,

    /// Number of lattice steps.
    #[serde(default = "default_periods")]
    pub periods: usize,

    /// Continuously compounded annual discount rate.
    #[serde(default = "default_rate")]
    pub rate: f64,

    /// Annual volatility.
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Call or put.
    #[serde(default)]
    pub option_type: OptionType,

    /// European or American.
    #[serde(default)]
    pub exercise: ExerciseStyle,
}

fn default_spot() -> f64 {
    15.0
}

fn default_strike() -> f64 {
    14.0
}

fn default_maturity() -> f64 {
    1.0
}

fn default_periods() -> usize {
    2
}

fn default_rate() -> f64 {
    0.08
}

fn default_volatility() -> f64 {
    0.25
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            spot: default_spot(),
            strike: default_strike(),
            maturity: default_maturity(),
            periods: default_periods(),
            rate: default_rate(),
            volatility: default_volatility(),
            option_type: OptionType::default(),
            exercise: ExerciseStyle::default(),
        }
    }
}

impl ContractConfig {
    /// Converts to pricing inputs.
    #[must_use]
    pub fn to_params(&self) -> ContractParameters {
        ContractParameters::new(
            self.spot,
            self.strike,
            self.maturity,
            self.periods,
            self.rate,
            self.volatility,
        )
        .with_option_type(self.option_type)
        .with_exercise(self.exercise)
    }
}

impl From<ContractParameters> for ContractConfig {
    fn from(params: ContractParameters) -> Self {
        Self {
            spot: params.spot,
            strike: params.strike,
            maturity: params.maturity,
            periods: params.periods,
            rate: params.rate,
            volatility: params.volatility,
            option_type: params.option_type,
            exercise: params.exercise,
        }
    }
}
