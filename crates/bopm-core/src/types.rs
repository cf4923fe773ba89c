//! Contract types: option side, exercise style and the pricing inputs.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{LatticeError, LatticeResult};

/// Option side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    /// Right to buy the underlying at the strike.
    #[default]
    Call,
    /// Right to sell the underlying at the strike.
    Put,
}

impl OptionType {
    /// Immediate-exercise value at `spot`, not floored at zero.
    ///
    /// American early exercise compares the continuation value against this
    /// raw figure, so it may be negative.
    #[must_use]
    pub fn exercise_value(self, spot: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        }
    }

    /// Terminal payoff at `spot`: the exercise value floored at zero.
    #[must_use]
    pub fn payoff(self, spot: f64, strike: f64) -> f64 {
        self.exercise_value(spot, strike).max(0.0)
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OptionType::Call => "Call",
            OptionType::Put => "Put",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OptionType {
    type Err = ParseContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CALL" | "C" => Ok(OptionType::Call),
            "PUT" | "P" => Ok(OptionType::Put),
            _ => Err(ParseContractError::new("option type", s)),
        }
    }
}

/// When the holder may exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseStyle {
    /// Exercise at expiration only.
    #[default]
    European,
    /// Exercise at any lattice step up to expiration.
    American,
}

impl ExerciseStyle {
    /// Returns true if interior nodes are floored by the exercise value.
    #[must_use]
    pub fn allows_early_exercise(self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ExerciseStyle::European => "European",
            ExerciseStyle::American => "American",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for ExerciseStyle {
    type Err = ParseContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUROPEAN" | "EU" => Ok(ExerciseStyle::European),
            "AMERICAN" | "US" => Ok(ExerciseStyle::American),
            _ => Err(ParseContractError::new("exercise style", s)),
        }
    }
}

/// Error type for parsing option types and exercise styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseContractError {
    kind: &'static str,
    input: String,
}

impl ParseContractError {
    fn new(kind: &'static str, input: &str) -> Self {
        Self {
            kind,
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseContractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: '{}'", self.kind, self.input)
    }
}

impl std::error::Error for ParseContractError {}

/// Market and contract inputs for one pricing run.
///
/// Only the constraints that keep the time step defined are checked by
/// [`ContractParameters::validate`]. Rates, volatilities and prices are taken
/// as given.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContractParameters {
    /// Initial underlying price (S0).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Number of discrete time steps (N).
    pub periods: usize,
    /// Continuously compounded annual discount rate (r).
    pub rate: f64,
    /// Annual volatility (sigma).
    pub volatility: f64,
    /// Call or put.
    pub option_type: OptionType,
    /// European or American.
    pub exercise: ExerciseStyle,
}

impl ContractParameters {
    /// Creates a European call; use the `with_*` methods to change the rest.
    #[must_use]
    pub fn new(
        spot: f64,
        strike: f64,
        maturity: f64,
        periods: usize,
        rate: f64,
        volatility: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            maturity,
            periods,
            rate,
            volatility,
            option_type: OptionType::Call,
            exercise: ExerciseStyle::European,
        }
    }

    /// Sets the option side.
    #[must_use]
    pub fn with_option_type(mut self, option_type: OptionType) -> Self {
        self.option_type = option_type;
        self
    }

    /// Sets the exercise style.
    #[must_use]
    pub fn with_exercise(mut self, exercise: ExerciseStyle) -> Self {
        self.exercise = exercise;
        self
    }

    /// Sets the initial underlying price.
    #[must_use]
    pub fn with_spot(mut self, spot: f64) -> Self {
        self.spot = spot;
        self
    }

    /// Sets the number of time steps.
    #[must_use]
    pub fn with_periods(mut self, periods: usize) -> Self {
        self.periods = periods;
        self
    }

    /// Length of one time step in years.
    #[must_use]
    pub fn dt(&self) -> f64 {
        self.maturity / self.periods as f64
    }

    /// Checks that the time step is defined and positive.
    pub fn validate(&self) -> LatticeResult<()> {
        if self.periods < 1 {
            return Err(LatticeError::invalid_parameter(
                "periods",
                format!("must be at least 1, got {}", self.periods),
            ));
        }
        if !(self.maturity.is_finite() && self.maturity > 0.0) {
            return Err(LatticeError::invalid_parameter(
                "maturity",
                format!("must be positive and finite, got {}", self.maturity),
            ));
        }
        Ok(())
    }
}
