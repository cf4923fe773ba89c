//! Human-readable run summary.

use std::fmt;

use serde::Serialize;

use bopm_core::lattice::LatticePricing;

use crate::labels::format_value;

/// Inputs, constants and option value of one pricing run, formatted for
/// display at a fixed precision.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// `(symbol, value)` pairs of the contract inputs.
    pub inputs: Vec<(String, String)>,
    /// `(symbol, value)` pairs of the derived constants.
    pub constants: Vec<(String, String)>,
    /// Value of the option at the root.
    pub option_value: String,
    /// Conditions worth reporting to the user.
    pub warnings: Vec<String>,
}

impl Summary {
    /// Summarises `pricing` at `precision` decimals.
    #[must_use]
    pub fn new(pricing: &LatticePricing, precision: u32) -> Self {
        let params = &pricing.params;
        let constants = &pricing.constants;
        let num = |value: f64| format_value(value, precision);
        let pair = |name: &str, value: String| (name.to_string(), value);

        let inputs = vec![
            pair("S0", num(params.spot)),
            pair("K", num(params.strike)),
            pair("T", num(params.maturity)),
            pair("N", params.periods.to_string()),
            pair("Δt", num(constants.dt)),
            pair("r", num(params.rate)),
            pair("σ", num(params.volatility)),
            pair("Type", params.option_type.to_string()),
            pair("Style", params.exercise.to_string()),
        ];

        let constants_list = vec![
            pair("u", num(constants.up)),
            pair("d", num(constants.down)),
            pair("p", num(constants.probability)),
            pair("1 - p", num(constants.down_probability())),
        ];

        Self {
            inputs,
            constants: constants_list,
            option_value: num(pricing.option_value()),
            warnings: warnings(pricing),
        }
    }

    /// Input summary line.
    #[must_use]
    pub fn inputs_line(&self) -> String {
        join(&self.inputs)
    }

    /// Constants summary line.
    #[must_use]
    pub fn constants_line(&self) -> String {
        join(&self.constants)
    }

    /// Option value line.
    #[must_use]
    pub fn value_line(&self) -> String {
        format!("Current payoff at time T0 = {}", self.option_value)
    }

    /// Every `(symbol, value)` pair, inputs first.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, String)> {
        let mut entries = self.inputs.clone();
        entries.extend(self.constants.iter().cloned());
        entries.push(("value".to_string(), self.option_value.clone()));
        entries
    }
}

fn join(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.inputs_line())?;
        writeln!(f, "{}", self.constants_line())?;
        write!(f, "{}", self.value_line())
    }
}

/// Conditions under which the lattice result should be read with care.
///
/// The pricer accepts any finite probability; these are surfaced here
/// instead of rejected.
#[must_use]
pub fn warnings(pricing: &LatticePricing) -> Vec<String> {
    let constants = &pricing.constants;
    let mut warnings = Vec::new();
    if constants.is_degenerate() {
        warnings.push(
            "zero volatility: up and down factors coincide, the option value is the discounted terminal payoff"
                .to_string(),
        );
    } else if !constants.is_arbitrage_free() {
        warnings.push(format!(
            "risk-neutral probability p = {} is outside [0, 1]; the lattice admits arbitrage",
            constants.probability
        ));
    }
    warnings
}
