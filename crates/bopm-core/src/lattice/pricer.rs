//! Backward-induction pricing on the recombining binomial lattice.

use serde::{Deserialize, Serialize};

use super::constants::LatticeConstants;
use super::table::{LatticeNode, NodeTable};
use crate::error::LatticeResult;
use crate::numbering::{node_count, NodeIndex};
use crate::types::ContractParameters;

/// Trait for lattice pricing engines.
pub trait PricingEngine: Send + Sync {
    /// Prices the contract and returns the full lattice.
    fn price(&self, params: &ContractParameters) -> LatticeResult<LatticePricing>;
}

/// Cox-Ross-Rubinstein lattice pricer.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatticePricer;

impl PricingEngine for LatticePricer {
    fn price(&self, params: &ContractParameters) -> LatticeResult<LatticePricing> {
        price(params)
    }
}

/// Result of one pricing run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatticePricing {
    /// Inputs the lattice was built from.
    pub params: ContractParameters,
    /// Derived constants, full precision.
    pub constants: LatticeConstants,
    /// Price and payoff of every node.
    pub nodes: NodeTable,
}

impl LatticePricing {
    /// Present value of the option: the payoff at the root node.
    #[must_use]
    pub fn option_value(&self) -> f64 {
        self.nodes.root().payoff
    }
}

/// Underlying price after `up_moves` up moves in `step` steps.
fn node_price(params: &ContractParameters, c: &LatticeConstants, step: usize, up_moves: usize) -> f64 {
    params.spot * c.down.powi((step - up_moves) as i32) * c.up.powi(up_moves as i32)
}

/// Prices a European or American option on the binomial lattice.
///
/// Terminal payoffs are `max(S - K, 0)` (call) or `max(K - S, 0)` (put).
/// Each earlier node holds `disc * (p * up + (1 - p) * down)` of its two
/// children; American nodes are then floored by the raw exercise value,
/// which may be negative. Probabilities outside `[0, 1]` are used as
/// computed.
///
/// When volatility is zero both children are the same node and the
/// continuation value is the discounted child payoff.
///
/// # Errors
///
/// Returns [`LatticeError::InvalidParameter`](crate::error::LatticeError)
/// if `periods` is zero or `maturity` is not positive.
pub fn price(params: &ContractParameters) -> LatticeResult<LatticePricing> {
    params.validate()?;

    let constants = LatticeConstants::derive(params);
    let periods = params.periods;
    let p = constants.probability;
    let q = constants.down_probability();
    let disc = constants.discount;
    let degenerate = constants.is_degenerate();
    let early_exercise = params.exercise.allows_early_exercise();

    tracing::debug!(
        periods,
        dt = constants.dt,
        up = constants.up,
        down = constants.down,
        probability = p,
        "derived lattice constants"
    );

    let mut produced = Vec::with_capacity(node_count(periods));

    // Maturity: all-down leaf first, all-up leaf last.
    let mut payoffs = Vec::with_capacity(periods + 1);
    for up_moves in 0..=periods {
        let price = node_price(params, &constants, periods, up_moves);
        let payoff = params.option_type.payoff(price, params.strike);
        payoffs.push(payoff);
        produced.push(LatticeNode {
            index: NodeIndex::from_coords(periods, up_moves),
            step: periods,
            up_moves,
            price,
            payoff,
        });
    }

    for step in (0..periods).rev() {
        for k in 0..=step {
            // payoffs[k + 1] is still the next step's value when k is updated.
            let continuation = if degenerate {
                disc * payoffs[k]
            } else {
                disc * (p * payoffs[k + 1] + q * payoffs[k])
            };
            let price = node_price(params, &constants, step, k);
            let payoff = if early_exercise {
                continuation.max(params.option_type.exercise_value(price, params.strike))
            } else {
                continuation
            };
            payoffs[k] = payoff;
            produced.push(LatticeNode {
                index: NodeIndex::from_coords(step, k),
                step,
                up_moves: k,
                price,
                payoff,
            });
        }
        payoffs.truncate(step + 1);
    }

    let nodes = NodeTable::from_backward_sequence(periods, produced);
    tracing::debug!(nodes = nodes.len(), value = nodes.root().payoff, "lattice priced");

    Ok(LatticePricing {
        params: *params,
        constants,
        nodes,
    })
}
