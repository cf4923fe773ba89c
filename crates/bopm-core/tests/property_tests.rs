//! Property-based tests for lattice invariants.
//!
//! These tests verify properties that should hold for every arbitrage-free
//! parameterization:
//! - Node and edge counts
//! - Recombination `u * d = 1`
//! - Monotonicity of the option value in the spot
//! - American value never below European value
//! - Discrete put-call parity
//! - Linker edges land on priced nodes one step later

use bopm_core::prelude::*;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Parameters with `r * sqrt(dt) < sigma`, which keeps `p` inside `[0, 1]`.
fn arbitrage_free_params() -> impl Strategy<Value = ContractParameters> {
    (
        1.0f64..200.0,
        1.0f64..200.0,
        0.1f64..3.0,
        1usize..40,
        0.0f64..0.1,
        0.2f64..0.8,
    )
        .prop_map(|(spot, strike, maturity, periods, rate, volatility)| {
            ContractParameters::new(spot, strike, maturity, periods, rate, volatility)
        })
}

fn option_type() -> impl Strategy<Value = OptionType> {
    prop_oneof![Just(OptionType::Call), Just(OptionType::Put)]
}

fn tolerance(scale: f64) -> f64 {
    1e-9 * scale.max(1.0)
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_node_and_edge_counts(periods in 1usize..80) {
        let params = ContractParameters::new(100.0, 100.0, 1.0, periods, 0.03, 0.2);
        let pricing = price(&params).unwrap();

        prop_assert_eq!(pricing.nodes.len(), (periods + 1) * (periods + 2) / 2);
        prop_assert_eq!(pricing.nodes.len(), node_count(periods));
        prop_assert_eq!(link_pairs(periods).len(), periods * (periods + 1));
        prop_assert_eq!(pricing.nodes.leaves().len(), periods + 1);
    }

    #[test]
    fn prop_up_down_recombine(
        volatility in 0.0f64..5.0,
        maturity in 1e-6f64..50.0,
        periods in 1usize..200,
    ) {
        let params = ContractParameters::new(15.0, 14.0, maturity, periods, 0.05, volatility);
        let c = LatticeConstants::derive(&params);
        prop_assert!((c.up * c.down - 1.0).abs() < 1e-12);
    }

    #[test]
    fn prop_probability_in_unit_interval(params in arbitrage_free_params()) {
        let c = LatticeConstants::derive(&params);
        prop_assert!(c.is_arbitrage_free());
    }

    #[test]
    fn prop_european_payoffs_non_negative(
        params in arbitrage_free_params(),
        kind in option_type(),
    ) {
        let pricing = price(&params.with_option_type(kind)).unwrap();
        for node in &pricing.nodes {
            prop_assert!(node.payoff >= 0.0, "node {} payoff {}", node.index, node.payoff);
        }
    }

    #[test]
    fn prop_call_monotone_in_spot(
        params in arbitrage_free_params(),
        bump in 0.0f64..50.0,
    ) {
        let low = price(&params).unwrap().option_value();
        let high = price(&params.with_spot(params.spot + bump)).unwrap().option_value();
        prop_assert!(high >= low - tolerance(low), "{high} < {low}");
    }

    #[test]
    fn prop_put_monotone_in_spot(
        params in arbitrage_free_params(),
        cut in 0.0f64..0.9,
    ) {
        let put = params.with_option_type(OptionType::Put);
        let high_spot = price(&put).unwrap().option_value();
        let low_spot = price(&put.with_spot(params.spot * (1.0 - cut))).unwrap().option_value();
        prop_assert!(low_spot >= high_spot - tolerance(high_spot), "{low_spot} < {high_spot}");
    }

    #[test]
    fn prop_american_at_least_european(
        params in arbitrage_free_params(),
        kind in option_type(),
    ) {
        let european = params.with_option_type(kind);
        let american = european.with_exercise(ExerciseStyle::American);

        let eu = price(&european).unwrap().option_value();
        let am = price(&american).unwrap().option_value();
        prop_assert!(am >= eu - tolerance(eu), "american {am} < european {eu}");
    }

    #[test]
    fn prop_put_call_parity(params in arbitrage_free_params()) {
        let call = price(&params).unwrap().option_value();
        let put = price(&params.with_option_type(OptionType::Put)).unwrap().option_value();
        let forward_gap = params.spot - params.strike * (-params.rate * params.maturity).exp();

        let scale = params.spot.max(params.strike);
        prop_assert!(call >= 0.0 && put >= 0.0);
        prop_assert!(
            (call - put - forward_gap).abs() < 1e-8 * scale,
            "C - P = {}, S - K e^-rT = {}", call - put, forward_gap
        );
    }

    #[test]
    fn prop_edges_connect_adjacent_steps(params in arbitrage_free_params()) {
        let pricing = price(&params).unwrap();
        let c = pricing.constants;

        for edge in link_pairs(params.periods) {
            let parent = pricing.nodes.get(edge.parent).unwrap();
            let child = pricing.nodes.get(edge.child).unwrap();
            prop_assert_eq!(child.step, parent.step + 1);

            let factor = match edge.branch {
                Branch::Up => c.up,
                Branch::Down => c.down,
            };
            let expected_moves = match edge.branch {
                Branch::Up => parent.up_moves + 1,
                Branch::Down => parent.up_moves,
            };
            prop_assert_eq!(child.up_moves, expected_moves);
            prop_assert!((child.price - parent.price * factor).abs() < 1e-9 * child.price.max(1.0));
        }
    }
}
