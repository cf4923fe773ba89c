//! Lattice Pricer.
//!
//! Builds the recombining binomial tree of underlying prices, computes the
//! terminal payoffs and discounts them back to the root, optionally applying
//! the American early-exercise floor at every interior node.
//!
//! # Example
//!
//! ```rust
//! use bopm_core::lattice::price;
//! use bopm_core::types::ContractParameters;
//!
//! let params = ContractParameters::new(15.0, 14.0, 1.0, 2, 0.08, 0.25);
//! let pricing = price(&params).unwrap();
//!
//! assert_eq!(pricing.nodes.len(), 6);
//! assert!((pricing.option_value() - 2.6661).abs() < 1e-4);
//! ```

pub mod constants;
pub mod pricer;
pub mod table;

pub use constants::{round_to, DisplayConstants, LatticeConstants};
pub use pricer::{price, LatticePricer, LatticePricing, PricingEngine};
pub use table::{LatticeNode, NodeTable};
