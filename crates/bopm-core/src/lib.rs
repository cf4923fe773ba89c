//! # BOPM Core
//!
//! Binomial Options Pricing Model lattice for European and American calls
//! and puts.
//!
//! This crate provides the two pure building blocks consumed by the
//! rendering and export layers:
//!
//! - **Lattice Pricer** ([`lattice`]): step factors, risk-neutral probability
//!   and the price/payoff of every node via backward induction
//! - **Node Graph Linker** ([`linker`]): parent/child edges of the lattice,
//!   derived from the period count alone
//!
//! Both agree on a single node numbering defined in [`numbering`].
//!
//! ## Example
//!
//! ```rust
//! use bopm_core::prelude::*;
//!
//! let params = ContractParameters::new(15.0, 14.0, 1.0, 2, 0.08, 0.25)
//!     .with_option_type(OptionType::Put)
//!     .with_exercise(ExerciseStyle::American);
//!
//! let pricing = price(&params).unwrap();
//! let edges = link_pairs(params.periods);
//!
//! assert_eq!(pricing.nodes.len(), 6);
//! assert_eq!(edges.len(), 6);
//! assert!(pricing.option_value() > 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod lattice;
pub mod linker;
pub mod numbering;
pub mod types;

pub use error::{LatticeError, LatticeResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{LatticeError, LatticeResult};
    pub use crate::lattice::{
        price, LatticeConstants, LatticeNode, LatticePricer, LatticePricing, NodeTable,
        PricingEngine,
    };
    pub use crate::linker::{link_pairs, Branch, NodeEdge};
    pub use crate::numbering::{node_count, NodeIndex};
    pub use crate::types::{ContractParameters, ExerciseStyle, OptionType};
}
