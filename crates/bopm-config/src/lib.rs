//! BOPM Configuration Layer
//!
//! Configuration for the binomial lattice tools: the default contract, how
//! numbers and graphs are displayed, and the input ranges a front end
//! accepts before pricing.
//!
//! # Features
//!
//! - **Contract defaults**: textbook example used for any missing input
//! - **Display settings**: decimal precision and Graphviz styling
//! - **Input limits**: accepted ranges for every contract field
//! - **TOML files**: load and save with per-field defaults
//!
//! # Example
//!
//! ```rust
//! use bopm_config::{BopmConfig, Validate};
//!
//! let config = BopmConfig::from_toml_str(
//!     r#"
//!     [contract]
//!     periods = 10
//!     option_type = "put"
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.contract.periods, 10);
//! assert_eq!(config.display.precision, 4);
//! assert!(config.is_valid());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod contract;
mod display;
mod error;
mod limits;
mod settings;

pub use contract::ContractConfig;
pub use display::{DisplayConfig, MAX_PRECISION};
pub use error::{into_result, ConfigError, ConfigResult, Validate, ValidationError};
pub use limits::{Bounds, InputLimits};
pub use settings::BopmConfig;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::contract::ContractConfig;
    pub use crate::display::DisplayConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::limits::InputLimits;
    pub use crate::settings::BopmConfig;
}
