//! CLI command implementations.

pub mod config;
pub mod export;
pub mod graph;
pub mod price;
pub mod tree;

pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use graph::GraphArgs;
pub use price::PriceArgs;
pub use tree::TreeArgs;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Args;

use bopm_config::BopmConfig;
use bopm_core::lattice::{LatticePricer, LatticePricing, PricingEngine};
use bopm_core::types::{ContractParameters, ExerciseStyle, OptionType};
use bopm_render::warnings;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::print_warning;

/// Settings shared by every command.
#[derive(Debug)]
pub struct RunContext {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress warnings and progress messages.
    pub quiet: bool,
    /// Effective configuration.
    pub config: BopmConfig,
}

impl RunContext {
    /// Loads the configuration file if one is given, otherwise uses defaults.
    pub fn load(path: Option<&Path>, format: OutputFormat, quiet: bool) -> Result<Self> {
        let config = match path {
            Some(path) => BopmConfig::load(path)
                .with_context(|| format!("loading configuration from {}", path.display()))?,
            None => BopmConfig::default(),
        };
        Ok(Self {
            format,
            quiet,
            config,
        })
    }

    /// Reports lattice warnings on stderr unless quiet.
    pub fn warn_about(&self, pricing: &LatticePricing) {
        if self.quiet {
            return;
        }
        for warning in warnings(pricing) {
            print_warning(&warning);
        }
    }
}

/// Contract inputs; anything omitted comes from the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct ContractArgs {
    /// Initial underlying price (S0)
    #[arg(long)]
    pub spot: Option<f64>,

    /// Strike price (K)
    #[arg(long)]
    pub strike: Option<f64>,

    /// Time to maturity in years (T)
    #[arg(long)]
    pub maturity: Option<f64>,

    /// Number of periods (N)
    #[arg(long)]
    pub periods: Option<usize>,

    /// Annual continuously compounded rate (r), e.g. 0.08
    #[arg(long, allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Annual volatility (sigma), e.g. 0.25
    #[arg(long)]
    pub volatility: Option<f64>,

    /// Option type: call or put
    #[arg(long)]
    pub option_type: Option<OptionType>,

    /// Exercise style: european or american
    #[arg(long)]
    pub exercise: Option<ExerciseStyle>,
}

impl ContractArgs {
    /// Overlays the given flags on `config`'s contract.
    pub fn resolve(&self, config: &BopmConfig) -> ContractParameters {
        let base = &config.contract;
        ContractParameters::new(
            self.spot.unwrap_or(base.spot),
            self.strike.unwrap_or(base.strike),
            self.maturity.unwrap_or(base.maturity),
            self.periods.unwrap_or(base.periods),
            self.rate.unwrap_or(base.rate),
            self.volatility.unwrap_or(base.volatility),
        )
        .with_option_type(self.option_type.unwrap_or(base.option_type))
        .with_exercise(self.exercise.unwrap_or(base.exercise))
    }

    /// Resolves, checks against the configured limits and prices the contract.
    pub fn price(&self, ctx: &RunContext) -> Result<LatticePricing> {
        let params = self.resolve(&ctx.config);
        ctx.config
            .limits
            .check(&params)
            .map_err(CliError::InvalidInput)?;

        let pricing = LatticePricer.price(&params)?;
        tracing::info!(
            periods = params.periods,
            value = pricing.option_value(),
            "priced contract"
        );
        ctx.warn_about(&pricing);
        Ok(pricing)
    }
}
