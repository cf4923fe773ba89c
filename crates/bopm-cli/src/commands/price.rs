//! Price command implementation.
//!
//! Prices one contract and shows its inputs, lattice constants and value.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use bopm_core::lattice::{DisplayConstants, LatticeConstants};
use bopm_core::types::ContractParameters;
use bopm_render::Summary;

use crate::cli::OutputFormat;
use crate::commands::{ContractArgs, RunContext};
use crate::output::{print_header, print_json, print_output, KeyValue};

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub contract: ContractArgs,
}

/// JSON report of one pricing run.
#[derive(Debug, Serialize)]
struct PriceReport {
    params: ContractParameters,
    constants: LatticeConstants,
    rounded: DisplayConstants,
    option_value: f64,
    warnings: Vec<String>,
}

/// Execute the price command.
pub fn execute(args: PriceArgs, ctx: &RunContext) -> Result<()> {
    let pricing = args.contract.price(ctx)?;
    let precision = ctx.config.display.precision;
    let summary = Summary::new(&pricing, precision);

    match ctx.format {
        OutputFormat::Table => {
            print_header("Binomial Lattice Pricing");
            let rows: Vec<KeyValue> = summary.entries().into_iter().map(KeyValue::from).collect();
            print_output(&rows, ctx.format)?;
            println!("{}", summary.value_line());
        }
        OutputFormat::Json => {
            let report = PriceReport {
                params: pricing.params,
                constants: pricing.constants,
                rounded: pricing.constants.rounded(precision),
                option_value: pricing.option_value(),
                warnings: summary.warnings.clone(),
            };
            print_json(&report)?;
        }
        OutputFormat::Csv => {
            let rows: Vec<KeyValue> = summary.entries().into_iter().map(KeyValue::from).collect();
            print_output(&rows, ctx.format)?;
        }
        OutputFormat::Minimal => println!("{}", summary.option_value),
    }

    Ok(())
}
