//! Tree command implementation.
//!
//! Lists every lattice node in index order.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use bopm_core::lattice::LatticeNode;
use bopm_render::format_value;

use crate::cli::OutputFormat;
use crate::commands::{ContractArgs, RunContext};
use crate::output::{print_header, print_json, print_output};

/// Arguments for the tree command.
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Only show the nodes at this step
    #[arg(long)]
    pub step: Option<usize>,
}

/// One displayed node.
#[derive(Debug, Serialize, Tabled)]
struct NodeRow {
    #[tabled(rename = "Node")]
    index: usize,
    #[tabled(rename = "Step")]
    step: usize,
    #[tabled(rename = "Up moves")]
    up_moves: usize,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Payoff")]
    payoff: String,
}

impl NodeRow {
    fn new(node: &LatticeNode, precision: u32) -> Self {
        Self {
            index: node.index.get(),
            step: node.step,
            up_moves: node.up_moves,
            price: format_value(node.price, precision),
            payoff: format_value(node.payoff, precision),
        }
    }
}

/// Execute the tree command.
pub fn execute(args: TreeArgs, ctx: &RunContext) -> Result<()> {
    let pricing = args.contract.price(ctx)?;
    let nodes: Vec<&LatticeNode> = match args.step {
        Some(step) if step > pricing.nodes.periods() => {
            anyhow::bail!(
                "step {step} is beyond the last period {}",
                pricing.nodes.periods()
            )
        }
        Some(step) => pricing.nodes.step(step).iter().collect(),
        None => pricing.nodes.iter().collect(),
    };

    match ctx.format {
        OutputFormat::Json => print_json(&nodes)?,
        OutputFormat::Minimal => {
            for node in nodes {
                println!("{} {} {}", node.index, node.price, node.payoff);
            }
        }
        OutputFormat::Table | OutputFormat::Csv => {
            let precision = ctx.config.display.precision;
            let rows: Vec<NodeRow> = nodes.iter().map(|n| NodeRow::new(n, precision)).collect();
            if ctx.format == OutputFormat::Table {
                print_header("Lattice Nodes");
            }
            print_output(&rows, ctx.format)?;
        }
    }

    Ok(())
}
