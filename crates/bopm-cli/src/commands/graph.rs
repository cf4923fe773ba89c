//! Graph command implementation.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bopm_render::DotGraph;

use crate::commands::{ContractArgs, RunContext};
use crate::output::{print_success, write_text};

/// Arguments for the graph command.
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Write the DOT text to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the graph command.
pub fn execute(args: GraphArgs, ctx: &RunContext) -> Result<()> {
    let pricing = args.contract.price(ctx)?;
    let graph = DotGraph::new(&pricing, &ctx.config.display)?;

    write_text(args.output.as_deref(), &graph.to_string())?;
    if let Some(path) = &args.output {
        if !ctx.quiet {
            print_success(&format!(
                "Wrote {} edges to {}",
                graph.edges().len(),
                path.display()
            ));
        }
    }

    Ok(())
}
