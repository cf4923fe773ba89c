//! BOPM CLI - binomial lattice option pricing from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price the default contract
//! bopm price
//!
//! # American put over 10 periods
//! bopm price --option-type put --exercise american --periods 10
//!
//! # Node table and Graphviz graph
//! bopm tree --periods 3
//! bopm graph --periods 3 | dot -Tpdf -o lattice.pdf
//!
//! # CSV sheet with inputs, constants and every node
//! bopm export --output lattice.csv
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::RunContext;

fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "bopm=debug"
    } else if quiet {
        "bopm=error"
    } else {
        "bopm=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // stdout carries command output
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let ctx = RunContext::load(cli.config.as_deref(), cli.format, cli.quiet)?;

    match cli.command {
        Commands::Price(args) => commands::price::execute(args, &ctx)?,
        Commands::Tree(args) => commands::tree::execute(args, &ctx)?,
        Commands::Graph(args) => commands::graph::execute(args, &ctx)?,
        Commands::Export(args) => commands::export::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &ctx)?,
    }

    Ok(())
}
