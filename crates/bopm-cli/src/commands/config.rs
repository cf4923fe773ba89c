//! Config command implementation.
//!
//! Shows the effective configuration or writes a default file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use bopm_config::BopmConfig;

use crate::cli::OutputFormat;
use crate::commands::RunContext;
use crate::error::CliError;
use crate::output::{print_json, print_success, write_text};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write the default configuration
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Target file; prints to stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &RunContext) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init(init_args) => init(&init_args, ctx),
    }
}

fn show(ctx: &RunContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(&ctx.config)?,
        _ => print!("{}", ctx.config.to_toml_string()?),
    }
    Ok(())
}

fn init(args: &InitArgs, ctx: &RunContext) -> Result<()> {
    let text = BopmConfig::default().to_toml_string()?;

    if let Some(path) = &args.output {
        if path.exists() && !args.force {
            return Err(CliError::FileExists(path.clone()).into());
        }
    }
    write_text(args.output.as_deref(), &text)?;

    if let Some(path) = &args.output {
        if !ctx.quiet {
            print_success(&format!("Wrote default configuration to {}", path.display()));
        }
    }
    Ok(())
}
