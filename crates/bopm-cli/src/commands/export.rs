//! Export command implementation.
//!
//! Writes the lattice workbook: `.xlsx` to a file, or the CSV grid to a file
//! or stdout.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Args, ValueEnum};

use bopm_render::SheetExport;

use crate::commands::{ContractArgs, RunContext};
use crate::error::CliError;
use crate::output::{print_success, write_text};

/// Sheet file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SheetFormat {
    /// Excel workbook with cell formats
    Xlsx,
    /// Plain CSV grid, columns A to D
    Csv,
}

impl SheetFormat {
    /// Picks the format from an explicit choice or the output extension.
    fn resolve(explicit: Option<Self>, output: Option<&Path>) -> Self {
        explicit.unwrap_or_else(|| {
            let is_xlsx = output
                .and_then(Path::extension)
                .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));
            if is_xlsx {
                Self::Xlsx
            } else {
                Self::Csv
            }
        })
    }
}

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub contract: ContractArgs,

    /// Write the sheet to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sheet format; defaults to xlsx for `.xlsx` files, csv otherwise
    #[arg(long, value_enum)]
    pub sheet: Option<SheetFormat>,
}

/// Execute the export command.
pub fn execute(args: ExportArgs, ctx: &RunContext) -> Result<()> {
    let output = args.output.as_deref();
    let format = SheetFormat::resolve(args.sheet, output);
    let pricing = args.contract.price(ctx)?;
    let sheet = SheetExport::new(&pricing);

    match (format, output) {
        (SheetFormat::Xlsx, Some(path)) => sheet.save_xlsx(path)?,
        (SheetFormat::Xlsx, None) => return Err(CliError::BinaryToStdout.into()),
        (SheetFormat::Csv, _) => write_text(output, &sheet.to_csv_string()?)?,
    }

    if let Some(path) = output {
        if !ctx.quiet {
            print_success(&format!("Exported lattice sheet to {}", path.display()));
        }
    }

    Ok(())
}
