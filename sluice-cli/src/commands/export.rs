//! Write the results table as CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sluice_gates::export::{DEFAULT_FILE_NAME, export_csv};

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct ExportArgs {
    #[command(flatten)]
    pub config: ConfigArgs,

    /// Output CSV file
    #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
    pub output: PathBuf,
}

pub fn execute(args: &ExportArgs) -> Result<()> {
    let config = args.config.load()?;
    let results = config.gate_bank()?.evaluate(&config.bank_input()?);

    export_csv(&results, &args.output)
        .with_context(|| format!("failed to export {}", args.output.display()))?;

    println!("Results written to {}", args.output.display());
    Ok(())
}
