//! Write a default configuration file.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use sluice_gates::RunConfig;
use tracing::info;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Output TOML file
    #[arg(short, long, default_value = "sluice.toml")]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists, pass --force to overwrite",
            args.output.display()
        );
    }

    let content = RunConfig::default().to_toml_string()?;
    std::fs::write(&args.output, content)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    info!(path = %args.output.display(), "wrote default config");
    Ok(())
}
