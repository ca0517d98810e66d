//! Open the chart window.

use anyhow::{Result, anyhow};
use clap::Args;
use sluice_plot::{ChartData, PlotApp};

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct PlotArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn execute(args: &PlotArgs) -> Result<()> {
    let config = args.config.load()?;
    let bank = config.gate_bank()?;
    let results = bank.evaluate(&config.bank_input()?);

    PlotApp::new(ChartData::new(&bank, &results))
        .run("Sluice Gate Flow Calculator")
        .map_err(|err| anyhow!("chart window failed: {err}"))
}
