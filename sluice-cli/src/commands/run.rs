//! Compute the bank and print the results table.

use anyhow::Result;
use clap::Args;
use sluice_core::Model;
use sluice_gates::{
    BankResults, Discharge,
    bank::{GateResult, RunSummary},
};
use tracing::info;
use uom::si::{length::meter, ratio::percent, volume_rate::cubic_meter_per_second};

use super::ConfigArgs;

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
}

pub fn execute(args: &RunArgs) -> Result<()> {
    let config = args.config.load()?;
    let bank = config.gate_bank()?;
    let input = config.bank_input()?;

    let results = bank.call(&input)?;
    log_summary(&results);

    print!("{}", render_table(&results));
    Ok(())
}

fn log_summary(results: &BankResults) {
    let RunSummary {
        total_energy,
        total_momentum,
    } = results.summary;

    info!(
        total_energy_cms = total_energy.get::<cubic_meter_per_second>(),
        total_momentum_cms = total_momentum.get::<cubic_meter_per_second>(),
        out_of_domain = results.out_of_domain_count(),
        "bank evaluated"
    );
}

/// Renders the results table and totals with three decimals.
///
/// Flows that fell back to the sentinel value are marked with `*`.
pub(crate) fn render_table(results: &BankResults) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:>4}  {:<8}  {:>9}  {:>12}  {:>9}  {:>18}  {:>18}  {:>9}\n",
        "Gate",
        "Group",
        "Sill (m)",
        "Opening (m)",
        "Depth (m)",
        "V.T. Chow (m³/s)",
        "Corps Ref (m³/s)",
        "Error (%)",
    ));

    for gate in results.iter() {
        out.push_str(&render_row(gate));
    }

    out.push('\n');
    out.push_str(&format!(
        "Total Flow (V.T. Chow): {:.3} m³/s\n",
        results.summary.total_energy.get::<cubic_meter_per_second>()
    ));
    out.push_str(&format!(
        "Total Flow (Corps Ref): {:.3} m³/s\n",
        results.summary.total_momentum.get::<cubic_meter_per_second>()
    ));

    if results.out_of_domain_count() > 0 {
        out.push_str("* outside the formula's valid range, sentinel flow of 0.7 m³/s reported\n");
    }

    out
}

fn render_row(gate: &GateResult) -> String {
    let GateResult { spec, flow } = gate;
    format!(
        "{:>4}  {:<8}  {:>9.3}  {:>12.3}  {:>9.3}  {:>18}  {:>18}  {:>9.3}\n",
        spec.id.get(),
        spec.id.group().to_string(),
        spec.sill.get::<meter>(),
        spec.opening.get::<meter>(),
        flow.depth.get::<meter>(),
        flow_cell(flow.energy),
        flow_cell(flow.momentum),
        flow.percent_deviation.get::<percent>(),
    )
}

fn flow_cell(discharge: Discharge) -> String {
    let rate = discharge.rate().get::<cubic_meter_per_second>();
    if discharge.is_computed() {
        format!("{rate:.3}")
    } else {
        format!("*{rate:.3}")
    }
}
