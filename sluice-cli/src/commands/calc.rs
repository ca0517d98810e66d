//! Evaluate both formulas for a single gate.

use anyhow::Result;
use clap::Args;
use sluice_gates::{Discharge, DischargeFormula, EnergyFormula, MomentumFormula};
use uom::si::{f64::Length, length::meter, volume_rate::cubic_meter_per_second};

#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Gate opening G [m]
    #[arg(short = 'g', long, default_value = "0.5")]
    pub opening: f64,

    /// Water depth above the sill h [m]
    #[arg(short = 'd', long, default_value = "1.0")]
    pub depth: f64,
}

pub fn execute(args: &CalcArgs) -> Result<()> {
    let opening = Length::new::<meter>(args.opening);
    let depth = Length::new::<meter>(args.depth);

    let energy = EnergyFormula::default();
    let momentum = MomentumFormula::default();

    println!("G = {:.3} m, h = {:.3} m", args.opening, args.depth);
    println!("{}", describe(&energy, energy.discharge(opening, depth)));
    println!("{}", describe(&momentum, momentum.discharge(opening, depth)));
    Ok(())
}

fn describe(formula: &impl DischargeFormula, discharge: Discharge) -> String {
    let rate = discharge.rate().get::<cubic_meter_per_second>();
    match discharge.violation() {
        None => format!("{} Flowrate (m³/s): {rate:.3}", formula.name()),
        Some(violation) => format!(
            "{} Flowrate (m³/s): {rate:.3} (out of domain: {violation:?})",
            formula.name()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_flows_with_three_decimals() {
        let formula = EnergyFormula::default();
        let line = describe(
            &formula,
            formula.discharge(Length::new::<meter>(0.5), Length::new::<meter>(1.0)),
        );
        assert_eq!(line, "V.T. Chow Flowrate (m³/s): 20.437");
    }

    #[test]
    fn marks_out_of_domain_results() {
        let formula = MomentumFormula::default();
        let line = describe(
            &formula,
            formula.discharge(Length::new::<meter>(0.0), Length::new::<meter>(1.0)),
        );
        assert!(line.starts_with("Corps Ref Flowrate (m³/s): 0.700"));
        assert!(line.contains("NonPositiveOpening"));
    }
}
