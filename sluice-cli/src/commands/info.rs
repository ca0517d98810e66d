//! Describe the formulas and their parameters.

use anyhow::Result;
use clap::Args;
use sluice_gates::{
    DischargeFormula, EnergyFormula, FormulaParams, MomentumFormula, discharge::SENTINEL_FLOW,
};
use uom::si::{acceleration::meter_per_second_squared, length::meter, ratio::ratio};

#[derive(Args, Debug)]
pub struct InfoArgs {}

pub fn execute(_args: &InfoArgs) -> Result<()> {
    let energy = EnergyFormula::default();
    let momentum = MomentumFormula::default();

    println!("1. {} formula", energy.name());
    println!("   Q = Cd * b * G * sqrt(2 * g * h)");
    print_params(energy.params());
    println!();

    println!("2. {} formula", momentum.name());
    println!("   Q = Cd * b * G * sqrt(2 * g * (h - Cd * G)) / sqrt(1 - (Cd * G / h)^2)");
    print_params(momentum.params());
    println!();

    println!("Parameters");
    println!("   SWP             upstream surface water profile level [m]");
    println!("   Sill elevation  height of the gate bottom [m]");
    println!("   Water depth h   SWP - sill, never below zero [m]");
    println!("   Gate opening G  distance between gate bottom and sill [m]");
    println!();
    println!("Gates 1-8 are Canadian gates, gates 9-16 are American gates.");
    println!(
        "Inputs outside a formula's valid range report a fixed {SENTINEL_FLOW} m³/s, \
         which is not a physical flow."
    );
    Ok(())
}

fn print_params(params: &FormulaParams) {
    println!(
        "   Cd = {}, b = {} m, g = {} m/s²",
        params.discharge_coefficient().get::<ratio>(),
        params.gate_width().get::<meter>(),
        params.gravity().get::<meter_per_second_squared>(),
    );
}
