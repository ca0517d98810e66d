//! Sluice gate discharge modeling.
//!
//! Two closed-form formulas estimate the flow through an underflow gate from
//! its opening and the upstream water depth above its sill:
//!
//! - [`discharge::EnergyFormula`]: `Q = Cd b G sqrt(2 g h)` (V.T. Chow).
//! - [`discharge::MomentumFormula`]: the contraction-corrected Corps reference
//!   formula.
//!
//! The [`bank::GateBank`] model evaluates both formulas across a fixed bank of
//! sixteen gates and reports per-gate deviations and run totals.

pub mod bank;
pub mod config;
pub mod discharge;
pub mod export;

pub use bank::{BankInput, BankResults, GateBank, GateId};
pub use config::{ConfigError, RunConfig};
pub use discharge::{Discharge, DischargeFormula, EnergyFormula, FormulaParams, MomentumFormula};
