//! Discharge formulas for a single sluice gate.
//!
//! Both formulas map a gate opening `G` and a water depth above the sill `h`
//! to a volumetric flow rate. Inputs outside a formula's physical domain do
//! not produce an error. They produce [`Discharge::OutOfDomain`], whose flow
//! rate is the fixed sentinel [`SENTINEL_FLOW`] of 0.7 m³/s.
//!
//! The sentinel is not a physical result. Callers that need to tell a real
//! flow apart from a rejected input should match on [`Discharge`] instead of
//! comparing flow rates.

pub(crate) mod energy;
pub(crate) mod momentum;
pub(crate) mod types;

pub use energy::EnergyFormula;
pub use momentum::MomentumFormula;
pub use types::{Discharge, DischargeFormula, DomainViolation, FormulaParams, SENTINEL_FLOW};
