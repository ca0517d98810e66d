//! The sixteen-gate bank.
//!
//! Gates 1–8 belong to the Canadian group and gates 9–16 to the American
//! group. Sill elevations come from three sources: one shared by gates 1–4,
//! one by gates 5–8, and one by gates 9–16. Every gate sees the same upstream
//! water level.
//!
//! [`GateBank`] evaluates both discharge formulas for every gate and returns
//! results in gate order together with run totals.

mod aggregate;
mod input;
mod layout;
mod types;

pub use aggregate::{GateBank, percent_deviation};
pub use input::{BankInput, InputError, SillElevations};
pub use layout::{GATE_COUNT, GateGroup, GateId, SillSource};
pub use types::{BankResults, FlowResult, GateResult, GateSpec, RunSummary};
