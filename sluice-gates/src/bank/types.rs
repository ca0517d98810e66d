use uom::si::f64::{Length, Ratio, VolumeRate};

use crate::discharge::Discharge;

use super::layout::{GATE_COUNT, GateId};

/// Identity and geometry of one gate for a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateSpec {
    pub id: GateId,
    pub sill: Length,
    pub opening: Length,
}

/// Flow evaluated for one gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowResult {
    /// Upstream level minus sill, clamped at zero.
    pub depth: Length,

    /// Energy-based (V.T. Chow) discharge.
    pub energy: Discharge,

    /// Momentum-corrected (Corps reference) discharge.
    pub momentum: Discharge,

    /// Absolute deviation of the energy flow from the momentum flow.
    pub percent_deviation: Ratio,
}

/// A gate together with its evaluated flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GateResult {
    pub spec: GateSpec,
    pub flow: FlowResult,
}

/// Totals across the whole bank.
///
/// Totals add the reported rate of every gate, sentinel flows included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub total_energy: VolumeRate,
    pub total_momentum: VolumeRate,
}

/// Output of a [`GateBank`](super::GateBank) run.
#[derive(Debug, Clone, PartialEq)]
pub struct BankResults {
    /// Per-gate results in gate order.
    pub gates: [GateResult; GATE_COUNT],
    pub summary: RunSummary,
}

impl BankResults {
    /// Returns the result for a single gate.
    #[must_use]
    pub fn gate(&self, id: GateId) -> &GateResult {
        &self.gates[id.index()]
    }

    /// Iterates over per-gate results in gate order.
    pub fn iter(&self) -> impl Iterator<Item = &GateResult> {
        self.gates.iter()
    }

    /// Number of gates where either formula fell back to the sentinel flow.
    #[must_use]
    pub fn out_of_domain_count(&self) -> usize {
        self.gates
            .iter()
            .filter(|gate| !gate.flow.energy.is_computed() || !gate.flow.momentum.is_computed())
            .count()
    }
}
