use std::convert::Infallible;

use num_traits::Zero;
use sluice_core::Model;
use tracing::debug;
use uom::si::{
    f64::{Length, Ratio, VolumeRate},
    length::meter,
    volume_rate::cubic_meter_per_second,
};

use crate::discharge::{Discharge, DischargeFormula, EnergyFormula, MomentumFormula};

use super::{
    input::BankInput,
    layout::GateId,
    types::{BankResults, FlowResult, GateResult, GateSpec, RunSummary},
};

/// Evaluates both discharge formulas across the sixteen-gate bank.
///
/// The bank holds no state between runs. Each call derives depths from the
/// given level and sills, evaluates every gate independently, and sums the
/// flows in gate order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GateBank {
    energy: EnergyFormula,
    momentum: MomentumFormula,
}

impl GateBank {
    #[must_use]
    pub fn new(energy: EnergyFormula, momentum: MomentumFormula) -> Self {
        Self { energy, momentum }
    }

    #[must_use]
    pub fn energy(&self) -> &EnergyFormula {
        &self.energy
    }

    #[must_use]
    pub fn momentum(&self) -> &MomentumFormula {
        &self.momentum
    }

    /// Evaluates every gate of the bank.
    #[must_use]
    pub fn evaluate(&self, input: &BankInput) -> BankResults {
        let gates = GateId::ALL.map(|id| self.evaluate_gate(id, input));

        let summary = RunSummary {
            total_energy: total(gates.iter().map(|gate| gate.flow.energy)),
            total_momentum: total(gates.iter().map(|gate| gate.flow.momentum)),
        };

        BankResults { gates, summary }
    }

    fn evaluate_gate(&self, id: GateId, input: &BankInput) -> GateResult {
        let sill = input.sills().for_gate(id);
        let opening = input.opening(id);
        let depth = water_depth(input.upstream_level(), sill);

        let energy = self.energy.discharge(opening, depth);
        let momentum = self.momentum.discharge(opening, depth);

        for (formula, discharge) in [
            (self.energy.name(), energy),
            (self.momentum.name(), momentum),
        ] {
            if let Some(violation) = discharge.violation() {
                debug!(
                    gate = id.get(),
                    formula,
                    ?violation,
                    "gate outside formula domain, reporting sentinel flow"
                );
            }
        }

        let percent_deviation = percent_deviation(energy.rate(), momentum.rate());

        debug!(
            gate = id.get(),
            opening_m = opening.get::<meter>(),
            depth_m = depth.get::<meter>(),
            energy_cms = energy.rate().get::<cubic_meter_per_second>(),
            momentum_cms = momentum.rate().get::<cubic_meter_per_second>(),
            "evaluated gate"
        );

        GateResult {
            spec: GateSpec { id, sill, opening },
            flow: FlowResult {
                depth,
                energy,
                momentum,
                percent_deviation,
            },
        }
    }
}

impl Model for GateBank {
    type Input = BankInput;
    type Output = BankResults;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.evaluate(input))
    }
}

/// Depth of water above a sill, never negative.
fn water_depth(level: Length, sill: Length) -> Length {
    let depth = level - sill;
    if depth > Length::zero() {
        depth
    } else {
        Length::zero()
    }
}

/// Absolute percent deviation of `flow` from `reference`.
///
/// Defined as zero when the reference flow is exactly zero.
#[must_use]
pub fn percent_deviation(flow: VolumeRate, reference: VolumeRate) -> Ratio {
    if reference == VolumeRate::zero() {
        return Ratio::zero();
    }

    let deviation: Ratio = (flow - reference) / reference;
    deviation.abs()
}

fn total(discharges: impl Iterator<Item = Discharge>) -> VolumeRate {
    discharges.fold(VolumeRate::zero(), |sum, discharge| sum + discharge.rate())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::ratio::{percent, ratio};

    use crate::bank::{GATE_COUNT, SillElevations};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn cms(value: f64) -> VolumeRate {
        VolumeRate::new::<cubic_meter_per_second>(value)
    }

    fn default_sills() -> SillElevations {
        SillElevations {
            gates_1_to_4: m(180.05),
            gates_5_to_8: m(179.75),
            gates_9_to_16: m(180.05),
        }
    }

    fn mixed_openings() -> [Length; GATE_COUNT] {
        std::array::from_fn(|index| match index {
            0..=3 => m(0.5),
            4..=7 => m(0.3),
            _ => m(1.0),
        })
    }

    fn run(level: f64, openings: [Length; GATE_COUNT]) -> BankResults {
        let input = BankInput::new(m(level), default_sills(), openings).unwrap();
        GateBank::default().evaluate(&input)
    }

    #[test]
    fn results_are_in_gate_order() {
        let results = run(181.2, mixed_openings());

        assert_eq!(results.gates.len(), 16);
        for (index, gate) in results.iter().enumerate() {
            assert_eq!(gate.spec.id.index(), index);
        }
    }

    #[test]
    fn depth_follows_sill_partition() {
        let results = run(181.2, mixed_openings());

        for gate in &results.gates[0..4] {
            assert_relative_eq!(gate.flow.depth.get::<meter>(), 1.15, epsilon = 1e-9);
            assert_eq!(gate.spec.sill, m(180.05));
        }
        for gate in &results.gates[4..8] {
            assert_relative_eq!(gate.flow.depth.get::<meter>(), 1.45, epsilon = 1e-9);
        }
        for gate in &results.gates[8..] {
            assert_relative_eq!(gate.flow.depth.get::<meter>(), 1.15, epsilon = 1e-9);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn level_below_sill_clamps_depth_and_returns_sentinels() {
        let results = run(179.0, mixed_openings());

        for gate in results.iter() {
            assert_eq!(gate.flow.depth, Length::zero());
            assert_eq!(gate.flow.energy.rate().get::<cubic_meter_per_second>(), 0.7);
            assert_eq!(gate.flow.momentum.rate().get::<cubic_meter_per_second>(), 0.7);
            assert_eq!(gate.flow.percent_deviation.get::<percent>(), 0.0);
        }
        assert_eq!(results.out_of_domain_count(), 16);
    }

    #[test]
    fn per_gate_flows_match_formulas() {
        let results = run(181.2, mixed_openings());
        let gate = results.gate(GateId::ALL[8]);

        assert_relative_eq!(
            gate.flow.energy.rate().get::<cubic_meter_per_second>(),
            43.832_535_670_99,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            gate.flow.momentum.rate().get::<cubic_meter_per_second>(),
            37.264_133_118_86,
            epsilon = 1e-6
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn totals_are_exact_sums_in_gate_order() {
        let results = run(181.2, mixed_openings());

        let mut energy = 0.0;
        let mut momentum = 0.0;
        for gate in results.iter() {
            energy += gate.flow.energy.rate().get::<cubic_meter_per_second>();
            momentum += gate.flow.momentum.rate().get::<cubic_meter_per_second>();
        }

        assert_eq!(
            results.summary.total_energy.get::<cubic_meter_per_second>(),
            energy
        );
        assert_eq!(
            results.summary.total_momentum.get::<cubic_meter_per_second>(),
            momentum
        );
        assert_relative_eq!(energy, 497.388, epsilon = 1e-3);
        assert_relative_eq!(momentum, 438.615, epsilon = 1e-3);
    }

    #[test]
    fn closed_gates_report_sentinel_totals() {
        let results = run(181.2, [m(0.0); GATE_COUNT]);

        assert_relative_eq!(
            results.summary.total_energy.get::<cubic_meter_per_second>(),
            16.0 * 0.7,
            epsilon = 1e-12
        );
        assert_eq!(results.out_of_domain_count(), 16);
    }

    #[test]
    fn percent_deviation_is_non_negative() {
        let results = run(181.2, mixed_openings());
        for gate in results.iter() {
            assert!(gate.flow.percent_deviation.get::<percent>() >= 0.0);
        }

        assert_relative_eq!(
            percent_deviation(cms(20.437_025_135_283), cms(18.815_435_056_953)).get::<percent>(),
            8.618_403_313,
            epsilon = 1e-6
        );
        assert_relative_eq!(
            percent_deviation(cms(9.0), cms(10.0)).get::<percent>(),
            10.0,
            epsilon = 1e-12
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn deviation_is_stored_as_the_exact_relative_difference() {
        let energy = EnergyFormula::default();
        let momentum = MomentumFormula::default();

        for g in 1..=40 {
            for h in 1..=40 {
                let opening = m(f64::from(g) * 0.05);
                let depth = m(f64::from(h) * 0.1);
                let a = energy.discharge(opening, depth).rate();
                let b = momentum.discharge(opening, depth).rate();

                let expected = ((a.value - b.value) / b.value).abs();
                assert_eq!(percent_deviation(a, b).get::<ratio>(), expected);
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_reference_flow_gives_zero_deviation() {
        assert_eq!(
            percent_deviation(cms(5.0), VolumeRate::zero()).get::<percent>(),
            0.0
        );
    }

    #[test]
    fn model_call_matches_evaluate() {
        let input = BankInput::new(m(181.2), default_sills(), mixed_openings()).unwrap();
        let bank = GateBank::default();

        assert_eq!(bank.call(&input).unwrap(), bank.evaluate(&input));
    }
}
