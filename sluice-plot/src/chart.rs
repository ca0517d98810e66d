use sluice_gates::{BankResults, DischargeFormula, GateBank};
use uom::si::{length::meter, ratio::percent, volume_rate::cubic_meter_per_second};

/// Plot series derived from one bank run.
///
/// Each series holds `(gate number, value)` pairs in gate order where:
///
/// - Openings and depths are in m
/// - Flows are in m³/s
/// - Percent error is in %
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub openings: Vec<[f64; 2]>,
    pub depths: Vec<[f64; 2]>,
    pub energy_flow: Vec<[f64; 2]>,
    pub momentum_flow: Vec<[f64; 2]>,
    pub percent_error: Vec<[f64; 2]>,
    pub energy_name: String,
    pub momentum_name: String,
    pub total_energy: f64,
    pub total_momentum: f64,
}

impl ChartData {
    /// Collects chart series from the results of `bank`.
    #[must_use]
    pub fn new(bank: &GateBank, results: &BankResults) -> Self {
        let mut data = Self {
            energy_name: bank.energy().name().to_string(),
            momentum_name: bank.momentum().name().to_string(),
            total_energy: results
                .summary
                .total_energy
                .get::<cubic_meter_per_second>(),
            total_momentum: results
                .summary
                .total_momentum
                .get::<cubic_meter_per_second>(),
            ..Self::default()
        };

        for gate in results.iter() {
            let x = f64::from(gate.spec.id.get());

            data.openings.push([x, gate.spec.opening.get::<meter>()]);
            data.depths.push([x, gate.flow.depth.get::<meter>()]);
            data.energy_flow
                .push([x, gate.flow.energy.rate().get::<cubic_meter_per_second>()]);
            data.momentum_flow
                .push([x, gate.flow.momentum.rate().get::<cubic_meter_per_second>()]);
            data.percent_error
                .push([x, gate.flow.percent_deviation.get::<percent>()]);
        }

        data
    }
}
