//! Energy-based (V.T. Chow) sluice gate discharge.
//!
//! ```text
//! Q = Cd * b * G * sqrt(2 * g * h)
//! ```
//!
//! with `Cd = 0.58`, `b = 15.91 m` and `g = 9.81 m/s²` by default.

use num_traits::Zero;
use uom::si::f64::{Length, Velocity, VolumeRate};

use super::types::{Discharge, DischargeFormula, DomainViolation, FormulaParams};

/// Default discharge coefficient of the energy formula.
pub const DEFAULT_COEFFICIENT: f64 = 0.58;

/// Energy-based discharge formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyFormula {
    params: FormulaParams,
}

impl EnergyFormula {
    #[must_use]
    pub fn new(params: FormulaParams) -> Self {
        Self { params }
    }
}

impl Default for EnergyFormula {
    fn default() -> Self {
        Self::new(FormulaParams::with_coefficient(DEFAULT_COEFFICIENT))
    }
}

impl DischargeFormula for EnergyFormula {
    fn name(&self) -> &'static str {
        "V.T. Chow"
    }

    fn params(&self) -> &FormulaParams {
        &self.params
    }

    fn discharge(&self, opening: Length, depth: Length) -> Discharge {
        if opening <= Length::zero() {
            return Discharge::OutOfDomain(DomainViolation::NonPositiveOpening);
        }
        if depth <= Length::zero() {
            return Discharge::OutOfDomain(DomainViolation::NonPositiveDepth);
        }

        let velocity: Velocity = (2.0 * self.params.gravity() * depth).sqrt();
        let rate: VolumeRate = self.params.cd() * self.params.gate_width() * opening * velocity;

        Discharge::from_rate(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{length::meter, volume_rate::cubic_meter_per_second};

    fn m(value: f64) -> Length {
        Length::new::<meter>(value)
    }

    fn flow(opening: f64, depth: f64) -> f64 {
        EnergyFormula::default()
            .discharge(m(opening), m(depth))
            .rate()
            .get::<cubic_meter_per_second>()
    }

    #[test]
    fn half_meter_opening_under_one_meter_depth() {
        // 0.58 * 15.91 * 0.5 * sqrt(2 * 9.81 * 1.0)
        assert_relative_eq!(flow(0.5, 1.0), 20.437, epsilon = 5e-4);
        assert_relative_eq!(
            flow(0.5, 1.0),
            0.58 * 15.91 * 0.5 * (2.0_f64 * 9.81).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn non_positive_inputs_return_sentinel() {
        for (opening, depth) in [(0.0, 1.0), (-0.2, 1.0), (0.5, 0.0), (0.5, -1.0), (0.0, 0.0)] {
            assert_eq!(flow(opening, depth), 0.7, "G={opening}, h={depth}");
        }
    }

    #[test]
    fn violation_names_the_offending_input() {
        let formula = EnergyFormula::default();
        assert_eq!(
            formula.discharge(m(0.0), m(1.0)).violation(),
            Some(DomainViolation::NonPositiveOpening)
        );
        assert_eq!(
            formula.discharge(m(0.5), m(0.0)).violation(),
            Some(DomainViolation::NonPositiveDepth)
        );
        assert!(formula.discharge(m(0.5), m(1.0)).is_computed());
    }

    #[test]
    fn strictly_increasing_in_opening_and_depth() {
        let steps: Vec<f64> = (1..=40).map(|i| f64::from(i) * 0.05).collect();

        for pair in steps.windows(2) {
            assert!(flow(pair[1], 1.2) > flow(pair[0], 1.2));
            assert!(flow(0.4, pair[1]) > flow(0.4, pair[0]));
        }
    }

    #[test]
    fn nan_inputs_do_not_escape() {
        let discharge = EnergyFormula::default().discharge(m(f64::NAN), m(1.0));
        assert_eq!(discharge.violation(), Some(DomainViolation::NonFinite));
    }
}
