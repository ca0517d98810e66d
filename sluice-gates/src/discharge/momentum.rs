//! Momentum-corrected (Corps reference) sluice gate discharge.
//!
//! ```text
//!         Cd * b * G * sqrt(2 * g * (h - Cd*G))
//! Q = -------------------------------------------
//!               sqrt(1 - (Cd*G / h)^2)
//! ```
//!
//! with `Cd = 0.61`, `b = 15.91 m` and `g = 9.81 m/s²` by default.
//!
//! The numerator requires `h > Cd*G`. The denominator requires the
//! contraction ratio `Cd*G/h` to stay below one. For finite `h > Cd*G` the
//! rounded quotient is at most `1 - 2^-53`, so the ratio check never fires
//! after the first guard; it is kept as a defensive check only.

use num_traits::Zero;
use uom::si::{
    f64::{Length, Ratio, Velocity, VolumeRate},
    ratio::ratio,
};

use super::types::{Discharge, DischargeFormula, DomainViolation, FormulaParams};

/// Default discharge coefficient of the momentum formula.
pub const DEFAULT_COEFFICIENT: f64 = 0.61;

/// Momentum-corrected discharge formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumFormula {
    params: FormulaParams,
}

impl MomentumFormula {
    #[must_use]
    pub fn new(params: FormulaParams) -> Self {
        Self { params }
    }
}

impl Default for MomentumFormula {
    fn default() -> Self {
        Self::new(FormulaParams::with_coefficient(DEFAULT_COEFFICIENT))
    }
}

impl DischargeFormula for MomentumFormula {
    fn name(&self) -> &'static str {
        "Corps Ref"
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

        let cd = self.params.cd();
        let contraction: Length = cd * opening;
        if depth <= contraction {
            return Discharge::OutOfDomain(DomainViolation::DepthAtOrBelowContraction);
        }

        let contraction_ratio: Ratio = contraction / depth;
        let contraction_ratio = contraction_ratio.get::<ratio>();
        if contraction_ratio >= 1.0 {
            return Discharge::OutOfDomain(DomainViolation::ContractionRatioAtLeastOne);
        }

        let velocity: Velocity = (2.0 * self.params.gravity() * (depth - contraction)).sqrt();
        let numerator: VolumeRate = cd * self.params.gate_width() * opening * velocity;
        let denominator = (1.0 - contraction_ratio.powi(2)).sqrt();

        Discharge::from_rate(numerator / denominator)
    }
}
