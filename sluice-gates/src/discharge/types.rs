use sluice_core::constraint::{Constrained, StrictlyPositive};
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Ratio, VolumeRate},
    length::meter,
    ratio::ratio,
    volume_rate::cubic_meter_per_second,
};

/// Flow rate reported for inputs outside a formula's valid domain, in m³/s.
///
/// This value is a marker, not a measurement.
pub const SENTINEL_FLOW: f64 = 0.7;

/// Default gate width shared by both formulas, in meters.
pub(crate) const DEFAULT_GATE_WIDTH_M: f64 = 15.91;

/// Default gravitational acceleration, in m/s².
pub(crate) const DEFAULT_GRAVITY: f64 = 9.81;

/// A single-gate discharge formula.
pub trait DischargeFormula {
    /// Short human-readable name used in tables, charts and logs.
    fn name(&self) -> &'static str;

    /// Returns the parameters the formula was configured with.
    fn params(&self) -> &FormulaParams;

    /// Evaluates the discharge for a gate `opening` and a water `depth` above the sill.
    ///
    /// Never fails: inputs outside the formula's domain yield
    /// [`Discharge::OutOfDomain`].
    fn discharge(&self, opening: Length, depth: Length) -> Discharge;
}

/// Outcome of evaluating a discharge formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discharge {
    /// A physically meaningful flow rate.
    Computed(VolumeRate),

    /// The inputs fell outside the formula's domain.
    ///
    /// [`Discharge::rate`] reports [`SENTINEL_FLOW`] for this variant.
    OutOfDomain(DomainViolation),
}

impl Discharge {
    /// Returns the flow rate, substituting the sentinel when out of domain.
    #[must_use]
    pub fn rate(&self) -> VolumeRate {
        match self {
            Self::Computed(rate) => *rate,
            Self::OutOfDomain(_) => VolumeRate::new::<cubic_meter_per_second>(SENTINEL_FLOW),
        }
    }

    /// Returns `true` if the flow rate was computed from the formula.
    #[must_use]
    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Returns the reason the inputs were rejected, if any.
    #[must_use]
    pub fn violation(&self) -> Option<DomainViolation> {
        match self {
            Self::Computed(_) => None,
            Self::OutOfDomain(violation) => Some(*violation),
        }
    }

    /// Wraps a raw rate, rejecting non-finite values.
    pub(crate) fn from_rate(rate: VolumeRate) -> Self {
        if rate.value.is_finite() {
            Self::Computed(rate)
        } else {
            Self::OutOfDomain(DomainViolation::NonFinite)
        }
    }
}

/// Why a formula rejected its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum DomainViolation {
    /// The gate opening is zero or negative.
    NonPositiveOpening,

    /// The water depth above the sill is zero or negative.
    NonPositiveDepth,

    /// The depth does not exceed the contracted jet height `Cd * G`.
    DepthAtOrBelowContraction,

    /// The contraction ratio `Cd * G / h` rounded to one or more.
    ContractionRatioAtLeastOne,

    /// The evaluated expression was not a finite number.
    NonFinite,
}

/// Physical parameters of a discharge formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaParams {
    discharge_coefficient: Ratio,
    gate_width: Length,
    gravity: Acceleration,
}

impl FormulaParams {
    /// Creates parameters from pre-validated positive values.
    #[must_use]
    pub fn new(
        discharge_coefficient: Constrained<Ratio, StrictlyPositive>,
        gate_width: Constrained<Length, StrictlyPositive>,
        gravity: Constrained<Acceleration, StrictlyPositive>,
    ) -> Self {
        Self {
            discharge_coefficient: discharge_coefficient.into_inner(),
            gate_width: gate_width.into_inner(),
            gravity: gravity.into_inner(),
        }
    }

    /// Default gate width and gravity with the given discharge coefficient.
    pub(crate) fn with_coefficient(discharge_coefficient: f64) -> Self {
        Self {
            discharge_coefficient: Ratio::new::<ratio>(discharge_coefficient),
            gate_width: Length::new::<meter>(DEFAULT_GATE_WIDTH_M),
            gravity: Acceleration::new::<meter_per_second_squared>(DEFAULT_GRAVITY),
        }
    }

    #[must_use]
    pub fn discharge_coefficient(&self) -> Ratio {
        self.discharge_coefficient
    }

    #[must_use]
    pub fn gate_width(&self) -> Length {
        self.gate_width
    }

    #[must_use]
    pub fn gravity(&self) -> Acceleration {
        self.gravity
    }

    /// Discharge coefficient as a plain number.
    pub(crate) fn cd(&self) -> f64 {
        self.discharge_coefficient.get::<ratio>()
    }
}
