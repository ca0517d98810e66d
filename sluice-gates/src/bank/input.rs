use sluice_core::constraint::{ConstraintError, NonNegative};
use thiserror::Error;
use uom::si::f64::Length;

use super::layout::{GATE_COUNT, GateId, SillSource};

/// Sill elevations of the three gate partitions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SillElevations {
    pub gates_1_to_4: Length,
    pub gates_5_to_8: Length,
    pub gates_9_to_16: Length,
}

impl SillElevations {
    /// Returns the sill elevation a gate reads.
    #[must_use]
    pub fn for_gate(&self, id: GateId) -> Length {
        self.for_source(id.sill_source())
    }

    #[must_use]
    pub fn for_source(&self, source: SillSource) -> Length {
        match source {
            SillSource::Gates1To4 => self.gates_1_to_4,
            SillSource::Gates5To8 => self.gates_5_to_8,
            SillSource::Gates9To16 => self.gates_9_to_16,
        }
    }
}

/// Validated inputs for one run of the gate bank.
#[derive(Debug, Clone, PartialEq)]
pub struct BankInput {
    upstream_level: Length,
    sills: SillElevations,
    openings: [Length; GATE_COUNT],
}

/// Errors raised when bank inputs are invalid.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("upstream water level must be finite (got {level:?})")]
    NonFiniteLevel { level: Length },

    #[error("sill elevation for {source_group} must be finite (got {sill:?})")]
    NonFiniteSill {
        source_group: SillSource,
        sill: Length,
    },

    #[error("invalid opening for gate {gate} (got {opening:?})")]
    InvalidOpening {
        gate: GateId,
        opening: Length,
        #[source]
        source: ConstraintError,
    },
}

impl BankInput {
    /// Creates bank inputs.
    ///
    /// `openings` are ordered by gate identity, gate 1 first.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if the level or a sill is not finite, or if an
    /// opening is negative or not finite.
    pub fn new(
        upstream_level: Length,
        sills: SillElevations,
        openings: [Length; GATE_COUNT],
    ) -> Result<Self, InputError> {
        if !upstream_level.value.is_finite() {
            return Err(InputError::NonFiniteLevel {
                level: upstream_level,
            });
        }

        for source in [
            SillSource::Gates1To4,
            SillSource::Gates5To8,
            SillSource::Gates9To16,
        ] {
            let sill = sills.for_source(source);
            if !sill.value.is_finite() {
                return Err(InputError::NonFiniteSill {
                    source_group: source,
                    sill,
                });
            }
        }

        for id in GateId::ALL {
            let opening = openings[id.index()];
            let checked = if opening.value.is_finite() {
                NonNegative::new(opening).map(|_| ())
            } else {
                Err(ConstraintError::NotANumber)
            };
            checked.map_err(|source| InputError::InvalidOpening {
                gate: id,
                opening,
                source,
            })?;
        }

        Ok(Self {
            upstream_level,
            sills,
            openings,
        })
    }

    #[must_use]
    pub fn upstream_level(&self) -> Length {
        self.upstream_level
    }

    #[must_use]
    pub fn sills(&self) -> &SillElevations {
        &self.sills
    }

    /// Opening of a single gate.
    #[must_use]
    pub fn opening(&self, id: GateId) -> Length {
        self.openings[id.index()]
    }
}
