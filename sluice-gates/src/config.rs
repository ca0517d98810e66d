//! Run configuration.
//!
//! A [`RunConfig`] holds everything needed for one run of the gate bank:
//! the upstream level, the three sill elevations, sixteen gate openings and
//! the formula parameters. It is read from and written to TOML, and every
//! field has a default so a partial file is valid.
//!
//! ```toml
//! upstream_level = 181.2
//! openings = [0.5, 0.5, 0.5, 0.5, 0.3, 0.3, 0.3, 0.3, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]
//!
//! [sill]
//! gates_1_to_4 = 180.05
//! gates_5_to_8 = 179.75
//! gates_9_to_16 = 180.05
//!
//! [formula]
//! gate_width = 15.91
//! gravity = 9.81
//! energy_discharge_coefficient = 0.58
//! momentum_discharge_coefficient = 0.61
//! ```
//!
//! Lengths are in meters and gravity is in m/s².

use std::path::{Path, PathBuf};

use num_traits::Zero;
use serde::{Deserialize, Serialize};
use sluice_core::constraint::{Constrained, ConstraintError, StrictlyPositive};
use thiserror::Error;
use tracing::warn;
use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{Acceleration, Length, Ratio},
    length::meter,
    ratio::ratio,
};

use crate::{
    bank::{BankInput, GATE_COUNT, GateBank, GateId, InputError, SillElevations},
    discharge::{EnergyFormula, FormulaParams, MomentumFormula, energy, momentum, types},
};

/// Gravity values further than this from standard gravity trigger a warning, in m/s².
const GRAVITY_WARN_DELTA: f64 = 1.0;

/// Configuration for one run of the gate bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Upstream surface water profile (SWP) level, in meters.
    pub upstream_level: f64,

    /// Gate openings in gate order, in meters.
    pub openings: Vec<f64>,

    pub sill: SillConfig,

    pub formula: FormulaConfig,
}

/// Sill elevations of the three gate partitions, in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SillConfig {
    pub gates_1_to_4: f64,
    pub gates_5_to_8: f64,
    pub gates_9_to_16: f64,
}

/// Parameters of the two discharge formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormulaConfig {
    /// Gate width, in meters.
    pub gate_width: f64,

    /// Gravitational acceleration, in m/s².
    pub gravity: f64,

    pub energy_discharge_coefficient: f64,

    pub momentum_discharge_coefficient: f64,
}

/// Errors that may occur when loading or applying a [`RunConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config file `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),

    #[error("expected {expected} gate openings, found {found}")]
    OpeningCount { expected: usize, found: usize },

    #[error("invalid `{name}` = {value}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid bank input")]
    Input(#[from] InputError),
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            upstream_level: 181.20,
            openings: vec![0.0; GATE_COUNT],
            sill: SillConfig::default(),
            formula: FormulaConfig::default(),
        }
    }
}

impl Default for SillConfig {
    fn default() -> Self {
        Self {
            gates_1_to_4: 180.05,
            gates_5_to_8: 179.75,
            gates_9_to_16: 180.05,
        }
    }
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            gate_width: types::DEFAULT_GATE_WIDTH_M,
            gravity: types::DEFAULT_GRAVITY,
            energy_discharge_coefficient: energy::DEFAULT_COEFFICIENT,
            momentum_discharge_coefficient: momentum::DEFAULT_COEFFICIENT,
        }
    }
}

impl RunConfig {
    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the file cannot be read, parsed, or validated.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses and validates a TOML config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the text cannot be parsed or validated.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Serializes the config as pretty TOML.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Checks that the config describes a valid run.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the opening count is wrong, an input is
    /// out of range, or a formula parameter is not strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gate_bank()?;
        self.bank_input()?;
        Ok(())
    }

    /// Sets the opening of one gate, in meters.
    ///
    /// Missing openings are filled with zero first.
    pub fn set_opening(&mut self, gate: GateId, opening: f64) {
        if self.openings.len() < GATE_COUNT {
            self.openings.resize(GATE_COUNT, 0.0);
        }
        self.openings[gate.index()] = opening;
    }

    /// Builds the validated bank input described by this config.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the opening count is wrong or any input is
    /// invalid.
    pub fn bank_input(&self) -> Result<BankInput, ConfigError> {
        let openings: [f64; GATE_COUNT] = self.openings.as_slice().try_into().map_err(|_| {
            ConfigError::OpeningCount {
                expected: GATE_COUNT,
                found: self.openings.len(),
            }
        })?;

        let sills = SillElevations {
            gates_1_to_4: Length::new::<meter>(self.sill.gates_1_to_4),
            gates_5_to_8: Length::new::<meter>(self.sill.gates_5_to_8),
            gates_9_to_16: Length::new::<meter>(self.sill.gates_9_to_16),
        };

        Ok(BankInput::new(
            Length::new::<meter>(self.upstream_level),
            sills,
            openings.map(Length::new::<meter>),
        )?)
    }

    /// Builds the gate bank with the configured formula parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParameter`] if a coefficient, the gate
    /// width, or gravity is not strictly positive.
    pub fn gate_bank(&self) -> Result<GateBank, ConfigError> {
        let formula = &self.formula;

        if (formula.gravity - types::DEFAULT_GRAVITY).abs() > GRAVITY_WARN_DELTA {
            warn!(
                gravity = formula.gravity,
                "gravity deviates strongly from standard gravity"
            );
        }

        let gate_width = positive(
            "formula.gate_width",
            formula.gate_width,
            Length::new::<meter>(formula.gate_width),
        )?;
        let gravity = positive(
            "formula.gravity",
            formula.gravity,
            Acceleration::new::<meter_per_second_squared>(formula.gravity),
        )?;

        let params = |name, cd: f64| -> Result<FormulaParams, ConfigError> {
            let cd = positive(name, cd, Ratio::new::<ratio>(cd))?;
            Ok(FormulaParams::new(cd, gate_width, gravity))
        };

        Ok(GateBank::new(
            EnergyFormula::new(params(
                "formula.energy_discharge_coefficient",
                formula.energy_discharge_coefficient,
            )?),
            MomentumFormula::new(params(
                "formula.momentum_discharge_coefficient",
                formula.momentum_discharge_coefficient,
            )?),
        ))
    }
}

/// Checks that a raw parameter is finite and its quantity strictly positive.
fn positive<T: PartialOrd + Zero>(
    name: &'static str,
    raw: f64,
    quantity: T,
) -> Result<Constrained<T, StrictlyPositive>, ConfigError> {
    if !raw.is_finite() {
        return Err(invalid(name, raw, ConstraintError::NotANumber));
    }
    StrictlyPositive::new(quantity).map_err(|source| invalid(name, raw, source))
}

fn invalid(name: &'static str, value: f64, source: ConstraintError) -> ConfigError {
    ConfigError::InvalidParameter {
        name,
        value,
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::volume_rate::cubic_meter_per_second;

    use crate::discharge::DischargeFormula;

    #[test]
    fn empty_file_uses_defaults() {
        let config = RunConfig::from_toml_str("").unwrap();
        assert_eq!(config, RunConfig::default());
        assert_eq!(config.openings.len(), 16);
    }

    #[test]
    fn partial_tables_keep_remaining_defaults() {
        let config = RunConfig::from_toml_str(
            "upstream_level = 182.0\n[formula]\nmomentum_discharge_coefficient = 0.6\n",
        )
        .unwrap();

        assert_relative_eq!(config.upstream_level, 182.0);
        assert_relative_eq!(config.formula.momentum_discharge_coefficient, 0.6);
        assert_relative_eq!(config.formula.energy_discharge_coefficient, 0.58);
        assert_relative_eq!(config.sill.gates_5_to_8, 179.75);
    }

    #[test]
    fn round_trips_through_toml() {
        let mut config = RunConfig::default();
        config.set_opening(GateId::ALL[3], 0.75);

        let text = config.to_toml_string().unwrap();
        assert_eq!(RunConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn wrong_opening_count_is_rejected() {
        let err = RunConfig::from_toml_str("openings = [0.5, 0.5]").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::OpeningCount {
                expected: 16,
                found: 2
            }
        ));
    }

    #[test]
    fn negative_opening_is_rejected() {
        let mut config = RunConfig::default();
        config.set_opening(GateId::ALL[10], -0.5);

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Input(InputError::InvalidOpening { .. }))
        ));
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        let mut config = RunConfig::default();
        config.formula.gate_width = 0.0;
        match config.validate().unwrap_err() {
            ConfigError::InvalidParameter { name, source, .. } => {
                assert_eq!(name, "formula.gate_width");
                assert_eq!(source, ConstraintError::Zero);
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let mut config = RunConfig::default();
        config.formula.energy_discharge_coefficient = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidParameter {
                name: "formula.energy_discharge_coefficient",
                ..
            })
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(matches!(
            RunConfig::from_toml_str("upstream_levle = 181.0"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn configured_bank_uses_parameters() {
        let mut config = RunConfig::default();
        config.formula.gate_width = 2.0 * 15.91;

        let bank = config.gate_bank().unwrap();
        let opening = Length::new::<meter>(0.5);
        let depth = Length::new::<meter>(1.0);

        assert_relative_eq!(
            bank.energy()
                .discharge(opening, depth)
                .rate()
                .get::<cubic_meter_per_second>(),
            2.0 * EnergyFormula::default()
                .discharge(opening, depth)
                .rate()
                .get::<cubic_meter_per_second>(),
            max_relative = 1e-12
        );
    }
}
