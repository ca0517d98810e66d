//! Subcommands and the configuration arguments they share.

pub mod calc;
pub mod export;
pub mod info;
pub mod init;
pub mod plot;
pub mod run;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use sluice_gates::{GateId, RunConfig};
use tracing::{debug, info};

/// Configuration file and command-line overrides.
#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Upstream water level (SWP) [m]
    #[arg(long)]
    pub level: Option<f64>,

    /// Sill elevation of gates 1-4 [m]
    #[arg(long = "sill-1-4")]
    pub sill_1_to_4: Option<f64>,

    /// Sill elevation of gates 5-8 [m]
    #[arg(long = "sill-5-8")]
    pub sill_5_to_8: Option<f64>,

    /// Sill elevation of gates 9-16 [m]
    #[arg(long = "sill-9-16")]
    pub sill_9_to_16: Option<f64>,

    /// Opening of one gate as GATE=METERS, e.g. `--opening 3=0.45` (repeatable)
    #[arg(long = "opening", value_parser = parse_opening)]
    pub openings: Vec<(GateId, f64)>,

    /// Same opening for every gate [m], applied before per-gate openings
    #[arg(long)]
    pub all_openings: Option<f64>,
}

impl ConfigArgs {
    /// Loads the configuration file, if any, and applies overrides.
    pub fn load(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                RunConfig::from_path(path)
                    .with_context(|| format!("failed to load {}", path.display()))?
            }
            None => RunConfig::default(),
        };

        if let Some(level) = self.level {
            config.upstream_level = level;
        }
        if let Some(sill) = self.sill_1_to_4 {
            config.sill.gates_1_to_4 = sill;
        }
        if let Some(sill) = self.sill_5_to_8 {
            config.sill.gates_5_to_8 = sill;
        }
        if let Some(sill) = self.sill_9_to_16 {
            config.sill.gates_9_to_16 = sill;
        }
        if let Some(opening) = self.all_openings {
            for id in GateId::ALL {
                config.set_opening(id, opening);
            }
        }
        for &(id, opening) in &self.openings {
            config.set_opening(id, opening);
        }

        config.validate().context("invalid configuration")?;
        debug!(?config, "resolved configuration");
        Ok(config)
    }
}

/// Parses a `GATE=METERS` opening override.
fn parse_opening(value: &str) -> Result<(GateId, f64), String> {
    let (gate, opening) = value
        .split_once('=')
        .ok_or_else(|| format!("expected GATE=METERS, got `{value}`"))?;

    let number: u8 = gate
        .trim()
        .parse()
        .map_err(|_| format!("invalid gate number `{gate}`"))?;
    let id = GateId::new(number).ok_or_else(|| format!("gate must be 1-16, got {number}"))?;

    let opening: f64 = opening
        .trim()
        .parse()
        .map_err(|_| format!("invalid opening `{opening}`"))?;

    Ok((id, opening))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_gate_opening_pairs() {
        let (id, opening) = parse_opening("12=0.45").unwrap();
        assert_eq!(id.get(), 12);
        assert!((opening - 0.45).abs() < f64::EPSILON);

        assert!(parse_opening("0=0.5").is_err());
        assert!(parse_opening("17=0.5").is_err());
        assert!(parse_opening("3").is_err());
        assert!(parse_opening("3=wide").is_err());
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let args = ConfigArgs {
            level: Some(181.5),
            all_openings: Some(0.25),
            openings: vec![(GateId::ALL[1], 0.6)],
            ..ConfigArgs::default()
        };

        let config = args.load().unwrap();
        assert!((config.upstream_level - 181.5).abs() < f64::EPSILON);
        assert!((config.openings[0] - 0.25).abs() < f64::EPSILON);
        assert!((config.openings[1] - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_override_is_rejected() {
        let args = ConfigArgs {
            openings: vec![(GateId::ALL[0], -1.0)],
            ..ConfigArgs::default()
        };
        assert!(args.load().is_err());
    }
}
