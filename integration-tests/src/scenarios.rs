use sluice_gates::RunConfig;

/// A full config file as an operator would write it.
pub const OPERATING_CONFIG: &str = r#"
upstream_level = 181.2
openings = [0.5, 0.5, 0.5, 0.5, 0.3, 0.3, 0.3, 0.3, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0]

[sill]
gates_1_to_4 = 180.05
gates_5_to_8 = 179.75
gates_9_to_16 = 180.05

[formula]
gate_width = 15.91
gravity = 9.81
energy_discharge_coefficient = 0.58
momentum_discharge_coefficient = 0.61
"#;

/// Parses [`OPERATING_CONFIG`].
///
/// # Panics
///
/// Panics if the embedded config is invalid.
#[must_use]
pub fn operating_config() -> RunConfig {
    RunConfig::from_toml_str(OPERATING_CONFIG).expect("embedded config is valid")
}

/// Default config with every gate closed except the listed `(gate, opening)` pairs.
///
/// # Panics
///
/// Panics if a gate number is outside `1..=16`.
#[must_use]
pub fn config_with_openings(openings: &[(u8, f64)]) -> RunConfig {
    let mut config = RunConfig::default();
    for &(gate, opening) in openings {
        let id = sluice_gates::GateId::new(gate).expect("gate number in 1..=16");
        config.set_opening(id, opening);
    }
    config
}
