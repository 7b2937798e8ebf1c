//! Spec fixtures shared by the end-to-end tests.

use gatewave_render::{PngConfig, RenderOptions};
use gatewave_spec::{ExperimentSpec, GateType, Pattern, SignalSpec};
use std::fs;
use std::path::{Path, PathBuf};

/// Sample count that keeps figures cheap while still showing every edge.
pub const FIXTURE_SAMPLES: usize = 400;

/// Default inputs with the given gate.
pub fn spec_for_gate(gate: impl Into<GateType>) -> ExperimentSpec {
    ExperimentSpec::builder()
        .sample_count(FIXTURE_SAMPLES)
        .gate(gate)
        .build()
}

/// One spec per recognized gate, in `GateType::KNOWN` order.
pub fn gate_matrix() -> Vec<ExperimentSpec> {
    GateType::KNOWN.into_iter().map(|g| spec_for_gate(g)).collect()
}

/// Two clocks at different rates, so every case output toggles.
pub fn two_clock_spec(gate: impl Into<GateType>) -> ExperimentSpec {
    ExperimentSpec::builder()
        .duration(8.0)
        .sample_count(FIXTURE_SAMPLES)
        .signal_a(SignalSpec::clock(2.0))
        .signal_c(SignalSpec::new(Pattern::ClockPulse, 0.5))
        .gate(gate)
        .build()
}

/// Low-resolution raster options for fast PNG tests.
pub fn fast_options() -> RenderOptions {
    RenderOptions {
        dpi: 36.0,
        png: PngConfig::fast(),
        ..RenderOptions::default()
    }
}

/// Writes `spec` as a JSON config file in `dir` and returns its path.
pub fn write_config(dir: &Path, name: &str, spec: &ExperimentSpec) -> PathBuf {
    let path = dir.join(name);
    let json = spec.to_json_pretty().expect("spec serializes");
    fs::write(&path, json).expect("Failed to write config file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewave_spec::validate_spec;

    #[test]
    fn test_fixtures_are_valid() {
        for spec in gate_matrix() {
            assert!(validate_spec(&spec).is_ok());
        }
        assert!(validate_spec(&two_clock_spec(GateType::Xor)).is_ok());
    }

    #[test]
    fn test_write_config_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let spec = two_clock_spec("NOR");
        let path = write_config(dir.path(), "two_clock.json", &spec);
        let text = fs::read_to_string(path).unwrap();
        assert_eq!(ExperimentSpec::from_json(&text).unwrap(), spec);
    }
}
