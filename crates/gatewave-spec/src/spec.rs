//! Main experiment spec type.

use serde::{Deserialize, Serialize};

use crate::gate::GateType;
use crate::pattern::SignalSpec;

/// Current spec version.
pub const SPEC_VERSION: u32 = 1;

/// Default signal duration in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 10.0;

/// Accepted duration range in seconds (inclusive).
pub const DURATION_RANGE: (f64, f64) = (5.0, 20.0);

/// Step of the interactive duration control.
pub const DURATION_STEP: f64 = 1.0;

/// Accepted frequency range in Hz (inclusive).
pub const FREQUENCY_RANGE: (f64, f64) = (0.5, 5.0);

/// Step of the interactive frequency control.
pub const FREQUENCY_STEP: f64 = 0.5;

/// Default number of time samples.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Accepted sample count range (inclusive).
pub const SAMPLE_COUNT_RANGE: (usize, usize) = (2, 20_000);

/// A complete configuration for one rendering pass.
///
/// Every field has a default, so `{}` is a valid spec describing the
/// stock experiment: 10 s, 1000 samples, A = 1 Hz clock, C = half duration
/// high, AND gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentSpec {
    /// Spec format version.
    #[serde(default = "default_spec_version")]
    pub spec_version: u32,
    /// Length of the simulated time window in seconds.
    #[serde(default = "default_duration")]
    pub duration_seconds: f64,
    /// Number of evenly spaced samples over `[0, duration_seconds]`.
    #[serde(default = "default_sample_count")]
    pub sample_count: usize,
    /// Input A.
    #[serde(default = "SignalSpec::default_a")]
    pub signal_a: SignalSpec,
    /// Input C.
    #[serde(default = "SignalSpec::default_c")]
    pub signal_c: SignalSpec,
    /// Gate under study.
    #[serde(default)]
    pub gate: GateType,
}

fn default_spec_version() -> u32 {
    SPEC_VERSION
}

fn default_duration() -> f64 {
    DEFAULT_DURATION_SECONDS
}

fn default_sample_count() -> usize {
    DEFAULT_SAMPLE_COUNT
}

impl Default for ExperimentSpec {
    fn default() -> Self {
        Self {
            spec_version: SPEC_VERSION,
            duration_seconds: DEFAULT_DURATION_SECONDS,
            sample_count: DEFAULT_SAMPLE_COUNT,
            signal_a: SignalSpec::default_a(),
            signal_c: SignalSpec::default_c(),
            gate: GateType::default(),
        }
    }
}

impl ExperimentSpec {
    /// Creates a new spec builder starting from the defaults.
    pub fn builder() -> ExperimentSpecBuilder {
        ExperimentSpecBuilder::new()
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the spec to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the spec to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the spec to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

/// Builder for [`ExperimentSpec`].
#[derive(Debug, Clone)]
pub struct ExperimentSpecBuilder {
    spec: ExperimentSpec,
}

impl ExperimentSpecBuilder {
    /// Creates a builder holding the default spec.
    pub fn new() -> Self {
        Self {
            spec: ExperimentSpec::default(),
        }
    }

    /// Sets the duration in seconds.
    pub fn duration(mut self, seconds: f64) -> Self {
        self.spec.duration_seconds = seconds;
        self
    }

    /// Sets the number of time samples.
    pub fn sample_count(mut self, count: usize) -> Self {
        self.spec.sample_count = count;
        self
    }

    /// Sets input A.
    pub fn signal_a(mut self, signal: SignalSpec) -> Self {
        self.spec.signal_a = signal;
        self
    }

    /// Sets input C.
    pub fn signal_c(mut self, signal: SignalSpec) -> Self {
        self.spec.signal_c = signal;
        self
    }

    /// Sets the gate type.
    pub fn gate(mut self, gate: impl Into<GateType>) -> Self {
        self.spec.gate = gate.into();
        self
    }

    /// Builds the spec.
    pub fn build(self) -> ExperimentSpec {
        self.spec
    }
}

impl Default for ExperimentSpecBuilder {
    fn default() -> Self {
        Self::new()
    }
}
