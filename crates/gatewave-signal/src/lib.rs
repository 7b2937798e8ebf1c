//! gatewave Signal Engine
//!
//! Sampled digital waveforms and three-input gate evaluation. This crate
//! turns an [`ExperimentSpec`](gatewave_spec::ExperimentSpec) into an
//! [`AnalysisPass`]: the shared time axis, the generated A and C inputs, the
//! three fixed case scenarios, and the gate's truth table.
//!
//! # Determinism
//!
//! Generation is pure. The same spec always produces the same waveforms and
//! the same `waveform_hash`.
//!
//! # Crate Structure
//!
//! - [`time_axis`]: Evenly spaced sample instants
//! - [`signal`]: Binary waveform type
//! - [`generator`]: Pattern generators (clock pulse, half-duration, constant)
//! - [`gate`]: Gate evaluation on scalars and waveforms
//! - [`cases`]: The three fixed analysis scenarios
//! - [`truth_table`]: Eight-row truth table
//! - [`describe`]: Gate descriptions and case notes
//! - [`generate`]: Full pipeline

pub mod cases;
pub mod describe;
pub mod error;
pub mod gate;
pub mod generate;
pub mod generator;
pub mod signal;
pub mod time_axis;
pub mod truth_table;

pub use cases::{build_cases, CaseKind, CaseResult};
pub use describe::{case_note, case_notes, gate_description, CaseNote, NoteTone};
pub use error::{SignalError, SignalResult};
pub use gate::{evaluate, evaluate_bits, evaluate_scalar};
pub use generate::{generate, generate_on_axis, AnalysisPass};
pub use generator::{
    generate as generate_pattern, generate_signal, ClockPulse, Constant, HalfDurationHigh,
    LevelSource,
};
pub use signal::{Signal, WaveSummary, HIGH, LOW};
pub use time_axis::TimeAxis;
pub use truth_table::{corner_points, TruthRow, TruthTable, COLUMNS};
