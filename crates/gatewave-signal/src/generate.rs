//! Full analysis pass: spec in, waveforms, cases and truth table out.

use gatewave_spec::{ExperimentSpec, GateType};
use serde::Serialize;

use crate::cases::{build_cases, CaseResult};
use crate::describe::{case_notes, gate_description, CaseNote};
use crate::error::SignalResult;
use crate::generator::generate_signal;
use crate::signal::Signal;
use crate::time_axis::TimeAxis;
use crate::truth_table::TruthTable;

/// Everything computed for one rendering pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisPass {
    /// Gate under study.
    pub gate: GateType,
    /// Shared time axis.
    pub time: TimeAxis,
    /// Input A as generated.
    pub signal_a: Signal,
    /// Input C as generated.
    pub signal_c: Signal,
    /// Scenarios A, B and C.
    pub cases: [CaseResult; 3],
    /// Corner-point truth table of the gate.
    pub truth_table: TruthTable,
    /// One-line gate description.
    pub description: &'static str,
    /// Per-case notes.
    pub notes: Vec<CaseNote>,
    /// BLAKE3 digest of every waveform in the pass.
    pub waveform_hash: String,
}

/// Runs the pipeline for `spec`.
///
/// The spec is not range-checked here; callers that accept user input
/// should run `gatewave_spec::validate_spec` first.
pub fn generate(spec: &ExperimentSpec) -> SignalResult<AnalysisPass> {
    let time = TimeAxis::linspace(spec.duration_seconds, spec.sample_count)?;
    generate_on_axis(spec, time)
}

/// Runs the pipeline on an explicit time axis.
///
/// `spec.duration_seconds` and `spec.sample_count` are ignored in favor of
/// the axis.
pub fn generate_on_axis(spec: &ExperimentSpec, time: TimeAxis) -> SignalResult<AnalysisPass> {
    let signal_a = generate_signal(&time, &spec.signal_a);
    let signal_c = generate_signal(&time, &spec.signal_c);
    let cases = build_cases(&time, &signal_a, &signal_c, &spec.gate)?;
    let waveform_hash = hash_waveforms(&signal_a, &signal_c, &cases);

    Ok(AnalysisPass {
        gate: spec.gate.clone(),
        truth_table: TruthTable::new(&spec.gate),
        description: gate_description(&spec.gate),
        notes: case_notes(&spec.gate),
        time,
        signal_a,
        signal_c,
        cases,
        waveform_hash,
    })
}

impl AnalysisPass {
    /// Serializes the pass as JSON.
    pub fn to_json(&self, pretty: bool) -> SignalResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

fn hash_waveforms(signal_a: &Signal, signal_c: &Signal, cases: &[CaseResult; 3]) -> String {
    let mut hasher = blake3::Hasher::new();
    let mut feed = |signal: &Signal| {
        hasher.update(&(signal.len() as u64).to_le_bytes());
        let bytes: Vec<u8> = signal.iter().map(u8::from).collect();
        hasher.update(&bytes);
    };

    feed(signal_a);
    feed(signal_c);
    for case in cases {
        feed(&case.a);
        feed(&case.b);
        feed(&case.c);
        feed(&case.output);
    }
    hasher.finalize().to_hex().to_string()
}
