//! The three fixed analysis scenarios.
//!
//! Each case pins two of the three gate inputs so the remaining input's
//! effect on the output can be read directly off the waveform:
//!
//! | case | A | B | C |
//! |------|---|---|---|
//! | A | forced LOW | forced HIGH | generated |
//! | B | generated | forced HIGH | generated |
//! | C | generated | forced LOW | forced LOW |

use gatewave_spec::GateType;
use serde::Serialize;

use crate::error::SignalResult;
use crate::gate::evaluate;
use crate::signal::Signal;
use crate::time_axis::TimeAxis;

/// Identifies one of the three scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseKind {
    /// A = LOW, B = HIGH, C generated.
    A,
    /// A generated, B = HIGH, C generated.
    B,
    /// A generated, B = C = LOW.
    C,
}

impl CaseKind {
    /// Cases in presentation order.
    pub const ALL: [CaseKind; 3] = [CaseKind::A, CaseKind::B, CaseKind::C];

    /// Lowercase letter used as a panel prefix ("a", "b", "c").
    pub fn letter(&self) -> char {
        match self {
            CaseKind::A => 'a',
            CaseKind::B => 'b',
            CaseKind::C => 'c',
        }
    }

    /// Short statement of the forced inputs, e.g. `Input B & C = LOW`.
    pub fn condition(&self) -> &'static str {
        match self {
            CaseKind::A => "Input A = LOW",
            CaseKind::B => "Input B = HIGH",
            CaseKind::C => "Input B & C = LOW",
        }
    }
}

/// Inputs and output of one scenario.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseResult {
    /// Which scenario this is.
    pub kind: CaseKind,
    /// Input A as fed to the gate.
    pub a: Signal,
    /// Input B as fed to the gate.
    pub b: Signal,
    /// Input C as fed to the gate.
    pub c: Signal,
    /// Gate output.
    pub output: Signal,
}

impl CaseResult {
    /// Builds one scenario from the generated inputs.
    pub fn build(
        kind: CaseKind,
        time: &TimeAxis,
        signal_a: &Signal,
        signal_c: &Signal,
        gate: &GateType,
    ) -> SignalResult<Self> {
        signal_a.ensure_len(time.len())?;
        signal_c.ensure_len(time.len())?;

        let (a, b, c) = match kind {
            CaseKind::A => (
                Signal::low_like(time),
                Signal::high_like(time),
                signal_c.clone(),
            ),
            CaseKind::B => (signal_a.clone(), Signal::high_like(time), signal_c.clone()),
            CaseKind::C => (
                signal_a.clone(),
                Signal::low_like(time),
                Signal::low_like(time),
            ),
        };
        let output = evaluate(&a, &b, &c, gate)?;

        Ok(Self {
            kind,
            a,
            b,
            c,
            output,
        })
    }
}

/// Builds all three scenarios in order A, B, C.
pub fn build_cases(
    time: &TimeAxis,
    signal_a: &Signal,
    signal_c: &Signal,
    gate: &GateType,
) -> SignalResult<[CaseResult; 3]> {
    Ok([
        CaseResult::build(CaseKind::A, time, signal_a, signal_c, gate)?,
        CaseResult::build(CaseKind::B, time, signal_a, signal_c, gate)?,
        CaseResult::build(CaseKind::C, time, signal_a, signal_c, gate)?,
    ])
}
