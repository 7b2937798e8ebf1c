//! Fixed explanatory text: gate descriptions and per-case notes.

use gatewave_spec::GateType;
use serde::Serialize;

use crate::cases::CaseKind;

/// One-line description of a gate's behavior; empty for unknown gates.
pub fn gate_description(gate: &GateType) -> &'static str {
    match gate {
        GateType::And => "Output is HIGH (1) only when ALL three inputs are HIGH (1).",
        GateType::Or => "Output is HIGH (1) when AT LEAST ONE input is HIGH (1).",
        GateType::Nand => {
            "Output is LOW (0) only when ALL three inputs are HIGH (1). Inverse of AND."
        }
        GateType::Nor => "Output is HIGH (1) only when ALL three inputs are LOW (0). Inverse of OR.",
        GateType::Xor => "Output is HIGH (1) when an ODD number of inputs are HIGH (1).",
        GateType::Unrecognized(_) => "",
    }
}

/// Presentation tone of a case note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoteTone {
    /// Neutral information.
    Info,
    /// Positive/explanatory.
    Success,
    /// Caution.
    Warning,
}

/// Heading and explanatory sentence shown next to a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseNote {
    /// Case the note belongs to.
    pub kind: CaseKind,
    /// Tone used when presenting the note.
    pub tone: NoteTone,
    /// e.g. `Case A: Input A = LOW`.
    pub heading: String,
    /// Explanatory sentence.
    pub text: String,
}

/// Builds the note for one case.
pub fn case_note(kind: CaseKind, gate: &GateType) -> CaseNote {
    let heading = format!(
        "Case {}: {}",
        kind.letter().to_ascii_uppercase(),
        kind.condition()
    );

    let (tone, text) = match kind {
        CaseKind::A => {
            let text = if matches!(gate, GateType::Or | GateType::Nor) {
                format!(
                    "With {} gate and A=LOW, the output depends on inputs B and C.",
                    gate
                )
            } else {
                format!(
                    "With {} gate and A=LOW, observe how the output behaves based on the gate logic.",
                    gate
                )
            };
            (NoteTone::Info, text)
        }
        CaseKind::B => (
            NoteTone::Success,
            format!(
                "With {} gate and B=HIGH, the output is determined by the logic combination of A and C.",
                gate
            ),
        ),
        CaseKind::C => (
            NoteTone::Warning,
            format!(
                "With {} gate when both B and C are LOW, the output follows the gate's specific logic rules.",
                gate
            ),
        ),
    };

    CaseNote {
        kind,
        tone,
        heading,
        text,
    }
}

/// Notes for all three cases in order.
pub fn case_notes(gate: &GateType) -> Vec<CaseNote> {
    CaseKind::ALL.iter().map(|&k| case_note(k, gate)).collect()
}
