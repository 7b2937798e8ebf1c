//! Three-input gate evaluation.

use gatewave_spec::GateType;

use crate::error::SignalResult;
use crate::signal::Signal;

/// Evaluates the gate on a single (A, B, C) triple.
///
/// Multi-input rules fold left over the two-input primitive. An
/// unrecognized gate is LOW for every input.
pub fn evaluate_bits(a: bool, b: bool, c: bool, gate: &GateType) -> bool {
    match gate {
        GateType::And => (a && b) && c,
        GateType::Or => (a || b) || c,
        GateType::Nand => !((a && b) && c),
        GateType::Nor => !((a || b) || c),
        GateType::Xor => (a ^ b) ^ c,
        GateType::Unrecognized(_) => false,
    }
}

/// Evaluates the gate on 0/1 integers; any non-zero input counts as HIGH.
pub fn evaluate_scalar(a: u8, b: u8, c: u8, gate: &GateType) -> u8 {
    u8::from(evaluate_bits(a != 0, b != 0, c != 0, gate))
}

/// Evaluates the gate sample-by-sample.
///
/// All three signals must have the same length; the output has that length
/// too.
pub fn evaluate(a: &Signal, b: &Signal, c: &Signal, gate: &GateType) -> SignalResult<Signal> {
    b.ensure_len(a.len())?;
    c.ensure_len(a.len())?;

    let levels = a
        .iter()
        .zip(b.iter())
        .zip(c.iter())
        .map(|((a, b), c)| evaluate_bits(a, b, c, gate))
        .collect();

    Ok(Signal::from_levels(levels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SignalError;

    const CORNERS: [(bool, bool, bool); 8] = [
        (false, false, false),
        (false, false, true),
        (false, true, false),
        (false, true, true),
        (true, false, false),
        (true, false, true),
        (true, true, false),
        (true, true, true),
    ];

    #[test]
    fn test_and_only_all_high() {
        for (a, b, c) in CORNERS {
            assert_eq!(evaluate_bits(a, b, c, &GateType::And), a && b && c);
        }
    }

    #[test]
    fn test_xor_is_odd_parity() {
        for (a, b, c) in CORNERS {
            let ones = [a, b, c].iter().filter(|&&x| x).count();
            assert_eq!(evaluate_bits(a, b, c, &GateType::Xor), ones % 2 == 1);
        }
    }

    #[test]
    fn test_inverted_gates_are_complements() {
        for (a, b, c) in CORNERS {
            assert_eq!(
                evaluate_bits(a, b, c, &GateType::Nand),
                !evaluate_bits(a, b, c, &GateType::And)
            );
            assert_eq!(
                evaluate_bits(a, b, c, &GateType::Nor),
                !evaluate_bits(a, b, c, &GateType::Or)
            );
        }
    }

    #[test]
    fn test_unrecognized_gate_is_low() {
        let gate = GateType::parse("IMPLY");
        for (a, b, c) in CORNERS {
            assert!(!evaluate_bits(a, b, c, &gate));
        }
    }

    #[test]
    fn test_scalar_form() {
        assert_eq!(evaluate_scalar(1, 0, 0, &GateType::Or), 1);
        assert_eq!(evaluate_scalar(0, 0, 0, &GateType::Nor), 1);
        assert_eq!(evaluate_scalar(1, 1, 0, &GateType::Xor), 0);
    }

    #[test]
    fn test_elementwise() {
        let a = Signal::from_levels(vec![false, true, true, true]);
        let b = Signal::from_levels(vec![true, true, false, true]);
        let c = Signal::from_levels(vec![true, true, true, false]);
        let out = evaluate(&a, &b, &c, &GateType::And).unwrap();
        assert_eq!(out.levels(), &[false, true, false, false]);
    }

    #[test]
    fn test_elementwise_length_mismatch() {
        let err = evaluate(
            &Signal::low(3),
            &Signal::low(3),
            &Signal::low(2),
            &GateType::Or,
        )
        .unwrap_err();
        assert_eq!(
            err,
            SignalError::LengthMismatch {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let a = Signal::from_levels(vec![false, true, false, true]);
        let b = Signal::high(4);
        let c = Signal::from_levels(vec![true, true, false, false]);
        for gate in GateType::KNOWN {
            let first = evaluate(&a, &b, &c, &gate).unwrap();
            let second = evaluate(&a, &b, &c, &gate).unwrap();
            assert_eq!(first, second);
        }
    }
}
