//! Property-based validation tests for gatewave using proptest.
//!
//! These tests check that validation never panics, refuses every value
//! outside the configurable ranges, and that any spec it accepts can be
//! generated.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gatewave-tests --test proptest_validation
//! ```

use proptest::prelude::*;

use gatewave_signal::generate;
use gatewave_spec::{
    validate_spec, ErrorCode, ExperimentSpec, GateType, SignalSpec, WarningCode,
    DURATION_RANGE, FREQUENCY_RANGE, SAMPLE_COUNT_RANGE,
};

fn has_error(spec: &ExperimentSpec, code: ErrorCode) -> bool {
    validate_spec(spec).errors.iter().any(|e| e.code == code)
}

fn has_warning(spec: &ExperimentSpec, code: WarningCode) -> bool {
    validate_spec(spec).warnings.iter().any(|w| w.code == code)
}

/// A valid spec with clock inputs at the given frequencies.
fn clock_spec(duration: f64, samples: usize, fa: f64, fc: f64) -> ExperimentSpec {
    ExperimentSpec::builder()
        .duration(duration)
        .sample_count(samples)
        .signal_a(SignalSpec::clock(fa))
        .signal_c(SignalSpec::clock(fc))
        .build()
}

fn duration_outside_range() -> impl Strategy<Value = f64> {
    prop_oneof![-1.0e6f64..DURATION_RANGE.0, (DURATION_RANGE.1 + 1.0e-6)..1.0e6]
}

fn frequency_outside_range() -> impl Strategy<Value = f64> {
    prop_oneof![-100.0f64..FREQUENCY_RANGE.0, (FREQUENCY_RANGE.1 + 1.0e-6)..100.0]
}

fn sample_count_outside_range() -> impl Strategy<Value = usize> {
    prop_oneof![0usize..SAMPLE_COUNT_RANGE.0, (SAMPLE_COUNT_RANGE.1 + 1)..100_000]
}

// ============================================================================
// 1. Range Boundaries
// ============================================================================

proptest! {
    /// Arbitrary floats (NaN and infinities included) never panic.
    #[test]
    fn validation_never_panics(duration in any::<f64>(), fa in any::<f64>(), fc in any::<f64>()) {
        let result = validate_spec(&clock_spec(duration, 100, fa, fc));
        prop_assert_eq!(result.is_ok(), result.errors.is_empty());
    }

    /// In-range values never produce errors.
    #[test]
    fn in_range_specs_pass(
        duration in DURATION_RANGE.0..=DURATION_RANGE.1,
        samples in SAMPLE_COUNT_RANGE.0..=SAMPLE_COUNT_RANGE.1,
        fa in FREQUENCY_RANGE.0..=FREQUENCY_RANGE.1,
        fc in FREQUENCY_RANGE.0..=FREQUENCY_RANGE.1,
    ) {
        let result = validate_spec(&clock_spec(duration, samples, fa, fc));
        prop_assert!(result.is_ok(), "errors: {:?}", result.errors);
    }

    /// Durations outside the range are E002.
    #[test]
    fn out_of_range_duration_fails(duration in duration_outside_range()) {
        let spec = clock_spec(duration, 100, 1.0, 1.0);
        prop_assert!(has_error(&spec, ErrorCode::DurationOutOfRange), "duration {}", duration);
    }

    /// Frequencies outside the range are E003 on the right input.
    #[test]
    fn out_of_range_frequency_fails(f in frequency_outside_range()) {
        let result = validate_spec(&clock_spec(10.0, 100, 1.0, f));
        let paths: Vec<Option<&str>> = result
            .errors
            .iter()
            .filter(|e| e.code == ErrorCode::FrequencyOutOfRange)
            .map(|e| e.path.as_deref())
            .collect();
        prop_assert_eq!(paths, vec![Some("signal_c.frequency")]);
    }

    /// Sample counts outside the range are E004.
    #[test]
    fn out_of_range_sample_count_fails(samples in sample_count_outside_range()) {
        let spec = clock_spec(10.0, samples, 1.0, 1.0);
        prop_assert!(has_error(&spec, ErrorCode::SampleCountOutOfRange), "samples {}", samples);
    }
}

#[test]
fn test_range_endpoints_are_inclusive() {
    for duration in [DURATION_RANGE.0, DURATION_RANGE.1] {
        for f in [FREQUENCY_RANGE.0, FREQUENCY_RANGE.1] {
            for samples in [SAMPLE_COUNT_RANGE.0, SAMPLE_COUNT_RANGE.1] {
                let result = validate_spec(&clock_spec(duration, samples, f, f));
                assert!(result.is_ok(), "{} s, {} Hz, {} samples", duration, f, samples);
            }
        }
    }
}

// ============================================================================
// 2. Slider Steps and Names
// ============================================================================

proptest! {
    /// Whole seconds and half-hertz steps never warn about steps.
    #[test]
    fn on_step_values_do_not_warn(seconds in 5u32..=20, half_steps in 1u32..=10) {
        let f = f64::from(half_steps) * 0.5;
        let spec = clock_spec(f64::from(seconds), 100, f, f);
        prop_assert!(!has_warning(&spec, WarningCode::OffStepDuration));
        prop_assert!(!has_warning(&spec, WarningCode::OffStepFrequency));
    }

    /// Fractional durations between whole seconds warn but stay valid.
    #[test]
    fn off_step_duration_warns(seconds in 5u32..20, fraction in 0.01f64..0.99) {
        let spec = clock_spec(f64::from(seconds) + fraction, 100, 1.0, 1.0);
        prop_assert!(validate_spec(&spec).is_ok());
        prop_assert!(has_warning(&spec, WarningCode::OffStepDuration));
    }

    /// Unknown gate names only warn.
    #[test]
    fn unknown_gate_names_warn(name in "[A-Z]{6,10}") {
        let spec = ExperimentSpec::builder().gate(GateType::parse(&name)).build();
        let result = validate_spec(&spec);
        prop_assert!(result.is_ok());
        prop_assert!(result.warnings.iter().any(|w| w.code == WarningCode::UnrecognizedGate));
    }
}

// ============================================================================
// 3. Accepted Specs Generate
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Anything validation accepts produces a pass of the requested length.
    #[test]
    fn valid_specs_generate(
        duration in DURATION_RANGE.0..=DURATION_RANGE.1,
        samples in SAMPLE_COUNT_RANGE.0..=3000usize,
        fa in FREQUENCY_RANGE.0..=FREQUENCY_RANGE.1,
        fc in FREQUENCY_RANGE.0..=FREQUENCY_RANGE.1,
    ) {
        let spec = clock_spec(duration, samples, fa, fc);
        prop_assert!(validate_spec(&spec).is_ok());

        let pass = generate(&spec).unwrap();
        prop_assert_eq!(pass.time.len(), samples);
        for case in &pass.cases {
            prop_assert_eq!(case.output.len(), samples);
        }
    }
}
