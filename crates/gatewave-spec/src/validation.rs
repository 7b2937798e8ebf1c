//! Experiment spec validation.
//!
//! The signal pipeline itself never rejects input: unknown names fall back to
//! LOW output and numeric ranges are assumed. Range enforcement lives here,
//! at the interface boundary, so callers can refuse a pass before running it.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::pattern::SignalSpec;
use crate::spec::{
    ExperimentSpec, DURATION_RANGE, DURATION_STEP, FREQUENCY_RANGE, FREQUENCY_STEP,
    SAMPLE_COUNT_RANGE, SPEC_VERSION,
};

const STEP_TOLERANCE: f64 = 1e-9;

/// Validates a spec and returns a validation result.
///
/// # Example
/// ```
/// use gatewave_spec::{validate_spec, ExperimentSpec};
///
/// let result = validate_spec(&ExperimentSpec::default());
/// assert!(result.is_ok());
/// assert!(result.warnings.is_empty());
/// ```
pub fn validate_spec(spec: &ExperimentSpec) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_spec_version(spec, &mut result);
    validate_duration(spec, &mut result);
    validate_sample_count(spec, &mut result);
    validate_signal(&spec.signal_a, "signal_a", &mut result);
    validate_signal(&spec.signal_c, "signal_c", &mut result);

    if !spec.gate.is_recognized() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnrecognizedGate,
            format!(
                "unrecognized gate '{}'; the output will be LOW at every sample",
                spec.gate
            ),
            "gate",
        ));
    }

    result
}

fn validate_spec_version(spec: &ExperimentSpec, result: &mut ValidationResult) {
    if spec.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, spec.spec_version
            ),
            "spec_version",
        ));
    }
}

fn validate_duration(spec: &ExperimentSpec, result: &mut ValidationResult) {
    let duration = spec.duration_seconds;
    let (min, max) = DURATION_RANGE;
    if !duration.is_finite() || duration < min || duration > max {
        result.add_error(ValidationError::with_path(
            ErrorCode::DurationOutOfRange,
            format!(
                "duration_seconds must be within [{}, {}], got {}",
                min, max, duration
            ),
            "duration_seconds",
        ));
    } else if !is_on_step(duration, DURATION_STEP) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OffStepDuration,
            format!(
                "duration_seconds {} is not a multiple of {} s",
                duration, DURATION_STEP
            ),
            "duration_seconds",
        ));
    }
}

fn validate_sample_count(spec: &ExperimentSpec, result: &mut ValidationResult) {
    let (min, max) = SAMPLE_COUNT_RANGE;
    if spec.sample_count < min || spec.sample_count > max {
        result.add_error(ValidationError::with_path(
            ErrorCode::SampleCountOutOfRange,
            format!(
                "sample_count must be within [{}, {}], got {}",
                min, max, spec.sample_count
            ),
            "sample_count",
        ));
    }
}

fn validate_signal(signal: &SignalSpec, path: &str, result: &mut ValidationResult) {
    if !signal.pattern.is_recognized() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnrecognizedPattern,
            format!(
                "unrecognized pattern '{}'; the signal will be LOW at every sample",
                signal.pattern
            ),
            format!("{}.pattern", path),
        ));
    }

    let frequency = signal.frequency;
    let (min, max) = FREQUENCY_RANGE;
    let frequency_path = format!("{}.frequency", path);
    if !frequency.is_finite() || frequency < min || frequency > max {
        result.add_error(ValidationError::with_path(
            ErrorCode::FrequencyOutOfRange,
            format!(
                "frequency must be within [{}, {}] Hz, got {}",
                min, max, frequency
            ),
            frequency_path,
        ));
        return;
    }

    if !is_on_step(frequency, FREQUENCY_STEP) {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::OffStepFrequency,
            format!(
                "frequency {} Hz is not a multiple of {} Hz",
                frequency, FREQUENCY_STEP
            ),
            frequency_path.clone(),
        ));
    }

    if signal.pattern.is_recognized()
        && !signal.pattern.uses_frequency()
        && (frequency - crate::pattern::DEFAULT_FREQUENCY).abs() > STEP_TOLERANCE
    {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnusedFrequency,
            format!(
                "frequency {} Hz has no effect on pattern '{}'",
                frequency, signal.pattern
            ),
            frequency_path,
        ));
    }
}

fn is_on_step(value: f64, step: f64) -> bool {
    let steps = value / step;
    (steps - steps.round()).abs() < STEP_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateType;
    use crate::pattern::Pattern;

    fn error_codes(result: &ValidationResult) -> Vec<ErrorCode> {
        result.errors.iter().map(|e| e.code).collect()
    }

    fn warning_codes(result: &ValidationResult) -> Vec<WarningCode> {
        result.warnings.iter().map(|w| w.code).collect()
    }

    #[test]
    fn test_default_spec_is_valid() {
        let result = validate_spec(&ExperimentSpec::default());
        assert!(result.is_ok());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        let spec = ExperimentSpec::builder()
            .duration(20.0)
            .signal_a(SignalSpec::clock(0.5))
            .signal_c(SignalSpec::clock(5.0))
            .build();
        assert!(validate_spec(&spec).is_ok());

        let spec = ExperimentSpec::builder().duration(5.0).build();
        assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn test_duration_out_of_range() {
        for duration in [4.0, 21.0, f64::NAN, f64::INFINITY] {
            let spec = ExperimentSpec::builder().duration(duration).build();
            let result = validate_spec(&spec);
            assert_eq!(error_codes(&result), vec![ErrorCode::DurationOutOfRange]);
        }
    }

    #[test]
    fn test_frequency_out_of_range_reports_path() {
        let spec = ExperimentSpec::builder()
            .signal_c(SignalSpec::clock(0.0))
            .build();
        let result = validate_spec(&spec);
        assert_eq!(error_codes(&result), vec![ErrorCode::FrequencyOutOfRange]);
        assert_eq!(result.errors[0].path.as_deref(), Some("signal_c.frequency"));
    }

    #[test]
    fn test_sample_count_out_of_range() {
        let spec = ExperimentSpec::builder().sample_count(1).build();
        assert_eq!(
            error_codes(&validate_spec(&spec)),
            vec![ErrorCode::SampleCountOutOfRange]
        );
    }

    #[test]
    fn test_unsupported_version() {
        let mut spec = ExperimentSpec::default();
        spec.spec_version = 2;
        assert_eq!(
            error_codes(&validate_spec(&spec)),
            vec![ErrorCode::UnsupportedSpecVersion]
        );
    }

    #[test]
    fn test_unrecognized_names_are_warnings() {
        let spec = ExperimentSpec::builder()
            .signal_a(SignalSpec::new("triangle", 1.0))
            .gate("XNOR")
            .build();
        let result = validate_spec(&spec);
        assert!(result.is_ok());
        assert_eq!(
            warning_codes(&result),
            vec![WarningCode::UnrecognizedPattern, WarningCode::UnrecognizedGate]
        );
        assert_eq!(spec.gate, GateType::Unrecognized("XNOR".to_string()));
    }

    #[test]
    fn test_off_step_values_warn() {
        let spec = ExperimentSpec::builder()
            .duration(7.5)
            .signal_a(SignalSpec::clock(1.2))
            .build();
        let result = validate_spec(&spec);
        assert!(result.is_ok());
        assert_eq!(
            warning_codes(&result),
            vec![WarningCode::OffStepDuration, WarningCode::OffStepFrequency]
        );
    }

    #[test]
    fn test_frequency_on_non_clock_pattern_warns() {
        let spec = ExperimentSpec::builder()
            .signal_c(SignalSpec::new(Pattern::ConstantHigh, 3.0))
            .build();
        let result = validate_spec(&spec);
        assert_eq!(warning_codes(&result), vec![WarningCode::UnusedFrequency]);
    }
}
