//! Pattern-driven signal generation.
//!
//! Each pattern is a small [`LevelSource`] that decides the level at a
//! single instant; [`generate`] maps the configured pattern onto one and
//! samples it over the time axis.

use std::f64::consts::PI;

use gatewave_spec::{Pattern, SignalSpec};

use crate::signal::Signal;
use crate::time_axis::TimeAxis;

/// Something that yields a binary level at any time.
pub trait LevelSource {
    /// Level at time `t` in seconds.
    fn level_at(&self, t: f64) -> bool;

    /// Samples the source at every time of the axis.
    fn sample(&self, time: &TimeAxis) -> Signal {
        Signal::from_levels(time.iter().map(|t| self.level_at(t)).collect())
    }
}

/// Square wave with half-period `1 / frequency`.
///
/// HIGH where `sin(t * PI * frequency) > 0`. The comparison is strict, so
/// the zero crossings themselves (including `t = 0`) are LOW.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPulse {
    /// Frequency in Hz.
    pub frequency: f64,
}

impl LevelSource for ClockPulse {
    fn level_at(&self, t: f64) -> bool {
        (t * PI * self.frequency).sin() > 0.0
    }
}

/// HIGH for `t < duration / 2`, LOW afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HalfDurationHigh {
    /// Configured duration in seconds.
    pub duration: f64,
}

impl LevelSource for HalfDurationHigh {
    fn level_at(&self, t: f64) -> bool {
        t < self.duration / 2.0
    }
}

/// Fixed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    /// Level at every instant.
    pub high: bool,
}

impl LevelSource for Constant {
    fn level_at(&self, _t: f64) -> bool {
        self.high
    }

    fn sample(&self, time: &TimeAxis) -> Signal {
        Signal::constant(time.len(), self.high)
    }
}

/// Generates the waveform for `pattern` over `time`.
///
/// `frequency` only affects [`Pattern::ClockPulse`]; `duration` only affects
/// [`Pattern::HalfDurationHigh`]. An unrecognized pattern yields an all-LOW
/// signal. The result always has `time.len()` samples.
pub fn generate(time: &TimeAxis, pattern: &Pattern, frequency: f64, duration: f64) -> Signal {
    match pattern {
        Pattern::ClockPulse => ClockPulse { frequency }.sample(time),
        Pattern::HalfDurationHigh => HalfDurationHigh { duration }.sample(time),
        Pattern::ConstantHigh => Constant { high: true }.sample(time),
        Pattern::ConstantLow => Constant { high: false }.sample(time),
        Pattern::Unrecognized(_) => Constant { high: false }.sample(time),
    }
}

/// Generates a configured input using the axis' own duration.
pub fn generate_signal(time: &TimeAxis, spec: &SignalSpec) -> Signal {
    generate(time, &spec.pattern, spec.frequency, time.duration())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(samples: &[f64], duration: f64) -> TimeAxis {
        TimeAxis::from_samples(samples.to_vec(), duration).unwrap()
    }

    #[test]
    fn test_clock_pulse_boundary_is_low() {
        let time = axis(&[0.0, 0.5, 1.5], 10.0);
        let signal = generate(&time, &Pattern::ClockPulse, 1.0, 10.0);
        assert_eq!(signal.levels(), &[false, true, false]);
    }

    #[test]
    fn test_clock_pulse_half_period_follows_frequency() {
        let time = axis(&[0.25, 0.75, 1.25, 1.75], 10.0);
        let signal = generate(&time, &Pattern::ClockPulse, 2.0, 10.0);
        assert_eq!(signal.levels(), &[true, false, true, false]);
    }

    #[test]
    fn test_half_duration_high() {
        let time = axis(&[0.0, 4.0, 4.999, 5.0, 6.0, 10.0], 10.0);
        let signal = generate(&time, &Pattern::HalfDurationHigh, 3.0, 10.0);
        assert_eq!(signal.levels(), &[true, true, true, false, false, false]);
    }

    #[test]
    fn test_half_duration_zero_is_all_low() {
        let time = axis(&[0.0, 0.0], 0.0);
        let signal = generate(&time, &Pattern::HalfDurationHigh, 1.0, 0.0);
        assert_eq!(signal.uniform_level(), Some(false));
    }

    #[test]
    fn test_constants_ignore_frequency() {
        let time = TimeAxis::linspace(10.0, 50).unwrap();
        for frequency in [0.5, 1.0, 5.0] {
            let high = generate(&time, &Pattern::ConstantHigh, frequency, 10.0);
            let low = generate(&time, &Pattern::ConstantLow, frequency, 10.0);
            assert_eq!(high.uniform_level(), Some(true));
            assert_eq!(low.uniform_level(), Some(false));
        }
    }

    #[test]
    fn test_unrecognized_pattern_is_all_low() {
        let time = TimeAxis::linspace(10.0, 20).unwrap();
        let signal = generate(&time, &Pattern::parse("sawtooth"), 1.0, 10.0);
        assert_eq!(signal.len(), 20);
        assert_eq!(signal.uniform_level(), Some(false));
    }

    #[test]
    fn test_generate_signal_uses_axis_duration() {
        let time = TimeAxis::linspace(8.0, 9).unwrap();
        let signal = generate_signal(&time, &SignalSpec::shape(Pattern::HalfDurationHigh));
        assert_eq!(
            signal.levels(),
            &[true, true, true, true, false, false, false, false, false]
        );
    }
}
