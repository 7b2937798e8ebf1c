//! Input signal pattern types.

use serde::{Deserialize, Serialize};

/// Default clock frequency in Hz.
pub const DEFAULT_FREQUENCY: f64 = 1.0;

/// Named waveform shapes an input signal can take.
///
/// Names that do not match a known pattern are kept verbatim in
/// [`Pattern::Unrecognized`] so that a spec round-trips unchanged; such a
/// pattern produces an all-LOW signal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Pattern {
    /// Square wave, HIGH wherever `sin(t * PI * frequency) > 0`.
    ClockPulse,
    /// Single HIGH pulse over the first half of the duration.
    HalfDurationHigh,
    /// HIGH at every sample.
    ConstantHigh,
    /// LOW at every sample.
    ConstantLow,
    /// Any other name.
    Unrecognized(String),
}

impl Pattern {
    /// All recognized patterns, in the order they are offered for input A.
    pub const KNOWN: [Pattern; 4] = [
        Pattern::ClockPulse,
        Pattern::HalfDurationHigh,
        Pattern::ConstantHigh,
        Pattern::ConstantLow,
    ];

    /// Parses a pattern name.
    ///
    /// Matching ignores case and treats spaces and hyphens as underscores,
    /// so `"Clock Pulse"`, `"clock-pulse"` and `"clock_pulse"` are the same.
    pub fn parse(name: &str) -> Self {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                c => c.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "clock_pulse" => Pattern::ClockPulse,
            "half_duration_high" => Pattern::HalfDurationHigh,
            "constant_high" => Pattern::ConstantHigh,
            "constant_low" => Pattern::ConstantLow,
            _ => Pattern::Unrecognized(name.to_string()),
        }
    }

    /// Returns the canonical snake_case name, or the raw name if unrecognized.
    pub fn as_str(&self) -> &str {
        match self {
            Pattern::ClockPulse => "clock_pulse",
            Pattern::HalfDurationHigh => "half_duration_high",
            Pattern::ConstantHigh => "constant_high",
            Pattern::ConstantLow => "constant_low",
            Pattern::Unrecognized(name) => name,
        }
    }

    /// Returns the human-facing label ("Clock Pulse", ...).
    pub fn label(&self) -> &str {
        match self {
            Pattern::ClockPulse => "Clock Pulse",
            Pattern::HalfDurationHigh => "Half Duration High",
            Pattern::ConstantHigh => "Constant High",
            Pattern::ConstantLow => "Constant Low",
            Pattern::Unrecognized(name) => name,
        }
    }

    /// Returns true for every variant except [`Pattern::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Pattern::Unrecognized(_))
    }

    /// Returns true if the frequency parameter affects this pattern.
    pub fn uses_frequency(&self) -> bool {
        matches!(self, Pattern::ClockPulse)
    }
}

impl From<String> for Pattern {
    fn from(value: String) -> Self {
        Pattern::parse(&value)
    }
}

impl From<&str> for Pattern {
    fn from(value: &str) -> Self {
        Pattern::parse(value)
    }
}

impl From<Pattern> for String {
    fn from(value: Pattern) -> Self {
        match value {
            Pattern::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One configured input signal: a pattern plus its frequency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SignalSpec {
    /// Waveform shape.
    pub pattern: Pattern,
    /// Frequency in Hz. Only meaningful for [`Pattern::ClockPulse`].
    #[serde(default = "default_frequency")]
    pub frequency: f64,
}

fn default_frequency() -> f64 {
    DEFAULT_FREQUENCY
}

impl SignalSpec {
    /// Creates a signal spec.
    pub fn new(pattern: impl Into<Pattern>, frequency: f64) -> Self {
        Self {
            pattern: pattern.into(),
            frequency,
        }
    }

    /// Creates a clock pulse at the given frequency.
    pub fn clock(frequency: f64) -> Self {
        Self::new(Pattern::ClockPulse, frequency)
    }

    /// Creates a non-clock pattern at the default frequency.
    pub fn shape(pattern: Pattern) -> Self {
        Self::new(pattern, DEFAULT_FREQUENCY)
    }

    /// Default configuration for input A (1 Hz clock pulse).
    pub fn default_a() -> Self {
        Self::clock(DEFAULT_FREQUENCY)
    }

    /// Default configuration for input C (half duration high).
    pub fn default_c() -> Self {
        Self::shape(Pattern::HalfDurationHigh)
    }
}
