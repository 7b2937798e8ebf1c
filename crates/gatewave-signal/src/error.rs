//! Error types for the signal backend.

use gatewave_spec::BackendError;
use thiserror::Error;

/// Result type for signal operations.
pub type SignalResult<T> = Result<T, SignalError>;

/// Errors that can occur while building time axes or combining signals.
///
/// Unknown pattern and gate names are not errors; they produce LOW output.
#[derive(Debug, Error, PartialEq)]
pub enum SignalError {
    /// A time axis needs at least one sample.
    #[error("time axis is empty")]
    EmptyTimeAxis,

    /// Time samples must be finite.
    #[error("time sample {index} is not finite")]
    NonFiniteSample {
        /// Index of the offending sample.
        index: usize,
    },

    /// Time samples must be non-decreasing.
    #[error("time axis decreases at sample {index}")]
    NonMonotonic {
        /// Index of the first sample smaller than its predecessor.
        index: usize,
    },

    /// An evenly spaced axis runs forward from 0.
    #[error("time axis duration {duration} is negative")]
    NegativeDuration {
        /// Requested duration in seconds.
        duration: f64,
    },

    /// Signals combined sample-by-sample must be aligned.
    #[error("signal length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// Length of the first signal.
        expected: usize,
        /// Length of the mismatched signal.
        found: usize,
    },

    /// Serialization of an analysis pass failed.
    #[error("serialization error: {0}")]
    Serialize(String),
}

impl BackendError for SignalError {
    fn code(&self) -> &'static str {
        match self {
            SignalError::EmptyTimeAxis => "SIGNAL_001",
            SignalError::NonFiniteSample { .. } => "SIGNAL_002",
            SignalError::NonMonotonic { .. } => "SIGNAL_003",
            SignalError::LengthMismatch { .. } => "SIGNAL_004",
            SignalError::Serialize(_) => "SIGNAL_005",
            SignalError::NegativeDuration { .. } => "SIGNAL_006",
        }
    }

    fn category(&self) -> &'static str {
        "signal"
    }
}

impl From<serde_json::Error> for SignalError {
    fn from(value: serde_json::Error) -> Self {
        SignalError::Serialize(value.to_string())
    }
}
