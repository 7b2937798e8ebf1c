//! Binary waveform type.

use serde::{Serialize, Serializer};

use crate::error::{SignalError, SignalResult};
use crate::time_axis::TimeAxis;

/// LOW sample value.
pub const LOW: f64 = 0.0;
/// HIGH sample value.
pub const HIGH: f64 = 1.0;

/// A binary waveform aligned index-for-index with a [`TimeAxis`].
///
/// Levels are stored as booleans, so every numeric view is exactly
/// [`LOW`] or [`HIGH`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Signal {
    levels: Vec<bool>,
}

impl Signal {
    /// Wraps boolean levels.
    pub fn from_levels(levels: Vec<bool>) -> Self {
        Self { levels }
    }

    /// A signal holding one level at every sample.
    pub fn constant(len: usize, high: bool) -> Self {
        Self {
            levels: vec![high; len],
        }
    }

    /// All-LOW signal of the given length.
    pub fn low(len: usize) -> Self {
        Self::constant(len, false)
    }

    /// All-HIGH signal of the given length.
    pub fn high(len: usize) -> Self {
        Self::constant(len, true)
    }

    /// All-LOW signal aligned with `time`.
    pub fn low_like(time: &TimeAxis) -> Self {
        Self::low(time.len())
    }

    /// All-HIGH signal aligned with `time`.
    pub fn high_like(time: &TimeAxis) -> Self {
        Self::high(time.len())
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// True if the signal has no samples.
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Level at `index`, or `None` past the end.
    pub fn level(&self, index: usize) -> Option<bool> {
        self.levels.get(index).copied()
    }

    /// Numeric value at `index` (0.0 or 1.0), or `None` past the end.
    pub fn value(&self, index: usize) -> Option<f64> {
        self.level(index).map(level_value)
    }

    /// Boolean levels.
    pub fn levels(&self) -> &[bool] {
        &self.levels
    }

    /// Numeric samples (0.0 / 1.0).
    pub fn values(&self) -> Vec<f64> {
        self.levels.iter().copied().map(level_value).collect()
    }

    /// Iterates over boolean levels.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.levels.iter().copied()
    }

    /// Returns the level if every sample shares it.
    pub fn uniform_level(&self) -> Option<bool> {
        let first = *self.levels.first()?;
        self.levels.iter().all(|&l| l == first).then_some(first)
    }

    /// Fails unless the signal has exactly `expected` samples.
    pub fn ensure_len(&self, expected: usize) -> SignalResult<()> {
        if self.len() == expected {
            Ok(())
        } else {
            Err(SignalError::LengthMismatch {
                expected,
                found: self.len(),
            })
        }
    }

    /// Counts, duty ratio and edges of this waveform.
    pub fn summary(&self) -> WaveSummary {
        let high_samples = self.levels.iter().filter(|&&l| l).count();
        let rising_edges = self.levels.windows(2).filter(|w| !w[0] && w[1]).count();
        let falling_edges = self.levels.windows(2).filter(|w| w[0] && !w[1]).count();
        let duty_ratio = if self.levels.is_empty() {
            0.0
        } else {
            high_samples as f64 / self.levels.len() as f64
        };

        WaveSummary {
            samples: self.levels.len(),
            high_samples,
            duty_ratio,
            rising_edges,
            falling_edges,
        }
    }

    /// Maximal runs of HIGH samples as `(first_index, end_index)` pairs,
    /// `end_index` exclusive.
    pub fn high_runs(&self) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut start = None;
        for (i, &level) in self.levels.iter().enumerate() {
            match (level, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push((s, i));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.levels.len()));
        }
        runs
    }
}

fn level_value(level: bool) -> f64 {
    if level {
        HIGH
    } else {
        LOW
    }
}

impl Serialize for Signal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.levels.iter().copied().map(level_value))
    }
}

/// Aggregate description of a waveform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaveSummary {
    /// Total samples.
    pub samples: usize,
    /// Samples at HIGH.
    pub high_samples: usize,
    /// `high_samples / samples`, 0 for an empty signal.
    pub duty_ratio: f64,
    /// LOW -> HIGH transitions.
    pub rising_edges: usize,
    /// HIGH -> LOW transitions.
    pub falling_edges: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_are_exactly_binary() {
        let signal = Signal::from_levels(vec![false, true, true, false]);
        assert_eq!(signal.values(), vec![0.0, 1.0, 1.0, 0.0]);
    }

    #[test]
    fn test_uniform_level() {
        assert_eq!(Signal::high(4).uniform_level(), Some(true));
        assert_eq!(Signal::low(4).uniform_level(), Some(false));
        assert_eq!(Signal::from_levels(vec![true, false]).uniform_level(), None);
        assert_eq!(Signal::low(0).uniform_level(), None);
    }

    #[test]
    fn test_summary_counts_edges() {
        let signal = Signal::from_levels(vec![false, true, true, false, true, false]);
        let summary = signal.summary();
        assert_eq!(summary.samples, 6);
        assert_eq!(summary.high_samples, 3);
        assert_eq!(summary.rising_edges, 2);
        assert_eq!(summary.falling_edges, 2);
        assert!((summary.duty_ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_high_runs() {
        let signal = Signal::from_levels(vec![true, true, false, false, true]);
        assert_eq!(signal.high_runs(), vec![(0, 2), (4, 5)]);
        assert!(Signal::low(3).high_runs().is_empty());
    }

    #[test]
    fn test_serializes_as_numbers() {
        let json = serde_json::to_string(&Signal::from_levels(vec![false, true])).unwrap();
        assert_eq!(json, "[0.0,1.0]");
    }

    #[test]
    fn test_ensure_len() {
        assert!(Signal::low(3).ensure_len(3).is_ok());
        assert_eq!(
            Signal::low(3).ensure_len(4),
            Err(SignalError::LengthMismatch {
                expected: 4,
                found: 3
            })
        );
    }
}
