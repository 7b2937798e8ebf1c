//! Sampled time axis shared by every signal of a pass.

use serde::Serialize;

use crate::error::{SignalError, SignalResult};

/// Ordered time samples over `[0, duration]`.
///
/// Samples may be evenly or arbitrarily spaced but never decrease. The
/// axis is immutable once built; signals generated from it have exactly
/// one value per sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeAxis {
    samples: Vec<f64>,
    duration: f64,
}

impl TimeAxis {
    /// Builds `count` evenly spaced samples from 0 to `duration`, both ends
    /// included. A single sample sits at 0. Negative durations are rejected.
    pub fn linspace(duration: f64, count: usize) -> SignalResult<Self> {
        if count == 0 {
            return Err(SignalError::EmptyTimeAxis);
        }
        if !duration.is_finite() {
            return Err(SignalError::NonFiniteSample { index: count - 1 });
        }
        if duration < 0.0 {
            return Err(SignalError::NegativeDuration { duration });
        }

        let samples = if count == 1 {
            vec![0.0]
        } else {
            let step = duration / (count - 1) as f64;
            (0..count)
                .map(|i| if i == count - 1 { duration } else { i as f64 * step })
                .collect()
        };

        Ok(Self { samples, duration })
    }

    /// Wraps explicit sample times.
    pub fn from_samples(samples: Vec<f64>, duration: f64) -> SignalResult<Self> {
        if samples.is_empty() {
            return Err(SignalError::EmptyTimeAxis);
        }
        for (index, t) in samples.iter().enumerate() {
            if !t.is_finite() {
                return Err(SignalError::NonFiniteSample { index });
            }
        }
        if let Some(index) = (1..samples.len()).find(|&i| samples[i] < samples[i - 1]) {
            return Err(SignalError::NonMonotonic { index });
        }

        Ok(Self { samples, duration })
    }

    /// Configured duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Sample times.
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false for a constructed axis; kept for slice-like ergonomics.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Iterates over sample times.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}
