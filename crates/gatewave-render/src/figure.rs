//! Figure model: three stacked panels built from an analysis pass.
//!
//! The model holds data and styling only; [`crate::chart`] turns it into
//! drawing commands.

use gatewave_signal::{AnalysisPass, CaseKind, CaseResult, Signal};
use gatewave_spec::GateType;

use crate::canvas::{StrokeStyle, POINTS_PER_INCH};
use crate::color::{palette, Color};

/// Figure width in inches.
pub const FIGURE_WIDTH_IN: f64 = 12.0;
/// Figure height in inches.
pub const FIGURE_HEIGHT_IN: f64 = 14.0;
/// Vertical data range of every panel.
pub const Y_RANGE: (f64, f64) = (-0.5, 1.5);
/// Y ticks and their labels.
pub const Y_TICKS: [(f64, &str); 2] = [(0.0, "LOW (0)"), (1.0, "HIGH (1)")];
/// Shared x axis label.
pub const X_LABEL: &str = "Time (seconds)";
/// Fraction of the time span added on each side of the x range.
pub const X_MARGIN: f64 = 0.05;

const OUTPUT_LABEL: &str = "OUTPUT X (Result)";

/// How a series connects its samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesShape {
    /// Straight segments between consecutive samples.
    Line,
    /// Each level held until the next sample.
    StepPost,
}

/// One plotted waveform.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub label: String,
    pub signal: Signal,
    pub stroke: StrokeStyle,
    pub shape: SeriesShape,
    /// Fill between 0 and the waveform, if any.
    pub fill: Option<Color>,
}

impl Series {
    fn new(label: &str, signal: &Signal, stroke: StrokeStyle, shape: SeriesShape) -> Self {
        Self {
            label: label.to_string(),
            signal: signal.clone(),
            stroke,
            shape,
            fill: None,
        }
    }

    /// Polyline vertices in data space.
    ///
    /// Interior samples of constant runs are dropped; the drawn geometry is
    /// unchanged.
    pub fn vertices(&self, time: &[f64]) -> Vec<(f64, f64)> {
        let levels = self.signal.levels();
        let n = levels.len().min(time.len());
        if n == 0 {
            return Vec::new();
        }
        let value = |i: usize| if levels[i] { 1.0 } else { 0.0 };

        match self.shape {
            SeriesShape::Line => (0..n)
                .filter(|&i| {
                    i == 0 || i + 1 == n || levels[i] != levels[i - 1] || levels[i] != levels[i + 1]
                })
                .map(|i| (time[i], value(i)))
                .collect(),
            SeriesShape::StepPost => {
                let mut out = vec![(time[0], value(0))];
                for i in 1..n {
                    if levels[i] != levels[i - 1] {
                        out.push((time[i], value(i - 1)));
                        out.push((time[i], value(i)));
                    }
                }
                if n > 1 {
                    out.push((time[n - 1], value(n - 1)));
                }
                out
            }
        }
    }

    /// Time spans `(start, end)` where the post-step waveform is HIGH.
    pub fn high_spans(&self, time: &[f64]) -> Vec<(f64, f64)> {
        let Some(&last) = time.last() else {
            return Vec::new();
        };
        self.signal
            .high_runs()
            .into_iter()
            .filter(|&(start, _)| start < time.len())
            .map(|(start, end)| (time[start], time.get(end).copied().unwrap_or(last)))
            .collect()
    }
}

/// One axes box with its title and series.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    pub kind: CaseKind,
    pub title: String,
    pub series: Vec<Series>,
}

impl Panel {
    /// Builds the panel for one case.
    pub fn for_case(case: &CaseResult, gate: &GateType) -> Self {
        let output = StrokeStyle::solid(palette::GREEN, 3.0);
        let series = match case.kind {
            CaseKind::A => vec![
                Series::new(
                    "Input A (Forced LOW)",
                    &case.a,
                    StrokeStyle::dashed(palette::RED, 2.0),
                    SeriesShape::Line,
                ),
                Series::new(OUTPUT_LABEL, &case.output, output, SeriesShape::Line),
            ],
            CaseKind::B => vec![
                Series::new(
                    "Input A (Original)",
                    &case.a,
                    StrokeStyle::dotted(palette::BLUE, 2.0).with_alpha(0.7),
                    SeriesShape::Line,
                ),
                Series::new(
                    "Input C (Original)",
                    &case.c,
                    StrokeStyle::dashed(palette::ORANGE, 2.0).with_alpha(0.7),
                    SeriesShape::Line,
                ),
                Series {
                    fill: Some(palette::GREEN.with_alpha(0.2)),
                    ..Series::new(OUTPUT_LABEL, &case.output, output, SeriesShape::StepPost)
                },
            ],
            CaseKind::C => vec![
                Series::new(
                    "Input B & C (Forced LOW)",
                    &case.b,
                    StrokeStyle::dashed(palette::PURPLE, 2.0),
                    SeriesShape::Line,
                ),
                Series::new(
                    "Input A (Original)",
                    &case.a,
                    StrokeStyle::dotted(palette::BLUE, 1.5).with_alpha(0.5),
                    SeriesShape::Line,
                ),
                Series::new(OUTPUT_LABEL, &case.output, output, SeriesShape::Line),
            ],
        };

        Self {
            kind: case.kind,
            title: panel_title(case.kind, gate),
            series,
        }
    }
}

/// Bold panel heading, e.g. `a. Output When Input A = LOW (AND Gate)`.
pub fn panel_title(kind: CaseKind, gate: &GateType) -> String {
    format!(
        "{}. Output When {} ({} Gate)",
        kind.letter(),
        kind.condition(),
        gate
    )
}

/// The complete three-panel figure.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub gate: GateType,
    /// Page width in points.
    pub width: f64,
    /// Page height in points.
    pub height: f64,
    /// Shared sample times.
    pub time: Vec<f64>,
    /// Visible x range.
    pub x_range: (f64, f64),
    pub panels: Vec<Panel>,
}

impl Figure {
    /// Builds the figure for an analysis pass.
    pub fn from_pass(pass: &AnalysisPass) -> Self {
        let time = pass.time.samples().to_vec();
        Self {
            gate: pass.gate.clone(),
            width: FIGURE_WIDTH_IN * POINTS_PER_INCH,
            height: FIGURE_HEIGHT_IN * POINTS_PER_INCH,
            x_range: x_range(&time),
            time,
            panels: pass
                .cases
                .iter()
                .map(|case| Panel::for_case(case, &pass.gate))
                .collect(),
        }
    }

    /// Panel for a case, if present.
    pub fn panel(&self, kind: CaseKind) -> Option<&Panel> {
        self.panels.iter().find(|p| p.kind == kind)
    }
}

/// Data span padded by [`X_MARGIN`] on both sides.
fn x_range(time: &[f64]) -> (f64, f64) {
    let (lo, hi) = match (time.first(), time.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 1.0),
    };
    let span = hi - lo;
    if span > 0.0 {
        (lo - span * X_MARGIN, hi + span * X_MARGIN)
    } else {
        (lo - 0.5, lo + 0.5)
    }
}
