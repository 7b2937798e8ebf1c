//! Draws a [`Figure`] onto any [`Canvas`].

use crate::canvas::{Canvas, Point, Rect, StrokeStyle, TextAnchor, TextStyle};
use crate::color::{palette, Color};
use crate::figure::{Figure, Panel, X_LABEL, Y_RANGE, Y_TICKS};

/// Panel title font size.
pub const TITLE_SIZE: f64 = 14.0;
/// Tick label, axis label and legend font size.
pub const LABEL_SIZE: f64 = 10.0;
/// Outward tick mark length.
pub const TICK_LENGTH: f64 = 3.5;
/// Upper bound on x tick count.
pub const MAX_X_TICKS: usize = 9;

const TICK_PAD: f64 = 3.5;
const LEGEND_PAD: f64 = 6.0;
const LEGEND_INSET: f64 = 8.0;
const LEGEND_HANDLE: f64 = 20.0;
const LEGEND_ROW: f64 = 14.0;

/// Page margins and panel spacing, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    /// Gap between panels as a fraction of the panel height.
    pub hspace: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            left: 80.0,
            right: 30.0,
            top: 45.0,
            bottom: 55.0,
            hspace: 0.6,
        }
    }
}

impl Layout {
    /// Axes rectangles for `count` vertically stacked panels.
    pub fn panel_rects(&self, width: f64, height: f64, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        let n = count as f64;
        let avail = height - self.top - self.bottom;
        let panel_h = avail / (n + (n - 1.0) * self.hspace);
        let gap = panel_h * self.hspace;
        let panel_w = width - self.left - self.right;

        (0..count)
            .map(|i| {
                let y = self.top + i as f64 * (panel_h + gap);
                Rect::new(self.left, y, panel_w, panel_h)
            })
            .collect()
    }
}

/// Maps data coordinates into an axes rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axes {
    pub rect: Rect,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
}

impl Axes {
    pub fn map(&self, x: f64, y: f64) -> Point {
        let (x0, x1) = self.x_range;
        let (y0, y1) = self.y_range;
        Point::new(
            self.rect.x + (x - x0) / (x1 - x0) * self.rect.width,
            self.rect.y + (y1 - y) / (y1 - y0) * self.rect.height,
        )
    }
}

/// Round tick positions inside `[lo, hi]`, at most `max_ticks` of them.
///
/// Steps are 1, 2, 2.5 or 5 times a power of ten.
pub fn nice_ticks(lo: f64, hi: f64, max_ticks: usize) -> Vec<f64> {
    if !(hi > lo) || !lo.is_finite() || !hi.is_finite() || max_ticks == 0 {
        return Vec::new();
    }
    let base = 10f64.powf(((hi - lo) / max_ticks as f64).log10().floor());
    for mult in [1.0, 2.0, 2.5, 5.0, 10.0] {
        let step = base * mult;
        let first = (lo / step).ceil();
        let last = (hi / step).floor();
        let count = (last - first) as i64 + 1;
        if count <= max_ticks as i64 {
            return (0..count.max(0))
                .map(|k| (first + k as f64) * step + 0.0)
                .collect();
        }
    }
    Vec::new()
}

/// Tick label text: integers without decimals, otherwise up to two places.
pub fn format_tick(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').to_string()
    }
}

/// Draws the whole figure: white page, then each panel.
pub fn draw_figure<C: Canvas + ?Sized>(canvas: &mut C, figure: &Figure, layout: &Layout) {
    canvas.fill_rect(
        Rect::new(0.0, 0.0, figure.width, figure.height),
        palette::PAPER,
    );
    let rects = layout.panel_rects(figure.width, figure.height, figure.panels.len());
    for (panel, rect) in figure.panels.iter().zip(rects) {
        let axes = Axes {
            rect,
            x_range: figure.x_range,
            y_range: Y_RANGE,
        };
        draw_panel(canvas, panel, &figure.time, &axes);
    }
}

fn draw_panel<C: Canvas + ?Sized>(canvas: &mut C, panel: &Panel, time: &[f64], axes: &Axes) {
    let rect = axes.rect;
    let (x0, x1) = axes.x_range;
    let (y0, y1) = axes.y_range;
    let x_ticks = nice_ticks(x0, x1, MAX_X_TICKS);

    let grid = StrokeStyle::dotted(palette::GRID, 0.8).with_alpha(0.6);
    for &t in &x_ticks {
        canvas.stroke_polyline(&[axes.map(t, y1), axes.map(t, y0)], &grid);
    }

    // Fills sit underneath every line.
    for series in &panel.series {
        if let Some(fill) = series.fill {
            for (start, end) in series.high_spans(time) {
                let top_left = axes.map(start, 1.0);
                let bottom_right = axes.map(end, 0.0);
                canvas.fill_rect(
                    Rect::new(
                        top_left.x,
                        top_left.y,
                        bottom_right.x - top_left.x,
                        bottom_right.y - top_left.y,
                    ),
                    fill,
                );
            }
        }
    }
    for series in &panel.series {
        let points: Vec<Point> = series
            .vertices(time)
            .into_iter()
            .map(|(x, y)| axes.map(x, y))
            .collect();
        canvas.stroke_polyline(&points, &series.stroke);
    }

    let ink = StrokeStyle::solid(palette::INK, 0.8);
    canvas.stroke_rect(rect, &ink);

    let tick_label = TextStyle::new(LABEL_SIZE).anchored(TextAnchor::Middle);
    for &t in &x_ticks {
        let p = axes.map(t, y0);
        canvas.stroke_polyline(&[p, Point::new(p.x, p.y + TICK_LENGTH)], &ink);
        let label_y = rect.bottom() + TICK_LENGTH + TICK_PAD + LABEL_SIZE / 2.0;
        canvas.draw_text(Point::new(p.x, label_y), &format_tick(t), &tick_label);
    }

    let y_label = TextStyle::new(LABEL_SIZE).anchored(TextAnchor::End);
    for (value, label) in Y_TICKS {
        let p = axes.map(x0, value);
        canvas.stroke_polyline(&[Point::new(p.x - TICK_LENGTH, p.y), p], &ink);
        canvas.draw_text(
            Point::new(p.x - TICK_LENGTH - TICK_PAD, p.y),
            label,
            &y_label,
        );
    }

    let x_label_y = rect.bottom() + TICK_LENGTH + TICK_PAD + LABEL_SIZE + 6.0 + LABEL_SIZE / 2.0;
    canvas.draw_text(
        Point::new(rect.x + rect.width / 2.0, x_label_y),
        X_LABEL,
        &TextStyle::new(LABEL_SIZE).anchored(TextAnchor::Middle),
    );

    canvas.draw_text(
        Point::new(rect.x, rect.y - 6.0 - TITLE_SIZE / 2.0),
        &panel.title,
        &TextStyle::new(TITLE_SIZE).bold(),
    );

    draw_legend(canvas, panel, rect);
}

/// Legend box in the upper-right corner of `axes`.
pub fn legend_rect<C: Canvas + ?Sized>(canvas: &C, panel: &Panel, axes: Rect) -> Rect {
    let label_w = panel
        .series
        .iter()
        .map(|s| canvas.text_width(&s.label, LABEL_SIZE))
        .fold(0.0, f64::max);
    let width = LEGEND_PAD * 3.0 + LEGEND_HANDLE + label_w;
    let height = LEGEND_PAD * 2.0 + panel.series.len() as f64 * LEGEND_ROW;
    Rect::new(
        axes.right() - LEGEND_INSET - width,
        axes.y + LEGEND_INSET,
        width,
        height,
    )
}

fn draw_legend<C: Canvas + ?Sized>(canvas: &mut C, panel: &Panel, axes: Rect) {
    if panel.series.is_empty() {
        return;
    }
    let frame = legend_rect(canvas, panel, axes);
    canvas.fill_rect(frame, Color::white().with_alpha(0.8));
    canvas.stroke_rect(frame, &StrokeStyle::solid(palette::LEGEND_EDGE, 0.8));

    let label = TextStyle::new(LABEL_SIZE);
    for (i, series) in panel.series.iter().enumerate() {
        let y = frame.y + LEGEND_PAD + (i as f64 + 0.5) * LEGEND_ROW;
        let hx = frame.x + LEGEND_PAD;
        canvas.stroke_polyline(
            &[Point::new(hx, y), Point::new(hx + LEGEND_HANDLE, y)],
            &series.stroke,
        );
        canvas.draw_text(
            Point::new(hx + LEGEND_HANDLE + LEGEND_PAD, y),
            &series.label,
            &label,
        );
    }
}
