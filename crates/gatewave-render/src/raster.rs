//! Raster canvas: an RGBA pixel buffer with anti-aliased strokes and the
//! 5x7 bitmap font.

use crate::canvas::{
    anchored_left, Canvas, Point, Rect, StrokeStyle, TextStyle, CHAR_ADVANCE, POINTS_PER_INCH,
};
use crate::color::Color;
use crate::error::{RenderError, RenderResult};
use crate::font::{lit_pixels, ADVANCE_UNITS, GLYPH_HEIGHT};

/// Default export resolution.
pub const DEFAULT_DPI: f64 = 100.0;
/// Accepted DPI range.
pub const DPI_RANGE: (f64, f64) = (36.0, 600.0);

/// A 2D pixel buffer.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (RGBA, row-major).
    pub data: Vec<Color>,
}

impl PixelBuffer {
    /// Create a new buffer filled with a color.
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let idx = self.index(x, y);
        self.data[idx] = color;
    }

    /// Composites `color` over the pixel; out-of-bounds writes are dropped.
    #[inline]
    pub fn blend(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = self.index(x as u32, y as u32);
        self.data[idx] = color.over(&self.data[idx]);
    }

    /// Convert to 8-bit RGBA bytes.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 4);
        for color in &self.data {
            bytes.extend_from_slice(&color.to_rgba8());
        }
        bytes
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + x as usize
    }
}

/// Canvas backed by a [`PixelBuffer`].
#[derive(Debug, Clone)]
pub struct RasterCanvas {
    buffer: PixelBuffer,
    /// Pixels per point.
    scale: f64,
    size_pt: (f64, f64),
}

impl RasterCanvas {
    /// Creates a white canvas for a page of `width_pt` x `height_pt` at `dpi`.
    pub fn new(width_pt: f64, height_pt: f64, dpi: f64) -> RenderResult<Self> {
        let (min, max) = DPI_RANGE;
        if !dpi.is_finite() || dpi < min || dpi > max {
            return Err(RenderError::InvalidDpi { dpi, min, max });
        }
        if !(width_pt > 0.0 && height_pt > 0.0) {
            return Err(RenderError::InvalidDimensions(format!(
                "page must have positive size, got {}x{} pt",
                width_pt, height_pt
            )));
        }

        let scale = dpi / POINTS_PER_INCH;
        let width = (width_pt * scale).round() as u32;
        let height = (height_pt * scale).round() as u32;
        Ok(Self {
            buffer: PixelBuffer::new(width, height, Color::white()),
            scale,
            size_pt: (width_pt, height_pt),
        })
    }

    /// The underlying pixels.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Consumes the canvas, returning the pixels.
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    fn to_px(&self, p: Point) -> (f64, f64) {
        (p.x * self.scale, p.y * self.scale)
    }

    /// Fills the half-open pixel span `[x0, x1) x [y0, y1)`.
    fn fill_px(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Color) {
        let xs = x0.round() as i64;
        let xe = x1.round() as i64;
        let ys = y0.round() as i64;
        let ye = y1.round() as i64;
        for y in ys..ye {
            for x in xs..xe {
                self.buffer.blend(x, y, color);
            }
        }
    }

    /// Rasterizes segments (in pixels) into one coverage mask and blends it
    /// once, so overlapping joints of translucent strokes are not darkened.
    ///
    /// Each segment is extended by `extend` pixels past both ends: `half`
    /// gives projecting caps, 0 gives butt caps.
    fn stroke_segments(
        &mut self,
        segments: &[((f64, f64), (f64, f64))],
        half: f64,
        extend: f64,
        color: Color,
    ) {
        if segments.is_empty() {
            return;
        }
        let reach = half + extend + 1.0;
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for &((ax, ay), (bx, by)) in segments {
            min_x = min_x.min(ax.min(bx));
            min_y = min_y.min(ay.min(by));
            max_x = max_x.max(ax.max(bx));
            max_y = max_y.max(ay.max(by));
        }
        let x0 = ((min_x - reach).floor() as i64).max(0);
        let y0 = ((min_y - reach).floor() as i64).max(0);
        let x1 = ((max_x + reach).ceil() as i64).min(self.buffer.width as i64);
        let y1 = ((max_y + reach).ceil() as i64).min(self.buffer.height as i64);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let mask_w = (x1 - x0) as usize;
        let mask_h = (y1 - y0) as usize;
        let mut mask = vec![0.0f64; mask_w * mask_h];

        for &(a, b) in segments {
            let sx0 = ((a.0.min(b.0) - reach).floor() as i64).max(x0);
            let sy0 = ((a.1.min(b.1) - reach).floor() as i64).max(y0);
            let sx1 = ((a.0.max(b.0) + reach).ceil() as i64).min(x1);
            let sy1 = ((a.1.max(b.1) + reach).ceil() as i64).min(y1);
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let center = (x as f64 + 0.5, y as f64 + 0.5);
                    let coverage = segment_coverage(center, a, b, half, extend);
                    let cell = &mut mask[(y - y0) as usize * mask_w + (x - x0) as usize];
                    if coverage > *cell {
                        *cell = coverage;
                    }
                }
            }
        }

        for row in 0..mask_h {
            for col in 0..mask_w {
                let coverage = mask[row * mask_w + col];
                if coverage > 0.0 {
                    self.buffer.blend(
                        x0 + col as i64,
                        y0 + row as i64,
                        color.with_alpha(coverage),
                    );
                }
            }
        }
    }
}

impl Canvas for RasterCanvas {
    fn size(&self) -> (f64, f64) {
        self.size_pt
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, y0) = self.to_px(Point::new(rect.x, rect.y));
        let (x1, y1) = self.to_px(Point::new(rect.right(), rect.bottom()));
        self.fill_px(x0, y0, x1, y1, color);
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if points.len() < 2 || style.width <= 0.0 {
            return;
        }
        let px: Vec<(f64, f64)> = points.iter().map(|&p| self.to_px(p)).collect();
        // Keep hairlines visible at low resolutions.
        let half = (style.width * self.scale / 2.0).max(0.5);
        match style.dash.pattern(style.width) {
            None => {
                let segments: Vec<_> = px.windows(2).map(|w| (w[0], w[1])).collect();
                self.stroke_segments(&segments, half, half, style.color);
            }
            Some([on, off]) => {
                let segments = dash_segments(&px, on * self.scale, off * self.scale);
                self.stroke_segments(&segments, half, 0.0, style.color);
            }
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        let width = self.text_width(text, style.size);
        let left = anchored_left(origin.x, width, style.anchor);

        // One font unit; the advance of six units matches CHAR_ADVANCE.
        let unit = style.size * CHAR_ADVANCE / ADVANCE_UNITS as f64 * self.scale;
        let top = origin.y * self.scale - unit * GLYPH_HEIGHT as f64 / 2.0;
        let mut pen = left * self.scale;
        let stroke_w = if style.bold { unit * 1.6 } else { unit };

        for ch in text.chars() {
            for (col, row) in lit_pixels(ch) {
                let x = pen + col as f64 * unit;
                let y = top + row as f64 * unit;
                self.fill_px(x, y, x + stroke_w, y + unit, style.color);
            }
            pen += unit * ADVANCE_UNITS as f64;
        }
    }
}

/// Dash periods shorter than this many pixels are stroked solid.
const MIN_DASH_PERIOD: f64 = 0.25;

/// Splits a pixel-space polyline into its "on" dash pieces.
///
/// The dash phase runs continuously across vertices. Every step either
/// finishes the current vertex pair or strictly advances along it.
fn dash_segments(points: &[(f64, f64)], on: f64, off: f64) -> Vec<((f64, f64), (f64, f64))> {
    let mut out = Vec::new();
    if on <= 0.0 {
        return out;
    }
    if off <= 0.0 || on + off < MIN_DASH_PERIOD {
        return points.windows(2).map(|w| (w[0], w[1])).collect();
    }
    let mut drawing = true;
    let mut remaining = on;

    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        let len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        if len == 0.0 {
            continue;
        }
        let at = |s: f64| (a.0 + (b.0 - a.0) * s / len, a.1 + (b.1 - a.1) * s / len);

        let mut pos = 0.0;
        loop {
            let left = len - pos;
            if remaining >= left {
                if drawing {
                    out.push((at(pos), b));
                }
                remaining -= left;
                break;
            }
            let next = pos + remaining;
            if next <= pos {
                // Dash shorter than the float spacing at `pos`.
                if drawing {
                    out.push((at(pos), b));
                }
                break;
            }
            if drawing {
                out.push((at(pos), at(next)));
            }
            pos = next;
            drawing = !drawing;
            remaining = if drawing { on } else { off };
        }
    }
    out
}

/// Fraction of the pixel centered at `p` covered by the stroke of segment
/// `a`-`b` with half-width `half`, extended by `extend` past both ends.
fn segment_coverage(p: (f64, f64), a: (f64, f64), b: (f64, f64), half: f64, extend: f64) -> f64 {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return 0.0;
    }
    let (ux, uy) = (dx / len, dy / len);
    let (px, py) = (p.0 - a.0, p.1 - a.1);
    let along = px * ux + py * uy;
    let across = (px * uy - py * ux).abs();

    let side = (half + 0.5 - across).clamp(0.0, 1.0);
    let start = (along + extend + 0.5).clamp(0.0, 1.0);
    let end = (len + extend - along + 0.5).clamp(0.0, 1.0);
    side.min(start).min(end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::palette;

    fn canvas() -> RasterCanvas {
        // 72 dpi: one pixel per point.
        RasterCanvas::new(100.0, 50.0, 72.0).unwrap()
    }

    #[test]
    fn test_size_follows_dpi() {
        let c = RasterCanvas::new(864.0, 1008.0, 100.0).unwrap();
        assert_eq!((c.buffer().width, c.buffer().height), (1200, 1400));
        assert_eq!(c.size(), (864.0, 1008.0));
    }

    #[test]
    fn test_rejects_out_of_range_dpi() {
        assert!(matches!(
            RasterCanvas::new(10.0, 10.0, 10.0),
            Err(RenderError::InvalidDpi { .. })
        ));
        assert!(RasterCanvas::new(10.0, 10.0, f64::NAN).is_err());
        assert!(RasterCanvas::new(0.0, 10.0, 72.0).is_err());
    }

    #[test]
    fn test_fill_rect() {
        let mut c = canvas();
        c.fill_rect(Rect::new(10.0, 10.0, 5.0, 5.0), palette::RED);
        assert_eq!(c.buffer().get(12, 12), palette::RED);
        assert_eq!(c.buffer().get(15, 12), Color::white());
        assert_eq!(c.buffer().get(9, 9), Color::white());
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut c = canvas();
        c.fill_rect(Rect::new(0.0, 0.0, 4.0, 4.0), Color::black().with_alpha(0.5));
        let px = c.buffer().get(1, 1);
        assert!((px.r - 0.5).abs() < 1e-9);
        assert_eq!(px.a, 1.0);
    }

    #[test]
    fn test_horizontal_stroke_covers_line() {
        let mut c = canvas();
        let style = StrokeStyle::solid(palette::BLUE, 3.0);
        c.stroke_polyline(&[Point::new(10.0, 20.0), Point::new(90.0, 20.0)], &style);
        assert_eq!(c.buffer().get(50, 20).to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(c.buffer().get(50, 19).to_rgba8(), [0, 0, 255, 255]);
        assert_eq!(c.buffer().get(50, 30), Color::white());
    }

    #[test]
    fn test_dashed_stroke_has_gaps() {
        let mut c = canvas();
        let style = StrokeStyle::dashed(palette::RED, 2.0);
        c.stroke_polyline(&[Point::new(0.0, 25.0), Point::new(100.0, 25.0)], &style);
        let row: Vec<bool> = (0..100)
            .map(|x| c.buffer().get(x, 25) != Color::white())
            .collect();
        assert!(row.iter().any(|&on| on));
        assert!(row.iter().any(|&on| !on));
    }

    #[test]
    fn test_dash_segments_phase_continues_across_vertices() {
        let pts = [(0.0, 0.0), (3.0, 0.0), (10.0, 0.0)];
        let segs = dash_segments(&pts, 4.0, 2.0);
        // on [0,3] + [3,4], off [4,6], on [6,10]
        assert_eq!(
            segs,
            vec![
                ((0.0, 0.0), (3.0, 0.0)),
                ((3.0, 0.0), (4.0, 0.0)),
                ((6.0, 0.0), (10.0, 0.0)),
            ]
        );
    }

    #[test]
    fn test_dash_segments_sub_pixel_period_is_solid() {
        let pts = [(0.0, 0.0), (1.0e12, 0.0)];
        let segs = dash_segments(&pts, 1.0e-300, 1.0e-300);
        assert_eq!(segs, vec![((0.0, 0.0), (1.0e12, 0.0))]);
    }

    #[test]
    fn test_dash_segments_long_run_ends_at_last_vertex() {
        let pts = [(0.0, 0.0), (1000.0, 0.0)];
        let segs = dash_segments(&pts, 0.3, 0.2);
        assert!((1999..=2001).contains(&segs.len()), "{} dashes", segs.len());
        assert_eq!(segs.last().map(|&(_, end)| end.0.round()), Some(1000.0));
    }

    #[test]
    fn test_dash_segments_without_gap_is_solid() {
        let pts = [(0.0, 0.0), (3.0, 0.0), (3.0, 5.0)];
        let segs = dash_segments(&pts, 2.0, 0.0);
        assert_eq!(
            segs,
            vec![((0.0, 0.0), (3.0, 0.0)), ((3.0, 0.0), (3.0, 5.0))]
        );
    }

    #[test]
    fn test_text_draws_ink() {
        let mut c = canvas();
        c.draw_text(Point::new(5.0, 25.0), "HI", &TextStyle::new(10.0));
        let inked = c.buffer().data.iter().filter(|p| **p != Color::white()).count();
        assert!(inked > 0);
    }

    #[test]
    fn test_segment_coverage() {
        let (a, b) = ((0.0, 0.0), (10.0, 0.0));
        assert_eq!(segment_coverage((5.0, 0.5), a, b, 1.0, 0.0), 1.0);
        assert_eq!(segment_coverage((5.0, 3.0), a, b, 1.0, 0.0), 0.0);
        // Butt cap stops at the end point; a projecting cap reaches past it.
        assert_eq!(segment_coverage((11.0, 0.0), a, b, 1.0, 0.0), 0.0);
        assert_eq!(segment_coverage((10.5, 0.0), a, b, 1.0, 1.0), 1.0);
        assert_eq!(segment_coverage((1.0, 1.0), a, a, 1.0, 1.0), 0.0);
    }
}
