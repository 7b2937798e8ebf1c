//! Backend-neutral drawing surface.
//!
//! All coordinates are in points (1/72 inch) with the origin at the top-left
//! corner and y growing downwards. Each backend maps points onto its own
//! device space.

use crate::color::Color;

/// Points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// Monospace advance as a fraction of the font size.
///
/// Both backends use fixed-pitch fonts with this advance, so layout computed
/// through [`Canvas::text_width`] is identical for PNG and PDF.
pub const CHAR_ADVANCE: f64 = 0.6;

/// A position in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Closed outline, clockwise from the top-left corner.
    pub fn outline(&self) -> [Point; 5] {
        [
            Point::new(self.x, self.y),
            Point::new(self.right(), self.y),
            Point::new(self.right(), self.bottom()),
            Point::new(self.x, self.bottom()),
            Point::new(self.x, self.y),
        ]
    }
}

/// Line dash style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineDash {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl LineDash {
    /// On/off lengths in points for a line of the given width, or `None`
    /// for a solid line. Lengths scale with the width.
    pub fn pattern(&self, width: f64) -> Option<[f64; 2]> {
        match self {
            LineDash::Solid => None,
            LineDash::Dashed => Some([3.7 * width, 1.6 * width]),
            LineDash::Dotted => Some([1.0 * width, 1.65 * width]),
        }
    }
}

/// How a polyline is stroked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    /// Line width in points.
    pub width: f64,
    pub dash: LineDash,
}

impl StrokeStyle {
    pub fn solid(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            dash: LineDash::Solid,
        }
    }

    pub fn dashed(color: Color, width: f64) -> Self {
        Self {
            dash: LineDash::Dashed,
            ..Self::solid(color, width)
        }
    }

    pub fn dotted(color: Color, width: f64) -> Self {
        Self {
            dash: LineDash::Dotted,
            ..Self::solid(color, width)
        }
    }

    /// Same stroke with its color's alpha multiplied by `alpha`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            color: self.color.with_alpha(alpha),
            ..self
        }
    }
}

/// Horizontal alignment of text relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// How a text run is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    pub color: Color,
    pub bold: bool,
    pub anchor: TextAnchor,
}

impl TextStyle {
    pub fn new(size: f64) -> Self {
        Self {
            size,
            color: Color::black(),
            bold: false,
            anchor: TextAnchor::Start,
        }
    }

    pub fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub fn anchored(self, anchor: TextAnchor) -> Self {
        Self { anchor, ..self }
    }
}

/// Width in points of `text` at `size` in the shared monospace metrics.
pub fn monospace_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * CHAR_ADVANCE * size
}

/// Left edge of a text run whose anchor sits at `x`.
pub fn anchored_left(x: f64, width: f64, anchor: TextAnchor) -> f64 {
    match anchor {
        TextAnchor::Start => x,
        TextAnchor::Middle => x - width / 2.0,
        TextAnchor::End => x - width,
    }
}

/// A surface the figure can be drawn on.
pub trait Canvas {
    /// Page size in points.
    fn size(&self) -> (f64, f64);

    /// Fills a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Strokes connected line segments through `points`.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle);

    /// Draws a single line of text. `origin.y` is the vertical center of
    /// the text; `origin.x` is interpreted according to the anchor.
    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle);

    /// Width of `text` in points at `size`.
    fn text_width(&self, text: &str, size: f64) -> f64 {
        monospace_width(text, size)
    }

    /// Strokes the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, style: &StrokeStyle) {
        self.stroke_polyline(&rect.outline(), style);
    }
}
