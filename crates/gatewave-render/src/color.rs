//! Colors and the figure palette.

/// RGBA color with f64 components (0.0 to 1.0 range).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Color {
    /// Create a new color with alpha = 1.0.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a new color with alpha.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create a grayscale color.
    pub const fn gray(value: f64) -> Self {
        Self::rgb(value, value, value)
    }

    /// Create black.
    pub const fn black() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }

    /// Create white.
    pub const fn white() -> Self {
        Self::rgb(1.0, 1.0, 1.0)
    }

    /// Same color with alpha multiplied by `alpha`.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self {
            a: self.a * alpha.clamp(0.0, 1.0),
            ..*self
        }
    }

    /// Linearly interpolate between two colors.
    pub fn lerp(&self, other: &Color, t: f64) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }

    /// Composites `self` over an opaque-or-translucent `dst` ("source over").
    pub fn over(&self, dst: &Color) -> Color {
        let sa = self.a.clamp(0.0, 1.0);
        let da = dst.a.clamp(0.0, 1.0);
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Color::rgba(0.0, 0.0, 0.0, 0.0);
        }
        let mix = |s: f64, d: f64| (s * sa + d * da * (1.0 - sa)) / out_a;
        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: out_a,
        }
    }

    /// Clamp all components to [0.0, 1.0].
    pub fn clamp(&self) -> Color {
        Color {
            r: self.r.clamp(0.0, 1.0),
            g: self.g.clamp(0.0, 1.0),
            b: self.b.clamp(0.0, 1.0),
            a: self.a.clamp(0.0, 1.0),
        }
    }

    /// Convert to 8-bit RGBA.
    pub fn to_rgba8(&self) -> [u8; 4] {
        let c = self.clamp();
        [
            (c.r * 255.0).round() as u8,
            (c.g * 255.0).round() as u8,
            (c.b * 255.0).round() as u8,
            (c.a * 255.0).round() as u8,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Named colors used by the waveform figure.
pub mod palette {
    use super::Color;

    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    /// `#008000`
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    /// `#FFA500`
    pub const ORANGE: Color = Color::rgb(1.0, 165.0 / 255.0, 0.0);
    /// `#800080`
    pub const PURPLE: Color = Color::rgb(128.0 / 255.0, 0.0, 128.0 / 255.0);
    /// Grid lines, `#B0B0B0`.
    pub const GRID: Color = Color::gray(176.0 / 255.0);
    /// Legend frame, `#CCCCCC`.
    pub const LEGEND_EDGE: Color = Color::gray(0.8);
    pub const INK: Color = Color::black();
    pub const PAPER: Color = Color::white();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_rgba8() {
        assert_eq!(palette::GREEN.to_rgba8(), [0, 128, 0, 255]);
        assert_eq!(palette::ORANGE.to_rgba8(), [255, 165, 0, 255]);
        assert_eq!(Color::rgba(2.0, -1.0, 0.5, 1.0).to_rgba8(), [255, 0, 128, 255]);
    }

    #[test]
    fn test_over_opaque_background() {
        let out = palette::GREEN.with_alpha(0.2).over(&Color::white());
        assert_eq!(out.a, 1.0);
        assert!((out.r - 0.8).abs() < 1e-9);
        assert!((out.g - (0.2 * 128.0 / 255.0 + 0.8)).abs() < 1e-9);
    }

    #[test]
    fn test_over_fully_opaque_source_replaces() {
        let out = palette::RED.over(&Color::white());
        assert_eq!(out, palette::RED);
    }

    #[test]
    fn test_lerp() {
        let mid = Color::black().lerp(&Color::white(), 0.5);
        assert_eq!(mid, Color::gray(0.5));
    }
}
