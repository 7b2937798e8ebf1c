//! Single-page vector PDF output.
//!
//! Produces a minimal PDF 1.4 file: one page, one uncompressed content
//! stream, the base-14 Courier fonts, and `ExtGState` entries for
//! translucency. No dates or random IDs are written, so identical drawing
//! commands give identical bytes.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crate::canvas::{anchored_left, Canvas, Point, Rect, StrokeStyle, TextStyle};
use crate::color::Color;

const REGULAR_FONT: &str = "F1";
const BOLD_FONT: &str = "F2";

/// Canvas that records drawing commands as a PDF content stream.
#[derive(Debug, Clone)]
pub struct PdfCanvas {
    width: f64,
    height: f64,
    content: String,
    /// Alpha in thousandths -> graphics state name.
    alpha_states: BTreeMap<u32, String>,
}

impl PdfCanvas {
    /// Creates an empty page of `width` x `height` points.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            content: String::new(),
            alpha_states: BTreeMap::new(),
        }
    }

    /// Raw content stream recorded so far.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Serializes the page as a complete PDF file.
    pub fn finish(&self) -> Vec<u8> {
        let mut ext_states = String::new();
        for (milli, name) in &self.alpha_states {
            let alpha = num(*milli as f64 / 1000.0);
            let _ = write!(
                ext_states,
                " /{} << /Type /ExtGState /CA {} /ca {} >>",
                name, alpha, alpha
            );
        }

        let page = format!(
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] \
             /Resources << /Font << /{} 5 0 R /{} 6 0 R >> /ExtGState <<{} >> >> \
             /Contents 4 0 R >>",
            num(self.width),
            num(self.height),
            REGULAR_FONT,
            BOLD_FONT,
            ext_states
        );
        let stream = format!(
            "<< /Length {} >>\nstream\n{}\nendstream",
            self.content.len(),
            self.content
        );

        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            page,
            stream,
            font_object("Courier"),
            font_object("Courier-Bold"),
            "<< /Producer (gatewave) >>".to_string(),
        ];
        write_document(&objects, 7)
    }

    /// Lines are drawn in PDF user space, whose y axis points up.
    fn flip(&self, p: Point) -> (f64, f64) {
        (p.x, self.height - p.y)
    }

    fn set_alpha(&mut self, alpha: f64) {
        let milli = (alpha.clamp(0.0, 1.0) * 1000.0).round() as u32;
        let next = self.alpha_states.len();
        let name = self
            .alpha_states
            .entry(milli)
            .or_insert_with(|| format!("GS{}", next))
            .clone();
        let _ = writeln!(self.content, "/{} gs", name);
    }
}

impl Canvas for PdfCanvas {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x, y) = self.flip(Point::new(rect.x, rect.bottom()));
        self.content.push_str("q\n");
        self.set_alpha(color.a);
        let _ = writeln!(
            self.content,
            "{} rg\n{} {} {} {} re f\nQ",
            rgb(&color),
            num(x),
            num(y),
            num(rect.width),
            num(rect.height)
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) {
        if points.len() < 2 || style.width <= 0.0 {
            return;
        }
        self.content.push_str("q\n");
        self.set_alpha(style.color.a);
        let _ = writeln!(self.content, "{} RG", rgb(&style.color));
        let _ = writeln!(self.content, "{} w", num(style.width));
        match style.dash.pattern(style.width) {
            Some([on, off]) => {
                let _ = writeln!(self.content, "0 J 1 j [{} {}] 0 d", num(on), num(off));
            }
            None => self.content.push_str("2 J 1 j [] 0 d\n"),
        }

        let (x, y) = self.flip(points[0]);
        let _ = writeln!(self.content, "{} {} m", num(x), num(y));
        for &p in &points[1..] {
            let (x, y) = self.flip(p);
            let _ = writeln!(self.content, "{} {} l", num(x), num(y));
        }
        self.content.push_str("S\nQ\n");
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &TextStyle) {
        let width = self.text_width(text, style.size);
        let left = anchored_left(origin.x, width, style.anchor);
        // Courier cap height is ~0.57 em; center capitals on origin.y.
        let baseline = origin.y + style.size * 0.285;
        let (x, y) = self.flip(Point::new(left, baseline));
        let font = if style.bold { BOLD_FONT } else { REGULAR_FONT };

        self.content.push_str("q\n");
        self.set_alpha(style.color.a);
        let _ = writeln!(
            self.content,
            "BT\n{} rg\n/{} {} Tf\n{} {} Td\n({}) Tj\nET\nQ",
            rgb(&style.color),
            font,
            num(style.size),
            num(x),
            num(y),
            escape_text(text)
        );
    }
}

fn font_object(base: &str) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        base
    )
}

/// Lays out numbered objects, the cross-reference table and the trailer.
fn write_document(objects: &[String], info: usize) -> Vec<u8> {
    let mut out: Vec<u8> = Vec::new();
    out.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(out.len());
        out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
    }

    let xref_at = out.len();
    let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        let _ = write!(xref, "{:010} 00000 n \n", offset);
    }
    let _ = write!(
        xref,
        "trailer\n<< /Size {} /Root 1 0 R /Info {} 0 R >>\nstartxref\n{}\n%%EOF\n",
        objects.len() + 1,
        info,
        xref_at
    );
    out.extend_from_slice(xref.as_bytes());
    out
}

/// Formats a number with at most two decimals and no trailing zeros.
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        _ => s.to_string(),
    }
}

fn rgb(color: &Color) -> String {
    let c = color.clamp();
    format!("{} {} {}", num3(c.r), num3(c.g), num3(c.b))
}

fn num3(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() {
        "0".to_string()
    } else {
        s.to_string()
    }
}

/// Escapes a string for a PDF literal; non-ASCII characters become `?`.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' | '(' | ')' => {
                out.push('\\');
                out.push(ch);
            }
            ' '..='~' => out.push(ch),
            _ => out.push('?'),
        }
    }
    out
}
