//! gatewave Render Backend
//!
//! Turns an [`AnalysisPass`](gatewave_signal::AnalysisPass) into the
//! three-panel waveform figure and exports it as PNG or PDF.
//!
//! # Determinism
//!
//! Both encoders are deterministic: PNG output uses fixed compression and
//! filter settings, PDF output carries no timestamps or document IDs. The
//! same pass and options always produce byte-identical files, and every
//! export carries the BLAKE3 hash of its bytes.
//!
//! # Crate Structure
//!
//! - [`canvas`]: Backend-neutral drawing trait and styles
//! - [`color`]: Colors and the figure palette
//! - [`font`]: 5x7 bitmap font for raster text
//! - [`raster`]: Pixel buffer canvas
//! - [`png`]: Deterministic PNG encoding
//! - [`pdf`]: Vector PDF canvas and document writer
//! - [`figure`]: Panel and series model
//! - [`chart`]: Figure layout and drawing
//! - [`export`]: File naming and export entry points

pub mod canvas;
pub mod chart;
pub mod color;
pub mod error;
pub mod export;
pub mod figure;
pub mod font;
pub mod pdf;
pub mod png;
pub mod raster;

pub use canvas::{Canvas, LineDash, Point, Rect, StrokeStyle, TextAnchor, TextStyle};
pub use chart::{draw_figure, Layout};
pub use color::{palette, Color};
pub use error::{RenderError, RenderResult};
pub use export::{
    export_file_name, render, render_pass, render_pdf, render_png, ExportArtifact, ExportFormat,
    RenderOptions,
};
pub use figure::{panel_title, Figure, Panel, Series, SeriesShape};
pub use pdf::PdfCanvas;
pub use crate::png::{hash_bytes, PngConfig};
pub use raster::{PixelBuffer, RasterCanvas, DEFAULT_DPI, DPI_RANGE};
