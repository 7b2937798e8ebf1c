//! Figure export to PNG and PDF files.

use std::fmt;
use std::path::{Path, PathBuf};

use gatewave_signal::AnalysisPass;
use gatewave_spec::GateType;

use crate::chart::{draw_figure, Layout};
use crate::error::RenderResult;
use crate::figure::Figure;
use crate::pdf::PdfCanvas;
use crate::png::{hash_bytes, write_rgba_to_vec_with_hash, PngConfig};
use crate::raster::{RasterCanvas, DEFAULT_DPI};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Png,
    Pdf,
}

impl ExportFormat {
    /// Every supported format.
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Png, ExportFormat::Pdf];

    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// `logic_gate_<gate>_visualization.<ext>`, gate name lowercased.
pub fn export_file_name(gate: &GateType, format: ExportFormat) -> String {
    format!(
        "logic_gate_{}_visualization.{}",
        gate.as_str().to_lowercase(),
        format.extension()
    )
}

/// Settings shared by all exports.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Raster resolution.
    pub dpi: f64,
    pub png: PngConfig,
    pub layout: Layout,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dpi: DEFAULT_DPI,
            png: PngConfig::default(),
            layout: Layout::default(),
        }
    }
}

/// Encoded figure ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub format: ExportFormat,
    pub file_name: String,
    pub bytes: Vec<u8>,
    /// BLAKE3 hex digest of `bytes`.
    pub hash: String,
}

impl ExportArtifact {
    /// Writes the artifact into `dir` under its file name.
    pub fn write_to_dir(&self, dir: &Path) -> RenderResult<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

/// Rasterizes the figure and encodes it as PNG.
pub fn render_png(figure: &Figure, options: &RenderOptions) -> RenderResult<ExportArtifact> {
    let mut canvas = RasterCanvas::new(figure.width, figure.height, options.dpi)?;
    draw_figure(&mut canvas, figure, &options.layout);
    let (bytes, hash) = write_rgba_to_vec_with_hash(canvas.buffer(), &options.png)?;
    Ok(ExportArtifact {
        format: ExportFormat::Png,
        file_name: export_file_name(&figure.gate, ExportFormat::Png),
        bytes,
        hash,
    })
}

/// Draws the figure as a one-page vector PDF.
pub fn render_pdf(figure: &Figure, options: &RenderOptions) -> ExportArtifact {
    let mut canvas = PdfCanvas::new(figure.width, figure.height);
    draw_figure(&mut canvas, figure, &options.layout);
    let bytes = canvas.finish();
    let hash = hash_bytes(&bytes);
    ExportArtifact {
        format: ExportFormat::Pdf,
        file_name: export_file_name(&figure.gate, ExportFormat::Pdf),
        bytes,
        hash,
    }
}

/// Renders the figure in one format.
pub fn render(
    figure: &Figure,
    format: ExportFormat,
    options: &RenderOptions,
) -> RenderResult<ExportArtifact> {
    match format {
        ExportFormat::Png => render_png(figure, options),
        ExportFormat::Pdf => Ok(render_pdf(figure, options)),
    }
}

/// Builds the figure for a pass and renders each requested format.
pub fn render_pass(
    pass: &AnalysisPass,
    formats: &[ExportFormat],
    options: &RenderOptions,
) -> RenderResult<Vec<ExportArtifact>> {
    let figure = Figure::from_pass(pass);
    formats
        .iter()
        .map(|&format| render(&figure, format, options))
        .collect()
}
