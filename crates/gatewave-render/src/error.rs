//! Error types for figure rendering and export.

use gatewave_signal::SignalError;
use gatewave_spec::BackendError;
use thiserror::Error;

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors from rendering or writing a figure.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] ::png::EncodingError),

    #[error("Invalid DPI {dpi}: must be between {min} and {max}")]
    InvalidDpi { dpi: f64, min: f64, max: f64 },

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Signal error: {0}")]
    Signal(#[from] SignalError),
}

impl BackendError for RenderError {
    fn code(&self) -> &'static str {
        match self {
            RenderError::Io(_) => "RENDER_001",
            RenderError::PngEncoding(_) => "RENDER_002",
            RenderError::InvalidDpi { .. } => "RENDER_003",
            RenderError::InvalidDimensions(_) => "RENDER_004",
            RenderError::Signal(_) => "RENDER_005",
        }
    }

    fn category(&self) -> &'static str {
        "render"
    }
}
