//! JSON output types for machine-readable CLI output.
//!
//! Every command accepts `--json`; the structs here are what it prints. The
//! shape is stable so scripts can parse results without scraping colored
//! text.

use gatewave_signal::WaveSummary;
use gatewave_spec::{ValidationError, ValidationWarning};
use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// Format: CLI_XXX for CLI-level errors; validation errors pass their own
/// codes (E001, ...) through unchanged.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// Unknown file extension
    pub const UNKNOWN_EXTENSION: &str = "CLI_002";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_003";
    /// Invalid spec (post-parse validation)
    pub const INVALID_SPEC: &str = "CLI_004";
    /// Signal generation failed
    pub const GENERATION_ERROR: &str = "CLI_005";
    /// Rendering or encoding failed
    pub const RENDER_ERROR: &str = "CLI_006";
    /// Output file could not be written
    pub const FILE_WRITE: &str = "CLI_007";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts a config loading error.
pub fn input_error_to_json(error: &InputError, file: Option<&str>) -> JsonError {
    let json = JsonError::new(error.code(), error.to_string());
    match file {
        Some(file) => json.with_file(file),
        None => json,
    }
}

/// Converts a validation error, keeping its E-code and path.
pub fn validation_error_to_json(error: &ValidationError) -> JsonError {
    let json = JsonError::new(error.code.code(), &error.message);
    match &error.path {
        Some(path) => json.with_path(path),
        None => json,
    }
}

/// Converts a validation warning, keeping its W-code and path.
pub fn validation_warning_to_json(warning: &ValidationWarning) -> JsonWarning {
    let json = JsonWarning::new(warning.code.code(), &warning.message);
    match &warning.path {
        Some(path) => json.with_path(path),
        None => json,
    }
}

/// Common envelope: every command prints one of these with `--json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOutput<T> {
    /// Whether the command succeeded (no errors)
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings (generation still proceeded)
    pub warnings: Vec<JsonWarning>,
    /// Command-specific result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
    /// Canonical spec hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spec_hash: Option<String>,
    /// BLAKE3 hash of the config file, if one was read
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

impl<T> CommandOutput<T> {
    /// Creates a successful output.
    pub fn success(
        result: T,
        spec_hash: Option<String>,
        source_hash: Option<String>,
        warnings: Vec<JsonWarning>,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            spec_hash,
            source_hash,
        }
    }

    /// Creates a failed output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        spec_hash: Option<String>,
        source_hash: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            spec_hash,
            source_hash,
        }
    }
}

impl<T: Serialize> CommandOutput<T> {
    /// Prints the output as pretty JSON on stdout.
    pub fn print(&self) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Result details for `validate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Where the spec came from ("defaults" or a file path)
    pub source: String,
    /// Gate under study
    pub gate: String,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Result details for `render`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Gate under study
    pub gate: String,
    /// Raster resolution used for PNG output
    pub dpi: f64,
    /// Files written
    pub outputs: Vec<OutputFile>,
    /// BLAKE3 digest of every waveform in the pass
    pub waveform_hash: String,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// One written file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputFile {
    /// Format ("png" or "pdf")
    pub format: String,
    /// Path the file was written to
    pub path: String,
    /// Size in bytes
    pub size: u64,
    /// BLAKE3 hash of the file content
    pub hash: String,
}

/// Result details for `table`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableResult {
    /// Gate under study
    pub gate: String,
    /// Table caption
    pub caption: String,
    /// Gate description (empty for unrecognized gates)
    pub description: String,
    /// Column headers
    pub columns: Vec<String>,
    /// Rows as `[a, b, c, x]`
    pub rows: Vec<[u8; 4]>,
}

/// Waveform summary of one named signal, as reported by `report`.
#[derive(Debug, Clone, Serialize)]
pub struct NamedSummary {
    /// e.g. `input_a` or `case_b.output`
    pub name: String,
    #[serde(flatten)]
    pub summary: WaveSummary,
}

/// Result details for `template`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateResult {
    /// Where the template was written, or None when printed to stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// The default spec
    pub spec: serde_json::Value,
}
