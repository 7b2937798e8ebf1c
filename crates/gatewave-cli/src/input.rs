//! Loading experiment specs from config files and command-line overrides.
//!
//! A spec starts from the defaults (or from a JSON config file) and each
//! override flag replaces one field. The result carries where it came from
//! so commands can report provenance.

use gatewave_spec::{ExperimentSpec, Pattern, SignalSpec};
use std::path::{Path, PathBuf};

/// Recognized config file extensions.
pub const JSON_EXTENSIONS: &[&str] = &["json"];

/// Per-field replacements applied on top of a loaded spec.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecOverrides {
    pub duration: Option<f64>,
    pub sample_count: Option<usize>,
    pub gate: Option<String>,
    pub a_pattern: Option<String>,
    pub a_frequency: Option<f64>,
    pub c_pattern: Option<String>,
    pub c_frequency: Option<f64>,
}

impl SpecOverrides {
    /// Returns true if no field is overridden.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Replaces every overridden field of `spec`.
    pub fn apply(&self, spec: &mut ExperimentSpec) {
        if let Some(duration) = self.duration {
            spec.duration_seconds = duration;
        }
        if let Some(count) = self.sample_count {
            spec.sample_count = count;
        }
        if let Some(gate) = &self.gate {
            spec.gate = gate.as_str().into();
        }
        apply_signal(&mut spec.signal_a, self.a_pattern.as_deref(), self.a_frequency);
        apply_signal(&mut spec.signal_c, self.c_pattern.as_deref(), self.c_frequency);
    }
}

fn apply_signal(signal: &mut SignalSpec, pattern: Option<&str>, frequency: Option<f64>) {
    if let Some(pattern) = pattern {
        signal.pattern = Pattern::parse(pattern);
    }
    if let Some(frequency) = frequency {
        signal.frequency = frequency;
    }
}

/// Where a spec came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
    /// Built-in defaults.
    Defaults,
    /// A JSON config file.
    File(PathBuf),
}

impl std::fmt::Display for SpecSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpecSource::Defaults => write!(f, "defaults"),
            SpecSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of resolving a spec.
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Effective spec after overrides.
    pub spec: ExperimentSpec,
    pub source: SpecSource,
    /// BLAKE3 hash of the config file content, if one was read.
    pub source_hash: Option<String>,
    /// Whether any override flag changed the loaded spec.
    pub overridden: bool,
}

/// Errors that can occur while loading a config file.
#[derive(Debug)]
pub enum InputError {
    /// File could not be read.
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Unknown file extension.
    UnknownExtension { extension: Option<String> },

    /// JSON parsing failed.
    JsonParse { message: String },
}

impl InputError {
    /// Stable CLI error code for JSON output.
    pub fn code(&self) -> &'static str {
        use crate::commands::json_output::error_codes;
        match self {
            InputError::FileRead { .. } => error_codes::FILE_READ,
            InputError::UnknownExtension { .. } => error_codes::UNKNOWN_EXTENSION,
            InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        }
    }
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::FileRead { path, source } => {
                write!(f, "failed to read file '{}': {}", path.display(), source)
            }
            InputError::UnknownExtension { extension } => match extension {
                Some(ext) => write!(f, "unknown file extension '.{}' (expected .json)", ext),
                None => write!(f, "file has no extension (expected .json)"),
            },
            InputError::JsonParse { message } => {
                write!(f, "JSON parse error: {}", message)
            }
        }
    }
}

impl std::error::Error for InputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InputError::FileRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Load a spec from a JSON config file.
pub fn load_spec(path: &Path) -> Result<LoadResult, InputError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase());
    match extension.as_deref() {
        Some(ext) if JSON_EXTENSIONS.contains(&ext) => {}
        _ => return Err(InputError::UnknownExtension { extension }),
    }

    let content = std::fs::read_to_string(path).map_err(|e| InputError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let source_hash = blake3::hash(content.as_bytes()).to_hex().to_string();
    let spec = ExperimentSpec::from_json(&content).map_err(|e| InputError::JsonParse {
        message: e.to_string(),
    })?;

    Ok(LoadResult {
        spec,
        source: SpecSource::File(path.to_path_buf()),
        source_hash: Some(source_hash),
        overridden: false,
    })
}

/// Loads `config` (or the defaults) and applies `overrides`.
pub fn resolve_spec(
    config: Option<&Path>,
    overrides: &SpecOverrides,
) -> Result<LoadResult, InputError> {
    let mut result = match config {
        Some(path) => load_spec(path)?,
        None => LoadResult {
            spec: ExperimentSpec::default(),
            source: SpecSource::Defaults,
            source_hash: None,
            overridden: false,
        },
    };
    overrides.apply(&mut result.spec);
    result.overridden = !overrides.is_empty();
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gatewave_spec::GateType;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_config() {
        let result = resolve_spec(None, &SpecOverrides::default()).unwrap();
        assert_eq!(result.spec, ExperimentSpec::default());
        assert_eq!(result.source, SpecSource::Defaults);
        assert!(result.source_hash.is_none());
        assert!(!result.overridden);
    }

    #[test]
    fn test_load_json_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(
            &path,
            r#"{
                "duration_seconds": 12,
                "gate": "xor",
                "signal_a": {"pattern": "Clock Pulse", "frequency": 2.5}
            }"#,
        )
        .unwrap();

        let result = load_spec(&path).unwrap();
        assert_eq!(result.spec.duration_seconds, 12.0);
        assert_eq!(result.spec.gate, GateType::Xor);
        assert_eq!(result.spec.signal_a, SignalSpec::clock(2.5));
        assert_eq!(result.source_hash.as_ref().map(String::len), Some(64));
    }

    #[test]
    fn test_overrides_win_over_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(&path, r#"{"gate": "OR", "duration_seconds": 8}"#).unwrap();

        let overrides = SpecOverrides {
            gate: Some("nand".to_string()),
            c_pattern: Some("constant-high".to_string()),
            a_frequency: Some(4.0),
            ..SpecOverrides::default()
        };
        let result = resolve_spec(Some(&path), &overrides).unwrap();
        assert_eq!(result.spec.gate, GateType::Nand);
        assert_eq!(result.spec.duration_seconds, 8.0);
        assert_eq!(result.spec.signal_c.pattern, Pattern::ConstantHigh);
        assert_eq!(result.spec.signal_a.frequency, 4.0);
        assert!(result.overridden);
    }

    #[test]
    fn test_unknown_extension() {
        let err = load_spec(Path::new("spec.yaml")).unwrap_err();
        assert!(matches!(err, InputError::UnknownExtension { .. }));
        assert_eq!(err.code(), "CLI_002");
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = load_spec(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
        assert!(err.to_string().contains("absent.json"));
    }

    #[test]
    fn test_unknown_field_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(&path, r#"{"gates": "AND"}"#).unwrap();
        let err = load_spec(&path).unwrap_err();
        assert!(matches!(err, InputError::JsonParse { .. }));
        assert_eq!(err.code(), "CLI_003");
    }
}
