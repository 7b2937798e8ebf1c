//! Validate command implementation
//!
//! Checks a spec for out-of-range values and unrecognized names without
//! generating anything.

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{CommandOutput, ValidateResult};
use super::reporting::{self, prepare, print_input_error_json};
use crate::input::SpecOverrides;

/// Run the validate command
///
/// # Arguments
/// * `config` - Optional path to a JSON config file
/// * `overrides` - Per-field overrides from the command line
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(
    config: Option<&Path>,
    overrides: &SpecOverrides,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config, overrides)
    } else {
        run_human(config, overrides)
    }
}

/// Run validate with human-readable (colored) output
fn run_human(config: Option<&Path>, overrides: &SpecOverrides) -> Result<ExitCode> {
    let start = Instant::now();
    let target = config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    println!("{} {}", "Validating:".cyan().bold(), target);

    let prepared = prepare(config, overrides)
        .with_context(|| format!("Failed to load spec: {}", target))?;
    reporting::print_source(&prepared.load, &prepared.spec_hash);
    reporting::print_validation_results(&prepared.validation);

    let duration_ms = start.elapsed().as_millis() as u64;
    if prepared.validation.is_ok() {
        println!(
            "\n{} Spec is valid ({}ms)",
            "SUCCESS".green().bold(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Spec has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            prepared.validation.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(config: Option<&Path>, overrides: &SpecOverrides) -> Result<ExitCode> {
    let start = Instant::now();

    let prepared = match prepare(config, overrides) {
        Ok(prepared) => prepared,
        Err(e) => {
            print_input_error_json(&e, config)?;
            return Ok(ExitCode::from(1));
        }
    };

    let (errors, warnings) = prepared.json_messages();
    let spec_hash = Some(prepared.spec_hash.clone());
    let source_hash = prepared.load.source_hash.clone();

    let output = if prepared.validation.is_ok() {
        let result = ValidateResult {
            source: prepared.load.source.to_string(),
            gate: prepared.load.spec.gate.to_string(),
            duration_ms: start.elapsed().as_millis() as u64,
        };
        CommandOutput::success(result, spec_hash, source_hash, warnings)
    } else {
        CommandOutput::failure(errors, warnings, spec_hash, source_hash)
    };
    output.print()?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_validate_defaults_succeeds() {
        let code = run(None, &SpecOverrides::default(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn test_validate_out_of_range_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("spec.json");
        fs::write(&path, r#"{"sample_count": 1}"#).unwrap();
        let code = run(Some(&path), &SpecOverrides::default(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_validate_missing_file_json_mode_reports_failure() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let code = run(Some(&path), &SpecOverrides::default(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_validate_missing_file_human_mode_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(run(Some(&path), &SpecOverrides::default(), false).is_err());
    }

    #[test]
    fn test_warnings_do_not_fail_validation() {
        let overrides = SpecOverrides {
            gate: Some("XNOR".to_string()),
            ..SpecOverrides::default()
        };
        let code = run(None, &overrides, false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }
}
