//! Console and JSON helpers shared by the commands.

use colored::Colorize;
use gatewave_spec::{canonical_spec_hash, validate_spec, ValidationResult};
use std::path::Path;

use super::json_output::{
    input_error_to_json, validation_error_to_json, validation_warning_to_json, CommandOutput,
    JsonError, JsonWarning,
};
use crate::input::{resolve_spec, InputError, LoadResult, SpecOverrides};

/// A resolved spec with its validation outcome.
pub(crate) struct Prepared {
    pub load: LoadResult,
    pub validation: ValidationResult,
    pub spec_hash: String,
}

impl Prepared {
    /// Validation errors and warnings in JSON form.
    pub fn json_messages(&self) -> (Vec<JsonError>, Vec<JsonWarning>) {
        let errors = self
            .validation
            .errors
            .iter()
            .map(validation_error_to_json)
            .collect();
        let warnings = self
            .validation
            .warnings
            .iter()
            .map(validation_warning_to_json)
            .collect();
        (errors, warnings)
    }
}

/// Resolves the spec from `config` and `overrides` and validates it.
pub(crate) fn prepare(
    config: Option<&Path>,
    overrides: &SpecOverrides,
) -> Result<Prepared, InputError> {
    let load = resolve_spec(config, overrides)?;
    let validation = validate_spec(&load.spec);
    let spec_hash = canonical_spec_hash(&load.spec).unwrap_or_else(|_| "unknown".to_string());
    Ok(Prepared {
        load,
        validation,
        spec_hash,
    })
}

/// Prints a load failure as a JSON failure envelope.
pub(crate) fn print_input_error_json(
    error: &InputError,
    config: Option<&Path>,
) -> anyhow::Result<()> {
    let file = config.map(|p| p.display().to_string());
    let error = input_error_to_json(error, file.as_deref());
    CommandOutput::<()>::failure(vec![error], vec![], None, None).print()
}

/// Prints where the spec came from and its hash.
pub(crate) fn print_source(load: &LoadResult, spec_hash: &str) {
    let overridden = if load.overridden { " + overrides" } else { "" };
    println!(
        "{} {}{} ({})",
        "Source:".dimmed(),
        load.source,
        overridden,
        short_hash(spec_hash)
    );
}

/// Prints validation errors and warnings to the console.
pub(crate) fn print_validation_results(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

/// First 16 hex digits of a hash, for display.
pub(crate) fn short_hash(hash: &str) -> &str {
    hash.get(..16).unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("0123456789abcdef0123"), "0123456789abcdef");
        assert_eq!(short_hash("abc"), "abc");
    }

    #[test]
    fn test_prepare_defaults_is_valid() {
        let prepared = prepare(None, &SpecOverrides::default()).unwrap();
        assert!(prepared.validation.is_ok());
        assert_eq!(prepared.spec_hash.len(), 64);
        let (errors, warnings) = prepared.json_messages();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_prepare_reports_range_error() {
        let overrides = SpecOverrides {
            duration: Some(30.0),
            gate: Some("imply".to_string()),
            ..SpecOverrides::default()
        };
        let prepared = prepare(None, &overrides).unwrap();
        assert!(!prepared.validation.is_ok());
        let (errors, warnings) = prepared.json_messages();
        assert_eq!(errors[0].code, "E002");
        assert_eq!(warnings[0].code, "W002");
    }
}
