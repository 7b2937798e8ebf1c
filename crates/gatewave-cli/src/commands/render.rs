//! Render command implementation
//!
//! Computes a pass for the resolved spec and writes the figure as PNG
//! and/or PDF.

use anyhow::{Context, Result};
use colored::Colorize;
use gatewave_render::{render_pass, ExportFormat, RenderError, RenderOptions};
use gatewave_signal::{generate, AnalysisPass};
use gatewave_spec::{BackendError, ExperimentSpec};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{error_codes, CommandOutput, JsonError, OutputFile, RenderResult};
use super::reporting::{self, prepare, print_input_error_json, short_hash};
use crate::input::SpecOverrides;

/// Output settings for the render command.
#[derive(Debug, Clone)]
pub struct RenderArgs<'a> {
    /// Format selector: "png", "pdf" or "all".
    pub format: &'a str,
    /// Directory the files are written into.
    pub out_dir: &'a Path,
    /// Raster resolution for PNG output.
    pub dpi: f64,
}

/// Maps the `--format` value to the formats to export.
pub fn parse_formats(format: &str) -> Vec<ExportFormat> {
    match format {
        "png" => vec![ExportFormat::Png],
        "pdf" => vec![ExportFormat::Pdf],
        _ => ExportFormat::ALL.to_vec(),
    }
}

/// One file written by [`produce`].
#[derive(Debug, Clone)]
pub struct WrittenFile {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub size: u64,
    pub hash: String,
}

impl From<&WrittenFile> for OutputFile {
    fn from(file: &WrittenFile) -> Self {
        Self {
            format: file.format.to_string(),
            path: file.path.display().to_string(),
            size: file.size,
            hash: file.hash.clone(),
        }
    }
}

/// Generates the pass and writes every requested format into `out_dir`.
pub fn produce(
    spec: &ExperimentSpec,
    formats: &[ExportFormat],
    out_dir: &Path,
    options: &RenderOptions,
) -> std::result::Result<(AnalysisPass, Vec<WrittenFile>), RenderError> {
    let pass = generate(spec)?;
    let artifacts = render_pass(&pass, formats, options)?;

    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in &artifacts {
        let path = artifact.write_to_dir(out_dir)?;
        written.push(WrittenFile {
            format: artifact.format,
            path,
            size: artifact.bytes.len() as u64,
            hash: artifact.hash.clone(),
        });
    }
    Ok((pass, written))
}

/// Run the render command
///
/// # Arguments
/// * `config` - Optional path to a JSON config file
/// * `overrides` - Per-field overrides from the command line
/// * `args` - Output format, directory and resolution
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 on success, 1 if the spec is invalid or rendering failed
pub fn run(
    config: Option<&Path>,
    overrides: &SpecOverrides,
    args: &RenderArgs<'_>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(config, overrides, args)
    } else {
        run_human(config, overrides, args)
    }
}

fn options_for(args: &RenderArgs<'_>) -> RenderOptions {
    RenderOptions {
        dpi: args.dpi,
        ..RenderOptions::default()
    }
}

/// Run render with human-readable (colored) output
fn run_human(
    config: Option<&Path>,
    overrides: &SpecOverrides,
    args: &RenderArgs<'_>,
) -> Result<ExitCode> {
    let start = Instant::now();
    let target = config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    println!("{} {}", "Rendering from:".cyan().bold(), target);
    println!("{} {}", "Output dir:".cyan().bold(), args.out_dir.display());

    let prepared = prepare(config, overrides)
        .with_context(|| format!("Failed to load spec: {}", target))?;
    reporting::print_source(&prepared.load, &prepared.spec_hash);
    println!(
        "{} {} ({} samples over {}s)",
        "Gate:".dimmed(),
        prepared.load.spec.gate,
        prepared.load.spec.sample_count,
        prepared.load.spec.duration_seconds
    );
    reporting::print_validation_results(&prepared.validation);

    if !prepared.validation.is_ok() {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            prepared.validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let formats = parse_formats(args.format);
    match produce(
        &prepared.load.spec,
        &formats,
        args.out_dir,
        &options_for(args),
    ) {
        Ok((pass, written)) => {
            println!("\n{}", "Outputs:".cyan().bold());
            for file in &written {
                println!(
                    "  {} {} {}",
                    file.path.display(),
                    format!("({} bytes)", file.size).dimmed(),
                    short_hash(&file.hash).dimmed()
                );
            }
            println!(
                "{} {}",
                "Waveform hash:".dimmed(),
                short_hash(&pass.waveform_hash)
            );
            println!(
                "\n{} Rendered {} file(s) in {}ms",
                "SUCCESS".green().bold(),
                written.len(),
                start.elapsed().as_millis()
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!(
                "\n{} [{}] {}",
                "RENDER FAILED".red().bold(),
                e.code(),
                e.message()
            );
            Ok(ExitCode::from(1))
        }
    }
}

/// Run render with machine-readable JSON output
fn run_json(
    config: Option<&Path>,
    overrides: &SpecOverrides,
    args: &RenderArgs<'_>,
) -> Result<ExitCode> {
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

    if !prepared.validation.is_ok() {
        CommandOutput::<RenderResult>::failure(errors, warnings, spec_hash, source_hash)
            .print()?;
        return Ok(ExitCode::from(1));
    }

    let formats = parse_formats(args.format);
    let output = match produce(
        &prepared.load.spec,
        &formats,
        args.out_dir,
        &options_for(args),
    ) {
        Ok((pass, written)) => {
            let result = RenderResult {
                gate: pass.gate.to_string(),
                dpi: args.dpi,
                outputs: written.iter().map(OutputFile::from).collect(),
                waveform_hash: pass.waveform_hash,
                duration_ms: start.elapsed().as_millis() as u64,
            };
            CommandOutput::success(result, spec_hash, source_hash, warnings)
        }
        Err(e) => {
            let code = match &e {
                RenderError::Io(_) => error_codes::FILE_WRITE,
                RenderError::Signal(_) => error_codes::GENERATION_ERROR,
                _ => error_codes::RENDER_ERROR,
            };
            let error = JsonError::new(code, format!("[{}] {}", e.code(), e.message()));
            CommandOutput::failure(vec![error], warnings, spec_hash, source_hash)
        }
    };
    output.print()?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
