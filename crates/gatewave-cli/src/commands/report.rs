//! Report command implementation
//!
//! Prints the analysis of one pass: gate description, per-case notes,
//! waveform summaries and the truth table. With `--json` the whole pass is
//! emitted, sample values included.

use anyhow::{Context, Result};
use colored::Colorize;
use gatewave_signal::{generate, AnalysisPass, CaseNote, NoteTone};
use gatewave_spec::BackendError;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, CommandOutput, JsonError, NamedSummary};
use super::reporting::{self, prepare, print_input_error_json};
use crate::input::SpecOverrides;

/// JSON result of the report command.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResult {
    /// Summaries of the inputs and each case output
    pub summaries: Vec<NamedSummary>,
    /// The full pass
    pub pass: AnalysisPass,
}

/// Waveform summaries of the generated inputs and every case output.
pub fn summaries(pass: &AnalysisPass) -> Vec<NamedSummary> {
    let mut out = vec![
        NamedSummary {
            name: "input_a".to_string(),
            summary: pass.signal_a.summary(),
        },
        NamedSummary {
            name: "input_c".to_string(),
            summary: pass.signal_c.summary(),
        },
    ];
    for case in &pass.cases {
        out.push(NamedSummary {
            name: format!("case_{}.output", case.kind.letter()),
            summary: case.output.summary(),
        });
    }
    out
}

/// Run the report command
///
/// # Arguments
/// * `config` - Optional path to a JSON config file
/// * `overrides` - Per-field overrides from the command line
/// * `json_output` - Whether to output the full pass as JSON
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

fn run_human(config: Option<&Path>, overrides: &SpecOverrides) -> Result<ExitCode> {
    let target = config
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "defaults".to_string());
    println!("{} {}", "Report for:".cyan().bold(), target);

    let prepared = prepare(config, overrides)
        .with_context(|| format!("Failed to load spec: {}", target))?;
    reporting::print_source(&prepared.load, &prepared.spec_hash);
    reporting::print_validation_results(&prepared.validation);
    if !prepared.validation.is_ok() {
        println!(
            "\n{} Spec has {} error(s)",
            "FAILED".red().bold(),
            prepared.validation.errors.len()
        );
        return Ok(ExitCode::from(1));
    }

    let pass = match generate(&prepared.load.spec) {
        Ok(pass) => pass,
        Err(e) => {
            println!(
                "\n{} [{}] {}",
                "GENERATION FAILED".red().bold(),
                e.code(),
                e.message()
            );
            return Ok(ExitCode::from(1));
        }
    };

    println!("\n{} {}", "Gate:".cyan().bold(), pass.gate);
    if !pass.description.is_empty() {
        println!("  {}", pass.description);
    }

    println!("\n{}", "Cases:".cyan().bold());
    for note in &pass.notes {
        print_note(note);
    }

    println!("\n{}", "Waveforms:".cyan().bold());
    for named in summaries(&pass) {
        let s = named.summary;
        println!(
            "  {:<16} {:>5}/{:<5} HIGH  duty {:>5.1}%  {} rising",
            named.name,
            s.high_samples,
            s.samples,
            s.duty_ratio * 100.0,
            s.rising_edges
        );
    }

    println!("\n{}", pass.truth_table.caption().cyan().bold());
    print!("{}", pass.truth_table);
    println!(
        "\n{} {}",
        "Waveform hash:".dimmed(),
        reporting::short_hash(&pass.waveform_hash)
    );
    Ok(ExitCode::SUCCESS)
}

fn print_note(note: &CaseNote) {
    let (marker, heading) = match note.tone {
        NoteTone::Info => ("i".cyan(), note.heading.cyan()),
        NoteTone::Success => ("+".green(), note.heading.green()),
        NoteTone::Warning => ("!".yellow(), note.heading.yellow()),
    };
    println!("  {} {}", marker, heading.bold());
    println!("    {}", note.text.dimmed());
}

fn run_json(config: Option<&Path>, overrides: &SpecOverrides) -> Result<ExitCode> {
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

    let output = if !prepared.validation.is_ok() {
        CommandOutput::failure(errors, warnings, spec_hash, source_hash)
    } else {
        match generate(&prepared.load.spec) {
            Ok(pass) => {
                let result = ReportResult {
                    summaries: summaries(&pass),
                    pass,
                };
                CommandOutput::success(result, spec_hash, source_hash, warnings)
            }
            Err(e) => {
                let error = JsonError::new(
                    error_codes::GENERATION_ERROR,
                    format!("[{}] {}", e.code(), e.message()),
                );
                CommandOutput::failure(vec![error], warnings, spec_hash, source_hash)
            }
        }
    };
    output.print()?;

    if output.success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
