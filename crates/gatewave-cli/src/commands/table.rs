//! Table command implementation
//!
//! Prints the eight-row truth table of one gate with its caption and
//! description.

use anyhow::Result;
use colored::Colorize;
use gatewave_signal::{gate_description, TruthTable, COLUMNS};
use gatewave_spec::{GateType, WarningCode};
use std::process::ExitCode;

use super::json_output::{CommandOutput, JsonWarning, TableResult};

/// Builds the JSON result for `gate`.
pub fn table_result(gate: &GateType) -> TableResult {
    let table = TruthTable::new(gate);
    TableResult {
        gate: gate.to_string(),
        caption: table.caption(),
        description: gate_description(gate).to_string(),
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows: table.rows.iter().map(|r| r.bits()).collect(),
    }
}

/// Run the table command
///
/// # Arguments
/// * `gate` - Gate name (case-insensitive; unknown names give an all-zero table)
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(gate: &str, json_output: bool) -> Result<ExitCode> {
    let gate = GateType::parse(gate);

    if json_output {
        let mut warnings = Vec::new();
        if !gate.is_recognized() {
            warnings.push(
                JsonWarning::new(
                    WarningCode::UnrecognizedGate.code(),
                    format!("unrecognized gate '{}'", gate),
                )
                .with_path("gate"),
            );
        }
        CommandOutput::success(table_result(&gate), None, None, warnings).print()?;
        return Ok(ExitCode::SUCCESS);
    }

    let table = TruthTable::new(&gate);
    println!("{}", table.caption().cyan().bold());
    println!();
    print!("{}", table);

    let description = gate_description(&gate);
    if description.is_empty() {
        println!(
            "\n  {} unrecognized gate '{}'; every output is LOW",
            "!".yellow(),
            gate
        );
    } else {
        println!("\n{}", description.dimmed());
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_table_result_for_or() {
        let result = table_result(&GateType::Or);
        assert_eq!(result.gate, "OR");
        assert_eq!(result.columns, vec!["A", "B", "C", "X (Output)"]);
        assert_eq!(result.rows.len(), 8);
        assert_eq!(result.rows[0], [0, 0, 0, 0]);
        assert_eq!(result.rows[1], [0, 0, 1, 1]);
        assert_eq!(
            result.description,
            "Output is HIGH (1) when AT LEAST ONE input is HIGH (1)."
        );
    }

    #[test]
    fn test_unrecognized_gate_keeps_raw_name() {
        let result = table_result(&GateType::parse("Imply"));
        assert_eq!(result.gate, "Imply");
        assert!(result.description.is_empty());
        assert!(result.rows.iter().all(|r| r[3] == 0));
    }

    #[test]
    fn test_run_succeeds_for_any_name() {
        assert_eq!(run("xor", false).unwrap(), ExitCode::SUCCESS);
        assert_eq!(run("mux", true).unwrap(), ExitCode::SUCCESS);
    }
}
