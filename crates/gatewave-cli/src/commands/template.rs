//! Template command implementation
//!
//! Writes the default experiment spec as a JSON config file to start from.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use gatewave_spec::ExperimentSpec;
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{CommandOutput, TemplateResult};

/// The default spec as pretty JSON with a trailing newline.
pub fn template_json() -> Result<String> {
    let mut json = ExperimentSpec::default()
        .to_json_pretty()
        .context("Failed to serialize default spec")?;
    json.push('\n');
    Ok(json)
}

/// Run the template command
///
/// # Arguments
/// * `output` - Destination file; prints to stdout when None
/// * `force` - Overwrite an existing file
/// * `json_output` - Whether to output machine-readable JSON
pub fn run(output: Option<&Path>, force: bool, json_output: bool) -> Result<ExitCode> {
    let json = template_json()?;

    if let Some(path) = output {
        if path.exists() && !force {
            bail!(
                "Refusing to overwrite existing file: {} (use --force)",
                path.display()
            );
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(path, &json)
            .with_context(|| format!("Failed to write template: {}", path.display()))?;
    }

    if json_output {
        let result = TemplateResult {
            path: output.map(|p| p.display().to_string()),
            spec: ExperimentSpec::default().to_value()?,
        };
        CommandOutput::success(result, None, None, Vec::new()).print()?;
    } else if let Some(path) = output {
        println!(
            "{} {}",
            "Template written to:".green().bold(),
            path.display()
        );
    } else {
        print!("{}", json);
    }

    Ok(ExitCode::SUCCESS)
}
