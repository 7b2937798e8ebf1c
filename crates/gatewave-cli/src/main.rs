//! gatewave CLI - command-line interface for the logic gate visualizer
//!
//! This binary provides commands for rendering waveform figures, printing
//! truth tables and reports, and validating experiment specs.

mod cli_args;

use clap::Parser;
use std::process::ExitCode;

use cli_args::{Cli, Commands};
use gatewave_cli::commands;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            spec,
            format,
            out_dir,
            dpi,
            json,
        } => commands::render::run(
            spec.config.as_deref(),
            &spec.overrides(),
            &commands::render::RenderArgs {
                format: &format,
                out_dir: &out_dir,
                dpi,
            },
            json,
        ),
        Commands::Table { gate, json } => commands::table::run(&gate, json),
        Commands::Report { spec, json } => {
            commands::report::run(spec.config.as_deref(), &spec.overrides(), json)
        }
        Commands::Validate { spec, json } => {
            commands::validate::run(spec.config.as_deref(), &spec.overrides(), json)
        }
        Commands::Template {
            output,
            force,
            json,
        } => commands::template::run(output.as_deref(), force, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parses_render_defaults() {
        let cli = Cli::try_parse_from(["gatewave", "render"]).unwrap();
        match cli.command {
            Commands::Render {
                spec,
                format,
                out_dir,
                dpi,
                json,
            } => {
                assert!(spec.config.is_none());
                assert!(spec.overrides().is_empty());
                assert_eq!(format, "all");
                assert_eq!(out_dir, PathBuf::from("."));
                assert_eq!(dpi, 100.0);
                assert!(!json);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_render_overrides() {
        let cli = Cli::try_parse_from([
            "gatewave",
            "render",
            "--config",
            "spec.json",
            "--gate",
            "xor",
            "--a-frequency",
            "2.5",
            "--c-pattern",
            "clock_pulse",
            "--duration",
            "15",
            "--samples",
            "500",
            "--format",
            "png",
            "--dpi",
            "150",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                spec, format, dpi, ..
            } => {
                assert_eq!(spec.config, Some(PathBuf::from("spec.json")));
                let overrides = spec.overrides();
                assert_eq!(overrides.gate.as_deref(), Some("xor"));
                assert_eq!(overrides.a_frequency, Some(2.5));
                assert_eq!(overrides.c_pattern.as_deref(), Some("clock_pulse"));
                assert_eq!(overrides.duration, Some(15.0));
                assert_eq!(overrides.sample_count, Some(500));
                assert_eq!(format, "png");
                assert_eq!(dpi, 150.0);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["gatewave", "render", "--format", "svg"]).is_err());
    }

    #[test]
    fn test_cli_parses_table() {
        let cli = Cli::try_parse_from(["gatewave", "table", "--gate", "NOR", "--json"]).unwrap();
        match cli.command {
            Commands::Table { gate, json } => {
                assert_eq!(gate, "NOR");
                assert!(json);
            }
            _ => panic!("expected table command"),
        }
    }

    #[test]
    fn test_cli_parses_validate_with_json() {
        let cli =
            Cli::try_parse_from(["gatewave", "validate", "-c", "spec.json", "--json"]).unwrap();
        match cli.command {
            Commands::Validate { spec, json } => {
                assert_eq!(spec.config, Some(PathBuf::from("spec.json")));
                assert!(json);
            }
            _ => panic!("expected validate command"),
        }
    }

    #[test]
    fn test_cli_parses_template() {
        let cli =
            Cli::try_parse_from(["gatewave", "template", "-o", "out.json", "--force"]).unwrap();
        match cli.command {
            Commands::Template {
                output,
                force,
                json,
            } => {
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(force);
                assert!(!json);
            }
            _ => panic!("expected template command"),
        }
    }

    #[test]
    fn test_cli_parses_report() {
        let cli =
            Cli::try_parse_from(["gatewave", "report", "--a-pattern", "constant_high"])
                .unwrap();
        match cli.command {
            Commands::Report { spec, json } => {
                assert_eq!(spec.a_pattern.as_deref(), Some("constant_high"));
                assert!(!json);
            }
            _ => panic!("expected report command"),
        }
    }
}
