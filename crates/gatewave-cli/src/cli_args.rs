//! CLI argument definitions for the gatewave command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Subcommand)]` and `#[derive(Args)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use gatewave_cli::input::SpecOverrides;
use std::path::PathBuf;

/// gatewave - three-input logic gate signal visualizer
#[derive(Parser)]
#[command(name = "gatewave")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Spec source and per-field overrides, shared by every spec-driven command.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct SpecArgs {
    /// Path to a JSON config file (default: built-in defaults)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Time window in seconds (5-20)
    #[arg(long)]
    pub duration: Option<f64>,

    /// Gate type (AND, OR, NAND, NOR, XOR)
    #[arg(short, long)]
    pub gate: Option<String>,

    /// Pattern for input A (clock_pulse, half_duration_high, constant_high, constant_low)
    #[arg(long)]
    pub a_pattern: Option<String>,

    /// Clock frequency for input A in Hz (0.5-5.0)
    #[arg(long)]
    pub a_frequency: Option<f64>,

    /// Pattern for input C
    #[arg(long)]
    pub c_pattern: Option<String>,

    /// Clock frequency for input C in Hz (0.5-5.0)
    #[arg(long)]
    pub c_frequency: Option<f64>,

    /// Number of time samples
    #[arg(long)]
    pub samples: Option<usize>,
}

impl SpecArgs {
    /// The override flags as a [`SpecOverrides`].
    pub fn overrides(&self) -> SpecOverrides {
        SpecOverrides {
            duration: self.duration,
            sample_count: self.samples,
            gate: self.gate.clone(),
            a_pattern: self.a_pattern.clone(),
            a_frequency: self.a_frequency,
            c_pattern: self.c_pattern.clone(),
            c_frequency: self.c_frequency,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render the three-panel waveform figure to PNG and/or PDF
    Render {
        #[command(flatten)]
        spec: SpecArgs,

        /// Output format
        #[arg(short, long, default_value = "all", value_parser = ["png", "pdf", "all"])]
        format: String,

        /// Output directory (default: current directory)
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Raster resolution for PNG output (36-600)
        #[arg(long, default_value_t = gatewave_render::DEFAULT_DPI)]
        dpi: f64,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print the truth table of a gate
    Table {
        /// Gate type (AND, OR, NAND, NOR, XOR)
        #[arg(short, long, default_value = "AND")]
        gate: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Print case notes, waveform summaries and the truth table
    Report {
        #[command(flatten)]
        spec: SpecArgs,

        /// Emit the full pass (time axis, all signals, table) as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a spec without rendering
    Validate {
        #[command(flatten)]
        spec: SpecArgs,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Write the default spec as a JSON config file
    Template {
        /// Output file (default: print to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}
