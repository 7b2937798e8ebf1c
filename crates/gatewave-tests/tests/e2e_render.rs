//! End-to-End Render Tests for gatewave
//!
//! Tests verify:
//! - The render command writes correctly named PNG and PDF files
//! - Exported files are well formed and carry the expected content
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gatewave-tests --test e2e_render
//! ```

use gatewave_cli::commands::render::{produce, run, RenderArgs};
use gatewave_cli::input::SpecOverrides;
use gatewave_render::{render_pdf, render_png, ExportFormat, Figure, RenderOptions};
use gatewave_signal::generate;
use gatewave_spec::GateType;
use gatewave_tests::fixtures::{fast_options, spec_for_gate, two_clock_spec, write_config};
use gatewave_tests::format_validators::{decode_rgba, validate_pdf, validate_png};
use std::fs;
use std::process::ExitCode;
use tempfile::tempdir;

#[test]
fn test_render_command_writes_both_formats() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "xor.json", &two_clock_spec(GateType::Xor));
    let out_dir = dir.path().join("out");
    let args = RenderArgs {
        format: "all",
        out_dir: &out_dir,
        dpi: 36.0,
    };

    let code = run(Some(&config), &SpecOverrides::default(), &args, true).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let png = fs::read(out_dir.join("logic_gate_xor_visualization.png")).unwrap();
    let info = validate_png(&png).unwrap();
    assert_eq!((info.width, info.height), (432, 504));
    assert_eq!(info.color_type, 6);

    let pdf = fs::read(out_dir.join("logic_gate_xor_visualization.pdf")).unwrap();
    let info = validate_pdf(&pdf).unwrap();
    assert_eq!(info.page_count, 1);
    assert_eq!(info.media_box, Some((864.0, 1008.0)));
}

#[test]
fn test_overrides_change_output_name() {
    let dir = tempdir().unwrap();
    let overrides = SpecOverrides {
        gate: Some("nand".to_string()),
        sample_count: Some(200),
        ..SpecOverrides::default()
    };
    let args = RenderArgs {
        format: "pdf",
        out_dir: dir.path(),
        dpi: 100.0,
    };
    let code = run(None, &overrides, &args, false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);
    assert!(dir.path().join("logic_gate_nand_visualization.pdf").is_file());
}

#[test]
fn test_unrecognized_gate_renders_flat_output() {
    let dir = tempdir().unwrap();
    let spec = spec_for_gate("Imply");
    let (pass, written) = produce(&spec, &ExportFormat::ALL, dir.path(), &fast_options()).unwrap();

    for case in &pass.cases {
        assert_eq!(case.output.uniform_level(), Some(false));
    }
    let names: Vec<String> = written
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        names,
        [
            "logic_gate_imply_visualization.png",
            "logic_gate_imply_visualization.pdf"
        ]
    );
}

#[test]
fn test_pdf_carries_titles_and_legend() {
    let figure = Figure::from_pass(&generate(&spec_for_gate(GateType::Or)).unwrap());
    let pdf = render_pdf(&figure, &RenderOptions::default());
    let info = validate_pdf(&pdf.bytes).unwrap();
    assert_eq!(info.version, "1.4");

    for expected in [
        "a. Output When Input A = LOW (OR Gate)",
        "b. Output When Input B = HIGH (OR Gate)",
        "c. Output When Input B & C = LOW (OR Gate)",
        "Input A (Forced LOW)",
        "Input C (Original)",
        "Input B & C (Forced LOW)",
        "OUTPUT X (Result)",
        "Time (seconds)",
        "HIGH (1)",
        "LOW (0)",
    ] {
        assert!(
            info.text_runs.iter().any(|run| run == expected),
            "missing text run: {}",
            expected
        );
    }
}

#[test]
fn test_png_is_mostly_white_with_green_output() {
    let figure = Figure::from_pass(&generate(&spec_for_gate(GateType::And)).unwrap());
    let png = render_png(&figure, &RenderOptions::default()).unwrap();
    let (width, height, pixels) = decode_rgba(&png.bytes).unwrap();
    assert_eq!((width, height), (1200, 1400));

    let mut white = 0usize;
    let mut green = 0usize;
    for px in pixels.chunks_exact(4) {
        match (px[0], px[1], px[2]) {
            (255, 255, 255) => white += 1,
            (0, 128, 0) => green += 1,
            _ => {}
        }
        assert_eq!(px[3], 255);
    }
    let total = (width * height) as usize;
    assert!(white * 2 > total, "background should dominate");
    assert!(green > 0, "output line should be drawn");
}
