//! End-to-End Determinism Tests for gatewave
//!
//! Tests verify:
//! - Repeated passes over one spec give identical waveforms
//! - Repeated PNG and PDF exports are byte-identical
//! - Hashes change when the gate changes
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gatewave-tests --test e2e_determinism
//! ```

use gatewave_render::{render_pdf, render_png, Figure, RenderOptions};
use gatewave_signal::generate;
use gatewave_spec::{canonical_spec_hash, ExperimentSpec, GateType};
use gatewave_tests::fixtures::{fast_options, gate_matrix, spec_for_gate, two_clock_spec};
use gatewave_tests::verify_determinism;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

fn figure(spec: &ExperimentSpec) -> Figure {
    Figure::from_pass(&generate(spec).unwrap())
}

// ============================================================================
// Waveforms
// ============================================================================

#[test]
fn test_pass_is_deterministic_for_every_gate() {
    for spec in gate_matrix() {
        let first = generate(&spec).unwrap();
        let second = generate(&spec).unwrap();
        assert_eq!(first.waveform_hash, second.waveform_hash);
        assert_eq!(first.to_json(false).unwrap(), second.to_json(false).unwrap());
    }
}

#[test]
fn test_waveform_hashes_differ_between_gates() {
    let hashes: HashSet<String> = GateType::KNOWN
        .into_iter()
        .map(|g| generate(&two_clock_spec(g)).unwrap().waveform_hash)
        .collect();
    assert_eq!(hashes.len(), GateType::KNOWN.len());
}

#[test]
fn test_spec_hash_ignores_key_order() {
    let a = ExperimentSpec::from_json(r#"{"gate": "OR", "duration_seconds": 12}"#).unwrap();
    let b = ExperimentSpec::from_json(r#"{"duration_seconds": 12, "gate": "or"}"#).unwrap();
    assert_eq!(
        canonical_spec_hash(&a).unwrap(),
        canonical_spec_hash(&b).unwrap()
    );
}

// ============================================================================
// Exports
// ============================================================================

#[test]
fn test_png_export_is_byte_identical() {
    let figure = figure(&two_clock_spec(GateType::Xor));
    let options = fast_options();
    let result = verify_determinism(|| render_png(&figure, &options).unwrap().bytes, 3);
    result.assert_deterministic();
    assert!(result.output_size > 0);
}

#[test]
fn test_pdf_export_is_byte_identical() {
    let figure = figure(&spec_for_gate(GateType::Nand));
    let options = RenderOptions::default();
    let result = verify_determinism(|| render_pdf(&figure, &options).bytes, 3);
    result.assert_deterministic();
    assert_eq!(result.hash, render_pdf(&figure, &options).hash);
}

#[test]
fn test_export_hash_matches_bytes() {
    let figure = figure(&spec_for_gate(GateType::Or));
    let png = render_png(&figure, &fast_options()).unwrap();
    assert_eq!(png.hash, blake3::hash(&png.bytes).to_hex().to_string());
    let pdf = render_pdf(&figure, &RenderOptions::default());
    assert_eq!(pdf.hash, blake3::hash(&pdf.bytes).to_hex().to_string());
}

#[test]
fn test_export_hashes_differ_between_gates() {
    let options = fast_options();
    let hashes: HashSet<String> = gate_matrix()
        .iter()
        .map(|spec| render_png(&figure(spec), &options).unwrap().hash)
        .collect();
    assert_eq!(hashes.len(), GateType::KNOWN.len());
}

#[test]
fn test_fresh_figures_render_identically() {
    let spec = two_clock_spec(GateType::Nor);
    let options = RenderOptions::default();
    let result = verify_determinism(|| render_pdf(&figure(&spec), &options).bytes, 2);
    result.assert_deterministic();
}
