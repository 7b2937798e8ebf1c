//! gatewave End-to-End Test Infrastructure
//!
//! Integration tests for the full pipeline, spec in and files out:
//!
//! - Rendering: spec -> PNG/PDF files with the expected names and content
//! - Validation: out-of-range specs are refused, unknown names only warn
//! - **Determinism**: byte-identical exports across repeated runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p gatewave-tests
//! ```

pub mod determinism;
pub mod fixtures;
pub mod format_validators;

pub use determinism::{verify_determinism, DeterminismResult, DiffInfo};
pub use format_validators::{validate_pdf, validate_png, FormatError, PdfInfo, PngInfo};
