//! gatewave Experiment Spec Library
//!
//! Types, validation, and hashing for gatewave experiment specs. A spec is a
//! small JSON document that fully determines one rendering pass: the time
//! window, the two generated inputs (A and C), and the gate under study.
//!
//! # Example
//!
//! ```
//! use gatewave_spec::{ExperimentSpec, GateType, SignalSpec, validate_spec};
//!
//! let spec = ExperimentSpec::builder()
//!     .duration(12.0)
//!     .signal_a(SignalSpec::clock(2.0))
//!     .gate(GateType::Xor)
//!     .build();
//!
//! assert!(validate_spec(&spec).is_ok());
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`gate`]: Gate type selector
//! - [`hash`]: Canonical hashing
//! - [`pattern`]: Input signal patterns
//! - [`spec`]: Main spec type and builder
//! - [`validation`]: Range and name checks

pub mod error;
pub mod gate;
pub mod hash;
pub mod pattern;
pub mod spec;
pub mod validation;

pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use gate::GateType;
pub use hash::{canonical_spec_hash, canonical_value_hash, canonicalize_json};
pub use pattern::{Pattern, SignalSpec, DEFAULT_FREQUENCY};
pub use spec::{
    ExperimentSpec, ExperimentSpecBuilder, DEFAULT_DURATION_SECONDS, DEFAULT_SAMPLE_COUNT,
    DURATION_RANGE, DURATION_STEP, FREQUENCY_RANGE, FREQUENCY_STEP, SAMPLE_COUNT_RANGE,
    SPEC_VERSION,
};
pub use validation::validate_spec;
