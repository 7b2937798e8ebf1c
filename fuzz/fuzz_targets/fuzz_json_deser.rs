#![no_main]

use gatewave_signal::generate;
use gatewave_spec::{canonical_spec_hash, validate_spec, ExperimentSpec};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(spec) = ExperimentSpec::from_json(text) else {
        return;
    };

    let _ = canonical_spec_hash(&spec);
    let result = validate_spec(&spec);

    // Valid specs must always produce a pass of the requested length.
    if result.is_ok() {
        let pass = generate(&spec).expect("valid spec generates");
        assert_eq!(pass.time.len(), spec.sample_count);
        for case in &pass.cases {
            assert_eq!(case.output.len(), spec.sample_count);
        }
    }

    // Round trip through JSON keeps the spec.
    if let Ok(json) = spec.to_json() {
        if let Ok(again) = ExperimentSpec::from_json(&json) {
            assert_eq!(canonical_spec_hash(&again).ok(), canonical_spec_hash(&spec).ok());
        }
    }
});
