//! Canonical hashing of experiment specs.
//!
//! A spec hash is `hex(BLAKE3(canonical_json(spec)))`, where the canonical
//! form sorts object keys and drops insignificant whitespace. Two specs that
//! describe the same pass hash identically regardless of key order in the
//! source file.

use serde_json::Value;

use crate::error::SpecError;
use crate::spec::ExperimentSpec;

/// Computes the canonical BLAKE3 hash of a spec as 64 lowercase hex chars.
///
/// ```
/// use gatewave_spec::{canonical_spec_hash, ExperimentSpec};
///
/// let hash = canonical_spec_hash(&ExperimentSpec::default()).unwrap();
/// assert_eq!(hash.len(), 64);
/// ```
pub fn canonical_spec_hash(spec: &ExperimentSpec) -> Result<String, SpecError> {
    let value = spec.to_value()?;
    Ok(canonical_value_hash(&value))
}

/// Computes the canonical BLAKE3 hash of a JSON value.
pub fn canonical_value_hash(value: &Value) -> String {
    let canonical = canonicalize_json(value);
    blake3::hash(canonical.as_bytes()).to_hex().to_string()
}

/// Renders a JSON value with sorted keys and no whitespace.
pub fn canonicalize_json(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push('{');
            for (i, key) in keys.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_string(key, out);
                out.push(':');
                write_canonical(&map[key], out);
            }
            out.push('}');
        }
    }
}

/// Integers print as integers; integral floats collapse to integers so that
/// `10` and `10.0` hash the same.
fn format_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if !f.is_finite() => "null".to_string(),
        Some(f) if f == 0.0 => "0".to_string(),
        Some(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        Some(f) => format!("{}", f),
        None => "null".to_string(),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate::GateType;

    #[test]
    fn test_canonical_form_sorts_keys() {
        let value: Value = serde_json::from_str(r#"{"b": 1, "a": [true, null, "x"]}"#).unwrap();
        assert_eq!(canonicalize_json(&value), r#"{"a":[true,null,"x"],"b":1}"#);
    }

    #[test]
    fn test_integral_floats_collapse() {
        let a: Value = serde_json::from_str(r#"{"d": 10.0}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"d": 10}"#).unwrap();
        assert_eq!(canonical_value_hash(&a), canonical_value_hash(&b));
    }

    #[test]
    fn test_spec_hash_is_deterministic_and_sensitive() {
        let spec = ExperimentSpec::default();
        let h1 = canonical_spec_hash(&spec).unwrap();
        let h2 = canonical_spec_hash(&spec).unwrap();
        assert_eq!(h1, h2);
        assert!(h1.chars().all(|c| c.is_ascii_hexdigit()));

        let other = ExperimentSpec::builder().gate(GateType::Or).build();
        assert_ne!(h1, canonical_spec_hash(&other).unwrap());
    }

    #[test]
    fn test_key_order_does_not_change_hash() {
        let a = ExperimentSpec::from_json(r#"{"gate":"OR","duration_seconds":12}"#).unwrap();
        let b = ExperimentSpec::from_json(r#"{"duration_seconds":12,"gate":"or"}"#).unwrap();
        assert_eq!(
            canonical_spec_hash(&a).unwrap(),
            canonical_spec_hash(&b).unwrap()
        );
    }
}
