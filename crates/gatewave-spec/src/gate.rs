//! Gate type selector.

use serde::{Deserialize, Serialize};

/// Three-input boolean function applied to inputs A, B and C.
///
/// Like [`crate::Pattern`], unknown names are preserved in
/// [`GateType::Unrecognized`]; evaluating such a gate yields LOW everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GateType {
    /// `a AND b AND c`
    #[default]
    And,
    /// `a OR b OR c`
    Or,
    /// `NOT (a AND b AND c)`
    Nand,
    /// `NOT (a OR b OR c)`
    Nor,
    /// `a XOR b XOR c` (odd parity)
    Xor,
    /// Any other name.
    Unrecognized(String),
}

impl GateType {
    /// All recognized gate types in selection order.
    pub const KNOWN: [GateType; 5] = [
        GateType::And,
        GateType::Or,
        GateType::Nand,
        GateType::Nor,
        GateType::Xor,
    ];

    /// Parses a gate name, ignoring case and surrounding whitespace.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_uppercase().as_str() {
            "AND" => GateType::And,
            "OR" => GateType::Or,
            "NAND" => GateType::Nand,
            "NOR" => GateType::Nor,
            "XOR" => GateType::Xor,
            _ => GateType::Unrecognized(name.to_string()),
        }
    }

    /// Returns the uppercase gate name, or the raw name if unrecognized.
    pub fn as_str(&self) -> &str {
        match self {
            GateType::And => "AND",
            GateType::Or => "OR",
            GateType::Nand => "NAND",
            GateType::Nor => "NOR",
            GateType::Xor => "XOR",
            GateType::Unrecognized(name) => name,
        }
    }

    /// Returns true for every variant except [`GateType::Unrecognized`].
    pub fn is_recognized(&self) -> bool {
        !matches!(self, GateType::Unrecognized(_))
    }
}

impl From<String> for GateType {
    fn from(value: String) -> Self {
        GateType::parse(&value)
    }
}

impl From<&str> for GateType {
    fn from(value: &str) -> Self {
        GateType::parse(value)
    }
}

impl From<GateType> for String {
    fn from(value: GateType) -> Self {
        match value {
            GateType::Unrecognized(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for GateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
