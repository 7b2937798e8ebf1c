//! Truth table over the eight corner points of {0,1}^3.

use std::fmt;

use gatewave_spec::GateType;
use serde::Serialize;

use crate::gate::evaluate_scalar;

/// Column headers in display order.
pub const COLUMNS: [&str; 4] = ["A", "B", "C", "X (Output)"];

/// One row of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TruthRow {
    /// Input A.
    pub a: u8,
    /// Input B.
    pub b: u8,
    /// Input C.
    pub c: u8,
    /// Gate output.
    pub x: u8,
}

impl TruthRow {
    /// The row as `[a, b, c, x]`.
    pub fn bits(&self) -> [u8; 4] {
        [self.a, self.b, self.c, self.x]
    }
}

/// Truth table of a single gate type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TruthTable {
    /// Gate the table characterizes.
    pub gate: GateType,
    /// Rows in binary counting order (ABC = 000 .. 111).
    pub rows: [TruthRow; 8],
}

/// Corner points in binary counting order, A most significant.
pub fn corner_points() -> impl Iterator<Item = (u8, u8, u8)> {
    (0u8..8).map(|n| ((n >> 2) & 1, (n >> 1) & 1, n & 1))
}

impl TruthTable {
    /// Builds the table by evaluating the gate at every corner point.
    pub fn new(gate: &GateType) -> Self {
        let mut rows = [TruthRow {
            a: 0,
            b: 0,
            c: 0,
            x: 0,
        }; 8];
        for (row, (a, b, c)) in rows.iter_mut().zip(corner_points()) {
            *row = TruthRow {
                a,
                b,
                c,
                x: evaluate_scalar(a, b, c, gate),
            };
        }

        Self {
            gate: gate.clone(),
            rows,
        }
    }

    /// Output column, top to bottom.
    pub fn outputs(&self) -> [u8; 8] {
        self.rows.map(|r| r.x)
    }

    /// Looks up the output for an input triple.
    pub fn output_for(&self, a: u8, b: u8, c: u8) -> Option<u8> {
        self.rows
            .iter()
            .find(|r| r.a == a && r.b == b && r.c == c)
            .map(|r| r.x)
    }

    /// One-line caption, e.g. `Truth table for three-input AND gate (X = A AND B AND C):`.
    pub fn caption(&self) -> String {
        let g = self.gate.as_str();
        format!(
            "Truth table for three-input {g} gate (X = A {g} B {g} C):",
            g = g
        )
    }
}

/// Plain-text grid; each cell is padded to its header width.
impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths: Vec<usize> = COLUMNS.iter().map(|c| c.len() + 2).collect();
        let rule: String = widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("+");

        let header: Vec<String> = COLUMNS
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:^w$}", c, w = *w))
            .collect();
        writeln!(f, "|{}|", header.join("|"))?;
        writeln!(f, "|{}|", rule)?;

        for row in &self.rows {
            let cells: Vec<String> = row
                .bits()
                .iter()
                .zip(&widths)
                .map(|(bit, w)| format!("{:^w$}", bit, w = *w))
                .collect();
            writeln!(f, "|{}|", cells.join("|"))?;
        }
        Ok(())
    }
}
