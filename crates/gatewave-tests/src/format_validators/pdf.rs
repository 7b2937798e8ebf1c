//! PDF file format validator.
//!
//! Checks the header, the trailer and the cross-reference table of an
//! uncompressed PDF and lists the text strings drawn on its pages.

use super::FormatError;

/// Information extracted from a PDF file.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfInfo {
    /// Version from the header, e.g. "1.4".
    pub version: String,
    /// Number of `/Type /Page` objects.
    pub page_count: usize,
    /// Page size in points from the first MediaBox.
    pub media_box: Option<(f64, f64)>,
    /// Literal strings shown with `Tj`, in content order.
    pub text_runs: Vec<String>,
}

/// Validate the PDF structure and extract page facts.
pub fn validate_pdf(data: &[u8]) -> Result<PdfInfo, FormatError> {
    if !data.starts_with(b"%PDF-") {
        return Err(FormatError::at_offset("PDF", "Missing %PDF- header", 0));
    }
    let text = String::from_utf8_lossy(data);
    let version = text[5..]
        .lines()
        .next()
        .map(|l| l.trim().to_string())
        .unwrap_or_default();

    if !text.trim_end().ends_with("%%EOF") {
        return Err(FormatError::new("PDF", "Missing %%EOF marker"));
    }

    let xref_offset = find_last(data, b"startxref")
        .map(|at| String::from_utf8_lossy(&data[at + b"startxref".len()..]).into_owned())
        .and_then(|tail| tail.split_whitespace().next().map(str::to_string))
        .and_then(|n| n.parse::<usize>().ok())
        .ok_or_else(|| FormatError::new("PDF", "Missing startxref offset"))?;
    let xref = data.get(xref_offset..).unwrap_or_default();
    if !xref.starts_with(b"xref") {
        return Err(FormatError::at_offset(
            "PDF",
            "startxref does not point at the xref table",
            xref_offset,
        ));
    }
    check_object_offsets(data, &String::from_utf8_lossy(xref))?;

    let page_count = text
        .match_indices("/Type /Page")
        .filter(|(at, m)| !text[at + m.len()..].starts_with('s'))
        .count();

    Ok(PdfInfo {
        version,
        page_count,
        media_box: media_box(&text),
        text_runs: text_runs(&text),
    })
}

fn find_last(data: &[u8], needle: &[u8]) -> Option<usize> {
    data.windows(needle.len()).rposition(|w| w == needle)
}

/// Every in-use xref entry must point at `N 0 obj`.
fn check_object_offsets(data: &[u8], xref: &str) -> Result<(), FormatError> {
    let entries = xref
        .lines()
        .skip(2)
        .take_while(|l| !l.starts_with("trailer"))
        .enumerate();
    for (number, line) in entries {
        let mut fields = line.split_whitespace();
        let (Some(offset), Some(_), Some(kind)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(FormatError::new("PDF", format!("Malformed xref entry: {}", line)));
        };
        if kind != "n" {
            continue;
        }
        let offset: usize = offset
            .parse()
            .map_err(|_| FormatError::new("PDF", format!("Bad xref offset: {}", offset)))?;
        let expected = format!("{} 0 obj", number);
        if !data.get(offset..).unwrap_or_default().starts_with(expected.as_bytes()) {
            return Err(FormatError::at_offset(
                "PDF",
                format!("xref entry for object {} is wrong", number),
                offset,
            ));
        }
    }
    Ok(())
}

fn media_box(text: &str) -> Option<(f64, f64)> {
    let at = text.find("/MediaBox [")? + "/MediaBox [".len();
    let end = text[at..].find(']')? + at;
    let nums: Vec<f64> = text[at..end]
        .split_whitespace()
        .filter_map(|n| n.parse().ok())
        .collect();
    match nums.as_slice() {
        [x0, y0, x1, y1] => Some((x1 - x0, y1 - y0)),
        _ => None,
    }
}

fn text_runs(text: &str) -> Vec<String> {
    let mut runs = Vec::new();
    for line in text.lines() {
        let Some(body) = line.strip_suffix(") Tj").and_then(|l| l.strip_prefix('(')) else {
            continue;
        };
        let mut run = String::new();
        let mut chars = body.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    run.push(next);
                }
            } else {
                run.push(c);
            }
        }
        runs.push(run);
    }
    runs
}
