//! CSV parsing
//!
//! Splits on newlines and commas with lexical value coercion. Quoted fields
//! and escaped commas are intentionally not handled; the source data this
//! library targets never quotes, and adding quote handling would change the
//! observable field boundaries.

use serde_json::Value;

use super::{ParseError, Row, coerce_scalar};

/// Parse CSV text into rows.
///
/// When `has_headers` is true (the usual case) the first non-blank line
/// supplies the field names; otherwise names are synthesized as
/// `column0, column1, ...`. Values beyond the header count are dropped and
/// missing trailing values become null.
///
/// # Errors
///
/// Returns [`ParseError::EmptyInput`] when no non-blank lines remain.
pub fn parse_csv(text: &str, has_headers: bool) -> Result<Vec<Row>, ParseError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (headers, data_lines): (Vec<String>, &[&str]) = if has_headers {
        let headers = lines[0]
            .split(',')
            .map(|h| h.trim().to_string())
            .collect();
        (headers, &lines[1..])
    } else {
        let width = lines[0].split(',').count();
        let headers = (0..width).map(|i| format!("column{i}")).collect();
        (headers, &lines[..])
    };

    let mut rows = Vec::with_capacity(data_lines.len());
    for line in data_lines {
        let values: Vec<&str> = line.split(',').collect();
        let mut row = Row::new();
        for (i, header) in headers.iter().enumerate() {
            let value = match values.get(i) {
                Some(raw) => coerce_scalar(raw),
                None => Value::Null,
            };
            row.insert(header.clone(), value);
        }
        rows.push(row);
    }

    Ok(rows)
}
