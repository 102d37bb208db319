//! Structured parsers
//!
//! Converts raw text in a supported format (CSV, JSON, XML) into an ordered
//! sequence of row records. Each row is a mapping from field name to a
//! dynamically typed value; the field set may vary row to row.

pub mod csv;
pub mod json;
pub mod xml;

use serde_json::Value;

/// A single parsed record: field name -> dynamically typed value.
///
/// Key order follows the source (serde_json is built with `preserve_order`),
/// which downstream schema inference relies on.
pub type Row = serde_json::Map<String, Value>;

/// Error during parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Input contained no data rows
    #[error("empty input: no data rows found")]
    EmptyInput,

    /// JSON parsing error
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// XML parsing error
    #[error("invalid XML format: {0}")]
    InvalidXml(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(e: serde_json::Error) -> Self {
        ParseError::InvalidJson(e.to_string())
    }
}

/// Coerce a raw string token to a narrower value using lexical heuristics.
///
/// `"true"` / `"false"` (case-insensitive) become booleans, numeric-looking
/// tokens become numbers (integer first, then float), everything else stays
/// a string. Empty tokens stay strings.
pub(crate) fn coerce_scalar(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::String(trimmed.to_string());
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }

    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Number(i.into());
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        // from_f64 rejects NaN and infinities, so tokens like "inf" fall
        // through and remain strings
        if let Some(n) = serde_json::Number::from_f64(f) {
            return Value::Number(n);
        }
    }

    Value::String(trimmed.to_string())
}
