//! Format auto-detection
//!
//! Best-effort classification of raw text into a known structured format,
//! delegating to the matching parser. Candidates are tried in order (JSON,
//! XML, CSV); a candidate parse failure is swallowed and detection proceeds
//! to the next format. The final freeform-text fallback never fails.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::parse::csv::parse_csv;
use crate::parse::json::parse_json;
use crate::parse::xml::parse_xml;
use crate::parse::Row;

/// Detected input format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Json,
    Xml,
    Csv,
    Text,
}

impl std::fmt::Display for DataFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataFormat::Json => write!(f, "json"),
            DataFormat::Xml => write!(f, "xml"),
            DataFormat::Csv => write!(f, "csv"),
            DataFormat::Text => write!(f, "text"),
        }
    }
}

/// Result of format detection: the classified format and the parsed rows.
#[derive(Debug, Clone)]
pub struct DetectedData {
    pub format: DataFormat,
    pub rows: Vec<Row>,
}

/// Classify raw text and parse it with the matching parser.
///
/// This function never fails: the text fallback turns each non-blank line
/// into a `{text: line}` record, or the whole (trimmed) input into a single
/// record when it has one line.
pub fn detect_and_parse(raw: &str) -> DetectedData {
    let trimmed = raw.trim();

    if (trimmed.starts_with('{') && trimmed.ends_with('}'))
        || (trimmed.starts_with('[') && trimmed.ends_with(']'))
    {
        match parse_json(trimmed) {
            Ok(value) => {
                debug!(format = %DataFormat::Json, "detected structured input");
                return DetectedData {
                    format: DataFormat::Json,
                    rows: value_to_rows(value),
                };
            }
            Err(e) => warn!("JSON candidate rejected: {e}"),
        }
    }

    if trimmed.starts_with('<') && trimmed.ends_with('>') {
        match parse_xml(trimmed) {
            Ok(value) => {
                debug!(format = %DataFormat::Xml, "detected structured input");
                return DetectedData {
                    format: DataFormat::Xml,
                    rows: value_to_rows(value),
                };
            }
            Err(e) => warn!("XML candidate rejected: {e}"),
        }
    }

    if trimmed.contains(',') && trimmed.contains('\n') {
        match parse_csv(trimmed, true) {
            Ok(rows) => {
                debug!(format = %DataFormat::Csv, "detected structured input");
                return DetectedData {
                    format: DataFormat::Csv,
                    rows,
                };
            }
            Err(e) => warn!("CSV candidate rejected: {e}"),
        }
    }

    debug!(format = %DataFormat::Text, "falling back to freeform text");
    let lines: Vec<&str> = trimmed.lines().filter(|l| !l.trim().is_empty()).collect();
    let rows = if lines.len() > 1 {
        lines.iter().map(|l| text_row(l.trim())).collect()
    } else {
        vec![text_row(trimmed)]
    };

    DetectedData {
        format: DataFormat::Text,
        rows,
    }
}

/// Flatten a parsed JSON/XML value into rows. An object becomes a single
/// record; array elements become one record each, with scalar elements
/// wrapped under a `value` field.
fn value_to_rows(value: Value) -> Vec<Row> {
    match value {
        Value::Object(map) => vec![map],
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => map,
                other => {
                    let mut row = Row::new();
                    row.insert("value".to_string(), other);
                    row
                }
            })
            .collect(),
        other => {
            let mut row = Row::new();
            row.insert("value".to_string(), other);
            vec![row]
        }
    }
}

fn text_row(content: &str) -> Row {
    let mut row = Row::new();
    row.insert("text".to_string(), Value::String(content.to_string()));
    row
}
