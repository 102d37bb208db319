//! First-row schema inference

use serde_json::Value;
use tracing::debug;

use super::formats::classify_string;
use super::types::{ColumnTypeMap, FieldType};
use crate::parse::Row;

/// Number of rows consulted when the first row holds a null: the first row
/// plus up to nine fallback rows.
pub const NULL_SCAN_WINDOW: usize = 10;

/// Error during schema inference
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// No rows provided
    #[error("no rows provided for inference")]
    NoRows,
}

/// Infer a schema from parsed rows.
///
/// The first row's keys seed the schema, one semantic type per field. A null
/// value falls back to scanning the next nine rows for a non-null sample and
/// adopting its runtime type, defaulting to string. Rows beyond the scan
/// window never influence the result, so inference over the same row
/// sequence is deterministic.
///
/// Numbers follow their JSON representation: i64/u64 values infer as
/// `integer`, any float representation infers as `float` even when it is
/// whole-valued (`2.0` is a float, not an integer).
///
/// # Errors
///
/// Returns [`InferenceError::NoRows`] when `rows` is empty.
pub fn infer_schema(rows: &[Row]) -> Result<ColumnTypeMap, InferenceError> {
    let first = rows.first().ok_or(InferenceError::NoRows)?;

    let mut fields = Vec::with_capacity(first.len());
    for (name, value) in first {
        let field_type = match value {
            Value::Null => scan_for_fallback(rows, name),
            other => infer_value(other),
        };
        fields.push((name.clone(), field_type));
    }

    debug!(fields = fields.len(), rows = rows.len(), "schema inferred");
    Ok(ColumnTypeMap::from_fields(fields))
}

/// Infer the semantic type of a single value
fn infer_value(value: &Value) -> FieldType {
    match value {
        Value::String(s) => classify_string(s),
        Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                FieldType::Integer
            } else {
                FieldType::Float
            }
        }
        Value::Bool(_) => FieldType::Boolean,
        Value::Array(_) => FieldType::Array,
        Value::Object(_) => FieldType::Object,
        Value::Null => FieldType::String,
    }
}

/// Scan rows 1..10 for a non-null sample of `field` and adopt its coarse
/// runtime type. String samples stay plain strings; semantic string formats
/// are only detected on the first row.
fn scan_for_fallback(rows: &[Row], field: &str) -> FieldType {
    for row in rows.iter().take(NULL_SCAN_WINDOW).skip(1) {
        match row.get(field) {
            Some(Value::Null) | None => continue,
            Some(Value::String(_)) => return FieldType::String,
            Some(other) => return infer_value(other),
        }
    }
    FieldType::String
}
