//! Dataset kind classification
//!
//! Column-level heuristics used to drive downstream visualization and
//! generation choices: a date column marks a time series, a dataset of
//! non-numeric or low-cardinality string columns is categorical, anything
//! else is plain tabular data.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::types::{ColumnTypeMap, FieldType};
use crate::parse::Row;

/// Classified dataset kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    TimeSeries,
    Categorical,
    Tabular,
}

/// Classify a dataset from its rows and inferred schema.
pub fn classify_dataset(rows: &[Row], schema: &ColumnTypeMap) -> DatasetKind {
    if schema.iter().any(|(_, ty)| ty == FieldType::Date) {
        return DatasetKind::TimeSeries;
    }

    let categorical = schema.iter().all(|(name, ty)| match ty {
        FieldType::Boolean | FieldType::Email | FieldType::Phone => true,
        FieldType::String => is_low_cardinality(rows, name),
        _ => false,
    });

    if !schema.is_empty() && categorical {
        DatasetKind::Categorical
    } else {
        DatasetKind::Tabular
    }
}

/// A string column reads as categorical when its distinct values are few
/// relative to the row count.
fn is_low_cardinality(rows: &[Row], field: &str) -> bool {
    let threshold = (rows.len() / 5).max(10);
    let mut distinct = HashSet::new();
    for row in rows {
        if let Some(Value::String(s)) = row.get(field) {
            distinct.insert(s.as_str());
            if distinct.len() > threshold {
                return false;
            }
        }
    }
    true
}
