//! Schema inference
//!
//! Infers a per-field semantic type from parsed rows. The first row seeds
//! the schema; a null value falls back to a bounded scan of the following
//! rows. Semantic string formats (date, email, phone) are detected by regex.
//!
//! ## Example
//!
//! ```rust,ignore
//! use data_tooling_core::detect::detect_and_parse;
//! use data_tooling_core::inference::infer_schema;
//!
//! let detected = detect_and_parse("id,name,joined\n1,Bob,2024-01-05");
//! let schema = infer_schema(&detected.rows)?;
//! ```

mod classify;
mod formats;
mod inferrer;
mod types;

pub use classify::{DatasetKind, classify_dataset};
pub use formats::classify_string;
pub use inferrer::{InferenceError, NULL_SCAN_WINDOW, infer_schema};
pub use types::{ColumnTypeMap, FieldType, SchemaError};
