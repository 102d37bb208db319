//! Data Tooling Core - dataset inspection and schema tooling
//!
//! Provides the core pipeline behind the dataset tooling surface:
//! - Format auto-detection (JSON, XML, CSV, freeform text)
//! - Structured parsing into row records
//! - Heuristic schema inference (per-field semantic types)
//! - SQL CREATE TABLE synthesis from an inferred schema
//! - Dataset kind classification (time-series, categorical, tabular)
//! - Injected collaborator seams for AI completion and query execution
//!
//! Every pipeline stage is a pure, synchronous function over in-memory
//! values: reentrant and safe to call concurrently from independent
//! invocations.

pub mod client;
pub mod detect;
pub mod inference;
pub mod parse;
pub mod sql;

// Re-export commonly used types
pub use detect::{DataFormat, DetectedData, detect_and_parse};
pub use parse::csv::parse_csv;
pub use parse::json::parse_json;
pub use parse::xml::parse_xml;
pub use parse::{ParseError, Row};

pub use inference::{
    ColumnTypeMap, DatasetKind, FieldType, InferenceError, SchemaError, classify_dataset,
    infer_schema,
};
pub use sql::DdlSynthesizer;

// Re-export collaborator seams
pub use client::{
    ChatCompleter, ClientError, ConnectionConfig, QueryExecutor, QueryOutput, extract_json_payload,
};
