//! SQL DDL synthesis
//!
//! Emits a PostgreSQL-flavored CREATE TABLE statement from an inferred
//! schema. All identifiers are quoted with internal quotes escaped by
//! doubling, so arbitrary field names cannot break out of the statement.

use crate::inference::{ColumnTypeMap, FieldType};

/// Synthesizer for CREATE TABLE statements.
pub struct DdlSynthesizer;

impl DdlSynthesizer {
    /// Emit a CREATE TABLE statement for the given schema.
    ///
    /// Columns appear in schema order. The first column named `id`
    /// (case-insensitively), ending in `_id`, or named `key` is marked
    /// `PRIMARY KEY` in place; no synthetic key column is ever added.
    /// Returns an empty string for an empty schema.
    ///
    /// # Example
    ///
    /// ```rust
    /// use data_tooling_core::inference::ColumnTypeMap;
    /// use data_tooling_core::sql::DdlSynthesizer;
    /// use serde_json::json;
    ///
    /// let schema = ColumnTypeMap::from_json(&json!({"id": "integer", "name": "string"})).unwrap();
    /// let sql = DdlSynthesizer::create_table(&schema, "users");
    /// assert!(sql.contains("\"id\" INTEGER PRIMARY KEY"));
    /// ```
    pub fn create_table(schema: &ColumnTypeMap, table_name: &str) -> String {
        if schema.is_empty() {
            return String::new();
        }

        let mut sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (\n",
            Self::quote_identifier(table_name)
        );

        let pk_index = schema
            .iter()
            .position(|(name, _)| Self::is_key_column(name));

        let mut column_defs = Vec::with_capacity(schema.len());
        for (i, (name, field_type)) in schema.iter().enumerate() {
            let mut col_def = format!(
                "  {} {}",
                Self::quote_identifier(name),
                Self::column_type(field_type)
            );
            if pk_index == Some(i) {
                col_def.push_str(" PRIMARY KEY");
            }
            column_defs.push(col_def);
        }

        sql.push_str(&column_defs.join(",\n"));
        sql.push_str("\n);\n");
        sql
    }

    /// Map a semantic field type to its storage column type
    pub fn column_type(field_type: FieldType) -> &'static str {
        match field_type {
            FieldType::String | FieldType::Email | FieldType::Phone => "TEXT",
            FieldType::Integer => "INTEGER",
            FieldType::Float => "REAL",
            FieldType::Boolean => "BOOLEAN",
            FieldType::Date => "TIMESTAMP",
            FieldType::Array | FieldType::Object => "JSONB",
        }
    }

    /// Whether a column name qualifies for primary-key promotion
    fn is_key_column(name: &str) -> bool {
        let lower = name.to_lowercase();
        lower == "id" || lower.ends_with("_id") || lower == "key"
    }

    /// Quote an identifier, escaping internal quotes by doubling
    fn quote_identifier(identifier: &str) -> String {
        format!("\"{}\"", identifier.replace('"', "\"\""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn schema(value: serde_json::Value) -> ColumnTypeMap {
        ColumnTypeMap::from_json(&value).unwrap()
    }

    #[test]
    fn test_create_table_basic() {
        let sql = DdlSynthesizer::create_table(
            &schema(json!({"id": "integer", "name": "string"})),
            "users",
        );
        assert_eq!(
            sql,
            "CREATE TABLE IF NOT EXISTS \"users\" (\n  \"id\" INTEGER PRIMARY KEY,\n  \"name\" TEXT\n);\n"
        );
    }

    #[test]
    fn test_exactly_one_primary_key() {
        let sql = DdlSynthesizer::create_table(
            &schema(json!({"id": "integer", "user_id": "integer", "key": "string"})),
            "links",
        );
        assert_eq!(sql.matches("PRIMARY KEY").count(), 1);
        assert!(sql.contains("\"id\" INTEGER PRIMARY KEY"));
    }

    #[test]
    fn test_id_suffix_promoted_when_no_id() {
        let sql = DdlSynthesizer::create_table(
            &schema(json!({"name": "string", "account_id": "integer"})),
            "accounts",
        );
        assert!(sql.contains("\"account_id\" INTEGER PRIMARY KEY"));
    }

    #[test]
    fn test_no_key_column_means_no_primary_key() {
        let sql = DdlSynthesizer::create_table(
            &schema(json!({"name": "string", "age": "integer"})),
            "people",
        );
        assert!(!sql.contains("PRIMARY KEY"));
    }

    #[test]
    fn test_type_mapping() {
        let sql = DdlSynthesizer::create_table(
            &schema(json!({
                "email": "email",
                "phone": "phone",
                "score": "float",
                "active": "boolean",
                "joined": "date",
                "tags": "array",
                "meta": "object"
            })),
            "contacts",
        );
        assert!(sql.contains("\"email\" TEXT"));
        assert!(sql.contains("\"phone\" TEXT"));
        assert!(sql.contains("\"score\" REAL"));
        assert!(sql.contains("\"active\" BOOLEAN"));
        assert!(sql.contains("\"joined\" TIMESTAMP"));
        assert!(sql.contains("\"tags\" JSONB"));
        assert!(sql.contains("\"meta\" JSONB"));
    }

    #[test]
    fn test_empty_schema_returns_empty_string() {
        let empty = ColumnTypeMap::from_fields(Vec::new());
        assert_eq!(DdlSynthesizer::create_table(&empty, "t"), "");
    }

    #[test]
    fn test_identifier_quoting_escapes_quotes() {
        let sql = DdlSynthesizer::create_table(
            &schema(json!({"weird\"name": "string"})),
            "ta\"ble",
        );
        assert!(sql.contains("\"ta\"\"ble\""));
        assert!(sql.contains("\"weird\"\"name\""));
    }

    #[test]
    fn test_case_insensitive_id_match() {
        let sql =
            DdlSynthesizer::create_table(&schema(json!({"ID": "integer"})), "t");
        assert!(sql.contains("\"ID\" INTEGER PRIMARY KEY"));
    }
}
