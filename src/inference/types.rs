//! Schema types for inference output

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Semantic type tag inferred for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
    Email,
    Phone,
    Array,
    Object,
}

impl FieldType {
    /// The type tag as it appears in serialized schemas
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Email => "email",
            FieldType::Phone => "phone",
            FieldType::Array => "array",
            FieldType::Object => "object",
        }
    }

    /// Parse a type tag, accepting the `number` alias for float
    pub fn parse(tag: &str) -> Option<FieldType> {
        match tag {
            "string" => Some(FieldType::String),
            "integer" => Some(FieldType::Integer),
            "float" | "number" => Some(FieldType::Float),
            "boolean" => Some(FieldType::Boolean),
            "date" => Some(FieldType::Date),
            "email" => Some(FieldType::Email),
            "phone" => Some(FieldType::Phone),
            "array" => Some(FieldType::Array),
            "object" => Some(FieldType::Object),
            _ => None,
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error raised when a schema arriving as untyped JSON fails validation
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// Schema root was not a JSON object
    #[error("invalid schema: expected an object, found {0}")]
    NotAnObject(String),

    /// Schema contained no fields
    #[error("invalid schema: no fields defined")]
    Empty,

    /// Field name was empty
    #[error("invalid schema: empty field name")]
    EmptyFieldName,

    /// Field type value was not a recognized type tag
    #[error("invalid schema: unrecognized type {value:?} for field {field:?}")]
    InvalidFieldType { field: String, value: String },
}

/// The complete inferred schema for a dataset: one [`FieldType`] per field
/// name, in first-row key order. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnTypeMap {
    fields: Vec<(String, FieldType)>,
}

impl ColumnTypeMap {
    pub(crate) fn from_fields(fields: Vec<(String, FieldType)>) -> Self {
        Self { fields }
    }

    /// Iterate over fields in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.fields.iter().map(|(name, ty)| (name.as_str(), *ty))
    }

    /// Look up the type of a field by name
    pub fn get(&self, name: &str) -> Option<FieldType> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, ty)| *ty)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Build a schema from untyped JSON, validating it first.
    ///
    /// Accepts both the bare shape (`{"id": "integer"}`) and the wrapped
    /// shape (`{"id": {"type": "integer"}}`) that UI layers and AI responses
    /// produce.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] for a non-object root, an empty schema, an
    /// empty field name, or an unrecognized type tag.
    pub fn from_json(value: &Value) -> Result<Self, SchemaError> {
        let map = value
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject(json_type_name(value).to_string()))?;

        if map.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut fields = Vec::with_capacity(map.len());
        for (name, entry) in map {
            if name.trim().is_empty() {
                return Err(SchemaError::EmptyFieldName);
            }
            let tag = match entry {
                Value::String(tag) => tag.as_str(),
                Value::Object(inner) => inner
                    .get("type")
                    .and_then(Value::as_str)
                    .unwrap_or_default(),
                other => {
                    return Err(SchemaError::InvalidFieldType {
                        field: name.clone(),
                        value: other.to_string(),
                    });
                }
            };
            let field_type =
                FieldType::parse(tag).ok_or_else(|| SchemaError::InvalidFieldType {
                    field: name.clone(),
                    value: tag.to_string(),
                })?;
            fields.push((name.clone(), field_type));
        }

        Ok(Self { fields })
    }

    /// Serialize to the wrapped JSON shape (`{"id": {"type": "integer"}}`)
    pub fn to_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (name, ty) in &self.fields {
            map.insert(
                name.clone(),
                serde_json::json!({ "type": ty.as_str() }),
            );
        }
        Value::Object(map)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_bare_shape() {
        let schema = ColumnTypeMap::from_json(&json!({"id": "integer", "name": "string"})).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.get("id"), Some(FieldType::Integer));
        assert_eq!(schema.get("name"), Some(FieldType::String));
    }

    #[test]
    fn test_from_json_wrapped_shape() {
        let schema =
            ColumnTypeMap::from_json(&json!({"joined": {"type": "date"}})).unwrap();
        assert_eq!(schema.get("joined"), Some(FieldType::Date));
    }

    #[test]
    fn test_from_json_number_alias() {
        let schema = ColumnTypeMap::from_json(&json!({"score": "number"})).unwrap();
        assert_eq!(schema.get("score"), Some(FieldType::Float));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(matches!(
            ColumnTypeMap::from_json(&json!([1, 2])),
            Err(SchemaError::NotAnObject(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_empty_schema() {
        assert!(matches!(
            ColumnTypeMap::from_json(&json!({})),
            Err(SchemaError::Empty)
        ));
    }

    #[test]
    fn test_from_json_rejects_bad_type_tag() {
        let err = ColumnTypeMap::from_json(&json!({"x": "varchar"})).unwrap_err();
        assert!(matches!(err, SchemaError::InvalidFieldType { .. }));
    }

    #[test]
    fn test_from_json_rejects_empty_field_name() {
        assert!(matches!(
            ColumnTypeMap::from_json(&json!({"": "string"})),
            Err(SchemaError::EmptyFieldName)
        ));
    }

    #[test]
    fn test_to_json_round_trip() {
        let original = json!({"id": {"type": "integer"}, "name": {"type": "string"}});
        let schema = ColumnTypeMap::from_json(&original).unwrap();
        assert_eq!(schema.to_json(), original);
    }

    #[test]
    fn test_preserves_field_order() {
        let schema =
            ColumnTypeMap::from_json(&json!({"z": "string", "a": "integer", "m": "boolean"}))
                .unwrap();
        let names: Vec<&str> = schema.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }
}
