//! JSON parsing
//!
//! Thin wrapper over serde_json; malformed input surfaces as
//! [`ParseError::InvalidJson`] for the caller to display.

use serde_json::Value;

use super::ParseError;

/// Parse raw JSON text into a value.
pub fn parse_json(text: &str) -> Result<Value, ParseError> {
    serde_json::from_str(text).map_err(|e| ParseError::InvalidJson(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        assert_eq!(parse_json(r#"{"a": 1}"#).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_parse_array() {
        let value = parse_json(r#"[{"a": 1}, {"a": 2}]"#).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_malformed_input_fails() {
        let err = parse_json("{invalid").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
        assert!(err.to_string().starts_with("invalid JSON"));
    }
}
