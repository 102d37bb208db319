//! Collaborator seams
//!
//! The surrounding system talks to an AI completion service and a query
//! execution proxy. Both are modeled as injected traits so the inference and
//! synthesis core stays fully unit-testable without network access; the
//! HTTP implementations live with the host application.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error at a collaborator boundary
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Completion request failed
    #[error("completion error: {0}")]
    Completion(String),

    /// Query execution failed
    #[error("query error: {0}")]
    Query(String),

    /// The AI response contained no parseable JSON payload
    #[error("payload error: {0}")]
    Payload(String),
}

/// AI completion service: system/user prompt pair plus a model identifier,
/// returning free text expected to contain a JSON payload.
#[async_trait]
pub trait ChatCompleter: Send + Sync {
    async fn complete_chat(
        &self,
        system: &str,
        user: &str,
        model: &str,
    ) -> Result<String, ClientError>;
}

/// Connection settings handed to the query proxy. The core never interprets
/// these beyond passing them through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub account: String,
    pub database: String,
    pub username: String,
    #[serde(default)]
    pub warehouse: Option<String>,
    #[serde(default)]
    pub schema: Option<String>,
}

/// Result of executing a query through the proxy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryOutput {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Query execution proxy: a SQL string plus connection config, returning
/// columns and rows or a surfaced error.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute_query(
        &self,
        sql: &str,
        config: &ConnectionConfig,
    ) -> Result<QueryOutput, ClientError>;
}

/// Extract a JSON payload from an AI response.
///
/// Responses often fence the payload in a markdown code block; this strips
/// the fence when present, otherwise falls back to the first `{`/`[` through
/// the last `}`/`]` of the text.
///
/// # Errors
///
/// Returns [`ClientError::Payload`] when no parseable JSON is found.
pub fn extract_json_payload(text: &str) -> Result<Value, ClientError> {
    if let Some(fenced) = extract_fenced_block(text) {
        return serde_json::from_str(fenced.trim())
            .map_err(|e| ClientError::Payload(format!("fenced block is not valid JSON: {e}")));
    }

    let trimmed = text.trim();
    if let Ok(value) = serde_json::from_str(trimmed) {
        return Ok(value);
    }

    let start = trimmed.find(['{', '[']);
    let end = trimmed.rfind(['}', ']']);
    if let (Some(start), Some(end)) = (start, end)
        && start < end
    {
        return serde_json::from_str(&trimmed[start..=end])
            .map_err(|e| ClientError::Payload(format!("embedded payload is not valid JSON: {e}")));
    }

    Err(ClientError::Payload(
        "response contains no JSON payload".to_string(),
    ))
}

fn extract_fenced_block(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_fence = &text[open + 3..];
    // Skip an optional language tag on the fence line
    let body_start = after_fence.find('\n')? + 1;
    let body = &after_fence[body_start..];
    let close = body.find("```")?;
    Some(&body[..close])
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct CannedCompleter {
        response: String,
    }

    #[async_trait]
    impl ChatCompleter for CannedCompleter {
        async fn complete_chat(
            &self,
            _system: &str,
            _user: &str,
            _model: &str,
        ) -> Result<String, ClientError> {
            Ok(self.response.clone())
        }
    }

    struct CannedExecutor;

    #[async_trait]
    impl QueryExecutor for CannedExecutor {
        async fn execute_query(
            &self,
            sql: &str,
            _config: &ConnectionConfig,
        ) -> Result<QueryOutput, ClientError> {
            if sql.trim().is_empty() {
                return Err(ClientError::Query("empty statement".to_string()));
            }
            Ok(QueryOutput {
                columns: vec!["n".to_string()],
                rows: vec![vec![json!(1)]],
                error: None,
            })
        }
    }

    #[tokio::test]
    async fn test_completer_seam() {
        let completer = CannedCompleter {
            response: r#"{"columns": {"id": "integer"}}"#.to_string(),
        };
        let text = completer
            .complete_chat("You are a schema assistant", "infer this", "gpt-4o-mini")
            .await
            .unwrap();
        let payload = extract_json_payload(&text).unwrap();
        assert_eq!(payload["columns"]["id"], json!("integer"));
    }

    #[tokio::test]
    async fn test_executor_seam() {
        let output = CannedExecutor
            .execute_query("SELECT 1", &ConnectionConfig::default())
            .await
            .unwrap();
        assert_eq!(output.columns, vec!["n"]);
        assert_eq!(output.rows[0][0], json!(1));
    }

    #[test]
    fn test_extract_plain_json() {
        let payload = extract_json_payload(r#"{"a": 1}"#).unwrap();
        assert_eq!(payload, json!({"a": 1}));
    }

    #[test]
    fn test_extract_fenced_json() {
        let text = "Here is the schema:\n```json\n{\"a\": 1}\n```\nLet me know!";
        assert_eq!(extract_json_payload(text).unwrap(), json!({"a": 1}));
    }

    #[test]
    fn test_extract_fenced_without_language_tag() {
        let text = "```\n[1, 2]\n```";
        assert_eq!(extract_json_payload(text).unwrap(), json!([1, 2]));
    }

    #[test]
    fn test_extract_embedded_json() {
        let text = "The result is {\"ok\": true} as requested.";
        assert_eq!(extract_json_payload(text).unwrap(), json!({"ok": true}));
    }

    #[test]
    fn test_extract_fails_without_payload() {
        assert!(matches!(
            extract_json_payload("no json here"),
            Err(ClientError::Payload(_))
        ));
    }
}
