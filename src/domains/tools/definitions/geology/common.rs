//! Common utilities shared across geology tools.
//!
//! Result builders, argument parsing and the text rendering of
//! [`GeologyError`] at the MCP boundary.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::{error, warn};

use crate::domains::geology::GeologyError;

/// Parameters for tools that take no input.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Create a success result carrying both a text rendering and structured data.
pub fn structured_result<T: Serialize>(data: &T) -> CallToolResult {
    let value = match serde_json::to_value(data) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to serialize tool output: {}", e);
            return error_result(&format!("Error: failed to serialize result: {}", e));
        }
    };

    let text = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
    let mut result = success_result(text);
    result.structured_content = Some(value);
    result
}

/// Render a transport failure, prefixed with `context`.
pub fn transport_error_result(context: &str, err: &GeologyError) -> CallToolResult {
    error!("{}: {:?}", context, err);
    error_result(&format!("{}: {}", context, err.detail()))
}

/// Deserialize tool arguments into a parameter struct.
///
/// Missing arguments are treated as an empty object so that parameterless
/// tools and all-default parameter structs work.
pub fn parse_params<T: DeserializeOwned>(args: Option<JsonObject>) -> Result<T, McpError> {
    serde_json::from_value(serde_json::Value::Object(args.unwrap_or_default()))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Convert a tool result into the JSON shape returned by the HTTP transport.
#[cfg(feature = "http")]
pub fn http_response(result: CallToolResult) -> serde_json::Value {
    let mut response = serde_json::json!({
        "content": result.content,
        "isError": result.is_error.unwrap_or(false)
    });

    if let (Some(structured), Some(object)) =
        (result.structured_content, response.as_object_mut())
    {
        object.insert("structuredContent".to_string(), structured);
    }

    response
}

/// Parse HTTP arguments into a parameter struct.
#[cfg(feature = "http")]
pub fn parse_http_params<T: DeserializeOwned>(
    arguments: serde_json::Value,
) -> Result<T, crate::domains::tools::ToolError> {
    let arguments = match arguments {
        serde_json::Value::Null => serde_json::Value::Object(JsonObject::new()),
        other => other,
    };
    serde_json::from_value(arguments)
        .map_err(|e| crate::domains::tools::ToolError::invalid_arguments(e.to_string()))
}

/// Extract the first text block of a result (tests only).
#[cfg(test)]
pub fn result_text(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        rmcp::model::RawContent::Text(text) => &text.text,
        _ => panic!("Expected text content"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[serde(default = "default_name")]
        name: String,
    }

    fn default_name() -> String {
        "bedrock".to_string()
    }

    #[test]
    fn test_parse_params_missing_arguments() {
        let params: Sample = parse_params(None).unwrap();
        assert_eq!(params.name, "bedrock");
    }

    #[test]
    fn test_parse_params_wrong_type() {
        let mut args = JsonObject::new();
        args.insert("name".to_string(), serde_json::json!(42));
        assert!(parse_params::<Sample>(Some(args)).is_err());
    }

    #[test]
    fn test_structured_result() {
        let result = structured_result(&serde_json::json!({ "bedrock": { "layer_name": "x" } }));
        assert!(!result.is_error.unwrap_or(false));
        assert!(result.structured_content.is_some());
        assert!(result_text(&result).contains("\"layer_name\": \"x\""));
    }

    #[test]
    fn test_error_result_is_flagged() {
        let result = error_result("Error: nope");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(result_text(&result), "Error: nope");
    }
}
