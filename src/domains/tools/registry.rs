//! Tool Registry - central registration and dispatch for all tools.
//!
//! This module provides:
//! - A registry of all available tools
//! - HTTP dispatch for tool calls (when http feature is enabled)
//! - Tool metadata for listing

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use crate::domains::geology::GeologyService;

#[cfg(feature = "http")]
use super::ToolError;
use super::definitions::{
    CapabilitiesTool, GeologyAtLocationTool, GeologyMapUrlTool, ListLayersTool, ServiceInfoTool,
};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
///
/// This struct provides a central point for:
/// - Listing all available tools
/// - Dispatching HTTP tool calls (when http feature is enabled)
pub struct ToolRegistry {
    #[cfg_attr(not(feature = "http"), allow(dead_code))]
    service: Arc<GeologyService>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(service: Arc<GeologyService>) -> Self {
        Self { service }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            ListLayersTool::NAME,
            GeologyAtLocationTool::NAME,
            CapabilitiesTool::NAME,
            GeologyMapUrlTool::NAME,
            ServiceInfoTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for all available tools.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            ListLayersTool::to_tool(),
            GeologyAtLocationTool::to_tool(),
            CapabilitiesTool::to_tool(),
            GeologyMapUrlTool::to_tool(),
            ServiceInfoTool::to_tool(),
        ]
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match name {
            ListLayersTool::NAME => ListLayersTool::http_handler(arguments),
            GeologyAtLocationTool::NAME => {
                GeologyAtLocationTool::http_handler(arguments, &self.service).await
            }
            CapabilitiesTool::NAME => {
                CapabilitiesTool::http_handler(arguments, &self.service).await
            }
            GeologyMapUrlTool::NAME => GeologyMapUrlTool::http_handler(arguments, &self.service),
            ServiceInfoTool::NAME => ServiceInfoTool::http_handler(arguments),
            _ => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::WmsConfig;
    use crate::domains::geology::WmsClient;

    fn test_service() -> Arc<GeologyService> {
        Arc::new(GeologyService::new(
            WmsClient::new(&WmsConfig::default()).unwrap(),
        ))
    }

    #[test]
    fn test_registry_tool_names() {
        let registry = ToolRegistry::new(test_service());
        let names = registry.tool_names();
        assert_eq!(names.len(), 5);
        assert!(names.contains(&"get_available_geology_layers"));
        assert!(names.contains(&"get_geology_at_location"));
        assert!(names.contains(&"get_capabilities"));
        assert!(names.contains(&"get_geology_map_url"));
        assert!(names.contains(&"get_service_info"));
    }

    #[test]
    fn test_all_tools_match_names() {
        let registry = ToolRegistry::new(test_service());
        let names = registry.tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(tools.len(), names.len());
        for tool in &tools {
            assert!(names.contains(&tool.name.as_ref()));
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_map_url() {
        let registry = ToolRegistry::new(test_service());
        let result = tokio_test::block_on(registry.call_tool(
            "get_geology_map_url",
            serde_json::json!({
                "layer": "BGS.50k.Bedrock",
                "min_lat": 51.0,
                "min_lon": -1.0,
                "max_lat": 51.1,
                "max_lon": -0.9
            }),
        ))
        .unwrap();
        assert_eq!(result["isError"], serde_json::json!(false));
        assert!(
            result["content"][0]["text"]
                .as_str()
                .unwrap()
                .contains("request=GetMap")
        );
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_layers_has_structured_content() {
        let registry = ToolRegistry::new(test_service());
        let result = tokio_test::block_on(
            registry.call_tool("get_available_geology_layers", serde_json::Value::Null),
        )
        .unwrap();
        assert!(result["structuredContent"]["bedrock"].is_object());
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_missing_argument() {
        let registry = ToolRegistry::new(test_service());
        let result = tokio_test::block_on(
            registry.call_tool("get_geology_at_location", serde_json::json!({})),
        );
        assert!(matches!(result, Err(ToolError::InvalidArguments(_))));
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_registry_call_unknown() {
        let registry = ToolRegistry::new(test_service());
        let result = tokio_test::block_on(registry.call_tool("unknown", serde_json::json!({})));
        assert!(matches!(result, Err(ToolError::NotFound(_))));
    }
}
