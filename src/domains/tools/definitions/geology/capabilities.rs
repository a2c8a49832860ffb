//! WMS capabilities tool.
//!
//! Fetches the raw `GetCapabilities` document from the BGS WMS.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use std::sync::Arc;
use tracing::info;

use super::common::{NoParams, parse_params, success_result, transport_error_result};
use crate::domains::geology::GeologyService;

/// Capabilities tool.
#[derive(Debug, Clone, Default)]
pub struct CapabilitiesTool;

impl CapabilitiesTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_capabilities";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the WMS capabilities document showing all available geological layers and metadata.";

    /// Execute the tool logic.
    pub async fn execute(service: &GeologyService) -> CallToolResult {
        info!("Capabilities tool called");

        match service.capabilities().await {
            Ok(document) => success_result(document),
            Err(e) => transport_error_result("Error getting capabilities", &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        _arguments: serde_json::Value,
        service: &GeologyService,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        Ok(super::common::http_response(Self::execute(service).await))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<NoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO/TCP transport.
    pub fn create_route<S>(service: Arc<GeologyService>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            let service = service.clone();
            async move {
                let _params: NoParams = parse_params(args)?;
                Ok(Self::execute(&service).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use crate::domains::geology::WmsClient;
    use crate::domains::geology::client::test_support::*;

    #[tokio::test]
    async fn test_returns_document_verbatim() {
        let document = "<?xml version=\"1.0\"?>\n<WMS_Capabilities version=\"1.3.0\"/>";
        let (config, request_rx) = start_single_response_server("200 OK", document).await;
        let service = GeologyService::new(WmsClient::new(&config).unwrap());

        let result = CapabilitiesTool::execute(&service).await;
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result_text(&result), document);

        let request_line = request_rx.await.unwrap();
        assert_eq!(query_param(&request_line, "service").as_deref(), Some("WMS"));
        assert_eq!(
            query_param(&request_line, "request").as_deref(),
            Some("GetCapabilities")
        );
    }

    #[tokio::test]
    async fn test_failure_is_error_text() {
        let (config, _rx) = start_single_response_server("404 Not Found", "").await;
        let service = GeologyService::new(WmsClient::new(&config).unwrap());

        let result = CapabilitiesTool::execute(&service).await;
        assert_eq!(result.is_error, Some(true));
        assert!(result_text(&result).starts_with("Error getting capabilities: "));
    }
}
