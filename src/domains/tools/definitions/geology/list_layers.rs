//! Geology layer listing tool.
//!
//! Lists the five BGS 1:50,000 geology layers with their provider layer
//! names and descriptions. No inputs, cannot fail.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{NoParams, parse_params, structured_result};
use crate::domains::geology::layers::layer_catalog;

/// Layer listing tool.
#[derive(Debug, Clone, Default)]
pub struct ListLayersTool;

impl ListLayersTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_available_geology_layers";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get available geological data layers from the BGS WMS service. Returns a map of layer key to provider layer name and description.";

    /// Execute the tool logic.
    pub fn execute() -> CallToolResult {
        info!("Listing geology layers");
        structured_result(&layer_catalog())
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        _arguments: serde_json::Value,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        Ok(super::common::http_response(Self::execute()))
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
    pub fn create_route<S>() -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone();
            async move {
                let _params: NoParams = parse_params(args)?;
                Ok(Self::execute())
            }
            .boxed()
        })
    }
}
