//! Service information tool.
//!
//! Static description of the BGS Geology 50K service, its layers and the
//! tools exposed by this server.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};

use super::common::{NoParams, parse_params, success_result};

/// Text returned by the service info tool.
pub const SERVICE_INFO: &str = "\
BGS Geology 50K MCP Server

Provides access to British Geological Survey 1:50,000 scale geological maps via WMS.

Coverage: Great Britain (England, Wales, Scotland)
Scale: 1:50,000 (visible between 1:100,000 and 1:25,000 scale)
Coordinate systems: WGS84 (CRS:84) and British National Grid
Data source: BGS/UKRI under Open Government Licence

Geological Layers:
- bedrock: Solid rocks beneath superficial deposits
- superficial_deposits: Unconsolidated sediments above bedrock
- artificial_ground: Made ground, worked ground, infilled ground
- mass_movement: Landslides, rockfall, debris flows
- linear_features: Faults, dykes, mineral veins

Tools:
- get_geology_at_location(lat, lon, geology_type, format) - Get geological data at point
- get_available_geology_layers() - List available geological data types
- get_capabilities() - Get full WMS capabilities document
- get_geology_map_url(layer, min_lat, min_lon, max_lat, max_lon, width, height, format) - Generate map visualization URL

Example: get_geology_at_location(51.5074, -0.1278, \"bedrock\", \"text/html\")
Map example: get_geology_map_url(\"BGS.50k.Bedrock\", 51.0, -1.0, 51.1, -0.9)

Note: For visible maps, use smaller areas (0.05-0.15 degree boxes) as data is only visible at 1:25,000 to 1:100,000 scale.
Try bedrock or superficial_deposits layers first as they have better coverage than mass_movement.

Working examples:
- London bedrock: get_geology_map_url(\"BGS.50k.Bedrock\", 51.45, -0.15, 51.55, -0.05)
- BGS test area: get_geology_map_url(\"BGS.50k.Superficial.deposits\", 50.991, -2.215, 51.051, -2.155)";

/// Service information tool.
#[derive(Debug, Clone, Default)]
pub struct ServiceInfoTool;

impl ServiceInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_service_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get information about the BGS Geology 50K WMS service, its layers and usage examples.";

    pub fn execute() -> CallToolResult {
        success_result(SERVICE_INFO.to_string())
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

#[cfg(test)]
mod tests {
    use super::super::common::result_text;
    use super::*;
    use crate::domains::geology::GeologyLayer;

    #[test]
    fn test_service_info_mentions_every_layer() {
        let result = ServiceInfoTool::execute();
        let text = result_text(&result);
        for layer in GeologyLayer::ALL {
            assert!(text.contains(layer.key()), "missing layer {}", layer);
        }
    }

    #[test]
    fn test_service_info_mentions_every_tool() {
        let text = SERVICE_INFO;
        for name in [
            "get_geology_at_location",
            "get_available_geology_layers",
            "get_capabilities",
            "get_geology_map_url",
        ] {
            assert!(text.contains(name), "missing tool {}", name);
        }
    }
}
