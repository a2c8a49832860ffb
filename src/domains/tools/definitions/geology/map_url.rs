//! Geology map URL tool.
//!
//! Builds a WMS `GetMap` URL for a layer and bounding box. Pure: no request
//! is sent, so the result never depends on the remote service.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, parse_params, success_result};
use crate::domains::geology::{GeologyService, MapUrlInput};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the map URL tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeologyMapUrlParams {
    /// Provider layer name (e.g. `BGS.50k.Bedrock`).
    #[schemars(description = "Layer name, e.g. BGS.50k.Bedrock (see get_available_geology_layers)")]
    pub layer: String,

    #[schemars(description = "Minimum latitude (south boundary)")]
    pub min_lat: f64,

    #[schemars(description = "Minimum longitude (west boundary)")]
    pub min_lon: f64,

    #[schemars(description = "Maximum latitude (north boundary)")]
    pub max_lat: f64,

    #[schemars(description = "Maximum longitude (east boundary)")]
    pub max_lon: f64,

    #[serde(default = "default_size")]
    #[schemars(description = "Image width in pixels (default: 450)")]
    pub width: u32,

    #[serde(default = "default_size")]
    #[schemars(description = "Image height in pixels (default: 450)")]
    pub height: u32,

    #[serde(default = "default_image_format")]
    #[schemars(description = "Image format: image/png, image/gif, image/jpeg (default: image/png)")]
    pub format_type: String,
}

fn default_size() -> u32 {
    450
}

fn default_image_format() -> String {
    "image/png".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Map URL tool.
#[derive(Debug, Clone, Default)]
pub struct GeologyMapUrlTool;

impl GeologyMapUrlTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_geology_map_url";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generate a WMS GetMap URL for geological visualization. Use small areas (0.05-0.15 degree boxes) for visible maps; data is only drawn between 1:100,000 and 1:25,000 scale.";

    /// Execute the tool logic.
    #[instrument(skip_all, fields(layer = %params.layer))]
    pub fn execute(params: &GeologyMapUrlParams, service: &GeologyService) -> CallToolResult {
        info!("Map URL tool called");

        let input = MapUrlInput {
            layer: &params.layer,
            min_lat: params.min_lat,
            min_lon: params.min_lon,
            max_lat: params.max_lat,
            max_lon: params.max_lon,
            width: params.width,
            height: params.height,
            format: &params.format_type,
        };

        match service.map_url(&input) {
            Ok(url) => success_result(url),
            Err(e) => error_result(&format!("Error: {}", e.detail())),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        arguments: serde_json::Value,
        service: &GeologyService,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: GeologyMapUrlParams = super::common::parse_http_params(arguments)?;
        Ok(super::common::http_response(Self::execute(&params, service)))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeologyMapUrlParams>(),
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
                let params: GeologyMapUrlParams = parse_params(args)?;
                Ok(Self::execute(&params, &service))
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
