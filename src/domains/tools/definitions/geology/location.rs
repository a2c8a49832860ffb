//! Geology-at-location tool.
//!
//! Queries the BGS WMS `GetFeatureInfo` operation for a single point in
//! Great Britain and returns the provider's response verbatim.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::common::{error_result, parse_params, success_result, transport_error_result};
use crate::domains::geology::{GeologyError, GeologyService};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the geology-at-location tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeologyAtLocationParams {
    /// Latitude in decimal degrees (WGS84).
    #[schemars(description = "Latitude in decimal degrees (WGS84), 49.0 to 61.0")]
    pub latitude: f64,

    /// Longitude in decimal degrees (WGS84).
    #[schemars(description = "Longitude in decimal degrees (WGS84), -8.0 to 2.0")]
    pub longitude: f64,

    /// Layer key.
    #[serde(default = "default_geology_type")]
    #[schemars(
        description = "Geological data type: bedrock, superficial_deposits, artificial_ground, mass_movement, linear_features (default: bedrock)"
    )]
    pub geology_type: String,

    /// Feature-info response format.
    #[serde(default = "default_format_type")]
    #[schemars(
        description = "Response format: text/html, text/xml, or text/plain (default: text/html)"
    )]
    pub format_type: String,
}

fn default_geology_type() -> String {
    "bedrock".to_string()
}

fn default_format_type() -> String {
    "text/html".to_string()
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Geology-at-location tool.
#[derive(Debug, Clone, Default)]
pub struct GeologyAtLocationTool;

impl GeologyAtLocationTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_geology_at_location";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get geological information at a specific geographic location in Great Britain from BGS 1:50,000 data. Coordinates are WGS84 decimal degrees.";

    /// Execute the tool logic.
    ///
    /// Coordinates outside Great Britain and empty responses are reported as
    /// normal results; bad input and transport failures are flagged as errors.
    #[instrument(skip_all, fields(lat = params.latitude, lon = params.longitude))]
    pub async fn execute(
        params: &GeologyAtLocationParams,
        service: &GeologyService,
    ) -> CallToolResult {
        info!(
            "Geology at location called ({}, {})",
            params.geology_type, params.format_type
        );

        let outcome = service
            .geology_at_location(
                params.latitude,
                params.longitude,
                &params.geology_type,
                &params.format_type,
            )
            .await;

        match outcome {
            Ok(report) => success_result(report.to_string()),
            Err(e @ GeologyError::OutOfBounds { .. }) => success_result(e.to_string()),
            Err(e) if e.is_validation() => error_result(&e.to_string()),
            Err(e) => transport_error_result("Error", &e),
        }
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn http_handler(
        arguments: serde_json::Value,
        service: &GeologyService,
    ) -> Result<serde_json::Value, crate::domains::tools::ToolError> {
        let params: GeologyAtLocationParams = super::common::parse_http_params(arguments)?;
        let result = Self::execute(&params, service).await;
        Ok(super::common::http_response(result))
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GeologyAtLocationParams>(),
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
                let params: GeologyAtLocationParams = parse_params(args)?;
                Ok(Self::execute(&params, &service).await)
            }
            .boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
