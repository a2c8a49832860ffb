//! Tool Router - builds the rmcp ToolRouter from registry.
//!
//! This module builds the ToolRouter for STDIO/TCP transport by delegating
//! to the tool definitions themselves. Each tool knows how to create its own route.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::domains::geology::GeologyService;

use super::definitions::{
    CapabilitiesTool, GeologyAtLocationTool, GeologyMapUrlTool, ListLayersTool, ServiceInfoTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(service: Arc<GeologyService>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ListLayersTool::create_route())
        .with_route(GeologyAtLocationTool::create_route(service.clone()))
        .with_route(CapabilitiesTool::create_route(service.clone()))
        .with_route(GeologyMapUrlTool::create_route(service))
        .with_route(ServiceInfoTool::create_route())
}

#[cfg(test)]
mod tests {
    use super::super::registry::ToolRegistry;
    use super::*;
    use crate::core::config::WmsConfig;
    use crate::domains::geology::WmsClient;

    struct TestServer {}

    fn test_service() -> Arc<GeologyService> {
        Arc::new(GeologyService::new(
            WmsClient::new(&WmsConfig::default()).unwrap(),
        ))
    }

    #[test]
    fn test_build_router() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let tools = router.list_all();
        assert_eq!(tools.len(), 5);

        let names: Vec<_> = tools.iter().map(|t| t.name.as_ref()).collect();
        assert!(names.contains(&"get_available_geology_layers"));
        assert!(names.contains(&"get_geology_at_location"));
        assert!(names.contains(&"get_capabilities"));
        assert!(names.contains(&"get_geology_map_url"));
        assert!(names.contains(&"get_service_info"));
    }

    #[test]
    fn test_registry_matches_router() {
        // Ensure registry and router have the same tools
        let service = test_service();
        let registry = ToolRegistry::new(service.clone());
        let registry_names = registry.tool_names();

        let router: ToolRouter<TestServer> = build_tool_router(service);
        let router_tools = router.list_all();
        let router_names: Vec<_> = router_tools.iter().map(|t| t.name.as_ref()).collect();

        assert_eq!(registry_names.len(), router_names.len());
        for name in registry_names {
            assert!(router_names.contains(&name));
        }
    }

    #[test]
    fn test_location_schema_requires_coordinates() {
        let router: ToolRouter<TestServer> = build_tool_router(test_service());
        let tool = router
            .list_all()
            .into_iter()
            .find(|t| t.name == "get_geology_at_location")
            .unwrap();
        let required = tool.input_schema["required"].as_array().unwrap();
        assert!(required.contains(&serde_json::json!("latitude")));
        assert!(required.contains(&serde_json::json!("longitude")));
        assert!(!required.contains(&serde_json::json!("geology_type")));
    }
}
