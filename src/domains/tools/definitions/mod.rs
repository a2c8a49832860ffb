//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod geology;

pub use geology::{
    CapabilitiesTool, GeologyAtLocationParams, GeologyAtLocationTool, GeologyMapUrlParams,
    GeologyMapUrlTool, ListLayersTool, ServiceInfoTool,
};
