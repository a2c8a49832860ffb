//! Geology tools module.
//!
//! Tools backed by the BGS 1:50,000 detailed geology WMS:
//! - `list_layers`: List the available geology layers
//! - `location`: Feature info at a point
//! - `capabilities`: Raw WMS capabilities document
//! - `map_url`: GetMap URL for a bounding box (no network)
//! - `service_info`: Static service description
//!
//! Each tool has handlers for both HTTP and STDIO/TCP transports.

pub mod capabilities;
pub mod common;
pub mod list_layers;
pub mod location;
pub mod map_url;
pub mod service_info;

pub use capabilities::CapabilitiesTool;
pub use list_layers::ListLayersTool;
pub use location::{GeologyAtLocationParams, GeologyAtLocationTool};
pub use map_url::{GeologyMapUrlParams, GeologyMapUrlTool};
pub use service_info::ServiceInfoTool;
