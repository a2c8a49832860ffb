//! Geology domain module.
//!
//! Translates point and bounding-box requests into WMS 1.3.0 queries against
//! the British Geological Survey 1:50,000 detailed geology service.
//!
//! ## Architecture
//!
//! - `layers.rs` - Fixed registry of the five BGS geology layers
//! - `wms.rs` - Geometry, formats and WMS query construction (no I/O)
//! - `client.rs` - Async HTTP client for the WMS endpoint
//! - `service.rs` - Input validation and request dispatch
//! - `error.rs` - Geology-specific error types

pub mod client;
mod error;
pub mod layers;
mod service;
pub mod wms;

pub use client::WmsClient;
pub use error::GeologyError;
pub use layers::{GeologyLayer, LayerInfo};
pub use service::{GeologyService, LocationReport, MapUrlInput};
pub use wms::{BoundingBox, GeodeticPoint, InfoFormat};
