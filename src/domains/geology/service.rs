//! Geology service - validation and dispatch for geology queries.
//!
//! The service validates raw tool input, turns it into WMS requests and hands
//! them to the [`WmsClient`]. Rendering to text is left to the tool layer.

use std::fmt;

use tracing::{info, instrument};

use super::client::WmsClient;
use super::error::GeologyError;
use super::layers::GeologyLayer;
use super::wms::{BoundingBox, FeatureInfoRequest, GeodeticPoint, InfoFormat, MapRequest};

/// Outcome of a successful point query.
#[derive(Debug, Clone, PartialEq)]
pub enum LocationReport {
    /// The service returned feature info.
    Found { point: GeodeticPoint, body: String },
    /// The service answered, but with nothing but whitespace.
    NoData { point: GeodeticPoint },
}

impl LocationReport {
    fn from_body(point: GeodeticPoint, body: String) -> Self {
        if body.trim().is_empty() {
            Self::NoData { point }
        } else {
            Self::Found { point, body }
        }
    }
}

impl fmt::Display for LocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { point, body } => write!(f, "Geological data at {}:\n\n{}", point, body),
            Self::NoData { point } => write!(f, "No geological data available at {}", point),
        }
    }
}

/// Unvalidated `GetMap` input as received from a caller.
#[derive(Debug, Clone)]
pub struct MapUrlInput<'a> {
    pub layer: &'a str,
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
    pub width: u32,
    pub height: u32,
    pub format: &'a str,
}

/// Service for geology lookups against the BGS WMS.
#[derive(Debug, Clone)]
pub struct GeologyService {
    client: WmsClient,
}

impl GeologyService {
    /// Create a new service around an existing client.
    pub fn new(client: WmsClient) -> Self {
        Self { client }
    }

    /// Validate point query input.
    ///
    /// Checks run in a fixed order: coordinates, layer key, format.
    pub fn feature_info_request(
        latitude: f64,
        longitude: f64,
        geology_type: &str,
        format_type: &str,
    ) -> Result<FeatureInfoRequest, GeologyError> {
        let point = GeodeticPoint::within_great_britain(latitude, longitude)?;
        let layer: GeologyLayer = geology_type.parse()?;
        let info_format: InfoFormat = format_type.parse()?;
        Ok(FeatureInfoRequest::new(layer, point, info_format))
    }

    /// Query geology at a point.
    #[instrument(skip(self))]
    pub async fn geology_at_location(
        &self,
        latitude: f64,
        longitude: f64,
        geology_type: &str,
        format_type: &str,
    ) -> Result<LocationReport, GeologyError> {
        let request = Self::feature_info_request(latitude, longitude, geology_type, format_type)?;
        info!(
            "Querying {} at {}",
            request.layer.layer_name(),
            request.point
        );

        let body = self.client.feature_info(&request).await?;
        Ok(LocationReport::from_body(request.point, body))
    }

    /// Fetch the raw capabilities document.
    pub async fn capabilities(&self) -> Result<String, GeologyError> {
        info!("Fetching WMS capabilities");
        self.client.capabilities().await
    }

    /// Build a `GetMap` URL. Performs no I/O.
    pub fn map_url(&self, input: &MapUrlInput<'_>) -> Result<String, GeologyError> {
        let bbox = BoundingBox::new(input.min_lat, input.min_lon, input.max_lat, input.max_lon)?;
        let request = MapRequest {
            layer: input.layer.to_string(),
            bbox,
            width: input.width,
            height: input.height,
            format: input.format.to_string(),
        };
        self.client.map_url(&request)
    }
}
