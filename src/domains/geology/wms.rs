//! WMS 1.3.0 query construction.
//!
//! All requests use `CRS:84`, which puts longitude first on every axis pair,
//! so bounding boxes are always serialized as `min_lon,min_lat,max_lon,max_lat`.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::error::GeologyError;
use super::layers::GeologyLayer;

/// Fixed BGS detailed geology WMS endpoint.
pub const BGS_GEOLOGY_WMS_URL: &str =
    "https://map.bgs.ac.uk/arcgis/services/BGS_Detailed_Geology/MapServer/WMSServer";

pub const WMS_VERSION: &str = "1.3.0";
pub const CRS_84: &str = "CRS:84";
pub const DEFAULT_STYLE: &str = "default";

/// Half-width of the box built around a queried point (~200m).
pub const POINT_BUFFER_DEG: f64 = 0.002;

/// Pixel size of the virtual map used for GetFeatureInfo.
pub const FEATURE_INFO_SIZE: u32 = 450;

/// Great Britain coverage region, inclusive.
pub const GB_LATITUDE: RangeInclusive<f64> = 49.0..=61.0;
pub const GB_LONGITUDE: RangeInclusive<f64> = -8.0..=2.0;

/// Render a coordinate in shortest round-trip form, keeping the decimal
/// point for whole numbers (`-1.0`, not `-1`).
fn coord(value: f64) -> String {
    format!("{value:?}")
}

// ============================================================================
// Geometry
// ============================================================================

/// A WGS84 point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeodeticPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeodeticPoint {
    /// Build a point that lies inside the Great Britain coverage region.
    pub fn within_great_britain(latitude: f64, longitude: f64) -> Result<Self, GeologyError> {
        if GB_LATITUDE.contains(&latitude) && GB_LONGITUDE.contains(&longitude) {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(GeologyError::out_of_bounds(latitude, longitude))
        }
    }

    /// Symmetric box of `buffer` degrees around the point.
    pub fn buffered(&self, buffer: f64) -> BoundingBox {
        BoundingBox {
            min_lat: self.latitude - buffer,
            min_lon: self.longitude - buffer,
            max_lat: self.latitude + buffer,
            max_lon: self.longitude + buffer,
        }
    }
}

impl fmt::Display for GeodeticPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Geographic extent in WGS84 degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Build a box, rejecting corners that are not strictly ordered.
    ///
    /// NaN corners never compare as ordered and are rejected too.
    pub fn new(
        min_lat: f64,
        min_lon: f64,
        max_lat: f64,
        max_lon: f64,
    ) -> Result<Self, GeologyError> {
        if !(min_lat < max_lat) {
            return Err(GeologyError::InvalidBoundingBox("min_lat", "max_lat"));
        }
        if !(min_lon < max_lon) {
            return Err(GeologyError::InvalidBoundingBox("min_lon", "max_lon"));
        }
        Ok(Self {
            min_lat,
            min_lon,
            max_lat,
            max_lon,
        })
    }

    /// `min_lon,min_lat,max_lon,max_lat` as required by WMS 1.3.0 with CRS:84.
    pub fn to_crs84(&self) -> String {
        format!(
            "{},{},{},{}",
            coord(self.min_lon),
            coord(self.min_lat),
            coord(self.max_lon),
            coord(self.max_lat)
        )
    }
}

// ============================================================================
// Formats
// ============================================================================

/// Supported GetFeatureInfo response formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InfoFormat {
    #[default]
    Html,
    Xml,
    Plain,
}

impl InfoFormat {
    pub const ALL: [InfoFormat; 3] = [InfoFormat::Html, InfoFormat::Xml, InfoFormat::Plain];

    pub const fn mime(self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Xml => "text/xml",
            Self::Plain => "text/plain",
        }
    }

    /// Comma-separated list of every accepted MIME type.
    pub fn available_mimes() -> String {
        Self::ALL
            .iter()
            .map(|f| f.mime())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for InfoFormat {
    type Err = GeologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.mime() == s)
            .ok_or_else(|| GeologyError::InvalidFormat(s.to_string()))
    }
}

// ============================================================================
// Requests
// ============================================================================

/// A WMS request that can be rendered as KVP query parameters.
pub trait WmsQuery {
    /// The WMS `request` value (e.g. `GetMap`).
    fn request_name(&self) -> &'static str;

    /// Request-specific parameters, after `service`, `request` and `version`.
    fn extra_params(&self) -> Vec<(&'static str, String)>;

    /// Full ordered parameter list.
    fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("service", "WMS".to_string()),
            ("request", self.request_name().to_string()),
            ("version", WMS_VERSION.to_string()),
        ];
        params.extend(self.extra_params());
        params
    }

    /// URL-encoded query string.
    fn to_query_string(&self) -> Result<String, GeologyError> {
        Ok(serde_urlencoded::to_string(self.params())?)
    }
}

/// `GetCapabilities` request.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapabilitiesRequest;

impl WmsQuery for CapabilitiesRequest {
    fn request_name(&self) -> &'static str {
        "GetCapabilities"
    }

    fn extra_params(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

/// `GetFeatureInfo` request for a single point.
///
/// The point is turned into a small box and queried at the centre pixel of a
/// virtual 450x450 map.
#[derive(Debug, Clone, Copy)]
pub struct FeatureInfoRequest {
    pub layer: GeologyLayer,
    pub point: GeodeticPoint,
    pub info_format: InfoFormat,
}

impl FeatureInfoRequest {
    pub fn new(layer: GeologyLayer, point: GeodeticPoint, info_format: InfoFormat) -> Self {
        Self {
            layer,
            point,
            info_format,
        }
    }

    pub fn bbox(&self) -> BoundingBox {
        self.point.buffered(POINT_BUFFER_DEG)
    }
}

impl WmsQuery for FeatureInfoRequest {
    fn request_name(&self) -> &'static str {
        "GetFeatureInfo"
    }

    fn extra_params(&self) -> Vec<(&'static str, String)> {
        let layer = self.layer.layer_name().to_string();
        let centre = (FEATURE_INFO_SIZE / 2).to_string();
        vec![
            ("layers", layer.clone()),
            ("query_layers", layer),
            ("styles", DEFAULT_STYLE.to_string()),
            ("bbox", self.bbox().to_crs84()),
            ("crs", CRS_84.to_string()),
            ("width", FEATURE_INFO_SIZE.to_string()),
            ("height", FEATURE_INFO_SIZE.to_string()),
            ("i", centre.clone()),
            ("j", centre),
            ("info_format", self.info_format.mime().to_string()),
            ("radius", "0".to_string()),
        ]
    }
}

/// `GetMap` request for an arbitrary layer string and extent.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRequest {
    pub layer: String,
    pub bbox: BoundingBox,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

impl WmsQuery for MapRequest {
    fn request_name(&self) -> &'static str {
        "GetMap"
    }

    fn extra_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("layers", self.layer.clone()),
            ("styles", DEFAULT_STYLE.to_string()),
            ("bbox", self.bbox.to_crs84()),
            ("crs", CRS_84.to_string()),
            ("width", self.width.to_string()),
            ("height", self.height.to_string()),
            ("format", self.format.clone()),
        ]
    }
}

/// Build a full request URL against `endpoint`.
pub fn request_url(endpoint: &str, query: &impl WmsQuery) -> Result<String, GeologyError> {
    Ok(format!("{}?{}", endpoint, query.to_query_string()?))
}
