//! Geology domain error types.

use thiserror::Error;

use super::layers::GeologyLayer;
use super::wms::InfoFormat;

/// Errors raised while validating a geology request or talking to the WMS.
#[derive(Debug, Error)]
pub enum GeologyError {
    /// The point lies outside the Great Britain coverage region.
    #[error("Coordinates outside UK bounds: {latitude:?}, {longitude:?}")]
    OutOfBounds { latitude: f64, longitude: f64 },

    /// The layer key is not one of the registered layers.
    #[error("Invalid geology type. Available: {}", GeologyLayer::available_keys())]
    UnknownLayer(String),

    /// The feature-info format is not supported.
    #[error("Invalid format_type. Use: {}", InfoFormat::available_mimes())]
    InvalidFormat(String),

    /// The bounding box corners are not ordered.
    #[error("{0} must be less than {1}")]
    InvalidBoundingBox(&'static str, &'static str),

    /// The query string could not be encoded.
    #[error("Failed to encode WMS query")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// Failed to build the HTTP client.
    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// Transport failure (timeout, connection refused, TLS, body read).
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// The WMS answered with a non-success status.
    #[error("WMS request failed with HTTP status {status}")]
    Status { status: reqwest::StatusCode },
}

impl GeologyError {
    /// Create an out-of-bounds error for a point.
    pub fn out_of_bounds(latitude: f64, longitude: f64) -> Self {
        Self::OutOfBounds {
            latitude,
            longitude,
        }
    }

    /// Message followed by every underlying cause, joined with `: `.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }

    /// Whether this error was produced by input validation (no request sent).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::OutOfBounds { .. }
                | Self::UnknownLayer(_)
                | Self::InvalidFormat(_)
                | Self::InvalidBoundingBox(..)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_message() {
        let err = GeologyError::out_of_bounds(40.0, -3.5);
        assert_eq!(err.to_string(), "Coordinates outside UK bounds: 40.0, -3.5");
        assert!(err.is_validation());
    }

    #[test]
    fn test_unknown_layer_lists_all_keys() {
        let msg = GeologyError::UnknownLayer("granite".into()).to_string();
        for layer in GeologyLayer::ALL {
            assert!(msg.contains(layer.key()), "missing {} in {}", layer, msg);
        }
    }

    #[test]
    fn test_invalid_format_lists_all_formats() {
        let msg = GeologyError::InvalidFormat("application/json".into()).to_string();
        assert_eq!(msg, "Invalid format_type. Use: text/html, text/xml, text/plain");
    }

    #[test]
    fn test_bbox_message() {
        let err = GeologyError::InvalidBoundingBox("min_lat", "max_lat");
        assert_eq!(err.to_string(), "min_lat must be less than max_lat");
    }

    #[test]
    fn test_detail_without_source() {
        let err = GeologyError::UnknownLayer("granite".into());
        assert_eq!(err.detail(), err.to_string());
    }

    #[test]
    fn test_status_is_not_validation() {
        let err = GeologyError::Status {
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        assert!(!err.is_validation());
        assert!(err.to_string().contains("502"));
    }
}
