//! Geological layer registry.
//!
//! The BGS 1:50,000 detailed geology service publishes five layers. Each one
//! is addressed by a short symbolic key on the tool surface and by its
//! provider-side name in WMS requests.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::Serialize;

use super::error::GeologyError;

/// One of the geological layers served by the BGS WMS endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GeologyLayer {
    Bedrock,
    SuperficialDeposits,
    ArtificialGround,
    MassMovement,
    LinearFeatures,
}

impl GeologyLayer {
    /// All layers, in the order they are presented to clients.
    pub const ALL: [GeologyLayer; 5] = [
        GeologyLayer::Bedrock,
        GeologyLayer::SuperficialDeposits,
        GeologyLayer::ArtificialGround,
        GeologyLayer::MassMovement,
        GeologyLayer::LinearFeatures,
    ];

    /// Symbolic key used by tool callers (e.g. `bedrock`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bedrock => "bedrock",
            Self::SuperficialDeposits => "superficial_deposits",
            Self::ArtificialGround => "artificial_ground",
            Self::MassMovement => "mass_movement",
            Self::LinearFeatures => "linear_features",
        }
    }

    /// Layer name as published in the WMS capabilities document.
    pub const fn layer_name(self) -> &'static str {
        match self {
            Self::Bedrock => "BGS.50k.Bedrock",
            Self::SuperficialDeposits => "BGS.50k.Superficial.deposits",
            Self::ArtificialGround => "BGS.50k.Artificial.ground",
            Self::MassMovement => "BGS.50k.Mass.movement",
            Self::LinearFeatures => "BGS.50k.Linear.features",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Bedrock => "Bedrock geology - solid rocks beneath superficial deposits",
            Self::SuperficialDeposits => {
                "Superficial deposits - unconsolidated sediments above bedrock"
            }
            Self::ArtificialGround => {
                "Artificial ground - made ground, worked ground, infilled ground"
            }
            Self::MassMovement => "Mass movement deposits - landslides, rockfall, debris flows",
            Self::LinearFeatures => "Linear geological features - faults, dykes, mineral veins",
        }
    }

    /// Comma-separated list of every valid key, for error messages.
    pub fn available_keys() -> String {
        Self::ALL
            .iter()
            .map(|layer| layer.key())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for GeologyLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for GeologyLayer {
    type Err = GeologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|layer| layer.key() == s)
            .ok_or_else(|| GeologyError::UnknownLayer(s.to_string()))
    }
}

/// Listing entry for a single layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LayerInfo {
    pub layer_name: String,
    pub description: String,
}

impl From<GeologyLayer> for LayerInfo {
    fn from(layer: GeologyLayer) -> Self {
        Self {
            layer_name: layer.layer_name().to_string(),
            description: layer.description().to_string(),
        }
    }
}

/// Build the key → layer info map returned by the layer listing tool.
pub fn layer_catalog() -> BTreeMap<&'static str, LayerInfo> {
    GeologyLayer::ALL
        .into_iter()
        .map(|layer| (layer.key(), LayerInfo::from(layer)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        for layer in GeologyLayer::ALL {
            assert_eq!(layer.key().parse::<GeologyLayer>().unwrap(), layer);
        }
    }

    #[test]
    fn test_parse_unknown_key() {
        let err = "granite".parse::<GeologyLayer>().unwrap_err();
        assert!(matches!(err, GeologyError::UnknownLayer(ref key) if key == "granite"));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Bedrock".parse::<GeologyLayer>().is_err());
        assert!("BGS.50k.Bedrock".parse::<GeologyLayer>().is_err());
    }

    #[test]
    fn test_available_keys() {
        assert_eq!(
            GeologyLayer::available_keys(),
            "bedrock, superficial_deposits, artificial_ground, mass_movement, linear_features"
        );
    }

    #[test]
    fn test_layer_catalog() {
        let catalog = layer_catalog();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog["bedrock"].layer_name, "BGS.50k.Bedrock");
        assert_eq!(
            catalog["superficial_deposits"].layer_name,
            "BGS.50k.Superficial.deposits"
        );
        assert!(catalog["linear_features"].description.contains("faults"));
    }
}
