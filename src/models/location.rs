use serde::{Deserialize, Serialize};

/// A point on the map, optionally enriched with a human-readable address
/// once geocoding has resolved it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            address: None,
        }
    }

    pub fn with_address(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: Some(address.into()),
        }
    }
}

/// Role a picked location plays in the selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LocationRole {
    Pickup,
    Destination,
}

impl LocationRole {
    /// Marker popup label, as shown on the map.
    pub fn label(self) -> &'static str {
        match self {
            LocationRole::Pickup => "Pickup",
            LocationRole::Destination => "Destination",
        }
    }
}

impl std::fmt::Display for LocationRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
