use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// A forward-geocoding hit: coordinates for a free-text query.
#[derive(Clone, Debug, PartialEq)]
pub struct ForwardHit {
    pub latitude: f64,
    pub longitude: f64,
    pub display_name: String,
}

/// Combined outcome of the two independent forward lookups of a ride search.
/// The pickup lookup is checked first; a missing destination still carries
/// the found pickup so it can be placed on the map.
#[derive(Clone, Debug, PartialEq)]
pub enum ForwardJoin {
    BothFound {
        pickup: ForwardHit,
        destination: ForwardHit,
    },
    PickupMissing,
    DestinationMissing {
        pickup: ForwardHit,
    },
}

impl ForwardJoin {
    pub fn from_hits(pickup: Option<ForwardHit>, destination: Option<ForwardHit>) -> Self {
        match (pickup, destination) {
            (None, _) => ForwardJoin::PickupMissing,
            (Some(pickup), None) => ForwardJoin::DestinationMissing { pickup },
            (Some(pickup), Some(destination)) => ForwardJoin::BothFound {
                pickup,
                destination,
            },
        }
    }
}

/// Geocoding service seam.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve coordinates to a human-readable address.
    async fn reverse(&self, latitude: f64, longitude: f64) -> AppResult<String>;

    /// Resolve a free-text query to coordinates. `Ok(None)` means the service
    /// answered but found nothing for the query.
    async fn forward(&self, query: &str) -> AppResult<Option<ForwardHit>>;
}

// ============ Nominatim ============

#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    display_name: Option<String>,
}

/// Geocoder backed by the Nominatim HTTP API.
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &Config) -> AppResult<Self> {
        // Nominatim's usage policy requires an identifying User-Agent
        let client = Client::builder()
            .user_agent(&config.geocoder_user_agent)
            .timeout(Duration::from_secs(config.geocoder_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.nominatim_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn reverse(&self, latitude: f64, longitude: f64) -> AppResult<String> {
        tracing::debug!("Reverse geocoding {:.5}, {:.5}", latitude, longitude);

        let response: ReverseResponse = self
            .client
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json".to_string()),
                ("lat", latitude.to_string()),
                ("lon", longitude.to_string()),
                ("addressdetails", "1".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        // Nominatim answers `{"error": "Unable to geocode"}` for open water etc.
        response.display_name.ok_or_else(|| {
            AppError::Geocoding(format!(
                "No address found for {:.5}, {:.5}",
                latitude, longitude
            ))
        })
    }

    async fn forward(&self, query: &str) -> AppResult<Option<ForwardHit>> {
        tracing::debug!("Forward geocoding '{}'", query);

        let results: Vec<SearchResult> = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[("format", "json"), ("limit", "1"), ("q", query)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        first_hit(results)
    }
}

/// Nominatim returns coordinates as strings; parse the first hit, if any.
fn first_hit(results: Vec<SearchResult>) -> AppResult<Option<ForwardHit>> {
    let Some(result) = results.into_iter().next() else {
        return Ok(None);
    };

    let latitude = result.lat.parse().map_err(|_| malformed(&result.lat))?;
    let longitude = result.lon.parse().map_err(|_| malformed(&result.lon))?;

    Ok(Some(ForwardHit {
        latitude,
        longitude,
        display_name: result.display_name,
    }))
}

fn malformed(raw: &str) -> AppError {
    AppError::Geocoding(format!("Malformed coordinate '{}' in geocoding response", raw))
}
