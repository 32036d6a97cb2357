use crate::config::GeocoderSettings;
use crate::models::Coordinate;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when resolving an address
///
/// None of these are fatal to a query: callers fall back to alphabetical
/// ranking and surface the reason to the client.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("API key missing: set API_KEY or geocoder.api_key")]
    MissingApiKey,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("address not found")]
    AddressNotFound,

    #[error("geocoding quota exceeded")]
    QuotaExceeded,

    #[error("geocoding API returned status: {0}")]
    Api(String),

    #[error("invalid response format: {0}")]
    InvalidResponse(String),
}

/// Google Geocoding API client
///
/// Resolves a free-text address to a latitude/longitude pair. One request per
/// query; retry and quota policy belong to the upstream provider, and results
/// are not cached across queries.
pub struct GoogleGeocoder {
    endpoint: String,
    api_key: Option<String>,
    client: Client,
}

impl GoogleGeocoder {
    /// Create a new geocoder client
    pub fn new(endpoint: String, api_key: Option<String>, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            endpoint,
            api_key,
            client,
        }
    }

    pub fn from_settings(settings: &GeocoderSettings) -> Self {
        Self::new(
            settings.endpoint.clone(),
            settings.api_key.clone(),
            settings.timeout_secs,
        )
    }

    /// Resolve an address to a coordinate
    pub async fn geocode(&self, address: &str) -> Result<Coordinate, GeocodeError> {
        let api_key = self.api_key.as_deref().ok_or(GeocodeError::MissingApiKey)?;

        let url = format!(
            "{}?address={}&key={}",
            self.endpoint.trim_end_matches('/'),
            urlencoding::encode(address),
            urlencoding::encode(api_key)
        );

        tracing::debug!("Geocoding address: {}", address);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(GeocodeError::Api(format!(
                "HTTP {} from geocoding API",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let status = json
            .get("status")
            .and_then(|s| s.as_str())
            .ok_or_else(|| GeocodeError::InvalidResponse("Missing status field".into()))?;

        match status {
            "OK" => {}
            "ZERO_RESULTS" => return Err(GeocodeError::AddressNotFound),
            "OVER_QUERY_LIMIT" => return Err(GeocodeError::QuotaExceeded),
            other => return Err(GeocodeError::Api(other.to_string())),
        }

        let location = json
            .get("results")
            .and_then(|r| r.as_array())
            .and_then(|r| r.first())
            .and_then(|r| r.get("geometry"))
            .and_then(|g| g.get("location"))
            .ok_or_else(|| GeocodeError::InvalidResponse("Missing results geometry".into()))?;

        let latitude = location
            .get("lat")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| GeocodeError::InvalidResponse("Missing lat".into()))?;
        let longitude = location
            .get("lng")
            .and_then(|v| v.as_f64())
            .ok_or_else(|| GeocodeError::InvalidResponse("Missing lng".into()))?;

        tracing::debug!("Resolved '{}' to ({}, {})", address, latitude, longitude);

        Ok(Coordinate::new(latitude, longitude))
    }
}
