use crate::models::domain::{RankMode, RankedProvider};
use serde::{Deserialize, Serialize};

/// Response for the provider search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<RankedProvider>,
    /// Ordering that was actually applied (distance, or alphabetical fallback)
    pub mode: RankMode,
    #[serde(rename = "rankedByDistance")]
    pub ranked_by_distance: bool,
    /// Why ranking fell back to alphabetical mode, when it did
    #[serde(rename = "geocodeError", skip_serializing_if = "Option::is_none")]
    pub geocode_error: Option<String>,
    /// Records that matched the filters but lacked a usable coordinate
    #[serde(rename = "skippedRecords")]
    pub skipped_records: usize,
    /// Post-filter candidate count, before truncation
    #[serde(rename = "totalMatches")]
    pub total_matches: usize,
}

/// Response for the specialties listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialtiesResponse {
    /// Distinct specialty values present in the dataset
    pub specialties: Vec<String>,
    /// Curated group labels that occur in the dataset
    pub groups: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
