use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// A resolved latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Medical provider record from the source dataset
///
/// Identity is row position in the source; duplicate rows are legal and
/// preserved independently. A record with a missing or unparseable
/// latitude/longitude carries no coordinate and is excluded (and counted)
/// only when ranking requires a distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    pub specialty: String,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
    /// Pass-through columns from the source dataset, kept verbatim
    #[serde(default, flatten)]
    pub extra: BTreeMap<String, String>,
}

impl Provider {
    /// Helper to check whether the record is usable for distance ranking
    pub fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }
}

/// Filter criteria applied before ranking and truncation
///
/// Both fields are independently optional; an empty field means no filter.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against `Provider::name`
    pub name_query: Option<String>,
    /// Allowed specialty values, matched exactly
    pub specialties: HashSet<String>,
}

impl FilterCriteria {
    pub fn is_empty(&self) -> bool {
        self.name_query.as_deref().map_or(true, str::is_empty) && self.specialties.is_empty()
    }
}

/// How a result set was ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RankMode {
    /// Ascending great-circle distance from the client location
    Distance,
    /// Case-insensitive name order (geocode fallback or no address given)
    Alphabetical,
}

/// Ranked result entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedProvider {
    #[serde(flatten)]
    pub provider: Provider,
    #[serde(rename = "distanceMiles", skip_serializing_if = "Option::is_none")]
    pub distance_miles: Option<f64>,
}
