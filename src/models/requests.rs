use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to search for providers
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SearchRequest {
    /// Free-text client address; when present, results are ranked by distance
    #[serde(default)]
    pub address: Option<String>,
    /// Case-insensitive substring to match against provider names
    #[serde(default)]
    pub name: Option<String>,
    /// Exact specialty values to allow (empty = no specialty filter)
    #[serde(default)]
    pub specialties: Vec<String>,
    /// Curated specialty group labels, resolved against the dataset
    #[serde(default, alias = "specialty_groups", rename = "specialtyGroups")]
    pub specialty_groups: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}
