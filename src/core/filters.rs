use crate::models::{FilterCriteria, Provider};

/// Check if a provider name contains the query, case-insensitively
///
/// Matching is pure substring containment. An empty query matches everything.
#[inline]
pub fn matches_name(provider: &Provider, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    provider.name.to_lowercase().contains(&query.to_lowercase())
}

/// Check if a provider's specialty is in the allowed set
///
/// An empty set matches everything.
#[inline]
pub fn matches_specialty(provider: &Provider, allowed: &std::collections::HashSet<String>) -> bool {
    allowed.is_empty() || allowed.contains(&provider.specialty)
}

/// Check if a provider passes both filter criteria
///
/// Filtering always runs before truncation, so the result cap only ever
/// reflects post-filter candidates.
#[inline]
pub fn matches_criteria(provider: &Provider, criteria: &FilterCriteria) -> bool {
    if criteria.is_empty() {
        return true;
    }

    let name_ok = match criteria.name_query.as_deref() {
        Some(query) => matches_name(provider, query),
        None => true,
    };

    name_ok && matches_specialty(provider, &criteria.specialties)
}
