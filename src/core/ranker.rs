use crate::core::{distance::distance_between, filters::matches_criteria};
use crate::models::{Coordinate, FilterCriteria, Provider, RankMode, RankedProvider};
use std::cmp::Ordering;

/// Default number of results returned when the caller does not override it
pub const DEFAULT_RESULT_LIMIT: usize = 20;

/// Result of the ranking pipeline
#[derive(Debug)]
pub struct RankOutcome {
    pub results: Vec<RankedProvider>,
    pub mode: RankMode,
    /// Filtered records excluded because distance ranking needed a coordinate
    /// they did not have. Always 0 in alphabetical mode.
    pub skipped_records: usize,
    /// Post-filter candidate count, before truncation
    pub total_matches: usize,
}

/// Ranking pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Filter by name substring and specialty membership
/// 2. Order by distance from the client, or by name when no client location
/// 3. Truncate to the result limit
///
/// Pure and reentrant: no I/O, no shared state, identical inputs yield
/// identical output.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ranker;

impl Ranker {
    pub fn new() -> Self {
        Self
    }

    /// Rank providers for a query
    ///
    /// # Arguments
    /// * `providers` - Candidate records in dataset order; may be empty,
    ///   duplicates allowed
    /// * `client` - Resolved client location, absent when no address was
    ///   given or geocoding failed
    /// * `criteria` - Name/specialty filters, both optional
    /// * `limit` - Maximum number of results to return
    pub fn rank(
        &self,
        providers: Vec<Provider>,
        client: Option<Coordinate>,
        criteria: &FilterCriteria,
        limit: usize,
    ) -> RankOutcome {
        // Filtering happens before truncation so the cap only ever reflects
        // post-filter candidates
        let filtered: Vec<Provider> = providers
            .into_iter()
            .filter(|provider| matches_criteria(provider, criteria))
            .collect();

        match client {
            Some(origin) => rank_by_distance(filtered, origin, limit),
            None => rank_by_name(filtered, limit),
        }
    }
}

fn rank_by_distance(filtered: Vec<Provider>, origin: Coordinate, limit: usize) -> RankOutcome {
    let total_matches = filtered.len();
    let mut skipped_records = 0;

    let mut entries: Vec<RankedProvider> = Vec::with_capacity(filtered.len());
    for provider in filtered {
        match provider.coordinate {
            Some(coordinate) => {
                let distance_miles = distance_between(&origin, &coordinate);
                entries.push(RankedProvider {
                    provider,
                    distance_miles: Some(distance_miles),
                });
            }
            // No coordinate means no distance; excluded and counted
            None => skipped_records += 1,
        }
    }

    // Stable sort: equal distances keep dataset order
    entries.sort_by(|a, b| {
        a.distance_miles
            .partial_cmp(&b.distance_miles)
            .unwrap_or(Ordering::Equal)
    });
    entries.truncate(limit);

    RankOutcome {
        results: entries,
        mode: RankMode::Distance,
        skipped_records,
        total_matches,
    }
}

fn rank_by_name(filtered: Vec<Provider>, limit: usize) -> RankOutcome {
    let total_matches = filtered.len();

    let mut entries: Vec<RankedProvider> = filtered
        .into_iter()
        .map(|provider| RankedProvider {
            provider,
            distance_miles: None,
        })
        .collect();

    // Stable sort: equal names keep dataset order
    entries.sort_by(|a, b| {
        a.provider
            .name
            .to_lowercase()
            .cmp(&b.provider.name.to_lowercase())
    });
    entries.truncate(limit);

    RankOutcome {
        results: entries,
        mode: RankMode::Alphabetical,
        skipped_records: 0,
        total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn create_provider(name: &str, specialty: &str, lat: f64, lon: f64) -> Provider {
        Provider {
            name: name.to_string(),
            specialty: specialty.to_string(),
            address: format!("{} Street", name),
            coordinate: Some(Coordinate::new(lat, lon)),
            extra: Default::default(),
        }
    }

    fn create_provider_without_coordinate(name: &str, specialty: &str) -> Provider {
        Provider {
            name: name.to_string(),
            specialty: specialty.to_string(),
            address: format!("{} Street", name),
            coordinate: None,
            extra: Default::default(),
        }
    }

    #[test]
    fn test_rank_by_distance_ascending() {
        let ranker = Ranker::new();
        let providers = vec![
            create_provider("Far", "Cardiology", 41.0, -74.0),
            create_provider("Near", "Cardiology", 40.01, -73.0),
            create_provider("Here", "Cardiology", 40.0, -73.0),
        ];

        let outcome = ranker.rank(
            providers,
            Some(Coordinate::new(40.0, -73.0)),
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(outcome.mode, RankMode::Distance);
        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.results[0].provider.name, "Here");
        assert_eq!(outcome.results[1].provider.name, "Near");
        assert_eq!(outcome.results[2].provider.name, "Far");

        for window in outcome.results.windows(2) {
            assert!(window[0].distance_miles.unwrap() <= window[1].distance_miles.unwrap());
        }
    }

    #[test]
    fn test_rank_alphabetical_without_client() {
        let ranker = Ranker::new();
        let providers = vec![
            create_provider("cara Diaz", "Cardiology", 39.9, -72.9),
            create_provider("Ann Lee", "Cardiology", 40.0, -73.0),
            create_provider("Bob Chen", "Dermatology", 40.1, -73.1),
        ];

        let outcome = ranker.rank(
            providers,
            None,
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(outcome.mode, RankMode::Alphabetical);
        let names: Vec<_> = outcome
            .results
            .iter()
            .map(|r| r.provider.name.as_str())
            .collect();
        assert_eq!(names, vec!["Ann Lee", "Bob Chen", "cara Diaz"]);
        assert!(outcome.results.iter().all(|r| r.distance_miles.is_none()));
    }

    #[test]
    fn test_filter_applied_before_truncation() {
        let ranker = Ranker::new();
        // More cardiologists than the limit, plus one dermatologist that
        // must never appear even though fewer than `limit` match overall
        let mut providers: Vec<Provider> = (0..5)
            .map(|i| create_provider(&format!("Cardio {}", i), "Cardiology", 40.0 + i as f64 * 0.01, -73.0))
            .collect();
        providers.push(create_provider("Derm", "Dermatology", 40.0, -73.0));

        let mut specialties = HashSet::new();
        specialties.insert("Cardiology".to_string());
        let criteria = FilterCriteria {
            name_query: None,
            specialties,
        };

        let outcome = ranker.rank(providers, Some(Coordinate::new(40.0, -73.0)), &criteria, 3);

        assert_eq!(outcome.results.len(), 3);
        assert_eq!(outcome.total_matches, 5);
        assert!(outcome
            .results
            .iter()
            .all(|r| r.provider.specialty == "Cardiology"));
    }

    #[test]
    fn test_truncates_to_limit() {
        let ranker = Ranker::new();
        let providers: Vec<Provider> = (0..50)
            .map(|i| {
                create_provider(
                    &format!("Provider {:02}", i),
                    "Cardiology",
                    40.0 + i as f64 * 0.001,
                    -73.0,
                )
            })
            .collect();

        let outcome = ranker.rank(
            providers,
            Some(Coordinate::new(40.0, -73.0)),
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(outcome.results.len(), DEFAULT_RESULT_LIMIT);
        assert_eq!(outcome.total_matches, 50);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let ranker = Ranker::new();
        let outcome = ranker.rank(
            vec![],
            Some(Coordinate::new(40.0, -73.0)),
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert!(outcome.results.is_empty());
        assert_eq!(outcome.total_matches, 0);
        assert_eq!(outcome.skipped_records, 0);
    }

    #[test]
    fn test_missing_coordinates_skipped_and_counted() {
        let ranker = Ranker::new();
        let providers = vec![
            create_provider("Ann Lee", "Cardiology", 40.0, -73.0),
            create_provider_without_coordinate("No Coords", "Cardiology"),
        ];

        let outcome = ranker.rank(
            providers,
            Some(Coordinate::new(40.0, -73.0)),
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.skipped_records, 1);
        assert_eq!(outcome.total_matches, 2);
    }

    #[test]
    fn test_missing_coordinates_eligible_alphabetically() {
        let ranker = Ranker::new();
        let providers = vec![
            create_provider("Bob Chen", "Dermatology", 40.1, -73.1),
            create_provider_without_coordinate("Ann Lee", "Cardiology"),
        ];

        let outcome = ranker.rank(
            providers,
            None,
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(outcome.results.len(), 2);
        assert_eq!(outcome.skipped_records, 0);
        assert_eq!(outcome.results[0].provider.name, "Ann Lee");
    }

    #[test]
    fn test_duplicates_preserved_independently() {
        let ranker = Ranker::new();
        let providers = vec![
            create_provider("Ann Lee", "Cardiology", 40.0, -73.0),
            create_provider("Ann Lee", "Cardiology", 40.0, -73.0),
        ];

        let outcome = ranker.rank(
            providers,
            Some(Coordinate::new(40.0, -73.0)),
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        assert_eq!(outcome.results.len(), 2);
    }

    #[test]
    fn test_distance_ties_keep_input_order() {
        let ranker = Ranker::new();
        let providers = vec![
            create_provider("Second", "Cardiology", 40.0, -73.1),
            create_provider("Third", "Cardiology", 40.0, -73.1),
            create_provider("First", "Cardiology", 40.0, -73.0),
        ];

        let outcome = ranker.rank(
            providers,
            Some(Coordinate::new(40.0, -73.0)),
            &FilterCriteria::default(),
            DEFAULT_RESULT_LIMIT,
        );

        let names: Vec<_> = outcome
            .results
            .iter()
            .map(|r| r.provider.name.as_str())
            .collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
