use crate::core::{specialty, Ranker};
use crate::models::{
    Coordinate, ErrorResponse, FilterCriteria, HealthResponse, RankMode, SearchRequest,
    SearchResponse, SpecialtiesResponse,
};
use crate::services::{GoogleGeocoder, ProviderStore};
use actix_web::{web, HttpResponse, Responder};
use std::collections::HashSet;
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProviderStore>,
    pub geocoder: Arc<GoogleGeocoder>,
    pub ranker: Ranker,
    pub default_limit: usize,
    pub max_limit: usize,
}

/// Configure all provider-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/providers/search", web::post().to(search_providers))
        .route("/providers/specialties", web::get().to(list_specialties));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.store.is_empty() {
        "degraded"
    } else {
        "healthy"
    };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Provider search endpoint
///
/// POST /api/v1/providers/search
///
/// Request body:
/// ```json
/// {
///   "address": "123 Main St, City, State",
///   "name": "smith",
///   "specialties": ["Cardiology"],
///   "specialtyGroups": ["Ortho"],
///   "limit": 20
/// }
/// ```
///
/// When an address is supplied and resolves, results are ranked by distance.
/// Any geocode failure falls back to alphabetical ranking and is reported in
/// the response rather than failing the query.
async fn search_providers(
    state: web::Data<AppState>,
    req: web::Json<SearchRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for search request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or(state.default_limit)
        .min(state.max_limit);

    let providers = state.store.providers();

    // Resolve requested groups into concrete dataset specialty values so the
    // filter stage stays exact set membership
    let mut specialties: HashSet<String> = req.specialties.iter().cloned().collect();
    specialties.extend(specialty::expand_groups(state.store.all(), &req.specialty_groups));

    let specialty_filter_requested =
        !req.specialties.is_empty() || !req.specialty_groups.is_empty();
    if specialty_filter_requested && specialties.is_empty() {
        // Requested groups match nothing in the dataset; an empty set would
        // mean "no filter", so answer directly
        return HttpResponse::Ok().json(SearchResponse {
            results: vec![],
            mode: RankMode::Alphabetical,
            ranked_by_distance: false,
            geocode_error: None,
            skipped_records: 0,
            total_matches: 0,
        });
    }

    let criteria = FilterCriteria {
        name_query: req
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        specialties,
    };

    // Geocode failures never fail the query: fall back to alphabetical mode
    // and tell the caller why
    let mut geocode_error = None;
    let client: Option<Coordinate> = match req.address.as_deref().map(str::trim) {
        Some(address) if !address.is_empty() => {
            match state.geocoder.geocode(address).await {
                Ok(coordinate) => Some(coordinate),
                Err(e) => {
                    tracing::warn!("Geocoding failed for '{}', falling back to alphabetical ranking: {}", address, e);
                    geocode_error = Some(e.to_string());
                    None
                }
            }
        }
        _ => None,
    };

    let outcome = state.ranker.rank(providers, client, &criteria, limit);

    tracing::info!(
        "Returning {} of {} matching providers (mode: {:?}, skipped: {})",
        outcome.results.len(),
        outcome.total_matches,
        outcome.mode,
        outcome.skipped_records
    );

    HttpResponse::Ok().json(SearchResponse {
        ranked_by_distance: outcome.mode == RankMode::Distance,
        results: outcome.results,
        mode: outcome.mode,
        geocode_error,
        skipped_records: outcome.skipped_records,
        total_matches: outcome.total_matches,
    })
}

/// List specialty values and curated group labels present in the dataset
///
/// GET /api/v1/providers/specialties
async fn list_specialties(state: web::Data<AppState>) -> impl Responder {
    let specialties = state.store.distinct_specialties();
    let groups = specialty::available_groups(state.store.all())
        .into_iter()
        .map(str::to_string)
        .collect();

    HttpResponse::Ok().json(SpecialtiesResponse {
        specialties,
        groups,
    })
}
