//! Provider Finder - proximity search service for medical providers
//!
//! This library provides the core ranking pipeline used by the Provider
//! Finder app: filter providers by name and specialty, rank them by
//! great-circle distance from a geocoded client address (or alphabetically
//! when no address resolves), and truncate to the result limit.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{distance::haversine_miles, Ranker, DEFAULT_RESULT_LIMIT};
pub use models::{
    Coordinate, FilterCriteria, Provider, RankMode, RankedProvider, SearchRequest, SearchResponse,
};
