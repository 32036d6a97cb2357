// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, FilterCriteria, Provider, RankMode, RankedProvider};
pub use requests::SearchRequest;
pub use responses::{ErrorResponse, HealthResponse, SearchResponse, SpecialtiesResponse};
