// Service exports
pub mod dataset;
pub mod geocoder;

pub use dataset::{DatasetError, ProviderStore};
pub use geocoder::{GeocodeError, GoogleGeocoder};
