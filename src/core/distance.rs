use crate::models::Coordinate;

/// Earth's mean radius in statute miles
const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Calculate the Haversine (great-circle) distance between two points in miles
///
/// Great-circle distance is used rather than a planar approximation because
/// the inputs are real-world addresses. The metric is monotonic-consistent:
/// a truly closer point never yields a larger value.
///
/// # Arguments
/// * `lat1` - Latitude of first point in degrees
/// * `lon1` - Longitude of first point in degrees
/// * `lat2` - Latitude of second point in degrees
/// * `lon2` - Longitude of second point in degrees
///
/// # Returns
/// Distance in miles, always non-negative
#[inline]
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_MILES * c
}

/// Distance in miles between two coordinates
#[inline]
pub fn distance_between(a: &Coordinate, b: &Coordinate) -> f64 {
    haversine_miles(a.latitude, a.longitude, b.latitude, b.longitude)
}
