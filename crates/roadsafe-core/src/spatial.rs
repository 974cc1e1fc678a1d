//! Spatial math for route sampling and distance calculations.

use crate::models::GeoPoint;

/// Mean earth radius used by the spherical distance model.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two points in meters using Haversine formula.
///
/// This is the standard formula for calculating great-circle distance
/// between two points on a sphere given their latitudes and longitudes.
///
/// # Arguments
/// * `lat1`, `lon1` - First point coordinates in decimal degrees
/// * `lat2`, `lon2` - Second point coordinates in decimal degrees
///
/// # Returns
/// Distance in meters
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let a = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().atan2((1.0 - a).sqrt())
}

/// Great-circle distance between two points in meters.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    haversine_distance(a.latitude, a.longitude, b.latitude, b.longitude)
}

/// Total length of a polyline in meters.
pub fn route_length_m(route: &[GeoPoint]) -> f64 {
    route.windows(2).map(|pair| distance(&pair[0], &pair[1])).sum()
}

/// Degrees of latitude spanned by `meters` along a meridian.
pub fn meters_to_lat(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_M).to_degrees()
}
