//! Request parameter validation
//!
//! Query parameters on the public endpoints are lenient: anything absent,
//! unparseable, or out of range falls back to a default instead of
//! rejecting the request.

use crate::types::Coordinates;

/// Default location used when no coordinates are supplied (Zaragoza).
pub const DEFAULT_LATITUDE: f64 = 41.6836;
pub const DEFAULT_LONGITUDE: f64 = -0.8881;

pub fn default_coordinates() -> Coordinates {
    Coordinates::new(DEFAULT_LATITUDE, DEFAULT_LONGITUDE)
}

/// Parse a latitude query value, defaulting when absent, unparseable, or
/// outside [-90, 90].
pub fn parse_latitude(raw: Option<&str>) -> f64 {
    parse_in_range(raw, -90.0, 90.0, DEFAULT_LATITUDE)
}

/// Parse a longitude query value, defaulting when absent, unparseable, or
/// outside [-180, 180].
pub fn parse_longitude(raw: Option<&str>) -> f64 {
    parse_in_range(raw, -180.0, 180.0, DEFAULT_LONGITUDE)
}

/// Resolve a coordinate pair from raw query values.
pub fn resolve_coordinates(lat: Option<&str>, lon: Option<&str>) -> Coordinates {
    Coordinates::new(parse_latitude(lat), parse_longitude(lon))
}

fn parse_in_range(raw: Option<&str>, min: f64, max: f64, default: f64) -> f64 {
    match raw.and_then(|s| s.trim().parse::<f64>().ok()) {
        Some(v) if v.is_finite() && v >= min && v <= max => v,
        _ => default,
    }
}
