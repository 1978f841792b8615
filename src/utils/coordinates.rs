use crate::error::{ProcessingError, Result};
use crate::utils::constants::{
    JERUSALEM_MAX_LAT, JERUSALEM_MAX_LON, JERUSALEM_MIN_LAT, JERUSALEM_MIN_LON,
};

/// Parse an optional decimal coordinate field.
///
/// Blank fields are absent; anything else must be a valid decimal number.
///
/// # Examples
/// ```
/// use shelter_links::utils::parse_optional_coordinate;
///
/// assert_eq!(parse_optional_coordinate(" 31.77 ").unwrap(), Some(31.77));
/// assert_eq!(parse_optional_coordinate("").unwrap(), None);
/// ```
pub fn parse_optional_coordinate(coord_str: &str) -> Result<Option<f64>> {
    let trimmed = coord_str.trim();

    if trimmed.is_empty() {
        return Ok(None);
    }

    trimmed.parse::<f64>().map(Some).map_err(|_| {
        ProcessingError::InvalidCoordinate(format!("Invalid coordinate value: '{}'", coord_str))
    })
}

/// Render degrees the way they appear in generated links: shortest
/// round-trip form, with integral values keeping one decimal place.
pub fn format_degrees(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Check whether a point lies inside the Jerusalem bounding box
pub fn is_within_jerusalem(latitude: f64, longitude: f64) -> bool {
    (JERUSALEM_MIN_LAT..=JERUSALEM_MAX_LAT).contains(&latitude)
        && (JERUSALEM_MIN_LON..=JERUSALEM_MAX_LON).contains(&longitude)
}

/// Calculate the distance between two points using the Haversine formula
pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    const EARTH_RADIUS_KM: f64 = 6371.0;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_KM * c
}

/// Format a distance in kilometres: metres below 1 km, otherwise two decimals
pub fn format_distance(distance_km: f64) -> String {
    if distance_km < 1.0 {
        format!("{} m", (distance_km * 1000.0).round() as i64)
    } else {
        format!("{:.2} km", distance_km)
    }
}

/// Format the time needed to cover `distance_km` at `speed_kmh`
pub fn format_travel_time(distance_km: f64, speed_kmh: f64) -> String {
    let minutes = (distance_km / speed_kmh * 60.0).round() as i64;

    if minutes < 1 {
        "< 1 min".to_string()
    } else {
        format!("{} min", minutes)
    }
}
